use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax breakdown for a single modeled year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearTaxSummary {
    pub year: i32,
    pub gross_income: Decimal,
    pub taxable_income: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub fica_tax: Decimal,
    pub total_tax: Decimal,
}

/// The full output of one aggregation.
///
/// Net worth is assets minus debts; the tax figures are informational and
/// never subtracted. `current` duplicates the latest modeled year from
/// `years` as the headline summary. Reports carry no timestamps or ids, so
/// identical inputs produce identical reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetWorthReport {
    pub total_assets: Decimal,
    pub total_debts: Decimal,
    pub net_worth: Decimal,

    /// Per-year breakdowns in ascending year order.
    pub years: Vec<YearTaxSummary>,

    /// The latest modeled year's breakdown.
    pub current: YearTaxSummary,
}

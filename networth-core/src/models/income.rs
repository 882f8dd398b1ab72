use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How an income stream is earned, which decides how its annual amount is
/// resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeType {
    Salary,
    Hourly,
}

/// A single income stream attributed to one tax year.
///
/// The detail fields are optional; when present they take precedence over
/// the flat `amount`:
///
/// - salary: `monthly_income × 12`, otherwise `amount` as a direct yearly
///   figure;
/// - hourly: `hourly_wage × hours_worked × 52`, otherwise `amount`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use networth_core::models::{IncomeRecord, IncomeType};
///
/// let salary = IncomeRecord {
///     income_type: IncomeType::Salary,
///     year: 2026,
///     amount: dec!(0),
///     monthly_income: Some(dec!(10000)),
///     hourly_wage: None,
///     hours_worked: None,
/// };
///
/// assert_eq!(salary.annual_amount(), dec!(120000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub income_type: IncomeType,
    pub year: i32,

    /// Direct yearly figure, used when no detail fields are set.
    pub amount: Decimal,

    /// Monthly salary; `None` means use `amount` directly.
    pub monthly_income: Option<Decimal>,

    /// Hourly wage; `None` means use `amount` directly.
    pub hourly_wage: Option<Decimal>,

    /// Hours worked per week; `None` means use `amount` directly.
    pub hours_worked: Option<Decimal>,
}

impl IncomeRecord {
    const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);
    const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

    /// Resolves the record to an annual amount, clamped to zero from below.
    pub fn annual_amount(&self) -> Decimal {
        let resolved = match self.income_type {
            IncomeType::Salary => match self.monthly_income {
                Some(monthly) => monthly * Self::MONTHS_PER_YEAR,
                None => self.amount,
            },
            IncomeType::Hourly => match (self.hourly_wage, self.hours_worked) {
                (Some(wage), Some(hours)) => wage * hours * Self::WEEKS_PER_YEAR,
                _ => self.amount,
            },
        };
        resolved.max(Decimal::ZERO)
    }
}

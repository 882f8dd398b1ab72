//! Net-worth aggregation.
//!
//! Turns an input snapshot (profile, incomes, holdings, debts, retirement
//! accounts) into a [`NetWorthReport`]: holdings valued with the cost-basis
//! fallback, debts floored at zero, and a federal/state/FICA tax breakdown
//! per modeled year. The aggregator is stateless; every call is a pure
//! function of its inputs apart from the price lookups it issues.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::round_half_up;
use crate::calculations::deductions::resolve_deductions;
use crate::calculations::progressive::ProgressiveTaxCalculator;
use crate::models::{
    Debt, Holding, IncomeRecord, NetWorthReport, RetirementAccount, TaxpayerProfile,
    YearTaxSummary,
};
use crate::pricing::PriceLookup;
use crate::schedules::{ScheduleError, ScheduleTable};

/// The tax years modeled when the caller does not name any.
pub const DEFAULT_MODELED_YEARS: [i32; 2] = [2025, 2026];

/// Fatal aggregation errors.
///
/// Price-lookup unavailability is not represented here; it is absorbed by
/// the cost-basis fallback. A fatal error aborts the whole computation, so
/// no partial report is ever returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Missing schedule for the requested filing status or jurisdiction.
    #[error(transparent)]
    Configuration(#[from] ScheduleError),

    /// Malformed input, rejected rather than silently corrected.
    #[error("invalid input: {0}")]
    Data(String),
}

/// Values holdings, sums debts, and merges per-year tax results into one
/// report.
///
/// Borrows a read-only [`ScheduleTable`] and a [`PriceLookup`]; owns no
/// state, so one aggregator can serve concurrent computations as long as
/// each call gets its own input snapshot.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use networth_core::calculations::NetWorthAggregator;
/// use networth_core::models::{
///     AssetType, FilingStatus, Holding, IncomeRecord, IncomeType, TaxpayerProfile, UsState,
/// };
/// use networth_core::pricing::StaticPriceBook;
/// use networth_core::schedules::ScheduleTable;
///
/// let profile = TaxpayerProfile {
///     filing_status: FilingStatus::Single,
///     state: UsState::Ca,
/// };
/// let incomes = vec![IncomeRecord {
///     income_type: IncomeType::Salary,
///     year: 2026,
///     amount: dec!(120000),
///     monthly_income: None,
///     hourly_wage: None,
///     hours_worked: None,
/// }];
/// let holdings = vec![Holding {
///     ticker: "CASH".into(),
///     quantity: dec!(25000),
///     cost_basis: dec!(1),
///     asset_type: AssetType::Cash,
///     retirement_account_id: None,
/// }];
///
/// let prices = StaticPriceBook::new();
/// let aggregator = NetWorthAggregator::new(ScheduleTable::builtin(), &prices);
/// let report = aggregator
///     .aggregate(&profile, &incomes, &holdings, &[], &[])
///     .unwrap();
///
/// assert_eq!(report.total_assets, dec!(25000));
/// assert_eq!(report.current.year, 2026);
/// ```
pub struct NetWorthAggregator<'a> {
    schedules: &'a ScheduleTable,
    prices: &'a dyn PriceLookup,
}

impl<'a> NetWorthAggregator<'a> {
    pub fn new(schedules: &'a ScheduleTable, prices: &'a dyn PriceLookup) -> Self {
        Self { schedules, prices }
    }

    /// Aggregates over [`DEFAULT_MODELED_YEARS`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] on malformed input or a missing schedule.
    pub fn aggregate(
        &self,
        profile: &TaxpayerProfile,
        incomes: &[IncomeRecord],
        holdings: &[Holding],
        debts: &[Debt],
        retirement_accounts: &[RetirementAccount],
    ) -> Result<NetWorthReport, EngineError> {
        self.aggregate_for_years(
            profile,
            incomes,
            holdings,
            debts,
            retirement_accounts,
            &DEFAULT_MODELED_YEARS,
        )
    }

    /// Aggregates over an explicit set of modeled years.
    ///
    /// Years are modeled in ascending order regardless of input order, and
    /// the latest year becomes the report's `current` summary.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Data`] for malformed input (negative amounts,
    /// no modeled years) and [`EngineError::Configuration`] when the
    /// schedule table has no entry for the profile's filing status or state.
    pub fn aggregate_for_years(
        &self,
        profile: &TaxpayerProfile,
        incomes: &[IncomeRecord],
        holdings: &[Holding],
        debts: &[Debt],
        retirement_accounts: &[RetirementAccount],
        years: &[i32],
    ) -> Result<NetWorthReport, EngineError> {
        validate_inputs(incomes, holdings, debts, retirement_accounts)?;
        if years.is_empty() {
            return Err(EngineError::Data("no modeled years given".to_string()));
        }

        // Resolve every schedule up front so a configuration gap aborts
        // before any valuation work.
        let federal = ProgressiveTaxCalculator::new(self.schedules.federal(profile.filing_status)?);
        let state = ProgressiveTaxCalculator::new(
            self.schedules.state(profile.state, profile.filing_status)?,
        );
        let fica = ProgressiveTaxCalculator::new(self.schedules.fica());

        let total_assets: Decimal = holdings
            .iter()
            .map(|holding| self.value_holding(holding))
            .sum();
        let total_debts: Decimal = debts.iter().map(Debt::remaining_balance).sum();

        let mut modeled_years: Vec<i32> = years.to_vec();
        modeled_years.sort_unstable();
        modeled_years.dedup();

        let mut summaries = Vec::with_capacity(modeled_years.len());
        for year in modeled_years {
            let gross_income: Decimal = incomes
                .iter()
                .filter(|income| income.year == year)
                .map(IncomeRecord::annual_amount)
                .sum();
            let deductions = resolve_deductions(retirement_accounts, year);
            let taxable_income = (gross_income - deductions).max(Decimal::ZERO);

            let federal_tax = federal.tax_for(taxable_income);
            let state_tax = state.tax_for(taxable_income);
            // FICA runs on gross: retirement deductions never shrink the
            // payroll base.
            let fica_tax = fica.tax_for(gross_income);

            debug!(
                year,
                %gross_income,
                %taxable_income,
                %federal_tax,
                %state_tax,
                %fica_tax,
                "computed year tax breakdown"
            );

            summaries.push(YearTaxSummary {
                year,
                gross_income,
                taxable_income,
                federal_tax,
                state_tax,
                fica_tax,
                total_tax: federal_tax + state_tax + fica_tax,
            });
        }

        let current = summaries
            .last()
            .cloned()
            .ok_or_else(|| EngineError::Data("no modeled years given".to_string()))?;

        Ok(NetWorthReport {
            total_assets,
            total_debts,
            net_worth: total_assets - total_debts,
            years: summaries,
            current,
        })
    }

    /// Values one holding, independently of every other holding.
    ///
    /// Declared-value categories use the quantity field as the dollar value.
    /// Tradable holdings use a market quote when one is available and
    /// strictly positive; otherwise the holding falls back to its cost
    /// basis, unchanged. Unavailability is recovered here and never becomes
    /// an error.
    fn value_holding(&self, holding: &Holding) -> Decimal {
        if !holding.asset_type.is_tradable() {
            return holding.quantity;
        }

        match self.prices.get_price(&holding.ticker) {
            Some(price) if price > Decimal::ZERO => round_half_up(price * holding.quantity),
            quote => {
                warn!(
                    ticker = %holding.ticker,
                    ?quote,
                    "price unavailable, valuing holding at cost basis"
                );
                holding.cost_basis
            }
        }
    }
}

fn validate_inputs(
    incomes: &[IncomeRecord],
    holdings: &[Holding],
    debts: &[Debt],
    retirement_accounts: &[RetirementAccount],
) -> Result<(), EngineError> {
    for income in incomes {
        let negative_detail = [income.monthly_income, income.hourly_wage, income.hours_worked]
            .into_iter()
            .flatten()
            .any(|value| value < Decimal::ZERO);
        if negative_detail {
            return Err(EngineError::Data(format!(
                "income record for year {} has a negative detail field",
                income.year
            )));
        }
    }
    for holding in holdings {
        if holding.quantity < Decimal::ZERO || holding.cost_basis < Decimal::ZERO {
            return Err(EngineError::Data(format!(
                "holding {} has a negative quantity or cost basis",
                holding.ticker
            )));
        }
    }
    for debt in debts {
        if debt.initial_amount < Decimal::ZERO || debt.amount_paid < Decimal::ZERO {
            return Err(EngineError::Data(format!(
                "debt {} has a negative amount",
                debt.name
            )));
        }
    }
    for account in retirement_accounts {
        if account.contributions.values().any(|amount| *amount < Decimal::ZERO) {
            return Err(EngineError::Data(format!(
                "retirement account {} has a negative contribution",
                account.id
            )));
        }
    }
    Ok(())
}

//! Marginal-rate tax integration over a bracket schedule.
//!
//! Tax is accumulated slice by slice: the income falling between one bracket
//! bound and the next is taxed at that bracket's rate. The resulting
//! function of income is continuous and non-decreasing, with a slope change
//! exactly at each bracket boundary and zero tax at zero income.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::schedules::TaxBracketSchedule;

/// Applies one bracket schedule to income figures.
///
/// The schedule's standard deduction is subtracted (floored at zero) before
/// the bracket walk, and its surtax, when present, is added as a flat charge
/// on the excess over the surtax threshold rather than as an extra marginal
/// tier.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use networth_core::calculations::ProgressiveTaxCalculator;
/// use networth_core::models::FilingStatus;
/// use networth_core::schedules::ScheduleTable;
///
/// let schedule = ScheduleTable::builtin()
///     .federal(FilingStatus::Single)
///     .unwrap();
/// let calculator = ProgressiveTaxCalculator::new(schedule);
///
/// // 120000 gross, 16100 standard deduction: 103900 taxable.
/// // 12400 * 0.10 + 38000 * 0.12 + 53500 * 0.22 = 17570
/// assert_eq!(calculator.tax_for(dec!(120000)), dec!(17570.00));
/// ```
#[derive(Debug, Clone)]
pub struct ProgressiveTaxCalculator<'a> {
    schedule: &'a TaxBracketSchedule,
}

impl<'a> ProgressiveTaxCalculator<'a> {
    /// Creates a calculator over a schedule that has already passed
    /// [`TaxBracketSchedule::validate`] (schedules held by a
    /// `ScheduleTable` always have).
    pub fn new(schedule: &'a TaxBracketSchedule) -> Self {
        Self { schedule }
    }

    /// Tax owed on `income` under this schedule, rounded to cents.
    ///
    /// `income` is the figure before the schedule's standard deduction;
    /// negative input is treated as zero.
    pub fn tax_for(&self, income: Decimal) -> Decimal {
        let taxable = (income.max(Decimal::ZERO) - self.schedule.standard_deduction)
            .max(Decimal::ZERO);

        let mut tax = Decimal::ZERO;
        let mut previous_limit = Decimal::ZERO;
        for bracket in &self.schedule.brackets {
            if taxable <= previous_limit {
                break;
            }
            match bracket.up_to {
                Some(limit) if taxable > limit => {
                    tax += (limit - previous_limit) * bracket.rate;
                    previous_limit = limit;
                }
                _ => {
                    tax += (taxable - previous_limit) * bracket.rate;
                    break;
                }
            }
        }

        if let Some(surtax) = &self.schedule.surtax {
            if taxable > surtax.threshold {
                tax += (taxable - surtax.threshold) * surtax.rate;
            }
        }

        round_half_up(tax)
    }
}

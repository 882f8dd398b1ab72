//! Versioned bracket-schedule tables.
//!
//! A [`ScheduleTable`] maps (filing status × jurisdiction) to a validated
//! [`TaxBracketSchedule`]. Tables are immutable once built and safe to share
//! read-only across concurrent computations; [`ScheduleTable::builtin`]
//! exposes the published tables loaded once at process start.
//!
//! A missing schedule is a configuration gap and surfaces as a
//! [`ScheduleError`], never as a silent zero-tax default.

mod builtin;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FilingStatus, Jurisdiction, UsState};

/// Errors raised by schedule lookup and validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// No schedules are published for the requested state.
    #[error("no tax schedule published for state {}", .0.as_str())]
    UnsupportedJurisdiction(UsState),

    /// The jurisdiction exists but has no schedule for this filing status.
    #[error("no {} schedule published for {}", .filing_status.as_str(), .jurisdiction.as_str())]
    UnsupportedFilingStatus {
        jurisdiction: Jurisdiction,
        filing_status: FilingStatus,
    },

    /// A schedule must contain at least one bracket.
    #[error("schedule has no brackets")]
    EmptySchedule,

    /// Bracket upper bounds must be strictly increasing.
    #[error("bracket bounds must be strictly increasing (violated at index {0})")]
    UnorderedBrackets(usize),

    /// Only the final bracket may omit its upper bound.
    #[error("bracket {0} is unbounded but is not the final bracket")]
    EarlyUnboundedBracket(usize),

    /// The final bracket must be unbounded so brackets partition [0, ∞).
    #[error("final bracket must be unbounded")]
    MissingUnboundedBracket,

    /// Rates are fractions of income.
    #[error("bracket rate {0} is outside [0, 1]")]
    InvalidRate(Decimal),

    /// Standard deductions cannot be negative.
    #[error("standard deduction must be non-negative, got {0}")]
    NegativeDeduction(Decimal),

    /// Surtax parameters must be a non-negative threshold and a rate in [0, 1].
    #[error("invalid surtax: threshold {threshold}, rate {rate}")]
    InvalidSurtax { threshold: Decimal, rate: Decimal },
}

/// One marginal tier: income up to `up_to` (exclusive of lower tiers) is
/// taxed at `rate`. `up_to` of `None` marks the unbounded final tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub rate: Decimal,
    pub up_to: Option<Decimal>,
}

/// A flat additive surtax charged on income above `threshold`.
///
/// This is applied to the excess as a whole, not appended as an extra
/// marginal bracket; California's mental-health services tax is modeled
/// this way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surtax {
    pub threshold: Decimal,
    pub rate: Decimal,
}

/// An ordered set of marginal brackets plus the standard deduction applied
/// before them, and an optional surtax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracketSchedule {
    pub standard_deduction: Decimal,
    pub brackets: Vec<TaxBracket>,
    pub surtax: Option<Surtax>,
}

impl TaxBracketSchedule {
    /// Checks the progressivity invariants: brackets are non-empty, strictly
    /// increasing, end in exactly one unbounded tier, and all rates and the
    /// deduction are in range.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScheduleError`] invariant violation found.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.brackets.is_empty() {
            return Err(ScheduleError::EmptySchedule);
        }
        if self.standard_deduction < Decimal::ZERO {
            return Err(ScheduleError::NegativeDeduction(self.standard_deduction));
        }

        let last = self.brackets.len() - 1;
        let mut previous_limit = Decimal::ZERO;
        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(ScheduleError::InvalidRate(bracket.rate));
            }
            match bracket.up_to {
                Some(limit) => {
                    if index == last {
                        return Err(ScheduleError::MissingUnboundedBracket);
                    }
                    if index > 0 && limit <= previous_limit {
                        return Err(ScheduleError::UnorderedBrackets(index));
                    }
                    if index == 0 && limit <= Decimal::ZERO {
                        return Err(ScheduleError::UnorderedBrackets(index));
                    }
                    previous_limit = limit;
                }
                None => {
                    if index != last {
                        return Err(ScheduleError::EarlyUnboundedBracket(index));
                    }
                }
            }
        }

        if let Some(surtax) = &self.surtax {
            if surtax.threshold < Decimal::ZERO
                || surtax.rate < Decimal::ZERO
                || surtax.rate > Decimal::ONE
            {
                return Err(ScheduleError::InvalidSurtax {
                    threshold: surtax.threshold,
                    rate: surtax.rate,
                });
            }
        }

        Ok(())
    }
}

/// The full set of published schedules for one table version.
///
/// Both modeled years share a single published table set; `tax_year` is the
/// version stamp of the figures it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTable {
    tax_year: i32,
    federal: BTreeMap<FilingStatus, TaxBracketSchedule>,
    state: BTreeMap<(UsState, FilingStatus), TaxBracketSchedule>,
    fica: TaxBracketSchedule,
}

impl ScheduleTable {
    /// Creates an empty table stamped with `tax_year`, carrying the given
    /// FICA schedule.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] if the FICA schedule fails validation.
    pub fn new(tax_year: i32, fica: TaxBracketSchedule) -> Result<Self, ScheduleError> {
        fica.validate()?;
        Ok(Self {
            tax_year,
            federal: BTreeMap::new(),
            state: BTreeMap::new(),
            fica,
        })
    }

    /// The published tables this engine ships with (2026 figures).
    pub fn builtin() -> &'static ScheduleTable {
        builtin::table()
    }

    /// The version stamp of the published figures.
    pub fn tax_year(&self) -> i32 {
        self.tax_year
    }

    /// Adds a federal schedule, validating it first.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] if the schedule fails validation.
    pub fn insert_federal(
        &mut self,
        filing_status: FilingStatus,
        schedule: TaxBracketSchedule,
    ) -> Result<(), ScheduleError> {
        schedule.validate()?;
        self.federal.insert(filing_status, schedule);
        Ok(())
    }

    /// Adds a state schedule, validating it first.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] if the schedule fails validation.
    pub fn insert_state(
        &mut self,
        state: UsState,
        filing_status: FilingStatus,
        schedule: TaxBracketSchedule,
    ) -> Result<(), ScheduleError> {
        schedule.validate()?;
        self.state.insert((state, filing_status), schedule);
        Ok(())
    }

    /// Looks up the federal schedule for a filing status.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::UnsupportedFilingStatus`] when the status has
    /// no published federal schedule.
    pub fn federal(
        &self,
        filing_status: FilingStatus,
    ) -> Result<&TaxBracketSchedule, ScheduleError> {
        self.federal
            .get(&filing_status)
            .ok_or(ScheduleError::UnsupportedFilingStatus {
                jurisdiction: Jurisdiction::Federal,
                filing_status,
            })
    }

    /// Looks up a state schedule for a filing status.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::UnsupportedJurisdiction`] when the state has
    /// no schedules at all, or [`ScheduleError::UnsupportedFilingStatus`]
    /// when the state is known but the status is not.
    pub fn state(
        &self,
        state: UsState,
        filing_status: FilingStatus,
    ) -> Result<&TaxBracketSchedule, ScheduleError> {
        if let Some(schedule) = self.state.get(&(state, filing_status)) {
            return Ok(schedule);
        }
        if self.state.keys().any(|(known, _)| *known == state) {
            Err(ScheduleError::UnsupportedFilingStatus {
                jurisdiction: Jurisdiction::State(state),
                filing_status,
            })
        } else {
            Err(ScheduleError::UnsupportedJurisdiction(state))
        }
    }

    /// The FICA schedule: a flat, uncapped payroll rate on gross income.
    pub fn fica(&self) -> &TaxBracketSchedule {
        &self.fica
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn flat_schedule(rate: Decimal) -> TaxBracketSchedule {
        TaxBracketSchedule {
            standard_deduction: Decimal::ZERO,
            brackets: vec![TaxBracket { rate, up_to: None }],
            surtax: None,
        }
    }

    fn two_tier_schedule() -> TaxBracketSchedule {
        TaxBracketSchedule {
            standard_deduction: dec!(10000),
            brackets: vec![
                TaxBracket { rate: dec!(0.10), up_to: Some(dec!(50000)) },
                TaxBracket { rate: dec!(0.20), up_to: None },
            ],
            surtax: None,
        }
    }

    #[test]
    fn validate_accepts_well_formed_schedule() {
        assert_eq!(two_tier_schedule().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_schedule() {
        let schedule = TaxBracketSchedule {
            standard_deduction: Decimal::ZERO,
            brackets: vec![],
            surtax: None,
        };

        assert_eq!(schedule.validate(), Err(ScheduleError::EmptySchedule));
    }

    #[test]
    fn validate_rejects_bounded_final_bracket() {
        let schedule = TaxBracketSchedule {
            standard_deduction: Decimal::ZERO,
            brackets: vec![
                TaxBracket { rate: dec!(0.10), up_to: Some(dec!(50000)) },
                TaxBracket { rate: dec!(0.20), up_to: Some(dec!(90000)) },
            ],
            surtax: None,
        };

        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::MissingUnboundedBracket)
        );
    }

    #[test]
    fn validate_rejects_unordered_bounds() {
        let schedule = TaxBracketSchedule {
            standard_deduction: Decimal::ZERO,
            brackets: vec![
                TaxBracket { rate: dec!(0.10), up_to: Some(dec!(50000)) },
                TaxBracket { rate: dec!(0.12), up_to: Some(dec!(40000)) },
                TaxBracket { rate: dec!(0.20), up_to: None },
            ],
            surtax: None,
        };

        assert_eq!(schedule.validate(), Err(ScheduleError::UnorderedBrackets(1)));
    }

    #[test]
    fn validate_rejects_unbounded_middle_bracket() {
        let schedule = TaxBracketSchedule {
            standard_deduction: Decimal::ZERO,
            brackets: vec![
                TaxBracket { rate: dec!(0.10), up_to: None },
                TaxBracket { rate: dec!(0.20), up_to: None },
            ],
            surtax: None,
        };

        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::EarlyUnboundedBracket(0))
        );
    }

    #[test]
    fn validate_rejects_out_of_range_rate() {
        let schedule = flat_schedule(dec!(1.5));

        assert_eq!(schedule.validate(), Err(ScheduleError::InvalidRate(dec!(1.5))));
    }

    #[test]
    fn validate_rejects_negative_deduction() {
        let mut schedule = flat_schedule(dec!(0.10));
        schedule.standard_deduction = dec!(-1);

        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::NegativeDeduction(dec!(-1)))
        );
    }

    #[test]
    fn validate_rejects_invalid_surtax() {
        let mut schedule = two_tier_schedule();
        schedule.surtax = Some(Surtax { threshold: dec!(1000000), rate: dec!(2) });

        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::InvalidSurtax {
                threshold: dec!(1000000),
                rate: dec!(2),
            })
        );
    }

    #[test]
    fn federal_lookup_errors_for_missing_status() {
        let table = ScheduleTable::builtin();

        let result = table.federal(FilingStatus::MarriedFilingJointly);

        assert_eq!(
            result,
            Err(ScheduleError::UnsupportedFilingStatus {
                jurisdiction: Jurisdiction::Federal,
                filing_status: FilingStatus::MarriedFilingJointly,
            })
        );
    }

    #[test]
    fn state_lookup_errors_for_unknown_state() {
        let table = ScheduleTable::builtin();

        let result = table.state(UsState::Tx, FilingStatus::Single);

        assert_eq!(result, Err(ScheduleError::UnsupportedJurisdiction(UsState::Tx)));
    }

    #[test]
    fn state_lookup_errors_for_known_state_missing_status() {
        let table = ScheduleTable::builtin();

        let result = table.state(UsState::Ca, FilingStatus::HeadOfHousehold);

        assert_eq!(
            result,
            Err(ScheduleError::UnsupportedFilingStatus {
                jurisdiction: Jurisdiction::State(UsState::Ca),
                filing_status: FilingStatus::HeadOfHousehold,
            })
        );
    }

    #[test]
    fn insert_rejects_invalid_schedule() {
        let mut table = ScheduleTable::new(2026, flat_schedule(dec!(0.0765))).unwrap();

        let result = table.insert_federal(FilingStatus::Single, flat_schedule(dec!(-0.1)));

        assert_eq!(result, Err(ScheduleError::InvalidRate(dec!(-0.1))));
    }
}

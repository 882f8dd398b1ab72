//! The published 2026 bracket tables.
//!
//! Single-filer federal and California schedules plus the flat FICA rate.
//! Remaining filing statuses and states are added as their figures are
//! published; looking one up before then is a configuration error, not a
//! zero.

use std::sync::LazyLock;

use rust_decimal_macros::dec;

use crate::models::{FilingStatus, UsState};
use crate::schedules::{ScheduleTable, Surtax, TaxBracket, TaxBracketSchedule};

const TABLE_YEAR: i32 = 2026;

static TABLE: LazyLock<ScheduleTable> = LazyLock::new(|| {
    let mut table = ScheduleTable::new(TABLE_YEAR, fica_schedule())
        .expect("builtin FICA schedule is valid");
    table
        .insert_federal(FilingStatus::Single, federal_single())
        .expect("builtin federal schedule is valid");
    table
        .insert_state(UsState::Ca, FilingStatus::Single, california_single())
        .expect("builtin CA schedule is valid");
    table
});

pub(crate) fn table() -> &'static ScheduleTable {
    &TABLE
}

fn federal_single() -> TaxBracketSchedule {
    TaxBracketSchedule {
        standard_deduction: dec!(16100),
        brackets: vec![
            TaxBracket { rate: dec!(0.10), up_to: Some(dec!(12400)) },
            TaxBracket { rate: dec!(0.12), up_to: Some(dec!(50400)) },
            TaxBracket { rate: dec!(0.22), up_to: Some(dec!(105700)) },
            TaxBracket { rate: dec!(0.24), up_to: Some(dec!(201775)) },
            TaxBracket { rate: dec!(0.32), up_to: Some(dec!(256225)) },
            TaxBracket { rate: dec!(0.35), up_to: Some(dec!(640600)) },
            TaxBracket { rate: dec!(0.37), up_to: None },
        ],
        surtax: None,
    }
}

fn california_single() -> TaxBracketSchedule {
    TaxBracketSchedule {
        standard_deduction: dec!(5706),
        brackets: vec![
            TaxBracket { rate: dec!(0.01), up_to: Some(dec!(11079)) },
            TaxBracket { rate: dec!(0.02), up_to: Some(dec!(26264)) },
            TaxBracket { rate: dec!(0.04), up_to: Some(dec!(41452)) },
            TaxBracket { rate: dec!(0.06), up_to: Some(dec!(57542)) },
            TaxBracket { rate: dec!(0.08), up_to: Some(dec!(72724)) },
            TaxBracket { rate: dec!(0.093), up_to: Some(dec!(371479)) },
            TaxBracket { rate: dec!(0.103), up_to: Some(dec!(445771)) },
            TaxBracket { rate: dec!(0.113), up_to: Some(dec!(742953)) },
            TaxBracket { rate: dec!(0.123), up_to: None },
        ],
        // Mental-health services tax: 1% of taxable income above $1M.
        surtax: Some(Surtax {
            threshold: dec!(1000000),
            rate: dec!(0.01),
        }),
    }
}

/// Combined employee social security + medicare rate, applied to gross
/// income with no wage-base cap (known simplification).
fn fica_schedule() -> TaxBracketSchedule {
    TaxBracketSchedule {
        standard_deduction: dec!(0),
        brackets: vec![TaxBracket { rate: dec!(0.0765), up_to: None }],
        surtax: None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_table_is_stamped_2026() {
        assert_eq!(table().tax_year(), 2026);
    }

    #[test]
    fn builtin_schedules_pass_validation() {
        assert_eq!(federal_single().validate(), Ok(()));
        assert_eq!(california_single().validate(), Ok(()));
        assert_eq!(fica_schedule().validate(), Ok(()));
    }

    #[test]
    fn builtin_lookups_succeed_for_published_entries() {
        let table = table();

        assert!(table.federal(FilingStatus::Single).is_ok());
        assert!(table.state(UsState::Ca, FilingStatus::Single).is_ok());
    }
}

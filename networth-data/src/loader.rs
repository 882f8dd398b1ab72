use std::collections::BTreeMap;
use std::io::Read;

use networth_core::models::{FilingStatus, Jurisdiction, UsState};
use networth_core::schedules::{
    ScheduleError, ScheduleTable, Surtax, TaxBracket, TaxBracketSchedule,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading schedule data.
#[derive(Debug, Error)]
pub enum ScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("no schedule records in input")]
    NoRecords,

    #[error("jurisdiction '{0}' is neither 'federal' nor a state postal code")]
    UnknownJurisdiction(String),

    #[error("unknown filing status '{0}'")]
    UnknownFilingStatus(String),

    #[error("records mix tax years {0} and {1}; one file per table version")]
    MixedTaxYears(i32, i32),

    #[error("schedule {jurisdiction}/{filing_status} has inconsistent deduction or surtax fields")]
    InconsistentSchedule {
        jurisdiction: String,
        filing_status: String,
    },

    #[error("invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),
}

impl From<csv::Error> for ScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        ScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single bracket row from a schedule CSV file.
///
/// Columns:
/// - `tax_year`: the table version stamp (one per file)
/// - `jurisdiction`: `federal` or a two-letter state postal code
/// - `filing_status`: e.g. `single`, `married_filing_jointly`
/// - `standard_deduction`: flat deduction, repeated on every row of a schedule
/// - `up_to`: the bracket's upper bound (empty for the unbounded top tier)
/// - `rate`: marginal rate as a decimal (e.g. 0.10)
/// - `surtax_threshold`, `surtax_rate`: optional, repeated when present
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScheduleRecord {
    pub tax_year: i32,
    pub jurisdiction: String,
    pub filing_status: String,
    pub standard_deduction: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub up_to: Option<Decimal>,
    pub rate: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub surtax_threshold: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub surtax_rate: Option<Decimal>,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn parse_jurisdiction(s: &str) -> Result<Jurisdiction, ScheduleLoaderError> {
    if s == "federal" {
        return Ok(Jurisdiction::Federal);
    }
    UsState::parse(s)
        .map(Jurisdiction::State)
        .ok_or_else(|| ScheduleLoaderError::UnknownJurisdiction(s.to_string()))
}

/// Loader for bracket schedule tables from CSV files.
///
/// The parsed rows are grouped by (jurisdiction, filing status) and
/// assembled into a validated [`ScheduleTable`], the engine's immutable
/// process-start configuration.
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Parse schedule records from a CSV reader.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleLoaderError::CsvParse`] for malformed CSV.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ScheduleRecord>, ScheduleLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: ScheduleRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Assemble parsed records into a [`ScheduleTable`] carrying the given
    /// FICA schedule.
    ///
    /// All records must share one tax year, and every row of a schedule must
    /// repeat the same deduction and surtax fields. Brackets are ordered by
    /// upper bound with the unbounded tier last, then validated on insert.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleLoaderError`] for empty input, unknown
    /// jurisdiction or filing-status codes, mixed tax years, inconsistent
    /// per-schedule fields, or a schedule failing validation.
    pub fn build_table(
        records: &[ScheduleRecord],
        fica: TaxBracketSchedule,
    ) -> Result<ScheduleTable, ScheduleLoaderError> {
        let first = records.first().ok_or(ScheduleLoaderError::NoRecords)?;
        let tax_year = first.tax_year;

        let mut groups: BTreeMap<(String, String), Vec<&ScheduleRecord>> = BTreeMap::new();
        for record in records {
            if record.tax_year != tax_year {
                return Err(ScheduleLoaderError::MixedTaxYears(tax_year, record.tax_year));
            }
            groups
                .entry((record.jurisdiction.clone(), record.filing_status.clone()))
                .or_default()
                .push(record);
        }

        let mut table = ScheduleTable::new(tax_year, fica)?;
        for ((jurisdiction, filing_status), rows) in groups {
            let status = FilingStatus::parse(&filing_status)
                .ok_or_else(|| ScheduleLoaderError::UnknownFilingStatus(filing_status.clone()))?;
            let schedule = assemble_schedule(&jurisdiction, &filing_status, &rows)?;

            match parse_jurisdiction(&jurisdiction)? {
                Jurisdiction::Federal => table.insert_federal(status, schedule)?,
                Jurisdiction::State(state) => table.insert_state(state, status, schedule)?,
            }
        }

        Ok(table)
    }
}

fn assemble_schedule(
    jurisdiction: &str,
    filing_status: &str,
    rows: &[&ScheduleRecord],
) -> Result<TaxBracketSchedule, ScheduleLoaderError> {
    let first = rows[0];
    let consistent = rows.iter().all(|row| {
        row.standard_deduction == first.standard_deduction
            && row.surtax_threshold == first.surtax_threshold
            && row.surtax_rate == first.surtax_rate
    });
    if !consistent {
        return Err(ScheduleLoaderError::InconsistentSchedule {
            jurisdiction: jurisdiction.to_string(),
            filing_status: filing_status.to_string(),
        });
    }

    let surtax = match (first.surtax_threshold, first.surtax_rate) {
        (Some(threshold), Some(rate)) => Some(Surtax { threshold, rate }),
        (None, None) => None,
        _ => {
            return Err(ScheduleLoaderError::InconsistentSchedule {
                jurisdiction: jurisdiction.to_string(),
                filing_status: filing_status.to_string(),
            });
        }
    };

    let mut brackets: Vec<TaxBracket> = rows
        .iter()
        .map(|row| TaxBracket { rate: row.rate, up_to: row.up_to })
        .collect();
    // Unbounded top tier sorts last; validation catches duplicates.
    brackets.sort_by(|a, b| match (a.up_to, b.up_to) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    Ok(TaxBracketSchedule {
        standard_deduction: first.standard_deduction,
        brackets,
        surtax,
    })
}

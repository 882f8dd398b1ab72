use std::collections::BTreeMap;
use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use networth_core::schedules::ScheduleTable;
use networth_data::ScheduleLoader;
use tracing_subscriber::EnvFilter;

/// Parse and validate a bracket-schedule CSV file.
///
/// The CSV file should have the following columns:
/// - tax_year: the table version stamp (one per file)
/// - jurisdiction: 'federal' or a two-letter state postal code
/// - filing_status: e.g. 'single', 'married_filing_jointly'
/// - standard_deduction: repeated on every row of a schedule
/// - up_to: the bracket upper bound (empty for the unbounded top tier)
/// - rate: the marginal rate as a decimal (e.g. 0.10)
/// - surtax_threshold, surtax_rate: optional, repeated when present
#[derive(Parser, Debug)]
#[command(name = "networth-schedule-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing bracket schedule data
    #[arg(short, long)]
    file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("Loading schedules from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = ScheduleLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    println!("Parsed {} bracket rows from CSV", records.len());

    let fica = ScheduleTable::builtin().fica().clone();
    let table = ScheduleLoader::build_table(&records, fica)
        .context("Failed to assemble a valid schedule table")?;

    let mut bracket_counts: BTreeMap<(String, String), usize> = BTreeMap::new();
    for record in &records {
        *bracket_counts
            .entry((record.jurisdiction.clone(), record.filing_status.clone()))
            .or_default() += 1;
    }

    println!("Schedule table version: {}", table.tax_year());
    for ((jurisdiction, filing_status), count) in bracket_counts {
        println!("  {jurisdiction}/{filing_status}: {count} brackets");
    }

    Ok(())
}

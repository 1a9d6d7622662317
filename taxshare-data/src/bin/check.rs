use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use taxshare_data::{ReferenceData, ReferenceDataLoader};
use tracing_subscriber::EnvFilter;

/// Validate a reference data directory and print a summary of its tables.
///
/// The directory must contain:
/// - rates.toml: tax year, fiscal year, revenue totals, deductions, payroll rates
/// - brackets.csv: tax_year, filing_status, upper_bound, rate
/// - categories.csv: key, name, tax_source, budget_pool, revenue_pool,
///   income_share, fica_share, description
/// - comparisons.csv: threshold_max, template
///
/// Without `--dir` the bundled 2024 snapshot is checked.
#[derive(Parser, Debug)]
#[command(name = "taxshare-data-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the reference files
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Also list every funding category
    #[arg(short, long, default_value_t = false)]
    categories: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let data = match &args.dir {
        Some(dir) => {
            println!("Checking reference data in: {}", dir.display());
            ReferenceDataLoader::from_dir(dir)
                .with_context(|| format!("Invalid reference data in: {}", dir.display()))?
        }
        None => {
            println!("Checking bundled reference data");
            ReferenceData::bundled().context("Bundled reference data is invalid")?
        }
    };

    println!("{data}");

    if args.categories {
        for category in data.budget.categories.values() {
            println!(
                "  {:<16} {:<28} {}",
                category.key,
                category.name,
                category.tax_source.label()
            );
        }
    }

    println!("Reference data OK.");

    Ok(())
}

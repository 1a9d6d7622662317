use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use taxshare_cli::cli::{Cli, Command, ShareArgs, TaxArgs};
use taxshare_cli::config::Config;
use taxshare_cli::logging::{self, LogSettings, Logging};
use taxshare_cli::report::{CategoryList, ShareReport, TaxReport};
use taxshare_core::ShareCalculationInput;
use taxshare_data::{ReferenceData, ReferenceDataLoader};

// ─── setup ───────────────────────────────────────────────────────────────────

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            Config::from_toml_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

fn apply_logging(
    logging: &Logging,
    cli: &Cli,
    config: &Config,
) -> anyhow::Result<()> {
    let settings = LogSettings::resolve(cli, &config.logging, logging::rust_log_is_set());
    debug!(?settings, "applying logging settings");
    logging
        .apply(&settings)
        .context("Failed to apply logging settings")
}

fn load_reference_data(dir: Option<&Path>) -> anyhow::Result<ReferenceData> {
    match dir {
        Some(dir) => ReferenceDataLoader::from_dir(dir)
            .with_context(|| format!("Failed to load reference data from: {}", dir.display())),
        None => {
            debug!("using bundled reference data");
            ReferenceData::bundled().context("Bundled reference data is invalid")
        }
    }
}

// ─── commands ────────────────────────────────────────────────────────────────

fn run_share(
    args: &ShareArgs,
    config: &Config,
    data: &ReferenceData,
) -> anyhow::Result<()> {
    let input = ShareCalculationInput {
        contribution: args.contribution(config.filing_status(args.filing_status)),
        spending_amount: args.spending,
        category: args.category.clone(),
    };
    debug!(?input, "running share calculation");

    let result = data
        .calculation()
        .calculate(&input)
        .with_context(|| format!("Failed to calculate share for '{}'", args.category))?;

    println!("{}", ShareReport(&result));
    Ok(())
}

fn run_tax(
    args: &TaxArgs,
    config: &Config,
    data: &ReferenceData,
) {
    let filing_status = config.filing_status(args.filing_status);
    let calculator = data.tax_calculator();

    let report = TaxReport {
        tax_year: calculator.tax_year(),
        gross_income: args.income,
        filing_status,
        standard_deduction: data.tax_year.standard_deduction(filing_status),
        liability: calculator.liability(args.income, filing_status),
    };

    println!("{report}");
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logging = Logging::init().context("Failed to initialize logging")?;
    let config = load_config(&cli)?;
    apply_logging(&logging, &cli, &config)?;

    let data = load_reference_data(config.data_dir(cli.data_dir.as_deref()).as_deref())?;

    match &cli.command {
        Command::Share(args) => run_share(args, &config, &data)?,
        Command::Tax(args) => run_tax(args, &config, &data),
        Command::Categories => print!("{}", CategoryList(&data.budget)),
    }

    Ok(())
}

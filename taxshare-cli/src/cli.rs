use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use taxshare_core::{Contribution, FilingStatus};

use crate::utils::{parse_amount, parse_income};

/// Your proportional share of federal spending.
///
/// Estimates your federal income and payroll tax, then works out how much of
/// a spending figure your taxes paid for.
#[derive(Debug, Parser)]
#[command(name = "taxshare", version, about, long_about = None)]
pub struct Cli {
    /// TOML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `taxshare_core=trace`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Reference data directory. The bundled 2024 snapshot is used by default.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Your share of a spending amount in one category.
    Share(ShareArgs),

    /// Federal income and payroll tax for an income.
    Tax(TaxArgs),

    /// List the funding categories.
    Categories,
}

#[derive(Debug, Args)]
pub struct ShareArgs {
    /// Gross annual income, e.g. `75000`, `$75,000` or `75k`. A negative
    /// income is taxed as zero.
    #[arg(
        long,
        value_parser = parse_income,
        allow_hyphen_values = true,
        conflicts_with_all = ["income_tax", "fica_tax"],
        required_unless_present_any = ["income_tax", "fica_tax"]
    )]
    pub income: Option<Decimal>,

    /// Filing status: single or married.
    #[arg(long)]
    pub filing_status: Option<FilingStatus>,

    /// Federal income tax you paid, instead of estimating it from income.
    #[arg(long, value_parser = parse_amount)]
    pub income_tax: Option<Decimal>,

    /// Payroll (FICA) tax you paid, instead of estimating it from income.
    #[arg(long, value_parser = parse_amount)]
    pub fica_tax: Option<Decimal>,

    /// Spending amount to apportion, e.g. `10b`.
    #[arg(long, value_parser = parse_amount)]
    pub spending: Decimal,

    /// Funding category key (see `taxshare categories`).
    #[arg(long)]
    pub category: String,
}

impl ShareArgs {
    /// Estimated from `--income`, or declared through `--income-tax` and
    /// `--fica-tax` with a missing figure counted as zero.
    pub fn contribution(
        &self,
        filing_status: FilingStatus,
    ) -> Contribution {
        match self.income {
            Some(gross_income) => Contribution::Estimated {
                gross_income,
                filing_status,
            },
            None => Contribution::Declared {
                income_tax: self.income_tax.unwrap_or_default(),
                fica_tax: self.fica_tax.unwrap_or_default(),
            },
        }
    }
}

#[derive(Debug, Args)]
pub struct TaxArgs {
    /// Gross annual income. A negative income is taxed as zero.
    #[arg(long, value_parser = parse_income, allow_hyphen_values = true)]
    pub income: Decimal,

    /// Filing status: single or married.
    #[arg(long)]
    pub filing_status: Option<FilingStatus>,
}

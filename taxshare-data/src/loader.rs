use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use taxshare_core::{FilingStatus, PayrollTaxRates, StandardDeduction, UnknownFilingStatus};
use thiserror::Error;
use tracing::{debug, info};

use crate::reference::ReferenceData;
use crate::validation::{build_budget, build_comparisons, build_tax_year};

pub const RATES_FILE: &str = "rates.toml";
pub const BRACKETS_FILE: &str = "brackets.csv";
pub const CATEGORIES_FILE: &str = "categories.csv";
pub const COMPARISONS_FILE: &str = "comparisons.csv";

/// Errors that can occur when loading reference data.
#[derive(Debug, Error)]
pub enum ReferenceDataError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error in {file}: {message}")]
    CsvParse { file: &'static str, message: String },

    #[error("TOML parse error in rates.toml: {0}")]
    TomlParse(String),

    #[error(transparent)]
    FilingStatus(#[from] UnknownFilingStatus),

    #[error("bracket for tax year {found} does not match rates.toml tax year {expected}")]
    TaxYearMismatch { expected: i32, found: i32 },

    #[error("no brackets for filing status '{0}'")]
    MissingBrackets(FilingStatus),

    #[error("bracket bounds for '{status}' are not strictly increasing at bracket {row}")]
    NonIncreasingBound { status: FilingStatus, row: usize },

    #[error("bracket table for '{0}' must end with exactly one unbounded bracket")]
    UnboundedBracket(FilingStatus),

    #[error("bracket rate {rate} for '{status}' must be between 0 and 1")]
    InvalidRate { status: FilingStatus, rate: Decimal },

    #[error("bracket rates for '{status}' decrease at bracket {row}")]
    DecreasingRate { status: FilingStatus, row: usize },

    #[error("unrecognised tax source '{value}' for category '{key}'")]
    InvalidTaxSource { key: String, value: String },

    #[error("mixed category '{0}' requires both income_share and fica_share")]
    MissingMixedSplit(String),

    #[error("{pool} must be positive, found {amount}")]
    NonPositiveRevenue { pool: String, amount: Decimal },

    #[error("duplicate category key '{0}'")]
    DuplicateCategory(String),

    #[error("comparison thresholds are not strictly increasing at tier {0}")]
    NonIncreasingThreshold(usize),

    #[error("comparison table must end with exactly one unbounded tier")]
    UnboundedTier,
}

impl ReferenceDataError {
    fn csv(
        file: &'static str,
        err: csv::Error,
    ) -> Self {
        ReferenceDataError::CsvParse {
            file,
            message: err.to_string(),
        }
    }
}

/// Contents of `rates.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RatesFile {
    pub tax_year: i32,
    pub fiscal_year: i32,
    pub revenue: RevenueTotals,
    pub standard_deduction: StandardDeduction,
    pub payroll: PayrollTaxRates,
}

/// Economy-wide receipts for the fiscal year.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RevenueTotals {
    pub income_tax: Decimal,
    pub payroll_tax: Decimal,
}

/// A single row of `brackets.csv`.
///
/// - `filing_status`: `single` or `married`
/// - `upper_bound`: bracket ceiling (empty for the unbounded top bracket)
/// - `rate`: marginal rate as a decimal (e.g. 0.10 for 10%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub tax_year: i32,
    pub filing_status: String,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

/// A single row of `categories.csv`. The share columns are only read for
/// `mixed` categories.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CategoryRecord {
    pub key: String,
    pub name: String,
    pub tax_source: String,
    pub budget_pool: Decimal,
    pub revenue_pool: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub income_share: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub fica_share: Option<Decimal>,
    pub description: Option<String>,
}

/// A single row of `comparisons.csv`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ComparisonRecord {
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub threshold_max: Option<Decimal>,
    pub template: String,
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

/// Raw contents of the four reference files.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceSources<'a> {
    pub rates: &'a str,
    pub brackets: &'a str,
    pub categories: &'a str,
    pub comparisons: &'a str,
}

/// Loader for the static reference tables.
///
/// A reference data directory holds `rates.toml`, `brackets.csv`,
/// `categories.csv` and `comparisons.csv`. Everything is checked for
/// structural consistency before a [`ReferenceData`] is returned.
pub struct ReferenceDataLoader;

impl ReferenceDataLoader {
    pub fn parse_rates(input: &str) -> Result<RatesFile, ReferenceDataError> {
        toml::from_str(input).map_err(|e| ReferenceDataError::TomlParse(e.to_string()))
    }

    pub fn parse_brackets<R: Read>(reader: R) -> Result<Vec<BracketRecord>, ReferenceDataError> {
        parse_csv(reader, BRACKETS_FILE)
    }

    pub fn parse_categories<R: Read>(
        reader: R
    ) -> Result<Vec<CategoryRecord>, ReferenceDataError> {
        parse_csv(reader, CATEGORIES_FILE)
    }

    pub fn parse_comparisons<R: Read>(
        reader: R
    ) -> Result<Vec<ComparisonRecord>, ReferenceDataError> {
        parse_csv(reader, COMPARISONS_FILE)
    }

    /// Parses and validates reference data held in memory.
    pub fn from_sources(
        sources: &ReferenceSources<'_>
    ) -> Result<ReferenceData, ReferenceDataError> {
        let rates = Self::parse_rates(sources.rates)?;
        let brackets = Self::parse_brackets(sources.brackets.as_bytes())?;
        let categories = Self::parse_categories(sources.categories.as_bytes())?;
        let comparisons = Self::parse_comparisons(sources.comparisons.as_bytes())?;

        debug!(
            brackets = brackets.len(),
            categories = categories.len(),
            tiers = comparisons.len(),
            "parsed reference records"
        );

        Ok(ReferenceData {
            tax_year: build_tax_year(&rates, &brackets)?,
            budget: build_budget(&rates, &categories)?,
            comparisons: build_comparisons(&comparisons)?,
        })
    }

    /// Reads the four reference files from `dir` and validates them.
    pub fn from_dir(dir: &Path) -> Result<ReferenceData, ReferenceDataError> {
        info!(dir = %dir.display(), "loading reference data");

        let rates = read_file(dir, RATES_FILE)?;
        let brackets = read_file(dir, BRACKETS_FILE)?;
        let categories = read_file(dir, CATEGORIES_FILE)?;
        let comparisons = read_file(dir, COMPARISONS_FILE)?;

        Self::from_sources(&ReferenceSources {
            rates: &rates,
            brackets: &brackets,
            categories: &categories,
            comparisons: &comparisons,
        })
    }
}

fn parse_csv<R, T>(
    reader: R,
    file: &'static str,
) -> Result<Vec<T>, ReferenceDataError>
where
    R: Read,
    T: serde::de::DeserializeOwned,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize()
        .map(|result| result.map_err(|e| ReferenceDataError::csv(file, e)))
        .collect()
}

fn read_file(
    dir: &Path,
    name: &str,
) -> Result<String, ReferenceDataError> {
    let path = dir.join(name);
    fs::read_to_string(&path).map_err(|source| ReferenceDataError::Io { path, source })
}

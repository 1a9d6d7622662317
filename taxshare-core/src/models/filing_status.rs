use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Filing status selecting the bracket table, standard deduction and
/// Additional Medicare threshold for a calculation.
///
/// An omitted status means [`FilingStatus::Single`]. A status string that
/// cannot be recognised is rejected with [`UnknownFilingStatus`]; it is never
/// silently mapped to `Single`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilingStatus {
    #[default]
    Single,
    Married,
}

/// A filing status string that matched none of the recognised codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised filing status '{0}' (expected 'single' or 'married')")]
pub struct UnknownFilingStatus(pub String);

impl FilingStatus {
    pub fn all() -> &'static [FilingStatus] {
        &[FilingStatus::Single, FilingStatus::Married]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Married => "Married Filing Jointly",
        }
    }

    /// Parses a status code, ignoring case and surrounding whitespace.
    ///
    /// Accepts `single`/`s` and `married`/`mfj`/`joint`/`married_filing_jointly`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "s" => Some(Self::Single),
            "married" | "mfj" | "joint" | "married_filing_jointly" => Some(Self::Married),
            _ => None,
        }
    }
}

impl FromStr for FilingStatus {
    type Err = UnknownFilingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownFilingStatus(s.to_string()))
    }
}

impl fmt::Display for FilingStatus {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

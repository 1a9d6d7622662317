use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which revenue stream pays for a spending category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxSource {
    /// Paid from individual income tax revenue.
    Income,
    /// Paid from payroll (FICA) tax revenue.
    Fica,
    /// Split between the two streams by a fixed weight.
    Mixed,
}

impl TaxSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Fica => "fica",
            Self::Mixed => "mixed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Some(Self::Income),
            "fica" | "payroll" => Some(Self::Fica),
            "mixed" => Some(Self::Mixed),
            _ => None,
        }
    }

    /// Label shown as the tax type of a share breakdown.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Federal Income Tax",
            Self::Fica => "Payroll Tax",
            Self::Mixed => "Income + Payroll Tax",
        }
    }
}

impl fmt::Display for TaxSource {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribution weights for a [`TaxSource::Mixed`] category.
///
/// The two shares are expected to sum to one; they are taken as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedSplit {
    pub income_share: Decimal,
    pub fica_share: Decimal,
}

/// One spending bucket in the budget catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingCategory {
    /// Lookup key, e.g. `defense`.
    pub key: String,

    /// Display name, e.g. `National Defense`.
    pub name: String,

    pub tax_source: TaxSource,

    /// Annual outlay for the category. Only used for the over-budget flag.
    pub budget_pool: Decimal,

    /// Revenue base the category is paid from. For mixed categories this is
    /// a blended figure kept for display; the share formula uses the
    /// economy-wide totals instead.
    pub revenue_pool: Decimal,

    /// Present for mixed categories only.
    pub mixed_split: Option<MixedSplit>,

    pub description: Option<String>,
}

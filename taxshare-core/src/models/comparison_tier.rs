use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A human-scale comparison used for shares below `threshold_max`.
///
/// Templates may contain `{cents}` and `{days}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTier {
    /// Exclusive upper limit; `None` marks the final, unbounded tier.
    pub threshold_max: Option<Decimal>,
    pub template: String,
}

impl ComparisonTier {
    pub fn new(
        threshold_max: Decimal,
        template: impl Into<String>,
    ) -> Self {
        Self {
            threshold_max: Some(threshold_max),
            template: template.into(),
        }
    }

    pub fn unbounded(template: impl Into<String>) -> Self {
        Self {
            threshold_max: None,
            template: template.into(),
        }
    }
}

/// Comparison tiers ordered by increasing `threshold_max`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTable {
    tiers: Vec<ComparisonTier>,
}

impl ComparisonTable {
    pub fn new(tiers: Vec<ComparisonTier>) -> Self {
        Self { tiers }
    }

    pub fn tiers(&self) -> &[ComparisonTier] {
        &self.tiers
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

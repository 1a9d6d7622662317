use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// One marginal-rate bracket. The bracket's floor is the previous bracket's
/// `upper_bound` (zero for the first bracket).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Ceiling of the bracket; `None` marks the unbounded top bracket.
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        upper_bound: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            rate,
        }
    }

    pub fn unbounded(rate: Decimal) -> Self {
        Self {
            upper_bound: None,
            rate,
        }
    }
}

/// Ordered bracket tables, one per filing status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracketTable {
    pub single: Vec<TaxBracket>,
    pub married: Vec<TaxBracket>,
}

impl TaxBracketTable {
    pub fn for_status(
        &self,
        status: FilingStatus,
    ) -> &[TaxBracket] {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::Married => &self.married,
        }
    }
}

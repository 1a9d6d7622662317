use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardDeduction {
    pub single: Decimal,
    pub married: Decimal,
}

impl StandardDeduction {
    pub fn amount(
        &self,
        status: FilingStatus,
    ) -> Decimal {
        match status {
            FilingStatus::Single => self.single,
            FilingStatus::Married => self.married,
        }
    }
}

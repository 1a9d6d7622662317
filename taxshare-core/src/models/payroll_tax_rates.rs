use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// Employee-side payroll (FICA) tax parameters for one tax year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTaxRates {
    /// Social Security rate, e.g. 6.2%.
    pub social_security_rate: Decimal,

    /// Wage base above which no further Social Security tax is due.
    pub social_security_wage_base: Decimal,

    /// Medicare rate applied to all wages, e.g. 1.45%.
    pub medicare_rate: Decimal,

    /// Additional Medicare rate applied to wages strictly above the
    /// filing-status threshold, e.g. 0.9%.
    pub additional_medicare_rate: Decimal,

    pub additional_medicare_threshold_single: Decimal,
    pub additional_medicare_threshold_married: Decimal,
}

impl PayrollTaxRates {
    pub fn additional_medicare_threshold(
        &self,
        status: FilingStatus,
    ) -> Decimal {
        match status {
            FilingStatus::Single => self.additional_medicare_threshold_single,
            FilingStatus::Married => self.additional_medicare_threshold_married,
        }
    }
}

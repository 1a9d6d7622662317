use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FilingStatus, PayrollTaxRates, StandardDeduction, TaxBracket, TaxBracketTable};

/// Static tax tables for one tax year. Supplied by the caller; the
/// calculations only read from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    pub tax_year: i32,
    pub brackets: TaxBracketTable,
    pub standard_deduction: StandardDeduction,
    pub payroll: PayrollTaxRates,
}

impl TaxYearConfig {
    pub fn brackets(
        &self,
        status: FilingStatus,
    ) -> &[TaxBracket] {
        self.brackets.for_status(status)
    }

    pub fn standard_deduction(
        &self,
        status: FilingStatus,
    ) -> Decimal {
        self.standard_deduction.amount(status)
    }
}

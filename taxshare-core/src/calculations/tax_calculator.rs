use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::income_tax::calculate_income_tax;
use crate::calculations::payroll_tax::{FicaTax, calculate_fica};
use crate::models::{FilingStatus, TaxYearConfig};

/// A user's federal income and payroll tax for one year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLiability {
    pub income_tax: Decimal,
    pub fica: FicaTax,
}

impl TaxLiability {
    pub fn total(&self) -> Decimal {
        self.income_tax + self.fica.total
    }
}

/// Income and payroll tax calculator bound to one year's tables.
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxshare_core::calculations::TaxCalculator;
/// use taxshare_core::{
///     FilingStatus, PayrollTaxRates, StandardDeduction, TaxBracket, TaxBracketTable,
///     TaxYearConfig,
/// };
///
/// let config = TaxYearConfig {
///     tax_year: 2024,
///     brackets: TaxBracketTable {
///         single: vec![
///             TaxBracket::new(dec!(11600), dec!(0.10)),
///             TaxBracket::unbounded(dec!(0.12)),
///         ],
///         married: vec![TaxBracket::unbounded(dec!(0.10))],
///     },
///     standard_deduction: StandardDeduction {
///         single: dec!(14600),
///         married: dec!(29200),
///     },
///     payroll: PayrollTaxRates {
///         social_security_rate: dec!(0.062),
///         social_security_wage_base: dec!(168600),
///         medicare_rate: dec!(0.0145),
///         additional_medicare_rate: dec!(0.009),
///         additional_medicare_threshold_single: dec!(200000),
///         additional_medicare_threshold_married: dec!(250000),
///     },
/// };
///
/// let calculator = TaxCalculator::new(&config);
/// let liability = calculator.liability(dec!(50000), FilingStatus::Single);
///
/// assert_eq!(liability.income_tax, dec!(4016));
/// assert_eq!(liability.fica.total, dec!(3825));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TaxCalculator<'a> {
    config: &'a TaxYearConfig,
}

impl<'a> TaxCalculator<'a> {
    pub fn new(config: &'a TaxYearConfig) -> Self {
        Self { config }
    }

    pub fn tax_year(&self) -> i32 {
        self.config.tax_year
    }

    pub fn income_tax(
        &self,
        gross_income: Decimal,
        filing_status: FilingStatus,
    ) -> Decimal {
        calculate_income_tax(gross_income, filing_status, self.config)
    }

    pub fn fica(
        &self,
        gross_income: Decimal,
        filing_status: FilingStatus,
    ) -> FicaTax {
        calculate_fica(gross_income, filing_status, &self.config.payroll)
    }

    pub fn liability(
        &self,
        gross_income: Decimal,
        filing_status: FilingStatus,
    ) -> TaxLiability {
        TaxLiability {
            income_tax: self.income_tax(gross_income, filing_status),
            fica: self.fica(gross_income, filing_status),
        }
    }
}

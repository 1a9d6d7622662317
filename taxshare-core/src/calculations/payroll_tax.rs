//! Employee payroll (FICA) tax: Social Security plus Medicare.
//!
//! | Component | Formula |
//! |-----------|---------|
//! | Social Security | min(wages, wage base) × Social Security rate |
//! | Medicare | wages × Medicare rate |
//! | Additional Medicare | (wages - threshold) × additional rate, only when wages > threshold |
//!
//! The Additional Medicare threshold depends on the filing status and is
//! exclusive: wages exactly at the threshold owe no additional tax.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taxshare_core::calculations::calculate_fica;
//! use taxshare_core::{FilingStatus, PayrollTaxRates};
//!
//! let rates = PayrollTaxRates {
//!     social_security_rate: dec!(0.062),
//!     social_security_wage_base: dec!(168600),
//!     medicare_rate: dec!(0.0145),
//!     additional_medicare_rate: dec!(0.009),
//!     additional_medicare_threshold_single: dec!(200000),
//!     additional_medicare_threshold_married: dec!(250000),
//! };
//!
//! let fica = calculate_fica(dec!(250000), FilingStatus::Single, &rates);
//!
//! assert_eq!(fica.medicare, dec!(4075));
//! assert_eq!(fica.social_security, dec!(10453.20));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::clamp_non_negative;
use crate::models::{FilingStatus, PayrollTaxRates};

/// Payroll tax owed on a year's wages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FicaTax {
    pub social_security: Decimal,
    pub medicare: Decimal,
    pub total: Decimal,
}

/// Computes Social Security and Medicare tax on `gross_income`.
///
/// Negative income is treated as zero, so every component is non-negative.
pub fn calculate_fica(
    gross_income: Decimal,
    filing_status: FilingStatus,
    rates: &PayrollTaxRates,
) -> FicaTax {
    let wages = clamp_non_negative(gross_income);

    let social_security = wages.min(rates.social_security_wage_base) * rates.social_security_rate;

    let mut medicare = wages * rates.medicare_rate;
    let threshold = rates.additional_medicare_threshold(filing_status);
    if wages > threshold {
        medicare += (wages - threshold) * rates.additional_medicare_rate;
    }

    let fica = FicaTax {
        social_security,
        medicare,
        total: social_security + medicare,
    };

    debug!(
        %gross_income,
        status = filing_status.as_str(),
        social_security = %fica.social_security,
        medicare = %fica.medicare,
        "payroll tax calculated"
    );

    fica
}

//! Progressive federal income tax.
//!
//! Taxable income is gross income less the standard deduction for the filing
//! status, floored at zero. Each bracket taxes the slice of taxable income
//! between the previous bracket's ceiling and its own:
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Gross income (negative treated as zero) |
//! | 2    | Standard deduction for the filing status |
//! | 3    | Taxable income: max(0, Line 1 - Line 2) |
//! | 4    | Σ rate × (min(Line 3, ceiling) - previous ceiling) over the brackets |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taxshare_core::calculations::tax_from_brackets;
//! use taxshare_core::TaxBracket;
//!
//! let brackets = vec![
//!     TaxBracket::new(dec!(11600), dec!(0.10)),
//!     TaxBracket::new(dec!(47150), dec!(0.12)),
//!     TaxBracket::unbounded(dec!(0.22)),
//! ];
//!
//! // $50,000 gross less the $14,600 standard deduction.
//! assert_eq!(tax_from_brackets(dec!(35400), &brackets), dec!(4016));
//! ```

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::clamp_non_negative;
use crate::models::{FilingStatus, TaxBracket, TaxYearConfig};

/// Computes federal income tax on `gross_income` for `filing_status`.
///
/// Negative income is treated as a zero taxable basis. The result is never
/// negative and never decreases as `gross_income` grows.
pub fn calculate_income_tax(
    gross_income: Decimal,
    filing_status: FilingStatus,
    config: &TaxYearConfig,
) -> Decimal {
    if gross_income < Decimal::ZERO {
        warn!(%gross_income, "negative gross income treated as zero");
    }

    let taxable = taxable_income(gross_income, config.standard_deduction(filing_status));
    let tax = tax_from_brackets(taxable, config.brackets(filing_status));

    debug!(
        %gross_income,
        status = filing_status.as_str(),
        %taxable,
        %tax,
        "income tax calculated"
    );

    tax
}

/// Gross income less the standard deduction, floored at zero.
pub fn taxable_income(
    gross_income: Decimal,
    standard_deduction: Decimal,
) -> Decimal {
    clamp_non_negative(clamp_non_negative(gross_income) - standard_deduction)
}

/// Accumulates tax bracket by bracket.
///
/// `brackets` must be ordered by increasing `upper_bound`. Iteration stops
/// once the taxable income lies entirely below the running ceiling, or after
/// the unbounded bracket.
pub fn tax_from_brackets(
    taxable_income: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    let mut tax = Decimal::ZERO;
    let mut previous_ceiling = Decimal::ZERO;

    for bracket in brackets {
        if taxable_income <= previous_ceiling {
            break;
        }

        let ceiling = bracket
            .upper_bound
            .map_or(taxable_income, |upper| upper.min(taxable_income));
        tax += clamp_non_negative(ceiling - previous_ceiling) * bracket.rate;

        match bracket.upper_bound {
            Some(upper) => previous_ceiling = upper,
            None => break,
        }
    }

    tax
}

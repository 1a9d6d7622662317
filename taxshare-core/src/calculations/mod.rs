//! Tax liability and proportional-share calculations.
//!
//! Data flows one way: gross income and filing status go through
//! [`TaxCalculator`], the resulting taxes go through [`ShareAllocator`]
//! together with a spending amount and category, and the share is turned into
//! comparison text by [`get_comparison`]. [`ShareCalculation`] runs all three.

pub mod common;
pub mod comparison;
pub mod income_tax;
pub mod payroll_tax;
pub mod share;
pub mod share_calculation;
pub mod tax_calculator;

pub use comparison::{cents, days_of_tax, get_comparison};
pub use income_tax::{calculate_income_tax, tax_from_brackets, taxable_income};
pub use payroll_tax::{FicaTax, calculate_fica};
pub use share::{
    DEFICIT_NOTE, FundingSlice, ShareAllocator, ShareBreakdown, ShareError, ShareRequest,
    ShareResult, calculate_share,
};
pub use share_calculation::{
    Contribution, ShareCalculation, ShareCalculationInput, ShareCalculationResult,
    relevant_annual_tax,
};
pub use tax_calculator::{TaxCalculator, TaxLiability};

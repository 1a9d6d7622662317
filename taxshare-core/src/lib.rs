pub mod calculations;
pub mod models;

#[cfg(test)]
mod fixtures;

pub use calculations::{
    Contribution, FicaTax, ShareAllocator, ShareCalculation, ShareCalculationInput,
    ShareCalculationResult, ShareError, ShareRequest, ShareResult, TaxCalculator, TaxLiability,
};
pub use models::*;

//! End-to-end calculation: tax liability, share, then comparison text.
//!
//! Each call takes an immutable [`ShareCalculationInput`] and returns a fresh
//! [`ShareCalculationResult`]; nothing is carried between calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::comparison::get_comparison;
use crate::calculations::payroll_tax::FicaTax;
use crate::calculations::share::{ShareAllocator, ShareError, ShareRequest, ShareResult};
use crate::calculations::tax_calculator::TaxCalculator;
use crate::models::{BudgetSnapshot, ComparisonTable, FilingStatus, TaxSource, TaxYearConfig};

/// Where the user's tax figures come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contribution {
    /// Estimated from gross income and filing status.
    Estimated {
        gross_income: Decimal,
        filing_status: FilingStatus,
    },
    /// Declared directly by the user.
    Declared { income_tax: Decimal, fica_tax: Decimal },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareCalculationInput {
    pub contribution: Contribution,
    pub spending_amount: Decimal,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareCalculationResult {
    pub income_tax: Decimal,
    pub fica_tax: Decimal,

    /// Payroll tax components, present when the taxes were estimated.
    pub fica: Option<FicaTax>,

    pub share: ShareResult,

    /// Tax figure the comparison's `{days}` is measured against.
    pub annual_tax: Decimal,

    pub comparison: String,
}

/// Runs the full calculation against one set of reference tables.
#[derive(Debug, Clone, Copy)]
pub struct ShareCalculation<'a> {
    tax_year: &'a TaxYearConfig,
    budget: &'a BudgetSnapshot,
    comparisons: &'a ComparisonTable,
}

impl<'a> ShareCalculation<'a> {
    pub fn new(
        tax_year: &'a TaxYearConfig,
        budget: &'a BudgetSnapshot,
        comparisons: &'a ComparisonTable,
    ) -> Self {
        Self {
            tax_year,
            budget,
            comparisons,
        }
    }

    /// # Errors
    ///
    /// Returns [`ShareError`] when the category cannot be allocated.
    pub fn calculate(
        &self,
        input: &ShareCalculationInput,
    ) -> Result<ShareCalculationResult, ShareError> {
        let (income_tax, fica_tax, fica) = match input.contribution {
            Contribution::Estimated {
                gross_income,
                filing_status,
            } => {
                let liability =
                    TaxCalculator::new(self.tax_year).liability(gross_income, filing_status);
                (liability.income_tax, liability.fica.total, Some(liability.fica))
            }
            Contribution::Declared {
                income_tax,
                fica_tax,
            } => (income_tax, fica_tax, None),
        };

        let request = ShareRequest {
            income_tax,
            fica_tax,
            spending_amount: input.spending_amount,
            category: input.category.clone(),
        };
        let share = ShareAllocator::new(self.budget).calculate_share(&request)?;

        let annual_tax = relevant_annual_tax(share.tax_source, income_tax, fica_tax);
        let comparison = get_comparison(share.your_share, annual_tax, self.comparisons);

        Ok(ShareCalculationResult {
            income_tax,
            fica_tax,
            fica,
            share,
            annual_tax,
            comparison,
        })
    }
}

/// The tax a category draws on: income tax, payroll tax, or both.
pub fn relevant_annual_tax(
    tax_source: TaxSource,
    income_tax: Decimal,
    fica_tax: Decimal,
) -> Decimal {
    match tax_source {
        TaxSource::Income => income_tax,
        TaxSource::Fica => fica_tax,
        TaxSource::Mixed => income_tax.saturating_add(fica_tax),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::fixtures::{budget_2024, comparisons, tax_year_2024};

    #[test]
    fn estimated_contribution_runs_tax_then_share() {
        let (config, budget, table) = (tax_year_2024(), budget_2024(), comparisons());
        let calculation = ShareCalculation::new(&config, &budget, &table);
        let input = ShareCalculationInput {
            contribution: Contribution::Estimated {
                gross_income: dec!(75000),
                filing_status: FilingStatus::Single,
            },
            spending_amount: dec!(10000000000),
            category: "defense".to_string(),
        };

        let result = calculation.calculate(&input).unwrap();

        assert_eq!(result.income_tax, dec!(8341));
        assert_eq!(result.fica_tax, dec!(5737.5));
        assert!(result.fica.is_some());
        assert_eq!(result.annual_tax, dec!(8341));
        // 8341 / 2.4T * 10B = 34.754...
        assert_eq!(result.share.your_share.round_dp(2), dec!(34.75));
        // 34.754 / (8341 / 365) = 1.52 days
        assert_eq!(result.comparison, "About 2 days of your federal taxes");
    }

    #[test]
    fn declared_contribution_skips_tax_calculation() {
        let (config, budget, table) = (tax_year_2024(), budget_2024(), comparisons());
        let calculation = ShareCalculation::new(&config, &budget, &table);
        let input = ShareCalculationInput {
            contribution: Contribution::Declared {
                income_tax: dec!(9400),
                fica_tax: Decimal::ZERO,
            },
            spending_amount: dec!(10000000000),
            category: "defense".to_string(),
        };

        let result = calculation.calculate(&input).unwrap();

        assert_eq!(result.fica, None);
        assert_eq!(result.share.your_share.round_dp(2), dec!(39.17));
    }

    #[test]
    fn unknown_category_propagates() {
        let (config, budget, table) = (tax_year_2024(), budget_2024(), comparisons());
        let calculation = ShareCalculation::new(&config, &budget, &table);
        let input = ShareCalculationInput {
            contribution: Contribution::Declared {
                income_tax: dec!(1),
                fica_tax: dec!(1),
            },
            spending_amount: dec!(1),
            category: "nope".to_string(),
        };

        let result = calculation.calculate(&input);

        assert_eq!(result, Err(ShareError::UnknownCategory("nope".to_string())));
    }

    #[test]
    fn relevant_annual_tax_follows_source() {
        assert_eq!(relevant_annual_tax(TaxSource::Income, dec!(10), dec!(3)), dec!(10));
        assert_eq!(relevant_annual_tax(TaxSource::Fica, dec!(10), dec!(3)), dec!(3));
        assert_eq!(relevant_annual_tax(TaxSource::Mixed, dec!(10), dec!(3)), dec!(13));
    }
}

//! Proportional share of a spending figure.
//!
//! A user's share of a spending amount is the fraction of the relevant
//! revenue pool their own tax represents, applied to the amount:
//!
//! | Source | Share |
//! |--------|-------|
//! | income | income tax / category revenue pool × spending |
//! | fica   | payroll tax / category revenue pool × spending |
//! | mixed  | income tax / total income tax receipts × spending × income weight |
//! |        | + payroll tax / total payroll receipts × spending × payroll weight |
//!
//! The mixed formula deliberately uses the economy-wide receipts from the
//! [`BudgetSnapshot`]; a mixed category's own `revenue_pool` is only echoed in
//! the breakdown.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taxshare_core::calculations::{ShareAllocator, ShareRequest};
//! use taxshare_core::{BudgetSnapshot, FundingCategory, TaxSource};
//!
//! let mut budget = BudgetSnapshot::new(2024, dec!(2400000000000), dec!(1700000000000));
//! budget.insert(FundingCategory {
//!     key: "defense".to_string(),
//!     name: "National Defense".to_string(),
//!     tax_source: TaxSource::Income,
//!     budget_pool: dec!(850000000000),
//!     revenue_pool: dec!(2400000000000),
//!     mixed_split: None,
//!     description: None,
//! });
//!
//! let request = ShareRequest {
//!     income_tax: dec!(12000),
//!     fica_tax: dec!(0),
//!     spending_amount: dec!(10000000000),
//!     category: "defense".to_string(),
//! };
//!
//! let result = ShareAllocator::new(&budget).calculate_share(&request).unwrap();
//!
//! assert_eq!(result.your_share, dec!(50));
//! assert!(!result.exceeds_budget);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::ratio;
use crate::models::{BudgetSnapshot, FundingCategory, MixedSplit, TaxSource};

/// Informational note attached to every share result.
pub const DEFICIT_NOTE: &str = "Federal spending is partly financed by borrowing. \
     This share reflects only the portion paid for by current tax revenue in \
     proportion to your own taxes, not your share of the deficit.";

/// Errors raised while allocating a share.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShareError {
    /// The requested category key is not in the budget catalog.
    #[error("unknown spending category '{0}'")]
    UnknownCategory(String),

    /// A mixed-source category carries no income/payroll split.
    #[error("category '{0}' is funded from mixed sources but has no income/payroll split")]
    MissingMixedSplit(String),

    /// The share is too large to represent.
    #[error("share of '{0}' spending is too large to calculate")]
    Overflow(String),
}

/// Input to [`ShareAllocator::calculate_share`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRequest {
    /// The user's annual federal income tax.
    pub income_tax: Decimal,

    /// The user's annual payroll (FICA) tax.
    pub fica_tax: Decimal,

    /// Annualized spending figure to apportion.
    pub spending_amount: Decimal,

    /// Key of the funding category the spending belongs to.
    pub category: String,
}

/// One revenue stream's part of a mixed-category share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingSlice {
    /// The user's tax paid into this stream.
    pub tax: Decimal,

    /// Economy-wide receipts of this stream.
    pub revenue: Decimal,

    /// Fraction of the spending attributed to this stream.
    pub weight: Decimal,

    /// Dollars of the user's share coming from this stream.
    pub contribution: Decimal,
}

/// How a share was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareBreakdown {
    pub tax_type: String,

    /// Tax figure the share was derived from (income and payroll summed for
    /// mixed categories).
    pub your_tax: Decimal,

    pub total_revenue: Decimal,

    /// Fraction of the spending that is the user's. For mixed categories this
    /// is the effective rate `your_share / spending_amount`.
    pub proportion: Decimal,

    pub income_portion: Option<FundingSlice>,
    pub fica_portion: Option<FundingSlice>,
}

/// A user's share of one spending figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareResult {
    pub your_share: Decimal,
    pub spending_amount: Decimal,

    /// Display name of the category.
    pub category: String,
    pub category_key: String,
    pub tax_source: TaxSource,
    pub budget_pool: Decimal,
    pub breakdown: ShareBreakdown,

    /// Whether the spending figure is larger than the category's annual
    /// outlay. Advisory only.
    pub exceeds_budget: bool,

    pub note: String,
}

/// Allocates shares against one budget snapshot.
#[derive(Debug, Clone, Copy)]
pub struct ShareAllocator<'a> {
    budget: &'a BudgetSnapshot,
}

impl<'a> ShareAllocator<'a> {
    pub fn new(budget: &'a BudgetSnapshot) -> Self {
        Self { budget }
    }

    /// Computes the user's share of `request.spending_amount`.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError`] if:
    /// - the category key is not in the catalog
    /// - a mixed category has no split
    /// - the share does not fit in a [`Decimal`]
    pub fn calculate_share(
        &self,
        request: &ShareRequest,
    ) -> Result<ShareResult, ShareError> {
        let category = self
            .budget
            .category(&request.category)
            .ok_or_else(|| ShareError::UnknownCategory(request.category.clone()))?;

        let (your_share, breakdown) = match category.tax_source {
            TaxSource::Income => {
                self.single_source(category, request.income_tax, request.spending_amount)?
            }
            TaxSource::Fica => {
                self.single_source(category, request.fica_tax, request.spending_amount)?
            }
            TaxSource::Mixed => {
                let split = category
                    .mixed_split
                    .ok_or_else(|| ShareError::MissingMixedSplit(category.key.clone()))?;
                self.mixed_source(category, split, request)?
            }
        };

        let exceeds_budget = request.spending_amount > category.budget_pool;

        debug!(
            category = %category.key,
            source = category.tax_source.as_str(),
            spending = %request.spending_amount,
            share = %your_share,
            exceeds_budget,
            "share calculated"
        );

        Ok(ShareResult {
            your_share,
            spending_amount: request.spending_amount,
            category: category.name.clone(),
            category_key: category.key.clone(),
            tax_source: category.tax_source,
            budget_pool: category.budget_pool,
            breakdown,
            exceeds_budget,
            note: DEFICIT_NOTE.to_string(),
        })
    }

    /// Share for a category paid from a single revenue stream.
    fn single_source(
        &self,
        category: &FundingCategory,
        your_tax: Decimal,
        spending_amount: Decimal,
    ) -> Result<(Decimal, ShareBreakdown), ShareError> {
        let proportion = self.proportion(&category.key, your_tax, category.revenue_pool);
        let your_share = proportion
            .checked_mul(spending_amount)
            .ok_or_else(|| ShareError::Overflow(category.key.clone()))?;

        let breakdown = ShareBreakdown {
            tax_type: category.tax_source.label().to_string(),
            your_tax,
            total_revenue: category.revenue_pool,
            proportion,
            income_portion: None,
            fica_portion: None,
        };

        Ok((your_share, breakdown))
    }

    /// Share for a category split between income and payroll revenue.
    fn mixed_source(
        &self,
        category: &FundingCategory,
        split: MixedSplit,
        request: &ShareRequest,
    ) -> Result<(Decimal, ShareBreakdown), ShareError> {
        let overflow = || ShareError::Overflow(category.key.clone());
        let income = self.slice(
            &category.key,
            request.income_tax,
            self.budget.income_tax_revenue,
            split.income_share,
            request.spending_amount,
        )
        .ok_or_else(overflow)?;
        let fica = self.slice(
            &category.key,
            request.fica_tax,
            self.budget.payroll_tax_revenue,
            split.fica_share,
            request.spending_amount,
        )
        .ok_or_else(overflow)?;

        let your_share = income
            .contribution
            .checked_add(fica.contribution)
            .ok_or_else(overflow)?;
        let your_tax = request
            .income_tax
            .checked_add(request.fica_tax)
            .ok_or_else(overflow)?;

        let breakdown = ShareBreakdown {
            tax_type: category.tax_source.label().to_string(),
            your_tax,
            total_revenue: category.revenue_pool,
            proportion: ratio(your_share, request.spending_amount),
            income_portion: Some(income),
            fica_portion: Some(fica),
        };

        Ok((your_share, breakdown))
    }

    fn slice(
        &self,
        key: &str,
        tax: Decimal,
        revenue: Decimal,
        weight: Decimal,
        spending_amount: Decimal,
    ) -> Option<FundingSlice> {
        let contribution = self
            .proportion(key, tax, revenue)
            .checked_mul(spending_amount)?
            .checked_mul(weight)?;

        Some(FundingSlice {
            tax,
            revenue,
            weight,
            contribution,
        })
    }

    /// The user's fraction of a revenue pool. An empty pool yields zero.
    fn proportion(
        &self,
        key: &str,
        tax: Decimal,
        revenue: Decimal,
    ) -> Decimal {
        if revenue.is_zero() {
            warn!(category = key, "revenue pool is zero; contribution treated as zero");
        }
        ratio(tax, revenue)
    }
}

/// Computes a share against `budget`. See [`ShareAllocator::calculate_share`].
pub fn calculate_share(
    request: &ShareRequest,
    budget: &BudgetSnapshot,
) -> Result<ShareResult, ShareError> {
    ShareAllocator::new(budget).calculate_share(request)
}

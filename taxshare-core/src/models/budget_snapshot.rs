use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FundingCategory;

/// Versioned snapshot of federal revenue totals and the funding-category
/// catalog for one fiscal year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub fiscal_year: i32,

    /// Economy-wide individual income tax receipts.
    pub income_tax_revenue: Decimal,

    /// Economy-wide payroll tax receipts.
    pub payroll_tax_revenue: Decimal,

    pub categories: BTreeMap<String, FundingCategory>,
}

impl BudgetSnapshot {
    pub fn new(
        fiscal_year: i32,
        income_tax_revenue: Decimal,
        payroll_tax_revenue: Decimal,
    ) -> Self {
        Self {
            fiscal_year,
            income_tax_revenue,
            payroll_tax_revenue,
            categories: BTreeMap::new(),
        }
    }

    /// Adds a category, returning the one previously stored under the same key.
    pub fn insert(
        &mut self,
        category: FundingCategory,
    ) -> Option<FundingCategory> {
        self.categories.insert(category.key.clone(), category)
    }

    pub fn category(
        &self,
        key: &str,
    ) -> Option<&FundingCategory> {
        self.categories.get(key)
    }

    /// Category keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }
}

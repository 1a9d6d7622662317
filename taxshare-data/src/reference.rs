use std::fmt;

use taxshare_core::{
    BudgetSnapshot, ComparisonTable, FilingStatus, ShareAllocator, ShareCalculation,
    TaxCalculator, TaxYearConfig,
};

use crate::loader::{ReferenceDataError, ReferenceDataLoader, ReferenceSources};

/// The 2024 snapshot shipped with the crate.
pub const BUNDLED_2024: ReferenceSources<'static> = ReferenceSources {
    rates: include_str!("../data/2024/rates.toml"),
    brackets: include_str!("../data/2024/brackets.csv"),
    categories: include_str!("../data/2024/categories.csv"),
    comparisons: include_str!("../data/2024/comparisons.csv"),
};

/// Everything the calculations read: tax tables, the budget catalog and the
/// comparison tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceData {
    pub tax_year: TaxYearConfig,
    pub budget: BudgetSnapshot,
    pub comparisons: ComparisonTable,
}

impl ReferenceData {
    /// Parses the bundled 2024 snapshot.
    pub fn bundled() -> Result<Self, ReferenceDataError> {
        ReferenceDataLoader::from_sources(&BUNDLED_2024)
    }

    pub fn tax_calculator(&self) -> TaxCalculator<'_> {
        TaxCalculator::new(&self.tax_year)
    }

    pub fn share_allocator(&self) -> ShareAllocator<'_> {
        ShareAllocator::new(&self.budget)
    }

    pub fn calculation(&self) -> ShareCalculation<'_> {
        ShareCalculation::new(&self.tax_year, &self.budget, &self.comparisons)
    }
}

impl fmt::Display for ReferenceData {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Tax year {}", self.tax_year.tax_year)?;
        for status in FilingStatus::all() {
            writeln!(
                f,
                "  {:<24} {} brackets, standard deduction {}",
                status.label(),
                self.tax_year.brackets(*status).len(),
                self.tax_year.standard_deduction(*status)
            )?;
        }
        writeln!(
            f,
            "  Social Security wage base {}",
            self.tax_year.payroll.social_security_wage_base
        )?;
        writeln!(f, "Fiscal year {}", self.budget.fiscal_year)?;
        writeln!(f, "  Income tax receipts  {}", self.budget.income_tax_revenue)?;
        writeln!(f, "  Payroll tax receipts {}", self.budget.payroll_tax_revenue)?;
        writeln!(f, "  {} funding categories", self.budget.categories.len())?;
        write!(f, "{} comparison tiers", self.comparisons.tiers().len())
    }
}

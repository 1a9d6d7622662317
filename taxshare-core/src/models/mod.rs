mod budget_snapshot;
mod comparison_tier;
mod filing_status;
mod funding_category;
mod payroll_tax_rates;
mod standard_deduction;
mod tax_bracket;
mod tax_year_config;

pub use budget_snapshot::BudgetSnapshot;
pub use comparison_tier::{ComparisonTable, ComparisonTier};
pub use filing_status::{FilingStatus, UnknownFilingStatus};
pub use funding_category::{FundingCategory, MixedSplit, TaxSource};
pub use payroll_tax_rates::PayrollTaxRates;
pub use standard_deduction::StandardDeduction;
pub use tax_bracket::{TaxBracket, TaxBracketTable};
pub use tax_year_config::TaxYearConfig;

//! Plain-text reports printed by the `taxshare` subcommands.

use std::fmt;

use rust_decimal::Decimal;
use taxshare_core::calculations::{FundingSlice, taxable_income};
use taxshare_core::{BudgetSnapshot, FilingStatus, ShareCalculationResult, TaxLiability};

use crate::utils::{format_currency, format_one_in, format_percent, format_share};

/// Output of `taxshare tax`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxReport {
    pub tax_year: i32,
    pub gross_income: Decimal,
    pub filing_status: FilingStatus,
    pub standard_deduction: Decimal,
    pub liability: TaxLiability,
}

impl fmt::Display for TaxReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let taxable = taxable_income(self.gross_income, self.standard_deduction);

        writeln!(f, "Tax year:           {}", self.tax_year)?;
        writeln!(f, "Filing status:      {}", self.filing_status.label())?;
        writeln!(f, "Gross income:       {}", format_currency(self.gross_income))?;
        writeln!(
            f,
            "Standard deduction: {}",
            format_currency(self.standard_deduction)
        )?;
        writeln!(f, "Taxable income:     {}", format_currency(taxable))?;
        writeln!(f)?;
        writeln!(
            f,
            "Income tax:         {}",
            format_currency(self.liability.income_tax)
        )?;
        writeln!(
            f,
            "Social Security:    {}",
            format_currency(self.liability.fica.social_security)
        )?;
        writeln!(
            f,
            "Medicare:           {}",
            format_currency(self.liability.fica.medicare)
        )?;
        writeln!(
            f,
            "FICA total:         {}",
            format_currency(self.liability.fica.total)
        )?;
        write!(
            f,
            "Total federal tax:  {}",
            format_currency(self.liability.total())
        )
    }
}

/// Output of `taxshare share`.
#[derive(Debug, Clone, Copy)]
pub struct ShareReport<'a>(pub &'a ShareCalculationResult);

impl fmt::Display for ShareReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let result = self.0;
        let share = &result.share;
        let breakdown = &share.breakdown;

        writeln!(f, "Income tax:      {}", format_currency(result.income_tax))?;
        writeln!(f, "Payroll tax:     {}", format_currency(result.fica_tax))?;
        if let Some(fica) = result.fica {
            writeln!(
                f,
                "  Social Security {}",
                format_currency(fica.social_security)
            )?;
            writeln!(f, "  Medicare        {}", format_currency(fica.medicare))?;
        }
        writeln!(f)?;
        writeln!(f, "Category:        {} ({})", share.category, share.category_key)?;
        writeln!(f, "Funded by:       {}", breakdown.tax_type)?;
        writeln!(
            f,
            "Spending:        {}",
            format_currency(share.spending_amount)
        )?;
        writeln!(f, "Your share:      {}", format_share(share.your_share))?;
        writeln!(f, "                 {}", result.comparison)?;
        writeln!(f)?;
        writeln!(f, "Your tax:        {}", format_currency(breakdown.your_tax))?;
        writeln!(
            f,
            "Revenue pool:    {}",
            format_currency(breakdown.total_revenue)
        )?;
        writeln!(
            f,
            "Proportion:      {} dollars",
            format_one_in(breakdown.proportion)
        )?;
        if let Some(slice) = &breakdown.income_portion {
            write_slice(f, "Income part:", slice)?;
        }
        if let Some(slice) = &breakdown.fica_portion {
            write_slice(f, "Payroll part:", slice)?;
        }
        if share.exceeds_budget {
            writeln!(
                f,
                "Warning:         spending exceeds the category's annual budget of {}",
                format_currency(share.budget_pool)
            )?;
        }
        writeln!(f)?;
        write!(f, "{}", share.note)
    }
}

fn write_slice(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    slice: &FundingSlice,
) -> fmt::Result {
    writeln!(
        f,
        "{label:<16} {} ({} of spending, {} of {})",
        format_share(slice.contribution),
        format_percent(slice.weight),
        format_currency(slice.tax),
        format_currency(slice.revenue)
    )
}

/// Output of `taxshare categories`.
#[derive(Debug, Clone, Copy)]
pub struct CategoryList<'a>(pub &'a BudgetSnapshot);

impl fmt::Display for CategoryList<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let budget = self.0;
        writeln!(f, "Fiscal year {} funding categories:", budget.fiscal_year)?;
        for category in budget.categories.values() {
            let source = match category.mixed_split {
                Some(split) => format!(
                    "{} ({} income / {} payroll)",
                    category.tax_source.label(),
                    format_percent(split.income_share),
                    format_percent(split.fica_share)
                ),
                None => category.tax_source.label().to_string(),
            };
            writeln!(
                f,
                "  {:<16} {:<28} {:>24}  {}",
                category.key,
                category.name,
                format_currency(category.budget_pool),
                source
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use taxshare_core::FicaTax;

    use super::*;

    #[test]
    fn tax_report_lists_components() {
        let report = TaxReport {
            tax_year: 2024,
            gross_income: dec!(50000),
            filing_status: FilingStatus::Single,
            standard_deduction: dec!(14600),
            liability: TaxLiability {
                income_tax: dec!(4016),
                fica: FicaTax {
                    social_security: dec!(3100),
                    medicare: dec!(725),
                    total: dec!(3825),
                },
            },
        };

        let text = report.to_string();

        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec![
                "Tax year:           2024",
                "Filing status:      Single",
                "Gross income:       $50,000.00",
                "Standard deduction: $14,600.00",
                "Taxable income:     $35,400.00",
                "",
                "Income tax:         $4,016.00",
                "Social Security:    $3,100.00",
                "Medicare:           $725.00",
                "FICA total:         $3,825.00",
                "Total federal tax:  $7,841.00",
            ]
        );
    }
}

//! Conversion of parsed records into core models, with structural checks.
//!
//! The calculations trust their tables; this is where the tables earn that
//! trust.

use rust_decimal::Decimal;
use taxshare_core::{
    BudgetSnapshot, ComparisonTable, ComparisonTier, FilingStatus, FundingCategory, MixedSplit,
    TaxBracket, TaxBracketTable, TaxSource, TaxYearConfig,
};
use tracing::warn;

use crate::loader::{BracketRecord, CategoryRecord, ComparisonRecord, RatesFile, ReferenceDataError};

pub(crate) fn build_tax_year(
    rates: &RatesFile,
    records: &[BracketRecord],
) -> Result<TaxYearConfig, ReferenceDataError> {
    let mut brackets = TaxBracketTable::default();

    for record in records {
        if record.tax_year != rates.tax_year {
            return Err(ReferenceDataError::TaxYearMismatch {
                expected: rates.tax_year,
                found: record.tax_year,
            });
        }

        let bracket = TaxBracket {
            upper_bound: record.upper_bound,
            rate: record.rate,
        };
        match record.filing_status.parse::<FilingStatus>()? {
            FilingStatus::Single => brackets.single.push(bracket),
            FilingStatus::Married => brackets.married.push(bracket),
        }
    }

    for status in FilingStatus::all() {
        validate_brackets(*status, brackets.for_status(*status))?;
    }

    Ok(TaxYearConfig {
        tax_year: rates.tax_year,
        brackets,
        standard_deduction: rates.standard_deduction,
        payroll: rates.payroll,
    })
}

/// Checks that bounds strictly increase, only the last bracket is unbounded,
/// and rates lie in [0, 1] without decreasing.
pub(crate) fn validate_brackets(
    status: FilingStatus,
    brackets: &[TaxBracket],
) -> Result<(), ReferenceDataError> {
    if brackets.is_empty() {
        return Err(ReferenceDataError::MissingBrackets(status));
    }

    let last = brackets.len() - 1;
    let mut previous_bound = Decimal::ZERO;
    let mut previous_rate = Decimal::ZERO;

    for (index, bracket) in brackets.iter().enumerate() {
        let row = index + 1;

        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(ReferenceDataError::InvalidRate {
                status,
                rate: bracket.rate,
            });
        }
        if bracket.rate < previous_rate {
            return Err(ReferenceDataError::DecreasingRate { status, row });
        }
        previous_rate = bracket.rate;

        match (bracket.upper_bound, index == last) {
            (None, true) => {}
            (None, false) | (Some(_), true) => {
                return Err(ReferenceDataError::UnboundedBracket(status));
            }
            (Some(bound), false) => {
                if bound <= previous_bound {
                    return Err(ReferenceDataError::NonIncreasingBound { status, row });
                }
                previous_bound = bound;
            }
        }
    }

    Ok(())
}

/// Revenue pools are share denominators and must be positive.
fn require_positive_revenue(
    pool: impl FnOnce() -> String,
    amount: Decimal,
) -> Result<(), ReferenceDataError> {
    if amount > Decimal::ZERO {
        return Ok(());
    }
    Err(ReferenceDataError::NonPositiveRevenue {
        pool: pool(),
        amount,
    })
}

pub(crate) fn build_budget(
    rates: &RatesFile,
    records: &[CategoryRecord],
) -> Result<BudgetSnapshot, ReferenceDataError> {
    require_positive_revenue(|| "revenue.income_tax".to_string(), rates.revenue.income_tax)?;
    require_positive_revenue(|| "revenue.payroll_tax".to_string(), rates.revenue.payroll_tax)?;

    let mut budget = BudgetSnapshot::new(
        rates.fiscal_year,
        rates.revenue.income_tax,
        rates.revenue.payroll_tax,
    );

    for record in records {
        let category = build_category(record)?;
        if budget.insert(category).is_some() {
            return Err(ReferenceDataError::DuplicateCategory(record.key.clone()));
        }
    }

    Ok(budget)
}

fn build_category(record: &CategoryRecord) -> Result<FundingCategory, ReferenceDataError> {
    let tax_source =
        TaxSource::parse(&record.tax_source).ok_or_else(|| ReferenceDataError::InvalidTaxSource {
            key: record.key.clone(),
            value: record.tax_source.clone(),
        })?;
    require_positive_revenue(
        || format!("revenue_pool of category '{}'", record.key),
        record.revenue_pool,
    )?;

    let mixed_split = match (tax_source, record.income_share, record.fica_share) {
        (TaxSource::Mixed, Some(income_share), Some(fica_share)) => Some(MixedSplit {
            income_share,
            fica_share,
        }),
        (TaxSource::Mixed, _, _) => {
            return Err(ReferenceDataError::MissingMixedSplit(record.key.clone()));
        }
        (_, None, None) => None,
        (_, _, _) => {
            warn!(
                category = %record.key,
                source = tax_source.as_str(),
                "share columns ignored for single-source category"
            );
            None
        }
    };

    Ok(FundingCategory {
        key: record.key.clone(),
        name: record.name.clone(),
        tax_source,
        budget_pool: record.budget_pool,
        revenue_pool: record.revenue_pool,
        mixed_split,
        description: record.description.clone(),
    })
}

/// Builds the comparison table; thresholds must strictly increase and only
/// the final tier may be unbounded.
pub(crate) fn build_comparisons(
    records: &[ComparisonRecord]
) -> Result<ComparisonTable, ReferenceDataError> {
    let Some(last) = records.len().checked_sub(1) else {
        return Err(ReferenceDataError::UnboundedTier);
    };

    let mut previous: Option<Decimal> = None;
    for (index, record) in records.iter().enumerate() {
        match (record.threshold_max, index == last) {
            (None, true) => {}
            (None, false) | (Some(_), true) => return Err(ReferenceDataError::UnboundedTier),
            (Some(threshold), false) => {
                if previous.is_some_and(|p| threshold <= p) {
                    return Err(ReferenceDataError::NonIncreasingThreshold(index + 1));
                }
                previous = Some(threshold);
            }
        }
    }

    Ok(ComparisonTable::new(
        records
            .iter()
            .map(|record| ComparisonTier {
                threshold_max: record.threshold_max,
                template: record.template.clone(),
            })
            .collect(),
    ))
}

//! Loading reference data directories from disk.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use taxshare_core::{Contribution, FilingStatus, ShareCalculationInput, TaxSource};
use taxshare_data::{CATEGORIES_FILE, COMPARISONS_FILE, ReferenceDataError, ReferenceDataLoader};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn loads_minimal_directory() {
    let data = ReferenceDataLoader::from_dir(&fixture("minimal")).expect("fixture should load");

    assert_eq!(data.tax_year.tax_year, 2030);
    assert_eq!(data.budget.fiscal_year, 2030);
    assert_eq!(
        data.budget.keys().collect::<Vec<_>>(),
        vec!["health", "parks", "pensions"]
    );
    assert_eq!(
        data.budget.category("pensions").map(|c| c.tax_source),
        Some(TaxSource::Fica)
    );
    assert_eq!(
        data.budget
            .category("pensions")
            .and_then(|c| c.description.as_deref()),
        Some("Retirement benefits")
    );
    assert_eq!(data.comparisons.tiers().len(), 2);
}

#[test]
fn loaded_tables_drive_the_calculation() {
    let data = ReferenceDataLoader::from_dir(&fixture("minimal")).expect("fixture should load");
    let input = ShareCalculationInput {
        contribution: Contribution::Estimated {
            gross_income: dec!(30000),
            filing_status: FilingStatus::Single,
        },
        spending_amount: dec!(300000),
        category: "health".to_string(),
    };

    let result = data.calculation().calculate(&input).unwrap();

    // (30000 - 10000) * 10%
    assert_eq!(result.income_tax, dec!(2000));
    // 30000 * (6% + 1%)
    assert_eq!(result.fica_tax, dec!(2100));
    // 2000 / 1M * 300k * 0.5 + 2100 / 500k * 300k * 0.5
    assert_eq!(result.share.your_share, dec!(930));
    // 930 / (4100 / 365) = 82.79
    assert_eq!(result.comparison, "83 days");
}

#[test]
fn rejects_non_increasing_bracket_bounds() {
    let result = ReferenceDataLoader::from_dir(&fixture("bad_brackets"));

    assert!(matches!(
        result,
        Err(ReferenceDataError::NonIncreasingBound {
            status: FilingStatus::Married,
            row: 2
        })
    ));
}

#[test]
fn rejects_mixed_category_without_split() {
    let result = ReferenceDataLoader::from_dir(&fixture("bad_categories"));

    match result {
        Err(err @ ReferenceDataError::MissingMixedSplit(_)) => {
            assert_eq!(
                err.to_string(),
                "mixed category 'health' requires both income_share and fica_share"
            );
        }
        other => panic!("expected MissingMixedSplit, got {other:?}"),
    }
}

#[test]
fn reports_the_missing_file() {
    let result = ReferenceDataLoader::from_dir(&fixture("missing_file"));

    match result {
        Err(ReferenceDataError::Io { path, .. }) => {
            assert!(path.ends_with(COMPARISONS_FILE));
            assert!(!path.ends_with(CATEGORIES_FILE));
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn rejects_zero_payroll_revenue() {
    let result = ReferenceDataLoader::from_dir(&fixture("zero_revenue"));

    match result {
        Err(err @ ReferenceDataError::NonPositiveRevenue { .. }) => {
            assert_eq!(err.to_string(), "revenue.payroll_tax must be positive, found 0");
        }
        other => panic!("expected NonPositiveRevenue, got {other:?}"),
    }
}

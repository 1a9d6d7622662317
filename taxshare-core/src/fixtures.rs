//! 2024 reference tables shared by the unit tests.

use rust_decimal_macros::dec;

use crate::models::{
    BudgetSnapshot, ComparisonTable, ComparisonTier, FundingCategory, MixedSplit,
    PayrollTaxRates, StandardDeduction, TaxBracket, TaxBracketTable, TaxSource, TaxYearConfig,
};

pub fn tax_year_2024() -> TaxYearConfig {
    TaxYearConfig {
        tax_year: 2024,
        brackets: TaxBracketTable {
            single: vec![
                TaxBracket::new(dec!(11600), dec!(0.10)),
                TaxBracket::new(dec!(47150), dec!(0.12)),
                TaxBracket::new(dec!(100525), dec!(0.22)),
                TaxBracket::new(dec!(191950), dec!(0.24)),
                TaxBracket::new(dec!(243725), dec!(0.32)),
                TaxBracket::new(dec!(609350), dec!(0.35)),
                TaxBracket::unbounded(dec!(0.37)),
            ],
            married: vec![
                TaxBracket::new(dec!(23200), dec!(0.10)),
                TaxBracket::new(dec!(94300), dec!(0.12)),
                TaxBracket::new(dec!(201050), dec!(0.22)),
                TaxBracket::new(dec!(383900), dec!(0.24)),
                TaxBracket::new(dec!(487450), dec!(0.32)),
                TaxBracket::new(dec!(731200), dec!(0.35)),
                TaxBracket::unbounded(dec!(0.37)),
            ],
        },
        standard_deduction: StandardDeduction {
            single: dec!(14600),
            married: dec!(29200),
        },
        payroll: PayrollTaxRates {
            social_security_rate: dec!(0.062),
            social_security_wage_base: dec!(168600),
            medicare_rate: dec!(0.0145),
            additional_medicare_rate: dec!(0.009),
            additional_medicare_threshold_single: dec!(200000),
            additional_medicare_threshold_married: dec!(250000),
        },
    }
}

pub fn budget_2024() -> BudgetSnapshot {
    let mut budget = BudgetSnapshot::new(2024, dec!(2400000000000), dec!(1700000000000));

    budget.insert(FundingCategory {
        key: "defense".to_string(),
        name: "National Defense".to_string(),
        tax_source: TaxSource::Income,
        budget_pool: dec!(850000000000),
        revenue_pool: dec!(2400000000000),
        mixed_split: None,
        description: None,
    });
    budget.insert(FundingCategory {
        key: "social_security".to_string(),
        name: "Social Security".to_string(),
        tax_source: TaxSource::Fica,
        budget_pool: dec!(1460000000000),
        revenue_pool: dec!(1700000000000),
        mixed_split: None,
        description: None,
    });
    budget.insert(FundingCategory {
        key: "medicare".to_string(),
        name: "Medicare".to_string(),
        tax_source: TaxSource::Mixed,
        budget_pool: dec!(874000000000),
        revenue_pool: dec!(4100000000000),
        mixed_split: Some(MixedSplit {
            income_share: dec!(0.6),
            fica_share: dec!(0.4),
        }),
        description: None,
    });

    budget
}

pub fn comparisons() -> ComparisonTable {
    ComparisonTable::new(vec![
        ComparisonTier::new(dec!(0.01), "Less than a single penny"),
        ComparisonTier::new(dec!(1.00), "About {cents} cents, less than a gumball"),
        ComparisonTier::new(dec!(5.00), "About the price of a cup of coffee"),
        ComparisonTier::new(dec!(20.00), "About the cost of a lunch out"),
        ComparisonTier::new(dec!(1000.00), "About {days} days of your federal taxes"),
        ComparisonTier::unbounded("More than a month's rent, or {days} days of your federal taxes"),
    ])
}

//! Static reference data: tax tables, the federal budget catalog and the
//! comparison tiers, loaded from TOML and CSV files.

mod loader;
mod reference;
mod validation;

pub use loader::{
    BRACKETS_FILE, BracketRecord, CATEGORIES_FILE, COMPARISONS_FILE, CategoryRecord,
    ComparisonRecord, RATES_FILE, RatesFile, ReferenceDataError, ReferenceDataLoader,
    ReferenceSources, RevenueTotals,
};
pub use reference::{BUNDLED_2024, ReferenceData};

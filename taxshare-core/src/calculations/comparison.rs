//! Human-scale comparison text for a share.
//!
//! Tiers are half-open ranges `[previous threshold, threshold_max)`: a share
//! exactly equal to a tier's `threshold_max` belongs to the next tier. With a
//! coffee tier ending at $5.00, $4.99 is "coffee" and $5.00 is not.
//!
//! Templates support two placeholders:
//!
//! | Placeholder | Replacement |
//! |-------------|-------------|
//! | `{cents}`   | share × 100, rounded to a whole number |
//! | `{days}`    | share ÷ (annual tax ÷ 365), rounded; 0 when annual tax is 0 |
//!
//! Both saturate at [`Decimal::MAX`] instead of overflowing.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::round_whole;
use crate::models::{ComparisonTable, ComparisonTier};

const DAYS_PER_YEAR: Decimal = Decimal::from_parts(365, 0, 0, false, 0);

impl ComparisonTable {
    /// First tier whose `threshold_max` is strictly greater than `share`.
    pub fn lookup(
        &self,
        share: Decimal,
    ) -> Option<&ComparisonTier> {
        self.tiers()
            .iter()
            .find(|tier| tier.threshold_max.is_none_or(|max| share < max))
    }
}

/// Renders the comparison text for `share`.
///
/// Returns an empty string if no tier matches, which cannot happen for a
/// table ending in an unbounded tier.
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxshare_core::calculations::get_comparison;
/// use taxshare_core::{ComparisonTable, ComparisonTier};
///
/// let table = ComparisonTable::new(vec![
///     ComparisonTier::new(dec!(1.00), "{cents} cents"),
///     ComparisonTier::unbounded("{days} days of taxes"),
/// ]);
///
/// assert_eq!(get_comparison(dec!(0.42), dec!(3650), &table), "42 cents");
/// assert_eq!(get_comparison(dec!(30), dec!(3650), &table), "3 days of taxes");
/// ```
pub fn get_comparison(
    share: Decimal,
    annual_tax: Decimal,
    table: &ComparisonTable,
) -> String {
    let Some(tier) = table.lookup(share) else {
        warn!(%share, "no comparison tier matched");
        return String::new();
    };

    tier.template
        .replace("{cents}", &cents(share).to_string())
        .replace("{days}", &days_of_tax(share, annual_tax).to_string())
}

/// The share in whole cents.
pub fn cents(share: Decimal) -> Decimal {
    round_whole(share.saturating_mul(Decimal::ONE_HUNDRED))
}

/// How many days of the user's annual tax the share represents.
pub fn days_of_tax(
    share: Decimal,
    annual_tax: Decimal,
) -> Decimal {
    if annual_tax <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let daily_tax = annual_tax / DAYS_PER_YEAR;
    share
        .checked_div(daily_tax)
        .map_or(Decimal::MAX, round_whole)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::fixtures::comparisons;

    // =========================================================================
    // lookup boundary tests
    // =========================================================================

    #[test]
    fn share_just_below_boundary_stays_in_lower_tier() {
        let table = comparisons();

        let result = get_comparison(dec!(4.99), dec!(8341), &table);

        assert_eq!(result, "About the price of a cup of coffee");
    }

    #[test]
    fn share_exactly_at_boundary_moves_to_next_tier() {
        let table = comparisons();

        let result = get_comparison(dec!(5.00), dec!(8341), &table);

        assert_eq!(result, "About the cost of a lunch out");
    }

    #[test]
    fn zero_share_uses_first_tier() {
        let table = comparisons();

        let result = get_comparison(Decimal::ZERO, dec!(8341), &table);

        assert_eq!(result, "Less than a single penny");
    }

    #[test]
    fn huge_share_falls_into_unbounded_tier() {
        let table = comparisons();

        let tier = table.lookup(dec!(1000000));

        assert_eq!(tier.and_then(|t| t.threshold_max), None);
    }

    #[test]
    fn empty_table_yields_empty_string() {
        let table = ComparisonTable::default();

        let result = get_comparison(dec!(3), dec!(1000), &table);

        assert_eq!(result, "");
    }

    #[test]
    fn table_without_unbounded_tier_yields_empty_above_last_threshold() {
        let table = ComparisonTable::new(vec![ComparisonTier::new(dec!(1), "small")]);

        assert_eq!(get_comparison(dec!(0.5), dec!(1000), &table), "small");
        assert_eq!(get_comparison(dec!(1), dec!(1000), &table), "");
    }

    // =========================================================================
    // placeholder tests
    // =========================================================================

    #[test]
    fn cents_placeholder_rounds_to_whole_cents() {
        let table = comparisons();

        let result = get_comparison(dec!(0.456), dec!(8341), &table);

        assert_eq!(result, "About 46 cents, less than a gumball");
    }

    #[test]
    fn days_placeholder_uses_daily_tax() {
        let table = comparisons();

        // 7300 / 365 = 20 per day; 100 / 20 = 5 days
        let result = get_comparison(dec!(100), dec!(7300), &table);

        assert_eq!(result, "About 5 days of your federal taxes");
    }

    #[test]
    fn days_is_zero_when_annual_tax_is_zero() {
        assert_eq!(days_of_tax(dec!(250), Decimal::ZERO), Decimal::ZERO);

        let result = get_comparison(dec!(250), Decimal::ZERO, &comparisons());

        assert_eq!(result, "About 0 days of your federal taxes");
    }

    #[test]
    fn days_rounds_half_away_from_zero() {
        // 3650 / 365 = 10 per day; 25 / 10 = 2.5 days
        assert_eq!(days_of_tax(dec!(25), dec!(3650)), dec!(3));
    }

    #[test]
    fn placeholders_saturate_for_enormous_shares() {
        let share = dec!(4000000000000000000000000000);

        assert_eq!(cents(share), Decimal::MAX);
        assert_eq!(days_of_tax(share, dec!(0.0001)), Decimal::MAX);

        let table = ComparisonTable::new(vec![ComparisonTier::unbounded("{cents} cents")]);
        let result = get_comparison(share, dec!(8341), &table);

        assert_eq!(result, format!("{} cents", Decimal::MAX));
    }
}

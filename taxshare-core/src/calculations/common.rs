//! Common utility functions for tax and share calculations.
//!
//! Intermediate values stay at full precision; these helpers are applied only
//! where a result is floored, guarded or turned into a display figure.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxshare_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(39.166666)), dec!(39.17));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to a whole number, halves away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxshare_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(498.5)), dec!(499));
/// assert_eq!(round_whole(dec!(498.49)), dec!(498));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Floors a value at zero.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}

/// Divides `numerator` by `denominator`, yielding zero for a zero denominator
/// or a quotient that does not fit in a [`Decimal`].
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use taxshare_core::calculations::common::ratio;
///
/// assert_eq!(ratio(dec!(1), dec!(4)), dec!(0.25));
/// assert_eq!(ratio(dec!(1), Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn ratio(
    numerator: Decimal,
    denominator: Decimal,
) -> Decimal {
    numerator
        .checked_div(denominator)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_small_values() {
        let result = round_half_up(dec!(0.001));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // round_whole tests
    // =========================================================================

    #[test]
    fn round_whole_rounds_half_away_from_zero() {
        assert_eq!(round_whole(dec!(2.5)), dec!(3));
        assert_eq!(round_whole(dec!(-2.5)), dec!(-3));
    }

    #[test]
    fn round_whole_drops_fractional_zeros() {
        let result = round_whole(dec!(499.00));

        assert_eq!(result.to_string(), "499");
    }

    // =========================================================================
    // clamp_non_negative / ratio tests
    // =========================================================================

    #[test]
    fn clamp_non_negative_floors_negative_values() {
        assert_eq!(clamp_non_negative(dec!(-0.01)), Decimal::ZERO);
        assert_eq!(clamp_non_negative(dec!(12.5)), dec!(12.5));
    }

    #[test]
    fn ratio_divides_normally() {
        let result = ratio(dec!(12000), dec!(2400000000000));

        assert_eq!(result, dec!(0.000000005));
    }

    #[test]
    fn ratio_returns_zero_for_zero_denominator() {
        let result = ratio(dec!(100), Decimal::ZERO);

        assert_eq!(result, Decimal::ZERO);
    }
}

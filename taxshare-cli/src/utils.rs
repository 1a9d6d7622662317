use rust_decimal::{Decimal, RoundingStrategy};
use taxshare_core::calculations::common::round_half_up;
use thiserror::Error;

const ONE_CENT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Error returned when a command-line amount cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAmountError {
    #[error("amount is empty")]
    Empty,

    #[error("invalid amount '{0}'")]
    Invalid(String),

    #[error("amount '{0}' must not be negative")]
    Negative(String),

    #[error("amount '{0}' is too large")]
    Overflow(String),
}

/// Normalizes input for decimal parsing: trims whitespace and removes the
/// dollar sign and commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(['$', ',', '_'], "")
}

/// Multiplier for a trailing magnitude suffix (`k`, `m`, `b`, `t`).
fn suffix_multiplier(suffix: char) -> Option<Decimal> {
    match suffix.to_ascii_lowercase() {
        'k' => Some(Decimal::ONE_THOUSAND),
        'm' => Some(Decimal::from(1_000_000_u64)),
        'b' => Some(Decimal::from(1_000_000_000_u64)),
        't' => Some(Decimal::from(1_000_000_000_000_u64)),
        _ => None,
    }
}

/// Parses a signed number with an optional `$`, comma separators and
/// magnitude suffix.
fn parse_signed(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let (number, multiplier) = match normalized.chars().last().and_then(suffix_multiplier) {
        Some(multiplier) => (&normalized[..normalized.len() - 1], multiplier),
        None => (normalized.as_str(), Decimal::ONE),
    };

    let value: Decimal = number.trim().parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid amount: {}", e);
        ParseAmountError::Invalid(s.to_string())
    })?;

    value
        .checked_mul(multiplier)
        .ok_or_else(|| ParseAmountError::Overflow(s.to_string()))
}

/// Parses a dollar amount typed on the command line.
///
/// Accepts a leading `$`, comma thousands separators and a magnitude suffix,
/// so `"$1,250.50"`, `"75k"` and `"10b"` all parse. Negative amounts are
/// rejected.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let value = parse_signed(s)?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ParseAmountError::Negative(s.to_string()));
    }
    Ok(value)
}

/// Parses a gross income. Same syntax as [`parse_amount`], but a loss such
/// as `-5k` is allowed through; the tax calculator treats it as zero income.
pub fn parse_income(s: &str) -> Result<Decimal, ParseAmountError> {
    parse_signed(s)
}

/// Inserts comma thousands separators into a string of ASCII digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders an already rounded value with `dp` decimals.
fn format_dollars(
    rounded: Decimal,
    dp: u32,
) -> String {
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.*}", dp as usize, rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    if fraction.is_empty() {
        format!("{sign}${}", group_thousands(whole))
    } else {
        format!("{sign}${}.{fraction}", group_thousands(whole))
    }
}

/// Formats a dollar amount as `$1,234.57`.
pub fn format_currency(value: Decimal) -> String {
    format_dollars(round_half_up(value), 2)
}

/// Formats a share of spending. Shares under one cent keep four decimals so
/// they do not collapse to `$0.00`.
pub fn format_share(value: Decimal) -> String {
    if value > Decimal::ZERO && value < ONE_CENT {
        format_dollars(
            value.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero),
            4,
        )
    } else {
        format_currency(value)
    }
}

/// Formats a fraction as a percentage, e.g. `0.6` as `60%`.
pub fn format_percent(fraction: Decimal) -> String {
    let percent = (fraction * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{percent}%")
}

/// Formats a tiny proportion as "1 in N", e.g. `0.000001` as `1 in 1,000,000`.
pub fn format_one_in(proportion: Decimal) -> String {
    match Decimal::ONE.checked_div(proportion) {
        Some(n) if proportion > Decimal::ZERO => {
            let whole = n.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            format!("1 in {}", group_thousands(&whole.abs().trunc().to_string()))
        }
        _ => "none".to_string(),
    }
}

//! Decimal helpers shared by the calculators.
//!
//! Every helper here is total: divisions by zero and overflow fall back to
//! zero or saturate, so no calculator can panic on extreme input.

use rust_decimal::{Decimal, RoundingStrategy};

/// Subtracts `rhs` from `lhs`, saturating at the representable range.
pub(crate) fn difference(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.saturating_sub(rhs)
}

/// Expresses `numerator` as a percentage of `denominator`.
///
/// Returns zero when the denominator is zero or the quotient overflows.
pub(crate) fn percentage_of(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

/// Rounds to `dp` decimal places with ties going towards positive infinity.
///
/// `2.5` rounds to `3` and `-2.5` rounds to `-2`. The result is normalized,
/// so `4.00` comes back as `4` and a zero result is always positive zero.
///
/// # Examples
///
/// ```
/// use audit_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_half_up(Decimal::new(25, 1), 0), Decimal::from(3));
/// assert_eq!(round_half_up(Decimal::new(-25, 1), 0), Decimal::from(-2));
/// assert_eq!(round_half_up(Decimal::new(40161, 4), 2), Decimal::new(402, 2));
/// ```
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    let rounded = value.round_dp_with_strategy(dp, strategy);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded.normalize()
    }
}

/// Formats an amount without grouping, dropping trailing zeros.
pub(crate) fn format_plain(value: Decimal) -> String {
    let normalized = value.normalize();
    if normalized.is_zero() {
        "0".to_string()
    } else {
        normalized.to_string()
    }
}

/// Formats an amount with comma thousands separators.
///
/// At most three fraction digits are kept and trailing zeros are trimmed,
/// so `30000` becomes `30,000` and `1234.5678` becomes `1,234.568`.
///
/// # Examples
///
/// ```
/// use audit_engine::calculation::format_grouped;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_grouped(Decimal::from(1_234_567)), "1,234,567");
/// assert_eq!(format_grouped(Decimal::new(-15005, 1)), "-1,500.5");
/// ```
pub fn format_grouped(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = format_plain(rounded);

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}

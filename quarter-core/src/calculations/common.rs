//! Common rounding helpers shared by the calculator and the formatter.
//!
//! All display rounding in this crate rounds half away from zero, both for
//! two-decimal output and for whole numbers, so the two modes never disagree
//! on which way a midpoint goes.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded to 0.01 (away from zero). The result
/// is padded to a scale of two, so `179` becomes `179.00`, unless the
/// 96-bit mantissa has no room left; callers must check `scale()` for values
/// above roughly 7.9e26.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quarter_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)).to_string(), "123.45");
/// assert_eq!(round_half_up(dec!(123.455)).to_string(), "123.46");
/// assert_eq!(round_half_up(dec!(-123.455)).to_string(), "-123.46"); // Away from zero
/// assert_eq!(round_half_up(dec!(179)).to_string(), "179.00");
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Rounds a float to the nearest whole number, ties away from zero.
///
/// Negative results that round to zero come back as positive zero.
///
/// ```
/// use quarter_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(2.5), 3.0);
/// assert_eq!(round_whole(-2.5), -3.0);
/// assert!(round_whole(-0.4).is_sign_positive());
/// ```
pub fn round_whole(value: f64) -> f64 {
    let rounded = value.round();
    if rounded == 0.0 { 0.0 } else { rounded }
}

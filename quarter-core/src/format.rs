//! Display formatting for amounts.
//!
//! | Mode | `71528.73` renders as |
//! |------|-----------------------|
//! | [`RoundingMode::TwoDecimal`] | `71,528.73` |
//! | [`RoundingMode::Full`] | `71528.73` (shortest round-trip form) |
//! | [`RoundingMode::Integer`] | `71529` |
//!
//! NaN and the infinities render as `"0"` in every mode. Zero never carries a
//! minus sign.

use rust_decimal::Decimal;

use crate::calculations::common::{round_half_up, round_whole};
use crate::models::{NumberLocale, RoundingMode};

/// Formats `value` for display using US English separators.
///
/// ```
/// use quarter_core::format::format_value;
/// use quarter_core::RoundingMode;
///
/// assert_eq!(format_value(71708.0, RoundingMode::TwoDecimal), "71,708.00");
/// assert_eq!(format_value(71528.73, RoundingMode::Integer), "71529");
/// assert_eq!(format_value(f64::NAN, RoundingMode::Full), "0");
/// ```
pub fn format_value(
    value: f64,
    mode: RoundingMode,
) -> String {
    format_value_with(value, mode, &NumberLocale::default())
}

/// Formats `value` for display under `mode`, grouping two-decimal output
/// with the separators of `locale`.
pub fn format_value_with(
    value: f64,
    mode: RoundingMode,
    locale: &NumberLocale,
) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    match mode {
        RoundingMode::Full => unsigned_zero(value).to_string(),
        RoundingMode::TwoDecimal => two_decimal(value, locale),
        RoundingMode::Integer => format!("{:.0}", round_whole(value)),
    }
}

fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Rounds on the exact binary value of `value`. Magnitudes a `Decimal`
/// cannot hold with two fractional digits fall back to the float formatter.
fn two_decimal(
    value: f64,
    locale: &NumberLocale,
) -> String {
    let plain = match Decimal::from_f64_retain(value)
        .map(round_half_up)
        .filter(|rounded| rounded.scale() == 2)
    {
        Some(rounded) => rounded.to_string(),
        None => format!("{:.2}", unsigned_zero(value)),
    };

    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer),
    };

    format!(
        "{sign}{}{}{fraction}",
        group_digits(digits, locale.group_separator),
        locale.decimal_separator
    )
}

/// Inserts `separator` between every group of three digits, counting from
/// the right.
fn group_digits(
    digits: &str,
    separator: char,
) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::compute;

    const ALL_MODES: [RoundingMode; 3] = [
        RoundingMode::TwoDecimal,
        RoundingMode::Full,
        RoundingMode::Integer,
    ];

    #[test]
    fn two_decimal_example_values() {
        let breakdown = compute(71708.0);

        assert_eq!(format_value(71708.0, RoundingMode::TwoDecimal), "71,708.00");
        assert_eq!(
            format_value(breakdown.percent_value, RoundingMode::TwoDecimal),
            "179.27"
        );
        assert_eq!(
            format_value(breakdown.result_value, RoundingMode::TwoDecimal),
            "71,528.73"
        );
    }

    #[test]
    fn two_decimal_groups_thousands() {
        assert_eq!(format_value(0.0, RoundingMode::TwoDecimal), "0.00");
        assert_eq!(format_value(999.0, RoundingMode::TwoDecimal), "999.00");
        assert_eq!(format_value(1000.0, RoundingMode::TwoDecimal), "1,000.00");
        assert_eq!(
            format_value(1234567.891, RoundingMode::TwoDecimal),
            "1,234,567.89"
        );
        assert_eq!(
            format_value(-1234567.0, RoundingMode::TwoDecimal),
            "-1,234,567.00"
        );
    }

    #[test]
    fn two_decimal_rounds_exact_midpoint_away_from_zero() {
        // 0.125 and 2.675 differ: the first is an exact binary midpoint, the
        // second is stored slightly below 2.675.
        assert_eq!(format_value(0.125, RoundingMode::TwoDecimal), "0.13");
        assert_eq!(format_value(-0.125, RoundingMode::TwoDecimal), "-0.13");
        assert_eq!(format_value(2.675, RoundingMode::TwoDecimal), "2.67");
    }

    #[test]
    fn two_decimal_never_prints_negative_zero() {
        assert_eq!(format_value(-0.0, RoundingMode::TwoDecimal), "0.00");
        assert_eq!(format_value(-0.001, RoundingMode::TwoDecimal), "0.00");
    }

    #[test]
    fn two_decimal_handles_values_too_large_for_decimal() {
        let formatted = format_value(1e30, RoundingMode::TwoDecimal);

        assert!(formatted.starts_with("1,000,000,000,000,000,0"));
        assert!(formatted.ends_with(".00"));
    }

    #[test]
    fn two_decimal_keeps_two_digits_near_decimal_capacity() {
        // Fits in a `Decimal`, but leaves no room in the mantissa for scale 2.
        assert_eq!(
            format_value(1e27, RoundingMode::TwoDecimal),
            "1,000,000,000,000,000,013,287,555,072.00"
        );

        for value in [7.9e26, 5e27, -3e27, 1e26, 1e28] {
            let formatted = format_value(value, RoundingMode::TwoDecimal);
            let (_, fraction) = formatted.rsplit_once('.').unwrap();

            assert_eq!(fraction.len(), 2, "{value} -> {formatted}");
        }
    }

    #[test]
    fn two_decimal_uses_locale_separators() {
        let german = NumberLocale::new('.', ',');

        assert_eq!(
            format_value_with(71528.73, RoundingMode::TwoDecimal, &german),
            "71.528,73"
        );
    }

    #[test]
    fn locale_does_not_affect_other_modes() {
        let german = NumberLocale::new('.', ',');

        assert_eq!(
            format_value_with(71528.73, RoundingMode::Full, &german),
            "71528.73"
        );
        assert_eq!(
            format_value_with(71528.73, RoundingMode::Integer, &german),
            "71529"
        );
    }

    #[test]
    fn full_precision_shows_raw_value() {
        assert_eq!(format_value(71708.0, RoundingMode::Full), "71708");
        assert_eq!(format_value(0.1 + 0.2, RoundingMode::Full), "0.30000000000000004");
        assert_eq!(format_value(-0.0, RoundingMode::Full), "0");
    }

    #[test]
    fn integer_mode_has_no_fraction_or_grouping() {
        let values = [0.4, 0.5, 179.27, 71528.73, 1234567.5, -2.5, -0.4, 1e21];

        for value in values {
            let formatted = format_value(value, RoundingMode::Integer);

            assert!(!formatted.contains('.'), "{value} -> {formatted}");
            assert!(!formatted.contains(','), "{value} -> {formatted}");
        }
    }

    #[test]
    fn integer_mode_rounds_half_away_from_zero() {
        assert_eq!(format_value(0.5, RoundingMode::Integer), "1");
        assert_eq!(format_value(2.5, RoundingMode::Integer), "3");
        assert_eq!(format_value(-2.5, RoundingMode::Integer), "-3");
        assert_eq!(format_value(-0.4, RoundingMode::Integer), "0");
        assert_eq!(format_value(71528.73, RoundingMode::Integer), "71529");
    }

    #[test]
    fn non_finite_values_render_as_zero_in_every_mode() {
        for mode in ALL_MODES {
            assert_eq!(format_value(f64::NAN, mode), "0");
            assert_eq!(format_value(f64::INFINITY, mode), "0");
            assert_eq!(format_value(f64::NEG_INFINITY, mode), "0");
        }
    }

    #[test]
    fn group_digits_inserts_separators_from_the_right() {
        assert_eq!(group_digits("1", ','), "1");
        assert_eq!(group_digits("123", ','), "123");
        assert_eq!(group_digits("1234", ','), "1,234");
        assert_eq!(group_digits("123456", ','), "123,456");
        assert_eq!(group_digits("1234567", ' '), "1 234 567");
    }
}

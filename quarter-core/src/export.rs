//! Plain-text rendering of a calculation for the clipboard.

use crate::format::format_value_with;
use crate::models::{NumberLocale, RoundingMode};

/// Builds the three-line clipboard block for an amount and its derived values.
///
/// ```
/// use quarter_core::export::clipboard_text;
/// use quarter_core::{NumberLocale, RoundingMode};
///
/// let text = clipboard_text(400.0, 1.0, 399.0, RoundingMode::Integer, &NumberLocale::default());
///
/// assert_eq!(text, "Amount: 400\n0.25%: 1\nAfter subtracting 0.25%: 399");
/// ```
pub fn clipboard_text(
    amount: f64,
    percent_value: f64,
    result_value: f64,
    mode: RoundingMode,
    locale: &NumberLocale,
) -> String {
    format!(
        "Amount: {}\n0.25%: {}\nAfter subtracting 0.25%: {}",
        format_value_with(amount, mode, locale),
        format_value_with(percent_value, mode, locale),
        format_value_with(result_value, mode, locale),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::calculations::compute;

    #[test]
    fn clipboard_text_uses_current_rounding_mode() {
        let breakdown = compute(71708.0);
        let locale = NumberLocale::default();

        let two_decimal = clipboard_text(
            71708.0,
            breakdown.percent_value,
            breakdown.result_value,
            RoundingMode::TwoDecimal,
            &locale,
        );
        let integer = clipboard_text(
            71708.0,
            breakdown.percent_value,
            breakdown.result_value,
            RoundingMode::Integer,
            &locale,
        );

        assert_eq!(
            two_decimal,
            "Amount: 71,708.00\n0.25%: 179.27\nAfter subtracting 0.25%: 71,528.73"
        );
        assert_eq!(
            integer,
            "Amount: 71708\n0.25%: 179\nAfter subtracting 0.25%: 71529"
        );
    }
}

//! Amount input normalization.

use std::num::ParseFloatError;

use thiserror::Error;

/// Error returned when amount text does not describe a finite number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseAmountError {
    /// Nothing left to parse after trimming and removing separators.
    #[error("amount is empty")]
    Empty,

    /// The text is not a numeric literal.
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    /// The text parsed, but to NaN or an infinity.
    #[error("amount '{0}' is not a finite number")]
    NonFinite(String),
}

/// Trims whitespace and removes commas (thousands separator).
fn strip_separators(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses amount text into a finite `f64`.
///
/// Commas are treated as thousands separators and removed wherever they
/// appear, so `"71,708"` and `"7,17,08"` both parse as `71708`.
///
/// ```
/// use quarter_core::input::{ParseAmountError, parse_amount};
///
/// assert_eq!(parse_amount("1,234.5"), Ok(1234.5));
/// assert_eq!(parse_amount("  "), Err(ParseAmountError::Empty));
/// ```
pub fn parse_amount(s: &str) -> Result<f64, ParseAmountError> {
    let normalized = strip_separators(s);
    if normalized.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let value: f64 = normalized
        .parse()
        .map_err(|source| ParseAmountError::Invalid {
            input: s.to_string(),
            source,
        })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParseAmountError::NonFinite(s.to_string()))
    }
}

/// Converts raw amount text into a finite number, falling back to zero.
///
/// Invalid input is not an error for the calculator: it simply shows zero
/// until the text becomes a number again.
///
/// ```
/// use quarter_core::input::normalize;
///
/// assert_eq!(normalize("71,708"), 71708.0);
/// assert_eq!(normalize("abc"), 0.0);
/// assert_eq!(normalize(""), 0.0);
/// ```
pub fn normalize(s: &str) -> f64 {
    match parse_amount(s) {
        Ok(value) => value,
        Err(ParseAmountError::Empty) => 0.0,
        Err(error) => {
            tracing::debug!(%error, "amount input coerced to zero");
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn normalize_accepts_comma_thousands_separator() {
        assert_eq!(normalize("71,708"), 71708.0);
        assert_eq!(normalize("1,234,567.89"), 1234567.89);
    }

    #[test]
    fn normalize_trims_whitespace() {
        assert_eq!(normalize("  123.45  "), 123.45);
    }

    #[test]
    fn normalize_empty_is_zero() {
        assert_eq!(normalize(""), 0.0);
        assert_eq!(normalize("   "), 0.0);
        assert_eq!(normalize(","), 0.0);
    }

    #[test]
    fn normalize_garbage_is_zero() {
        assert_eq!(normalize("abc"), 0.0);
        assert_eq!(normalize("12abc"), 0.0);
        assert_eq!(normalize("1.2.3"), 0.0);
        assert_eq!(normalize("$100"), 0.0);
    }

    #[test]
    fn normalize_rejects_radix_prefixes() {
        assert_eq!(normalize("0x1A"), 0.0);
        assert_eq!(normalize("0b101"), 0.0);
        assert_eq!(normalize("0o17"), 0.0);
    }

    #[test]
    fn normalize_non_finite_is_zero() {
        assert_eq!(normalize("inf"), 0.0);
        assert_eq!(normalize("-Infinity"), 0.0);
        assert_eq!(normalize("NaN"), 0.0);
        assert_eq!(normalize("1e400"), 0.0);
    }

    #[test]
    fn normalize_preserves_sign_and_fraction() {
        assert_eq!(normalize("-0.125"), -0.125);
        assert_eq!(normalize("+42.5"), 42.5);
        assert_eq!(normalize(".5"), 0.5);
        assert_eq!(normalize("2.5e3"), 2500.0);
    }

    #[test]
    fn parse_amount_reports_why_it_failed() {
        assert_eq!(parse_amount(""), Err(ParseAmountError::Empty));
        assert!(matches!(
            parse_amount("abc"),
            Err(ParseAmountError::Invalid { .. })
        ));
        assert_eq!(
            parse_amount("inf"),
            Err(ParseAmountError::NonFinite("inf".to_string()))
        );
    }
}

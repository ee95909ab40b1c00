//! The 0.25% deduction.
//!
//! | Value | Formula |
//! |-------|---------|
//! | percent value | amount × 0.0025 |
//! | result value  | amount − percent value |
//!
//! Both values use IEEE-754 double arithmetic. No correction is applied for
//! binary rounding error; the display layer decides how many digits to show.
//!
//! # Example
//!
//! ```
//! use quarter_core::calculations::compute;
//!
//! let breakdown = compute(71708.0);
//!
//! assert_eq!(breakdown.percent_value, 71708.0 * 0.0025);
//! assert_eq!(breakdown.result_value, 71708.0 - 71708.0 * 0.0025);
//! ```

/// Multiplier representing 0.25%.
pub const QUARTER_PERCENT_RATE: f64 = 0.0025;

/// The two values derived from an amount.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuarterPercent {
    /// 0.25% of the amount.
    pub percent_value: f64,

    /// The amount with the percent value subtracted.
    pub result_value: f64,
}

/// Computes 0.25% of `amount` and the amount remaining after subtracting it.
pub fn compute(amount: f64) -> QuarterPercent {
    let percent_value = amount * QUARTER_PERCENT_RATE;

    QuarterPercent {
        percent_value,
        result_value: amount - percent_value,
    }
}

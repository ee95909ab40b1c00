//! Calculation modules for the quarter-percent calculator.
//!
//! The arithmetic itself is plain `f64`; decimal types only appear when a
//! value is rounded for display.

pub mod common;
pub mod quarter_percent;

pub use quarter_percent::{QUARTER_PERCENT_RATE, QuarterPercent, compute};

pub mod calculations;
pub mod export;
pub mod format;
pub mod input;
pub mod models;
pub mod state;

pub use calculations::{QuarterPercent, compute};
pub use format::{format_value, format_value_with};
pub use input::{ParseAmountError, normalize, parse_amount};
pub use models::*;
pub use state::{
    CalculatorState, CopyFeedback, CopyTicket, DisplayRows, amount_input_hint, worked_example,
};

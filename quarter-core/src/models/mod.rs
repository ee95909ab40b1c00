mod number_locale;
mod rounding_mode;

pub use number_locale::NumberLocale;
pub use rounding_mode::{RoundingMode, UnknownRoundingMode};

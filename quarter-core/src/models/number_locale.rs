use serde::{Deserialize, Serialize};

/// Separators used when grouping and printing two-decimal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumberLocale {
    pub group_separator: char,
    pub decimal_separator: char,
}

impl Default for NumberLocale {
    /// US English: `71,528.73`.
    fn default() -> Self {
        Self {
            group_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl NumberLocale {
    pub fn new(
        group_separator: char,
        decimal_separator: char,
    ) -> Self {
        Self {
            group_separator,
            decimal_separator,
        }
    }

    /// A locale is usable only when the two separators can be told apart.
    pub fn is_unambiguous(&self) -> bool {
        self.group_separator != self.decimal_separator
    }
}

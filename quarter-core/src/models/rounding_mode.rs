use thiserror::Error;

/// How a value is rounded when it is shown to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Two fractional digits with thousands grouping.
    #[default]
    TwoDecimal,
    /// The raw floating-point value.
    Full,
    /// Nearest whole number.
    Integer,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown rounding mode '{0}'")]
pub struct UnknownRoundingMode(pub String);

impl RoundingMode {
    /// Every mode, in the order the selector lists them.
    pub fn all() -> &'static [RoundingMode] {
        &[
            RoundingMode::TwoDecimal,
            RoundingMode::Full,
            RoundingMode::Integer,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TwoDecimal => "2 decimal places (recommended)",
            Self::Full => "Full precision",
            Self::Integer => "Nearest integer",
        }
    }

    /// Position of this mode in [`RoundingMode::all`].
    pub fn index(&self) -> usize {
        match self {
            Self::TwoDecimal => 0,
            Self::Full => 1,
            Self::Integer => 2,
        }
    }
}

impl TryFrom<&str> for RoundingMode {
    type Error = UnknownRoundingMode;

    fn try_from(label: &str) -> Result<Self, Self::Error> {
        Self::all()
            .iter()
            .copied()
            .find(|mode| mode.label() == label)
            .ok_or_else(|| UnknownRoundingMode(label.to_string()))
    }
}

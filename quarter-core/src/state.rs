//! Calculator state for the interactive surface.
//!
//! This holds everything the calculator window shows. It lives only as long
//! as the window does and is never persisted. Every mutation recomputes the
//! derived values synchronously, so readers always see a consistent snapshot.

use crate::calculations::{QuarterPercent, compute};
use crate::export::clipboard_text;
use crate::format::format_value_with;
use crate::input::normalize;
use crate::models::{NumberLocale, RoundingMode};

/// Amount text loaded on startup and by the "Load example" action.
pub const EXAMPLE_AMOUNT: &str = "71708";

/// Amount text set by the "Reset" action.
pub const RESET_AMOUNT: &str = "0";

/// The three formatted values shown in the result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRows {
    pub amount: String,
    pub percent_value: String,
    pub result_value: String,
}

/// Identifies one copy confirmation. Only the most recent ticket can clear
/// the confirmation again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyTicket(u64);

/// Transient "copied" indicator for the copy button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

impl CopyFeedback {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Label for the copy button.
    pub fn label(&self) -> &'static str {
        if self.copied { "Copied ✓" } else { "Copy results" }
    }

    /// Marks a successful copy. Any ticket handed out earlier becomes stale.
    pub fn confirm(&mut self) -> CopyTicket {
        self.generation += 1;
        self.copied = true;
        CopyTicket(self.generation)
    }

    /// Marks a failed copy. The indicator stays off.
    pub fn fail(&mut self) {
        self.generation += 1;
        self.copied = false;
    }

    /// Clears the indicator if `ticket` belongs to the latest confirmation.
    ///
    /// Returns `true` when the indicator changed.
    pub fn expire(
        &mut self,
        ticket: CopyTicket,
    ) -> bool {
        if ticket.0 != self.generation || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }
}

#[derive(Debug, Clone)]
pub struct CalculatorState {
    amount_input: String,
    amount: f64,
    breakdown: QuarterPercent,
    rounding_mode: RoundingMode,
    copy_feedback: CopyFeedback,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Creates a state prefilled with [`EXAMPLE_AMOUNT`].
    pub fn new() -> Self {
        let mut state = Self {
            amount_input: String::new(),
            amount: 0.0,
            breakdown: QuarterPercent::default(),
            rounding_mode: RoundingMode::default(),
            copy_feedback: CopyFeedback::default(),
        };
        state.set_amount_input(EXAMPLE_AMOUNT);
        state
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn percent_value(&self) -> f64 {
        self.breakdown.percent_value
    }

    pub fn result_value(&self) -> f64 {
        self.breakdown.result_value
    }

    pub fn rounding_mode(&self) -> RoundingMode {
        self.rounding_mode
    }

    pub fn copy_feedback(&self) -> &CopyFeedback {
        &self.copy_feedback
    }

    pub fn copy_feedback_mut(&mut self) -> &mut CopyFeedback {
        &mut self.copy_feedback
    }

    /// Replaces the raw amount text and recomputes everything derived from it.
    pub fn set_amount_input(
        &mut self,
        raw: impl Into<String>,
    ) {
        self.amount_input = raw.into();
        self.amount = normalize(&self.amount_input);
        self.breakdown = compute(self.amount);
    }

    /// Changes only how values are displayed.
    pub fn set_rounding_mode(
        &mut self,
        mode: RoundingMode,
    ) {
        self.rounding_mode = mode;
    }

    pub fn load_example(&mut self) {
        self.set_amount_input(EXAMPLE_AMOUNT);
    }

    /// Clears the amount to zero and restores the default rounding mode.
    pub fn reset(&mut self) {
        self.set_amount_input(RESET_AMOUNT);
        self.rounding_mode = RoundingMode::default();
    }

    pub fn display_rows(
        &self,
        locale: &NumberLocale,
    ) -> DisplayRows {
        DisplayRows {
            amount: format_value_with(self.amount, self.rounding_mode, locale),
            percent_value: format_value_with(self.percent_value(), self.rounding_mode, locale),
            result_value: format_value_with(self.result_value(), self.rounding_mode, locale),
        }
    }

    /// Text placed on the clipboard by the copy action.
    pub fn clipboard_text(
        &self,
        locale: &NumberLocale,
    ) -> String {
        clipboard_text(
            self.amount,
            self.percent_value(),
            self.result_value(),
            self.rounding_mode,
            locale,
        )
    }
}

/// Illustration line for the fixed example amount. It does not depend on
/// the current input or rounding mode.
pub fn worked_example(locale: &NumberLocale) -> String {
    let amount = normalize(EXAMPLE_AMOUNT);
    let breakdown = compute(amount);

    format!(
        "Example (prefilled): {EXAMPLE_AMOUNT} → 0.25% = {} → after subtract = {}",
        format_value_with(breakdown.percent_value, RoundingMode::TwoDecimal, locale),
        format_value_with(breakdown.result_value, RoundingMode::TwoDecimal, locale),
    )
}

/// Tells the user how to type amounts when `locale` displays them in a form
/// the input field would not read back. `None` for the en-US default.
pub fn amount_input_hint(locale: &NumberLocale) -> Option<String> {
    if *locale == NumberLocale::default() {
        return None;
    }

    Some(format!(
        "Type amounts with '.' as the decimal point, e.g. 71528.73 or 71,528.73. \
         Commas are ignored, so {} would be read as a different number.",
        format_value_with(71528.73, RoundingMode::TwoDecimal, locale)
    ))
}

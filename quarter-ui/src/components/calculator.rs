use std::{sync::Arc, time::Duration};

use gpui::{
    AppContext, ClickEvent, Context, Div, Entity, FontWeight, IntoElement, ParentElement, Render,
    SharedString, Styled, Subscription, Task, TextAlign, Window, div, px,
};
use gpui_component::{
    IndexPath, h_flex,
    input::{Input, InputEvent, InputState},
    select::{Select, SelectEvent, SelectState},
    v_flex,
};
use quarter_core::{CalculatorState, NumberLocale, RoundingMode, amount_input_hint, worked_example};
use tracing::{debug, info, warn};

use crate::{
    clipboard::{ClipboardWriter, record_copy_outcome},
    components::{make_button, make_secondary_button},
    config::Settings,
};

const TITLE: &str = "0.25% Calculator";

const DESCRIPTION: &str = "Type any amount and this tool will compute 0.25% (0.0025 × amount) \
     and subtract it from the original amount. Results shown with selectable rounding.";

const PRECISION_NOTE: &str = "Precision note: computation uses binary floating point. Use Full \
     precision if you want the raw value, or select rounding for display-friendly numbers.";

const AMOUNT_PLACEHOLDER: &str = "Enter amount (e.g. 71708)";

type RoundingSelect = SelectState<Vec<SharedString>>;

/// The calculator window: amount input, rounding selector, the three result
/// rows and the copy/reset/example actions.
pub struct CalculatorView {
    calculator: CalculatorState,
    locale: NumberLocale,
    copy_feedback_delay: Duration,
    clipboard: Arc<dyn ClipboardWriter>,

    amount_input: Entity<InputState>,
    rounding: Entity<RoundingSelect>,

    /// Pending clipboard write and confirmation revert. Replacing it cancels
    /// the previous one.
    copy_task: Option<Task<()>>,
    _subscriptions: Vec<Subscription>,
}

impl CalculatorView {
    pub fn new(
        settings: &Settings,
        clipboard: Arc<dyn ClipboardWriter>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let calculator = CalculatorState::new();

        let initial_amount = calculator.amount_input().to_string();
        let amount_input = cx.new(|input_cx| {
            InputState::new(window, input_cx)
                .placeholder(AMOUNT_PLACEHOLDER)
                .default_value(initial_amount)
        });

        let labels: Vec<SharedString> = RoundingMode::all()
            .iter()
            .map(|mode| SharedString::from(mode.label()))
            .collect();
        let initial_index = Some(IndexPath::default().row(calculator.rounding_mode().index()));
        let rounding = cx.new(|select_cx| SelectState::new(labels, initial_index, window, select_cx));

        let subscriptions = vec![
            cx.subscribe_in(&amount_input, window, Self::on_amount_input_event),
            cx.subscribe_in(&rounding, window, Self::on_rounding_event),
            cx.on_window_closed(|app_cx| {
                info!("Calculator window closed");
                app_cx.quit();
            }),
        ];

        Self {
            calculator,
            locale: settings.format,
            copy_feedback_delay: settings.copy_feedback_delay(),
            clipboard,
            amount_input,
            rounding,
            copy_task: None,
            _subscriptions: subscriptions,
        }
    }

    fn on_amount_input_event(
        &mut self,
        state: &Entity<InputState>,
        event: &InputEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if !matches!(event, InputEvent::Change { .. }) {
            return;
        }

        let raw = state.read(cx).value().to_string();
        self.calculator.set_amount_input(raw);
        debug!(amount = self.calculator.amount(), "amount changed");
        cx.notify();
    }

    fn on_rounding_event(
        &mut self,
        _state: &Entity<RoundingSelect>,
        event: &SelectEvent<Vec<SharedString>>,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let SelectEvent::Confirm(Some(label)) = event else {
            return;
        };

        match RoundingMode::try_from(label.as_ref()) {
            Ok(mode) => {
                debug!(?mode, "rounding mode changed");
                self.calculator.set_rounding_mode(mode);
                cx.notify();
            }
            Err(error) => warn!(%error, "ignoring rounding selection"),
        }
    }

    fn load_example(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        info!("Loading example amount");
        self.calculator.load_example();
        self.sync_controls(window, cx);
        cx.notify();
    }

    fn reset(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        info!("Resetting calculator");
        self.calculator.reset();
        self.sync_controls(window, cx);
        cx.notify();
    }

    /// Pushes the calculator's input text and rounding mode back into the
    /// input and select widgets after a programmatic change.
    fn sync_controls(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let text = self.calculator.amount_input().to_string();
        self.amount_input
            .update(cx, |state, input_cx| state.set_value(text, window, input_cx));

        let index = IndexPath::default().row(self.calculator.rounding_mode().index());
        self.rounding.update(cx, |state, select_cx| {
            state.set_selected_index(Some(index), window, select_cx)
        });
    }

    fn copy_results(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        let text = self.calculator.clipboard_text(&self.locale);
        let clipboard = self.clipboard.clone();
        let delay = self.copy_feedback_delay;

        self.copy_task = Some(cx.spawn(async move |this, cx| {
            let outcome = cx
                .background_executor()
                .spawn(async move { clipboard.write_text(&text) })
                .await;

            let ticket = this
                .update(cx, |view, view_cx| {
                    let ticket =
                        record_copy_outcome(view.calculator.copy_feedback_mut(), outcome);
                    view_cx.notify();
                    ticket
                })
                .ok()
                .flatten();
            let Some(ticket) = ticket else {
                return;
            };

            cx.background_executor().timer(delay).await;
            let _ = this.update(cx, |view, view_cx| {
                if view.calculator.copy_feedback_mut().expire(ticket) {
                    view_cx.notify();
                }
            });
        }));
    }
}

impl Render for CalculatorView {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let rows = self.calculator.display_rows(&self.locale);
        let copy_label = self.calculator.copy_feedback().label();

        v_flex()
            .size_full()
            .p_6()
            .gap_4()
            .child(
                h_flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .text_2xl()
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(TITLE),
                    )
                    .child(make_secondary_button(
                        "load-example",
                        "Load example",
                        cx.listener(|this, _: &ClickEvent, window, cx| {
                            this.load_example(window, cx)
                        }),
                    )),
            )
            .child(div().text_sm().child(DESCRIPTION))
            .child(make_labeled_row("Amount").child(Input::new(&self.amount_input).flex_grow()))
            .children(
                amount_input_hint(&self.locale).map(|hint| div().text_xs().child(hint)),
            )
            .child(make_labeled_row("Rounding").child(Select::new(&self.rounding).w_full()))
            .child(
                v_flex()
                    .gap_2()
                    .p_4()
                    .rounded_md()
                    .border_1()
                    .child(make_value_row("Original amount", rows.amount))
                    .child(make_value_row(
                        "0.25% of amount (0.0025 × amount)",
                        rows.percent_value,
                    ))
                    .child(
                        make_value_row("After subtracting 0.25%", rows.result_value)
                            .text_lg()
                            .font_weight(FontWeight::SEMIBOLD),
                    ),
            )
            .child(
                h_flex()
                    .gap_3()
                    .items_center()
                    .child(make_button(
                        "copy-results",
                        copy_label,
                        cx.listener(|this, _: &ClickEvent, _window, cx| this.copy_results(cx)),
                    ))
                    .child(make_secondary_button(
                        "reset",
                        "Reset",
                        cx.listener(|this, _: &ClickEvent, window, cx| this.reset(window, cx)),
                    )),
            )
            .child(div().text_xs().child(PRECISION_NOTE))
            .child(
                div()
                    .border_t_1()
                    .pt_4()
                    .text_sm()
                    .child(worked_example(&self.locale)),
            )
    }
}

/// Label on the left, control on the right, aligned with the other rows.
fn make_labeled_row(label: impl Into<SharedString>) -> Div {
    h_flex().items_center().gap_5().child(
        div()
            .min_w(px(90.))
            .text_align(TextAlign::Right)
            .child(label.into()),
    )
}

/// A read-only result row: description left, formatted value right-aligned.
fn make_value_row(
    label: impl Into<SharedString>,
    value: String,
) -> Div {
    h_flex()
        .justify_between()
        .gap_3()
        .child(div().text_sm().child(label.into()))
        .child(
            div()
                .text_align(TextAlign::Right)
                .font_weight(FontWeight::MEDIUM)
                .child(value),
        )
}

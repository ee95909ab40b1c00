pub mod calculator;

use gpui::{App, SharedString, Window};
use gpui::{ClickEvent, Styled};
use gpui::{Pixels, Size, px};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariants};

pub use calculator::CalculatorView;

use crate::config::WindowSettings;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl From<&WindowSettings> for WindowPreferences {
    fn from(settings: &WindowSettings) -> Self {
        Self {
            size: Size {
                width: px(settings.width),
                height: px(settings.height),
            },
        }
    }
}

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .large()
        .flex_1()
        .label(label.into())
        .on_click(on_click)
}

/// Creates a low-emphasis button for secondary actions such as reset.
pub fn make_secondary_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .ghost()
        .small()
        .label(label.into())
        .on_click(on_click)
}

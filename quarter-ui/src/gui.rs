use std::sync::Arc;

use gpui::{
    AnyView, App, AppContext, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::info;

use crate::{
    Quit,
    clipboard::SystemClipboard,
    components::{CalculatorView, WindowPreferences},
    config::Settings,
    quit,
};

const WINDOW_TITLE: &str = "0.25% Calculator";

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: WINDOW_TITLE.into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator window, centered on the primary display.
pub fn open_main_window(
    settings: &Settings,
    app_cx: &mut App,
) -> anyhow::Result<()> {
    let preferences = WindowPreferences::from(&settings.window);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None,
            preferences.size,
            app_cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some(WINDOW_TITLE.into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    let settings = settings.clone();
    app_cx.open_window(options, move |window, cx| {
        let view = cx.new(|view_cx| {
            CalculatorView::new(&settings, Arc::new(SystemClipboard), window, view_cx)
        });
        let view: AnyView = view.into();
        cx.new(|root_cx| Root::new(view, window, root_cx))
    })?;

    info!("Calculator window opened");
    Ok(())
}

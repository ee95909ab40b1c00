use std::path::PathBuf;

use clap::Parser;
use gpui::{App, Application};
use tracing::{debug, error, info};

use quarter_ui::{
    config::Settings,
    logging::{enable_file_logging, init_logging},
    open_main_window, setup_app,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Desktop calculator for 0.25% of an amount.
///
/// Shows the amount, 0.25% of it and what remains after subtracting it,
/// with selectable display rounding.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML settings file. Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `info,quarter_core=trace`.
    /// Overrides the level from the settings file; `RUST_LOG` overrides both.
    #[arg(long)]
    log_level: Option<String>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;

    init_logging(cli.log_level.as_deref().or(settings.log.level.as_deref()));
    if let Some(path) = &settings.log.file {
        enable_file_logging(path)?;
    }
    debug!(?settings, "settings loaded");

    info!("Starting calculator");
    Application::new().run(move |cx: &mut App| {
        setup_app(cx);

        if let Err(error) = open_main_window(&settings, cx) {
            error!(?error, "failed to open calculator window");
            cx.quit();
        }
    });

    Ok(())
}

//! Application settings loaded from an optional TOML file.
//!
//! Every key is optional; anything left out falls back to [`Settings::default`].

use std::{fs, path::Path, path::PathBuf, time::Duration};

use quarter_core::NumberLocale;
use serde::Deserialize;
use thiserror::Error;

/// Delay before the "Copied ✓" label reverts.
pub const DEFAULT_COPY_FEEDBACK_MS: u64 = 1800;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("group and decimal separator are both '{0}'")]
    AmbiguousSeparators(char),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 560.0,
            height: 640.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClipboardSettings {
    /// Milliseconds the copy confirmation stays visible.
    pub feedback_ms: u64,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Filter directive, e.g. `"debug"` or `"info,quarter_core=trace"`.
    pub level: Option<String>,
    /// File that receives a copy of every log record.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub window: WindowSettings,
    pub format: NumberLocale,
    pub clipboard: ClipboardSettings,
    pub log: LogSettings,
}

impl Settings {
    /// Loads settings from `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(text)?;
        if !settings.format.is_unambiguous() {
            return Err(ConfigError::AmbiguousSeparators(
                settings.format.group_separator,
            ));
        }
        Ok(settings)
    }

    pub fn copy_feedback_delay(&self) -> Duration {
        Duration::from_millis(self.clipboard.feedback_ms)
    }
}

//! Page configuration.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use formbind::{ListboxConfig, Theme};
use log::LevelFilter;
use termcell::Easing;
use thiserror::Error;

const ENV_REDUCED_MOTION: &str = "ASSIGN_TUI_REDUCED_MOTION";
const ENV_FADE_MS: &str = "ASSIGN_TUI_FADE_MS";
const ENV_LOG: &str = "ASSIGN_TUI_LOG";
const ENV_THEME: &str = "ASSIGN_TUI_THEME";

/// Everything the page and its runtime can be tuned with.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Listbox fade, sizing and placeholder.
    pub listbox: ListboxConfig,

    pub theme: Theme,

    /// Redraw interval while an animation runs.
    pub frame_interval: Duration,

    /// Level written to the log file.
    pub log_level: LevelFilter,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            listbox: ListboxConfig::default()
                .fade(Duration::from_millis(100), Easing::EaseIn)
                .max_visible(8),
            theme: Theme::light(),
            frame_interval: Duration::from_millis(16),
            log_level: LevelFilter::Debug,
        }
    }
}

impl PageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close the listbox without fading.
    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.listbox = self.listbox.reduced_motion(enabled);
        self
    }

    pub fn fade(mut self, duration: Duration) -> Self {
        let easing = self.listbox.easing;
        self.listbox = self.listbox.fade(duration, easing);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Defaults with overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults with overrides from `lookup` (the environment, in practice).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_REDUCED_MOTION) {
            config = config.reduced_motion(parse_bool(ENV_REDUCED_MOTION, &raw)?);
        }
        if let Some(raw) = lookup(ENV_FADE_MS) {
            let ms = raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: ENV_FADE_MS,
                value: raw.clone(),
            })?;
            config = config.fade(Duration::from_millis(ms));
        }
        if let Some(raw) = lookup(ENV_LOG) {
            let level = LevelFilter::from_str(raw.trim()).map_err(|_| ConfigError::Invalid {
                key: ENV_LOG,
                value: raw.clone(),
            })?;
            config = config.log_level(level);
        }
        if let Some(raw) = lookup(ENV_THEME) {
            let theme = match raw.trim().to_ascii_lowercase().as_str() {
                "light" => Theme::light(),
                "dark" => Theme::dark(),
                _ => {
                    return Err(ConfigError::Invalid {
                        key: ENV_THEME,
                        value: raw,
                    });
                }
            };
            config = config.theme(theme);
        }

        Ok(config)
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
        }),
    }
}

/// A configuration override that could not be parsed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

//! User settings loaded from `settings.conf`.
//!
//! The file lives in `$XDG_CONFIG_HOME/livetranslate/` or
//! `$HOME/.config/livetranslate/` and uses `key = value` lines. Missing files
//! and invalid values fall back to defaults with a warning; nothing here is
//! fatal.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::languages::{self, AUTO_DETECT, DEFAULT_TARGET};
use crate::session::SessionConfig;
use crate::sources::DEFAULT_ENDPOINT;

mod parse;
mod paths;

pub use parse::parse_settings;
pub use paths::{config_dir, logs_dir};

/// Raw user preferences as read from disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Default source language code.
    pub lang_from: String,
    /// Default target language code.
    pub lang_to: String,
    /// Debounce window in milliseconds.
    pub debounce_ms: u64,
    /// Per-request backend timeout in seconds.
    pub request_timeout_secs: u64,
    /// Translation endpoint.
    pub backend_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lang_from: AUTO_DETECT.as_str().to_string(),
            lang_to: DEFAULT_TARGET.as_str().to_string(),
            debounce_ms: 500,
            request_timeout_secs: 10,
            backend_url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Settings {
    /// What: Load settings from the user's `settings.conf`.
    ///
    /// Output:
    /// - Parsed settings, or defaults when no file exists or it cannot be read.
    #[must_use]
    pub fn load() -> Self {
        match paths::resolve_settings_config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("[Config] No settings.conf found; using defaults");
                Self::default()
            }
        }
    }

    /// What: Load settings from a specific file.
    ///
    /// Inputs:
    /// - `path`: File to read
    ///
    /// Output:
    /// - Parsed settings layered over defaults; defaults on read failure.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let mut settings = Self::default();
        match fs::read_to_string(path) {
            Ok(content) => {
                parse_settings(&content, &mut settings);
                tracing::info!(path = %path.display(), "[Config] Loaded settings");
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "[Config] Failed to read settings");
            }
        }
        settings
    }

    /// Backend timeout as a `Duration`.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// What: Build a validated session configuration.
    ///
    /// Output:
    /// - `SessionConfig` with catalog-checked languages.
    ///
    /// Details:
    /// - Unknown source codes fall back to auto-detect.
    /// - Unknown targets, and auto-detect as target, fall back to English.
    /// - Each fallback is logged as a warning.
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        let source = languages::lookup_code(&self.lang_from).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "[Config] Invalid lang_from; using auto-detect");
            AUTO_DETECT
        });
        let target = match languages::lookup_code(&self.lang_to) {
            Ok(code) if !code.is_auto() => code,
            Ok(_) => {
                tracing::warn!("[Config] lang_to cannot be auto; using {DEFAULT_TARGET}");
                DEFAULT_TARGET
            }
            Err(e) => {
                tracing::warn!(error = %e, "[Config] Invalid lang_to; using {DEFAULT_TARGET}");
                DEFAULT_TARGET
            }
        };
        let debounce = Duration::from_millis(self.debounce_ms);
        SessionConfig::new(source, target, debounce).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "[Config] Using default languages");
            SessionConfig::default().with_debounce(debounce)
        })
    }
}

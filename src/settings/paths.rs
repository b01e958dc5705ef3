use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the config base.
const APP_DIR: &str = "livetranslate";

/// What: Candidate locations of `settings.conf`, in priority order.
///
/// Inputs:
/// - `home`: Value of `$HOME`, if set
/// - `xdg_config`: Value of `$XDG_CONFIG_HOME`, if set
///
/// Output:
/// - `$XDG_CONFIG_HOME/livetranslate/settings.conf` first, then
///   `$HOME/.config/livetranslate/settings.conf`.
fn settings_candidates(home: Option<&str>, xdg_config: Option<&str>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(xdg) = xdg_config.filter(|x| !x.trim().is_empty()) {
        candidates.push(Path::new(xdg).join(APP_DIR).join("settings.conf"));
    }
    if let Some(h) = home {
        candidates.push(
            Path::new(h)
                .join(".config")
                .join(APP_DIR)
                .join("settings.conf"),
        );
    }
    candidates
}

/// Existing `settings.conf`, searched under XDG then HOME.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    settings_candidates(home.as_deref(), xdg_config.as_deref())
        .into_iter()
        .find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory for livetranslate (ensured to exist when possible).
#[must_use]
pub fn config_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `.../livetranslate/logs` (ensured to exist when possible).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

//! Platform directory layout.
//!
//! - data (review state): macOS `~/Library/Application Support/redesign-review`,
//!   Linux `$XDG_DATA_HOME/redesign-review` or `~/.local/share/redesign-review`,
//!   Windows `%APPDATA%\redesign-review`
//! - config (settings.json): macOS same as data, Linux `$XDG_CONFIG_HOME` or
//!   `~/.config`, Windows `%APPDATA%`

use std::path::{Path, PathBuf};

pub(crate) const APP_NAME: &str = "redesign-review";
const STATE_DIR: &str = "state";
const LOG_DIR: &str = "logs";

fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        home_dir().map(|home| home.join("Library/Application Support").join(APP_NAME))
    }

    #[cfg(target_os = "linux")]
    {
        xdg_or_home("XDG_DATA_HOME", ".local/share").map(|dir| dir.join(APP_NAME))
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        xdg_or_home("XDG_CONFIG_HOME", ".config").map(|dir| dir.join(APP_NAME))
    }

    #[cfg(not(target_os = "linux"))]
    {
        get_app_data_dir()
    }
}

#[cfg(target_os = "linux")]
fn xdg_or_home(var: &str, fallback: &str) -> Option<PathBuf> {
    match std::env::var(var) {
        Ok(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => home_dir().map(|home| home.join(fallback)),
    }
}

#[cfg(any(target_os = "macos", target_os = "linux"))]
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

pub fn get_state_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(STATE_DIR))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn ensure_state_dir() -> std::io::Result<PathBuf> {
    ensure_dir(get_state_dir(), "Cannot determine state directory")
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    ensure_dir(get_log_dir(), "Cannot determine log directory")
}

fn ensure_dir(dir: Option<PathBuf>, missing: &str) -> std::io::Result<PathBuf> {
    let dir = dir.ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, missing))?;
    create_dir_if_missing(&dir)?;
    Ok(dir)
}

pub(crate) fn create_dir_if_missing(dir: &Path) -> std::io::Result<()> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;

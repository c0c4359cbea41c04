// Platform-specific locations for sessionfiddle.
// Only the configuration directory is needed: that is where the grid
// settings file lives.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "sessionfiddle";

/// Returns the platform-specific configuration directory for sessionfiddle.
///
/// - **Linux**: `$XDG_CONFIG_HOME/sessionfiddle`, else `~/.config/sessionfiddle`
/// - **macOS**: `~/Library/Application Support/sessionfiddle`
/// - **Windows**: `%APPDATA%/sessionfiddle`
pub fn get_config_dir() -> PathBuf {
    config_base().join(APP_DIR)
}

#[cfg(target_os = "windows")]
fn config_base() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata)
}

#[cfg(target_os = "macos")]
fn config_base() -> PathBuf {
    home_dir().join("Library").join("Application Support")
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn config_base() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => home_dir().join(".config"),
    }
}

#[cfg(not(target_os = "windows"))]
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

// Linkstash platform abstraction
// Provides the per-OS directories where settings and the bookmark database live.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Application directory name used on case-sensitive platforms.
pub const APP_DIR: &str = "linkstash";

/// Returns the platform-specific configuration directory for linkstash.
///
/// - **Linux**: `~/.config/linkstash` (or `$XDG_CONFIG_HOME/linkstash`)
/// - **macOS**: `~/Library/Application Support/Linkstash`
/// - **Windows**: `%APPDATA%/Linkstash`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory for linkstash.
///
/// - **Linux**: `~/.local/share/linkstash` (or `$XDG_DATA_HOME/linkstash`)
/// - **macOS**: `~/Library/Application Support/Linkstash`
/// - **Windows**: `%APPDATA%/Linkstash`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

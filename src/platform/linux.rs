// Linkstash platform paths for Linux
// Config: ~/.config/linkstash
// Data:   ~/.local/share/linkstash

use std::env;
use std::path::PathBuf;

use super::APP_DIR;

fn home() -> String {
    env::var("HOME").unwrap_or_else(|_| String::from("/tmp"))
}

/// Resolves an XDG base directory: the variable when set and non-empty,
/// otherwise `fallback` under `home`.
fn xdg_dir(xdg: Option<String>, home: &str, fallback: &[&str]) -> PathBuf {
    match xdg.filter(|v| !v.is_empty()) {
        Some(dir) => PathBuf::from(dir).join(APP_DIR),
        None => {
            let mut path = PathBuf::from(home);
            path.extend(fallback);
            path.join(APP_DIR)
        }
    }
}

/// Uses `$XDG_CONFIG_HOME/linkstash` if set, otherwise `~/.config/linkstash`.
pub fn get_config_dir() -> PathBuf {
    xdg_dir(env::var("XDG_CONFIG_HOME").ok(), &home(), &[".config"])
}

/// Uses `$XDG_DATA_HOME/linkstash` if set, otherwise `~/.local/share/linkstash`.
pub fn get_data_dir() -> PathBuf {
    xdg_dir(env::var("XDG_DATA_HOME").ok(), &home(), &[".local", "share"])
}

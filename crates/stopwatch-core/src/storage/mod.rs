mod config;

pub use config::{Config, DisplayConfig, FramesConfig};

use std::path::PathBuf;

/// Returns `~/.config/stopwatch[-dev]/` based on STOPWATCH_ENV.
///
/// Set STOPWATCH_ENV=dev to use a development config directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn config_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("STOPWATCH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("stopwatch-dev")
    } else {
        base_dir.join("stopwatch")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

//! Path utilities.
//!
//! Local state lives under `~/.betboard/`:
//! - `~/.betboard/config.toml` - main configuration
//! - `~/.betboard/keystores/` - encrypted wallet keystores

use std::path::PathBuf;

/// Returns the betboard home directory (`~/.betboard/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".betboard")
}

/// Returns the default config file path (`~/.betboard/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default keystore directory (`~/.betboard/keystores/`).
pub fn keystore_dir() -> PathBuf {
    home_dir().join("keystores")
}

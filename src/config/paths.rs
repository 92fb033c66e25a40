//! Path management for breakeven-cli
//!
//! Provides XDG-compliant path resolution for configuration.
//!
//! ## Path Resolution Order
//!
//! 1. `BREAKEVEN_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/breakeven-cli` or `~/.config/breakeven-cli`
//! 3. Windows: `%APPDATA%\breakeven-cli`

use std::path::PathBuf;

use crate::error::BreakevenError;

/// Manages all paths used by breakeven-cli
#[derive(Debug, Clone)]
pub struct BreakevenPaths {
    /// Base directory for all breakeven-cli data
    base_dir: PathBuf,
}

impl BreakevenPaths {
    /// Create a new BreakevenPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BreakevenError> {
        let base_dir = if let Ok(custom) = std::env::var("BREAKEVEN_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BreakevenPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/breakeven-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BreakevenError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BreakevenError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BreakevenError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| BreakevenError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("breakeven-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BreakevenError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BreakevenError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("breakeven-cli"))
}

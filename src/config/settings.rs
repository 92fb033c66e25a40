//! User settings for breakeven-cli
//!
//! Small preference file controlling presentation defaults: currency
//! symbol, analysis period, and the export format used when none is given.

use serde::{Deserialize, Serialize};

use super::paths::BreakevenPaths;
use crate::error::BreakevenError;

/// Export format preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Workbook-style CSV sections
    #[default]
    Csv,
    /// Machine-readable full export
    Json,
    /// Human-readable full export
    Yaml,
}

/// User settings for breakeven-cli
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal and web output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default analysis window length in months
    #[serde(default = "default_period_months")]
    pub analysis_period_months: u32,

    /// Default label describing the analysis window
    #[serde(default = "default_period_label")]
    pub period_label: String,

    /// Export format used when the command line names none
    #[serde(default)]
    pub export_format: ExportFormat,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_period_months() -> u32 {
    12
}

fn default_period_label() -> String {
    "12-month outlook".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            analysis_period_months: default_period_months(),
            period_label: default_period_label(),
            export_format: ExportFormat::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BreakevenPaths) -> Result<Self, BreakevenError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BreakevenError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BreakevenError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BreakevenPaths) -> Result<(), BreakevenError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BreakevenError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BreakevenError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.analysis_period_months, 12);
        assert_eq!(settings.period_label, "12-month outlook");
        assert_eq!(settings.export_format, ExportFormat::Csv);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BreakevenPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(paths.settings_file().exists());
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BreakevenPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();
        settings.export_format = ExportFormat::Json;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_settings_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BreakevenPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.analysis_period_months, 12);
    }
}

//! The `config` command
//!
//! Shows the resolved configuration paths and effective settings.

use crate::config::{BreakevenPaths, Settings};
use crate::error::BreakevenResult;

/// Handle the config command
pub fn handle_config_command(paths: &BreakevenPaths, settings: &Settings) -> BreakevenResult<()> {
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file: {}", paths.settings_file().display());
    println!();
    println!("Currency symbol: {}", settings.currency_symbol);
    println!(
        "Analysis period: {} months ({})",
        settings.analysis_period_months, settings.period_label
    );
    println!(
        "Default export format: {}",
        match settings.export_format {
            crate::config::ExportFormat::Csv => "csv",
            crate::config::ExportFormat::Json => "json",
            crate::config::ExportFormat::Yaml => "yaml",
        }
    );
    Ok(())
}

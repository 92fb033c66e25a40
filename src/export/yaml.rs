//! YAML export
//!
//! The human-readable flavor of the full analysis export. Same structure as
//! the JSON export, preceded by a short comment header.

use std::io::Write;

use crate::error::{BreakevenError, BreakevenResult};
use crate::export::json::FullExport;

/// Export the full analysis to YAML
pub fn export_full_yaml<W: Write>(export: &FullExport, writer: &mut W) -> BreakevenResult<()> {
    writeln!(writer, "# breakeven-cli analysis export")
        .map_err(|e| BreakevenError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| BreakevenError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| BreakevenError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BreakevenError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| BreakevenError::Export(e.to_string()))
}

//! Export sinks for breakeven-cli
//!
//! Serializes the analysis for consumption outside the terminal:
//! - CSV: the workbook layout (cost sheets, summary, revenue inputs)
//! - JSON: machine-readable full analysis export
//! - YAML: human-readable full analysis export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_workbook_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

//! JSON export
//!
//! Exports the complete analysis (vendor costs, computed metrics, revenue
//! inputs) as a schema-versioned JSON document for downstream tooling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BreakevenError, BreakevenResult};
use crate::models::VendorCost;
use crate::reports::BreakEvenReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full analysis export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The vendor cost collection the analysis ran over
    pub costs: Vec<VendorCost>,

    /// Every derived metric, including the revenue assumptions
    pub report: BreakEvenReport,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of cost records
    pub cost_count: usize,

    /// Number of distinct vendor names
    pub vendor_count: usize,
}

impl FullExport {
    /// Assemble an export from the analysis pieces
    pub fn new(costs: Vec<VendorCost>, report: BreakEvenReport) -> Self {
        let mut vendors: Vec<&str> = costs.iter().map(|c| c.vendor.as_str()).collect();
        vendors.sort_unstable();
        vendors.dedup();

        let metadata = ExportMetadata {
            cost_count: costs.len(),
            vendor_count: vendors.len(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            costs,
            report,
            metadata,
        }
    }
}

/// Export the full analysis to JSON
pub fn export_full_json<W: Write>(export: &FullExport, writer: &mut W) -> BreakevenResult<()> {
    serde_json::to_writer_pretty(writer, export)
        .map_err(|e| BreakevenError::Export(e.to_string()))
}

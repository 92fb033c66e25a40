//! JSON cost record loading
//!
//! Reads a JSON file holding an array of cost records. Each record has a
//! required `type` (strict category label) and optional vendor, name, unit,
//! notes, and either a single `amount` or `min_amount`/`max_amount` bounds.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

use crate::error::{BreakevenError, BreakevenResult};
use crate::models::{Amount, CostCategory, CostItem, VendorCost};

/// Vendor used when a record names none
pub const DEFAULT_VENDOR: &str = "custom";

/// One cost record as it appears in the JSON file
#[derive(Debug, Clone, Deserialize)]
pub struct JsonCostRecord {
    /// Strict category label, e.g. "per_transaction"
    #[serde(rename = "type")]
    pub category: String,

    /// Vendor name; defaults to "custom"
    #[serde(default)]
    pub vendor: Option<String>,

    /// Item name; defaults to the category's canonical name
    #[serde(default)]
    pub name: Option<String>,

    /// Single fixed amount
    #[serde(default)]
    pub amount: Option<Decimal>,

    /// Lower range bound
    #[serde(default)]
    pub min_amount: Option<Decimal>,

    /// Upper range bound
    #[serde(default)]
    pub max_amount: Option<Decimal>,

    /// Optional unit label
    #[serde(default)]
    pub unit: Option<String>,

    /// Optional free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl JsonCostRecord {
    /// Convert the raw record into a vendor cost with the given provenance.
    pub fn into_vendor_cost(self, source: &str) -> BreakevenResult<VendorCost> {
        let category = CostCategory::parse_label(&self.category)?;
        let name = self
            .name
            .unwrap_or_else(|| category.canonical_name().to_string());
        let amount = Amount::from_parts(self.amount, self.min_amount, self.max_amount);

        let mut item = CostItem::new(name, category, amount).with_source(source);
        if let Some(unit) = self.unit {
            item.unit = Some(unit);
        }
        if let Some(notes) = self.notes {
            item.notes = Some(notes);
        }

        let vendor = self.vendor.unwrap_or_else(|| DEFAULT_VENDOR.to_string());
        Ok(VendorCost::new(vendor, item))
    }
}

/// Load vendor costs from a JSON file.
pub fn load_costs_from_json(path: &Path) -> BreakevenResult<Vec<VendorCost>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| BreakevenError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let records: Vec<JsonCostRecord> = serde_json::from_str(&contents)
        .map_err(|e| BreakevenError::Json(format!("{}: {}", path.display(), e)))?;

    let source = path.display().to_string();
    records
        .into_iter()
        .map(|record| record.into_vendor_cost(&source))
        .collect()
}

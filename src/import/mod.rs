//! Cost input parsing
//!
//! Non-document input surfaces: colon-delimited manual entries and JSON
//! cost record files. Both feed the same `VendorCost` shape the extraction
//! pipeline produces.

pub mod json;
pub mod manual;

pub use json::{load_costs_from_json, JsonCostRecord, DEFAULT_VENDOR};
pub use manual::{parse_manual_entry, MANUAL_SOURCE};

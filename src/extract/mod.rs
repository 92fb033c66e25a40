//! Heuristic cost extraction from document text
//!
//! Turns loosely formatted pricing text into typed vendor cost records:
//!
//! - `source`: reads a document into trimmed, non-empty lines
//! - `amounts`: detects single amounts and min/max ranges in one line
//! - `classify`: assigns each line a cost category by keyword
//! - `pipeline`: orchestrates the above into `VendorCost` records

pub mod amounts;
pub mod classify;
pub mod pipeline;
pub mod source;

pub use amounts::{scan_line, LineScan};
pub use classify::classify_line;
pub use pipeline::{extract_costs, extract_from_document};
pub use source::{read_document_lines, vendor_label_for};

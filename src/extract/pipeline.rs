//! Line-to-record extraction pipeline
//!
//! Walks the ordered lines of one document and produces a vendor cost record
//! for every line with a usable amount. Lines without one are skipped: most
//! document lines are not pricing lines, so absence is normal, never an
//! error. The pipeline keeps no state across documents.

use std::path::Path;

use crate::error::BreakevenResult;
use crate::models::{Amount, CostItem, VendorCost};

use super::amounts::{scan_line, LineScan};
use super::classify::classify_line;
use super::source::{read_document_lines, vendor_label_for};

/// Extract vendor cost records from the lines of one document.
///
/// For each line: scan for amounts; derive the item name from the text
/// before the first colon (falling back to the vendor label); classify the
/// full line; attach the line as notes and `source` as provenance. A line
/// that matched a range keeps its bounds; otherwise the first detected
/// amount is authoritative.
pub fn extract_costs(lines: &[String], vendor: &str, source: &str) -> Vec<VendorCost> {
    lines
        .iter()
        .filter_map(|line| extract_line(line, vendor, source))
        .collect()
}

fn extract_line(line: &str, vendor: &str, source: &str) -> Option<VendorCost> {
    let scan = scan_line(line);

    let amount = match scan {
        LineScan::Range { min, max } => Amount::Range { min, max },
        LineScan::Singles(ref amounts) => Amount::Fixed(*amounts.first()?),
    };

    let name = line
        .split(':')
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(vendor);

    let item = CostItem::new(name, classify_line(line), amount)
        .with_notes(line)
        .with_source(source);

    Some(VendorCost::new(vendor, item))
}

/// Read one document and run the extraction pipeline over its lines.
///
/// The vendor label defaults to the document's file stem unless overridden.
/// Read or decode failures propagate as an extraction error identifying the
/// document; they never affect other documents in a batch.
pub fn extract_from_document(
    path: &Path,
    vendor: Option<&str>,
) -> BreakevenResult<Vec<VendorCost>> {
    let lines = read_document_lines(path)?;
    let label = vendor
        .map(str::to_string)
        .unwrap_or_else(|| vendor_label_for(path));
    Ok(extract_costs(&lines, &label, &path.display().to_string()))
}

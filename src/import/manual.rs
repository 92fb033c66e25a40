//! Manual cost entry parsing
//!
//! Entries use the colon-delimited grammar `vendor:type:name:amount[:notes]`
//! with trimmed fields. The type field goes through the strict category
//! lookup, not the keyword classifier.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{BreakevenError, BreakevenResult};
use crate::models::{Amount, CostCategory, CostItem, VendorCost};

/// Provenance string recorded on manually entered costs
pub const MANUAL_SOURCE: &str = "manual";

/// Parse one manual cost entry.
pub fn parse_manual_entry(entry: &str) -> BreakevenResult<VendorCost> {
    let parts: Vec<&str> = entry.split(':').map(str::trim).collect();
    if parts.len() < 4 {
        return Err(BreakevenError::MalformedEntry {
            entry: entry.to_string(),
        });
    }

    let vendor = parts[0];
    let category = CostCategory::parse_label(parts[1])?;
    let name = parts[2];
    let amount = Decimal::from_str(parts[3]).map_err(|_| {
        BreakevenError::malformed_amount(parts[3], format!("manual entry '{}'", entry))
    })?;

    let mut item = CostItem::new(name, category, Amount::Fixed(amount)).with_source(MANUAL_SOURCE);
    if let Some(notes) = parts.get(4).filter(|notes| !notes.is_empty()) {
        item = item.with_notes(*notes);
    }

    Ok(VendorCost::new(vendor, item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_basic_entry() {
        let cost = parse_manual_entry("AcmeCo:per_customer:Support:15").unwrap();
        assert_eq!(cost.vendor, "AcmeCo");
        assert_eq!(cost.item.name, "Support");
        assert_eq!(cost.item.category, CostCategory::PerCustomer);
        assert_eq!(cost.item.amount, Amount::Fixed(dec!(15)));
        assert_eq!(cost.item.source.as_deref(), Some(MANUAL_SOURCE));
        assert_eq!(cost.item.notes, None);
    }

    #[test]
    fn test_entry_with_notes() {
        let cost =
            parse_manual_entry("AcmeCo:annual:License:1200.50:renews every January").unwrap();
        assert_eq!(cost.item.amount, Amount::Fixed(dec!(1200.50)));
        assert_eq!(cost.item.notes.as_deref(), Some("renews every January"));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let cost = parse_manual_entry(" AcmeCo : one-time : Setup : 500 ").unwrap();
        assert_eq!(cost.vendor, "AcmeCo");
        assert_eq!(cost.item.category, CostCategory::OneTime);
        assert_eq!(cost.item.amount, Amount::Fixed(dec!(500)));
    }

    #[test]
    fn test_too_few_fields() {
        let err = parse_manual_entry("AcmeCo:annual:License").unwrap_err();
        assert!(matches!(err, BreakevenError::MalformedEntry { .. }));
    }

    #[test]
    fn test_unknown_category() {
        let err = parse_manual_entry("AcmeCo:weekly:License:10").unwrap_err();
        assert!(matches!(err, BreakevenError::InvalidCategory(_)));
    }

    #[test]
    fn test_bad_amount() {
        let err = parse_manual_entry("AcmeCo:annual:License:lots").unwrap_err();
        assert!(matches!(err, BreakevenError::MalformedAmount { .. }));
    }
}

//! Terminal formatting utilities
//!
//! Formatting helpers shared by the console report and the web view:
//! currency strings with thousands separators, the explicit marker for
//! undetermined results, and the vendor cost table.

use rust_decimal::Decimal;
use tabled::{settings::Style, Table, Tabled};

use crate::models::{Amount, VendorCost};

/// Marker printed for an undetermined result. Never a zero.
pub const UNDETERMINED: &str = "—";

/// Format a decimal with two fraction digits and comma thousands separators
pub fn format_decimal(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let plain = format!("{:.2}", rounded.abs());
    let grouped = group_thousands(&plain);
    if rounded < Decimal::ZERO {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a decimal as currency, e.g. `$1,234.50`
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    if value < Decimal::ZERO {
        format!("-{}{}", symbol, format_decimal(-value))
    } else {
        format!("{}{}", symbol, format_decimal(value))
    }
}

/// Format an optional decimal as currency, using the undetermined marker
pub fn format_opt_currency(value: Option<Decimal>, symbol: &str) -> String {
    value
        .map(|v| format_currency(v, symbol))
        .unwrap_or_else(|| UNDETERMINED.to_string())
}

/// Format an optional decimal count, using the undetermined marker
pub fn format_opt_decimal(value: Option<Decimal>) -> String {
    value
        .map(format_decimal)
        .unwrap_or_else(|| UNDETERMINED.to_string())
}

/// Insert comma separators into the integer part of a plain decimal string
fn group_thousands(plain: &str) -> String {
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain, None),
    };

    let mut grouped = String::with_capacity(plain.len() + int_part.len() / 3);
    let digits: Vec<char> = int_part.chars().collect();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// One row of the vendor cost table
#[derive(Tabled)]
struct CostRow {
    #[tabled(rename = "Vendor")]
    vendor: String,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Source")]
    source: String,
}

/// Render the vendor cost collection as a table for terminal output
pub fn render_cost_table(costs: &[VendorCost], symbol: &str) -> String {
    let rows: Vec<CostRow> = costs
        .iter()
        .map(|cost| CostRow {
            vendor: cost.vendor.clone(),
            item: cost.item.name.clone(),
            category: cost.item.category.label().to_string(),
            amount: format_amount(&cost.item.amount, symbol),
            unit: cost.item.unit.clone().unwrap_or_default(),
            source: cost.item.source.clone().unwrap_or_default(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format a cost amount for display: fixed value, range, or the marker
pub fn format_amount(amount: &Amount, symbol: &str) -> String {
    match amount {
        Amount::Fixed(value) => format_currency(*value, symbol),
        Amount::Range { min, max } => format!(
            "{} - {}",
            format_currency(*min, symbol),
            format_currency(*max, symbol)
        ),
        Amount::Unset => UNDETERMINED.to_string(),
    }
}

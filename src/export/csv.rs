//! CSV workbook export
//!
//! Writes the analysis as one CSV document laid out like the spreadsheet it
//! replaces: titled sections for fixed costs, variable costs, all costs, the
//! summary metrics, and the revenue inputs. Monetary cells carry two
//! fraction digits; undetermined metrics are left empty.

use rust_decimal::Decimal;
use std::io::Write;

use crate::error::{BreakevenError, BreakevenResult};
use crate::models::{Amount, CostCategory, VendorCost};
use crate::reports::BreakEvenReport;

const COST_HEADERS: [&str; 9] = [
    "Vendor", "Item", "Type", "Amount", "Min", "Max", "Unit", "Notes", "Source",
];

/// Export the full workbook to CSV
pub fn export_workbook_csv<W: Write>(
    costs: &[VendorCost],
    report: &BreakEvenReport,
    writer: W,
) -> BreakevenResult<()> {
    let mut out = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    let fixed: Vec<&VendorCost> = costs.iter().filter(|c| c.item.category.is_fixed()).collect();
    let variable: Vec<&VendorCost> = costs
        .iter()
        .filter(|c| {
            matches!(
                c.item.category,
                CostCategory::PerCustomer | CostCategory::PerTransaction
            )
        })
        .collect();
    let all: Vec<&VendorCost> = costs.iter().collect();

    write_cost_section(&mut out, "Fixed Costs", &fixed)?;
    write_cost_section(&mut out, "Variable Costs", &variable)?;
    write_cost_section(&mut out, "All Costs", &all)?;
    write_summary_section(&mut out, report)?;
    write_revenue_section(&mut out, report)?;

    out.flush().map_err(|e| BreakevenError::Export(e.to_string()))
}

fn write_cost_section<W: Write>(
    out: &mut csv::Writer<W>,
    title: &str,
    costs: &[&VendorCost],
) -> BreakevenResult<()> {
    write_title(out, title)?;
    write_row(out, &COST_HEADERS)?;

    for cost in costs {
        let (amount, min, max) = amount_cells(&cost.item.amount);
        write_row(
            out,
            &[
                cost.vendor.as_str(),
                cost.item.name.as_str(),
                cost.item.category.canonical_name(),
                amount.as_str(),
                min.as_str(),
                max.as_str(),
                cost.item.unit.as_deref().unwrap_or(""),
                cost.item.notes.as_deref().unwrap_or(""),
                cost.item.source.as_deref().unwrap_or(""),
            ],
        )?;
    }
    write_separator(out)
}

fn write_summary_section<W: Write>(
    out: &mut csv::Writer<W>,
    report: &BreakEvenReport,
) -> BreakevenResult<()> {
    write_title(out, "Summary")?;
    write_row(out, &["Metric", "Value", "Notes"])?;

    let summary = &report.summary;
    let projection = &report.projection;
    let rows: [(&str, String, &str); 13] = [
        ("Analysis Period", report.period_label.clone(), ""),
        (
            "Fixed costs",
            cell(summary.fixed_costs),
            "One-time + annual + recurring operational costs",
        ),
        (
            "Variable cost per customer",
            cell(summary.variable_cost_per_customer),
            "Costs that scale with the number of active customers",
        ),
        (
            "Variable cost per transaction",
            cell(summary.variable_cost_per_transaction),
            "Costs that scale with transaction count",
        ),
        (
            "Total costs",
            cell(summary.total_costs),
            "Fixed plus per-customer and per-transaction variable costs",
        ),
        (
            "Break-even customers",
            opt_cell(report.break_even_customers),
            "Number of customers needed at the configured price",
        ),
        (
            "Break-even transactions",
            opt_cell(report.break_even_transactions),
            "Number of transactions needed at the configured price",
        ),
        (
            "Required price per customer",
            opt_cell(report.required_customer_price),
            "Price per customer to break even at the expected volume",
        ),
        (
            "Required price per transaction",
            opt_cell(report.required_transaction_price),
            "Price per transaction to break even at the expected volume",
        ),
        (
            "Projected revenue",
            cell(projection.revenue),
            "Revenue based on expected volumes and prices",
        ),
        (
            "Projected variable costs",
            cell(projection.variable_costs),
            "Variable costs at expected volumes",
        ),
        (
            "Projected fixed costs",
            cell(projection.fixed_costs),
            "Fixed costs within the analysis period",
        ),
        (
            "Projected profit",
            cell(projection.profit),
            "Revenue minus total costs",
        ),
    ];

    for (metric, value, notes) in rows {
        write_row(out, &[metric, value.as_str(), notes])?;
    }
    write_separator(out)
}

fn write_revenue_section<W: Write>(
    out: &mut csv::Writer<W>,
    report: &BreakEvenReport,
) -> BreakevenResult<()> {
    write_title(out, "Revenue Inputs")?;
    write_row(out, &["Assumption", "Value", "Notes"])?;

    let revenue = &report.revenue;
    let rows: [(&str, String, &str); 6] = [
        (
            "Expected customers",
            revenue.expected_customers.to_string(),
            "",
        ),
        (
            "Expected transactions",
            revenue.expected_transactions.to_string(),
            "",
        ),
        (
            "Customer price",
            cell(revenue.customer_price),
            "Fee charged to each customer in the analysis period",
        ),
        (
            "Transaction price",
            cell(revenue.transaction_price),
            "Fee charged per transaction",
        ),
        (
            "Subscription revenue",
            cell(revenue.subscription_revenue),
            "Flat recurring revenue (if applicable)",
        ),
        (
            "Analysis period (months)",
            revenue.analysis_period_months.to_string(),
            "All costs should be expressed within this window",
        ),
    ];

    for (assumption, value, notes) in rows {
        write_row(out, &[assumption, value.as_str(), notes])?;
    }
    Ok(())
}

fn amount_cells(amount: &Amount) -> (String, String, String) {
    match amount {
        Amount::Fixed(value) => (cell(*value), String::new(), String::new()),
        Amount::Range { min, max } => (String::new(), cell(*min), cell(*max)),
        Amount::Unset => (String::new(), String::new(), String::new()),
    }
}

fn cell(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

fn opt_cell(value: Option<Decimal>) -> String {
    value.map(cell).unwrap_or_default()
}

fn write_title<W: Write>(out: &mut csv::Writer<W>, title: &str) -> BreakevenResult<()> {
    write_row(out, &[title])
}

fn write_separator<W: Write>(out: &mut csv::Writer<W>) -> BreakevenResult<()> {
    write_row(out, &[""])
}

fn write_row<W: Write>(out: &mut csv::Writer<W>, fields: &[&str]) -> BreakevenResult<()> {
    out.write_record(fields)
        .map_err(|e| BreakevenError::Export(e.to_string()))
}

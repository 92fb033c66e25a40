//! The `analyze` command
//!
//! Gathers costs from documents, manual entries, and JSON files, runs the
//! break-even engine, prints the console report, and optionally writes an
//! export file. Input errors are reported per entry; the remaining inputs
//! are still processed.

use clap::Args;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use crate::config::{ExportFormat, Settings};
use crate::display::render_cost_table;
use crate::engine::BreakEvenEngine;
use crate::error::{BreakevenError, BreakevenResult};
use crate::export::{export_full_json, export_full_yaml, export_workbook_csv, FullExport};
use crate::extract::extract_from_document;
use crate::import::{load_costs_from_json, parse_manual_entry};
use crate::models::{RevenueInputs, VendorCost};
use crate::reports::BreakEvenReport;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Source documents to scan for pricing lines (text or PDF)
    #[arg(short, long = "document", value_name = "PATH")]
    pub documents: Vec<PathBuf>,

    /// Vendor label applied to all documents (default: each file's stem)
    #[arg(long)]
    pub vendor: Option<String>,

    /// Manual cost entry in the format vendor:type:name:amount[:notes]
    #[arg(short, long = "cost", value_name = "ENTRY")]
    pub costs: Vec<String>,

    /// JSON file with additional cost records
    #[arg(long, value_name = "PATH")]
    pub cost_json: Option<PathBuf>,

    /// Expected number of customers in the analysis period
    #[arg(long, default_value_t = 0)]
    pub expected_customers: i64,

    /// Expected number of transactions in the analysis period
    #[arg(long, default_value_t = 0)]
    pub expected_transactions: i64,

    /// Fee charged to each customer
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub customer_price: Decimal,

    /// Fee charged per transaction
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub transaction_price: Decimal,

    /// Flat recurring revenue expected within the analysis period
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub subscription_revenue: Decimal,

    /// Duration of the analysis window in months
    #[arg(long)]
    pub analysis_period_months: Option<u32>,

    /// Label used to describe the analysis period in reports
    #[arg(long)]
    pub period_label: Option<String>,

    /// Write the analysis to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format for --output
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,
}

/// Handle the analyze command
pub fn handle_analyze_command(args: AnalyzeArgs, settings: &Settings) -> BreakevenResult<()> {
    let (costs, input_errors) = gather_costs(&args);

    for err in &input_errors {
        eprintln!("warning: {}", err);
    }

    if costs.is_empty() {
        println!("No cost records found.");
        if !input_errors.is_empty() {
            return Err(BreakevenError::Config(format!(
                "all {} cost input(s) failed",
                input_errors.len()
            )));
        }
        return Ok(());
    }

    let revenue = RevenueInputs {
        analysis_period_months: args
            .analysis_period_months
            .unwrap_or(settings.analysis_period_months),
        expected_customers: args.expected_customers,
        expected_transactions: args.expected_transactions,
        customer_price: args.customer_price,
        transaction_price: args.transaction_price,
        subscription_revenue: args.subscription_revenue,
    };

    let items = costs.iter().map(|c| c.item.clone()).collect();
    let engine = BreakEvenEngine::new(items, revenue);
    let period_label = args
        .period_label
        .clone()
        .unwrap_or_else(|| settings.period_label.clone());
    let report = BreakEvenReport::generate(&engine, period_label);

    println!("{}", render_cost_table(&costs, &settings.currency_symbol));
    println!();
    report.print(&settings.currency_symbol);

    if let Some(path) = args.output {
        let format = args.format.unwrap_or(settings.export_format);
        write_export(&path, format, &costs, &report)?;
        println!();
        println!("Analysis exported to {}", path.display());
    }

    Ok(())
}

/// Collect costs from every input surface, reporting failures per input
/// instead of aborting the batch.
fn gather_costs(args: &AnalyzeArgs) -> (Vec<VendorCost>, Vec<BreakevenError>) {
    let mut costs = Vec::new();
    let mut errors = Vec::new();

    for path in &args.documents {
        match extract_from_document(path, args.vendor.as_deref()) {
            Ok(found) => costs.extend(found),
            Err(err) => errors.push(err),
        }
    }

    for entry in &args.costs {
        match parse_manual_entry(entry) {
            Ok(cost) => costs.push(cost),
            Err(err) => errors.push(err),
        }
    }

    if let Some(path) = &args.cost_json {
        match load_costs_from_json(path) {
            Ok(found) => costs.extend(found),
            Err(err) => errors.push(err),
        }
    }

    (costs, errors)
}

fn write_export(
    path: &PathBuf,
    format: ExportFormat,
    costs: &[VendorCost],
    report: &BreakEvenReport,
) -> BreakevenResult<()> {
    let file = File::create(path).map_err(|e| {
        BreakevenError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_workbook_csv(costs, report, &mut writer),
        ExportFormat::Json => {
            let export = FullExport::new(costs.to_vec(), report.clone());
            export_full_json(&export, &mut writer)
        }
        ExportFormat::Yaml => {
            let export = FullExport::new(costs.to_vec(), report.clone());
            export_full_yaml(&export, &mut writer)
        }
    }
}

//! Web dashboard
//!
//! A single-page form over the same parsers and engine the CLI uses. Cost
//! entries are typed one per line in the manual-entry grammar
//! (`vendor:type:name:amount[:notes]`); revenue assumptions are plain form
//! fields. Field and entry errors are collected and listed per entry rather
//! than aborting the request.

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Json, Router};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use std::str::FromStr;
use std::sync::Arc;

use crate::config::Settings;
use crate::display::{format_currency, format_opt_currency, format_opt_decimal};
use crate::engine::BreakEvenEngine;
use crate::error::{BreakevenError, BreakevenResult};
use crate::import::parse_manual_entry;
use crate::models::{RevenueInputs, VendorCost};
use crate::reports::BreakEvenReport;

/// Shared state for the web handlers
#[derive(Debug, Clone)]
pub struct WebState {
    /// Presentation settings (currency symbol, period label)
    pub settings: Settings,
}

/// The dashboard form as submitted by the browser
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardForm {
    /// One manual cost entry per line
    #[serde(default)]
    pub costs: String,
    #[serde(default = "default_customers")]
    pub expected_customers: String,
    #[serde(default = "default_transactions")]
    pub expected_transactions: String,
    #[serde(default = "default_customer_price")]
    pub customer_price: String,
    #[serde(default = "default_transaction_price")]
    pub transaction_price: String,
    #[serde(default = "default_subscription_revenue")]
    pub subscription_revenue: String,
    #[serde(default = "default_period_months")]
    pub analysis_period_months: String,
}

fn default_customers() -> String {
    "2500".to_string()
}
fn default_transactions() -> String {
    "120000".to_string()
}
fn default_customer_price() -> String {
    "35".to_string()
}
fn default_transaction_price() -> String {
    "0.45".to_string()
}
fn default_subscription_revenue() -> String {
    "0".to_string()
}
fn default_period_months() -> String {
    "12".to_string()
}

impl Default for DashboardForm {
    fn default() -> Self {
        Self {
            costs: String::new(),
            expected_customers: default_customers(),
            expected_transactions: default_transactions(),
            customer_price: default_customer_price(),
            transaction_price: default_transaction_price(),
            subscription_revenue: default_subscription_revenue(),
            analysis_period_months: default_period_months(),
        }
    }
}

/// Run the web dashboard until interrupted
pub fn serve(host: &str, port: u16, settings: Settings) -> BreakevenResult<()> {
    let runtime =
        tokio::runtime::Runtime::new().map_err(|e| BreakevenError::Web(e.to_string()))?;
    runtime.block_on(serve_async(host, port, settings))
}

async fn serve_async(host: &str, port: u16, settings: Settings) -> BreakevenResult<()> {
    let state = Arc::new(WebState { settings });
    let router = build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| BreakevenError::Web(format!("Failed to bind {}: {}", addr, e)))?;

    println!("Dashboard listening on http://{}", addr);
    axum::serve(listener, router)
        .await
        .map_err(|e| BreakevenError::Web(e.to_string()))
}

/// Build the dashboard router
pub fn build_router(state: Arc<WebState>) -> Router {
    Router::new()
        .route("/", get(show_dashboard).post(compute_dashboard))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn healthz() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn show_dashboard(State(state): State<Arc<WebState>>) -> Html<String> {
    let form = DashboardForm::default();
    Html(render_page(&form, &[], None, &state.settings))
}

async fn compute_dashboard(
    State(state): State<Arc<WebState>>,
    Form(form): Form<DashboardForm>,
) -> Html<String> {
    let mut errors = Vec::new();

    let costs = parse_cost_lines(&form.costs, &mut errors);
    let revenue = parse_revenue(&form, &mut errors);

    if errors.is_empty() && !costs.is_empty() {
        let items = costs.iter().map(|c| c.item.clone()).collect();
        let engine = BreakEvenEngine::new(items, revenue);
        let report = BreakEvenReport::generate(&engine, state.settings.period_label.clone());
        Html(render_page(
            &form,
            &errors,
            Some((costs.as_slice(), &report)),
            &state.settings,
        ))
    } else {
        if costs.is_empty() && errors.is_empty() {
            errors.push("Enter at least one cost line.".to_string());
        }
        Html(render_page(&form, &errors, None, &state.settings))
    }
}

/// Parse the cost textarea, one manual entry per non-empty line.
/// Failures are collected per line; valid lines still produce records.
fn parse_cost_lines(text: &str, errors: &mut Vec<String>) -> Vec<VendorCost> {
    let mut costs = Vec::new();
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match parse_manual_entry(line) {
            Ok(cost) => costs.push(cost),
            Err(err) => errors.push(err.to_string()),
        }
    }
    costs
}

fn parse_revenue(form: &DashboardForm, errors: &mut Vec<String>) -> RevenueInputs {
    RevenueInputs {
        analysis_period_months: parse_count(
            &form.analysis_period_months,
            "Analysis period",
            12,
            errors,
        ),
        expected_customers: parse_int(&form.expected_customers, "Expected customers", errors),
        expected_transactions: parse_int(
            &form.expected_transactions,
            "Expected transactions",
            errors,
        ),
        customer_price: parse_decimal(&form.customer_price, "Customer price", errors),
        transaction_price: parse_decimal(&form.transaction_price, "Transaction price", errors),
        subscription_revenue: parse_decimal(
            &form.subscription_revenue,
            "Subscription revenue",
            errors,
        ),
    }
}

fn parse_int(value: &str, field: &str, errors: &mut Vec<String>) -> i64 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            errors.push(format!("{} must be an integer.", field));
            0
        }
    }
}

fn parse_count(value: &str, field: &str, default: u32, errors: &mut Vec<String>) -> u32 {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return default;
    }
    match trimmed.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            errors.push(format!("{} must be a positive integer.", field));
            default
        }
    }
}

fn parse_decimal(value: &str, field: &str, errors: &mut Vec<String>) -> Decimal {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    match Decimal::from_str(trimmed) {
        Ok(parsed) => parsed,
        Err(_) => {
            errors.push(format!("{} must be a valid number.", field));
            Decimal::ZERO
        }
    }
}

/// Minimal HTML escaping for user-supplied strings
fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_page(
    form: &DashboardForm,
    errors: &[String],
    results: Option<(&[VendorCost], &BreakEvenReport)>,
    settings: &Settings,
) -> String {
    let mut body = String::new();

    body.push_str("<h1>Break-even dashboard</h1>\n");

    if !errors.is_empty() {
        body.push_str("<ul class=\"errors\">\n");
        for error in errors {
            body.push_str(&format!("<li>{}</li>\n", escape_html(error)));
        }
        body.push_str("</ul>\n");
    }

    body.push_str(&render_form(form));

    if let Some((costs, report)) = results {
        body.push_str(&render_results(costs, report, &settings.currency_symbol));
    }

    format!(
        "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>breakeven-cli</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        body
    )
}

fn render_form(form: &DashboardForm) -> String {
    let field = |name: &str, label: &str, value: &str| {
        format!(
            "<label>{label} <input name=\"{name}\" value=\"{}\"></label><br>\n",
            escape_html(value)
        )
    };

    format!(
        "<form method=\"post\" action=\"/\">\n\
         <p>One cost per line: <code>vendor:type:name:amount[:notes]</code></p>\n\
         <textarea name=\"costs\" rows=\"8\" cols=\"72\">{}</textarea><br>\n\
         {}{}{}{}{}{}\
         <button type=\"submit\">Calculate</button>\n\
         </form>\n",
        escape_html(&form.costs),
        field(
            "expected_customers",
            "Expected customers",
            &form.expected_customers
        ),
        field(
            "expected_transactions",
            "Expected transactions",
            &form.expected_transactions
        ),
        field("customer_price", "Customer price", &form.customer_price),
        field(
            "transaction_price",
            "Transaction price",
            &form.transaction_price
        ),
        field(
            "subscription_revenue",
            "Subscription revenue",
            &form.subscription_revenue
        ),
        field(
            "analysis_period_months",
            "Analysis period (months)",
            &form.analysis_period_months
        ),
    )
}

fn render_results(costs: &[VendorCost], report: &BreakEvenReport, symbol: &str) -> String {
    let row = |metric: &str, value: String| {
        format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(metric),
            escape_html(&value)
        )
    };

    let mut table = String::new();
    table.push_str("<h2>Results</h2>\n<table>\n");
    table.push_str(&row("Cost records", costs.len().to_string()));
    table.push_str(&row(
        "Fixed costs",
        format_currency(report.summary.fixed_costs, symbol),
    ));
    table.push_str(&row(
        "Variable cost per customer",
        format_currency(report.summary.variable_cost_per_customer, symbol),
    ));
    table.push_str(&row(
        "Variable cost per transaction",
        format_currency(report.summary.variable_cost_per_transaction, symbol),
    ));
    table.push_str(&row(
        "Total costs",
        format_currency(report.summary.total_costs, symbol),
    ));
    table.push_str(&row(
        "Break-even customers",
        format_opt_decimal(report.break_even_customers),
    ));
    table.push_str(&row(
        "Break-even transactions",
        format_opt_decimal(report.break_even_transactions),
    ));
    table.push_str(&row(
        "Required price per customer",
        format_opt_currency(report.required_customer_price, symbol),
    ));
    table.push_str(&row(
        "Required price per transaction",
        format_opt_currency(report.required_transaction_price, symbol),
    ));
    table.push_str(&row(
        "Projected revenue",
        format_currency(report.projection.revenue, symbol),
    ));
    table.push_str(&row(
        "Projected variable costs",
        format_currency(report.projection.variable_costs, symbol),
    ));
    table.push_str(&row(
        "Projected fixed costs",
        format_currency(report.projection.fixed_costs, symbol),
    ));
    table.push_str(&row(
        "Projected profit",
        format_currency(report.projection.profit, symbol),
    ));
    table.push_str("</table>\n");
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_cost_lines_collects_errors_per_line() {
        let mut errors = Vec::new();
        let costs = parse_cost_lines(
            "AcmeCo:per_customer:Support:15\nbroken line\nAcmeCo:annual:License:1200",
            &mut errors,
        );
        assert_eq!(costs.len(), 2);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("broken line"));
    }

    #[test]
    fn test_parse_revenue_defaults() {
        let form = DashboardForm::default();
        let mut errors = Vec::new();
        let revenue = parse_revenue(&form, &mut errors);
        assert!(errors.is_empty());
        assert_eq!(revenue.expected_customers, 2500);
        assert_eq!(revenue.customer_price, dec!(35));
        assert_eq!(revenue.analysis_period_months, 12);
    }

    #[test]
    fn test_parse_revenue_reports_bad_fields() {
        let form = DashboardForm {
            customer_price: "a lot".to_string(),
            expected_customers: "many".to_string(),
            ..Default::default()
        };
        let mut errors = Vec::new();
        parse_revenue(&form, &mut errors);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.contains("Customer price")));
        assert!(errors.iter().any(|e| e.contains("Expected customers")));
    }

    #[test]
    fn test_render_page_escapes_user_input() {
        let form = DashboardForm {
            costs: "<script>alert(1)</script>".to_string(),
            ..Default::default()
        };
        let page = render_page(&form, &[], None, &Settings::default());
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_results_uses_undetermined_marker() {
        let engine = BreakEvenEngine::new(vec![], RevenueInputs::default());
        let report = BreakEvenReport::generate(&engine, "outlook");
        let html = render_results(&[], &report, "$");
        assert!(html.contains(crate::display::UNDETERMINED));
        assert!(html.contains("Break-even customers"));
    }

    #[tokio::test]
    async fn test_healthz_body() {
        let Json(body) = healthz().await;
        assert_eq!(body["status"], "ok");
    }
}

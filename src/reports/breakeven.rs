//! Break-even report
//!
//! Bundles every derived metric for one analysis into a single snapshot so
//! all sinks (console, workbook, web view) present consistent numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::display::{format_currency, format_decimal, format_opt_currency, format_opt_decimal};
use crate::engine::{BreakEvenEngine, CostSummary, ProfitProjection};
use crate::models::RevenueInputs;

/// All computed metrics for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakEvenReport {
    /// Label describing the analysis window, e.g. "12-month outlook"
    pub period_label: String,

    /// Aggregated cost totals
    pub summary: CostSummary,

    /// Customers needed to break even, if the margin allows one
    pub break_even_customers: Option<Decimal>,

    /// Transactions needed to break even, if the margin allows one
    pub break_even_transactions: Option<Decimal>,

    /// Price per customer to break even at the expected volume
    pub required_customer_price: Option<Decimal>,

    /// Price per transaction to break even at the expected volume
    pub required_transaction_price: Option<Decimal>,

    /// Projected economics at the expected volumes
    pub projection: ProfitProjection,

    /// The revenue assumptions the metrics were derived from
    pub revenue: RevenueInputs,
}

impl BreakEvenReport {
    /// Derive the full report from an engine
    pub fn generate(engine: &BreakEvenEngine, period_label: impl Into<String>) -> Self {
        Self {
            period_label: period_label.into(),
            summary: engine.summary(),
            break_even_customers: engine.break_even_customers(),
            break_even_transactions: engine.break_even_transactions(),
            required_customer_price: engine.required_customer_price(),
            required_transaction_price: engine.required_transaction_price(),
            projection: engine.profitability_projection(),
            revenue: engine.revenue().clone(),
        }
    }

    /// Print the report to stdout
    pub fn print(&self, symbol: &str) {
        println!("--- Cost Summary ({}) ---", self.period_label);
        println!(
            "Fixed costs: {}",
            format_currency(self.summary.fixed_costs, symbol)
        );
        println!(
            "Variable cost per customer: {}",
            format_currency(self.summary.variable_cost_per_customer, symbol)
        );
        println!(
            "Variable cost per transaction: {}",
            format_currency(self.summary.variable_cost_per_transaction, symbol)
        );
        println!(
            "Total costs: {}",
            format_currency(self.summary.total_costs, symbol)
        );
        println!();

        match self.break_even_customers {
            Some(value) => println!(
                "Break-even customers at configured price: {}",
                format_decimal(value)
            ),
            None => println!("Break-even customers could not be determined (insufficient margin)."),
        }
        match self.break_even_transactions {
            Some(value) => println!(
                "Break-even transactions at configured price: {}",
                format_decimal(value)
            ),
            None => {
                println!("Break-even transactions could not be determined (insufficient margin).")
            }
        }
        println!(
            "Required price per customer: {}",
            format_opt_currency(self.required_customer_price, symbol)
        );
        println!(
            "Required price per transaction: {}",
            format_opt_currency(self.required_transaction_price, symbol)
        );
        println!();

        println!(
            "Projected revenue: {}",
            format_currency(self.projection.revenue, symbol)
        );
        println!(
            "Projected variable costs: {}",
            format_currency(self.projection.variable_costs, symbol)
        );
        println!(
            "Projected fixed costs: {}",
            format_currency(self.projection.fixed_costs, symbol)
        );
        println!(
            "Projected profit: {}",
            format_currency(self.projection.profit, symbol)
        );
    }

    /// Convenience accessor used by sinks that render counts as text
    pub fn break_even_customers_text(&self) -> String {
        format_opt_decimal(self.break_even_customers)
    }

    /// Convenience accessor used by sinks that render counts as text
    pub fn break_even_transactions_text(&self) -> String {
        format_opt_decimal(self.break_even_transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, CostCategory, CostItem};
    use rust_decimal_macros::dec;

    fn sample_engine() -> BreakEvenEngine {
        let items = vec![
            CostItem::new("Setup", CostCategory::OneTime, Amount::Fixed(dec!(1000))),
            CostItem::new("License", CostCategory::Annual, Amount::Fixed(dec!(1200))),
            CostItem::new(
                "Support",
                CostCategory::PerCustomer,
                Amount::Fixed(dec!(2)),
            ),
        ];
        let revenue = RevenueInputs {
            customer_price: dec!(10),
            expected_customers: 100,
            ..Default::default()
        };
        BreakEvenEngine::new(items, revenue)
    }

    #[test]
    fn test_generate_matches_engine() {
        let engine = sample_engine();
        let report = BreakEvenReport::generate(&engine, "12-month outlook");

        assert_eq!(report.summary, engine.summary());
        assert_eq!(report.break_even_customers, Some(dec!(275)));
        assert_eq!(report.required_customer_price, Some(dec!(24)));
        assert_eq!(report.break_even_transactions, None);
        assert_eq!(report.projection, engine.profitability_projection());
    }

    #[test]
    fn test_generate_is_idempotent() {
        let engine = sample_engine();
        let first = BreakEvenReport::generate(&engine, "outlook");
        let second = BreakEvenReport::generate(&engine, "outlook");
        assert_eq!(first, second);
    }

    #[test]
    fn test_undetermined_text_markers() {
        let engine = BreakEvenEngine::new(vec![], RevenueInputs::default());
        let report = BreakEvenReport::generate(&engine, "outlook");
        assert_eq!(report.break_even_customers_text(), crate::display::UNDETERMINED);
        assert_eq!(
            report.break_even_transactions_text(),
            crate::display::UNDETERMINED
        );
    }

    #[test]
    fn test_report_serializes() {
        let engine = sample_engine();
        let report = BreakEvenReport::generate(&engine, "12-month outlook");
        let json = serde_json::to_string(&report).unwrap();
        let back: BreakEvenReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}

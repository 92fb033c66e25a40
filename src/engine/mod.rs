//! Break-even and profitability calculations
//!
//! The engine holds an immutable collection of cost items plus a revenue
//! assumption snapshot, and derives totals, break-even volumes, required
//! prices, and a profitability projection. It never mutates its inputs;
//! recompute by constructing a new engine.
//!
//! All arithmetic is exact decimal. A calculation whose preconditions do
//! not hold (non-positive contribution margin, non-positive expected
//! volume) returns `None`: a meaningful domain outcome distinct from zero,
//! not an error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CostCategory, CostItem, RevenueInputs};

/// Aggregated cost totals used in reports and exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// One-time + annual + subscription + operational costs
    pub fixed_costs: Decimal,
    /// Costs that scale with the number of active customers
    pub variable_cost_per_customer: Decimal,
    /// Costs that scale with transaction count
    pub variable_cost_per_transaction: Decimal,
    /// Fixed plus both per-unit variable totals
    pub total_costs: Decimal,
}

/// Projected economics at the expected volumes and prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitProjection {
    /// Subscription revenue plus per-customer and per-transaction revenue
    pub revenue: Decimal,
    /// Variable costs at the expected volumes
    pub variable_costs: Decimal,
    /// Fixed costs within the analysis period
    pub fixed_costs: Decimal,
    /// Revenue minus variable and fixed costs
    pub profit: Decimal,
}

/// Computes break-even metrics from a cost collection and revenue inputs
#[derive(Debug, Clone)]
pub struct BreakEvenEngine {
    cost_items: Vec<CostItem>,
    revenue: RevenueInputs,
}

impl BreakEvenEngine {
    /// Create an engine over a cost collection and revenue assumptions
    pub fn new(cost_items: Vec<CostItem>, revenue: RevenueInputs) -> Self {
        Self {
            cost_items,
            revenue,
        }
    }

    /// The revenue assumptions this engine was built with
    pub fn revenue(&self) -> &RevenueInputs {
        &self.revenue
    }

    /// The cost items this engine was built with
    pub fn cost_items(&self) -> &[CostItem] {
        &self.cost_items
    }

    /// Sum the effective amounts of items matching the given categories.
    /// Items with no effective amount contribute nothing.
    fn sum_costs(&self, categories: &[CostCategory]) -> Decimal {
        self.cost_items
            .iter()
            .filter(|item| categories.contains(&item.category))
            .filter_map(CostItem::effective_amount)
            .sum()
    }

    /// Total fixed costs: one-time, annual, subscription, and operational
    pub fn total_fixed_costs(&self) -> Decimal {
        self.sum_costs(&crate::models::FIXED_CATEGORIES)
    }

    /// Variable cost per customer
    pub fn variable_cost_per_customer(&self) -> Decimal {
        self.sum_costs(&[CostCategory::PerCustomer])
    }

    /// Variable cost per transaction
    pub fn variable_cost_per_transaction(&self) -> Decimal {
        self.sum_costs(&[CostCategory::PerTransaction])
    }

    /// Fixed plus per-customer plus per-transaction totals.
    ///
    /// Items categorized `Other` appear in no bucket and therefore in no
    /// total: costs are classified or excluded, never defaulted to fixed.
    pub fn total_costs(&self) -> Decimal {
        self.total_fixed_costs()
            + self.variable_cost_per_customer()
            + self.variable_cost_per_transaction()
    }

    /// Snapshot all cost totals
    pub fn summary(&self) -> CostSummary {
        CostSummary {
            fixed_costs: self.total_fixed_costs(),
            variable_cost_per_customer: self.variable_cost_per_customer(),
            variable_cost_per_transaction: self.variable_cost_per_transaction(),
            total_costs: self.total_costs(),
        }
    }

    /// Customers needed to cover fixed costs at the configured price.
    ///
    /// `None` when the contribution margin (price minus variable cost per
    /// customer) is not positive.
    pub fn break_even_customers(&self) -> Option<Decimal> {
        let margin = self.revenue.customer_price - self.variable_cost_per_customer();
        if margin <= Decimal::ZERO {
            return None;
        }
        Some(self.total_fixed_costs() / margin)
    }

    /// Transactions needed to cover fixed costs at the configured price.
    pub fn break_even_transactions(&self) -> Option<Decimal> {
        let margin = self.revenue.transaction_price - self.variable_cost_per_transaction();
        if margin <= Decimal::ZERO {
            return None;
        }
        Some(self.total_fixed_costs() / margin)
    }

    /// Price per customer needed to break even at the expected volume.
    ///
    /// `None` when the expected customer count is not positive.
    pub fn required_customer_price(&self) -> Option<Decimal> {
        if self.revenue.expected_customers <= 0 {
            return None;
        }
        let expected = Decimal::from(self.revenue.expected_customers);
        Some(self.variable_cost_per_customer() + self.total_fixed_costs() / expected)
    }

    /// Price per transaction needed to break even at the expected volume.
    pub fn required_transaction_price(&self) -> Option<Decimal> {
        if self.revenue.expected_transactions <= 0 {
            return None;
        }
        let expected = Decimal::from(self.revenue.expected_transactions);
        Some(self.variable_cost_per_transaction() + self.total_fixed_costs() / expected)
    }

    /// Project revenue, costs, and profit at the expected volumes.
    ///
    /// All four quantities are returned together so callers never recompute
    /// partial totals inconsistently.
    pub fn profitability_projection(&self) -> ProfitProjection {
        let customers = Decimal::from(self.revenue.expected_customers);
        let transactions = Decimal::from(self.revenue.expected_transactions);

        let revenue = self.revenue.subscription_revenue
            + self.revenue.customer_price * customers
            + self.revenue.transaction_price * transactions;

        let variable_costs = self.variable_cost_per_customer() * customers
            + self.variable_cost_per_transaction() * transactions;

        let fixed_costs = self.total_fixed_costs();

        ProfitProjection {
            revenue,
            variable_costs,
            fixed_costs,
            profit: revenue - variable_costs - fixed_costs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use rust_decimal_macros::dec;

    fn item(category: CostCategory, amount: Amount) -> CostItem {
        CostItem::new("test item", category, amount)
    }

    fn scenario_a_engine() -> BreakEvenEngine {
        let items = vec![
            item(CostCategory::OneTime, Amount::Fixed(dec!(1000))),
            item(CostCategory::Annual, Amount::Fixed(dec!(1200))),
            item(CostCategory::PerCustomer, Amount::Fixed(dec!(2))),
        ];
        let revenue = RevenueInputs {
            customer_price: dec!(10),
            expected_customers: 100,
            ..Default::default()
        };
        BreakEvenEngine::new(items, revenue)
    }

    #[test]
    fn test_fixed_and_variable_totals() {
        let engine = scenario_a_engine();
        assert_eq!(engine.total_fixed_costs(), dec!(2200));
        assert_eq!(engine.variable_cost_per_customer(), dec!(2));
        assert_eq!(engine.variable_cost_per_transaction(), Decimal::ZERO);
    }

    #[test]
    fn test_break_even_customers() {
        let engine = scenario_a_engine();
        // 2200 / (10 - 2) = 275
        assert_eq!(engine.break_even_customers(), Some(dec!(275)));
    }

    #[test]
    fn test_break_even_undetermined_when_margin_not_positive() {
        let items = vec![item(CostCategory::PerCustomer, Amount::Fixed(dec!(10)))];
        let revenue = RevenueInputs {
            customer_price: dec!(10),
            ..Default::default()
        };
        let engine = BreakEvenEngine::new(items, revenue);
        assert_eq!(engine.break_even_customers(), None);

        let engine = BreakEvenEngine::new(
            vec![item(CostCategory::PerCustomer, Amount::Fixed(dec!(12)))],
            RevenueInputs {
                customer_price: dec!(10),
                ..Default::default()
            },
        );
        assert_eq!(engine.break_even_customers(), None);
    }

    #[test]
    fn test_required_customer_price() {
        let engine = scenario_a_engine();
        // 2 + 2200 / 100 = 24
        assert_eq!(engine.required_customer_price(), Some(dec!(24)));
    }

    #[test]
    fn test_required_price_undetermined_at_zero_volume() {
        let items = vec![item(CostCategory::Annual, Amount::Fixed(dec!(1200)))];
        let engine = BreakEvenEngine::new(items, RevenueInputs::default());
        assert_eq!(engine.required_customer_price(), None);
        assert_eq!(engine.required_transaction_price(), None);
    }

    #[test]
    fn test_range_items_use_effective_amount() {
        let items = vec![item(
            CostCategory::PerTransaction,
            Amount::Range {
                min: dec!(0.10),
                max: dec!(0.30),
            },
        )];
        let engine = BreakEvenEngine::new(items, RevenueInputs::default());
        assert_eq!(engine.variable_cost_per_transaction(), dec!(0.20));
    }

    #[test]
    fn test_unset_items_contribute_nothing() {
        let items = vec![
            item(CostCategory::Annual, Amount::Fixed(dec!(500))),
            item(CostCategory::Annual, Amount::Unset),
        ];
        let engine = BreakEvenEngine::new(items, RevenueInputs::default());
        assert_eq!(engine.total_fixed_costs(), dec!(500));
    }

    #[test]
    fn test_other_category_is_excluded_from_every_total() {
        let items = vec![
            item(CostCategory::Annual, Amount::Fixed(dec!(500))),
            item(CostCategory::Other, Amount::Fixed(dec!(9999))),
        ];
        let engine = BreakEvenEngine::new(items, RevenueInputs::default());
        assert_eq!(engine.total_fixed_costs(), dec!(500));
        assert_eq!(engine.total_costs(), dec!(500));
    }

    #[test]
    fn test_total_is_sum_of_buckets() {
        let items = vec![
            item(CostCategory::OneTime, Amount::Fixed(dec!(100))),
            item(CostCategory::Subscription, Amount::Fixed(dec!(49.99))),
            item(CostCategory::PerCustomer, Amount::Fixed(dec!(1.25))),
            item(CostCategory::PerTransaction, Amount::Fixed(dec!(0.45))),
            item(CostCategory::Other, Amount::Fixed(dec!(77))),
        ];
        let engine = BreakEvenEngine::new(items, RevenueInputs::default());
        let summary = engine.summary();
        assert_eq!(
            summary.total_costs,
            summary.fixed_costs
                + summary.variable_cost_per_customer
                + summary.variable_cost_per_transaction
        );
    }

    #[test]
    fn test_profitability_projection() {
        let items = vec![
            item(CostCategory::Annual, Amount::Fixed(dec!(1200))),
            item(CostCategory::PerCustomer, Amount::Fixed(dec!(2))),
            item(CostCategory::PerTransaction, Amount::Fixed(dec!(0.10))),
        ];
        let revenue = RevenueInputs {
            expected_customers: 100,
            expected_transactions: 1000,
            customer_price: dec!(10),
            transaction_price: dec!(0.45),
            subscription_revenue: dec!(500),
            ..Default::default()
        };
        let engine = BreakEvenEngine::new(items, revenue);

        let projection = engine.profitability_projection();
        // 500 + 10*100 + 0.45*1000 = 1950
        assert_eq!(projection.revenue, dec!(1950));
        // 2*100 + 0.10*1000 = 300
        assert_eq!(projection.variable_costs, dec!(300));
        assert_eq!(projection.fixed_costs, dec!(1200));
        assert_eq!(projection.profit, dec!(450));
    }

    #[test]
    fn test_negative_inputs_propagate_arithmetically() {
        let items = vec![item(CostCategory::Annual, Amount::Fixed(dec!(100)))];
        let revenue = RevenueInputs {
            expected_customers: 10,
            customer_price: dec!(-5),
            ..Default::default()
        };
        let engine = BreakEvenEngine::new(items, revenue);

        // Negative price means no positive margin, so break-even is
        // undetermined, while the projection simply goes negative.
        assert_eq!(engine.break_even_customers(), None);
        assert_eq!(engine.profitability_projection().revenue, dec!(-50));
    }

    #[test]
    fn test_idempotent_construction() {
        let build = || scenario_a_engine();
        assert_eq!(build().summary(), build().summary());
        assert_eq!(
            build().profitability_projection(),
            build().profitability_projection()
        );
    }
}

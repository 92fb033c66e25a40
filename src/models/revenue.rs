//! Revenue assumptions for the break-even analysis
//!
//! All monetary fields default to zero, as do the expected volumes. Values
//! are not range-checked: a negative price or volume propagates through the
//! arithmetic rather than being rejected.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The revenue-side assumption set for one analysis period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueInputs {
    /// Duration of the analysis window in months
    #[serde(default = "default_period_months")]
    pub analysis_period_months: u32,

    /// Expected number of active customers in the period
    #[serde(default)]
    pub expected_customers: i64,

    /// Expected number of transactions in the period
    #[serde(default)]
    pub expected_transactions: i64,

    /// Fee charged to each customer in the period
    #[serde(default)]
    pub customer_price: Decimal,

    /// Fee charged per transaction
    #[serde(default)]
    pub transaction_price: Decimal,

    /// Flat recurring revenue within the period, if any
    #[serde(default)]
    pub subscription_revenue: Decimal,
}

fn default_period_months() -> u32 {
    12
}

impl Default for RevenueInputs {
    fn default() -> Self {
        Self {
            analysis_period_months: default_period_months(),
            expected_customers: 0,
            expected_transactions: 0,
            customer_price: Decimal::ZERO,
            transaction_price: Decimal::ZERO,
            subscription_revenue: Decimal::ZERO,
        }
    }
}

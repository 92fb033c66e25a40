//! Core data models for breakeven-cli
//!
//! This module contains the data structures that represent the pricing
//! domain: cost categories, cost items, vendor attribution, and the revenue
//! assumptions fed into the break-even engine.

pub mod category;
pub mod cost;
pub mod revenue;

pub use category::{CostCategory, ALL_CATEGORIES, CATEGORY_KEYWORDS, FIXED_CATEGORIES};
pub use cost::{Amount, CostItem, VendorCost};
pub use revenue::RevenueInputs;

//! breakeven-cli - Vendor pricing extraction and break-even analysis
//!
//! This library extracts vendor pricing information from loosely formatted
//! documents and computes break-even economics for business models that
//! combine fixed, per-customer, and per-transaction costs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (categories, cost items, revenue inputs)
//! - `extract`: Heuristic extraction of cost records from document text
//! - `import`: Manual entry and JSON cost record parsing
//! - `engine`: Break-even and profitability calculations
//! - `reports`: Derived, presentation-ready analysis snapshots
//! - `display`: Terminal formatting helpers
//! - `export`: CSV workbook, JSON, and YAML sinks
//! - `web`: The dashboard form server
//!
//! # Example
//!
//! ```rust
//! use breakeven_cli::engine::BreakEvenEngine;
//! use breakeven_cli::extract::extract_costs;
//! use breakeven_cli::models::RevenueInputs;
//!
//! let lines = vec!["Monthly platform fee: $99.99".to_string()];
//! let costs = extract_costs(&lines, "AcmeCo", "acme.txt");
//! let items = costs.iter().map(|c| c.item.clone()).collect();
//! let engine = BreakEvenEngine::new(items, RevenueInputs::default());
//! assert!(engine.total_fixed_costs() > rust_decimal::Decimal::ZERO);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod extract;
pub mod import;
pub mod models;
pub mod reports;
pub mod web;

pub use error::{BreakevenError, BreakevenResult};

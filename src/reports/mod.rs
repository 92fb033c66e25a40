//! Analysis reports
//!
//! Derived, presentation-ready snapshots computed from the break-even
//! engine. Sinks consume these instead of recomputing metrics themselves.

pub mod breakeven;

pub use breakeven::BreakEvenReport;

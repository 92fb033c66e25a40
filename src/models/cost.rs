//! Cost item and vendor cost models
//!
//! A cost item represents one priced line. Its monetary value is a tagged
//! variant so that the fixed/range/unset shapes are mutually exclusive by
//! construction, and the effective-amount derivation is exhaustive.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CostCategory;

/// The monetary value attached to a cost item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Amount {
    /// A single known amount
    Fixed(Decimal),
    /// A quoted min/max range
    Range { min: Decimal, max: Decimal },
    /// No amount is known; the item contributes zero to every aggregate
    Unset,
}

impl Amount {
    /// Build an amount from optional fixed/min/max fields.
    ///
    /// A fixed amount wins over range bounds. A complete range becomes
    /// `Range`; a single bound collapses to `Fixed` on that bound (there is
    /// no partner to average with). Nothing at all is `Unset`.
    pub fn from_parts(
        amount: Option<Decimal>,
        min: Option<Decimal>,
        max: Option<Decimal>,
    ) -> Self {
        match (amount, min, max) {
            (Some(value), _, _) => Self::Fixed(value),
            (None, Some(min), Some(max)) => Self::Range { min, max },
            (None, Some(single), None) | (None, None, Some(single)) => Self::Fixed(single),
            (None, None, None) => Self::Unset,
        }
    }

    /// The single decimal value used in all aggregations.
    ///
    /// Ranges resolve to the arithmetic mean of their bounds. `Unset`
    /// yields `None`, which every aggregate treats as zero contribution.
    pub fn effective(&self) -> Option<Decimal> {
        match self {
            Self::Fixed(value) => Some(*value),
            Self::Range { min, max } => Some((*min + *max) / Decimal::TWO),
            Self::Unset => None,
        }
    }

    /// Check if no amount is known
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => write!(f, "{}", value),
            Self::Range { min, max } => write!(f, "{} - {}", min, max),
            Self::Unset => write!(f, "—"),
        }
    }
}

/// A single priced line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    /// Display name of the cost
    pub name: String,

    /// Category the cost belongs to
    pub category: CostCategory,

    /// The monetary value (fixed, range, or unset)
    pub amount: Amount,

    /// Optional unit label (e.g. "per seat")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Free-text notes, typically the original source line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Where the item came from: a file path or "manual"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl CostItem {
    /// Create a new cost item
    pub fn new(name: impl Into<String>, category: CostCategory, amount: Amount) -> Self {
        Self {
            name: name.into(),
            category,
            amount,
            unit: None,
            notes: None,
            source: None,
        }
    }

    /// Attach a unit label
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Attach notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attach a provenance string
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The single decimal value used in aggregations, if any
    pub fn effective_amount(&self) -> Option<Decimal> {
        self.amount.effective()
    }
}

/// A cost item attributed to a vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorCost {
    /// Vendor name (free string, not validated against any registry)
    pub vendor: String,

    /// The attributed cost line
    pub item: CostItem,
}

impl VendorCost {
    /// Create a new vendor cost
    pub fn new(vendor: impl Into<String>, item: CostItem) -> Self {
        Self {
            vendor: vendor.into(),
            item,
        }
    }
}

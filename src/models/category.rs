//! Cost category taxonomy
//!
//! The closed set of classifications applied to priced line items, together
//! with the static lookup tables used for strict label parsing and for
//! keyword-based classification of free text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BreakevenError, BreakevenResult};

/// One of the seven fixed cost classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    /// Paid once, e.g. setup or implementation fees
    OneTime,
    /// Recurs every year
    Annual,
    /// Scales with transaction volume
    PerTransaction,
    /// Scales with the number of customers
    PerCustomer,
    /// Recurring platform or subscription fees
    Subscription,
    /// Ongoing operational costs (support, maintenance)
    Operational,
    /// Anything that matched no other category
    Other,
}

/// All categories in declaration order
pub const ALL_CATEGORIES: [CostCategory; 7] = [
    CostCategory::OneTime,
    CostCategory::Annual,
    CostCategory::PerTransaction,
    CostCategory::PerCustomer,
    CostCategory::Subscription,
    CostCategory::Operational,
    CostCategory::Other,
];

/// Categories whose amounts count as fixed costs
pub const FIXED_CATEGORIES: [CostCategory; 4] = [
    CostCategory::OneTime,
    CostCategory::Annual,
    CostCategory::Subscription,
    CostCategory::Operational,
];

/// Ordered (category, keywords) table for free-text classification.
///
/// Matching is case-insensitive substring search; the first category with a
/// hit wins, so earlier rows take precedence over later ones. `Other` has no
/// keywords and is the fallback.
pub const CATEGORY_KEYWORDS: [(CostCategory, &[&str]); 6] = [
    (
        CostCategory::OneTime,
        &["one-time", "one time", "setup", "implementation"],
    ),
    (CostCategory::Annual, &["annual", "yearly", "per year"]),
    (
        CostCategory::PerTransaction,
        &["per transaction", "transaction fee", "per txn", "per swipe"],
    ),
    (
        CostCategory::PerCustomer,
        &["per customer", "per account", "per user", "per business"],
    ),
    (
        CostCategory::Subscription,
        &["subscription", "monthly fee", "platform fee", "saas"],
    ),
    (
        CostCategory::Operational,
        &["operational", "ops", "support", "maintenance"],
    ),
];

impl CostCategory {
    /// The canonical snake_case name of this category
    pub const fn canonical_name(&self) -> &'static str {
        match self {
            Self::OneTime => "one_time",
            Self::Annual => "annual",
            Self::PerTransaction => "per_transaction",
            Self::PerCustomer => "per_customer",
            Self::Subscription => "subscription",
            Self::Operational => "operational",
            Self::Other => "other",
        }
    }

    /// Human-readable label for display
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OneTime => "One-time",
            Self::Annual => "Annual",
            Self::PerTransaction => "Per transaction",
            Self::PerCustomer => "Per customer",
            Self::Subscription => "Subscription",
            Self::Operational => "Operational",
            Self::Other => "Other",
        }
    }

    /// Parse a free-form category label.
    ///
    /// Case-insensitive; hyphens and spaces are treated as equivalent to
    /// underscores. No fuzzy or partial matching: a label that does not
    /// normalize to exactly one canonical name is rejected.
    pub fn parse_label(label: &str) -> BreakevenResult<Self> {
        let normalized = label.trim().to_lowercase().replace(['-', ' '], "_");
        ALL_CATEGORIES
            .into_iter()
            .find(|c| c.canonical_name() == normalized)
            .ok_or_else(|| BreakevenError::InvalidCategory(label.to_string()))
    }

    /// Whether amounts in this category count toward fixed costs
    pub fn is_fixed(&self) -> bool {
        FIXED_CATEGORIES.contains(self)
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        for category in ALL_CATEGORIES {
            assert_eq!(
                CostCategory::parse_label(category.canonical_name()).unwrap(),
                category
            );
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            CostCategory::parse_label("Annual").unwrap(),
            CostCategory::Annual
        );
        assert_eq!(
            CostCategory::parse_label("PER_CUSTOMER").unwrap(),
            CostCategory::PerCustomer
        );
    }

    #[test]
    fn test_parse_separator_equivalence() {
        assert_eq!(
            CostCategory::parse_label("one-time").unwrap(),
            CostCategory::OneTime
        );
        assert_eq!(
            CostCategory::parse_label("per transaction").unwrap(),
            CostCategory::PerTransaction
        );
        assert_eq!(
            CostCategory::parse_label("  one time  ").unwrap(),
            CostCategory::OneTime
        );
    }

    #[test]
    fn test_parse_rejects_partial_matches() {
        assert!(matches!(
            CostCategory::parse_label("annual-fee"),
            Err(BreakevenError::InvalidCategory(_))
        ));
        assert!(matches!(
            CostCategory::parse_label("weekly"),
            Err(BreakevenError::InvalidCategory(_))
        ));
        assert!(CostCategory::parse_label("").is_err());
    }

    #[test]
    fn test_is_fixed() {
        assert!(CostCategory::OneTime.is_fixed());
        assert!(CostCategory::Annual.is_fixed());
        assert!(CostCategory::Subscription.is_fixed());
        assert!(CostCategory::Operational.is_fixed());
        assert!(!CostCategory::PerCustomer.is_fixed());
        assert!(!CostCategory::PerTransaction.is_fixed());
        assert!(!CostCategory::Other.is_fixed());
    }

    #[test]
    fn test_keyword_table_covers_all_but_other() {
        let listed: Vec<CostCategory> = CATEGORY_KEYWORDS.iter().map(|(c, _)| *c).collect();
        for category in ALL_CATEGORIES {
            if category == CostCategory::Other {
                assert!(!listed.contains(&category));
            } else {
                assert!(listed.contains(&category));
            }
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&CostCategory::PerTransaction).unwrap();
        assert_eq!(json, "\"per_transaction\"");
        let back: CostCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CostCategory::PerTransaction);
    }
}

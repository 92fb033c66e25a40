//! Keyword-based cost category classification
//!
//! Assigns a line of free text to exactly one category via case-insensitive
//! substring search over the ordered keyword table. The first category with
//! a matching keyword wins; a line matching nothing is `Other`.

use crate::models::{CostCategory, CATEGORY_KEYWORDS};

/// Classify a line of text into a cost category.
///
/// Pure function: the same text always yields the same category. Table
/// order is the tie-break, so a line containing both "setup" and "support"
/// resolves to `OneTime`.
pub fn classify_line(text: &str) -> CostCategory {
    let lowered = text.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return category;
        }
    }
    CostCategory::Other
}

//! Amount and range detection in free text
//!
//! Scans one line of loosely formatted pricing text for currency amounts.
//! A min/max range ("$1,200 - $1,800") takes precedence: when a range is
//! present, single-amount scanning on that line is skipped entirely.
//!
//! Only comma-thousands / period-decimal formatting is recognized. Lines
//! with no parseable amount produce an empty scan, never an error.

use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;

static RE_AMOUNT: OnceLock<regex::Regex> = OnceLock::new();
static RE_RANGE: OnceLock<regex::Regex> = OnceLock::new();

fn re_amount() -> &'static regex::Regex {
    RE_AMOUNT.get_or_init(|| {
        regex::Regex::new(
            r"(?:^|[^\d])\$?(?P<amount>[0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]+)?)(?:[^\d]|$)",
        )
        .expect("amount regex")
    })
}

fn re_range() -> &'static regex::Regex {
    RE_RANGE.get_or_init(|| {
        regex::Regex::new(
            r"\$?(?P<min>[0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]+)?)\s*[-–]\s*\$?(?P<max>[0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]+)?)",
        )
        .expect("range regex")
    })
}

/// Result of scanning one line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineScan {
    /// A min/max range was detected; single amounts were not scanned
    Range { min: Decimal, max: Decimal },
    /// Zero or more single amounts, in left-to-right order
    Singles(Vec<Decimal>),
}

impl LineScan {
    /// Check if the scan found nothing usable
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Singles(amounts) if amounts.is_empty())
    }

    /// The first (authoritative) single amount, if this scan produced singles
    pub fn first_amount(&self) -> Option<Decimal> {
        match self {
            Self::Singles(amounts) => amounts.first().copied(),
            Self::Range { .. } => None,
        }
    }
}

/// Strip thousands separators and parse as an exact decimal.
///
/// The regexes only hand over digit/comma/period tokens, so a parse failure
/// is not reachable from `scan_line`; it maps to `None` all the same.
fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(&raw.replace(',', "")).ok()
}

/// Scan one line of text for a range or single amounts.
pub fn scan_line(text: &str) -> LineScan {
    if let Some(caps) = re_range().captures(text) {
        let min = parse_amount(&caps["min"]);
        let max = parse_amount(&caps["max"]);
        if let (Some(min), Some(max)) = (min, max) {
            return LineScan::Range { min, max };
        }
    }

    let amounts = re_amount()
        .captures_iter(text)
        .filter_map(|caps| parse_amount(&caps["amount"]))
        .collect();
    LineScan::Singles(amounts)
}

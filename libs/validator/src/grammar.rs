//! Recognizers for single values versus `lower,upper` ranges.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::temporal::{parse_date_range, IsoDateFormat};

/// The token meaning "unbounded".
pub const WILDCARD: &str = "*";

/// Signed decimal with an optional fraction.
pub(crate) const DEC: &str = r"-?\d+(?:\.\d+)?";

const DATE: &str = r"\d{4}(?:-\d{1,2}(?:-\d{1,2})?)?";

pub(crate) static DECIMAL_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^({DEC}|\*)\s*,\s*({DEC}|\*)$")).expect("valid decimal range regex")
});

static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^({DATE}|\*)\s*,\s*({DATE}|\*)$")).expect("valid date range regex")
});

pub fn is_wildcard(value: &str) -> bool {
    value.trim() == WILDCARD
}

/// A decimal range, or any value [`parse_date_range`] accepts.
pub fn is_range(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    DECIMAL_RANGE.is_match(value) || parse_date_range(value).is_ok()
}

pub fn is_numeric_range(value: &str) -> bool {
    !value.is_empty() && DECIMAL_RANGE.is_match(value)
}

/// An explicit `date,date` range, or a single year or year-month, which
/// implicitly spans the whole period.
pub fn is_date_range(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    DATE_RANGE.is_match(value)
        || matches!(
            IsoDateFormat::first_match(value),
            Ok(IsoDateFormat::Year | IsoDateFormat::YearMonth)
        )
}

use std::fmt;
use std::ops::Bound;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An interval over an ordered type where either bound may be absent.
///
/// A missing `from` is unbounded below, a missing `to` unbounded above. When
/// both are present `from <= to` holds; both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range<T> {
    from: Option<T>,
    to: Option<T>,
}

impl<T: PartialOrd> Range<T> {
    pub fn new(from: Option<T>, to: Option<T>) -> Result<Self> {
        if let (Some(lower), Some(upper)) = (&from, &to) {
            if lower > upper {
                return Err(Error::range("lower bound is greater than upper bound"));
            }
        }
        Ok(Self { from, to })
    }

    pub fn closed(from: T, to: T) -> Result<Self> {
        Self::new(Some(from), Some(to))
    }

    pub fn all() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// Builds a range the caller already knows to be ordered.
    pub(crate) const fn bounded(from: T, to: T) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn from(&self) -> Option<&T> {
        self.from.as_ref()
    }

    pub fn to(&self) -> Option<&T> {
        self.to.as_ref()
    }

    pub fn has_lower_bound(&self) -> bool {
        self.from.is_some()
    }

    pub fn has_upper_bound(&self) -> bool {
        self.to.is_some()
    }

    pub fn lower_endpoint(&self) -> Option<&T> {
        self.from.as_ref()
    }

    pub fn upper_endpoint(&self) -> Option<&T> {
        self.to.as_ref()
    }

    pub fn is_all(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.from.as_ref().map_or(true, |lower| lower <= value)
            && self.to.as_ref().map_or(true, |upper| value <= upper)
    }

    /// Whether every value of `other` is also in `self`.
    pub fn encloses(&self, other: &Range<T>) -> bool {
        let lower_ok = match (&self.from, &other.from) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(a), Some(b)) => a <= b,
        };
        let upper_ok = match (&self.to, &other.to) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(a), Some(b)) => b <= a,
        };
        lower_ok && upper_ok
    }

    pub fn into_bounds(self) -> (Option<T>, Option<T>) {
        (self.from, self.to)
    }
}

impl<T: PartialOrd> Default for Range<T> {
    fn default() -> Self {
        Self::all()
    }
}

impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.from {
            Some(v) => write!(f, "[{v}")?,
            None => f.write_str("[*")?,
        }
        match &self.to {
            Some(v) => write!(f, ", {v}]"),
            None => f.write_str(", *]"),
        }
    }
}

/// A range expressed with explicit comparison operators.
///
/// Exactly one of `gt`/`gte` and exactly one of `lt`/`lte` is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeValueRepr")]
pub struct RangeValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    gt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gte: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lte: Option<String>,
}

impl RangeValue {
    pub fn new(
        gt: Option<String>,
        gte: Option<String>,
        lt: Option<String>,
        lte: Option<String>,
    ) -> Result<Self> {
        if gt.is_some() == gte.is_some() {
            return Err(Error::range("exactly one of gt and gte must be given"));
        }
        if lt.is_some() == lte.is_some() {
            return Err(Error::range("exactly one of lt and lte must be given"));
        }
        Ok(Self { gt, gte, lt, lte })
    }

    pub fn gt(&self) -> Option<&str> {
        self.gt.as_deref()
    }

    pub fn gte(&self) -> Option<&str> {
        self.gte.as_deref()
    }

    pub fn lt(&self) -> Option<&str> {
        self.lt.as_deref()
    }

    pub fn lte(&self) -> Option<&str> {
        self.lte.as_deref()
    }

    pub fn lower(&self) -> Bound<&str> {
        match (&self.gt, &self.gte) {
            (Some(v), _) => Bound::Excluded(v.as_str()),
            (_, Some(v)) => Bound::Included(v.as_str()),
            (None, None) => Bound::Unbounded,
        }
    }

    pub fn upper(&self) -> Bound<&str> {
        match (&self.lt, &self.lte) {
            (Some(v), _) => Bound::Excluded(v.as_str()),
            (_, Some(v)) => Bound::Included(v.as_str()),
            (None, None) => Bound::Unbounded,
        }
    }
}

#[derive(Deserialize)]
struct RangeValueRepr {
    gt: Option<String>,
    gte: Option<String>,
    lt: Option<String>,
    lte: Option<String>,
}

impl TryFrom<RangeValueRepr> for RangeValue {
    type Error = Error;

    fn try_from(repr: RangeValueRepr) -> Result<Self> {
        RangeValue::new(repr.gt, repr.gte, repr.lt, repr.lte)
    }
}

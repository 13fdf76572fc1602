use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").expect("valid year regex"));
static YEAR_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("valid year-month regex"));
static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));
static DATE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}(?::\d{2}(?:\.\d{1,9})?)?)(Z|[+-]\d{2}:\d{2})?$")
        .expect("valid date-time regex")
});

/// Granularity of an [`IsoTemporal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemporalPrecision {
    Year,
    YearMonth,
    Day,
    Second,
}

/// A point in time written at one of the ISO 8601 precisions.
///
/// Two offset date-times are equal only when both the local time and the
/// offset match, so `10:00+01:00` and `09:00Z` differ.
#[derive(Debug, Clone, Copy)]
pub enum IsoTemporal {
    Year(i32),
    YearMonth { year: i32, month: u32 },
    Date(NaiveDate),
    LocalDateTime(NaiveDateTime),
    /// A date-time with a fixed offset; `Z` is a zero offset.
    OffsetDateTime(DateTime<FixedOffset>),
}

impl IsoTemporal {
    /// Strict ISO 8601: `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or
    /// `YYYY-MM-DDThh:mm[:ss[.f]]` with an optional `Z` or `±hh:mm`.
    pub fn parse(text: &str) -> Result<Self> {
        let invalid = || Error::value(format!("{text} is not an ISO 8601 date or date-time"));

        if YEAR.is_match(text) {
            return text.parse().map(IsoTemporal::Year).map_err(|_| invalid());
        }
        if let Some(caps) = YEAR_MONTH.captures(text) {
            let year: i32 = caps[1].parse().map_err(|_| invalid())?;
            let month: u32 = caps[2].parse().map_err(|_| invalid())?;
            if !(1..=12).contains(&month) {
                return Err(invalid());
            }
            return Ok(IsoTemporal::YearMonth { year, month });
        }
        if DATE.is_match(text) {
            return NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .map(IsoTemporal::Date)
                .map_err(|_| invalid());
        }

        let caps = DATE_TIME.captures(text).ok_or_else(invalid)?;
        let naive = parse_local(&caps[1]).ok_or_else(invalid)?;
        match caps.get(2) {
            None => Ok(IsoTemporal::LocalDateTime(naive)),
            Some(tz) => {
                let offset = parse_offset(tz.as_str()).ok_or_else(invalid)?;
                offset
                    .from_local_datetime(&naive)
                    .single()
                    .map(IsoTemporal::OffsetDateTime)
                    .ok_or_else(invalid)
            }
        }
    }

    pub fn precision(&self) -> TemporalPrecision {
        match self {
            IsoTemporal::Year(_) => TemporalPrecision::Year,
            IsoTemporal::YearMonth { .. } => TemporalPrecision::YearMonth,
            IsoTemporal::Date(_) => TemporalPrecision::Day,
            IsoTemporal::LocalDateTime(_) | IsoTemporal::OffsetDateTime(_) => {
                TemporalPrecision::Second
            }
        }
    }

    /// Whole precision units from `self` to `other`, or `None` when the two
    /// are not the same kind of value.
    pub fn until(&self, other: &IsoTemporal) -> Option<i64> {
        match (self, other) {
            (IsoTemporal::Year(a), IsoTemporal::Year(b)) => Some(i64::from(*b) - i64::from(*a)),
            (
                IsoTemporal::YearMonth { year: ay, month: am },
                IsoTemporal::YearMonth { year: by, month: bm },
            ) => {
                let a = i64::from(*ay) * 12 + i64::from(*am);
                let b = i64::from(*by) * 12 + i64::from(*bm);
                Some(b - a)
            }
            (IsoTemporal::Date(a), IsoTemporal::Date(b)) => {
                Some(b.signed_duration_since(*a).num_days())
            }
            (IsoTemporal::LocalDateTime(a), IsoTemporal::LocalDateTime(b)) => {
                Some(b.signed_duration_since(*a).num_seconds())
            }
            (IsoTemporal::OffsetDateTime(a), IsoTemporal::OffsetDateTime(b)) => {
                Some(b.signed_duration_since(*a).num_seconds())
            }
            _ => None,
        }
    }

    /// Drops the offset, keeping the local wall-clock time. With
    /// `keep_utc` a zero offset survives.
    pub fn strip_offset(self, keep_utc: bool) -> IsoTemporal {
        match self {
            IsoTemporal::OffsetDateTime(dt) if !(keep_utc && dt.offset().local_minus_utc() == 0) => {
                IsoTemporal::LocalDateTime(dt.naive_local())
            }
            other => other,
        }
    }
}

impl PartialEq for IsoTemporal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (IsoTemporal::Year(a), IsoTemporal::Year(b)) => a == b,
            (
                IsoTemporal::YearMonth { year: ay, month: am },
                IsoTemporal::YearMonth { year: by, month: bm },
            ) => ay == by && am == bm,
            (IsoTemporal::Date(a), IsoTemporal::Date(b)) => a == b,
            (IsoTemporal::LocalDateTime(a), IsoTemporal::LocalDateTime(b)) => a == b,
            (IsoTemporal::OffsetDateTime(a), IsoTemporal::OffsetDateTime(b)) => {
                a.naive_local() == b.naive_local() && a.offset() == b.offset()
            }
            _ => false,
        }
    }
}

impl Eq for IsoTemporal {}

impl Hash for IsoTemporal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        match self {
            IsoTemporal::Year(year) => year.hash(state),
            IsoTemporal::YearMonth { year, month } => {
                year.hash(state);
                month.hash(state);
            }
            IsoTemporal::Date(date) => date.hash(state),
            IsoTemporal::LocalDateTime(dt) => dt.hash(state),
            IsoTemporal::OffsetDateTime(dt) => {
                dt.naive_local().hash(state);
                dt.offset().local_minus_utc().hash(state);
            }
        }
    }
}

fn parse_local(text: &str) -> Option<NaiveDateTime> {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
}

fn parse_offset(tz: &str) -> Option<FixedOffset> {
    if tz == "Z" {
        return FixedOffset::east_opt(0);
    }
    let sign = if tz.starts_with('-') { -1 } else { 1 };
    let (h, m) = tz[1..].split_once(':')?;
    let hours: i32 = h.parse().ok()?;
    let mins: i32 = m.parse().ok()?;
    if hours > 18 || mins > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + mins * 60))
}

/// `hh:mm`, then `:ss` and a 3, 6 or 9 digit fraction only when non-zero.
fn write_time(f: &mut fmt::Formatter<'_>, dt: &NaiveDateTime) -> fmt::Result {
    write!(f, "{}", dt.format("%Y-%m-%dT%H:%M"))?;
    let nanos = dt.nanosecond() % 1_000_000_000;
    if dt.second() == 0 && nanos == 0 {
        return Ok(());
    }
    write!(f, ":{:02}", dt.second())?;
    if nanos == 0 {
        Ok(())
    } else if nanos % 1_000_000 == 0 {
        write!(f, ".{:03}", nanos / 1_000_000)
    } else if nanos % 1_000 == 0 {
        write!(f, ".{:06}", nanos / 1_000)
    } else {
        write!(f, ".{nanos:09}")
    }
}

impl fmt::Display for IsoTemporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsoTemporal::Year(year) => write!(f, "{year:04}"),
            IsoTemporal::YearMonth { year, month } => write!(f, "{year:04}-{month:02}"),
            IsoTemporal::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            IsoTemporal::LocalDateTime(dt) => write_time(f, dt),
            IsoTemporal::OffsetDateTime(dt) => {
                write_time(f, &dt.naive_local())?;
                let seconds = dt.offset().local_minus_utc();
                if seconds == 0 {
                    return f.write_str("Z");
                }
                let sign = if seconds < 0 { '-' } else { '+' };
                let abs = seconds.abs();
                write!(f, "{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
            }
        }
    }
}

impl FromStr for IsoTemporal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        IsoTemporal::parse(s)
    }
}

/// How [`IsoDateInterval::render`] treats offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetMode {
    #[default]
    Keep,
    /// Render non-UTC date-times as local time; `Z` is kept.
    StripNonUtc,
    StripAll,
}

/// An interval between two temporal values of the same precision.
///
/// A single point has `to` absent or equal to `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsoDateInterval {
    from: Option<IsoTemporal>,
    to: Option<IsoTemporal>,
}

impl IsoDateInterval {
    pub fn new(from: IsoTemporal, to: IsoTemporal) -> Result<Self> {
        check_order(&from, &to)?;
        Ok(Self {
            from: Some(from),
            to: Some(to),
        })
    }

    pub fn single(value: IsoTemporal) -> Self {
        Self {
            from: Some(value),
            to: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from(&self) -> Option<&IsoTemporal> {
        self.from.as_ref()
    }

    pub fn to(&self) -> Option<&IsoTemporal> {
        self.to.as_ref()
    }

    pub fn set_from(&mut self, from: IsoTemporal) -> Result<()> {
        if let Some(to) = &self.to {
            check_order(&from, to)?;
        }
        self.from = Some(from);
        Ok(())
    }

    pub fn set_to(&mut self, to: IsoTemporal) -> Result<()> {
        if let Some(from) = &self.from {
            check_order(from, &to)?;
        }
        self.to = Some(to);
        Ok(())
    }

    /// Parses `from/to`, or a single value standing for both ends.
    pub fn from_string(text: &str) -> Result<Self> {
        match text.split_once('/') {
            Some((_, "")) => Err(Error::value(format!(
                "missing 'to' end of interval in {text}"
            ))),
            Some((from, to)) => Self::from_parts(from, to),
            None => {
                let value = IsoTemporal::parse(text)?;
                Self::new(value, value)
            }
        }
    }

    pub fn from_parts(from: &str, to: &str) -> Result<Self> {
        Self::new(IsoTemporal::parse(from)?, IsoTemporal::parse(to)?)
    }

    /// `None` for an interval without a lower bound.
    pub fn render(&self, mode: OffsetMode) -> Option<String> {
        let adjust = |t: IsoTemporal| match mode {
            OffsetMode::Keep => t,
            OffsetMode::StripNonUtc => t.strip_offset(true),
            OffsetMode::StripAll => t.strip_offset(false),
        };
        let from = self.from?;
        let mut out = adjust(from).to_string();
        if let Some(to) = self.to.filter(|to| *to != from) {
            out.push('/');
            out.push_str(&adjust(to).to_string());
        }
        Some(out)
    }
}

fn check_order(from: &IsoTemporal, to: &IsoTemporal) -> Result<()> {
    match from.until(to) {
        None => Err(Error::range(format!(
            "interval ends must share a precision, got {from} and {to}"
        ))),
        Some(diff) if diff < 0 => Err(Error::range(format!("invalid interval: ({from}, {to})"))),
        Some(_) => Ok(()),
    }
}

impl fmt::Display for IsoDateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(OffsetMode::Keep).unwrap_or_default())
    }
}

impl FromStr for IsoDateInterval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        IsoDateInterval::from_string(s)
    }
}

impl Serialize for IsoDateInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.render(OffsetMode::Keep) {
            Some(text) => serializer.serialize_str(&text),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for IsoDateInterval {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        IsoDateInterval::from_string(&text).map_err(serde::de::Error::custom)
    }
}

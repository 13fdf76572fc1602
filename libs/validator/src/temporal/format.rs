use std::fmt;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::grammar::WILDCARD;
use crate::range::Range;

static FULL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").expect("valid date regex"));
static YEAR_MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})$").expect("valid year-month regex"));
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})$").expect("valid year regex"));

/// The date precisions accepted by occurrence search, finest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsoDateFormat {
    Full,
    YearMonth,
    Year,
}

impl IsoDateFormat {
    /// Match order used by [`IsoDateFormat::first_match`].
    pub const ALL: [IsoDateFormat; 3] = [
        IsoDateFormat::Full,
        IsoDateFormat::YearMonth,
        IsoDateFormat::Year,
    ];

    pub fn pattern(self) -> &'static str {
        match self {
            IsoDateFormat::Full => "yyyy-MM-dd",
            IsoDateFormat::YearMonth => "yyyy-MM",
            IsoDateFormat::Year => "yyyy",
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            IsoDateFormat::Full => &*FULL,
            IsoDateFormat::YearMonth => &*YEAR_MONTH,
            IsoDateFormat::Year => &*YEAR,
        }
    }

    /// Strictly parses the whole of `value`, returning the first day of the
    /// period it names. Calendar-invalid dates such as `2010-02-29` fail.
    pub fn parse(self, value: &str) -> Result<NaiveDate> {
        let invalid = || Error::value(format!("{value} is not a valid {} date", self.pattern()));
        let caps = self.regex().captures(value).ok_or_else(invalid)?;
        let number = |idx: usize| -> Result<u32> {
            caps.get(idx)
                .map_or(Ok(1), |m| m.as_str().parse::<u32>())
                .map_err(|_| invalid())
        };
        let year = i32::try_from(number(1)?).map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, number(2)?, number(3)?).ok_or_else(invalid)
    }

    pub fn is_valid_date(self, value: &str) -> bool {
        self.parse(value).is_ok()
    }

    /// Renders `date` at this precision.
    pub fn format(self, date: NaiveDate) -> String {
        match self {
            IsoDateFormat::Full => date.format("%Y-%m-%d").to_string(),
            IsoDateFormat::YearMonth => date.format("%Y-%m").to_string(),
            IsoDateFormat::Year => date.format("%Y").to_string(),
        }
    }

    /// The first format, finest first, that parses all of `value`.
    pub fn first_match(value: &str) -> Result<IsoDateFormat> {
        Self::ALL
            .into_iter()
            .find(|format| format.is_valid_date(value))
            .ok_or_else(|| Error::value(format!("{value} is not a valid date")))
    }
}

impl fmt::Display for IsoDateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// A parsed date together with the precision it was written at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedDate {
    pub date: NaiveDate,
    pub format: IsoDateFormat,
}

/// Parses one date; `Ok(None)` stands for the wildcard.
pub fn parse_date(value: &str) -> Result<Option<ParsedDate>> {
    if value.is_empty() {
        return Err(Error::value("date parameter cannot be empty"));
    }
    if value == WILDCARD {
        return Ok(None);
    }
    let format = IsoDateFormat::first_match(value)?;
    let date = format.parse(value)?;
    Ok(Some(ParsedDate { date, format }))
}

/// Parses `lower,upper` into an inclusive date range.
///
/// The upper bound is pushed to the last day of its year or month when it
/// was written at that precision; the lower bound is left at the first day.
pub fn parse_date_range(value: &str) -> Result<Range<NaiveDate>> {
    if value.is_empty() {
        return Err(Error::value("date parameter cannot be empty"));
    }
    let (lower, upper) = value
        .split_once(',')
        .ok_or_else(|| Error::range(format!("{value} is not a date range")))?;
    if upper.contains(',') {
        return Err(Error::range(format!(
            "{value} has more than two comma separated parts"
        )));
    }

    let lower = parse_date(lower.trim())?.map(|parsed| parsed.date);
    let upper = parse_date(upper.trim())?.map(|parsed| to_last_day(parsed.date, parsed.format));

    Range::new(lower, upper)
        .map_err(|_| Error::range(format!("lower date exceeds upper date in {value}")))
}

/// The last day of the year or month `date` falls in, per `format`.
pub fn to_last_day(date: NaiveDate, format: IsoDateFormat) -> NaiveDate {
    match format {
        IsoDateFormat::Full => date,
        IsoDateFormat::YearMonth => {
            let (year, month) = if date.month() == 12 {
                (date.year() + 1, 1)
            } else {
                (date.year(), date.month() + 1)
            };
            NaiveDate::from_ymd_opt(year, month, 1)
                .and_then(|first| first.pred_opt())
                .unwrap_or(date)
        }
        IsoDateFormat::Year => NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date),
    }
}

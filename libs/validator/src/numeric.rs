use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::grammar::{DECIMAL_RANGE, WILDCARD};
use crate::range::Range;

pub const LATITUDE: Range<f64> = Range::bounded(-90.0, 90.0);
pub const LONGITUDE: Range<f64> = Range::bounded(-180.0, 180.0);

pub const MONTHS: RangeInclusive<i32> = 1..=12;
pub const DAYS: RangeInclusive<i32> = 1..=31;

/// Parses `lower,upper` where each side is a decimal or `*`.
pub fn parse_decimal_range(value: &str) -> Result<Range<f64>> {
    parse_range(value, "decimal")
}

/// Parses `lower,upper` where each side is an integer or `*`.
pub fn parse_integer_range(value: &str) -> Result<Range<i32>> {
    parse_range(value, "integer")
}

fn parse_range<T>(value: &str, what: &str) -> Result<Range<T>>
where
    T: FromStr + PartialOrd,
{
    let caps = DECIMAL_RANGE
        .captures(value)
        .ok_or_else(|| Error::value(format!("invalid {what} range: {value}")))?;
    let bound = |side: &str| -> Result<Option<T>> {
        if side == WILDCARD {
            return Ok(None);
        }
        side.parse::<T>()
            .map(Some)
            .map_err(|_| Error::value(format!("invalid {what} range: {value}")))
    };
    let lower = bound(&caps[1])?;
    let upper = bound(&caps[2])?;
    Range::new(lower, upper)
        .map_err(|_| Error::range(format!("lower bound exceeds upper bound in {value}")))
}

/// A finite decimal.
pub(crate) fn parse_double(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// A single decimal or a decimal range.
pub fn validate_double(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::value("decimal value cannot be empty"));
    }
    if parse_double(value).is_some() {
        return Ok(());
    }
    parse_decimal_range(value).map(drop)
}

/// A single decimal inside `bounds`, or a decimal range enclosed by it.
pub fn validate_double_within(value: &str, bounds: &Range<f64>, what: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::value(format!("{what} cannot be empty")));
    }
    let ok = match parse_double(value) {
        Some(v) => bounds.contains(&v),
        None if DECIMAL_RANGE.is_match(value) => bounds.encloses(&parse_decimal_range(value)?),
        None => return Err(Error::value(format!("{value} is not a valid number"))),
    };
    if ok {
        Ok(())
    } else {
        Err(Error::value(format!("{value} is not a valid {what}, it must lie within {bounds}")))
    }
}

/// A single integer or an integer range; returns the bounds that are present.
pub fn validate_integer(value: &str) -> Result<Vec<i32>> {
    if value.is_empty() {
        return Err(Error::value("integer value cannot be empty"));
    }
    if let Ok(v) = value.parse::<i32>() {
        return Ok(vec![v]);
    }
    let (lower, upper) = parse_integer_range(value)?.into_bounds();
    Ok(lower.into_iter().chain(upper).collect())
}

/// Every value must lie within `allowed`.
pub fn check_within(values: &[i32], allowed: &RangeInclusive<i32>, what: &str) -> Result<()> {
    match values.iter().find(|v| !allowed.contains(v)) {
        Some(v) => Err(Error::value(format!(
            "{what} {v} must be between {} and {}",
            allowed.start(),
            allowed.end()
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_ranges_map_wildcards_to_open_bounds() {
        let r = parse_decimal_range("-10.5,200.5").unwrap();
        assert_eq!((r.from(), r.to()), (Some(&-10.5), Some(&200.5)));

        let r = parse_decimal_range("*, 900").unwrap();
        assert_eq!((r.from(), r.to()), (None, Some(&900.0)));

        assert!(parse_decimal_range("*,*").unwrap().is_all());
    }

    #[test]
    fn malformed_and_reversed_ranges_fail_differently() {
        assert!(matches!(parse_decimal_range("1,2,3"), Err(Error::InvalidValue(_))));
        assert!(matches!(parse_decimal_range("5,1"), Err(Error::InvalidRange(_))));
        assert!(matches!(parse_integer_range("1.5,3"), Err(Error::InvalidValue(_))));
        assert!(matches!(parse_integer_range("9,3"), Err(Error::InvalidRange(_))));
    }

    #[test]
    fn integers_report_present_bounds() {
        assert_eq!(validate_integer("7").unwrap(), vec![7]);
        assert_eq!(validate_integer("*,5").unwrap(), vec![5]);
        assert_eq!(validate_integer("13, 30").unwrap(), vec![13, 30]);
        assert!(validate_integer("").is_err());
        assert!(validate_integer("1991-01-31").is_err());
    }

    #[test]
    fn month_bounds() {
        assert!(check_within(&[1, 12], &MONTHS, "month").is_ok());
        assert!(check_within(&[0], &MONTHS, "month").is_err());
        assert!(check_within(&[13], &MONTHS, "month").is_err());
    }

    #[test]
    fn coordinates_must_be_enclosed() {
        assert!(validate_double_within("90.0", &LATITUDE, "latitude").is_ok());
        assert!(validate_double_within("180.0", &LATITUDE, "latitude").is_err());
        assert!(validate_double_within("50.5,89.9", &LATITUDE, "latitude").is_ok());
        assert!(validate_double_within("50.0,92.2", &LATITUDE, "latitude").is_err());
        assert!(validate_double_within("-190.0,92.2", &LONGITUDE, "longitude").is_err());
        assert!(validate_double_within("north", &LONGITUDE, "longitude").is_err());
    }

    #[test]
    fn non_finite_doubles_are_rejected() {
        assert!(validate_double("NaN").is_err());
        assert!(validate_double("inf").is_err());
        assert!(validate_double("1080.32").is_ok());
        assert!(validate_double("1080m").is_err());
    }
}

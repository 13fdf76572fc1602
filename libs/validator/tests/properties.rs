//! Property-based tests using QuickCheck

use chrono::NaiveDate;
use lichen_validator::temporal::to_last_day;
use lichen_validator::{
    parse_integer_range, IsoDateFormat, IsoDateInterval, OccurrenceParameter, Range,
    TypeValidator,
};
use quickcheck::{QuickCheck, TestResult};

/// Property: a range is accepted exactly when its bounds are ordered
#[test]
fn prop_range_requires_ordered_bounds() {
    fn prop(a: i32, b: i32) -> TestResult {
        let range = Range::closed(a, b);
        let parsed = parse_integer_range(&format!("{a},{b}"));
        TestResult::from_bool(range.is_ok() == (a <= b) && parsed.is_ok() == (a <= b))
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(i32, i32) -> TestResult);
}

/// Property: an open side never rejects a value
#[test]
fn prop_open_ranges_contain_everything_past_the_bound() {
    fn prop(bound: i32, value: i32) -> TestResult {
        let at_least = Range::new(Some(bound), None).unwrap();
        let at_most = Range::new(None, Some(bound)).unwrap();
        TestResult::from_bool(
            at_least.contains(&value) == (value >= bound)
                && at_most.contains(&value) == (value <= bound)
                && Range::<i32>::all().contains(&value),
        )
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(i32, i32) -> TestResult);
}

/// Property: year intervals render back to the text they were parsed from
#[test]
fn prop_year_interval_round_trip() {
    fn prop(a: u16, b: u16) -> TestResult {
        let (from, to) = (1000 + a % 9000, 1000 + b % 9000);
        let text = format!("{from}/{to}");
        match IsoDateInterval::from_string(&text) {
            Ok(idi) if from < to => TestResult::from_bool(idi.to_string() == text),
            Ok(idi) if from == to => TestResult::from_bool(idi.to_string() == from.to_string()),
            Ok(_) => TestResult::failed(),
            Err(_) => TestResult::from_bool(from > to),
        }
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(u16, u16) -> TestResult);
}

/// Property: the last day of a period never precedes its first day
#[test]
fn prop_last_day_stays_in_period() {
    fn prop(year: u16, month: u8) -> TestResult {
        let year = 1000 + i32::from(year % 9000);
        let month = u32::from(month % 12) + 1;
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return TestResult::discard();
        };
        let last = to_last_day(first, IsoDateFormat::YearMonth);
        TestResult::from_bool(
            last >= first && last.format("%Y-%m").to_string() == first.format("%Y-%m").to_string(),
        )
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(u16, u8) -> TestResult);
}

/// Property: months are accepted only between 1 and 12
#[test]
fn prop_month_bounds() {
    fn prop(month: i32) -> TestResult {
        let ok = TypeValidator::new()
            .validate(&OccurrenceParameter::Month, &month.to_string())
            .is_ok();
        TestResult::from_bool(ok == (1..=12).contains(&month))
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(i32) -> TestResult);
}

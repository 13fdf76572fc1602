//! ISO 8601 dates for search values and date intervals.

mod format;
mod interval;

pub use format::{parse_date, parse_date_range, to_last_day, IsoDateFormat, ParsedDate};
pub use interval::{IsoDateInterval, IsoTemporal, OffsetMode, TemporalPrecision};

#![forbid(unsafe_code)]
//! Type validation for occurrence search parameters.
//!
//! Every search parameter declares a [`ParamType`]. [`TypeValidator`] checks a
//! raw query value against that type and reports failures as
//! [`ValidationError`]s that carry the parameter name, the value and the
//! underlying [`Error`].
//!
//! Most types also accept a `lower,upper` range in which either side may be
//! the wildcard `*`:
//!
//! ```
//! use lichen_validator::{OccurrenceParameter, TypeValidator};
//!
//! let validator = TypeValidator::new();
//! assert!(validator.validate(&OccurrenceParameter::Year, "1860, 1911").is_ok());
//! assert!(validator.validate(&OccurrenceParameter::EventDate, "2000-10,*").is_ok());
//! assert!(validator.validate(&OccurrenceParameter::Month, "13").is_err());
//! ```
//!
//! The building blocks are public as well: [`Range`], the range grammar in
//! [`grammar`], date parsing and [`IsoDateInterval`] in [`temporal`],
//! WKT checks in [`geometry`] and distances in [`distance`].

pub mod distance;
mod error;
pub mod geometry;
pub mod grammar;
pub mod numeric;
mod param;
mod range;
pub mod temporal;
mod validator;

pub use distance::{parse_distance, Distance, DistanceUnit, GeoDistance};
pub use error::{Error, ErrorKind, Result, ValidationError};
pub use geometry::{validate_geometry, validate_geometry_syntax};
pub use grammar::{is_date_range, is_numeric_range, is_range, is_wildcard, WILDCARD};
pub use numeric::{parse_decimal_range, parse_integer_range};
pub use param::{
    OccurrenceParameter, ParamType, ParamTypeError, Parameter, ParameterRegistry,
    SearchParameter, StaticRegistry,
};
pub use range::{Range, RangeValue};
pub use temporal::{
    parse_date, parse_date_range, IsoDateFormat, IsoDateInterval, IsoTemporal, OffsetMode,
};
pub use validator::TypeValidator;

use lichen_geometry::{GeometryEngine, WktEngine};
use lichen_vocab::{Country, Language};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::distance::{validate_distance, validate_geo_distance};
use crate::error::{Error, Result, ValidationError};
use crate::geometry::{validate_geometry_syntax, validate_geometry_with};
use crate::grammar::{is_wildcard, WILDCARD};
use crate::numeric::{
    check_within, validate_double, validate_double_within, validate_integer, DAYS, LATITUDE,
    LONGITUDE, MONTHS,
};
use crate::param::{ParamType, ParameterRegistry, SearchParameter};
use crate::temporal::{parse_date, parse_date_range};

static BOOLEAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(true|false)$").expect("valid boolean regex"));

/// Length of the canonical hyphenated UUID form.
const UUID_LEN: usize = 36;

/// Checks raw search parameter values against their declared type.
///
/// Stateless apart from the geometry engine, so one instance can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct TypeValidator<G = WktEngine> {
    engine: G,
}

impl TypeValidator<WktEngine> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<G: GeometryEngine> TypeValidator<G> {
    pub fn with_engine(engine: G) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &G {
        &self.engine
    }

    /// Validates `value` for `param`, wrapping any failure with the
    /// parameter name and the offending value.
    pub fn validate<P>(&self, param: &P, value: &str) -> std::result::Result<(), ValidationError>
    where
        P: SearchParameter + ?Sized,
    {
        let ty = param.param_type();
        trace!(parameter = param.name(), %ty, value, "validating search parameter");
        self.check(ty, value).map_err(|cause| {
            debug!(parameter = param.name(), value, error = %cause, "rejected search parameter");
            ValidationError::new(param.name(), value, cause)
        })
    }

    /// Resolves `name` in `registry` first; unknown names are an error.
    pub fn validate_named<R>(
        &self,
        registry: &R,
        name: &str,
        value: &str,
    ) -> std::result::Result<(), ValidationError>
    where
        R: ParameterRegistry + ?Sized,
    {
        match registry.resolve(name) {
            Some(ty) => self.validate(&crate::param::Parameter::new(name, ty), value),
            None => {
                debug!(parameter = name, "unknown search parameter");
                Err(ValidationError::new(
                    name,
                    value,
                    Error::UnknownParameter(name.to_string()),
                ))
            }
        }
    }

    /// Type-level check without a parameter name attached.
    pub fn check(&self, ty: ParamType, value: &str) -> Result<()> {
        if ty.accepts_wildcard() && is_wildcard(value) {
            return Ok(());
        }
        match ty {
            ParamType::Numeric => validate_double(value),
            ParamType::Latitude => validate_double_within(value, &LATITUDE, "latitude"),
            ParamType::Longitude => validate_double_within(value, &LONGITUDE, "longitude"),
            ParamType::Integer => validate_integer(value).map(drop),
            ParamType::Month => check_within(&validate_integer(value)?, &MONTHS, "month"),
            ParamType::Day => check_within(&validate_integer(value)?, &DAYS, "day"),
            ParamType::Boolean => {
                if BOOLEAN.is_match(value) {
                    Ok(())
                } else {
                    Err(Error::value(format!("{value} is not a boolean")))
                }
            }
            ParamType::Uuid => check_uuid(value),
            ParamType::CountryCode => Country::lookup(value).map(drop).map_err(Error::from),
            ParamType::LanguageCode => Language::lookup(value).map(drop).map_err(Error::from),
            ParamType::Enum(set) => set.parse(value).map(drop).map_err(Error::from),
            ParamType::Date => {
                if value.contains(',') {
                    parse_date_range(value).map(drop)
                } else {
                    parse_date(value).map(drop)
                }
            }
            ParamType::Geometry => {
                validate_geometry_syntax(value)?;
                validate_geometry_with(&self.engine, value).map(drop)
            }
            ParamType::Distance => check_distance(value),
            ParamType::GeoDistance => validate_geo_distance(value).map(drop),
            ParamType::Text => Ok(()),
        }
    }
}

fn check_uuid(value: &str) -> Result<()> {
    let invalid = || Error::value(format!("{value} is not a valid UUID"));
    if value.len() != UUID_LEN {
        return Err(invalid());
    }
    uuid::Uuid::try_parse(value).map(drop).map_err(|_| invalid())
}

/// A single distance, or `lower,upper` where either side may be `*`.
fn check_distance(value: &str) -> Result<()> {
    let Some((lower, upper)) = value.split_once(',') else {
        return validate_distance(value).map(drop);
    };
    let bound = |side: &str| {
        let side = side.trim();
        if side == WILDCARD {
            Ok(None)
        } else {
            validate_distance(side).map(Some)
        }
    };
    match (bound(lower)?, bound(upper)?) {
        (Some(lower), Some(upper)) if lower > upper => Err(Error::range(format!(
            "lower distance exceeds upper distance in {value}"
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::param::{OccurrenceParameter, Parameter, StaticRegistry};

    #[test]
    fn wildcard_short_circuits() {
        let v = TypeValidator::new();
        assert!(v.check(ParamType::Month, "*").is_ok());
        assert!(v.check(ParamType::Uuid, " * ").is_ok());
        assert!(v.check(ParamType::Geometry, "*").is_err());
        assert!(v.check(ParamType::Distance, "*").is_err());
    }

    #[test]
    fn errors_name_the_parameter() {
        let err = TypeValidator::new()
            .validate(&OccurrenceParameter::Month, "13")
            .unwrap_err();
        assert_eq!(err.parameter, "MONTH");
        assert_eq!(err.value, "13");
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn reversed_ranges_are_range_errors() {
        let v = TypeValidator::new();
        let p = Parameter::new("elevation", ParamType::Numeric);
        assert_eq!(v.validate(&p, "10,5").unwrap_err().kind(), ErrorKind::InvalidRange);
        assert_eq!(
            v.check(ParamType::Date, "2010,2000").unwrap_err().kind(),
            ErrorKind::InvalidRange
        );
    }

    #[test]
    fn distance_ranges() {
        let v = TypeValidator::new();
        assert!(v.check(ParamType::Distance, "10km").is_ok());
        assert!(v.check(ParamType::Distance, "10m,1km").is_ok());
        assert!(v.check(ParamType::Distance, "*,1km").is_ok());
        assert!(v.check(ParamType::Distance, "2km,1000m").is_err());
        assert!(v.check(ParamType::Distance, "0,1km").is_err());
    }

    #[test]
    fn named_lookup_goes_through_the_registry() {
        let v = TypeValidator::new();
        let registry = StaticRegistry::with_catalogue();
        assert!(v.validate_named(&registry, "decimalLatitude", "45").is_ok());
        assert!(v.validate_named(&registry, "decimalLatitude", "95").is_err());
        let err = v.validate_named(&registry, "colour", "red").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownParameter);
    }
}

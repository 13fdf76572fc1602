use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::numeric::{parse_double, LATITUDE, LONGITUDE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistanceUnit {
    Inch,
    Yard,
    Feet,
    Kilometers,
    NauticalMiles,
    Millimeters,
    Centimeters,
    Miles,
    Meters,
}

impl DistanceUnit {
    pub const DEFAULT: DistanceUnit = DistanceUnit::Meters;

    /// Suffix matching order. `m` ends several other names, so meters come last.
    pub const ALL: [DistanceUnit; 9] = [
        DistanceUnit::Inch,
        DistanceUnit::Yard,
        DistanceUnit::Feet,
        DistanceUnit::Kilometers,
        DistanceUnit::NauticalMiles,
        DistanceUnit::Millimeters,
        DistanceUnit::Centimeters,
        DistanceUnit::Miles,
        DistanceUnit::Meters,
    ];

    pub fn meters(self) -> f64 {
        match self {
            DistanceUnit::Inch => 0.0254,
            DistanceUnit::Yard => 0.9144,
            DistanceUnit::Feet => 0.3048,
            DistanceUnit::Kilometers => 1000.0,
            DistanceUnit::NauticalMiles => 1852.0,
            DistanceUnit::Millimeters => 0.001,
            DistanceUnit::Centimeters => 0.01,
            DistanceUnit::Miles => 1609.344,
            DistanceUnit::Meters => 1.0,
        }
    }

    /// Accepted suffixes; the first is the canonical symbol.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            DistanceUnit::Inch => &["in", "inch"],
            DistanceUnit::Yard => &["yd", "yards"],
            DistanceUnit::Feet => &["ft", "feet"],
            DistanceUnit::Kilometers => &["km", "kilometers"],
            DistanceUnit::NauticalMiles => &["NM", "nmi", "nauticalmiles"],
            DistanceUnit::Millimeters => &["mm", "millimeters"],
            DistanceUnit::Centimeters => &["cm", "centimeters"],
            DistanceUnit::Miles => &["mi", "miles"],
            DistanceUnit::Meters => &["m", "meters"],
        }
    }

    pub fn symbol(self) -> &'static str {
        self.names()[0]
    }

    pub fn convert(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
        if from == to {
            value
        } else {
            value * from.meters() / to.meters()
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A length with its unit. Distances compare equal across units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Distance {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl Distance {
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    pub fn in_unit(&self, unit: DistanceUnit) -> f64 {
        DistanceUnit::convert(self.value, self.unit, unit)
    }

    pub fn in_meters(&self) -> f64 {
        self.in_unit(DistanceUnit::Meters)
    }
}

/// Parses `<number>[unit]`; without a unit the value is in meters.
pub fn parse_distance(text: &str) -> Result<Distance> {
    let text = text.trim();
    let invalid = || Error::value(format!("{text} is not a valid distance"));
    let (number, unit) = DistanceUnit::ALL
        .into_iter()
        .find_map(|unit| {
            unit.names()
                .iter()
                .find_map(|name| text.strip_suffix(name))
                .map(|number| (number, unit))
        })
        .unwrap_or((text, DistanceUnit::DEFAULT));
    let value = parse_double(number).ok_or_else(invalid)?;
    Ok(Distance::new(value, unit))
}

impl FromStr for Distance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_distance(s)
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.in_unit(other.unit) == other.value
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.in_unit(self.unit))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// A circle around a point: `latitude,longitude,distance`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoDistance {
    pub latitude: f64,
    pub longitude: f64,
    pub distance: Distance,
}

impl GeoDistance {
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(Error::value("geo distance cannot be empty"));
        }
        let parts: Vec<&str> = text.split(',').map(str::trim).collect();
        let [latitude, longitude, distance] = parts.as_slice() else {
            return Err(Error::value(format!(
                "{text} must follow the format lat,lng,distance"
            )));
        };
        let coordinate = |s: &str| {
            parse_double(s).ok_or_else(|| Error::value(format!("{s} is not a valid coordinate")))
        };
        Ok(GeoDistance {
            latitude: coordinate(*latitude)?,
            longitude: coordinate(*longitude)?,
            distance: parse_distance(distance)?,
        })
    }

    pub fn to_geo_distance_string(&self) -> String {
        format!("{}, {}, {}", self.latitude, self.longitude, self.distance)
    }
}

impl FromStr for GeoDistance {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        GeoDistance::parse(s)
    }
}

/// A strictly positive distance.
pub fn validate_distance(text: &str) -> Result<Distance> {
    if text.is_empty() {
        return Err(Error::value("distance cannot be empty"));
    }
    let distance = parse_distance(text)?;
    if distance.value <= 0.0 {
        return Err(Error::value(format!("distance must be greater than zero, got {text}")));
    }
    Ok(distance)
}

/// A geo distance whose centre lies on the globe and whose radius is positive.
pub fn validate_geo_distance(text: &str) -> Result<GeoDistance> {
    let geo = GeoDistance::parse(text)?;
    if !LATITUDE.contains(&geo.latitude) {
        return Err(Error::value(format!(
            "{} is not a valid latitude, it must lie within {LATITUDE}",
            geo.latitude
        )));
    }
    if !LONGITUDE.contains(&geo.longitude) {
        return Err(Error::value(format!(
            "{} is not a valid longitude, it must lie within {LONGITUDE}",
            geo.longitude
        )));
    }
    if geo.distance.value <= 0.0 {
        return Err(Error::value(format!(
            "distance must be greater than zero, got {}",
            geo.distance
        )));
    }
    Ok(geo)
}

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use lichen_vocab::{
    normalize, VariantSet, BASIS_OF_RECORD, CONTINENT, ENDPOINT_TYPE, ESTABLISHMENT_MEANS,
    LICENSE, MEDIA_TYPE, TYPE_STATUS,
};
use thiserror::Error;

/// Declared semantic type of a search parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// A decimal or decimal range.
    Numeric,
    Latitude,
    Longitude,
    /// An integer or integer range.
    Integer,
    Month,
    Day,
    Boolean,
    Uuid,
    CountryCode,
    LanguageCode,
    Enum(VariantSet),
    Date,
    Geometry,
    Distance,
    GeoDistance,
    Text,
}

impl ParamType {
    /// Geometry and distances must always carry a concrete value.
    pub fn accepts_wildcard(self) -> bool {
        !matches!(self, ParamType::Geometry | ParamType::Distance)
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamType::Numeric => "double",
            ParamType::Latitude => "latitude",
            ParamType::Longitude => "longitude",
            ParamType::Integer => "integer",
            ParamType::Month => "month",
            ParamType::Day => "day",
            ParamType::Boolean => "boolean",
            ParamType::Uuid => "uuid",
            ParamType::CountryCode => "country",
            ParamType::LanguageCode => "language",
            ParamType::Enum(set) => return write!(f, "enum:{}", set.name()),
            ParamType::Date => "date",
            ParamType::Geometry => "geometry",
            ParamType::Distance => "distance",
            ParamType::GeoDistance => "geo_distance",
            ParamType::Text => "string",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown parameter type '{0}'")]
pub struct ParamTypeError(pub String);

impl FromStr for ParamType {
    type Err = ParamTypeError;

    /// Reads the names produced by `Display`, plus a few aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        if let Some((prefix, vocabulary)) = spec.split_once(':') {
            if prefix.eq_ignore_ascii_case("enum") {
                return VariantSet::by_name(vocabulary.trim())
                    .map(ParamType::Enum)
                    .map_err(|_| ParamTypeError(s.to_string()));
            }
            return Err(ParamTypeError(s.to_string()));
        }
        let ty = match spec.to_ascii_lowercase().as_str() {
            "double" | "decimal" | "numeric" => ParamType::Numeric,
            "latitude" => ParamType::Latitude,
            "longitude" => ParamType::Longitude,
            "integer" | "int" => ParamType::Integer,
            "month" => ParamType::Month,
            "day" => ParamType::Day,
            "boolean" | "bool" => ParamType::Boolean,
            "uuid" => ParamType::Uuid,
            "country" => ParamType::CountryCode,
            "language" => ParamType::LanguageCode,
            "date" => ParamType::Date,
            "geometry" | "wkt" => ParamType::Geometry,
            "distance" => ParamType::Distance,
            "geo_distance" | "geodistance" => ParamType::GeoDistance,
            "string" | "text" => ParamType::Text,
            _ => return Err(ParamTypeError(s.to_string())),
        };
        Ok(ty)
    }
}

/// Anything that can be validated: a name plus a declared type.
pub trait SearchParameter {
    fn name(&self) -> &str;
    fn param_type(&self) -> ParamType;
}

/// An ad-hoc parameter not in the built-in catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub name: String,
    pub ty: ParamType,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: ParamType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl SearchParameter for Parameter {
    fn name(&self) -> &str {
        &self.name
    }

    fn param_type(&self) -> ParamType {
        self.ty
    }
}

macro_rules! occurrence_parameters {
    ($($variant:ident => $name:literal : $ty:expr),+ $(,)?) => {
        /// Built-in occurrence search parameters.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum OccurrenceParameter {
            $($variant),+
        }

        impl OccurrenceParameter {
            pub const ALL: &'static [OccurrenceParameter] = &[$(OccurrenceParameter::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(OccurrenceParameter::$variant => $name),+
                }
            }

            pub fn param_type(self) -> ParamType {
                match self {
                    $(OccurrenceParameter::$variant => $ty),+
                }
            }
        }
    };
}

occurrence_parameters! {
    DatasetKey => "DATASET_KEY": ParamType::Uuid,
    Year => "YEAR": ParamType::Integer,
    Month => "MONTH": ParamType::Month,
    Day => "DAY": ParamType::Day,
    EventDate => "EVENT_DATE": ParamType::Date,
    LastInterpreted => "LAST_INTERPRETED": ParamType::Date,
    DecimalLatitude => "DECIMAL_LATITUDE": ParamType::Latitude,
    DecimalLongitude => "DECIMAL_LONGITUDE": ParamType::Longitude,
    Country => "COUNTRY": ParamType::CountryCode,
    Continent => "CONTINENT": ParamType::Enum(CONTINENT),
    PublishingCountry => "PUBLISHING_COUNTRY": ParamType::CountryCode,
    Elevation => "ELEVATION": ParamType::Numeric,
    Depth => "DEPTH": ParamType::Numeric,
    CoordinateUncertaintyInMeters => "COORDINATE_UNCERTAINTY_IN_METERS": ParamType::Numeric,
    DistanceFromCentroidInMeters => "DISTANCE_FROM_CENTROID_IN_METERS": ParamType::Numeric,
    InstitutionCode => "INSTITUTION_CODE": ParamType::Text,
    CollectionCode => "COLLECTION_CODE": ParamType::Text,
    CatalogNumber => "CATALOG_NUMBER": ParamType::Text,
    RecordedBy => "RECORDED_BY": ParamType::Text,
    RecordNumber => "RECORD_NUMBER": ParamType::Text,
    BasisOfRecord => "BASIS_OF_RECORD": ParamType::Enum(BASIS_OF_RECORD),
    TaxonKey => "TAXON_KEY": ParamType::Integer,
    KingdomKey => "KINGDOM_KEY": ParamType::Integer,
    PhylumKey => "PHYLUM_KEY": ParamType::Integer,
    ClassKey => "CLASS_KEY": ParamType::Integer,
    OrderKey => "ORDER_KEY": ParamType::Integer,
    FamilyKey => "FAMILY_KEY": ParamType::Integer,
    GenusKey => "GENUS_KEY": ParamType::Integer,
    SubgenusKey => "SUBGENUS_KEY": ParamType::Integer,
    SpeciesKey => "SPECIES_KEY": ParamType::Integer,
    ScientificName => "SCIENTIFIC_NAME": ParamType::Text,
    HasCoordinate => "HAS_COORDINATE": ParamType::Boolean,
    HasGeospatialIssue => "HAS_GEOSPATIAL_ISSUE": ParamType::Boolean,
    IsExtinct => "IS_EXTINCT": ParamType::Boolean,
    Repatriated => "REPATRIATED": ParamType::Boolean,
    Geometry => "GEOMETRY": ParamType::Geometry,
    GeoDistance => "GEO_DISTANCE": ParamType::GeoDistance,
    Distance => "DISTANCE": ParamType::Distance,
    TypeStatus => "TYPE_STATUS": ParamType::Enum(TYPE_STATUS),
    MediaType => "MEDIA_TYPE": ParamType::Enum(MEDIA_TYPE),
    EstablishmentMeans => "ESTABLISHMENT_MEANS": ParamType::Enum(ESTABLISHMENT_MEANS),
    Protocol => "PROTOCOL": ParamType::Enum(ENDPOINT_TYPE),
    License => "LICENSE": ParamType::Enum(LICENSE),
    OccurrenceId => "OCCURRENCE_ID": ParamType::Text,
    OrganismId => "ORGANISM_ID": ParamType::Text,
    StateProvince => "STATE_PROVINCE": ParamType::Text,
    WaterBody => "WATER_BODY": ParamType::Text,
    Locality => "LOCALITY": ParamType::Text,
    PublishingOrg => "PUBLISHING_ORG": ParamType::Uuid,
    CrawlId => "CRAWL_ID": ParamType::Uuid,
}

impl SearchParameter for OccurrenceParameter {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn param_type(&self) -> ParamType {
        OccurrenceParameter::param_type(*self)
    }
}

impl fmt::Display for OccurrenceParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OccurrenceParameter {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        OccurrenceParameter::ALL
            .iter()
            .copied()
            .find(|p| normalize(p.as_str()) == wanted)
            .ok_or_else(|| crate::Error::UnknownParameter(s.to_string()))
    }
}

/// Resolves a parameter name to its declared type.
pub trait ParameterRegistry {
    fn resolve(&self, name: &str) -> Option<ParamType>;
}

/// In-memory registry keyed by normalized name, so `decimalLatitude`,
/// `decimal-latitude` and `DECIMAL_LATITUDE` are the same parameter.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    entries: BTreeMap<String, Parameter>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every [`OccurrenceParameter`].
    pub fn with_catalogue() -> Self {
        let mut registry = Self::new();
        for p in OccurrenceParameter::ALL {
            registry.insert(p.as_str(), p.param_type());
        }
        registry
    }

    /// Adds or replaces a parameter.
    pub fn insert(&mut self, name: impl Into<String>, ty: ParamType) {
        let name = name.into();
        self.entries.insert(normalize(&name), Parameter::new(name, ty));
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.entries.get(&normalize(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ParameterRegistry for StaticRegistry {
    fn resolve(&self, name: &str) -> Option<ParamType> {
        self.get(name).map(|p| p.ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_specs_round_trip_through_display() {
        for ty in [
            ParamType::Numeric,
            ParamType::Month,
            ParamType::GeoDistance,
            ParamType::Text,
            ParamType::Enum(TYPE_STATUS),
        ] {
            assert_eq!(ty.to_string().parse::<ParamType>().unwrap(), ty);
        }
        assert_eq!("enum:basis-of-record".parse::<ParamType>().unwrap(), ParamType::Enum(BASIS_OF_RECORD));
        assert!("colour".parse::<ParamType>().is_err());
        assert!("enum:Colour".parse::<ParamType>().is_err());
    }

    #[test]
    fn wildcard_is_refused_by_geometry_and_distance_only() {
        assert!(!ParamType::Geometry.accepts_wildcard());
        assert!(!ParamType::Distance.accepts_wildcard());
        assert!(ParamType::Date.accepts_wildcard());
        assert!(ParamType::GeoDistance.accepts_wildcard());
    }

    #[test]
    fn registry_names_are_loose() {
        let registry = StaticRegistry::with_catalogue();
        assert_eq!(registry.len(), OccurrenceParameter::ALL.len());
        assert_eq!(registry.resolve("decimalLatitude"), Some(ParamType::Latitude));
        assert_eq!(registry.resolve("event-date"), Some(ParamType::Date));
        assert_eq!(registry.resolve("nope"), None);
    }

    #[test]
    fn registry_accepts_custom_parameters() {
        let mut registry = StaticRegistry::with_catalogue();
        registry.insert("habitat", ParamType::Text);
        registry.insert("YEAR", ParamType::Date);
        assert_eq!(registry.resolve("HABITAT"), Some(ParamType::Text));
        assert_eq!(registry.resolve("year"), Some(ParamType::Date));
    }

    #[test]
    fn catalogue_parses_loose_names() {
        assert_eq!("is extinct".parse::<OccurrenceParameter>().unwrap(), OccurrenceParameter::IsExtinct);
        assert!("IS_EXTANT".parse::<OccurrenceParameter>().is_err());
    }
}

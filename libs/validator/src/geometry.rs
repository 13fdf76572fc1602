use lichen_geometry::{Error as GeometryError, Geometry, GeometryEngine, GeometryKind, WktEngine};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::grammar::DEC;

static SYNTAX: Lazy<[Regex; 4]> = Lazy::new(|| {
    let coord = format!(r"{DEC}\s+{DEC}");
    let list = format!(r"{coord}(?:\s*,\s*{coord})*");
    let rings = format!(r"\(\s*\(\s*{list}\s*\)(?:\s*,\s*\(\s*{list}\s*\))*\s*\)");
    let compile = |body: String| {
        Regex::new(&format!(r"(?i)^\s*{body}\s*$")).expect("valid WKT syntax regex")
    };
    [
        compile(format!(r"POINT\s*\(\s*{coord}\s*\)")),
        compile(format!(r"(?:LINESTRING|LINEARRING)\s*\(\s*{list}\s*\)")),
        compile(format!(r"POLYGON\s*{rings}")),
        compile(format!(r"MULTIPOLYGON\s*\(\s*{rings}(?:\s*,\s*{rings})*\s*\)")),
    ]
});

/// Cheap grammar check for the supported WKT shapes, run before parsing.
pub fn validate_geometry_syntax(wkt: &str) -> Result<()> {
    if wkt.trim().is_empty() {
        return Err(GeometryError::Empty.into());
    }
    if SYNTAX.iter().any(|re| re.is_match(wkt)) {
        Ok(())
    } else {
        Err(GeometryError::Parse(format!("unsupported or malformed WKT: {wkt}")).into())
    }
}

/// Parses `wkt` with the default engine and checks it is a usable search shape.
pub fn validate_geometry(wkt: &str) -> Result<Geometry> {
    validate_geometry_with(&WktEngine::default(), wkt)
}

/// Like [`validate_geometry`] with a caller supplied engine.
///
/// Only points, line strings, linear rings, polygons and multipolygons are
/// accepted. Polygons must be valid and have a non-zero area.
pub fn validate_geometry_with<G>(engine: &G, wkt: &str) -> Result<Geometry>
where
    G: GeometryEngine + ?Sized,
{
    let geometry = engine.parse(wkt)?;
    match geometry.kind() {
        GeometryKind::Point | GeometryKind::LineString => {}
        GeometryKind::LinearRing => check_ring(&geometry)?,
        GeometryKind::Polygon | GeometryKind::MultiPolygon => {
            if let Some(problem) = engine.problem(&geometry) {
                debug!(%problem, "rejected polygon");
                return Err(Error::InvalidGeometry(problem.into()));
            }
            if engine.area(&geometry) == 0.0 {
                return Err(GeometryError::Invalid("polygon with zero area".to_string()).into());
            }
        }
        other => return Err(GeometryError::Unsupported(other).into()),
    }
    Ok(geometry)
}

fn check_ring(geometry: &Geometry) -> Result<()> {
    let coords = geometry.coords();
    let closed = coords.len() >= 4 && coords.first() == coords.last();
    if closed {
        Ok(())
    } else {
        Err(GeometryError::Invalid("linear ring must be closed with at least four points".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_accepts_supported_shapes() {
        for wkt in [
            "POINT(10 20)",
            "point (30 10.12)",
            "LINESTRING (30 10, 10 30, 40 40)",
            "LINEARRING (0 0, 1 0, 1 1, 0 0)",
            "POLYGON((0 0,10 0,10 10,0 10,0 0))",
            "POLYGON ((35 10, 45 45, 15 40, 10 20, 35 10),(20 30, 35 35, 30 20, 20 30))",
            "MULTIPOLYGON (((30 10, 40 40, 20 40, 10 20, 30 10)),((120 30, 130 20, 135 35, 120 30)))",
        ] {
            assert!(validate_geometry_syntax(wkt).is_ok(), "{wkt}");
        }
    }

    #[test]
    fn syntax_rejects_everything_else() {
        for wkt in [
            "",
            "POLYGON(0 0)",
            "a polygon please",
            "EMPTY",
            "POLYGON ((30,12 10, 40 40, 20 40, 10 20, 30,12 10))",
            "POLYGON ((30 10, 40 40, 20 40, 10 20, 30 10,))",
            "LINESTRING (30 10, 10 30, 40 40,)",
            "MULTIPOINT ((10 40), (40 30))",
        ] {
            assert!(validate_geometry_syntax(wkt).is_err(), "{wkt}");
        }
    }

    #[test]
    fn collinear_polygon_is_rejected() {
        let err = validate_geometry("POLYGON ((0 0, 1 1, 2 2, 0 0))").unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry(_)));
    }

    #[test]
    fn unsupported_kinds_are_rejected() {
        assert_eq!(
            validate_geometry("MULTIPOINT ((10 40), (40 30))"),
            Err(Error::InvalidGeometry(GeometryError::Unsupported(GeometryKind::MultiPoint)))
        );
    }

    #[test]
    fn open_linear_ring_is_rejected() {
        assert!(validate_geometry("LINEARRING (0 0, 1 0, 1 1, 0 0)").is_ok());
        assert!(validate_geometry("LINEARRING (0 0, 1 0, 1 1, 0 1)").is_err());
    }
}

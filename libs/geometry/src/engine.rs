use std::str::FromStr;

use tracing::debug;
use wkt::Wkt;

use crate::error::{Error, Result};
use crate::model::{Coord, Geometry, Polygon};
use crate::topology::{multipolygon_problem, polygon_area, polygon_problem, TopologyProblem};

/// Geometry operations the validator depends on.
pub trait GeometryEngine: Send + Sync {
    /// Parses Well-Known Text into a [`Geometry`].
    fn parse(&self, wkt: &str) -> Result<Geometry>;

    /// First topology problem of a polygonal geometry. Non-polygonal
    /// geometries never have one.
    fn problem(&self, geometry: &Geometry) -> Option<TopologyProblem>;

    /// Planar area in squared degrees; zero for non-polygonal geometries.
    fn area(&self, geometry: &Geometry) -> f64;

    fn is_valid_polygon(&self, geometry: &Geometry) -> bool {
        geometry.is_polygonal() && self.problem(geometry).is_none()
    }
}

/// [`GeometryEngine`] backed by the `wkt` crate.
#[derive(Debug, Clone, Copy)]
pub struct WktEngine {
    check_bounds: bool,
}

impl Default for WktEngine {
    fn default() -> Self {
        Self { check_bounds: true }
    }
}

impl WktEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables the latitude range check on parsed coordinates.
    pub fn without_bounds_check(mut self) -> Self {
        self.check_bounds = false;
        self
    }
}

impl GeometryEngine for WktEngine {
    fn parse(&self, wkt: &str) -> Result<Geometry> {
        let normalized = wkt.trim().to_ascii_uppercase();
        // `wkt` has no LINEARRING keyword; a ring reads as a closed line string.
        let (text, ring) = match normalized.strip_prefix("LINEARRING") {
            Some(rest) => (format!("LINESTRING{rest}"), true),
            None => (normalized, false),
        };

        let parsed = Wkt::<f64>::from_str(&text).map_err(|e| Error::Parse(e.to_string()))?;
        let geometry = convert(parsed)?;
        let geometry = match geometry {
            Geometry::LineString(coords) if ring => Geometry::LinearRing(coords),
            other => other,
        };

        if geometry.is_empty() {
            return Err(Error::Empty);
        }
        if self.check_bounds {
            if let Some(c) = geometry.coords().into_iter().find(|c| !in_bounds(c)) {
                return Err(Error::OutOfBounds { x: c.x, y: c.y });
            }
        }

        debug!(kind = %geometry.kind(), "parsed geometry");
        Ok(geometry)
    }

    fn problem(&self, geometry: &Geometry) -> Option<TopologyProblem> {
        match geometry {
            Geometry::Polygon(p) => polygon_problem(p),
            Geometry::MultiPolygon(ps) => multipolygon_problem(ps),
            _ => None,
        }
    }

    fn area(&self, geometry: &Geometry) -> f64 {
        match geometry {
            Geometry::Polygon(p) => polygon_area(p),
            Geometry::MultiPolygon(ps) => ps.iter().map(polygon_area).sum(),
            Geometry::GeometryCollection(members) => members.iter().map(|m| self.area(m)).sum(),
            _ => 0.0,
        }
    }
}

/// Longitudes past ±180 are kept as-is so shapes may cross the antimeridian.
fn in_bounds(c: &Coord) -> bool {
    (-90.0..=90.0).contains(&c.y)
}

fn coord(c: &wkt::types::Coord<f64>) -> Coord {
    Coord::new(c.x, c.y)
}

fn line(line: &wkt::types::LineString<f64>) -> Vec<Coord> {
    line.0.iter().map(coord).collect()
}

fn polygon(p: &wkt::types::Polygon<f64>) -> Polygon {
    let mut rings = p.0.iter().map(line);
    let exterior = rings.next().unwrap_or_default();
    Polygon::new(exterior, rings.collect())
}

fn convert(parsed: Wkt<f64>) -> Result<Geometry> {
    let geometry = match parsed {
        Wkt::Point(p) => match p.0 {
            Some(c) => Geometry::Point(coord(&c)),
            None => return Err(Error::Empty),
        },
        Wkt::LineString(l) => Geometry::LineString(line(&l)),
        Wkt::Polygon(p) => Geometry::Polygon(polygon(&p)),
        Wkt::MultiPoint(mp) => {
            Geometry::MultiPoint(mp.0.iter().filter_map(|p| p.0.as_ref()).map(coord).collect())
        }
        Wkt::MultiLineString(ml) => Geometry::MultiLineString(ml.0.iter().map(line).collect()),
        Wkt::MultiPolygon(mp) => Geometry::MultiPolygon(mp.0.iter().map(polygon).collect()),
        Wkt::GeometryCollection(gc) => Geometry::GeometryCollection(
            gc.0.into_iter().map(convert).collect::<Result<Vec<_>>>()?,
        ),
        #[allow(unreachable_patterns)]
        _ => return Err(Error::Parse("unrecognised geometry".to_string())),
    };
    Ok(geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GeometryKind;

    #[test]
    fn parses_case_insensitively() {
        let g = WktEngine::new().parse("point (30 10)").unwrap();
        assert_eq!(g, Geometry::Point(Coord::new(30.0, 10.0)));
    }

    #[test]
    fn linear_ring_keeps_its_kind() {
        let g = WktEngine::new()
            .parse("LINEARRING (0 0, 1 0, 1 1, 0 0)")
            .unwrap();
        assert_eq!(g.kind(), GeometryKind::LinearRing);
        assert_eq!(g.coords().len(), 4);
    }

    #[test]
    fn empty_geometries_are_rejected() {
        let engine = WktEngine::new();
        assert_eq!(engine.parse("POINT EMPTY"), Err(Error::Empty));
        assert_eq!(engine.parse("POLYGON EMPTY"), Err(Error::Empty));
    }

    #[test]
    fn latitudes_are_bounded_unless_disabled() {
        let wkt = "POINT (10 95)";
        assert!(matches!(
            WktEngine::new().parse(wkt),
            Err(Error::OutOfBounds { .. })
        ));
        assert!(WktEngine::new().without_bounds_check().parse(wkt).is_ok());
    }

    #[test]
    fn longitudes_may_cross_the_antimeridian() {
        let engine = WktEngine::new();
        assert_eq!(
            engine.parse("POINT (200 10)").unwrap(),
            Geometry::Point(Coord::new(200.0, 10.0))
        );
        let g = engine
            .parse("POLYGON ((170 -10, 190 -10, 190 10, 170 10, 170 -10))")
            .unwrap();
        assert!(engine.is_valid_polygon(&g));
    }

    #[test]
    fn area_sums_multipolygon_members() {
        let engine = WktEngine::new();
        let g = engine
            .parse("MULTIPOLYGON (((0 0, 2 0, 2 2, 0 2, 0 0)), ((10 10, 11 10, 11 11, 10 11, 10 10)))")
            .unwrap();
        assert_eq!(engine.area(&g), 5.0);
        assert!(engine.is_valid_polygon(&g));
    }
}

//! Planar polygon validity rules.
//!
//! A polygon is valid when every ring is closed and simple, rings do not
//! cross each other and every hole lies inside the exterior ring. The shell
//! winds counter-clockwise and holes wind clockwise. Members of a
//! multipolygon must additionally not overlap.

use std::fmt;

use crate::model::{Coord, Polygon};

#[derive(Debug, Clone, PartialEq)]
pub enum TopologyProblem {
    /// Fewer than four positions once the ring is closed.
    TooFewPoints { ring: usize },
    NotClosed { ring: usize },
    SelfIntersection { ring: usize, at: Coord },
    RingsCross { first: usize, second: usize },
    HoleOutsideShell { ring: usize },
    NestedHole { ring: usize, within: usize },
    /// Shell not counter-clockwise, or hole not clockwise.
    WrongOrientation { ring: usize },
    OverlappingPolygons { first: usize, second: usize },
}

impl fmt::Display for TopologyProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { ring } => write!(f, "ring {ring} has too few points"),
            Self::NotClosed { ring } => write!(f, "ring {ring} is not closed"),
            Self::SelfIntersection { ring, at } => {
                write!(f, "ring {ring} self-intersects at ({} {})", at.x, at.y)
            }
            Self::RingsCross { first, second } => write!(f, "rings {first} and {second} cross"),
            Self::HoleOutsideShell { ring } => write!(f, "hole {ring} lies outside the shell"),
            Self::NestedHole { ring, within } => {
                write!(f, "hole {ring} lies inside hole {within}")
            }
            Self::WrongOrientation { ring: 0 } => f.write_str("shell must be counter-clockwise"),
            Self::WrongOrientation { ring } => write!(f, "hole {ring} must be clockwise"),
            Self::OverlappingPolygons { first, second } => {
                write!(f, "polygons {first} and {second} overlap")
            }
        }
    }
}

/// First validity problem of `polygon`, if any.
pub fn polygon_problem(polygon: &Polygon) -> Option<TopologyProblem> {
    for (idx, ring) in polygon.rings().enumerate() {
        if let Some(problem) = ring_problem(idx, ring) {
            return Some(problem);
        }
    }

    if signed_area(&polygon.exterior) < 0.0 {
        return Some(TopologyProblem::WrongOrientation { ring: 0 });
    }
    if let Some(idx) = polygon.interiors.iter().position(|r| signed_area(r) > 0.0) {
        return Some(TopologyProblem::WrongOrientation { ring: idx + 1 });
    }

    let rings: Vec<&[Coord]> = polygon.rings().collect();
    for first in 0..rings.len() {
        for second in first + 1..rings.len() {
            if rings_cross(rings[first], rings[second]) {
                return Some(TopologyProblem::RingsCross { first, second });
            }
        }
    }

    for (idx, hole) in polygon.interiors.iter().enumerate() {
        let inside = hole
            .iter()
            .find(|c| !on_ring_boundary(**c, &polygon.exterior))
            .map_or(true, |c| point_in_ring(*c, &polygon.exterior));
        if !inside {
            return Some(TopologyProblem::HoleOutsideShell { ring: idx + 1 });
        }
    }

    for (inner, hole) in polygon.interiors.iter().enumerate() {
        if let Some(outer) = polygon
            .interiors
            .iter()
            .enumerate()
            .position(|(other, ring)| other != inner && intrudes(hole, ring))
        {
            return Some(TopologyProblem::NestedHole {
                ring: inner + 1,
                within: outer + 1,
            });
        }
    }

    None
}

/// First problem of a multipolygon: a member problem, or two members overlapping.
pub(crate) fn multipolygon_problem(polygons: &[Polygon]) -> Option<TopologyProblem> {
    if let Some(problem) = polygons.iter().find_map(polygon_problem) {
        return Some(problem);
    }
    for first in 0..polygons.len() {
        for second in first + 1..polygons.len() {
            if polygons_overlap(&polygons[first], &polygons[second]) {
                return Some(TopologyProblem::OverlappingPolygons { first, second });
            }
        }
    }
    None
}

/// Members may touch at points but share no area and no boundary stretch.
fn polygons_overlap(a: &Polygon, b: &Polygon) -> bool {
    let boundaries_meet = a.rings().any(|r| {
        b.rings()
            .any(|s| rings_cross(r, s) || rings_share_edge(r, s))
    });
    boundaries_meet
        || samples(&b.exterior).any(|p| in_polygon_interior(p, a))
        || samples(&a.exterior).any(|p| in_polygon_interior(p, b))
}

/// Unsigned shoelace area of a ring.
pub fn ring_area(ring: &[Coord]) -> f64 {
    signed_area(ring).abs()
}

pub(crate) fn polygon_area(polygon: &Polygon) -> f64 {
    let holes: f64 = polygon.interiors.iter().map(|r| ring_area(r)).sum();
    (ring_area(&polygon.exterior) - holes).max(0.0)
}

fn signed_area(ring: &[Coord]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

fn ring_problem(idx: usize, ring: &[Coord]) -> Option<TopologyProblem> {
    let (Some(first), Some(last)) = (ring.first(), ring.last()) else {
        return Some(TopologyProblem::TooFewPoints { ring: idx });
    };
    if first != last {
        return Some(TopologyProblem::NotClosed { ring: idx });
    }

    let points = dedup_consecutive(ring);
    if points.len() < 4 {
        return Some(TopologyProblem::TooFewPoints { ring: idx });
    }

    // Segment i joins points[i] and points[i + 1]; the last segment closes the ring.
    let segments = points.len() - 1;
    for i in 0..segments {
        for j in i + 1..segments {
            let (a, b) = (points[i], points[i + 1]);
            let (c, d) = (points[j], points[j + 1]);
            let adjacent = j == i + 1 || (i == 0 && j == segments - 1);
            if adjacent {
                let shared = if j == i + 1 { b } else { a };
                let other_a = if j == i + 1 { a } else { b };
                let other_c = if j == i + 1 { d } else { c };
                // Adjacent segments may only meet at their shared vertex.
                if orientation(other_a, shared, other_c) == 0.0
                    && same_direction(shared, other_a, other_c)
                {
                    return Some(TopologyProblem::SelfIntersection {
                        ring: idx,
                        at: shared,
                    });
                }
            } else if segments_intersect(a, b, c, d) {
                return Some(TopologyProblem::SelfIntersection { ring: idx, at: c });
            }
        }
    }
    None
}

fn dedup_consecutive(ring: &[Coord]) -> Vec<Coord> {
    let mut out: Vec<Coord> = Vec::with_capacity(ring.len());
    for c in ring {
        if out.last() != Some(c) {
            out.push(*c);
        }
    }
    out
}

fn orientation(a: Coord, b: Coord, c: Coord) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// `p` and `q` both lie on the same side of `origin` along a common line.
fn same_direction(origin: Coord, p: Coord, q: Coord) -> bool {
    (p.x - origin.x) * (q.x - origin.x) + (p.y - origin.y) * (q.y - origin.y) > 0.0
}

fn on_segment(a: Coord, b: Coord, p: Coord) -> bool {
    orientation(a, b, p) == 0.0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

fn segments_intersect(a: Coord, b: Coord, c: Coord, d: Coord) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);

    if o1 * o2 < 0.0 && o3 * o4 < 0.0 {
        return true;
    }
    on_segment(a, b, c) || on_segment(a, b, d) || on_segment(c, d, a) || on_segment(c, d, b)
}

fn segments_cross(a: Coord, b: Coord, c: Coord, d: Coord) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);
    o1 * o2 < 0.0 && o3 * o4 < 0.0
}

fn rings_cross(first: &[Coord], second: &[Coord]) -> bool {
    first.windows(2).any(|s| {
        second
            .windows(2)
            .any(|t| segments_cross(s[0], s[1], t[0], t[1]))
    })
}

fn on_ring_boundary(p: Coord, ring: &[Coord]) -> bool {
    ring.windows(2).any(|s| on_segment(s[0], s[1], p))
}

/// Even-odd ray casting; points on the boundary are not inside.
fn point_in_ring(p: Coord, ring: &[Coord]) -> bool {
    if on_ring_boundary(p, ring) {
        return false;
    }
    let mut inside = false;
    for s in ring.windows(2) {
        let (a, b) = (s[0], s[1]);
        if (a.y > p.y) != (b.y > p.y) {
            let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Inside the shell and clear of every hole, boundaries excluded.
fn in_polygon_interior(p: Coord, polygon: &Polygon) -> bool {
    point_in_ring(p, &polygon.exterior)
        && !polygon
            .interiors
            .iter()
            .any(|hole| point_in_ring(p, hole) || on_ring_boundary(p, hole))
}

/// Some part of `candidate` lies strictly inside `ring`.
fn intrudes(candidate: &[Coord], ring: &[Coord]) -> bool {
    samples(candidate).any(|p| point_in_ring(p, ring))
}

/// Vertices of `ring` plus one point just inside it next to each edge midpoint.
///
/// The nudged points catch rings whose vertices all sit on another ring's
/// boundary, such as a diamond inscribed in a square.
fn samples(ring: &[Coord]) -> impl Iterator<Item = Coord> + '_ {
    let side = if signed_area(ring) >= 0.0 { 1.0 } else { -1.0 };
    let nudged = ring.windows(2).filter(|s| s[0] != s[1]).map(move |s| {
        let (dx, dy) = (s[1].x - s[0].x, s[1].y - s[0].y);
        Coord::new(
            (s[0].x + s[1].x) / 2.0 - side * dy * 1e-6,
            (s[0].y + s[1].y) / 2.0 + side * dx * 1e-6,
        )
    });
    ring.iter().copied().chain(nudged)
}

/// Two collinear segments covering a common stretch of positive length.
fn segments_overlap(a: Coord, b: Coord, c: Coord, d: Coord) -> bool {
    if orientation(a, b, c) != 0.0 || orientation(a, b, d) != 0.0 {
        return false;
    }
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return false;
    }
    let t = |p: Coord| ((p.x - a.x) * dx + (p.y - a.y) * dy) / len2;
    let (tc, td) = (t(c), t(d));
    tc.max(td).min(1.0) - tc.min(td).max(0.0) > 0.0
}

fn rings_share_edge(first: &[Coord], second: &[Coord]) -> bool {
    first.windows(2).any(|s| {
        second
            .windows(2)
            .any(|t| segments_overlap(s[0], s[1], t[0], t[1]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[(f64, f64)]) -> Vec<Coord> {
        points.iter().map(|(x, y)| Coord::new(*x, *y)).collect()
    }

    #[test]
    fn square_is_valid() {
        let p = Polygon::new(
            ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]),
            vec![],
        );
        assert_eq!(polygon_problem(&p), None);
        assert_eq!(polygon_area(&p), 100.0);
    }

    #[test]
    fn bow_tie_self_intersects() {
        let p = Polygon::new(
            ring(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0), (0.0, 0.0)]),
            vec![],
        );
        assert!(matches!(
            polygon_problem(&p),
            Some(TopologyProblem::SelfIntersection { ring: 0, .. })
        ));
    }

    #[test]
    fn collinear_ring_collapses() {
        let p = Polygon::new(
            ring(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 0.0)]),
            vec![],
        );
        assert!(polygon_problem(&p).is_some());
        assert_eq!(polygon_area(&p), 0.0);
    }

    #[test]
    fn open_ring_is_reported() {
        let p = Polygon::new(
            ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.1)]),
            vec![],
        );
        assert_eq!(polygon_problem(&p), Some(TopologyProblem::NotClosed { ring: 0 }));
    }

    #[test]
    fn hole_must_sit_inside_shell() {
        let shell = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        let inner = ring(&[(2.0, 2.0), (4.0, 4.0), (4.0, 2.0), (2.0, 2.0)]);
        let outer = ring(&[(20.0, 20.0), (24.0, 24.0), (24.0, 20.0), (20.0, 20.0)]);

        let donut = Polygon::new(shell.clone(), vec![inner]);
        assert_eq!(polygon_problem(&donut), None);
        assert_eq!(polygon_area(&donut), 98.0);

        let detached = Polygon::new(shell, vec![outer]);
        assert_eq!(
            polygon_problem(&detached),
            Some(TopologyProblem::HoleOutsideShell { ring: 1 })
        );
    }

    #[test]
    fn ring_orientation_is_enforced() {
        let clockwise = Polygon::new(
            ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]),
            vec![],
        );
        assert_eq!(
            polygon_problem(&clockwise),
            Some(TopologyProblem::WrongOrientation { ring: 0 })
        );

        let shell = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        let ccw_hole = ring(&[(2.0, 2.0), (4.0, 2.0), (4.0, 4.0), (2.0, 2.0)]);
        assert_eq!(
            polygon_problem(&Polygon::new(shell, vec![ccw_hole])),
            Some(TopologyProblem::WrongOrientation { ring: 1 })
        );
    }

    #[test]
    fn overlapping_members_are_reported() {
        let a = Polygon::new(
            ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]),
            vec![],
        );
        let b = Polygon::new(
            ring(&[(5.0, 5.0), (15.0, 5.0), (15.0, 15.0), (5.0, 15.0), (5.0, 5.0)]),
            vec![],
        );
        let far = Polygon::new(
            ring(&[(50.0, 50.0), (60.0, 50.0), (60.0, 60.0), (50.0, 50.0)]),
            vec![],
        );
        assert!(matches!(
            multipolygon_problem(&[a.clone(), b]),
            Some(TopologyProblem::OverlappingPolygons { .. })
        ));
        assert_eq!(multipolygon_problem(&[a, far]), None);
    }

    #[test]
    fn inscribed_member_overlaps() {
        let square = Polygon::new(
            ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]),
            vec![],
        );
        let diamond = Polygon::new(
            ring(&[(5.0, 0.0), (10.0, 5.0), (5.0, 10.0), (0.0, 5.0), (5.0, 0.0)]),
            vec![],
        );
        let neighbour = Polygon::new(
            ring(&[(10.0, 0.0), (20.0, 0.0), (20.0, 10.0), (10.0, 10.0), (10.0, 0.0)]),
            vec![],
        );
        let corner = Polygon::new(
            ring(&[(10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (10.0, 10.0)]),
            vec![],
        );

        assert_eq!(
            multipolygon_problem(&[square.clone(), diamond]),
            Some(TopologyProblem::OverlappingPolygons { first: 0, second: 1 })
        );
        assert_eq!(
            multipolygon_problem(&[square.clone(), square.clone()]),
            Some(TopologyProblem::OverlappingPolygons { first: 0, second: 1 })
        );
        // a shared edge is more than a touch
        assert!(multipolygon_problem(&[square.clone(), neighbour]).is_some());
        assert_eq!(multipolygon_problem(&[square, corner]), None);
    }

    #[test]
    fn member_may_sit_inside_a_hole() {
        let shell = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        let hole = ring(&[(2.0, 2.0), (2.0, 8.0), (8.0, 8.0), (8.0, 2.0), (2.0, 2.0)]);
        let donut = Polygon::new(shell, vec![hole]);
        let island = Polygon::new(
            ring(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0), (4.0, 4.0)]),
            vec![],
        );
        let straddling = Polygon::new(
            ring(&[(1.0, 4.0), (6.0, 4.0), (6.0, 6.0), (1.0, 6.0), (1.0, 4.0)]),
            vec![],
        );

        assert_eq!(multipolygon_problem(&[donut.clone(), island]), None);
        assert!(multipolygon_problem(&[donut, straddling]).is_some());
    }

    #[test]
    fn holes_must_not_nest() {
        let shell = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        let outer = ring(&[(1.0, 1.0), (1.0, 9.0), (9.0, 9.0), (9.0, 1.0), (1.0, 1.0)]);
        let inner = ring(&[(3.0, 3.0), (3.0, 6.0), (6.0, 6.0), (6.0, 3.0), (3.0, 3.0)]);
        let beside = ring(&[(9.2, 4.0), (9.2, 6.0), (9.6, 5.0), (9.2, 4.0)]);

        assert_eq!(
            polygon_problem(&Polygon::new(shell.clone(), vec![outer.clone(), inner])),
            Some(TopologyProblem::NestedHole { ring: 2, within: 1 })
        );
        assert_eq!(polygon_problem(&Polygon::new(shell, vec![outer, beside])), None);
    }
}

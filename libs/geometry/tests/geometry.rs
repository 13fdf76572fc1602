use lichen_geometry::{Error, GeometryEngine, GeometryKind, TopologyProblem, WktEngine};

#[test]
fn supported_kinds_parse() {
    let engine = WktEngine::new();
    let cases = [
        ("POINT (30.0 10.0)", GeometryKind::Point),
        ("LINESTRING (30 10, 10 30, 40 40)", GeometryKind::LineString),
        (
            "POLYGON ((30 10, 40 40, 20 40, 10 20, 30 10))",
            GeometryKind::Polygon,
        ),
        (
            "MULTIPOLYGON (((30 20, 45 40, 10 40, 30 20)), ((15 5, 40 10, 10 20, 5 10, 15 5)))",
            GeometryKind::MultiPolygon,
        ),
        ("MULTIPOINT ((10 40), (40 30))", GeometryKind::MultiPoint),
    ];
    for (wkt, kind) in cases {
        assert_eq!(engine.parse(wkt).unwrap().kind(), kind, "{wkt}");
    }
}

#[test]
fn malformed_text_is_a_parse_error() {
    let engine = WktEngine::new();
    for wkt in ["POLYGON ((30 10, 40 40", "CIRCLE (1 1, 3)", "", "30 10"] {
        assert!(matches!(engine.parse(wkt), Err(Error::Parse(_))), "{wkt}");
    }
}

#[test]
fn polygon_with_hole_is_valid() {
    let engine = WktEngine::new();
    let g = engine
        .parse("POLYGON ((35 10, 45 45, 15 40, 10 20, 35 10), (20 30, 35 35, 30 20, 20 30))")
        .unwrap();
    assert!(engine.is_valid_polygon(&g));
    assert!(engine.area(&g) > 0.0);
}

#[test]
fn self_intersecting_polygon_is_invalid() {
    let engine = WktEngine::new();
    let g = engine
        .parse("POLYGON ((0 0, 10 10, 10 0, 0 10, 0 0))")
        .unwrap();
    assert!(!engine.is_valid_polygon(&g));
    assert!(matches!(
        engine.problem(&g),
        Some(TopologyProblem::SelfIntersection { .. })
    ));
}

#[test]
fn unclosed_polygon_is_invalid() {
    let engine = WktEngine::new();
    let g = engine.parse("POLYGON ((0 0, 10 0, 10 10, 0 10))").unwrap();
    assert_eq!(
        engine.problem(&g),
        Some(TopologyProblem::NotClosed { ring: 0 })
    );
}

#[test]
fn non_polygonal_geometries_are_never_valid_polygons() {
    let engine = WktEngine::new();
    let g = engine.parse("POINT (1 1)").unwrap();
    assert_eq!(engine.problem(&g), None);
    assert!(!engine.is_valid_polygon(&g));
    assert_eq!(engine.area(&g), 0.0);
}

#[test]
fn multipolygon_member_inside_a_hole_is_valid() {
    let engine = WktEngine::new();
    let g = engine
        .parse(
            "MULTIPOLYGON (((0 0, 10 0, 10 10, 0 10, 0 0), (2 2, 2 8, 8 8, 8 2, 2 2)), \
             ((4 4, 6 4, 6 6, 4 6, 4 4)))",
        )
        .unwrap();
    assert_eq!(engine.problem(&g), None);
    assert!(engine.is_valid_polygon(&g));
}

#[test]
fn coincident_multipolygon_members_overlap() {
    let engine = WktEngine::new();
    let g = engine
        .parse("MULTIPOLYGON (((0 0, 10 0, 10 10, 0 10, 0 0)), ((0 0, 10 0, 10 10, 0 10, 0 0)))")
        .unwrap();
    assert_eq!(
        engine.problem(&g),
        Some(TopologyProblem::OverlappingPolygons { first: 0, second: 1 })
    );
}

#[test]
fn nested_holes_are_invalid() {
    let engine = WktEngine::new();
    let g = engine
        .parse(
            "POLYGON ((0 0, 10 0, 10 10, 0 10, 0 0), (1 1, 1 9, 9 9, 9 1, 1 1), \
             (3 3, 3 6, 6 6, 6 3, 3 3))",
        )
        .unwrap();
    assert_eq!(
        engine.problem(&g),
        Some(TopologyProblem::NestedHole { ring: 2, within: 1 })
    );
}

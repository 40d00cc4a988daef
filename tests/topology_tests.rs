use approx::assert_abs_diff_eq;
use glam::DVec2;
use polygon_line_stitcher::core::{add_connector, IntersectionKind, PolygonPart};
use polygon_line_stitcher::{
    process_selected_area, Attributes, BoundaryCapture, LineFeature, LineLayer, PolygonFeature,
    PolygonGeometry, PolygonLayer, Polyline, PreconditionError, SessionError, StitchError,
    StitchOptions,
};
use serde_json::json;

fn ring(origin: DVec2, size: f64) -> Vec<DVec2> {
    vec![
        origin,
        origin + DVec2::new(size, 0.0),
        origin + DVec2::new(size, size),
        origin + DVec2::new(0.0, size),
        origin,
    ]
}

fn square(id: u64, origin: DVec2, size: f64) -> PolygonFeature {
    PolygonFeature::new(id, PolygonGeometry::from_exterior(ring(origin, size)))
}

fn line(id: u64, points: &[(f64, f64)]) -> LineFeature {
    LineFeature::new(
        id,
        Polyline::new(points.iter().map(|&(x, y)| DVec2::new(x, y)).collect()),
        Attributes::new(),
    )
}

fn triangle_boundary() -> BoundaryCapture {
    let mut capture = BoundaryCapture::new();
    capture.push_point(DVec2::new(-100.0, -100.0));
    capture.push_point(DVec2::new(100.0, -100.0));
    capture.push_point(DVec2::new(0.0, 100.0));
    capture.finish();
    capture
}

fn run(
    polygons: &PolygonLayer,
    lines: &mut LineLayer,
    options: &StitchOptions,
) -> Result<polygon_line_stitcher::ProcessReport, StitchError> {
    process_selected_area(&triangle_boundary(), Some(polygons), Some(lines), options)
}

#[test]
fn test_crossing_line_gets_connector_and_vertex_at_crossing() {
    let polygons = PolygonLayer::new("Parzellen", vec![square(1, DVec2::ZERO, 10.0)]);
    let mut lines = LineLayer::new("Leitungen", vec![line(1, &[(5.0, -5.0), (5.0, 5.0)])]);

    let report = run(&polygons, &mut lines, &StitchOptions::default()).expect("Lauf erwartet");

    assert_eq!(report.added_connectors, 1);
    assert_eq!(report.inserted_vertices, 1);
    assert_eq!(report.empty_intersections, 0);
    assert_eq!(
        lines.feature(1).expect("Leitung").geometry.vertices(),
        &[
            DVec2::new(5.0, -5.0),
            DVec2::new(5.0, 0.0),
            DVec2::new(5.0, 5.0)
        ]
    );
    assert_eq!(
        lines.feature(2).expect("Verbindungslinie").geometry.vertices(),
        &[DVec2::new(5.0, 0.0), DVec2::new(5.0, 0.0)]
    );
}

#[test]
fn test_empty_line_layer_adds_nothing() {
    let polygons = PolygonLayer::new("Parzellen", vec![square(1, DVec2::ZERO, 10.0)]);
    let mut lines = LineLayer::new("Leitungen", vec![]);

    let report = run(&polygons, &mut lines, &StitchOptions::default()).expect("Lauf erwartet");

    assert_eq!(report.added_connectors, 0);
    assert_eq!(report.unmatched_features, 1);
    assert!(lines.is_empty());
}

#[test]
fn test_two_boundary_points_touch_nothing() {
    let polygons = PolygonLayer::new("Parzellen", vec![square(1, DVec2::ZERO, 10.0)]);
    let mut lines = LineLayer::new("Leitungen", vec![line(1, &[(0.0, -3.0), (10.0, -3.0)])]);
    let before = lines.snapshot();

    let mut boundary = BoundaryCapture::new();
    boundary.push_point(DVec2::new(0.0, 0.0));
    boundary.push_point(DVec2::new(1.0, 1.0));

    let err = process_selected_area(
        &boundary,
        Some(&polygons),
        Some(&mut lines),
        &StitchOptions::default(),
    )
    .expect_err("Vorbedingung muss scheitern");

    assert!(matches!(
        err,
        StitchError::Precondition(PreconditionError::TooFewBoundaryPoints { captured: 2, .. })
    ));
    assert_eq!(*lines.snapshot(), *before);
}

#[test]
fn test_multipart_polygon_connects_from_nearest_part() {
    let polygons = PolygonLayer::new(
        "Parzellen",
        vec![PolygonFeature::new(
            1,
            PolygonGeometry::MultiPart(vec![
                PolygonPart::from_exterior(ring(DVec2::ZERO, 10.0)),
                PolygonPart::from_exterior(ring(DVec2::new(100.0, 0.0), 10.0)),
            ]),
        )],
    );
    let mut lines = LineLayer::new("Leitungen", vec![line(1, &[(114.0, -5.0), (114.0, 15.0)])]);

    let report = run(&polygons, &mut lines, &StitchOptions::default()).expect("Lauf erwartet");

    assert_eq!(report.added_connectors, 1);
    let connector = lines.feature(2).expect("Verbindungslinie");
    assert_eq!(
        connector.geometry.vertices(),
        &[DVec2::new(110.0, 5.0), DVec2::new(114.0, 5.0)]
    );
}

#[test]
fn test_zigzag_crossed_twice_gets_two_vertices_in_order() {
    let mut lines = LineLayer::new(
        "Leitungen",
        vec![line(1, &[(0.0, -5.0), (4.0, 5.0), (8.0, -5.0), (12.0, 5.0)])],
    );

    let mut session = lines.begin_edit().expect("Session erwartet");
    let outcome = add_connector(
        &mut session,
        1,
        Polyline::segment(DVec2::new(-1.0, 0.0), DVec2::new(7.0, 0.0)),
        1e-7,
    )
    .expect("Anbindung erwartet");
    let summary = session.commit().expect("Commit erwartet");

    assert_eq!(outcome.intersection, IntersectionKind::MultiPoint);
    assert_eq!(outcome.inserted_vertices, 2);
    assert_eq!(summary.added_features, 1);
    assert_eq!(summary.updated_features, 1);

    let vertices = lines.feature(1).expect("Leitung").geometry.vertices().to_vec();
    assert_eq!(vertices.len(), 6);
    assert_abs_diff_eq!(vertices[1].x, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(vertices[3].x, 6.0, epsilon = 1e-9);
    assert!(
        vertices.windows(2).all(|pair| pair[0].x < pair[1].x),
        "Laufrichtung verletzt: {vertices:?}"
    );
}

#[test]
fn test_count_equals_matched_polygons() {
    let polygons = PolygonLayer::new(
        "Parzellen",
        vec![
            square(1, DVec2::ZERO, 10.0),
            PolygonFeature::new(2, PolygonGeometry::from_exterior(vec![DVec2::new(3.0, 3.0)])),
            square(3, DVec2::new(40.0, 0.0), 10.0),
            // Weit entfernt, aber trotzdem angebunden
            square(4, DVec2::new(500.0, 500.0), 10.0),
        ],
    );
    let mut lines = LineLayer::new("Leitungen", vec![line(1, &[(-10.0, -6.0), (60.0, -6.0)])]);

    let report = run(
        &polygons,
        &mut lines,
        &StitchOptions {
            match_new_connectors: false,
            ..StitchOptions::default()
        },
    )
    .expect("Lauf erwartet");

    assert_eq!(report.added_connectors, 3);
    assert_eq!(report.unmatched_features, 1);
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_connector_endpoints_and_attributes_come_from_line() {
    let polygons = PolygonLayer::new("Parzellen", vec![square(1, DVec2::new(2.0, 4.0), 4.0)]);
    let mut attributes = Attributes::new();
    attributes.insert("material".into(), json!("PE"));
    attributes.insert("dn".into(), json!(110));
    let mut lines = LineLayer::new(
        "Leitungen",
        vec![LineFeature::new(
            7,
            Polyline::segment(DVec2::new(0.0, 0.0), DVec2::new(16.0, 0.0)),
            attributes.clone(),
        )],
    );

    run(&polygons, &mut lines, &StitchOptions::default()).expect("Lauf erwartet");

    let connector = lines.feature(8).expect("Verbindungslinie");
    // Kantenmittelpunkt (4, 4) → nächster Punkt (4, 0)
    assert_eq!(
        connector.geometry.vertices(),
        &[DVec2::new(4.0, 4.0), DVec2::new(4.0, 0.0)]
    );
    assert_eq!(connector.attributes, attributes);
}

#[test]
fn test_new_connectors_are_candidates_when_enabled() {
    let polygons = PolygonLayer::new(
        "Parzellen",
        vec![
            square(1, DVec2::new(0.0, 10.0), 10.0),
            PolygonFeature::new(
                2,
                PolygonGeometry::from_exterior(vec![
                    DVec2::new(6.0, 3.0),
                    DVec2::new(8.0, 3.0),
                    DVec2::new(8.0, 5.0),
                    DVec2::new(6.0, 5.0),
                    DVec2::new(6.0, 3.0),
                ]),
            ),
        ],
    );
    let base = LineLayer::new("Leitungen", vec![line(1, &[(0.0, 0.0), (10.0, 0.0)])]);

    let mut with_new = base.clone();
    let report = run(&polygons, &mut with_new, &StitchOptions::default()).expect("Lauf erwartet");
    assert_eq!(report.added_connectors, 2);
    let second = with_new.feature(3).expect("zweite Verbindungslinie");
    let end = second.geometry.vertices()[1];
    assert_abs_diff_eq!(end.x, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(end.y, 4.0, epsilon = 1e-9);
    assert_eq!(with_new.feature(2).expect("erste Verbindungslinie").geometry.len(), 3);

    let mut without_new = base;
    run(
        &polygons,
        &mut without_new,
        &StitchOptions {
            match_new_connectors: false,
            ..StitchOptions::default()
        },
    )
    .expect("Lauf erwartet");
    let second = without_new.feature(3).expect("zweite Verbindungslinie");
    assert_abs_diff_eq!(second.geometry.vertices()[1].x, 7.0, epsilon = 1e-9);
    assert_abs_diff_eq!(second.geometry.vertices()[1].y, 0.0, epsilon = 1e-9);
    assert_eq!(without_new.feature(1).expect("Leitung").geometry.len(), 4);
}

#[test]
fn test_read_only_layer_is_left_unchanged() {
    let polygons = PolygonLayer::new("Parzellen", vec![square(1, DVec2::ZERO, 10.0)]);
    let mut lines = LineLayer::new("Leitungen", vec![line(1, &[(0.0, -3.0), (10.0, -3.0)])])
        .with_read_only(true);

    let err = run(&polygons, &mut lines, &StitchOptions::default()).expect_err("Fehler erwartet");

    assert!(matches!(
        err,
        StitchError::Session(SessionError::ReadOnly { .. })
    ));
    assert_eq!(lines.len(), 1);
}

#[test]
fn test_malformed_polygon_does_not_discard_other_connectors() {
    let polygons = PolygonLayer::new(
        "Parzellen",
        vec![
            square(1, DVec2::new(20.0, 0.0), 10.0),
            // Zwei Kanten mit NaN-Stützpunkt, die übrigen sind gültig
            PolygonFeature::new(
                2,
                PolygonGeometry::from_exterior(vec![
                    DVec2::new(f64::NAN, 0.0),
                    DVec2::new(10.0, 0.0),
                    DVec2::new(10.0, 10.0),
                    DVec2::new(0.0, 10.0),
                    DVec2::new(f64::NAN, 0.0),
                ]),
            ),
            // Keine einzige endliche Kante
            PolygonFeature::new(
                3,
                PolygonGeometry::from_exterior(vec![
                    DVec2::new(f64::NAN, 0.0),
                    DVec2::new(1.0, f64::NAN),
                ]),
            ),
        ],
    );
    let mut lines = LineLayer::new("Leitungen", vec![line(1, &[(0.0, -4.0), (40.0, -4.0)])]);

    let report = run(&polygons, &mut lines, &StitchOptions::default()).expect("Lauf erwartet");

    assert_eq!(report.added_connectors, 2);
    assert_eq!(report.unmatched_features, 1);
    assert_eq!(report.failed_features, 0);
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines.feature(2).expect("Verbindungslinie Polygon 1").geometry.vertices(),
        &[DVec2::new(25.0, 0.0), DVec2::new(25.0, -4.0)]
    );
    assert_eq!(
        lines.feature(3).expect("Verbindungslinie Polygon 2").geometry.vertices(),
        &[DVec2::new(10.0, 5.0), DVec2::new(10.0, -4.0)]
    );
    assert!(lines.features().all(|f| f.geometry.is_valid()));
}

#[test]
fn test_connector_without_numeric_intersection_is_counted() {
    // Bei Toleranz 0 verfehlt der gerundete Lotfußpunkt auf der schrägen
    // Kante die Leitung; die Verbindungslinie wird trotzdem angelegt.
    let polygons = PolygonLayer::new(
        "Parzellen",
        vec![
            square(1, DVec2::new(-1.7, 3.1), 1.0),
            square(2, DVec2::new(5.0, -2.0), 1.0),
        ],
    );
    let mut lines = LineLayer::new(
        "Leitungen",
        vec![line(1, &[(0.0, 0.0), (1.1, 0.7), (10.0, 0.7)])],
    );

    let report = run(
        &polygons,
        &mut lines,
        &StitchOptions {
            intersection_tolerance: 0.0,
            ..StitchOptions::default()
        },
    )
    .expect("Lauf erwartet");

    assert_eq!(report.added_connectors, 2);
    assert_eq!(report.empty_intersections, 1);
    assert_eq!(report.inserted_vertices, 1);
    assert_eq!(report.updated_lines, 1);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines.feature(1).expect("Leitung").geometry.len(), 4);
}

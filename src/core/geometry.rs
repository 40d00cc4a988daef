//! Planare Geometrie-Grundfunktionen: Segmente, Projektion, Schnittpunkte.
//!
//! Alle Koordinaten liegen in einem gemeinsamen, ebenen XY-System
//! (doppelte Genauigkeit). Keine Koordinatentransformation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Punkt in der Ebene (x, y) mit doppelter Genauigkeit.
pub type Point2D = DVec2;

/// Kante eines Polygon-Rings (zwei aufeinanderfolgende Stützpunkte).
///
/// Wird bei Bedarf aus dem Ring abgeleitet und nicht gespeichert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Erster Stützpunkt
    pub start: Point2D,
    /// Zweiter Stützpunkt
    pub end: Point2D,
}

impl Edge {
    /// Erstellt eine neue Kante.
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Mittelpunkt der Kante.
    pub fn midpoint(&self) -> Point2D {
        (self.start + self.end) * 0.5
    }

    /// Länge der Kante.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Ergebnis eines Segment-Segment-Schnitts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// Kein gemeinsamer Punkt
    None,
    /// Genau ein gemeinsamer Punkt
    Point(Point2D),
    /// Kollineare Überlappung, reduziert auf ihre beiden Endpunkte
    Overlap(Point2D, Point2D),
}

/// Achsenparalleles Begrenzungsrechteck.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    /// Untere linke Ecke
    pub min: Point2D,
    /// Obere rechte Ecke
    pub max: Point2D,
}

impl Extent {
    /// Baut das Rechteck um alle Punkte. `None` bei leerer Eingabe.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut extent = Self {
            min: first,
            max: first,
        };
        for point in iter {
            extent.include(point);
        }
        Some(extent)
    }

    /// Erweitert das Rechteck um einen Punkt.
    pub fn include(&mut self, point: Point2D) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Vereinigt zwei Rechtecke.
    pub fn union(&self, other: &Extent) -> Extent {
        Extent {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Nächster Punkt auf dem Segment `a`–`b` zu `point`, auf das Segment geklemmt.
///
/// Gibt zusätzlich den Parameter `t ∈ [0, 1]` entlang des Segments zurück.
/// Ein entartetes Segment (`a == b`) liefert `a` mit `t = 0`.
pub fn closest_point_on_segment(point: Point2D, a: Point2D, b: Point2D) -> (Point2D, f64) {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON * f64::EPSILON {
        return (a, 0.0);
    }

    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (a + ab * t, t)
}

/// Euklidische Distanz von `point` zum Segment `a`–`b`.
pub fn point_segment_distance(point: Point2D, a: Point2D, b: Point2D) -> f64 {
    let (closest, _) = closest_point_on_segment(point, a, b);
    point.distance(closest)
}

/// Prüft ob ein Punkt innerhalb von `tolerance` auf dem Segment `a`–`b` liegt.
pub fn point_on_segment(point: Point2D, a: Point2D, b: Point2D, tolerance: f64) -> bool {
    point_segment_distance(point, a, b) <= tolerance
}

/// Schneidet die Segmente `a0`–`a1` und `b0`–`b1`.
///
/// Berührungen an Endpunkten zählen als Schnitt. Segmente der Länge 0
/// werden als Punkt behandelt. `tolerance` gilt als absolute Distanz.
pub fn intersect_segments(
    a0: Point2D,
    a1: Point2D,
    b0: Point2D,
    b1: Point2D,
    tolerance: f64,
) -> SegmentIntersection {
    let da = a1 - a0;
    let db = b1 - b0;
    let a_is_point = da.length() <= tolerance;
    let b_is_point = db.length() <= tolerance;

    match (a_is_point, b_is_point) {
        (true, true) => {
            return if a0.distance(b0) <= tolerance {
                SegmentIntersection::Point(a0)
            } else {
                SegmentIntersection::None
            };
        }
        (true, false) => {
            return if point_on_segment(a0, b0, b1, tolerance) {
                SegmentIntersection::Point(a0)
            } else {
                SegmentIntersection::None
            };
        }
        (false, true) => {
            return if point_on_segment(b0, a0, a1, tolerance) {
                SegmentIntersection::Point(b0)
            } else {
                SegmentIntersection::None
            };
        }
        (false, false) => {}
    }

    let det = da.perp_dot(db);
    let offset = b0 - a0;

    // Parallel: nur kollineare Überlappung möglich
    if det.abs() <= tolerance * da.length().max(db.length()) {
        return collinear_overlap(a0, a1, b0, b1, tolerance);
    }

    let ta = offset.perp_dot(db) / det;
    let tb = offset.perp_dot(da) / det;

    let slack_a = tolerance / da.length();
    let slack_b = tolerance / db.length();
    if ta < -slack_a || ta > 1.0 + slack_a || tb < -slack_b || tb > 1.0 + slack_b {
        return SegmentIntersection::None;
    }

    let point = a0 + da * ta.clamp(0.0, 1.0);
    SegmentIntersection::Point(point)
}

/// Überlappung zweier paralleler Segmente (leer, wenn nicht kollinear).
fn collinear_overlap(
    a0: Point2D,
    a1: Point2D,
    b0: Point2D,
    b1: Point2D,
    tolerance: f64,
) -> SegmentIntersection {
    if point_segment_distance(b0, a0, a1).min(point_segment_distance(a0, b0, b1)) > tolerance
        && point_segment_distance(b1, a0, a1).min(point_segment_distance(a1, b0, b1)) > tolerance
    {
        return SegmentIntersection::None;
    }

    let da = a1 - a0;
    let len_sq = da.length_squared();
    let project = |p: Point2D| (p - a0).dot(da) / len_sq;

    let (mut t0, mut t1) = (project(b0), project(b1));
    if t0 > t1 {
        std::mem::swap(&mut t0, &mut t1);
    }
    let start = t0.max(0.0);
    let end = t1.min(1.0);

    let slack = tolerance / len_sq.sqrt();
    if start > end + slack {
        return SegmentIntersection::None;
    }

    let p = a0 + da * start.clamp(0.0, 1.0);
    let q = a0 + da * end.clamp(0.0, 1.0);
    if p.distance(q) <= tolerance {
        SegmentIntersection::Point(p)
    } else {
        SegmentIntersection::Overlap(p, q)
    }
}

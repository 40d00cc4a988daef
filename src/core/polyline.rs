//! Polyline-Geometrie der Leitungs-Features.
//!
//! Enthält die Punkt-zu-Linie-Abfragen des Matchers und die
//! Stützpunkt-Einfügung des Topologie-Editors.

use serde::{Deserialize, Serialize};

use super::geometry::{
    closest_point_on_segment, intersect_segments, point_segment_distance, Extent, Point2D,
    SegmentIntersection,
};

/// Nächster Stützpunkt einer Polyline zu einem Suchpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestVertex {
    /// Index des Stützpunkts
    pub index: usize,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Ergebnis des Schnitts zweier Polylines.
#[derive(Debug, Clone, PartialEq)]
pub enum LineIntersection {
    /// Kein gemeinsamer Punkt
    Empty,
    /// Genau ein Schnittpunkt
    Point(Point2D),
    /// Mehrere Schnittpunkte, geordnet entlang der schneidenden Linie
    MultiPoint(Vec<Point2D>),
}

impl LineIntersection {
    /// Gibt `true` zurück, wenn kein Schnittpunkt existiert.
    pub fn is_empty(&self) -> bool {
        matches!(self, LineIntersection::Empty)
    }

    /// Alle Schnittpunkte als Slice.
    pub fn points(&self) -> &[Point2D] {
        match self {
            LineIntersection::Empty => &[],
            LineIntersection::Point(point) => std::slice::from_ref(point),
            LineIntersection::MultiPoint(points) => points,
        }
    }

    fn from_points(mut points: Vec<Point2D>) -> Self {
        match points.len() {
            0 => LineIntersection::Empty,
            1 => LineIntersection::Point(points.remove(0)),
            _ => LineIntersection::MultiPoint(points),
        }
    }
}

/// Geordnete Punktfolge einer Leitung.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline(pub Vec<Point2D>);

impl Polyline {
    /// Erstellt eine Polyline aus Stützpunkten.
    pub fn new(vertices: Vec<Point2D>) -> Self {
        Self(vertices)
    }

    /// Zwei-Punkt-Segment (z.B. eine Verbindungslinie).
    pub fn segment(start: Point2D, end: Point2D) -> Self {
        Self(vec![start, end])
    }

    /// Stützpunkte in Laufrichtung.
    pub fn vertices(&self) -> &[Point2D] {
        &self.0
    }

    /// Anzahl der Stützpunkte.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Gibt `true` zurück, wenn die Polyline keine Stützpunkte hat.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Mindestens zwei Stützpunkte, alle Koordinaten endlich.
    pub fn is_valid(&self) -> bool {
        self.0.len() >= 2 && self.0.iter().all(|p| p.is_finite())
    }

    /// Begrenzungsrechteck der Polyline.
    pub fn extent(&self) -> Option<Extent> {
        Extent::from_points(self.0.iter().copied())
    }

    /// Segmente als `(index, start, end)`.
    ///
    /// Eine Polyline mit genau einem Stützpunkt liefert ein entartetes Segment.
    fn segments(&self) -> impl Iterator<Item = (usize, Point2D, Point2D)> + '_ {
        let single = match self.0.as_slice() {
            [only] => Some((0, *only, *only)),
            _ => None,
        };

        self.0
            .windows(2)
            .enumerate()
            .map(|(i, pair)| (i, pair[0], pair[1]))
            .chain(single)
    }

    /// Minimale Distanz von `point` zu irgendeinem Segment.
    ///
    /// `None` bei einer Polyline ohne Stützpunkte.
    pub fn distance_to(&self, point: Point2D) -> Option<f64> {
        self.segments()
            .map(|(_, a, b)| point_segment_distance(point, a, b))
            .reduce(f64::min)
    }

    /// Nächster Punkt auf der Polyline (auf ihre Ausdehnung geklemmt).
    ///
    /// Bei gleichen Distanzen gewinnt das erste Segment.
    pub fn nearest_point(&self, point: Point2D) -> Option<Point2D> {
        let mut best: Option<(Point2D, f64)> = None;
        for (_, a, b) in self.segments() {
            let (candidate, _) = closest_point_on_segment(point, a, b);
            let distance = point.distance(candidate);
            if !distance.is_finite() {
                continue;
            }
            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((candidate, distance));
            }
        }
        best.map(|(candidate, _)| candidate)
    }

    /// Nächster Stützpunkt zu `point` (erstes Minimum gewinnt).
    pub fn closest_vertex(&self, point: Point2D) -> Option<ClosestVertex> {
        let mut best: Option<ClosestVertex> = None;
        for (index, vertex) in self.0.iter().enumerate() {
            let distance = point.distance(*vertex);
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(ClosestVertex { index, distance });
            }
        }
        best
    }

    /// Fügt einen Stützpunkt vor `index` ein. `false` wenn der Index ungültig ist.
    pub fn insert_vertex(&mut self, index: usize, point: Point2D) -> bool {
        if index > self.0.len() {
            return false;
        }
        self.0.insert(index, point);
        true
    }

    /// Schneidet diese Polyline mit `other`.
    ///
    /// Die Schnittpunkte sind entlang dieser Polyline geordnet; Punkte, die
    /// innerhalb von `tolerance` zusammenfallen, werden nur einmal geliefert.
    pub fn intersection(&self, other: &Polyline, tolerance: f64) -> LineIntersection {
        let mut hits: Vec<(usize, f64, Point2D)> = Vec::new();

        for (index, a0, a1) in self.segments() {
            for (_, b0, b1) in other.segments() {
                match intersect_segments(a0, a1, b0, b1, tolerance) {
                    SegmentIntersection::None => {}
                    SegmentIntersection::Point(p) => {
                        hits.push((index, closest_point_on_segment(p, a0, a1).1, p));
                    }
                    SegmentIntersection::Overlap(p, q) => {
                        hits.push((index, closest_point_on_segment(p, a0, a1).1, p));
                        hits.push((index, closest_point_on_segment(q, a0, a1).1, q));
                    }
                }
            }
        }

        hits.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.total_cmp(&b.1)));

        let mut points: Vec<Point2D> = Vec::with_capacity(hits.len());
        for (_, _, p) in hits {
            if points.iter().all(|kept| kept.distance(p) > tolerance) {
                points.push(p);
            }
        }

        LineIntersection::from_points(points)
    }

    /// Fügt `point` in den Linienzug ein.
    ///
    /// Liegt bereits ein Stützpunkt innerhalb von `tolerance`, wird nichts
    /// eingefügt. Sonst landet der Punkt direkt hinter dem Anfangs-Stützpunkt
    /// des nächstgelegenen Segments (erstes Minimum gewinnt), damit die
    /// Laufrichtung der Linie erhalten bleibt.
    ///
    /// Gibt `true` zurück, wenn ein Stützpunkt eingefügt wurde.
    pub fn splice_vertex(&mut self, point: Point2D, tolerance: f64) -> bool {
        let Some(closest) = self.closest_vertex(point) else {
            return false;
        };
        if closest.distance <= tolerance {
            return false;
        }

        let mut best: Option<(usize, f64)> = None;
        for (index, a, b) in self.segments() {
            let distance = point_segment_distance(point, a, b);
            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((index, distance));
            }
        }

        let insert_at = best.map_or(closest.index + 1, |(index, _)| index + 1);
        self.insert_vertex(insert_at, point)
    }

    /// Fügt für jeden Schnittpunkt mit `other` einen Stützpunkt ein.
    ///
    /// Die Schnittpunkte werden einmal gegen die aktuelle Geometrie berechnet
    /// und danach nacheinander eingefügt; jede Einfügung arbeitet auf dem
    /// bereits veränderten Linienzug. Gibt die Schnittpunkte und die Anzahl
    /// tatsächlich eingefügter Stützpunkte zurück.
    pub fn splice_intersections(
        &mut self,
        other: &Polyline,
        tolerance: f64,
    ) -> (LineIntersection, usize) {
        let intersection = self.intersection(other, tolerance);
        let inserted = intersection
            .points()
            .iter()
            .filter(|&&point| self.splice_vertex(point, tolerance))
            .count();
        (intersection, inserted)
    }
}

//! Geometry-Matcher: findet pro Polygon die Kante, deren Mittelpunkt einer
//! Leitung am nächsten liegt.
//!
//! Bewusst ein erschöpfender Scan (Polygone × Kanten × Leitungen) ohne
//! Spatial-Index, damit der Tie-Break (erstes Minimum gewinnt) über die
//! Iterationsreihenfolge reproduzierbar bleibt.

use serde::{Deserialize, Serialize};

use super::geometry::{Edge, Point2D};
use super::line_layer::LineFeature;
use super::polygon::PolygonFeature;

/// Gefundene Paarung aus Polygon-Kante und nächstgelegener Leitung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestConnection {
    /// ID des Polygon-Features
    pub polygon_id: u64,
    /// Gewählte Kante
    pub edge: Edge,
    /// Mittelpunkt der Kante
    pub midpoint: Point2D,
    /// ID der nächstgelegenen Leitung
    pub line_id: u64,
    /// Distanz Mittelpunkt → Leitung
    pub distance: f64,
}

/// Sucht für ein Polygon-Feature die Kante mit minimaler Mittelpunkt-Distanz
/// zu irgendeiner Leitung.
///
/// Reihenfolge: Teile → Kanten des Außenrings → Leitungen; bei Gleichstand
/// gewinnt die zuerst gefundene Paarung. Nicht endliche Distanzen (z.B. NaN
/// im Ring) zählen nicht als Kandidat. `None`, wenn das Feature keine
/// gültige Kante hat oder keine Leitung Stützpunkte besitzt.
pub fn nearest_connection<'a, I>(feature: &PolygonFeature, lines: I) -> Option<NearestConnection>
where
    I: IntoIterator<Item = &'a LineFeature> + Clone,
{
    let mut best: Option<NearestConnection> = None;

    for edge in feature.geometry.edges() {
        let midpoint = edge.midpoint();
        for line in lines.clone() {
            let Some(distance) = line.geometry.distance_to(midpoint) else {
                continue;
            };
            if !distance.is_finite() {
                continue;
            }
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(NearestConnection {
                    polygon_id: feature.id,
                    edge,
                    midpoint,
                    line_id: line.id,
                    distance,
                });
            }
        }
    }

    best
}

/// Führt den Matcher für alle Polygon-Features aus.
///
/// Features ohne Treffer liefern keinen Eintrag.
pub fn find_nearest_connections<'a, P, L>(polygons: P, lines: L) -> Vec<NearestConnection>
where
    P: IntoIterator<Item = &'a PolygonFeature>,
    L: IntoIterator<Item = &'a LineFeature> + Clone,
{
    polygons
        .into_iter()
        .filter_map(|feature| nearest_connection(feature, lines.clone()))
        .collect()
}

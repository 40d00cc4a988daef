//! Topologie-Editor: erzeugt die Verbindungslinie und spleißt sie in die
//! getroffene Leitung ein.

use serde::{Deserialize, Serialize};

use super::geometry::Point2D;
use super::line_layer::{EditSession, SessionError};
use super::matcher::NearestConnection;
use super::polyline::{LineIntersection, Polyline};

/// Art des Schnitts zwischen Leitung und Verbindungslinie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntersectionKind {
    /// Kein numerischer Schnittpunkt
    NoIntersection,
    /// Genau ein Schnittpunkt
    SinglePoint,
    /// Mehrere Schnittpunkte
    MultiPoint,
}

impl From<&LineIntersection> for IntersectionKind {
    fn from(intersection: &LineIntersection) -> Self {
        match intersection {
            LineIntersection::Empty => IntersectionKind::NoIntersection,
            LineIntersection::Point(_) => IntersectionKind::SinglePoint,
            LineIntersection::MultiPoint(_) => IntersectionKind::MultiPoint,
        }
    }
}

/// Ergebnis einer Anbindung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpliceOutcome {
    /// ID der neu angelegten Verbindungslinie
    pub connector_id: u64,
    /// ID der getroffenen Leitung
    pub line_id: u64,
    /// Endpunkt der Verbindungslinie auf der Leitung
    pub nearest_point: Point2D,
    /// Art des Schnitts
    pub intersection: IntersectionKind,
    /// Anzahl eingefügter Stützpunkte
    pub inserted_vertices: usize,
    /// Ob die Geometrie der Leitung verändert wurde
    pub mutation_applied: bool,
}

/// Verbindet den Kantenmittelpunkt mit der nächstgelegenen Leitung.
///
/// 1. Nächster Punkt auf der Leitung (geklemmt)
/// 2. Verbindungslinie `[Mittelpunkt, nächster Punkt]`
/// 3. Neues Feature mit den Attributen der Leitung
/// 4. Stützpunkte an den Schnittpunkten in die Leitung einfügen
///
/// Existiert die Leitung in der Session nicht oder ist die Verbindungslinie
/// ungültig, wird nichts angelegt.
pub fn connect_and_splice(
    session: &mut EditSession<'_>,
    connection: &NearestConnection,
    tolerance: f64,
) -> Result<SpliceOutcome, SessionError> {
    let line = session
        .feature(connection.line_id)
        .ok_or(SessionError::UnknownFeature(connection.line_id))?;
    let nearest_point = line
        .geometry
        .nearest_point(connection.midpoint)
        .ok_or(SessionError::InvalidGeometry {
            feature_id: line.id,
            vertex_count: 0,
        })?;

    let connector = Polyline::segment(connection.midpoint, nearest_point);
    add_connector(session, connection.line_id, connector, tolerance)
}

/// Legt eine beliebige Verbindungslinie an und spleißt sie in die Leitung ein.
///
/// Der Schnitt wird gegen die Geometrie der Leitung vor dieser Anbindung
/// berechnet; die Stützpunkte werden danach nacheinander eingefügt.
pub fn add_connector(
    session: &mut EditSession<'_>,
    line_id: u64,
    connector: Polyline,
    tolerance: f64,
) -> Result<SpliceOutcome, SessionError> {
    let line = session
        .feature(line_id)
        .ok_or(SessionError::UnknownFeature(line_id))?;
    if !connector.is_valid() {
        return Err(SessionError::InvalidConnector {
            line_id,
            vertex_count: connector.len(),
        });
    }
    let attributes = line.attributes.clone();
    let mut geometry = line.geometry.clone();
    let nearest_point = connector.vertices().last().copied().unwrap_or_default();

    let (intersection, inserted_vertices) = geometry.splice_intersections(&connector, tolerance);
    let connector_id = session.add_feature(connector, attributes)?;

    let mutation_applied = inserted_vertices > 0;
    if mutation_applied {
        session.replace_geometry(line_id, geometry)?;
    }

    match &intersection {
        LineIntersection::Empty => log::debug!(
            "Verbindungslinie {} schneidet Leitung {} nicht, kein Stützpunkt eingefügt",
            connector_id,
            line_id
        ),
        _ => log::debug!(
            "Verbindungslinie {} an Leitung {}: {} Schnittpunkt(e), {} Stützpunkt(e) eingefügt",
            connector_id,
            line_id,
            intersection.points().len(),
            inserted_vertices
        ),
    }

    Ok(SpliceOutcome {
        connector_id,
        line_id,
        nearest_point,
        intersection: IntersectionKind::from(&intersection),
        inserted_vertices,
        mutation_applied,
    })
}

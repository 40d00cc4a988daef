//! Use-Case: gewählten Bereich verarbeiten (Matcher + Topologie-Editor).

use serde::{Deserialize, Serialize};

use crate::app::capture::BoundaryCapture;
use crate::app::error::{PreconditionError, StitchError};
use crate::core::{
    connect_and_splice, nearest_connection, IntersectionKind, LayerGeometryType, LineLayer,
    PolygonLayer,
};
use crate::shared::StitchOptions;

/// Ergebnis eines Verarbeitungslaufs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReport {
    /// Angelegte Verbindungslinien (Rückgabewert für den Host)
    pub added_connectors: usize,
    /// In Leitungen eingefügte Stützpunkte
    pub inserted_vertices: usize,
    /// Leitungen mit geänderter Geometrie
    pub updated_lines: usize,
    /// Polygone ohne Kante oder ohne Kandidaten-Leitung
    pub unmatched_features: usize,
    /// Polygone, deren Anbindung fehlschlug
    pub failed_features: usize,
    /// Verbindungslinien ohne numerischen Schnittpunkt
    pub empty_intersections: usize,
}

impl ProcessReport {
    /// Einzeilige Statusmeldung für den Host.
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Verarbeitung abgeschlossen, Karte aktualisiert: {} Verbindungslinie(n) hinzugefügt",
            self.added_connectors
        );
        if self.inserted_vertices > 0 {
            text.push_str(&format!(
                ", {} Stützpunkt(e) eingefügt",
                self.inserted_vertices
            ));
        }
        if self.unmatched_features > 0 {
            text.push_str(&format!(
                ", {} Polygon(e) ohne Leitung",
                self.unmatched_features
            ));
        }
        if self.failed_features > 0 {
            text.push_str(&format!(", {} fehlgeschlagen", self.failed_features));
        }
        text
    }
}

/// Prüft die Vorbedingungen in fester Reihenfolge.
fn check_preconditions<'p, 'l>(
    boundary: &BoundaryCapture,
    polygons: Option<&'p PolygonLayer>,
    lines: Option<&'l mut LineLayer>,
    options: &StitchOptions,
) -> Result<(&'p PolygonLayer, &'l mut LineLayer), PreconditionError> {
    if boundary.len() < options.min_boundary_points {
        return Err(PreconditionError::TooFewBoundaryPoints {
            captured: boundary.len(),
            required: options.min_boundary_points,
        });
    }
    let polygons = polygons.ok_or(PreconditionError::MissingPolygonLayer)?;
    let lines = lines.ok_or(PreconditionError::MissingLineLayer)?;
    if polygons.geometry_type != LayerGeometryType::Polygon {
        return Err(PreconditionError::WrongGeometryType {
            found: polygons.geometry_type,
        });
    }
    Ok((polygons, lines))
}

/// Verbindet jedes Polygon des Layers mit seiner nächstgelegenen Leitung.
///
/// Alle Änderungen laufen in einer einzigen Edit-Session. Fehler einzelner
/// Polygone werden protokolliert und übersprungen; scheitert das Öffnen
/// oder Speichern der Session, bleibt der Leitungs-Layer unverändert.
///
/// Der gezeichnete Bereich wird nur auf die Punktanzahl geprüft, er filtert
/// die Polygone nicht.
pub fn process_selected_area(
    boundary: &BoundaryCapture,
    polygons: Option<&PolygonLayer>,
    lines: Option<&mut LineLayer>,
    options: &StitchOptions,
) -> Result<ProcessReport, StitchError> {
    let (polygons, lines) = match check_preconditions(boundary, polygons, lines, options) {
        Ok(layers) => layers,
        Err(e) => {
            log::warn!("Verarbeitung abgebrochen: {}", e);
            return Err(e.into());
        }
    };

    log::info!(
        "Verarbeite {} Polygon(e) aus '{}' gegen {} Leitung(en) aus '{}'",
        polygons.len(),
        polygons.name,
        lines.len(),
        lines.name
    );

    let tolerance = options.intersection_tolerance;
    let mut report = ProcessReport::default();
    let mut session = lines.begin_edit()?;

    for feature in polygons.features() {
        let connection = if options.match_new_connectors {
            nearest_connection(feature, session.features())
        } else {
            nearest_connection(
                feature,
                session.features().filter(|line| !session.is_added(line.id)),
            )
        };

        let Some(connection) = connection else {
            log::debug!("Polygon {}: keine Kante oder keine Leitung gefunden", feature.id);
            report.unmatched_features += 1;
            continue;
        };

        match connect_and_splice(&mut session, &connection, tolerance) {
            Ok(outcome) => {
                report.added_connectors += 1;
                report.inserted_vertices += outcome.inserted_vertices;
                if outcome.intersection == IntersectionKind::NoIntersection {
                    report.empty_intersections += 1;
                }
                log::debug!(
                    "Polygon {} an Leitung {} angebunden (Distanz {:.3})",
                    feature.id,
                    connection.line_id,
                    connection.distance
                );
            }
            Err(e) => {
                log::warn!("Polygon {} übersprungen: {}", feature.id, e);
                report.failed_features += 1;
            }
        }
    }

    let summary = session.commit()?;
    report.updated_lines = summary.updated_features;

    log::info!("{}", report.summary());
    Ok(report)
}

//! Fehlertypen der Orchestrierung.

use crate::core::{LayerGeometryType, SessionError};

/// Vorbedingung der Verarbeitung nicht erfüllt. Es wurde nichts verändert.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PreconditionError {
    /// Zu wenige Begrenzungspunkte erfasst
    #[error("Kein gültiges Polygon gezeichnet ({captured} von mindestens {required} Punkten), bitte Bereich erneut wählen")]
    TooFewBoundaryPoints {
        /// Erfasste Punkte
        captured: usize,
        /// Geforderte Mindestanzahl
        required: usize,
    },
    /// Kein Polygon-Layer geladen
    #[error("Kein Polygon-Layer geladen")]
    MissingPolygonLayer,
    /// Kein Leitungs-Layer geladen
    #[error("Kein Leitungs-Layer geladen")]
    MissingLineLayer,
    /// Der Polygon-Layer meldet einen anderen Geometrietyp
    #[error("Gewählter Layer ist kein Polygon-Layer (Typ: {found:?})")]
    WrongGeometryType {
        /// Gemeldeter Geometrietyp
        found: LayerGeometryType,
    },
}

/// Fehler eines Verarbeitungslaufs, der den gesamten Lauf abbricht.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StitchError {
    /// Vorbedingung verletzt, keine Änderung
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    /// Edit-Session konnte nicht geöffnet oder gespeichert werden, keine Änderung
    #[error("Edit-Session fehlgeschlagen: {0}")]
    Session(#[from] SessionError),
}

//! Application State: zentrale Datenhaltung.

use super::capture::BoundaryCapture;
use super::history::LayerHistory;
use super::use_cases::process::ProcessReport;
use crate::core::{LineLayer, PolygonLayer};
use crate::shared::StitchOptions;

/// Gesamter Zustand eines Stitcher-Hosts.
pub struct StitchState {
    /// Geladener Polygon-Layer (read-only)
    pub polygon_layer: Option<PolygonLayer>,
    /// Geladener Leitungs-Layer (wird editiert)
    pub line_layer: Option<LineLayer>,
    /// Aktuell erfasster Begrenzungsbereich
    pub capture: BoundaryCapture,
    /// Laufzeit-Optionen
    pub options: StitchOptions,
    /// Undo/Redo des Leitungs-Layers
    pub history: LayerHistory,
    /// Letzte Statusmeldung für den Host
    pub status_message: Option<String>,
    /// Bericht des letzten erfolgreichen Laufs
    pub last_report: Option<ProcessReport>,
    /// Anzahl angelegter Verbindungslinien des letzten Laufs (0 bei Fehler)
    pub added_lines_count: usize,
}

impl Default for StitchState {
    fn default() -> Self {
        Self::new()
    }
}

impl StitchState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(StitchOptions::default())
    }

    /// Erstellt einen leeren Zustand mit den gegebenen Optionen.
    pub fn with_options(options: StitchOptions) -> Self {
        Self {
            polygon_layer: None,
            line_layer: None,
            capture: BoundaryCapture::new(),
            history: LayerHistory::new_with_capacity(options.history_depth),
            options,
            status_message: None,
            last_report: None,
            added_lines_count: 0,
        }
    }

    /// Prüft ob beide Layer geladen sind.
    pub fn has_layers(&self) -> bool {
        self.polygon_layer.is_some() && self.line_layer.is_some()
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

//! StitchIntent- und StitchCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::{LineLayer, PolygonLayer, Point2D};

/// Eingaben aus Host/UI ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum StitchIntent {
    /// Host hat Polygon- und Leitungs-Layer geladen
    LayersLoaded {
        polygons: PolygonLayer,
        lines: LineLayer,
    },
    /// Punkt des Begrenzungsbereichs erfasst (Klick)
    PointCaptured { point: Point2D },
    /// Bereichserfassung abgeschlossen (Rechtsklick)
    CaptureFinished,
    /// Bereichserfassung abgebrochen (Escape)
    CaptureCancelled,
    /// "Leitungen hinzufügen" ausgelöst
    AddLinesRequested,
    /// Letzten Lauf rückgängig machen
    UndoRequested,
    /// Rückgängig gemachten Lauf wiederholen
    RedoRequested,
}

/// Mutierende Commands auf dem StitchState.
#[derive(Debug, Clone)]
pub enum StitchCommand {
    /// Layer übernehmen und History leeren
    SetLayers {
        polygons: PolygonLayer,
        lines: LineLayer,
    },
    /// Punkt an die Erfassung anhängen
    AddBoundaryPoint { point: Point2D },
    /// Erfassung abschließen
    FinishBoundary,
    /// Erfassung verwerfen
    ResetBoundary,
    /// Gewählten Bereich verarbeiten
    ProcessSelectedArea,
    /// Undo
    Undo,
    /// Redo
    Redo,
}

//! Interaktive Erfassung des Begrenzungspolygons.
//!
//! Die Maus-/Tastatur-Ereignisse bleiben beim Host; hier kommen nur die
//! daraus abgeleiteten Schritte an: Punkt anhängen, abschließen, zurücksetzen.

use crate::core::Point2D;

/// Punktfolge des vom Benutzer gezeichneten Bereichs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryCapture {
    points: Vec<Point2D>,
    finished: bool,
}

impl BoundaryCapture {
    /// Erstellt eine leere Erfassung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Punkt an. Nach `finish` beginnt damit eine neue Erfassung.
    pub fn push_point(&mut self, point: Point2D) {
        if self.finished {
            self.points.clear();
            self.finished = false;
        }
        self.points.push(point);
    }

    /// Schließt die Erfassung ab.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Verwirft alle erfassten Punkte.
    pub fn reset(&mut self) {
        self.points.clear();
        self.finished = false;
    }

    /// Erfasste Punkte in Reihenfolge.
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Anzahl erfasster Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn noch kein Punkt erfasst wurde.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Gibt `true` zurück, wenn die Erfassung abgeschlossen wurde.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

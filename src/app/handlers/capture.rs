//! Handler für die Erfassung des Begrenzungsbereichs.

use crate::app::StitchState;
use crate::core::Point2D;

/// Hängt einen erfassten Punkt an.
pub fn add_point(state: &mut StitchState, point: Point2D) {
    state.capture.push_point(point);
    state.status_message = Some(format!("Punkt hinzugefügt: ({:.3}, {:.3})", point.x, point.y));
    log::info!("Punkt hinzugefügt: ({}, {})", point.x, point.y);
}

/// Schließt die Erfassung ab.
pub fn finish(state: &mut StitchState) {
    state.capture.finish();
    state.status_message = Some(
        "Bereichsauswahl abgeschlossen, jetzt 'Leitungen hinzufügen' auslösen".to_string(),
    );
    log::info!(
        "Bereichsauswahl abgeschlossen ({} Punkte)",
        state.capture.len()
    );
}

/// Verwirft alle erfassten Punkte.
pub fn reset(state: &mut StitchState) {
    state.capture.reset();
    state.status_message = Some("Auswahl zurückgesetzt".to_string());
    log::info!("Auswahl zurückgesetzt");
}

//! Handler für Undo/Redo-Operationen.

use crate::app::history::LayerSnapshot;
use crate::app::StitchState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut StitchState) {
    let Some(layer) = state.line_layer.as_mut() else {
        log::debug!("Undo: kein Leitungs-Layer geladen");
        return;
    };
    let current = LayerSnapshot::from_layer(layer);
    if let Some(prev) = state.history.pop_undo_with_current(current) {
        prev.apply_to(layer);
        state.status_message = Some("Letzter Lauf rückgängig gemacht".to_string());
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut StitchState) {
    let Some(layer) = state.line_layer.as_mut() else {
        log::debug!("Redo: kein Leitungs-Layer geladen");
        return;
    };
    let current = LayerSnapshot::from_layer(layer);
    if let Some(next) = state.history.pop_redo_with_current(current) {
        next.apply_to(layer);
        state.status_message = Some("Lauf wiederhergestellt".to_string());
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}

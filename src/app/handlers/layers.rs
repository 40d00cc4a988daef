//! Handler für das Übernehmen geladener Layer.

use crate::app::StitchState;
use crate::core::{LineLayer, PolygonLayer};

/// Übernimmt die vom Host geladenen Layer.
///
/// Die History bezieht sich auf den vorherigen Leitungs-Layer und wird geleert.
pub fn set_layers(state: &mut StitchState, polygons: PolygonLayer, lines: LineLayer) {
    log::info!(
        "Layer geladen: '{}' ({} Polygone), '{}' ({} Leitungen)",
        polygons.name,
        polygons.len(),
        lines.name,
        lines.len()
    );
    state.polygon_layer = Some(polygons);
    state.line_layer = Some(lines);
    state.history.clear();
    state.last_report = None;
    state.added_lines_count = 0;
    state.status_message = Some("Layer erfolgreich geladen".to_string());
}

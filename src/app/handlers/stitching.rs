//! Handler für den Verarbeitungslauf.

use crate::app::history::LayerSnapshot;
use crate::app::use_cases;
use crate::app::StitchState;

/// Führt den Verarbeitungslauf aus.
///
/// Ergebnis landet als Anzahl und einzelne Statusmeldung im State. Nur ein
/// Lauf, der den Layer verändert hat, hinterlässt einen Undo-Schritt; ein
/// abgebrochener Lauf liefert die Anzahl 0.
pub fn process_selected_area(state: &mut StitchState) {
    let before = state.line_layer.as_ref().map(LayerSnapshot::from_layer);

    let result = use_cases::process::process_selected_area(
        &state.capture,
        state.polygon_layer.as_ref(),
        state.line_layer.as_mut(),
        &state.options,
    );

    match result {
        Ok(report) => {
            if report.added_connectors > 0 {
                if let Some(snapshot) = before {
                    state.history.record_snapshot(snapshot);
                }
            }
            state.added_lines_count = report.added_connectors;
            state.status_message = Some(report.summary());
            state.last_report = Some(report);
        }
        Err(e) => {
            state.added_lines_count = 0;
            state.status_message = Some(e.to_string());
        }
    }
}

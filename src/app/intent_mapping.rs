//! Mapping von Host-Intents auf mutierende Stitch-Commands.

use super::{StitchCommand, StitchIntent, StitchState};

/// Übersetzt einen `StitchIntent` in eine Sequenz ausführbarer `StitchCommand`s.
pub fn map_intent_to_commands(state: &StitchState, intent: StitchIntent) -> Vec<StitchCommand> {
    match intent {
        StitchIntent::LayersLoaded { polygons, lines } => vec![
            StitchCommand::ResetBoundary,
            StitchCommand::SetLayers { polygons, lines },
        ],
        StitchIntent::PointCaptured { point } => vec![StitchCommand::AddBoundaryPoint { point }],
        StitchIntent::CaptureFinished => vec![StitchCommand::FinishBoundary],
        StitchIntent::CaptureCancelled => vec![StitchCommand::ResetBoundary],
        StitchIntent::AddLinesRequested => vec![StitchCommand::ProcessSelectedArea],
        StitchIntent::UndoRequested if state.can_undo() => vec![StitchCommand::Undo],
        StitchIntent::RedoRequested if state.can_redo() => vec![StitchCommand::Redo],
        StitchIntent::UndoRequested | StitchIntent::RedoRequested => vec![],
    }
}

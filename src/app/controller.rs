//! Application Controller für zentrale Event-Verarbeitung.

use super::{StitchCommand, StitchIntent, StitchState};

/// Orchestriert Host-Events und Use-Cases auf den StitchState.
#[derive(Default)]
pub struct StitchController;

impl StitchController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut StitchState,
        intent: StitchIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem StitchState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut StitchState,
        command: StitchCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Layer ===
            StitchCommand::SetLayers { polygons, lines } => {
                handlers::layers::set_layers(state, polygons, lines)
            }

            // === Bereichserfassung ===
            StitchCommand::AddBoundaryPoint { point } => handlers::capture::add_point(state, point),
            StitchCommand::FinishBoundary => handlers::capture::finish(state),
            StitchCommand::ResetBoundary => handlers::capture::reset(state),

            // === Verarbeitung ===
            StitchCommand::ProcessSelectedArea => handlers::stitching::process_selected_area(state),

            // === History ===
            StitchCommand::Undo => handlers::history::undo(state),
            StitchCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }
}

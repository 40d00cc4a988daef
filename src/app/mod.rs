//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod capture;
pub mod controller;
pub mod error;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Zustand des Hosts (geladene Layer, Erfassung, History)
pub mod state;
pub mod use_cases;

pub use capture::BoundaryCapture;
pub use controller::StitchController;
pub use error::{PreconditionError, StitchError};
pub use events::{StitchCommand, StitchIntent};
pub use history::{LayerHistory, LayerSnapshot};
pub use state::StitchState;
pub use use_cases::process::{process_selected_area, ProcessReport};

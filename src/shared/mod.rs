//! Geteilte Typen für schichtübergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `core`-Aufrufer und `app` gemeinsam nutzen.

pub mod options;

pub use options::StitchOptions;
pub use options::{HISTORY_DEPTH, INTERSECTION_TOLERANCE, MIN_BOUNDARY_POINTS};

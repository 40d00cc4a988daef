//! Feature-Handler für StitchCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod capture;
pub mod history;
pub mod layers;
pub mod stitching;

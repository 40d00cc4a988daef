//! Zentrale Konfiguration des Polygon-Line-Stitchers.
//!
//! `StitchOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Erfassung ───────────────────────────────────────────────────────

/// Mindestanzahl erfasster Begrenzungspunkte vor der Verarbeitung.
pub const MIN_BOUNDARY_POINTS: usize = 3;

// ── Geometrie ───────────────────────────────────────────────────────

/// Absolute Toleranz (Karteneinheiten) für Schnittpunkte und Stützpunkt-Duplikate.
pub const INTERSECTION_TOLERANCE: f64 = 1e-7;

// ── Verarbeitung ────────────────────────────────────────────────────

/// Neu angelegte Verbindungslinien im selben Lauf als Kandidaten berücksichtigen.
pub const MATCH_NEW_CONNECTORS: bool = true;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 20;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `polygon_line_stitcher.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StitchOptions {
    /// Mindestanzahl Begrenzungspunkte
    #[serde(default = "default_min_boundary_points")]
    pub min_boundary_points: usize,
    /// Schnitt- und Duplikat-Toleranz in Karteneinheiten
    #[serde(default = "default_intersection_tolerance")]
    pub intersection_tolerance: f64,
    /// Verbindungslinien dieses Laufs sind selbst Kandidaten des Matchers
    #[serde(default = "default_match_new_connectors")]
    pub match_new_connectors: bool,
    /// Undo-Tiefe
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
}

impl Default for StitchOptions {
    fn default() -> Self {
        Self {
            min_boundary_points: MIN_BOUNDARY_POINTS,
            intersection_tolerance: INTERSECTION_TOLERANCE,
            match_new_connectors: MATCH_NEW_CONNECTORS,
            history_depth: HISTORY_DEPTH,
        }
    }
}

fn default_min_boundary_points() -> usize {
    MIN_BOUNDARY_POINTS
}

fn default_intersection_tolerance() -> f64 {
    INTERSECTION_TOLERANCE
}

fn default_match_new_connectors() -> bool {
    MATCH_NEW_CONNECTORS
}

fn default_history_depth() -> usize {
    HISTORY_DEPTH
}

impl StitchOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("polygon_line_stitcher"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("polygon_line_stitcher.toml")
    }
}

use crate::core::{FeatureMap, LineLayer};
use std::sync::Arc;

/// Snapshot der Leitungs-Features für Undo/Redo.
///
/// Arc-Klon (Copy-on-Write): Das Erstellen ist O(1), kopiert wird erst beim
/// nächsten Schreibzugriff einer Edit-Session.
#[derive(Debug, Clone)]
pub struct LayerSnapshot {
    features: Arc<FeatureMap>,
}

impl LayerSnapshot {
    /// Erstellt einen O(1)-Snapshot des Layers.
    pub fn from_layer(layer: &LineLayer) -> Self {
        Self {
            features: layer.snapshot(),
        }
    }

    /// Stellt den Snapshot im Layer wieder her.
    pub fn apply_to(self, layer: &mut LineLayer) {
        layer.restore(self.features);
    }
}

/// Undo/Redo-Manager für den Leitungs-Layer.
#[derive(Debug, Default)]
pub struct LayerHistory {
    undo_stack: Vec<LayerSnapshot>,
    redo_stack: Vec<LayerSnapshot>,
    max_depth: usize,
}

impl LayerHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen Snapshot auf und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: LayerSnapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Leert beide Stacks (z.B. nach dem Laden neuer Layer).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: LayerSnapshot) -> Option<LayerSnapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: LayerSnapshot) -> Option<LayerSnapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}

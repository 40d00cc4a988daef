//! Transaktionale Edit-Session über einem Leitungs-Layer.
//!
//! Alle Änderungen laufen auf einer Copy-on-Write-Arbeitskopie und werden
//! erst mit `commit()` in den Layer übernommen. `discard()` oder ein Drop
//! ohne Commit verwirft sie vollständig.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::{next_free_id, Attributes, FeatureMap, LineFeature, LineLayer, SessionError};
use crate::core::polyline::Polyline;

/// Statistik eines erfolgreichen Commits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitSummary {
    /// Neu angelegte Features
    pub added_features: usize,
    /// Features mit ersetzter Geometrie
    pub updated_features: usize,
}

/// Offene Edit-Session. Hält den Layer exklusiv bis Commit oder Discard.
pub struct EditSession<'a> {
    layer: &'a mut LineLayer,
    working: Arc<FeatureMap>,
    added: BTreeSet<u64>,
    updated: BTreeSet<u64>,
    next_id: Option<u64>,
    finished: bool,
}

impl<'a> EditSession<'a> {
    pub(super) fn new(layer: &'a mut LineLayer) -> Self {
        let working = Arc::clone(&layer.features);
        let next_id = next_free_id(&working);
        Self {
            layer,
            working,
            added: BTreeSet::new(),
            updated: BTreeSet::new(),
            next_id,
            finished: false,
        }
    }

    /// Iterator über den aktuellen Stand (inkl. ungespeicherter Änderungen).
    pub fn features(&self) -> impl Iterator<Item = &LineFeature> + Clone {
        self.working.values()
    }

    /// Findet ein Feature im aktuellen Stand.
    pub fn feature(&self, id: u64) -> Option<&LineFeature> {
        self.working.get(&id)
    }

    /// Prüft ob das Feature in dieser Session neu angelegt wurde.
    pub fn is_added(&self, id: u64) -> bool {
        self.added.contains(&id)
    }

    /// Anzahl der in dieser Session angelegten Features.
    pub fn added_count(&self) -> usize {
        self.added.len()
    }

    /// Legt ein neues Feature an und gibt seine ID zurück.
    ///
    /// Schlägt fehl, wenn keine freie ID mehr vergeben werden kann.
    pub fn add_feature(
        &mut self,
        geometry: Polyline,
        attributes: Attributes,
    ) -> Result<u64, SessionError> {
        let id = self.next_id.ok_or_else(|| SessionError::IdSpaceExhausted {
            layer: self.layer.name.clone(),
        })?;
        self.next_id = id.checked_add(1);
        Arc::make_mut(&mut self.working).insert(id, LineFeature::new(id, geometry, attributes));
        self.added.insert(id);
        Ok(id)
    }

    /// Ersetzt die Geometrie eines bestehenden Features.
    pub fn replace_geometry(&mut self, id: u64, geometry: Polyline) -> Result<(), SessionError> {
        if !self.working.contains_key(&id) {
            return Err(SessionError::UnknownFeature(id));
        }
        if let Some(feature) = Arc::make_mut(&mut self.working).get_mut(&id) {
            feature.geometry = geometry;
        }
        if !self.added.contains(&id) {
            self.updated.insert(id);
        }
        Ok(())
    }

    /// Übernimmt alle Änderungen in den Layer.
    ///
    /// Jede neue oder geänderte Geometrie muss gültig sein; sonst wird die
    /// gesamte Session verworfen und der Layer bleibt unverändert.
    pub fn commit(mut self) -> Result<CommitSummary, SessionError> {
        self.finished = true;

        for id in self.added.iter().chain(self.updated.iter()) {
            let Some(feature) = self.working.get(id) else {
                continue;
            };
            if !feature.geometry.is_valid() {
                log::warn!(
                    "Commit auf Layer '{}' abgebrochen: Feature {} ungültig",
                    self.layer.name,
                    id
                );
                return Err(SessionError::InvalidGeometry {
                    feature_id: *id,
                    vertex_count: feature.geometry.len(),
                });
            }
        }

        let summary = CommitSummary {
            added_features: self.added.len(),
            updated_features: self.updated.len(),
        };
        let working = std::mem::take(&mut self.working);
        self.layer.apply_commit(working);

        log::info!(
            "Layer '{}' gespeichert: {} neu, {} geändert",
            self.layer.name,
            summary.added_features,
            summary.updated_features
        );
        Ok(summary)
    }

    /// Verwirft alle Änderungen dieser Session.
    pub fn discard(mut self) {
        self.finished = true;
        log::info!(
            "Edit-Session auf Layer '{}' verworfen ({} neue Features)",
            self.layer.name,
            self.added.len()
        );
    }
}

impl Drop for EditSession<'_> {
    fn drop(&mut self) {
        if !self.finished {
            log::warn!(
                "Edit-Session auf Layer '{}' ohne Commit beendet, Änderungen verworfen",
                self.layer.name
            );
        }
    }
}

//! Editierbarer Leitungs-Layer mit Edit-Session.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::geometry::Extent;
use super::polyline::Polyline;

mod session;

pub use session::{CommitSummary, EditSession};

/// Opaker Attributsatz eines Features (Feldreihenfolge bleibt erhalten).
pub type Attributes = IndexMap<String, serde_json::Value>;

/// Features eines Layers, indexiert nach ID in Einfügereihenfolge.
pub type FeatureMap = IndexMap<u64, LineFeature>;

/// Fehler rund um die Edit-Session eines Leitungs-Layers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    /// Der Layer ist schreibgeschützt, es kann keine Session geöffnet werden
    #[error("Layer '{layer}' ist schreibgeschützt")]
    ReadOnly {
        /// Name des Layers
        layer: String,
    },
    /// Feature-ID existiert nicht im Layer
    #[error("Feature {0} existiert nicht")]
    UnknownFeature(u64),
    /// Verbindungslinie ist ungültig und wird nicht angelegt
    #[error("Verbindungslinie zu Leitung {line_id} ist ungültig ({vertex_count} Stützpunkte)")]
    InvalidConnector {
        /// Getroffene Leitung
        line_id: u64,
        /// Anzahl Stützpunkte der Verbindungslinie
        vertex_count: usize,
    },
    /// Keine freie Feature-ID mehr verfügbar
    #[error("Layer '{layer}' hat keine freie Feature-ID mehr")]
    IdSpaceExhausted {
        /// Name des Layers
        layer: String,
    },
    /// Geometrie eines geänderten Features ist beim Commit ungültig
    #[error("Feature {feature_id} hat eine ungültige Geometrie ({vertex_count} Stützpunkte)")]
    InvalidGeometry {
        /// Betroffenes Feature
        feature_id: u64,
        /// Anzahl Stützpunkte der Geometrie
        vertex_count: usize,
    },
}

/// Leitungs-Feature: Polyline, Attribute und stabile ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineFeature {
    /// Stabile Feature-ID
    pub id: u64,
    /// Geometrie der Leitung
    pub geometry: Polyline,
    /// Attribute (werden auf neue Verbindungslinien kopiert)
    #[serde(default)]
    pub attributes: Attributes,
}

impl LineFeature {
    /// Erstellt ein neues Leitungs-Feature.
    pub fn new(id: u64, geometry: Polyline, attributes: Attributes) -> Self {
        Self {
            id,
            geometry,
            attributes,
        }
    }
}

/// Leitungs-Layer (Netz), der über eine Edit-Session verändert wird.
///
/// Die Features liegen hinter einem `Arc`: Snapshots für die History und die
/// Arbeitskopie einer Edit-Session kosten O(1), kopiert wird erst beim
/// ersten Schreibzugriff.
#[derive(Debug, Clone, Default)]
pub struct LineLayer {
    /// Anzeigename der Quelle
    pub name: String,
    /// Schreibschutz (keine Edit-Session möglich)
    pub read_only: bool,
    features: Arc<FeatureMap>,
    extent: Option<Extent>,
}

impl LineLayer {
    /// Erstellt einen Layer aus bereits geladenen Features.
    ///
    /// Bei doppelten IDs gewinnt das letzte Feature.
    pub fn new(name: impl Into<String>, features: Vec<LineFeature>) -> Self {
        let features: FeatureMap = features.into_iter().map(|f| (f.id, f)).collect();
        let extent = compute_extent(&features);
        Self {
            name: name.into(),
            read_only: false,
            features: Arc::new(features),
            extent,
        }
    }

    /// Markiert den Layer als schreibgeschützt.
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Anzahl der Features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Gibt `true` zurück, wenn der Layer keine Features enthält.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterator über alle Features in Einfügereihenfolge.
    pub fn features(&self) -> impl Iterator<Item = &LineFeature> + Clone {
        self.features.values()
    }

    /// Findet ein Feature per ID in O(1)
    pub fn feature(&self, id: u64) -> Option<&LineFeature> {
        self.features.get(&id)
    }

    /// Begrenzungsrechteck aller Features (Stand des letzten Commits).
    pub fn extent(&self) -> Option<Extent> {
        self.extent
    }

    /// Berechnet die nächste freie Feature-ID (`None` bei erschöpftem ID-Raum)
    pub fn next_feature_id(&self) -> Option<u64> {
        next_free_id(&self.features)
    }

    /// O(1)-Snapshot der Features für die History.
    pub fn snapshot(&self) -> Arc<FeatureMap> {
        Arc::clone(&self.features)
    }

    /// Stellt einen Snapshot wieder her.
    pub fn restore(&mut self, features: Arc<FeatureMap>) {
        self.features = features;
        self.update_extent();
    }

    /// Öffnet eine Edit-Session. Der Layer ist bis zum Ende der Session
    /// exklusiv ausgeliehen.
    pub fn begin_edit(&mut self) -> Result<EditSession<'_>, SessionError> {
        if self.read_only {
            return Err(SessionError::ReadOnly {
                layer: self.name.clone(),
            });
        }
        log::debug!("Edit-Session auf Layer '{}' geöffnet", self.name);
        Ok(EditSession::new(self))
    }

    /// Berechnet das Begrenzungsrechteck neu.
    pub fn update_extent(&mut self) {
        self.extent = compute_extent(&self.features);
    }

    fn apply_commit(&mut self, features: Arc<FeatureMap>) {
        self.features = features;
        self.update_extent();
    }
}

fn next_free_id(features: &FeatureMap) -> Option<u64> {
    features.keys().max().map_or(Some(1), |max| max.checked_add(1))
}

fn compute_extent(features: &FeatureMap) -> Option<Extent> {
    features
        .values()
        .filter_map(|f| f.geometry.extent())
        .reduce(|a, b| a.union(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;
    use serde_json::json;

    fn sample_layer() -> LineLayer {
        let mut attributes = Attributes::new();
        attributes.insert("name".into(), json!("Hauptleitung"));
        LineLayer::new(
            "Leitungen",
            vec![
                LineFeature::new(
                    7,
                    Polyline::segment(DVec2::new(0.0, 0.0), DVec2::new(10.0, 0.0)),
                    attributes,
                ),
                LineFeature::new(
                    3,
                    Polyline::segment(DVec2::new(0.0, 5.0), DVec2::new(4.0, 8.0)),
                    Attributes::new(),
                ),
            ],
        )
    }

    #[test]
    fn features_keep_insertion_order() {
        let layer = sample_layer();
        let ids: Vec<u64> = layer.features().map(|f| f.id).collect();

        assert_eq!(ids, vec![7, 3]);
        assert_eq!(layer.next_feature_id(), Some(8));
        assert_eq!(LineLayer::new("leer", vec![]).next_feature_id(), Some(1));
        assert_eq!(layer.feature(3).map(|f| f.geometry.len()), Some(2));
    }

    #[test]
    fn extent_covers_all_features() {
        let layer = sample_layer();
        let extent = layer.extent().expect("Extent erwartet");

        assert_eq!(extent.min, DVec2::new(0.0, 0.0));
        assert_eq!(extent.max, DVec2::new(10.0, 8.0));
        assert!(LineLayer::new("leer", vec![]).extent().is_none());
    }

    #[test]
    fn read_only_layer_refuses_edit_session() {
        let mut layer = sample_layer().with_read_only(true);

        let err = layer.begin_edit().err().expect("Fehler erwartet");
        assert_eq!(
            err,
            SessionError::ReadOnly {
                layer: "Leitungen".into()
            }
        );
    }

    #[test]
    fn snapshot_and_restore_round_trip() {
        let mut layer = sample_layer();
        let snapshot = layer.snapshot();

        let mut session = layer.begin_edit().expect("Session erwartet");
        session
            .add_feature(
                Polyline::segment(DVec2::new(20.0, 0.0), DVec2::new(30.0, 0.0)),
                Attributes::new(),
            )
            .expect("ID erwartet");
        session.commit().expect("Commit erwartet");
        assert_eq!(layer.len(), 3);
        assert_eq!(layer.extent().map(|e| e.max.x), Some(30.0));

        layer.restore(snapshot);
        assert_eq!(layer.len(), 2);
        assert_eq!(layer.extent().map(|e| e.max.x), Some(10.0));
    }

    #[test]
    fn layer_deserializes_from_json_features() {
        let features: Vec<LineFeature> = serde_json::from_value(json!([
            {
                "id": 1,
                "geometry": [[0.0, 0.0], [5.0, 5.0]],
                "attributes": { "material": "PE", "dn": 110 }
            },
            { "id": 2, "geometry": [[1.0, 1.0], [2.0, 1.0]] }
        ]))
        .expect("Features sollten deserialisierbar sein");

        let layer = LineLayer::new("json", features);
        let first = layer.feature(1).expect("Feature 1 erwartet");
        assert_eq!(first.attributes.get("dn"), Some(&json!(110)));
        assert_eq!(first.geometry.vertices()[1], DVec2::new(5.0, 5.0));
        assert!(layer.feature(2).expect("Feature 2").attributes.is_empty());
    }
}

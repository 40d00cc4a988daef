//! Polygon-Geometrie und Polygon-Layer (read-only Eingabe).

use serde::{Deserialize, Serialize};

use super::geometry::{Edge, Point2D};
use super::line_layer::Attributes;

/// Geschlossene, geordnete Punktfolge (Außenring oder Loch).
///
/// Der Ring darf explizit (erster == letzter Punkt) oder implizit
/// geschlossen sein.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ring(pub Vec<Point2D>);

impl Ring {
    /// Erstellt einen Ring aus Stützpunkten.
    pub fn new(points: Vec<Point2D>) -> Self {
        Self(points)
    }

    /// Stützpunkte des Rings.
    pub fn points(&self) -> &[Point2D] {
        &self.0
    }

    /// Prüft ob der Ring explizit geschlossen ist.
    pub fn is_closed(&self) -> bool {
        self.0.len() >= 2 && self.0.first() == self.0.last()
    }

    /// Alle Kanten in Ring-Reihenfolge.
    ///
    /// Bei implizit geschlossenen Ringen (≥ 3 Punkte) wird die Schlusskante
    /// als letzte Kante angehängt. Weniger als 2 Punkte ergeben keine Kanten.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let closing = if self.0.len() >= 3 && !self.is_closed() {
            self.0.last().copied().zip(self.0.first().copied())
        } else {
            None
        };

        self.0
            .windows(2)
            .map(|pair| Edge::new(pair[0], pair[1]))
            .chain(closing.map(|(start, end)| Edge::new(start, end)))
    }
}

/// Ein Polygon-Teil: erster Ring = Außenring, weitere Ringe = Löcher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonPart {
    /// Ringe des Teils
    pub rings: Vec<Ring>,
}

impl PolygonPart {
    /// Erstellt einen Teil nur aus einem Außenring.
    pub fn from_exterior(points: Vec<Point2D>) -> Self {
        Self {
            rings: vec![Ring::new(points)],
        }
    }

    /// Außenring des Teils (falls vorhanden).
    pub fn exterior(&self) -> Option<&Ring> {
        self.rings.first()
    }
}

/// Einteilige oder mehrteilige Polygon-Geometrie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PolygonGeometry {
    /// Ein einzelnes Polygon
    SinglePart(PolygonPart),
    /// Mehrere Polygone, die ein logisches Feature bilden
    MultiPart(Vec<PolygonPart>),
}

impl PolygonGeometry {
    /// Einteiliges Polygon aus einem Außenring.
    pub fn from_exterior(points: Vec<Point2D>) -> Self {
        PolygonGeometry::SinglePart(PolygonPart::from_exterior(points))
    }

    /// Prüft ob die Geometrie mehrteilig ist.
    pub fn is_multipart(&self) -> bool {
        matches!(self, PolygonGeometry::MultiPart(_))
    }

    /// Normalisiert die Geometrie in eine Liste von Teilen.
    pub fn parts(&self) -> &[PolygonPart] {
        match self {
            PolygonGeometry::SinglePart(part) => std::slice::from_ref(part),
            PolygonGeometry::MultiPart(parts) => parts,
        }
    }

    /// Außenringe aller Teile. Löcher werden nicht betrachtet.
    pub fn outer_rings(&self) -> impl Iterator<Item = &Ring> + '_ {
        self.parts().iter().filter_map(|part| part.exterior())
    }

    /// Alle Kanten aller Außenringe in Teil-Reihenfolge.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.outer_rings().flat_map(|ring| ring.edges())
    }
}

/// Polygon-Feature mit opakem Attributsatz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonFeature {
    /// Stabile Feature-ID
    pub id: u64,
    /// Geometrie des Features
    pub geometry: PolygonGeometry,
    /// Attribute (werden vom Algorithmus nicht gelesen)
    #[serde(default)]
    pub attributes: Attributes,
}

impl PolygonFeature {
    /// Erstellt ein Feature ohne Attribute.
    pub fn new(id: u64, geometry: PolygonGeometry) -> Self {
        Self {
            id,
            geometry,
            attributes: Attributes::new(),
        }
    }
}

/// Geometrietyp, den der Host für eine geladene Quelle meldet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayerGeometryType {
    /// Punkt-Quelle
    Point,
    /// Linien-Quelle
    Line,
    /// Polygon-Quelle
    #[default]
    Polygon,
}

/// Read-only Polygon-Layer, wie ihn der Host geladen hat.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolygonLayer {
    /// Anzeigename der Quelle
    pub name: String,
    /// Vom Host gemeldeter Geometrietyp
    pub geometry_type: LayerGeometryType,
    /// Features in stabiler Iterationsreihenfolge
    pub features: Vec<PolygonFeature>,
}

impl PolygonLayer {
    /// Erstellt einen Polygon-Layer.
    pub fn new(name: impl Into<String>, features: Vec<PolygonFeature>) -> Self {
        Self {
            name: name.into(),
            geometry_type: LayerGeometryType::Polygon,
            features,
        }
    }

    /// Überschreibt den gemeldeten Geometrietyp (z.B. falsche Quelle geladen).
    pub fn with_geometry_type(mut self, geometry_type: LayerGeometryType) -> Self {
        self.geometry_type = geometry_type;
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

    /// Iterator über alle Features.
    pub fn features(&self) -> impl Iterator<Item = &PolygonFeature> {
        self.features.iter()
    }
}

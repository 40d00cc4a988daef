//! Core-Domänentypen: Geometrie, Polygon- und Leitungs-Layer, Matcher, Topologie-Editor.

pub mod geometry;
/// Leitungs-Layer mit transaktionaler Edit-Session
pub mod line_layer;
pub mod matcher;
pub mod polygon;
pub mod polyline;
pub mod topology;

pub use geometry::{Edge, Extent, Point2D, SegmentIntersection};
pub use line_layer::{
    Attributes, CommitSummary, EditSession, FeatureMap, LineFeature, LineLayer, SessionError,
};
pub use matcher::{find_nearest_connections, nearest_connection, NearestConnection};
pub use polygon::{
    LayerGeometryType, PolygonFeature, PolygonGeometry, PolygonLayer, PolygonPart, Ring,
};
pub use polyline::{ClosestVertex, LineIntersection, Polyline};
pub use topology::{add_connector, connect_and_splice, IntersectionKind, SpliceOutcome};

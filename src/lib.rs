//! Polygon Line Stitcher Library.
//! Verbindet Polygon-Kanten mit dem nächstgelegenen Leitungsnetz und
//! spleißt die Verbindungslinien in die Leitungen ein.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    process_selected_area, BoundaryCapture, PreconditionError, ProcessReport, StitchController,
    StitchError, StitchIntent, StitchState,
};
pub use core::{
    Attributes, Edge, LayerGeometryType, LineFeature, LineLayer, NearestConnection, Point2D,
    PolygonFeature, PolygonGeometry, PolygonLayer, Polyline, SessionError,
};
pub use shared::StitchOptions;

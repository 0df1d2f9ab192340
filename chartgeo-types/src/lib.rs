//! Geometric primitives for nautical chart extents: GeoJSON geometries, boxes that may cross the antimeridian,
//! and the map projections used by chart catalogs.

pub mod error;
pub mod geo;
pub mod geojson;
pub mod segment;

mod ebox;
mod gbox;
mod geometry;
mod polygon;
mod position;
mod rect;

pub use ebox::{CornerCoordinates, EBox};
pub use error::ChartGeoTypesError;
pub use gbox::{GBox, EXTENT_EDGE_EPSILON};
pub use geometry::{ElementaryType, Geometry};
pub use polygon::{ring_contains, ring_segments, MultiPolygon, Polygon};
pub use position::{Pos, Precision};
pub use rect::Rect;

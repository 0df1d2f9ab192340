//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartGeoTypesError {
    /// Center or representative position requested on a geometry without any position.
    #[error("geometry contains no position")]
    EmptyGeometry,
    /// Direction-dependent computation requested on a zero-length segment.
    #[error("segment has zero length")]
    DegenerateSegment,
    /// Extent polygon can not be turned into a box.
    #[error("malformed extent polygon: {0}")]
    MalformedExtentPolygon(ExtentPolygonIssue),
    /// Operation requires a box that has at least one position bound in.
    #[error("bounding box is empty")]
    EmptyBox,
    /// Projection name is not one of the supported systems.
    #[error("unsupported projection: {0}")]
    UnsupportedProjection(String),
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// Intersection test requested between non-polygonal geometries.
    #[error("intersection is not defined between {0} and {1}")]
    UnsupportedGeometryPair(&'static str, &'static str),
}

/// Reason an extent polygon was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtentPolygonIssue {
    /// The exterior ring is not a closed quadrilateral.
    #[error("expected 5 positions, found {0}")]
    VertexCount(usize),
    /// No north-to-south or west-to-east edge within tolerance.
    #[error("no axis-aligned edge found")]
    NoAxisAlignedEdgeFound,
}

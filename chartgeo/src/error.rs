//! Error types used by the crate.

use chartgeo_types::ChartGeoTypesError;
use thiserror::Error;

/// Chartgeo error type.
#[derive(Debug, Error)]
pub enum ChartGeoError {
    /// Geometry or box computation failed.
    #[error(transparent)]
    Types(#[from] ChartGeoTypesError),
    /// Metadata or configuration is not valid JSON of the expected shape.
    #[error("failed to decode data: {0}")]
    Json(#[from] serde_json::Error),
    /// A georeferenced record lacks a field required by the check.
    #[error("metadata record has no {0}")]
    MissingField(&'static str),
    /// Border value is neither a pixel count nor a difference.
    #[error("invalid border value: {0}")]
    InvalidBorder(String),
}

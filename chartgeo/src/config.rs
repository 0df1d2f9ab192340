//! Settings of the georeferencing check.

use crate::error::ChartGeoError;
use chartgeo_types::geo::ProjectionSystem;
use serde::{Deserialize, Serialize};

/// Largest planar distance, in meters, between the corner box and the projected extent of a raster whose
/// georeferencing is correct. Real chart metadata sits close to both sides of this value.
pub const PLANAR_GEOREF_TOLERANCE: f64 = 1000.0;

/// Same as [`PLANAR_GEOREF_TOLERANCE`] when both boxes are compared in degrees.
pub const GEOGRAPHIC_GEOREF_TOLERANCE: f64 = 1e-2;

/// Georeferencing check configuration. Missing fields take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeorefConfig {
    /// See [`PLANAR_GEOREF_TOLERANCE`].
    pub planar_tolerance: f64,
    /// See [`GEOGRAPHIC_GEOREF_TOLERANCE`].
    pub geographic_tolerance: f64,
    /// Coordinate system of the raster corners.
    pub projection: ProjectionSystem,
}

impl Default for GeorefConfig {
    fn default() -> Self {
        Self {
            planar_tolerance: PLANAR_GEOREF_TOLERANCE,
            geographic_tolerance: GEOGRAPHIC_GEOREF_TOLERANCE,
            projection: ProjectionSystem::WorldMercator,
        }
    }
}

impl GeorefConfig {
    /// Reads the configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ChartGeoError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let config = GeorefConfig::from_json_str(r#"{"projection": "WebMercator"}"#).unwrap();
        assert_eq!(config.projection, ProjectionSystem::WebMercator);
        assert_eq!(config.planar_tolerance, PLANAR_GEOREF_TOLERANCE);
        assert_eq!(config.geographic_tolerance, GEOGRAPHIC_GEOREF_TOLERANCE);

        assert_eq!(GeorefConfig::from_json_str("{}").unwrap(), GeorefConfig::default());
    }

    #[test]
    fn unknown_projection_is_rejected() {
        assert!(GeorefConfig::from_json_str(r#"{"projection": "UTM20N"}"#).is_err());
    }
}

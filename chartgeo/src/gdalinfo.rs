//! Raster metadata record, in the shape printed by `gdalinfo -json`.

use crate::error::ChartGeoError;
use chartgeo_types::{CornerCoordinates, EBox, GBox, Geometry};
use serde::{Deserialize, Serialize};

/// Coordinate system of a raster. Only its presence matters to the checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSystem {
    /// Well-known text definition.
    #[serde(default)]
    pub wkt: String,
}

/// Raster metadata. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GdalInfo {
    /// Usually the path of the raster.
    #[serde(default)]
    pub description: Option<String>,
    /// Width and height in pixels.
    #[serde(default)]
    pub size: Option<[u32; 2]>,
    /// Native coordinate system, absent for unreferenced rasters.
    #[serde(default)]
    pub coordinate_system: Option<CoordinateSystem>,
    /// Corners in the native coordinate system.
    #[serde(default)]
    pub corner_coordinates: Option<CornerCoordinates>,
    /// Footprint in WGS84 degrees, normally a 5-position polygon.
    #[serde(default)]
    pub wgs84_extent: Option<geojson::Geometry>,
}

impl GdalInfo {
    /// Parses the JSON output of the metadata tool.
    pub fn from_json_str(json: &str) -> Result<Self, ChartGeoError> {
        Ok(serde_json::from_str(json)?)
    }

    /// True if the record carries a non-empty coordinate system.
    pub fn is_georeferenced(&self) -> bool {
        self.coordinate_system
            .as_ref()
            .is_some_and(|cs| !cs.wkt.is_empty())
    }

    /// Planar box of the raster corners.
    pub fn ebox(&self) -> Result<EBox, ChartGeoError> {
        let corners = self
            .corner_coordinates
            .as_ref()
            .ok_or(ChartGeoError::MissingField("cornerCoordinates"))?;
        Ok(EBox::from_corners(corners))
    }

    /// Geographic box of the reported footprint.
    pub fn gbox(&self) -> Result<GBox, ChartGeoError> {
        let extent = self
            .wgs84_extent
            .as_ref()
            .ok_or(ChartGeoError::MissingField("wgs84Extent"))?;
        Ok(GBox::from_extent_geometry(&Geometry::try_from(extent)?)?)
    }
}

//! Consistency check between the georeferencing of a raster and its reported footprint.

use crate::config::GeorefConfig;
use crate::error::ChartGeoError;
use crate::gdalinfo::GdalInfo;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Outcome of the check for one raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeorefStatus {
    /// The raster has no coordinate system.
    Unreferenced,
    /// Corners and footprint describe the same extent.
    Correct,
    /// Corners and footprint disagree beyond the tolerance.
    Incorrect,
}

impl Display for GeorefStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Unreferenced => "unreferenced",
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
        })
    }
}

/// Compares the corner coordinates of a raster with its geographic footprint.
#[derive(Debug, Clone, Default)]
pub struct GeorefValidator {
    config: GeorefConfig,
}

impl GeorefValidator {
    /// Creates a validator with the given settings.
    pub fn new(config: GeorefConfig) -> Self {
        Self { config }
    }

    /// Settings in use.
    pub fn config(&self) -> &GeorefConfig {
        &self.config
    }

    /// Distance, in planar units, between the box of the corners and the projected footprint box.
    pub fn planar_distance(&self, info: &GdalInfo) -> Result<f64, ChartGeoError> {
        let ebox = info.ebox()?;
        let gbox = info.gbox()?;
        if gbox.crosses_antimeridian() {
            debug!("{} crosses the antimeridian: {gbox}", name(info));
        }

        Ok(ebox.distance(&gbox.project(&self.config.projection))?)
    }

    /// Distance, in degrees, between the unprojected box of the corners and the footprint box.
    pub fn geographic_distance(&self, info: &GdalInfo) -> Result<f64, ChartGeoError> {
        let ebox = info.ebox()?;
        let gbox = info.gbox()?;

        Ok(ebox.unproject(&self.config.projection).distance(&gbox)?)
    }

    /// Classifies the raster by comparing both boxes in the planar coordinate system.
    pub fn classify(&self, info: &GdalInfo) -> Result<GeorefStatus, ChartGeoError> {
        if !info.is_georeferenced() {
            debug!("{} has no coordinate system", name(info));
            return Ok(GeorefStatus::Unreferenced);
        }

        let distance = self.planar_distance(info)?;
        Ok(self.status(info, distance, self.config.planar_tolerance))
    }

    /// Classifies the raster by comparing both boxes in degrees.
    pub fn classify_geographic(&self, info: &GdalInfo) -> Result<GeorefStatus, ChartGeoError> {
        if !info.is_georeferenced() {
            debug!("{} has no coordinate system", name(info));
            return Ok(GeorefStatus::Unreferenced);
        }

        let distance = self.geographic_distance(info)?;
        Ok(self.status(info, distance, self.config.geographic_tolerance))
    }

    fn status(&self, info: &GdalInfo, distance: f64, tolerance: f64) -> GeorefStatus {
        if distance < tolerance {
            debug!("{} georeferencing is correct, distance {distance}", name(info));
            GeorefStatus::Correct
        } else {
            warn!(
                "{} georeferencing is incorrect, distance {distance} exceeds {tolerance}",
                name(info)
            );
            GeorefStatus::Incorrect
        }
    }
}

fn name(info: &GdalInfo) -> &str {
    info.description.as_deref().unwrap_or("raster")
}

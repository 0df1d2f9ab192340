//! Georeferencing checks for the rasters of a nautical chart catalog.
//!
//! The geometric primitives live in [`chartgeo_types`] and are re-exported as [`types`].

pub mod borders;
pub mod config;
pub mod error;
pub mod gdalinfo;
pub mod georef;

pub use borders::{BorderValue, Borders};
pub use chartgeo_types as types;
pub use config::{GeorefConfig, GEOGRAPHIC_GEOREF_TOLERANCE, PLANAR_GEOREF_TOLERANCE};
pub use error::ChartGeoError;
pub use gdalinfo::{CoordinateSystem, GdalInfo};
pub use georef::{GeorefStatus, GeorefValidator};

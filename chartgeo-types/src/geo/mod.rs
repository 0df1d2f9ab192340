//! Ellipsoid constants and conversion between geographic coordinates and the supported planar systems (see
//! [`Projection`] and [`ProjectionSystem`]).

mod datum;
mod projection;

pub use datum::Datum;
pub use projection::{
    LatLonDd, LonLatDd, Projection, ProjectionSystem, WebMercator, WorldMercator,
};

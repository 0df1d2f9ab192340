//! Positions and the rounding policy applied to them.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A position: `(lon, lat)` in decimal degrees, or `(x, y)` in planar units.
///
/// Serialized as a 2-element array, the way GeoJSON encodes positions. Out of range geographic values are
/// accepted and carried through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Pos {
    x: f64,
    y: f64,
}

impl Pos {
    /// Creates a position from its planar coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a geographic position, longitude first.
    pub const fn lonlat(lon: f64, lat: f64) -> Self {
        Self { x: lon, y: lat }
    }

    /// First coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Second coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Longitude in degrees (alias of [`Pos::x`]).
    pub fn lon(&self) -> f64 {
        self.x
    }

    /// Latitude in degrees (alias of [`Pos::y`]).
    pub fn lat(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Pos) -> f64 {
        (*other - *self).norm()
    }

    /// Rounds both coordinates to the given precision.
    pub fn round(&self, precision: Precision) -> Self {
        Self {
            x: precision.round(self.x),
            y: precision.round(self.y),
        }
    }
}

impl From<[f64; 2]> for Pos {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<Pos> for [f64; 2] {
    fn from(value: Pos) -> Self {
        [value.x, value.y]
    }
}

impl std::ops::Sub<Pos> for Pos {
    type Output = Vector2<f64>;

    fn sub(self, rhs: Pos) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add<Vector2<f64>> for Pos {
    type Output = Self;

    fn add(self, rhs: Vector2<f64>) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// Number of decimal digits kept when a computed position is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precision(pub u8);

impl Precision {
    /// Degrees, about 0.1 m at the equator.
    pub const GEOGRAPHIC: Self = Self(6);
    /// Projected coordinates in meters.
    pub const PLANAR: Self = Self(1);

    /// Rounds `value` half away from zero.
    pub fn round(&self, value: f64) -> f64 {
        let factor = 10f64.powi(i32::from(self.0));
        (value * factor).round() / factor
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::GEOGRAPHIC
    }
}

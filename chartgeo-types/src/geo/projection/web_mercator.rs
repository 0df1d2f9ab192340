use super::Projection;
use crate::geo::Datum;
use crate::position::Pos;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Spherical Mercator on the equatorial radius of the datum (EPSG:3857).
#[derive(Debug, Copy, Clone)]
pub struct WebMercator {
    datum: Datum,
}

impl WebMercator {
    /// `x` of the antimeridian (`lon = 180`) on WGS84.
    pub const ANTIMERIDIAN_X: f64 = 20_037_508.342_789_244;

    /// Creates the projection on the given datum.
    pub fn new(datum: Datum) -> Self {
        Self { datum }
    }
}

impl Default for WebMercator {
    fn default() -> Self {
        Self {
            datum: Datum::WGS84,
        }
    }
}

impl Projection for WebMercator {
    fn project(&self, input: &Pos) -> Pos {
        let a = self.datum.semimajor();
        let x = a * input.lon().to_radians();
        let y = a * (FRAC_PI_4 + input.lat().to_radians() / 2.0).tan().ln();

        Pos::new(x, y)
    }

    fn unproject(&self, input: &Pos) -> Pos {
        let a = self.datum.semimajor();
        let lat = FRAC_PI_2 - 2.0 * (-input.y() / a).exp().atan();
        let lon = input.x() / a;

        Pos::lonlat(lon.to_degrees(), lat.to_degrees())
    }
}

use super::Projection;
use crate::geo::Datum;
use crate::position::Pos;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

const MAX_ITERATIONS: usize = 20;
const CONVERGENCE: f64 = 1e-12;

/// Ellipsoidal Mercator (EPSG:3395).
#[derive(Debug, Copy, Clone)]
pub struct WorldMercator {
    datum: Datum,
}

impl WorldMercator {
    /// Creates the projection on the given datum.
    pub fn new(datum: Datum) -> Self {
        Self { datum }
    }
}

impl Default for WorldMercator {
    fn default() -> Self {
        Self {
            datum: Datum::WGS84,
        }
    }
}

impl Projection for WorldMercator {
    fn project(&self, input: &Pos) -> Pos {
        let a = self.datum.semimajor();
        let e = self.datum.eccentricity();
        let phi = input.lat().to_radians();
        let e_sin = e * phi.sin();

        let x = a * input.lon().to_radians();
        let y = a
            * ((FRAC_PI_4 + phi / 2.0).tan() * ((1.0 - e_sin) / (1.0 + e_sin)).powf(e / 2.0)).ln();

        Pos::new(x, y)
    }

    fn unproject(&self, input: &Pos) -> Pos {
        let a = self.datum.semimajor();
        let e = self.datum.eccentricity();
        let t = (-input.y() / a).exp();

        let mut phi = FRAC_PI_2 - 2.0 * t.atan();
        for _ in 0..MAX_ITERATIONS {
            let e_sin = e * phi.sin();
            let next = FRAC_PI_2 - 2.0 * (t * ((1.0 - e_sin) / (1.0 + e_sin)).powf(e / 2.0)).atan();
            let delta = (next - phi).abs();
            phi = next;
            if delta < CONVERGENCE {
                break;
            }
        }

        Pos::lonlat((input.x() / a).to_degrees(), phi.to_degrees())
    }
}

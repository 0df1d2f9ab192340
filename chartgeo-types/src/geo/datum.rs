/// Reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    semimajor: f64,
    inv_flattening: f64,
}

impl Datum {
    /// World Geodetic System 1984.
    pub const WGS84: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Geodetic Reference System 1980.
    pub const GRS80: Self = Datum {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257222101,
    };

    /// Equatorial radius in meters.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening `1/f`.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Flattening `f = (a - b) / a`.
    pub fn flattening(&self) -> f64 {
        1.0 / self.inv_flattening
    }

    /// First eccentricity `e = sqrt(f * (2 - f))`.
    pub fn eccentricity(&self) -> f64 {
        let f = self.flattening();
        (f * (2.0 - f)).sqrt()
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::WGS84
    }
}

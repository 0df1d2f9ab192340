use crate::error::ChartGeoTypesError;
use crate::position::Pos;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

mod identity;
mod web_mercator;
mod world_mercator;

pub use identity::{LatLonDd, LonLatDd};
pub use web_mercator::WebMercator;
pub use world_mercator::WorldMercator;

/// Conversion between geographic `(lon, lat)` degrees and a planar coordinate system.
///
/// Neither direction checks its domain: out of range input yields whatever the formula produces, including
/// infinities and NaN.
pub trait Projection {
    /// Geographic to planar.
    fn project(&self, input: &Pos) -> Pos;
    /// Planar to geographic.
    fn unproject(&self, input: &Pos) -> Pos;
}

/// Closed set of coordinate systems handled by the crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProjectionSystem {
    /// Longitude then latitude, in degrees.
    LonLatDd,
    /// Latitude then longitude, in degrees.
    LatLonDd,
    /// Spherical Mercator, EPSG:3857.
    WebMercator,
    /// Ellipsoidal Mercator, EPSG:3395.
    #[default]
    WorldMercator,
}

impl ProjectionSystem {
    /// All supported systems.
    pub const ALL: [ProjectionSystem; 4] = [
        Self::LonLatDd,
        Self::LatLonDd,
        Self::WebMercator,
        Self::WorldMercator,
    ];

    /// Name used in configuration and catalog records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LonLatDd => "LonLatDd",
            Self::LatLonDd => "LatLonDd",
            Self::WebMercator => "WebMercator",
            Self::WorldMercator => "WorldMercator",
        }
    }
}

impl Projection for ProjectionSystem {
    fn project(&self, input: &Pos) -> Pos {
        match self {
            Self::LonLatDd => LonLatDd.project(input),
            Self::LatLonDd => LatLonDd.project(input),
            Self::WebMercator => WebMercator::default().project(input),
            Self::WorldMercator => WorldMercator::default().project(input),
        }
    }

    fn unproject(&self, input: &Pos) -> Pos {
        match self {
            Self::LonLatDd => LonLatDd.unproject(input),
            Self::LatLonDd => LatLonDd.unproject(input),
            Self::WebMercator => WebMercator::default().unproject(input),
            Self::WorldMercator => WorldMercator::default().unproject(input),
        }
    }
}

impl FromStr for ProjectionSystem {
    type Err = ChartGeoTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|system| system.name() == s)
            .ok_or_else(|| ChartGeoTypesError::UnsupportedProjection(s.to_string()))
    }
}

impl TryFrom<String> for ProjectionSystem {
    type Error = ChartGeoTypesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProjectionSystem> for String {
    fn from(value: ProjectionSystem) -> Self {
        value.name().to_string()
    }
}

impl Display for ProjectionSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parse_names() {
        for system in ProjectionSystem::ALL {
            assert_eq!(system.name().parse::<ProjectionSystem>(), Ok(system));
        }

        assert_matches!(
            "Lambert93".parse::<ProjectionSystem>(),
            Err(ChartGeoTypesError::UnsupportedProjection(name)) if name == "Lambert93"
        );
    }

    #[test]
    fn serde_uses_names() {
        let json = serde_json::to_string(&ProjectionSystem::WebMercator).unwrap();
        assert_eq!(json, "\"WebMercator\"");
        assert!(serde_json::from_str::<ProjectionSystem>("\"UTM31\"").is_err());
    }

    #[test]
    fn dispatch_matches_structs() {
        let pos = Pos::lonlat(-4.5, 48.4);
        assert_eq!(
            ProjectionSystem::WorldMercator.project(&pos),
            WorldMercator::default().project(&pos)
        );
        assert_eq!(
            ProjectionSystem::LatLonDd.project(&pos),
            Pos::new(48.4, -4.5)
        );
    }
}

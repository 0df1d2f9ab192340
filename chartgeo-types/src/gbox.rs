//! Box in geographic coordinates, see [`GBox`].

use crate::ebox::EBox;
use crate::error::{ChartGeoTypesError, ExtentPolygonIssue};
use crate::geo::Projection;
use crate::geometry::Geometry;
use crate::polygon::Polygon;
use crate::position::{Pos, Precision};
use crate::rect::Rect;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Two coordinates closer than this (in degrees) are considered equal when looking for the axis-aligned edges of
/// an extent polygon.
pub const EXTENT_EDGE_EPSILON: f64 = 1e-2;

/// Axis-aligned box in `(lon, lat)` degrees.
///
/// A box crossing the antimeridian keeps its west longitude in `[-180, 180]` and has an east longitude above 180
/// (unlike GeoJSON, where `west > east` in that case). A box is empty until a first position is bound in, and never
/// shrinks afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GBox(Option<Rect>);

impl GBox {
    /// Empty box.
    pub fn new() -> Self {
        Self(None)
    }

    /// Box with the given south-west and north-east corners.
    pub fn from_corners(min: Pos, max: Pos) -> Self {
        Self(Some(Rect::new(min, max)))
    }

    /// Builds the box described by an extent polygon as reported by raster metadata tools.
    ///
    /// The exterior ring must be a closed counter-clockwise quadrilateral (5 positions), starting anywhere, that has
    /// not been split at the antimeridian. The box crosses the antimeridian unless the west-to-east edge directly
    /// follows the north-to-south edge.
    pub fn from_extent_polygon(polygon: &Polygon) -> Result<Self, ChartGeoTypesError> {
        let ring = polygon.exterior();
        if ring.len() != 5 {
            return Err(ChartGeoTypesError::MalformedExtentPolygon(
                ExtentPolygonIssue::VertexCount(ring.len()),
            ));
        }

        let mut north_south = None;
        let mut west_east = None;
        for (i, edge) in ring.windows(2).enumerate() {
            let (from, to) = (edge[0], edge[1]);
            if (from.lon() - to.lon()).abs() < EXTENT_EDGE_EPSILON && to.lat() < from.lat() {
                north_south.get_or_insert(i);
            }
            if (from.lat() - to.lat()).abs() < EXTENT_EDGE_EPSILON && to.lon() > from.lon() {
                west_east.get_or_insert(i);
            }
        }

        let (Some(north_south), Some(west_east)) = (north_south, west_east) else {
            return Err(ChartGeoTypesError::MalformedExtentPolygon(
                ExtentPolygonIssue::NoAxisAlignedEdgeFound,
            ));
        };

        let crosses = (west_east + 4 - north_south) % 4 != 1;
        let south_west = ring[(north_south + 1) % 4];
        let mut north_east = ring[(north_south + 3) % 4];
        if crosses {
            north_east = Pos::lonlat(north_east.lon() + 360.0, north_east.lat());
        }

        Ok(Self::from_corners(south_west, north_east))
    }

    /// Builds the box of an extent given either as a single polygon (see [`GBox::from_extent_polygon`]) or as a
    /// multipolygon split at the antimeridian, in which case the western parts are moved east by 360 degrees.
    pub fn from_extent_geometry(geometry: &Geometry) -> Result<Self, ChartGeoTypesError> {
        match geometry {
            Geometry::Polygon(polygon) => Self::from_extent_polygon(polygon),
            Geometry::MultiPolygon(mp) => {
                let parts: Vec<Rect> = mp
                    .polygons()
                    .iter()
                    .filter_map(|p| p.bbox().0)
                    .collect();
                if parts.is_empty() {
                    return Err(ChartGeoTypesError::EmptyGeometry);
                }

                let split = parts
                    .iter()
                    .any(|r| r.max.lon() >= 180.0 - EXTENT_EDGE_EPSILON)
                    && parts
                        .iter()
                        .any(|r| r.min.lon() <= -180.0 + EXTENT_EDGE_EPSILON);

                Ok(parts
                    .into_iter()
                    .map(|r| {
                        let part = Self(Some(r));
                        if split && r.max.lon() <= 0.0 {
                            part.translate_lon(360.0)
                        } else {
                            part
                        }
                    })
                    .fold(Self::new(), |acc, part| acc.union(&part)))
            }
            other => Err(ChartGeoTypesError::Conversion(format!(
                "extent must be a Polygon or a MultiPolygon, found {}",
                other.type_name()
            ))),
        }
    }

    /// True until a position is bound in.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Underlying rectangle.
    pub fn rect(&self) -> Option<&Rect> {
        self.0.as_ref()
    }

    /// South-west corner.
    pub fn min(&self) -> Option<Pos> {
        self.0.map(|r| r.min)
    }

    /// North-east corner.
    pub fn max(&self) -> Option<Pos> {
        self.0.map(|r| r.max)
    }

    fn non_empty(&self) -> Result<&Rect, ChartGeoTypesError> {
        self.0.as_ref().ok_or(ChartGeoTypesError::EmptyBox)
    }

    /// Widens the box to cover `pos`. The first call sets both corners.
    pub fn bound(&mut self, pos: &Pos) {
        match &mut self.0 {
            Some(rect) => rect.bound(pos),
            None => self.0 = Some(Rect::from_pos(pos)),
        }
    }

    /// Smallest box covering both.
    pub fn union(&self, other: &GBox) -> GBox {
        match (self.0, other.0) {
            (Some(a), Some(b)) => Self(Some(a.merge(&b))),
            (Some(_), None) => *self,
            (None, _) => *other,
        }
    }

    /// True if `small` is inside this box without touching any of its sides.
    pub fn includes(&self, small: &GBox) -> Result<bool, ChartGeoTypesError> {
        Ok(self.non_empty()?.strictly_contains(small.non_empty()?))
    }

    /// Common part of the two boxes, `None` if they are disjoint or one is empty.
    pub fn intersection(&self, other: &GBox) -> Option<GBox> {
        let common = self.0?.intersection(&other.0?)?;
        Some(Self(Some(common)))
    }

    /// Largest difference between matching west, south, east or north values.
    pub fn distance(&self, other: &GBox) -> Result<f64, ChartGeoTypesError> {
        Ok(self.non_empty()?.distance(other.non_empty()?))
    }

    /// Width times height in square degrees.
    pub fn area(&self) -> Result<f64, ChartGeoTypesError> {
        Ok(self.non_empty()?.area())
    }

    /// Midpoint. Its longitude is above 180 for some boxes crossing the antimeridian.
    pub fn center(&self) -> Result<Pos, ChartGeoTypesError> {
        Ok(self.non_empty()?.center())
    }

    /// True if the east side lies beyond the antimeridian.
    pub fn crosses_antimeridian(&self) -> bool {
        self.0.is_some_and(|r| r.max.lon() > 180.0)
    }

    /// West longitude.
    pub fn west(&self) -> Result<f64, ChartGeoTypesError> {
        Ok(self.non_empty()?.min.lon())
    }

    /// South latitude.
    pub fn south(&self) -> Result<f64, ChartGeoTypesError> {
        Ok(self.non_empty()?.min.lat())
    }

    /// East longitude.
    pub fn east(&self) -> Result<f64, ChartGeoTypesError> {
        Ok(self.non_empty()?.max.lon())
    }

    /// North latitude.
    pub fn north(&self) -> Result<f64, ChartGeoTypesError> {
        Ok(self.non_empty()?.max.lat())
    }

    /// `[west, south, east, north]`.
    pub fn to_array(&self) -> Result<[f64; 4], ChartGeoTypesError> {
        let r = self.non_empty()?;
        Ok([r.min.lon(), r.min.lat(), r.max.lon(), r.max.lat()])
    }

    /// Bounds in the form expected by Leaflet: `[[south, west], [north, east]]`.
    pub fn leaflet_bounds(&self) -> Result<[[f64; 2]; 2], ChartGeoTypesError> {
        let r = self.non_empty()?;
        Ok([[r.min.lat(), r.min.lon()], [r.max.lat(), r.max.lon()]])
    }

    /// Closed counter-clockwise polygon of the box, starting at the north-west corner.
    pub fn polygon(&self) -> Result<Polygon, ChartGeoTypesError> {
        Ok(Polygon::new(self.non_empty()?.ring(), vec![]))
    }

    /// Rounds the corners.
    pub fn round(&self, precision: Precision) -> GBox {
        Self(self.0.map(|r| r.round(precision)))
    }

    fn translate_lon(&self, dlon: f64) -> GBox {
        Self(self.0.map(|r| {
            Rect::new(
                Pos::lonlat(r.min.lon() + dlon, r.min.lat()),
                Pos::lonlat(r.max.lon() + dlon, r.max.lat()),
            )
        }))
    }

    /// Planar box covering the projected corners.
    pub fn project<P: Projection + ?Sized>(&self, projection: &P) -> EBox {
        match self.0 {
            Some(r) => [projection.project(&r.min), projection.project(&r.max)]
                .into_iter()
                .collect(),
            None => EBox::new(),
        }
    }
}

impl FromIterator<Pos> for GBox {
    fn from_iter<T: IntoIterator<Item = Pos>>(iter: T) -> Self {
        Self(Rect::from_points(iter))
    }
}

impl Display for GBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(r) => write!(
                f,
                "[{}, {}, {}, {}]",
                r.min.lon(),
                r.min.lat(),
                r.max.lon(),
                r.max.lat()
            ),
            None => f.write_str("[]"),
        }
    }
}

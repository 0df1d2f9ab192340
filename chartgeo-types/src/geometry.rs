//! GeoJSON geometries, see [`Geometry`].

use crate::error::ChartGeoTypesError;
use crate::gbox::GBox;
use crate::geo::Projection;
use crate::polygon::{MultiPolygon, Polygon};
use crate::position::{Pos, Precision};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Geometry types that are not collections of other geometries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementaryType {
    /// `Point`
    Point,
    /// `LineString`
    LineString,
    /// `Polygon`
    Polygon,
}

impl Display for ElementaryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
        })
    }
}

/// A GeoJSON geometry. Each variant owns its positions.
///
/// (De)serialized through its GeoJSON representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "geojson::Geometry", into = "geojson::Geometry")]
pub enum Geometry {
    /// Single position.
    Point(Pos),
    /// Set of positions.
    MultiPoint(Vec<Pos>),
    /// Polyline.
    LineString(Vec<Pos>),
    /// Set of polylines.
    MultiLineString(Vec<Vec<Pos>>),
    /// Polygon with optional holes.
    Polygon(Polygon),
    /// Set of polygons.
    MultiPolygon(MultiPolygon),
    /// Heterogeneous set of geometries.
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    /// GeoJSON type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::LineString(_) => "LineString",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// Elementary types found in the geometry. Empty for an empty collection.
    pub fn elt_types(&self) -> BTreeSet<ElementaryType> {
        match self {
            Geometry::Point(_) => BTreeSet::from([ElementaryType::Point]),
            Geometry::LineString(_) => BTreeSet::from([ElementaryType::LineString]),
            Geometry::Polygon(_) => BTreeSet::from([ElementaryType::Polygon]),
            Geometry::MultiPoint(points) if !points.is_empty() => {
                BTreeSet::from([ElementaryType::Point])
            }
            Geometry::MultiLineString(lines) if !lines.is_empty() => {
                BTreeSet::from([ElementaryType::LineString])
            }
            Geometry::MultiPolygon(mp) if !mp.polygons().is_empty() => {
                BTreeSet::from([ElementaryType::Polygon])
            }
            Geometry::MultiPoint(_) | Geometry::MultiLineString(_) | Geometry::MultiPolygon(_) => {
                BTreeSet::new()
            }
            Geometry::GeometryCollection(geoms) => {
                geoms.iter().flat_map(Geometry::elt_types).collect()
            }
        }
    }

    /// Direct children: points of a line string, rings of a polygon, parts of a multi geometry.
    pub fn geoms(&self) -> Vec<Geometry> {
        match self {
            Geometry::Point(_) => vec![],
            Geometry::MultiPoint(points) | Geometry::LineString(points) => {
                points.iter().copied().map(Geometry::Point).collect()
            }
            Geometry::MultiLineString(lines) => {
                lines.iter().cloned().map(Geometry::LineString).collect()
            }
            Geometry::Polygon(polygon) => polygon
                .rings()
                .iter()
                .cloned()
                .map(Geometry::LineString)
                .collect(),
            Geometry::MultiPolygon(mp) => mp
                .polygons()
                .iter()
                .cloned()
                .map(Geometry::Polygon)
                .collect(),
            Geometry::GeometryCollection(geoms) => geoms.clone(),
        }
    }

    /// Flattens multi geometries and collections into points, line strings and polygons.
    pub fn decompose(&self) -> Vec<Geometry> {
        match self {
            Geometry::Point(_) | Geometry::LineString(_) | Geometry::Polygon(_) => {
                vec![self.clone()]
            }
            Geometry::MultiPoint(_) | Geometry::MultiLineString(_) | Geometry::MultiPolygon(_) => {
                self.geoms()
            }
            Geometry::GeometryCollection(geoms) => {
                geoms.iter().flat_map(Geometry::decompose).collect()
            }
        }
    }

    /// All positions, in traversal order.
    pub fn positions(&self) -> Box<dyn Iterator<Item = &Pos> + '_> {
        match self {
            Geometry::Point(p) => Box::new(std::iter::once(p)),
            Geometry::MultiPoint(points) | Geometry::LineString(points) => Box::new(points.iter()),
            Geometry::MultiLineString(lines) => Box::new(lines.iter().flatten()),
            Geometry::Polygon(polygon) => Box::new(polygon.positions()),
            Geometry::MultiPolygon(mp) => {
                Box::new(mp.polygons().iter().flat_map(Polygon::positions))
            }
            Geometry::GeometryCollection(geoms) => {
                Box::new(geoms.iter().flat_map(Geometry::positions))
            }
        }
    }

    /// Number of positions.
    pub fn nbre_of_pos(&self) -> Result<usize, ChartGeoTypesError> {
        match self.positions().count() {
            0 => Err(ChartGeoTypesError::EmptyGeometry),
            count => Ok(count),
        }
    }

    /// First position.
    pub fn a_pos(&self) -> Result<Pos, ChartGeoTypesError> {
        self.positions()
            .next()
            .copied()
            .ok_or(ChartGeoTypesError::EmptyGeometry)
    }

    /// Mean of all the positions, rounded to `precision`.
    ///
    /// Closing positions of rings are counted like any other one.
    pub fn center(&self, precision: Precision) -> Result<Pos, ChartGeoTypesError> {
        let (count, x, y) = self
            .positions()
            .fold((0usize, 0.0, 0.0), |(n, x, y), p| (n + 1, x + p.x(), y + p.y()));
        if count == 0 {
            return Err(ChartGeoTypesError::EmptyGeometry);
        }

        Ok(Pos::new(x / count as f64, y / count as f64).round(precision))
    }

    /// Smallest box covering all the positions. Empty for an empty geometry.
    pub fn bbox(&self) -> GBox {
        self.positions().copied().collect()
    }

    /// Same geometry with every position passed through `f`.
    pub fn reproject<F: Fn(&Pos) -> Pos>(&self, f: &F) -> Geometry {
        let ring = |positions: &Vec<Pos>| positions.iter().map(f).collect::<Vec<_>>();
        let polygon = |poly: &Polygon| Polygon::from_rings(poly.rings().iter().map(ring).collect());

        match self {
            Geometry::Point(p) => Geometry::Point(f(p)),
            Geometry::MultiPoint(points) => Geometry::MultiPoint(ring(points)),
            Geometry::LineString(points) => Geometry::LineString(ring(points)),
            Geometry::MultiLineString(lines) => {
                Geometry::MultiLineString(lines.iter().map(ring).collect())
            }
            Geometry::Polygon(p) => Geometry::Polygon(polygon(p)),
            Geometry::MultiPolygon(mp) => {
                Geometry::MultiPolygon(mp.polygons().iter().map(polygon).collect::<Vec<_>>().into())
            }
            Geometry::GeometryCollection(geoms) => {
                Geometry::GeometryCollection(geoms.iter().map(|g| g.reproject(f)).collect())
            }
        }
    }

    /// Projects every position.
    pub fn project<P: Projection + ?Sized>(&self, projection: &P) -> Geometry {
        self.reproject(&|p: &Pos| projection.project(p))
    }

    /// Intersection test between polygonal geometries.
    pub fn inters(&self, other: &Geometry) -> Result<bool, ChartGeoTypesError> {
        match (self, other) {
            (Geometry::Polygon(a), Geometry::Polygon(b)) => Ok(a.inters(b)),
            (Geometry::Polygon(a), Geometry::MultiPolygon(b))
            | (Geometry::MultiPolygon(b), Geometry::Polygon(a)) => Ok(b.inters_polygon(a)),
            (Geometry::MultiPolygon(a), Geometry::MultiPolygon(b)) => Ok(a.inters(b)),
            _ => Err(ChartGeoTypesError::UnsupportedGeometryPair(
                self.type_name(),
                other.type_name(),
            )),
        }
    }
}

impl From<Pos> for Geometry {
    fn from(value: Pos) -> Self {
        Self::Point(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

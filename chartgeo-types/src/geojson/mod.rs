//! Conversion between [`Geometry`] and the types of the `geojson` crate.

use crate::error::ChartGeoTypesError;
use crate::geometry::Geometry;
use crate::polygon::{MultiPolygon, Polygon};
use crate::position::Pos;
use geojson::{LineStringType, PolygonType, Position, Value};

impl TryFrom<&geojson::Geometry> for Geometry {
    type Error = ChartGeoTypesError;

    fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
        Ok(match &value.value {
            Value::Point(p) => Geometry::Point(convert_pos(p)?),
            Value::MultiPoint(points) => Geometry::MultiPoint(convert_line(points)?),
            Value::LineString(points) => Geometry::LineString(convert_line(points)?),
            Value::MultiLineString(lines) => Geometry::MultiLineString(
                lines.iter().map(convert_line).collect::<Result<_, _>>()?,
            ),
            Value::Polygon(polygon) => Geometry::Polygon(convert_polygon(polygon)?),
            Value::MultiPolygon(mp) => Geometry::MultiPolygon(MultiPolygon(
                mp.iter().map(convert_polygon).collect::<Result<_, _>>()?,
            )),
            Value::GeometryCollection(geoms) => Geometry::GeometryCollection(
                geoms.iter().map(Geometry::try_from).collect::<Result<_, _>>()?,
            ),
        })
    }
}

impl TryFrom<geojson::Geometry> for Geometry {
    type Error = ChartGeoTypesError;

    fn try_from(value: geojson::Geometry) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl From<&Geometry> for geojson::Geometry {
    fn from(value: &Geometry) -> Self {
        let value = match value {
            Geometry::Point(p) => Value::Point(position(p)),
            Geometry::MultiPoint(points) => Value::MultiPoint(line(points)),
            Geometry::LineString(points) => Value::LineString(line(points)),
            Geometry::MultiLineString(lines) => {
                Value::MultiLineString(lines.iter().map(|l| line(l)).collect())
            }
            Geometry::Polygon(p) => Value::Polygon(polygon(p)),
            Geometry::MultiPolygon(mp) => {
                Value::MultiPolygon(mp.polygons().iter().map(polygon).collect())
            }
            Geometry::GeometryCollection(geoms) => {
                Value::GeometryCollection(geoms.iter().map(geojson::Geometry::from).collect())
            }
        };

        geojson::Geometry::new(value)
    }
}

impl From<Geometry> for geojson::Geometry {
    fn from(value: Geometry) -> Self {
        Self::from(&value)
    }
}

/// Elevation and further dimensions are dropped.
fn convert_pos(p: &Position) -> Result<Pos, ChartGeoTypesError> {
    match p.as_slice() {
        [x, y, ..] => Ok(Pos::new(*x, *y)),
        _ => Err(ChartGeoTypesError::Conversion(
            "position must contain at least 2 dimensions".to_string(),
        )),
    }
}

fn convert_line(points: &LineStringType) -> Result<Vec<Pos>, ChartGeoTypesError> {
    points.iter().map(convert_pos).collect()
}

fn convert_polygon(polygon: &PolygonType) -> Result<Polygon, ChartGeoTypesError> {
    Ok(Polygon::from_rings(
        polygon
            .iter()
            .map(convert_line)
            .collect::<Result<_, _>>()?,
    ))
}

fn position(p: &Pos) -> Position {
    vec![p.x(), p.y()]
}

fn line(points: &[Pos]) -> LineStringType {
    points.iter().map(position).collect()
}

fn polygon(polygon: &Polygon) -> PolygonType {
    polygon.rings().iter().map(|r| line(r)).collect()
}

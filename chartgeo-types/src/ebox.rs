//! Box in planar coordinates, see [`EBox`].

use crate::error::ChartGeoTypesError;
use crate::gbox::GBox;
use crate::geo::Projection;
use crate::polygon::Polygon;
use crate::position::Pos;
use crate::rect::Rect;
use serde::{Deserialize, Serialize};

/// The four corners and the center of a georeferenced raster, in its planar coordinate system, as reported by
/// raster metadata tools.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerCoordinates {
    /// Upper-left corner.
    pub upper_left: Pos,
    /// Lower-left corner.
    pub lower_left: Pos,
    /// Lower-right corner.
    pub lower_right: Pos,
    /// Upper-right corner.
    pub upper_right: Pos,
    /// Center of the raster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Pos>,
}

/// Axis-aligned box in a planar coordinate system.
///
/// The center of a box built from raster corners is the one reported by the tool, which is not always the
/// midpoint of the box for rotated or skewed rasters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EBox {
    rect: Option<Rect>,
    center: Option<Pos>,
}

impl EBox {
    /// Empty box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Box with the given lower-left and upper-right corners.
    pub fn from_min_max(min: Pos, max: Pos) -> Self {
        Self {
            rect: Some(Rect::new(min, max)),
            center: None,
        }
    }

    /// Box of a raster given its corners. Each side is placed at the middle of the matching pair of corners, so
    /// that a slightly skewed raster still gets a sensible box.
    pub fn from_corners(corners: &CornerCoordinates) -> Self {
        let CornerCoordinates {
            upper_left: ul,
            lower_left: ll,
            lower_right: lr,
            upper_right: ur,
            center,
        } = *corners;

        Self {
            rect: Some(Rect::new(
                Pos::new((ul.x() + ll.x()) / 2.0, (ll.y() + lr.y()) / 2.0),
                Pos::new((lr.x() + ur.x()) / 2.0, (ul.y() + ur.y()) / 2.0),
            )),
            center,
        }
    }

    /// True until a position is bound in.
    pub fn is_empty(&self) -> bool {
        self.rect.is_none()
    }

    /// Lower-left corner.
    pub fn min(&self) -> Option<Pos> {
        self.rect.map(|r| r.min)
    }

    /// Upper-right corner.
    pub fn max(&self) -> Option<Pos> {
        self.rect.map(|r| r.max)
    }

    fn non_empty(&self) -> Result<&Rect, ChartGeoTypesError> {
        self.rect.as_ref().ok_or(ChartGeoTypesError::EmptyBox)
    }

    /// Widens the box to cover `pos`.
    pub fn bound(&mut self, pos: &Pos) {
        match &mut self.rect {
            Some(rect) => rect.bound(pos),
            None => self.rect = Some(Rect::from_pos(pos)),
        }
    }

    /// Smallest box covering both. The reported center is dropped.
    pub fn union(&self, other: &EBox) -> EBox {
        let rect = match (self.rect, other.rect) {
            (Some(a), Some(b)) => Some(a.merge(&b)),
            (a, b) => a.or(b),
        };

        Self { rect, center: None }
    }

    /// True if `small` is inside this box without touching any of its sides.
    pub fn includes(&self, small: &EBox) -> Result<bool, ChartGeoTypesError> {
        Ok(self.non_empty()?.strictly_contains(small.non_empty()?))
    }

    /// Largest difference between matching side coordinates.
    pub fn distance(&self, other: &EBox) -> Result<f64, ChartGeoTypesError> {
        Ok(self.non_empty()?.distance(other.non_empty()?))
    }

    /// Area in square planar units.
    pub fn area(&self) -> Result<f64, ChartGeoTypesError> {
        Ok(self.non_empty()?.area())
    }

    /// Reported center if any, midpoint otherwise.
    pub fn center(&self) -> Result<Pos, ChartGeoTypesError> {
        let rect = self.non_empty()?;
        Ok(self.center.unwrap_or_else(|| rect.center()))
    }

    /// Closed counter-clockwise polygon of the box.
    pub fn polygon(&self) -> Result<Polygon, ChartGeoTypesError> {
        Ok(Polygon::new(self.non_empty()?.ring(), vec![]))
    }

    /// Geographic box covering the unprojected corners.
    pub fn unproject<P: Projection + ?Sized>(&self, projection: &P) -> GBox {
        match self.rect {
            Some(r) => [projection.unproject(&r.min), projection.unproject(&r.max)]
                .into_iter()
                .collect(),
            None => GBox::new(),
        }
    }
}

impl FromIterator<Pos> for EBox {
    fn from_iter<T: IntoIterator<Item = Pos>>(iter: T) -> Self {
        Self {
            rect: Rect::from_points(iter),
            center: None,
        }
    }
}

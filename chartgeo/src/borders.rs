//! Width of the margins around the map frame of a scanned chart, used to georeference a raster from the known
//! extent of its frame.

use crate::error::ChartGeoError;
use chartgeo_types::{ChartGeoTypesError, EBox, Pos};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

lazy_static! {
    static ref DIFFERENCE: Regex = Regex::new(r"^(\d+)\s*-\s*(\d+)$").expect("valid regex");
}

/// Margin width in pixels, given either directly or as the difference of two pixel positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBorder", into = "String")]
pub enum BorderValue {
    /// Literal width.
    Pixels(i64),
    /// `a - b`, typically the image size minus the position of the frame.
    Difference(i64, i64),
}

impl BorderValue {
    /// Width in pixels.
    pub fn pixels(&self) -> i64 {
        match *self {
            BorderValue::Pixels(n) => n,
            BorderValue::Difference(a, b) => a - b,
        }
    }

    /// Rejects negative widths.
    fn validated(self) -> Result<Self, ChartGeoError> {
        if self.pixels() < 0 {
            return Err(ChartGeoError::InvalidBorder(String::from(self)));
        }

        Ok(self)
    }
}

impl FromStr for BorderValue {
    type Err = ChartGeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse() {
            return BorderValue::Pixels(n).validated();
        }

        let invalid = || ChartGeoError::InvalidBorder(s.to_string());
        let captures = DIFFERENCE.captures(s).ok_or_else(invalid)?;
        let a = captures[1].parse().map_err(|_| invalid())?;
        let b = captures[2].parse().map_err(|_| invalid())?;

        BorderValue::Difference(a, b).validated()
    }
}

impl From<BorderValue> for String {
    fn from(value: BorderValue) -> Self {
        match value {
            BorderValue::Pixels(n) => n.to_string(),
            BorderValue::Difference(a, b) => format!("{a}-{b}"),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBorder {
    Pixels(i64),
    Expression(String),
}

impl TryFrom<RawBorder> for BorderValue {
    type Error = ChartGeoError;

    fn try_from(value: RawBorder) -> Result<Self, Self::Error> {
        match value {
            RawBorder::Pixels(n) => BorderValue::Pixels(n).validated(),
            RawBorder::Expression(s) => s.parse(),
        }
    }
}

/// Margins of a chart image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borders {
    /// Left margin.
    pub left: BorderValue,
    /// Bottom margin.
    pub bottom: BorderValue,
    /// Right margin.
    pub right: BorderValue,
    /// Top margin.
    pub top: BorderValue,
}

impl Borders {
    /// Planar box of the whole image given the box of its map frame and the image size in pixels.
    pub fn outer_ebox(&self, frame: &EBox, size: [u32; 2]) -> Result<EBox, ChartGeoError> {
        let (Some(min), Some(max)) = (frame.min(), frame.max()) else {
            return Err(ChartGeoTypesError::EmptyBox.into());
        };

        let (left, bottom, right, top) = (
            self.left.validated()?.pixels(),
            self.bottom.validated()?.pixels(),
            self.right.validated()?.pixels(),
            self.top.validated()?.pixels(),
        );
        let no_frame = || {
            ChartGeoError::InvalidBorder(format!(
                "borders leave no frame in a {}x{} image",
                size[0], size[1]
            ))
        };
        let frame_width = i64::from(size[0])
            .checked_sub(left)
            .and_then(|w| w.checked_sub(right))
            .filter(|w| *w > 0)
            .ok_or_else(no_frame)?;
        let frame_height = i64::from(size[1])
            .checked_sub(top)
            .and_then(|h| h.checked_sub(bottom))
            .filter(|h| *h > 0)
            .ok_or_else(no_frame)?;

        let res_x = (max.x() - min.x()) / frame_width as f64;
        let res_y = (max.y() - min.y()) / frame_height as f64;

        Ok(EBox::from_min_max(
            Pos::new(min.x() - left as f64 * res_x, min.y() - bottom as f64 * res_y),
            Pos::new(max.x() + right as f64 * res_x, max.y() + top as f64 * res_y),
        ))
    }
}

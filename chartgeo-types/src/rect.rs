use crate::position::{Pos, Precision};
use serde::{Deserialize, Serialize};

/// Non-empty axis-aligned rectangle, the common core of [`GBox`](crate::GBox) and [`EBox`](crate::EBox).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// South-west (lower-left) corner.
    pub min: Pos,
    /// North-east (upper-right) corner.
    pub max: Pos,
}

impl Rect {
    /// Creates a rectangle from its corners. The corners are taken as is.
    pub fn new(min: Pos, max: Pos) -> Self {
        Self { min, max }
    }

    /// Degenerate rectangle covering one position.
    pub fn from_pos(pos: &Pos) -> Self {
        Self {
            min: *pos,
            max: *pos,
        }
    }

    /// Smallest rectangle covering all `points`, `None` if there are none.
    pub fn from_points(points: impl IntoIterator<Item = Pos>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut rect = Self::from_pos(&first);
        for p in points {
            rect.bound(&p);
        }

        Some(rect)
    }

    /// Widens the rectangle to cover `pos`.
    ///
    /// A NaN coordinate, on either side, stays NaN.
    pub fn bound(&mut self, pos: &Pos) {
        self.min = Pos::new(nan_min(self.min.x(), pos.x()), nan_min(self.min.y(), pos.y()));
        self.max = Pos::new(nan_max(self.max.x(), pos.x()), nan_max(self.max.y(), pos.y()));
    }

    /// Smallest rectangle covering both.
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = *self;
        merged.bound(&other.min);
        merged.bound(&other.max);
        merged
    }

    /// Common part of the two rectangles. Touching rectangles share a degenerate rectangle.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let min = Pos::new(
            self.min.x().max(other.min.x()),
            self.min.y().max(other.min.y()),
        );
        let max = Pos::new(
            self.max.x().min(other.max.x()),
            self.max.y().min(other.max.y()),
        );

        if min.x() <= max.x() && min.y() <= max.y() {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// True if `small` lies inside without touching any side.
    pub fn strictly_contains(&self, small: &Self) -> bool {
        self.min.x() < small.min.x()
            && self.min.y() < small.min.y()
            && self.max.x() > small.max.x()
            && self.max.y() > small.max.y()
    }

    /// Largest absolute difference between matching coordinates. NaN if any coordinate is NaN.
    pub fn distance(&self, other: &Self) -> f64 {
        [
            self.min.x() - other.min.x(),
            self.min.y() - other.min.y(),
            self.max.x() - other.max.x(),
            self.max.y() - other.max.y(),
        ]
        .into_iter()
        .map(f64::abs)
        .fold(0.0, nan_max)
    }

    /// Width.
    pub fn dx(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    /// Height.
    pub fn dy(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    /// Product of width and height.
    pub fn area(&self) -> f64 {
        self.dx() * self.dy()
    }

    /// Midpoint.
    pub fn center(&self) -> Pos {
        Pos::new(
            (self.min.x() + self.max.x()) / 2.0,
            (self.min.y() + self.max.y()) / 2.0,
        )
    }

    /// Rounds both corners.
    pub fn round(&self, precision: Precision) -> Self {
        Self {
            min: self.min.round(precision),
            max: self.max.round(precision),
        }
    }

    /// Closed counter-clockwise ring starting at the upper-left corner.
    pub fn ring(&self) -> Vec<Pos> {
        let upper_left = Pos::new(self.min.x(), self.max.y());
        vec![
            upper_left,
            self.min,
            Pos::new(self.max.x(), self.min.y()),
            self.max,
            upper_left,
        ]
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Rect {
        Rect::new(Pos::new(x_min, y_min), Pos::new(x_max, y_max))
    }

    #[test]
    fn from_points() {
        let points = [Pos::new(1.0, 5.0), Pos::new(-2.0, 3.0), Pos::new(4.0, -1.0)];
        assert_eq!(
            Rect::from_points(points),
            Some(rect(-2.0, -1.0, 4.0, 5.0))
        );
        assert_eq!(Rect::from_points(std::iter::empty()), None);
    }

    #[test]
    fn intersection() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(
            a.intersection(&rect(5.0, 5.0, 15.0, 15.0)),
            Some(rect(5.0, 5.0, 10.0, 10.0))
        );
        assert_eq!(
            a.intersection(&rect(10.0, 0.0, 20.0, 10.0)),
            Some(rect(10.0, 0.0, 10.0, 10.0))
        );
        assert_eq!(a.intersection(&rect(11.0, 0.0, 20.0, 10.0)), None);
    }

    #[test]
    fn distance() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(1.0, -3.0, 10.0, 12.0);
        assert_eq!(a.distance(&b), 3.0);
        assert_eq!(b.distance(&a), 3.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn nan_coordinates_propagate() {
        let a = rect(0.0, 0.0, 10.0, f64::NAN);
        let b = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.distance(&b).is_nan());
        assert!(b.distance(&a).is_nan());
        assert!(!(a.distance(&b) < 1000.0));

        let mut bounded = Rect::from_pos(&Pos::new(0.0, 0.0));
        bounded.bound(&Pos::new(5.0, f64::NAN));
        assert_eq!(bounded.min.x(), 0.0);
        assert_eq!(bounded.max.x(), 5.0);
        assert!(bounded.min.y().is_nan());
        assert!(bounded.max.y().is_nan());

        let mut seeded = Rect::from_pos(&Pos::new(f64::NAN, 1.0));
        seeded.bound(&Pos::new(2.0, 3.0));
        assert!(seeded.min.x().is_nan());
        assert_eq!(seeded.max.y(), 3.0);
    }

    #[test]
    fn ring_is_closed_and_ccw() {
        let ring = rect(0.0, 0.0, 2.0, 1.0).ring();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
        assert_eq!(ring[1], Pos::new(0.0, 0.0));
        assert_eq!(ring[3], Pos::new(2.0, 1.0));
    }
}

//! Half-open line segments, see [`Segment`].

use crate::error::ChartGeoTypesError;
use crate::position::Pos;
use crate::rect::Rect;
use nalgebra::Vector2;

/// A straight segment from `.0` to `.1`.
///
/// The segment contains its first end but not its second one, so that consecutive edges of a ring never both
/// report a crossing at their shared vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment(pub Pos, pub Pos);

/// Crossing point of two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentIntersection {
    /// Where the segments cross.
    pub pos: Pos,
    /// Parameter of the crossing along the first segment, in `[0, 1)`.
    pub u: f64,
    /// Parameter of the crossing along the second segment, in `[0, 1)`.
    pub v: f64,
}

impl Segment {
    fn vector(&self) -> Vector2<f64> {
        self.1 - self.0
    }

    fn bounding_rect(&self) -> Rect {
        let mut rect = Rect::from_pos(&self.0);
        rect.bound(&self.1);
        rect
    }

    /// Returns the crossing point with `other`, if any.
    ///
    /// Parallel segments never intersect, even when they are collinear and overlap.
    pub fn intersects(&self, other: &Segment) -> Option<SegmentIntersection> {
        self.bounding_rect().intersection(&other.bounding_rect())?;

        let va = self.vector();
        let vb = other.vector();
        let ab = other.0 - self.0;

        let denominator = va.perp(&vb);
        if denominator == 0.0 {
            return None;
        }

        let u = ab.perp(&vb) / denominator;
        let v = ab.perp(&va) / denominator;
        if (0.0..1.0).contains(&u) && (0.0..1.0).contains(&v) {
            Some(SegmentIntersection {
                pos: self.0 + va * u,
                u,
                v,
            })
        } else {
            None
        }
    }

    /// Signed distance from `pos` to the line carrying the segment, positive on the left side.
    pub fn distance_pos_to_line(&self, pos: &Pos) -> Result<f64, ChartGeoTypesError> {
        if self.0 == self.1 {
            return Err(ChartGeoTypesError::DegenerateSegment);
        }

        let ab = self.vector();
        Ok(ab.perp(&(*pos - self.0)) / ab.norm())
    }

    /// Shortest euclidian distance between `pos` and the segment:
    ///
    /// * if the normal from the point to the segment ends inside the segment, the length of the normal
    /// * otherwise the distance to the closest end
    ///
    /// A zero-length segment is a point.
    pub fn distance_to_pos(&self, pos: &Pos) -> f64 {
        if self.0 == self.1 {
            return self.0.distance(pos);
        }

        let ab = self.vector();
        let ap = *pos - self.0;
        let u = ap.dot(&ab) / ab.dot(&ab);
        if u < 0.0 {
            self.0.distance(pos)
        } else if u > 1.0 {
            self.1.distance(pos)
        } else {
            (ab.perp(&ap) / ab.norm()).abs()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use assert_matches::assert_matches;

    fn seg(a: [f64; 2], b: [f64; 2]) -> Segment {
        Segment(a.into(), b.into())
    }

    #[test]
    fn crossing() {
        let i = seg([0.0, 0.0], [10.0, 0.0])
            .intersects(&seg([5.0, -5.0], [5.0, 5.0]))
            .unwrap();
        assert_eq!(i.pos, Pos::new(5.0, 0.0));
        assert_eq!(i.u, 0.5);
        assert_eq!(i.v, 0.5);
    }

    #[test]
    fn oblique_crossing() {
        let i = seg([0.0, 0.0], [10.0, 0.0])
            .intersects(&seg([0.0, -5.0], [10.0, 5.0]))
            .unwrap();
        assert_eq!(i.pos, Pos::new(5.0, 0.0));
        assert_eq!(i.u, 0.5);
        assert_eq!(i.v, 0.5);

        let i = seg([0.0, 0.0], [4.0, 4.0])
            .intersects(&seg([0.0, 3.0], [3.0, 0.0]))
            .unwrap();
        assert_abs_diff_eq!(i.pos.x(), 1.5);
        assert_abs_diff_eq!(i.pos.y(), 1.5);
        assert_abs_diff_eq!(i.u, 0.375);
        assert_abs_diff_eq!(i.v, 0.5);
    }

    #[test]
    fn parallel_and_collinear() {
        let base = seg([0.0, 0.0], [10.0, 0.0]);
        assert_eq!(base.intersects(&seg([0.0, 1.0], [10.0, 1.0])), None);
        assert_eq!(base.intersects(&seg([5.0, 0.0], [15.0, 0.0])), None);
    }

    #[test]
    fn half_open_ends() {
        let base = seg([0.0, 0.0], [10.0, 0.0]);
        // on the first end of both segments
        let i = base.intersects(&seg([0.0, 0.0], [0.0, 5.0])).unwrap();
        assert_eq!((i.u, i.v), (0.0, 0.0));
        // on the second end of the base segment
        assert_eq!(base.intersects(&seg([10.0, -5.0], [10.0, 5.0])), None);
        // on the second end of the other segment
        assert_eq!(base.intersects(&seg([5.0, 5.0], [5.0, 0.0])), None);
    }

    #[test]
    fn disjoint_bounding_boxes() {
        let base = seg([0.0, 0.0], [10.0, 0.0]);
        assert_eq!(base.intersects(&seg([20.0, -5.0], [20.0, 5.0])), None);
    }

    #[test]
    fn distance_to_line_is_signed() {
        let base = seg([0.0, 0.0], [10.0, 0.0]);
        assert_eq!(base.distance_pos_to_line(&Pos::new(3.0, 2.0)), Ok(2.0));
        assert_eq!(base.distance_pos_to_line(&Pos::new(30.0, -2.0)), Ok(-2.0));
        assert_matches!(
            seg([1.0, 1.0], [1.0, 1.0]).distance_pos_to_line(&Pos::new(0.0, 0.0)),
            Err(ChartGeoTypesError::DegenerateSegment)
        );
    }

    #[test]
    fn distance_to_pos() {
        let base = seg([0.0, 0.0], [10.0, 0.0]);
        assert_eq!(base.distance_to_pos(&Pos::new(5.0, -3.0)), 3.0);
        assert_eq!(base.distance_to_pos(&Pos::new(-3.0, 4.0)), 5.0);
        assert_eq!(base.distance_to_pos(&Pos::new(13.0, 4.0)), 5.0);
        assert_eq!(base.distance_to_pos(&Pos::new(10.0, 0.0)), 0.0);

        let point = seg([1.0, 1.0], [1.0, 1.0]);
        assert_eq!(point.distance_to_pos(&Pos::new(4.0, 5.0)), 5.0);
        assert_eq!(point.distance_to_pos(&Pos::new(1.0, 1.0)), 0.0);
    }
}

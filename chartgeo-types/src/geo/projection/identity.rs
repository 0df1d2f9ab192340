use super::Projection;
use crate::position::Pos;

/// Degrees, longitude first. Projecting is the identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct LonLatDd;

impl Projection for LonLatDd {
    fn project(&self, input: &Pos) -> Pos {
        *input
    }

    fn unproject(&self, input: &Pos) -> Pos {
        *input
    }
}

/// Degrees, latitude first. Both directions swap the axes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatLonDd;

impl Projection for LatLonDd {
    fn project(&self, input: &Pos) -> Pos {
        Pos::new(input.y(), input.x())
    }

    fn unproject(&self, input: &Pos) -> Pos {
        Pos::new(input.y(), input.x())
    }
}

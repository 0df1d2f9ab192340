use crate::gbox::GBox;
use crate::position::Pos;
use crate::segment::Segment;

/// Polygon: an exterior ring followed by zero or more holes.
///
/// Rings are expected closed (first position repeated at the end) as in GeoJSON, but open rings are treated as
/// implicitly closed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    rings: Vec<Vec<Pos>>,
}

impl Polygon {
    /// Creates a polygon from its exterior ring and holes.
    pub fn new(exterior: Vec<Pos>, holes: Vec<Vec<Pos>>) -> Self {
        let mut rings = Vec::with_capacity(holes.len() + 1);
        rings.push(exterior);
        rings.extend(holes);
        Self { rings }
    }

    /// Creates a polygon from GeoJSON-ordered rings, exterior first.
    pub fn from_rings(rings: Vec<Vec<Pos>>) -> Self {
        Self { rings }
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[Vec<Pos>] {
        &self.rings
    }

    /// Exterior ring, empty for an empty polygon.
    pub fn exterior(&self) -> &[Pos] {
        self.rings.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// Holes.
    pub fn holes(&self) -> &[Vec<Pos>] {
        self.rings.get(1..).unwrap_or_default()
    }

    /// Positions of all rings, in order.
    pub fn positions(&self) -> impl Iterator<Item = &Pos> + '_ {
        self.rings.iter().flatten()
    }

    /// Edges of all rings.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.rings.iter().flat_map(|ring| ring_segments(ring))
    }

    /// Bounding box of the exterior ring.
    pub fn bbox(&self) -> GBox {
        self.exterior().iter().copied().collect()
    }

    /// Even-odd test: inside the exterior ring and outside every hole.
    pub fn contains_pos(&self, pos: &Pos) -> bool {
        ring_contains(self.exterior(), pos) && !self.holes().iter().any(|h| ring_contains(h, pos))
    }

    /// True if the two polygons share some area or boundary crossing.
    pub fn inters(&self, other: &Polygon) -> bool {
        if self.bbox().intersection(&other.bbox()).is_none() {
            return false;
        }

        if other.positions().any(|p| self.contains_pos(p)) {
            return true;
        }
        if self.positions().any(|p| other.contains_pos(p)) {
            return true;
        }

        self.segments()
            .any(|a| other.segments().any(|b| a.intersects(&b).is_some()))
    }
}

/// Set of polygons.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPolygon(pub Vec<Polygon>);

impl MultiPolygon {
    /// Constituent polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.0
    }

    /// True if any part intersects `polygon`.
    pub fn inters_polygon(&self, polygon: &Polygon) -> bool {
        self.0.iter().any(|p| p.inters(polygon))
    }

    /// True if any pair of parts intersects.
    pub fn inters(&self, other: &MultiPolygon) -> bool {
        other.0.iter().any(|p| self.inters_polygon(p))
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(value: Vec<Polygon>) -> Self {
        Self(value)
    }
}

/// Edges of a ring, including the closing edge when the ring is open.
pub fn ring_segments(ring: &[Pos]) -> impl Iterator<Item = Segment> + '_ {
    let closing = match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 && first != last => Some(Segment(*last, *first)),
        _ => None,
    };

    ring.windows(2)
        .map(|pair| Segment(pair[0], pair[1]))
        .chain(closing)
}

/// Ray casting (PNPOLY) point in ring test.
///
/// A position on a left or bottom edge is inside, one on a right or top edge is outside.
pub fn ring_contains(ring: &[Pos], pos: &Pos) -> bool {
    let (x, y) = (pos.x(), pos.y());
    let mut inside = false;
    let Some(mut j) = ring.len().checked_sub(1) else {
        return false;
    };

    for (i, pi) in ring.iter().enumerate() {
        let pj = &ring[j];
        let (xi, yi, xj, yj) = (pi.x(), pi.y(), pj.x(), pj.y());
        if ((yi <= y && y < yj) || (yj <= y && y < yi)) && x < (xj - xi) * (y - yi) / (yj - yi) + xi
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

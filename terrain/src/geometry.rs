use rand::Rng;

// A grid position, (row, column) = (y, x).
// Signed so the cross product below never underflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub y: i64,
    pub x: i64,
}

impl Point {
    pub const fn new(y: i64, x: i64) -> Self {
        Self { y, x }
    }

    pub fn from_cell(y: usize, x: usize) -> Self {
        Self::new(y as i64, x as i64)
    }
}

// The four outer edges of the grid, in index order 0..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,    // y = 0
    Bottom, // y = height - 1
    Left,   // x = 0
    Right,  // x = width - 1
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    // Top/Bottom run along x; Left/Right run along y
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

// Corner points are permitted only when both edges come from the same group,
// {Top, Bottom} or {Left, Right}. Otherwise a shared corner could put both
// endpoints on one edge.
pub fn corners_allowed(entry: Edge, exit: Edge) -> bool {
    entry.is_horizontal() == exit.is_horizontal()
}

// Random coordinate along an edge of `len` cells.
// Without corners the endpoints 0 and len-1 are excluded, unless that would
// leave nothing to pick from (edges shorter than 3 cells).
fn sample_along<R: Rng + ?Sized>(rng: &mut R, len: usize, corner_allowed: bool) -> i64 {
    let len = len as i64;
    if corner_allowed || len < 3 {
        rng.gen_range(0..len)
    } else {
        rng.gen_range(1..len - 1)
    }
}

pub fn sample_boundary_point<R: Rng + ?Sized>(
    rng: &mut R,
    edge: Edge,
    corner_allowed: bool,
    width: usize,
    height: usize,
) -> Point {
    match edge {
        Edge::Top => Point::new(0, sample_along(rng, width, corner_allowed)),
        Edge::Bottom => Point::new(
            height as i64 - 1,
            sample_along(rng, width, corner_allowed),
        ),
        Edge::Left => Point::new(sample_along(rng, height, corner_allowed), 0),
        Edge::Right => Point::new(
            sample_along(rng, height, corner_allowed),
            width as i64 - 1,
        ),
    }
}

// Signed doubled area of triangle (p0, p1, p2).
// > 0: p2 is left of p0→p1, < 0: right, 0: collinear.
#[inline]
pub fn side_of(p0: Point, p1: Point, p2: Point) -> i64 {
    (p1.x - p0.x) * (p2.y - p0.y) - (p1.y - p0.y) * (p2.x - p0.x)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn sign(self) -> i64 {
        match self {
            Side::Left => 1,
            Side::Right => -1,
        }
    }

    // Whether a `side_of` result falls on this side; the line itself counts for both
    #[inline]
    pub fn contains(self, cross: i64) -> bool {
        cross * self.sign() >= 0
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) { Side::Left } else { Side::Right }
    }
}

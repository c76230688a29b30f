use rand::Rng;

use crate::MAX_ADJUST;
use crate::error::Result;
use crate::geometry::{Edge, Point, Side, corners_allowed, sample_boundary_point, side_of};
use crate::grid::HeightGrid;

// One fault line: a segment between two boundary points, the side that gets
// raised and by how much. Lives for a single sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultLine {
    pub entry: Point,
    pub exit: Point,
    pub side: Side,
    pub delta: i64,
}

impl FaultLine {
    // Sample a line whose endpoints sit on two distinct edges of a width×height grid
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: usize, height: usize) -> Self {
        // Distinct edges, uniformly without replacement
        let first = rng.gen_range(0..Edge::ALL.len());
        let second = (first + rng.gen_range(1..Edge::ALL.len())) % Edge::ALL.len();
        let (entry_edge, exit_edge) = (Edge::ALL[first], Edge::ALL[second]);

        let corner_allowed = corners_allowed(entry_edge, exit_edge);
        let entry = sample_boundary_point(rng, entry_edge, corner_allowed, width, height);
        let exit = sample_boundary_point(rng, exit_edge, corner_allowed, width, height);

        let delta = rng.gen_range(0..=MAX_ADJUST);
        let side = Side::random(rng);

        Self {
            entry,
            exit,
            side,
            delta,
        }
    }

    #[inline]
    pub fn covers(&self, p: Point) -> bool {
        self.side.contains(side_of(self.entry, self.exit, p))
    }

    // Raise every covered cell of the grid; returns how many cells were touched
    pub fn apply(&self, grid: &HeightGrid) -> Result<usize> {
        let mut raised = 0;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if self.covers(Point::from_cell(y, x)) {
                    grid.add(y, x, self.delta)?;
                    raised += 1;
                }
            }
        }
        Ok(raised)
    }
}

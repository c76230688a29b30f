use std::sync::atomic::{AtomicI64, Ordering};

use crate::MAX_ADJUST;
use crate::error::{Result, TerrainError};

// Shared height field: row-major arena of atomic cells, access as (y, x).
// Workers only ever touch cells through `add`, so no locking is needed.
pub struct HeightGrid {
    height: usize,
    width: usize,
    cells: Vec<AtomicI64>,
}

impl HeightGrid {
    pub fn new(height: usize, width: usize) -> Result<Self> {
        let len = match height.checked_mul(width) {
            Some(len) if height >= 1 && width >= 1 => len,
            _ => return Err(TerrainError::InvalidDimension { height, width }),
        };
        let cells = (0..len).map(|_| AtomicI64::new(0)).collect();
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, y: usize, x: usize) -> Option<usize> {
        (y < self.height && x < self.width).then(|| y * self.width + x)
    }

    // Atomically raise cell (y, x) by `delta` in [0, MAX_ADJUST].
    // Relaxed is enough: the final reads happen after the workers are joined.
    pub fn add(&self, y: usize, x: usize, delta: i64) -> Result<()> {
        match self.index(y, x) {
            Some(i) if (0..=MAX_ADJUST).contains(&delta) => {
                self.cells[i].fetch_add(delta, Ordering::Relaxed);
                Ok(())
            }
            _ => Err(TerrainError::OutOfRange {
                y,
                x,
                delta,
                height: self.height,
                width: self.width,
            }),
        }
    }

    pub fn get(&self, y: usize, x: usize) -> Option<i64> {
        self.index(y, x)
            .map(|i| self.cells[i].load(Ordering::Relaxed))
    }

    // Copy out every cell and compute (min, max) in the same pass.
    // Takes `&mut self` so it cannot run while any worker still borrows the grid.
    pub fn snapshot(&mut self) -> HeightSnapshot {
        let mut min = i64::MAX;
        let mut max = i64::MIN;
        let values: Vec<i64> = self
            .cells
            .iter_mut()
            .map(|cell| {
                let v = *cell.get_mut();
                min = min.min(v);
                max = max.max(v);
                v
            })
            .collect();

        HeightSnapshot {
            height: self.height,
            width: self.width,
            values,
            min,
            max,
        }
    }
}

// Read-only copy of a finished grid plus its global range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightSnapshot {
    pub height: usize,
    pub width: usize,
    // Flattened row-major: length = height×width
    pub values: Vec<i64>,
    pub min: i64,
    pub max: i64,
}

impl HeightSnapshot {
    pub fn get(&self, y: usize, x: usize) -> i64 {
        self.values[y * self.width + x]
    }
}

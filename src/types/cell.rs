//! Grid cell indices.

use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A grid cell. `i` is the column (x axis), `j` is the row (y axis).
///
/// Ordering is lexicographic on `(i, j)`. Serializes as `[i, j]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Cell {
    pub i: i32,
    pub j: i32,
}

impl Cell {
    pub const fn new(i: i32, j: i32) -> Self {
        Self { i, j }
    }

    /// Translate by an offset.
    #[inline]
    pub fn offset(self, di: i32, dj: i32) -> Self {
        Self::new(self.i + di, self.j + dj)
    }

    /// Euclidean distance between cell indices.
    #[inline]
    pub fn distance(self, other: Cell) -> f64 {
        let di = f64::from(self.i - other.i);
        let dj = f64::from(self.j - other.j);
        (di * di + dj * dj).sqrt()
    }

    /// Number of 4-connected steps between two cells.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.i.abs_diff(other.i) + self.j.abs_diff(other.j)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.i, self.j)
    }
}

impl From<[i32; 2]> for Cell {
    fn from([i, j]: [i32; 2]) -> Self {
        Self::new(i, j)
    }
}

impl From<Cell> for [i32; 2] {
    fn from(cell: Cell) -> Self {
        [cell.i, cell.j]
    }
}

impl From<IVec2> for Cell {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Cell> for IVec2 {
    fn from(cell: Cell) -> Self {
        IVec2::new(cell.i, cell.j)
    }
}

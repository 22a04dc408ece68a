use crate::types::{Cell, MapInfo};

/// Neighbor-generation contract the search strategies run over.
pub trait SearchGraph {
    fn info(&self) -> &MapInfo;

    fn width(&self) -> u32 {
        self.info().width
    }

    fn height(&self) -> u32 {
        self.info().height
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.i >= 0
            && cell.j >= 0
            && (cell.i as u32) < self.width()
            && (cell.j as u32) < self.height()
    }

    /// Admissible successors of `cell`, in a fixed order. Every returned
    /// cell must be in bounds.
    fn find_neighbors(&self, cell: Cell) -> Vec<Cell>;
}

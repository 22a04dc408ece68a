//! Per-call search state.

use crate::grid::Grid2d;
use crate::search::{trace_path, SearchResult};
use crate::types::{Cell, MapInfo};

/// Mutable overlay owned by a single search call: visited flags, parent
/// links and the expansion order. The graph itself is never written to.
#[derive(Debug, Clone)]
pub struct SearchContext {
    visited: Grid2d<bool>,
    parents: Grid2d<Option<Cell>>,
    visited_cells: Vec<Cell>,
}

impl SearchContext {
    pub fn new(info: &MapInfo) -> Self {
        Self {
            visited: Grid2d::filled(info.clone(), false),
            parents: Grid2d::filled(info.clone(), None),
            visited_cells: Vec::new(),
        }
    }

    /// Clear every flag, parent link and recorded expansion.
    pub fn reset(&mut self) {
        self.visited.fill(false);
        self.parents.fill(None);
        self.visited_cells.clear();
    }

    #[inline]
    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited[cell]
    }

    #[inline]
    pub fn mark_visited(&mut self, cell: Cell) {
        self.visited[cell] = true;
    }

    #[inline]
    pub fn set_parent(&mut self, cell: Cell, parent: Cell) {
        self.parents[cell] = Some(parent);
    }

    /// Predecessor of `cell`, or `None` for the start cell and for cells the
    /// search never reached.
    pub fn get_parent(&self, cell: Cell) -> Option<Cell> {
        self.parents.get(cell).copied().flatten()
    }

    #[inline]
    pub fn record_expansion(&mut self, cell: Cell) {
        self.visited_cells.push(cell);
    }

    /// Cells in the order they were expanded.
    pub fn visited_cells(&self) -> &[Cell] {
        &self.visited_cells
    }

    /// Result for a search that reached `goal`.
    pub fn finish(self, goal: Cell) -> SearchResult {
        let path = trace_path(&self, goal);
        self.into_result(path)
    }

    /// Result for a search that exhausted its frontier.
    pub fn exhausted(self) -> SearchResult {
        self.into_result(Vec::new())
    }

    fn into_result(self, path: Vec<Cell>) -> SearchResult {
        SearchResult {
            path,
            visited_cells: self.visited_cells,
        }
    }
}

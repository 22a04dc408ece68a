//! Plan files consumed by the web visualizer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::GridGraph;
use crate::search::{Algorithm, SearchResult};
use crate::types::{Cell, PlannerError};

/// Everything observable about one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub path: Vec<Cell>,
    pub visited_cells: Vec<Cell>,
    /// Per-step timings. The visualizer expects the key; it is always empty.
    pub dt: Vec<f64>,
    /// Map echo in the format of [`OccupancyGrid::as_map_string`](crate::grid::OccupancyGrid::as_map_string).
    pub map: String,
    pub start: Cell,
    pub goal: Cell,
    pub planning_algo: String,
}

impl PlanRecord {
    pub fn new(
        graph: &GridGraph,
        start: Cell,
        goal: Cell,
        result: &SearchResult,
        algorithm: Algorithm,
    ) -> Self {
        Self {
            path: result.path.clone(),
            visited_cells: result.visited_cells.clone(),
            dt: Vec::new(),
            map: graph.grid().as_map_string(),
            start,
            goal,
            planning_algo: algorithm.to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String, PlannerError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), PlannerError> {
        let path = path.as_ref();
        log::info!("saving planning data to {}", path.display());
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, PlannerError> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

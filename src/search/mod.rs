//! Graph search strategies over a [`SearchGraph`].
//!
//! Every strategy builds its own [`SearchContext`], so a shared graph is only
//! ever read. Use [`plan`] to validate endpoints before searching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::grid::{GridGraph, SearchGraph};
use crate::types::{Cell, PlannerError};

pub mod astar;
pub mod context;
pub mod path;
pub mod traversal;

pub use astar::a_star_search;
pub use context::SearchContext;
pub use path::trace_path;
pub use traversal::{breadth_first_search, depth_first_search};

/// Outcome of one search call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Start to goal inclusive; empty when the goal was not reached.
    pub path: Vec<Cell>,
    /// Cells in expansion order.
    pub visited_cells: Vec<Cell>,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path, `None` when no path was found.
    pub fn cost(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "dfs")]
    DepthFirst,
    #[serde(rename = "bfs")]
    BreadthFirst,
    #[default]
    #[serde(rename = "astar")]
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::DepthFirst,
        Algorithm::BreadthFirst,
        Algorithm::AStar,
    ];

    /// Tag written to plan files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
            Self::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth_first" | "depth-first" => Ok(Self::DepthFirst),
            "bfs" | "breadth_first" | "breadth-first" => Ok(Self::BreadthFirst),
            "astar" | "a_star" | "a*" => Ok(Self::AStar),
            _ => Err(PlannerError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Both endpoints lie on the map. Strategies return an empty result
/// otherwise.
fn endpoints_on_map<G>(graph: &G, start: Cell, goal: Cell) -> bool
where
    G: SearchGraph + ?Sized,
{
    let on_map = graph.in_bounds(start) && graph.in_bounds(goal);
    if !on_map {
        log::warn!("search endpoints {start} -> {goal} are not both on the map");
    }
    on_map
}

/// Run `algorithm` from `start` to `goal`. An off-map endpoint yields an
/// empty result; use [`plan`] to get an error instead.
pub fn search<G>(graph: &G, start: Cell, goal: Cell, algorithm: Algorithm) -> SearchResult
where
    G: SearchGraph + ?Sized,
{
    let result = match algorithm {
        Algorithm::DepthFirst => depth_first_search(graph, start, goal),
        Algorithm::BreadthFirst => breadth_first_search(graph, start, goal),
        Algorithm::AStar => a_star_search(graph, start, goal),
    };
    log::debug!(
        "{algorithm}: expanded {} cells, path of {} cells",
        result.visited_cells.len(),
        result.path.len()
    );
    result
}

/// Validate both endpoints against the map and the collision mask, then
/// search. An unreachable goal is an `Ok` result with an empty path.
pub fn plan(
    graph: &GridGraph,
    start: Cell,
    goal: Cell,
    algorithm: Algorithm,
) -> Result<SearchResult, PlannerError> {
    graph.validate_endpoints(start, goal)?;
    let result = search(graph, start, goal, algorithm);
    match result.cost() {
        Some(cost) => log::info!(
            "{algorithm}: path {start} -> {goal} with {cost} steps, {} cells expanded",
            result.visited_cells.len()
        ),
        None => log::warn!(
            "{algorithm}: no path {start} -> {goal}, {} cells expanded",
            result.visited_cells.len()
        ),
    }
    Ok(result)
}

//! Uninformed traversal: depth-first and breadth-first search.
//!
//! Both share one loop and differ only in frontier discipline. A cell is
//! marked visited and given its parent when it is pushed, so it enters the
//! frontier at most once.

use std::collections::VecDeque;

use crate::grid::SearchGraph;
use crate::search::{endpoints_on_map, SearchContext, SearchResult};
use crate::types::Cell;

/// Container of discovered but unexpanded cells.
trait Frontier {
    fn push(&mut self, cell: Cell);
    fn pop(&mut self) -> Option<Cell>;
}

/// LIFO: the last neighbor pushed is expanded first.
impl Frontier for Vec<Cell> {
    fn push(&mut self, cell: Cell) {
        Vec::push(self, cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        Vec::pop(self)
    }
}

/// FIFO: cells are expanded in non-decreasing depth.
impl Frontier for VecDeque<Cell> {
    fn push(&mut self, cell: Cell) {
        self.push_back(cell);
    }

    fn pop(&mut self) -> Option<Cell> {
        self.pop_front()
    }
}

fn traverse<G, F>(graph: &G, start: Cell, goal: Cell, mut frontier: F) -> SearchResult
where
    G: SearchGraph + ?Sized,
    F: Frontier,
{
    if !endpoints_on_map(graph, start, goal) {
        return SearchResult::default();
    }

    let mut ctx = SearchContext::new(graph.info());
    ctx.mark_visited(start);
    frontier.push(start);

    while let Some(cell) = frontier.pop() {
        ctx.record_expansion(cell);
        if cell == goal {
            return ctx.finish(goal);
        }

        for neighbor in graph.find_neighbors(cell) {
            if !ctx.is_visited(neighbor) {
                ctx.mark_visited(neighbor);
                ctx.set_parent(neighbor, cell);
                frontier.push(neighbor);
            }
        }
    }

    ctx.exhausted()
}

/// Depth-first search. Finds some path, not necessarily the shortest.
pub fn depth_first_search<G>(graph: &G, start: Cell, goal: Cell) -> SearchResult
where
    G: SearchGraph + ?Sized,
{
    traverse(graph, start, goal, Vec::<Cell>::new())
}

/// Breadth-first search. The path has the fewest possible edges.
pub fn breadth_first_search<G>(graph: &G, start: Cell, goal: Cell) -> SearchResult
where
    G: SearchGraph + ?Sized,
{
    traverse(graph, start, goal, VecDeque::<Cell>::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::test_support::open_graph;

    #[test]
    fn dfs_explores_last_pushed_neighbor_first() {
        let graph = open_graph(3, 1);
        let result = depth_first_search(&graph, Cell::new(1, 0), Cell::new(2, 0));
        // (2, 0) is pushed before (0, 0), so (0, 0) is expanded first.
        assert_eq!(
            result.visited_cells,
            vec![Cell::new(1, 0), Cell::new(0, 0), Cell::new(2, 0)]
        );
        assert_eq!(result.path, vec![Cell::new(1, 0), Cell::new(2, 0)]);
    }

    #[test]
    fn bfs_expands_in_neighbor_order() {
        let graph = open_graph(3, 3);
        let result = breadth_first_search(&graph, Cell::new(1, 1), Cell::new(1, 0));
        assert_eq!(
            result.visited_cells,
            vec![
                Cell::new(1, 1),
                Cell::new(2, 1),
                Cell::new(0, 1),
                Cell::new(1, 2),
                Cell::new(1, 0),
            ]
        );
        assert_eq!(result.path, vec![Cell::new(1, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn start_equals_goal() {
        let graph = open_graph(4, 4);
        let cell = Cell::new(2, 3);
        for result in [
            depth_first_search(&graph, cell, cell),
            breadth_first_search(&graph, cell, cell),
        ] {
            assert_eq!(result.path, vec![cell]);
            assert_eq!(result.visited_cells, vec![cell]);
        }
    }
}

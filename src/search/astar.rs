//! A* over a unit-cost 4-connected grid.
//!
//! The heuristic is the Euclidean distance between cell indices, which never
//! exceeds the 4-connected step count, so returned paths are shortest. Each
//! cell is expanded at most once: heap entries for already expanded cells are
//! dropped when popped. Among entries with equal `f`, the one pushed first is
//! expanded first.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::grid::{Grid2d, SearchGraph};
use crate::search::{endpoints_on_map, SearchContext, SearchResult};
use crate::types::Cell;

#[derive(Debug, Clone, Copy)]
struct OpenNode {
    f_cost: f64,
    g_cost: u32,
    seq: u64,
    cell: Cell,
}

impl Eq for OpenNode {}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap on (f_cost, seq).
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[inline]
fn heuristic(cell: Cell, goal: Cell) -> f64 {
    cell.distance(goal)
}

/// A* search with unit edge costs.
pub fn a_star_search<G>(graph: &G, start: Cell, goal: Cell) -> SearchResult
where
    G: SearchGraph + ?Sized,
{
    if !endpoints_on_map(graph, start, goal) {
        return SearchResult::default();
    }

    // Visited flags in the context mark closed (expanded) cells.
    let mut ctx = SearchContext::new(graph.info());
    let mut g_score: Grid2d<Option<u32>> = Grid2d::filled(graph.info().clone(), None);
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;

    g_score[start] = Some(0);
    open.push(OpenNode {
        f_cost: heuristic(start, goal),
        g_cost: 0,
        seq,
        cell: start,
    });

    while let Some(node) = open.pop() {
        let cell = node.cell;
        if ctx.is_visited(cell) {
            continue;
        }
        ctx.mark_visited(cell);
        ctx.record_expansion(cell);

        if cell == goal {
            return ctx.finish(goal);
        }

        let tentative = node.g_cost + 1;
        for neighbor in graph.find_neighbors(cell) {
            if ctx.is_visited(neighbor) {
                continue;
            }
            let improves = match g_score[neighbor] {
                Some(best) => tentative < best,
                None => true,
            };
            if improves {
                g_score[neighbor] = Some(tentative);
                ctx.set_parent(neighbor, cell);
                seq += 1;
                open.push(OpenNode {
                    f_cost: f64::from(tentative) + heuristic(neighbor, goal),
                    g_cost: tentative,
                    seq,
                    cell: neighbor,
                });
            }
        }
    }

    ctx.exhausted()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::test_support::{graph_from_rows, open_graph};

    #[test]
    fn heap_pops_lowest_f_then_earliest() {
        let mut heap = BinaryHeap::new();
        for (f_cost, seq) in [(3.0, 0), (1.0, 2), (1.0, 1), (2.0, 3)] {
            heap.push(OpenNode {
                f_cost,
                g_cost: 0,
                seq,
                cell: Cell::default(),
            });
        }
        let order: Vec<u64> = std::iter::from_fn(|| heap.pop()).map(|n| n.seq).collect();
        assert_eq!(order, vec![1, 2, 3, 0]);
    }

    #[test]
    fn straight_corridor_expands_only_the_path() {
        let graph = open_graph(6, 1);
        let result = a_star_search(&graph, Cell::new(0, 0), Cell::new(5, 0));
        assert_eq!(result.path.len(), 6);
        assert_eq!(result.visited_cells, result.path);
    }

    #[test]
    fn routes_around_a_wall() {
        // j = 0 is the first row.
        let graph = graph_from_rows(&[
            ".....",
            ".###.",
            ".#...",
            ".#.#.",
            "...#.",
        ]);
        let result = a_star_search(&graph, Cell::new(2, 2), Cell::new(0, 0));
        assert_eq!(result.cost(), Some(8));
        assert_eq!(result.path.first(), Some(&Cell::new(2, 2)));
        assert_eq!(result.path.last(), Some(&Cell::new(0, 0)));
    }

    #[test]
    fn no_duplicate_expansions() {
        let graph = graph_from_rows(&[
            "......",
            ".####.",
            "......",
            "####..",
            "......",
        ]);
        let result = a_star_search(&graph, Cell::new(0, 4), Cell::new(0, 0));
        let mut seen = result.visited_cells.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), result.visited_cells.len());
        assert!(result.is_found());
    }
}

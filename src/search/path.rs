use crate::search::SearchContext;
use crate::types::Cell;

/// Walk parent links back from `goal` and return the cells in start to goal
/// order.
pub fn trace_path(ctx: &SearchContext, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(parent) = ctx.get_parent(current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

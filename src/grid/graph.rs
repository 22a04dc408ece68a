//! Occupancy grid viewed as a 4-connected graph for a disk-shaped robot.

use glam::Vec2;

use crate::grid::{CollisionMask, OccupancyGrid, SearchGraph};
use crate::types::{Cell, MapInfo, PlannerError};

/// Successor order. DFS and BFS expansion order depends on it.
const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Occupancy grid plus the collision mask for the configured robot radius.
///
/// Searches only read from the graph, so one instance can back several
/// concurrent searches.
#[derive(Debug, Clone)]
pub struct GridGraph {
    grid: OccupancyGrid,
    mask: CollisionMask,
}

impl GridGraph {
    pub fn new(grid: OccupancyGrid, collision_radius: f32) -> Result<Self, PlannerError> {
        let mask = CollisionMask::new(collision_radius, grid.info())?;
        Ok(Self { grid, mask })
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn mask(&self) -> &CollisionMask {
        &self.mask
    }

    pub fn collision_radius(&self) -> f32 {
        self.mask.radius()
    }

    pub fn world_to_cell(&self, x: f32, y: f32) -> Cell {
        self.grid.world_to_cell(Vec2::new(x, y))
    }

    pub fn cell_to_world(&self, cell: Cell) -> (f32, f32) {
        self.grid.cell_to_world(cell).into()
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.grid.in_bounds(cell)
    }

    /// The cell must be in bounds.
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.grid.is_occupied(cell)
    }

    /// Change the robot radius. The mask is only rebuilt when the new radius
    /// covers a different number of cells.
    pub fn set_collision_radius(&mut self, radius: f32) -> Result<(), PlannerError> {
        if self.mask.set_radius(radius, self.grid.info())? {
            log::debug!(
                "collision radius {radius} m -> {} cells ({} offsets)",
                self.mask.radius_cells(),
                self.mask.offset_count()
            );
        }
        Ok(())
    }

    /// True iff any in-bounds cell under the mask centered at `cell` is
    /// occupied. Mask cells that fall off the map never collide.
    pub fn check_collision(&self, cell: Cell) -> bool {
        self.mask.offsets().iter().any(|o| {
            let probe = cell.offset(o.x, o.y);
            self.grid.in_bounds(probe) && self.grid.is_occupied(probe)
        })
    }

    /// Check that both endpoints are on the map and clear of obstacles.
    pub fn validate_endpoints(&self, start: Cell, goal: Cell) -> Result<(), PlannerError> {
        if !self.in_bounds(start) {
            return Err(PlannerError::StartOutOfBounds(start));
        }
        if !self.in_bounds(goal) {
            return Err(PlannerError::GoalOutOfBounds(goal));
        }
        if self.check_collision(start) {
            return Err(PlannerError::StartInCollision(start));
        }
        if self.check_collision(goal) {
            return Err(PlannerError::GoalInCollision(goal));
        }
        Ok(())
    }
}

impl SearchGraph for GridGraph {
    fn info(&self) -> &MapInfo {
        self.grid.info()
    }

    fn find_neighbors(&self, cell: Cell) -> Vec<Cell> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(di, dj)| cell.offset(di, dj))
            .filter(|&n| self.in_bounds(n) && !self.check_collision(n))
            .collect()
    }
}

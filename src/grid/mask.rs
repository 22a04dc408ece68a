//! Disk-shaped robot footprint as a set of cell offsets.
//!
//! For a cell radius `r`, the mask covers the `(2r - 1) x (2r - 1)` window
//! centered on the robot cell and keeps every offset `(di, dj)` with
//! `di^2 + dj^2 <= (r - 1)^2`. A radius of one cell is just the robot cell.
//! The mask depends on the radius and the map's shape, never on its contents:
//! offsets further than `max(width, height) - 1` along either axis cannot
//! reach an in-bounds cell from an in-bounds center and are left out.

use glam::IVec2;

use crate::types::{MapInfo, PlannerError};

/// Convert a radius in meters to a cell count: `ceil(radius / resolution)`,
/// never less than one cell. Negative, non-finite, or radii whose cell count
/// does not fit in an `i32` are rejected.
pub fn collision_radius_to_cells(radius_m: f32, resolution: f32) -> Result<u32, PlannerError> {
    if !radius_m.is_finite() || radius_m < 0.0 {
        return Err(PlannerError::InvalidRadius(radius_m));
    }
    let cells = (radius_m / resolution).ceil();
    if !cells.is_finite() || f64::from(cells) > f64::from(i32::MAX) {
        return Err(PlannerError::InvalidRadius(radius_m));
    }
    Ok((cells as u32).max(1))
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollisionMask {
    radius_m: f32,
    radius_cells: u32,
    offsets: Vec<IVec2>,
}

impl CollisionMask {
    /// Build the mask for a radius in meters on a map of the given shape.
    pub fn new(radius_m: f32, info: &MapInfo) -> Result<Self, PlannerError> {
        let radius_cells = collision_radius_to_cells(radius_m, info.resolution)?;
        Ok(Self {
            radius_m,
            radius_cells,
            offsets: Self::disk_offsets(radius_cells, info),
        })
    }

    /// Switch to a new radius. The offsets are only rebuilt when the cell
    /// radius changes; returns whether they were.
    pub fn set_radius(&mut self, radius_m: f32, info: &MapInfo) -> Result<bool, PlannerError> {
        let radius_cells = collision_radius_to_cells(radius_m, info.resolution)?;
        self.radius_m = radius_m;
        if radius_cells == self.radius_cells {
            return Ok(false);
        }
        self.radius_cells = radius_cells;
        self.offsets = Self::disk_offsets(radius_cells, info);
        Ok(true)
    }

    fn disk_offsets(radius_cells: u32, info: &MapInfo) -> Vec<IVec2> {
        let full_reach = i64::from(radius_cells) - 1;
        let limit = full_reach * full_reach;
        let map_reach = i64::from(info.width.max(info.height)) - 1;
        let reach = full_reach.min(map_reach) as i32;

        let mut offsets = Vec::new();
        for dj in -reach..=reach {
            for di in -reach..=reach {
                let (di64, dj64) = (i64::from(di), i64::from(dj));
                if di64 * di64 + dj64 * dj64 <= limit {
                    offsets.push(IVec2::new(di, dj));
                }
            }
        }
        offsets
    }

    /// Radius in meters the mask was built for.
    pub fn radius(&self) -> f32 {
        self.radius_m
    }

    pub fn radius_cells(&self) -> u32 {
        self.radius_cells
    }

    /// Offsets relative to the robot cell.
    pub fn offsets(&self) -> &[IVec2] {
        &self.offsets
    }

    pub fn offset_count(&self) -> usize {
        self.offsets.len()
    }
}

//! Map metadata.

use glam::Vec2;

use crate::types::PlannerError;

#[derive(Debug, Clone, PartialEq)]
pub struct MapInfo {
    pub width: u32,
    pub height: u32,
    /// Meters per cell.
    pub resolution: f32,
    /// World position of the lower corner of cell (0, 0), in meters.
    pub origin: Vec2,
}

impl Default for MapInfo {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            resolution: 0.05,
            origin: Vec2::ZERO,
        }
    }
}

impl MapInfo {
    pub fn square(width: u32, resolution: f32) -> Self {
        Self {
            width,
            height: width,
            resolution,
            ..Default::default()
        }
    }

    /// Reject zero-sized maps and non-positive resolutions.
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.width == 0 || self.height == 0 {
            return Err(PlannerError::InvalidMetadata(format!(
                "map dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(PlannerError::InvalidMetadata(format!(
                "resolution must be positive, got {}",
                self.resolution
            )));
        }
        if !self.origin.is_finite() {
            return Err(PlannerError::InvalidMetadata(
                "origin must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of cells in the map.
    #[inline]
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

use std::ops::{Index, IndexMut};

use glam::Vec2;

use crate::types::{Cell, MapInfo, PlannerError};

/// Dense row-major 2D grid addressed by [`Cell`]. Cell `(i, j)` lives at
/// `j * width + i`.
#[derive(Debug, Clone)]
pub struct Grid2d<T> {
    info: MapInfo,
    data: Vec<T>,
}

impl<T> Grid2d<T> {
    pub fn new(info: MapInfo, data: Vec<T>) -> Result<Self, PlannerError> {
        info.validate()?;
        let expected_len = info.cell_count();
        if data.len() != expected_len {
            return Err(PlannerError::InvalidMetadata(format!(
                "data length {} does not match map size {}",
                data.len(),
                expected_len
            )));
        }

        Ok(Self { info, data })
    }

    /// Grid with every cell set to `value`. The metadata is trusted.
    pub fn filled(info: MapInfo, value: T) -> Self
    where
        T: Clone,
    {
        let data = vec![value; info.cell_count()];
        Self { info, data }
    }

    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// True iff `0 <= i < width` and `0 <= j < height`.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.i >= 0
            && cell.j >= 0
            && (cell.i as u32) < self.info.width
            && (cell.j as u32) < self.info.height
    }

    pub fn get(&self, cell: Cell) -> Option<&T> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some(&self.data[self.linear_index(cell)])
    }

    pub fn set(&mut self, cell: Cell, value: T) -> Result<(), PlannerError> {
        if !self.in_bounds(cell) {
            return Err(PlannerError::OutOfBounds(format!(
                "cell {} out of bounds for map {}x{}",
                cell, self.info.width, self.info.height
            )));
        }
        let idx = self.linear_index(cell);
        self.data[idx] = value;
        Ok(())
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    #[inline]
    fn linear_index(&self, cell: Cell) -> usize {
        (cell.j as usize) * (self.info.width as usize) + (cell.i as usize)
    }

    /// Cell containing a world position. No bounds check.
    pub fn world_to_cell(&self, pos: Vec2) -> Cell {
        let i = ((pos.x - self.info.origin.x) / self.info.resolution).floor() as i32;
        let j = ((pos.y - self.info.origin.y) / self.info.resolution).floor() as i32;
        Cell::new(i, j)
    }

    /// World position of the center of a cell.
    pub fn cell_to_world(&self, cell: Cell) -> Vec2 {
        Vec2::new(
            (cell.i as f32 + 0.5) * self.info.resolution + self.info.origin.x,
            (cell.j as f32 + 0.5) * self.info.resolution + self.info.origin.y,
        )
    }

    /// Row-major view of the data, row `j = 0` first.
    pub fn data(&self) -> &[T] {
        &self.data
    }
}

/// Panics if the cell is out of bounds.
impl<T> Index<Cell> for Grid2d<T> {
    type Output = T;

    #[inline]
    fn index(&self, cell: Cell) -> &T {
        assert!(self.in_bounds(cell), "cell {cell} out of bounds");
        &self.data[self.linear_index(cell)]
    }
}

impl<T> IndexMut<Cell> for Grid2d<T> {
    #[inline]
    fn index_mut(&mut self, cell: Cell) -> &mut T {
        assert!(self.in_bounds(cell), "cell {cell} out of bounds");
        let idx = self.linear_index(cell);
        &mut self.data[idx]
    }
}

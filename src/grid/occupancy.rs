use crate::grid::Grid2d;
use crate::types::{Cell, OCCUPANCY_THRESHOLD};

/// Grid of signed log-odds values. A cell is occupied iff its value is
/// strictly greater than [`OCCUPANCY_THRESHOLD`].
pub type OccupancyGrid = Grid2d<i8>;

impl OccupancyGrid {
    /// Whether an in-bounds cell is occupied. The caller checks bounds first.
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self[cell] > OCCUPANCY_THRESHOLD
    }

    /// Number of occupied cells in the whole map.
    pub fn occupied_count(&self) -> usize {
        self.data()
            .iter()
            .filter(|&&v| v > OCCUPANCY_THRESHOLD)
            .count()
    }

    /// Single-line serialization: `"{origin_x} {origin_y} {width} {height}
    /// {resolution}"` followed by every value, row `j = 0` first. Floats use
    /// their shortest form, so an integral origin is written as `0`, not `0.0`.
    pub fn as_map_string(&self) -> String {
        let info = self.info();
        let mut out = format!(
            "{} {} {} {} {}",
            info.origin.x, info.origin.y, info.width, info.height, info.resolution
        );
        for value in self.data() {
            out.push(' ');
            out.push_str(&value.to_string());
        }
        out
    }
}

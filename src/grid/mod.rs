pub mod graph;
pub mod grid2d;
pub mod mask;
pub mod occupancy;
pub mod traits;

pub use graph::GridGraph;
pub use grid2d::Grid2d;
pub use mask::{collision_radius_to_cells, CollisionMask};
pub use occupancy::OccupancyGrid;
pub use traits::SearchGraph;

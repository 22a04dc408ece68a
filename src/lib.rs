pub mod config;
pub mod export;
pub mod grid;
pub mod loaders;
pub mod search;
pub mod types;
pub mod visualization;

pub use config::PlannerConfig;
pub use export::PlanRecord;
pub use grid::{GridGraph, OccupancyGrid};
pub use loaders::{load_map, parse_map};
pub use search::{plan, search, Algorithm, SearchResult};
pub use types::{Cell, MapInfo, PlannerError};

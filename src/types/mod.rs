pub mod cell;
pub mod constants;
pub mod error;
pub mod info;

pub use cell::Cell;
pub use constants::*;
pub use error::PlannerError;
pub use info::MapInfo;

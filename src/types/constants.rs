/// Cells whose log-odds value is strictly greater than this are occupied.
pub const OCCUPANCY_THRESHOLD: i8 = 0;

pub const FREE: i8 = 0;
pub const OCCUPIED: i8 = 100;

/// Robot radius in meters used when none is configured.
pub const DEFAULT_COLLISION_RADIUS: f32 = 0.05;

pub const DEFAULT_PLAN_FILE: &str = "out.planner";

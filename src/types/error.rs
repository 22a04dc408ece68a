use thiserror::Error;

use crate::types::Cell;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("invalid collision radius: {0}")]
    InvalidRadius(f32),
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
    #[error("start cell {0} is outside the map")]
    StartOutOfBounds(Cell),
    #[error("goal cell {0} is outside the map")]
    GoalOutOfBounds(Cell),
    #[error("start cell {0} collides with an obstacle")]
    StartInCollision(Cell),
    #[error("goal cell {0} collides with an obstacle")]
    GoalInCollision(Cell),
    #[error("unknown planning algorithm: {0}")]
    UnknownAlgorithm(String),
}

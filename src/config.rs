//! YAML description of a planning run.
//!
//! ```yaml
//! map: maps/maze1.map
//! start: { cell: [0, 0] }
//! goal: { world: [-2.5, 2.0] }
//! algorithm: astar
//! collision_radius: 0.15
//! output: out.planner
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::grid::GridGraph;
use crate::search::Algorithm;
use crate::types::{Cell, PlannerError, DEFAULT_COLLISION_RADIUS, DEFAULT_PLAN_FILE};

/// Start or goal, given either as grid indices or a world position in meters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    Cell { cell: Cell },
    World { world: [f32; 2] },
}

impl Endpoint {
    pub fn resolve(&self, graph: &GridGraph) -> Cell {
        match *self {
            Self::Cell { cell } => cell,
            Self::World { world: [x, y] } => graph.world_to_cell(x, y),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlannerConfig {
    /// Map file; relative paths resolve against the config file's directory.
    pub map: PathBuf,
    pub start: Endpoint,
    pub goal: Endpoint,
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(
        default = "default_collision_radius",
        deserialize_with = "deserialize_radius"
    )]
    pub collision_radius: f32,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Optional PNG rendering of the plan.
    #[serde(default)]
    pub image: Option<PathBuf>,
}

fn default_collision_radius() -> f32 {
    DEFAULT_COLLISION_RADIUS
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_PLAN_FILE)
}

fn deserialize_radius<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = f32::deserialize(deserializer)?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(serde::de::Error::custom(
            "collision_radius must be a non-negative number",
        ))
    }
}

impl PlannerConfig {
    pub fn from_yaml(text: &str) -> Result<Self, PlannerError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, PlannerError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&text)?;
        config.map = resolve_relative(path, &config.map);
        log::debug!("loaded planner config from {}", path.display());
        Ok(config)
    }
}

fn resolve_relative(config_path: &Path, target: &Path) -> PathBuf {
    if target.is_absolute() {
        return target.to_path_buf();
    }

    match config_path.parent() {
        Some(parent) => parent.join(target),
        None => target.to_path_buf(),
    }
}

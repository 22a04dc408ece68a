//! Run one planning query and write the plan file.
//!
//! ```text
//! planner --map maze1.map --start 0 0 --goal 0 90 --algorithm bfs --radius 0.15
//! planner --config run.yaml
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use grid_planner::config::Endpoint;
use grid_planner::types::{DEFAULT_COLLISION_RADIUS, DEFAULT_PLAN_FILE};
use grid_planner::visualization::save_plan_image;
use grid_planner::{load_map, plan, Algorithm, Cell, GridGraph, PlanRecord, PlannerConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Grid path planning with DFS, BFS or A*", long_about = None)]
struct Args {
    /// YAML run description; command-line values override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Map file.
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Start cell as `I J`.
    #[arg(long, num_args = 2, value_names = ["I", "J"], allow_negative_numbers = true)]
    start: Option<Vec<i32>>,

    /// Goal cell as `I J`.
    #[arg(long, num_args = 2, value_names = ["I", "J"], allow_negative_numbers = true)]
    goal: Option<Vec<i32>>,

    /// dfs, bfs or astar.
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Robot radius in meters.
    #[arg(short, long)]
    radius: Option<f32>,

    /// Plan file to write.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also render the plan to a PNG.
    #[arg(long)]
    image: Option<PathBuf>,
}

/// Settings after merging the config file with command-line overrides.
struct Run {
    map: PathBuf,
    start: Endpoint,
    goal: Endpoint,
    algorithm: Algorithm,
    collision_radius: f32,
    output: PathBuf,
    image: Option<PathBuf>,
}

fn cell_arg(values: Vec<i32>) -> Endpoint {
    Endpoint::Cell {
        cell: Cell::new(values[0], values[1]),
    }
}

impl Run {
    fn from_args(args: Args) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Some(
                PlannerConfig::load(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
            ),
            None => None,
        };

        let map = match (args.map, &config) {
            (Some(map), _) => map,
            (None, Some(config)) => config.map.clone(),
            (None, None) => bail!("a map is required (--map or --config)"),
        };
        let start = match (args.start, &config) {
            (Some(values), _) => cell_arg(values),
            (None, Some(config)) => config.start,
            (None, None) => bail!("a start cell is required (--start or --config)"),
        };
        let goal = match (args.goal, &config) {
            (Some(values), _) => cell_arg(values),
            (None, Some(config)) => config.goal,
            (None, None) => bail!("a goal cell is required (--goal or --config)"),
        };

        Ok(Self {
            map,
            start,
            goal,
            algorithm: args
                .algorithm
                .or(config.as_ref().map(|c| c.algorithm))
                .unwrap_or_default(),
            collision_radius: args
                .radius
                .or(config.as_ref().map(|c| c.collision_radius))
                .unwrap_or(DEFAULT_COLLISION_RADIUS),
            output: args
                .output
                .or(config.as_ref().map(|c| c.output.clone()))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PLAN_FILE)),
            image: args.image.or(config.and_then(|c| c.image)),
        })
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() -> Result<()> {
    init_logging();
    let run = Run::from_args(Args::parse())?;

    let grid = load_map(&run.map)
        .with_context(|| format!("failed to load map {}", run.map.display()))?;
    let graph = GridGraph::new(grid, run.collision_radius)?;
    let start = run.start.resolve(&graph);
    let goal = run.goal.resolve(&graph);

    let result = plan(&graph, start, goal, run.algorithm)?;
    let record = PlanRecord::new(&graph, start, goal, &result, run.algorithm);
    record.write(&run.output)?;

    if let Some(image) = &run.image {
        save_plan_image(image, graph.grid(), &result, start, goal)?;
        log::info!("wrote plan image to {}", image.display());
    }

    match result.cost() {
        Some(cost) => println!(
            "{}: {} steps, {} cells expanded",
            run.algorithm,
            cost,
            result.visited_cells.len()
        ),
        None => println!(
            "{}: no path found, {} cells expanded",
            run.algorithm,
            result.visited_cells.len()
        ),
    }

    Ok(())
}

use std::path::{Path, PathBuf};

use grid_planner::search::{a_star_search, breadth_first_search, depth_first_search};
use grid_planner::{
    load_map, plan, search, Algorithm, Cell, GridGraph, PlanRecord, PlannerConfig, PlannerError,
};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn graph(name: &str, radius: f32) -> GridGraph {
    GridGraph::new(load_map(fixture(name)).unwrap(), radius).unwrap()
}

fn has_duplicates(cells: &[Cell]) -> bool {
    let mut sorted = cells.to_vec();
    sorted.sort();
    sorted.windows(2).any(|w| w[0] == w[1])
}

#[test]
fn open_grid_scenario() {
    let graph = graph("open.map", 1.0);
    let start = Cell::new(0, 0);
    let goal = Cell::new(4, 4);

    assert_eq!(breadth_first_search(&graph, start, goal).path.len(), 9);
    assert_eq!(a_star_search(&graph, start, goal).path.len(), 9);
    assert!(depth_first_search(&graph, start, goal).path.len() >= 9);
}

#[test]
fn wall_scenario() {
    let graph = graph("wall.map", 1.0);
    let start = Cell::new(0, 0);
    let goal = Cell::new(4, 0);

    for algorithm in Algorithm::ALL {
        let result = plan(&graph, start, goal, algorithm).unwrap();
        assert!(result.path.is_empty(), "{algorithm}");
        assert_eq!(result.visited_cells.len(), 10, "{algorithm}");
        assert!(result.visited_cells.iter().all(|c| c.i < 2));
        assert!(!has_duplicates(&result.visited_cells));
    }
}

#[test]
fn maze_shortest_paths_agree() {
    let graph = graph("maze.map", 0.1);
    let start = Cell::new(2, 2);
    let goal = Cell::new(0, 90);

    let bfs = plan(&graph, start, goal, Algorithm::BreadthFirst).unwrap();
    let astar = plan(&graph, start, goal, Algorithm::AStar).unwrap();
    let dfs = plan(&graph, start, goal, Algorithm::DepthFirst).unwrap();

    assert_eq!(bfs.cost(), Some(404));
    assert_eq!(astar.cost(), Some(404));
    assert!(dfs.cost().unwrap() >= 404);

    for result in [&bfs, &astar, &dfs] {
        assert!(!has_duplicates(&result.visited_cells));
        assert!(result.visited_cells.contains(&start));
        assert!(result.visited_cells.contains(&goal));
        assert_eq!(result.visited_cells.last(), Some(&goal));
        for step in result.path.windows(2) {
            assert_eq!(step[0].manhattan(step[1]), 1);
            assert!(!graph.check_collision(step[1]));
        }
    }

    // A* should not need to expand more than BFS on this map.
    assert!(astar.visited_cells.len() <= bfs.visited_cells.len());
}

#[test]
fn goal_inside_inflated_wall_is_rejected() {
    let graph = graph("maze.map", 0.1);
    // Row 15 is a wall; row 14 is within one cell of it.
    let err = plan(&graph, Cell::new(2, 2), Cell::new(50, 14), Algorithm::AStar).unwrap_err();
    assert!(matches!(err, PlannerError::GoalInCollision(_)));
}

#[test]
fn concurrent_searches_share_one_graph() {
    let graph = graph("maze.map", 0.1);
    let start = Cell::new(2, 2);
    let goal = Cell::new(0, 90);
    let expected = search(&graph, start, goal, Algorithm::BreadthFirst);

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| search(&graph, start, goal, Algorithm::BreadthFirst)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for result in results {
        assert_eq!(result, expected);
    }
}

#[test]
fn config_run_produces_plan_file() {
    let config = PlannerConfig::load(fixture("run.yaml")).unwrap();
    assert_eq!(config.algorithm, Algorithm::BreadthFirst);

    let graph = GridGraph::new(load_map(&config.map).unwrap(), config.collision_radius).unwrap();
    let start = config.start.resolve(&graph);
    let goal = config.goal.resolve(&graph);
    assert_eq!(goal, Cell::new(0, 90));

    let result = plan(&graph, start, goal, config.algorithm).unwrap();
    let record = PlanRecord::new(&graph, start, goal, &result, config.algorithm);

    let out = std::env::temp_dir().join(format!("grid_planner_{}.planner", std::process::id()));
    record.write(&out).unwrap();
    let back = PlanRecord::read(&out).unwrap();
    std::fs::remove_file(&out).ok();

    assert_eq!(back.planning_algo, "bfs");
    assert_eq!(back.path.len(), 405);
    assert_eq!(back.start, start);
    assert!(back.map.starts_with("-2.525 -2.525 100 100 0.05 "));
}

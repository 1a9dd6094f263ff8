use grid_astar::map::{load_map, parse_map};
use grid_astar::scenario::load_scenarios;
use grid_astar::solver::{astar::AstarSolver, GridSolver};
use grid_astar::{find_path, is_valid_path, Cell, Heuristic, MapFormatError, MOVING_AI_HEADER_LINES};
use std::fs;
use std::path::PathBuf;

const MAZE_MAP: &str = "type octile
height 5
width 5
map
.....
.@@@.
.....
.TTT.
.....
";

const MAZE_SCEN: &str = "version 1
0\tmaze.map\t5\t5\t0\t0\t4\t4\t5.65685425
0\tmaze.map\t5\t5\t0\t0\t0\t0\t0
0\tmaze.map\t5\t5\t4\t0\t0\t4\t5.65685425
";

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("grid_astar_{}_{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn maze_from_file() {
    let path = write_temp("maze.map", MAZE_MAP);
    let pathing_grid = load_map(&path, MOVING_AI_HEADER_LINES).unwrap();
    fs::remove_file(&path).unwrap();

    for heuristic in [Heuristic::Euclidean, Heuristic::Manhattan] {
        let path = find_path(&pathing_grid, Cell::new(0, 0), Cell::new(4, 4), heuristic).unwrap();
        assert_eq!(path.len(), 9);
        assert!(is_valid_path(&pathing_grid, &path));
        let path = find_path(&pathing_grid, Cell::new(0, 0), Cell::new(0, 0), heuristic).unwrap();
        assert_eq!(path, vec![Cell::new(0, 0)]);
    }
}

#[test]
fn scenarios_against_map() {
    let map_path = write_temp("scen_maze.map", MAZE_MAP);
    let scen_path = write_temp("maze.map.scen", MAZE_SCEN);
    let pathing_grid = load_map(&map_path, MOVING_AI_HEADER_LINES).unwrap();
    let scenarios = load_scenarios(&scen_path).unwrap();
    fs::remove_file(&map_path).unwrap();
    fs::remove_file(&scen_path).unwrap();

    assert_eq!(scenarios.len(), 3);
    let solver = AstarSolver::new(Heuristic::Manhattan);
    let lengths: Vec<usize> = scenarios
        .iter()
        .map(|s| {
            assert_eq!(s.map_width as usize, pathing_grid.cols());
            assert_eq!(s.map_height as usize, pathing_grid.rows());
            solver
                .get_path_length(&pathing_grid, s.start(), s.goal())
                .unwrap()
        })
        .collect();
    assert_eq!(lengths, vec![9, 1, 9]);
    for s in &scenarios {
        let cost = solver
            .get_path_and_cost(&pathing_grid, s.start(), s.goal())
            .unwrap()
            .1;
        // The octile reference length never exceeds the 4-connected cost
        assert!(s.optimal_length <= cost + 1e-6);
    }
}

#[test]
fn ragged_map_is_not_padded() {
    let text = "type octile\nheight 3\nwidth 4\nmap\n....\n...\n....\n";
    match parse_map(text, MOVING_AI_HEADER_LINES) {
        Err(MapFormatError::RaggedRow { line, .. }) => assert_eq!(line, 6),
        other => panic!("expected a ragged row error, got {other:?}"),
    }
}

#[test]
fn missing_files() {
    let missing = std::env::temp_dir().join("grid_astar_does_not_exist.map");
    assert!(matches!(
        load_map(&missing, MOVING_AI_HEADER_LINES),
        Err(MapFormatError::Io(_))
    ));
    assert!(matches!(load_scenarios(&missing), Err(MapFormatError::Io(_))));
}

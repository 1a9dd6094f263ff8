use grid_astar::map::load_map;
use grid_astar::solver::{astar::AstarSolver, GridSolver};
use grid_astar::{Cell, Heuristic, PathError, MOVING_AI_HEADER_LINES};
use std::process::ExitCode;

// Finds a path on a Moving AI map and prints its length in cells:
//
//     cargo run --example find_path -- <map_file> <start_row> <start_col> <goal_row> <goal_col> <heuristic>
//
// where heuristic is 0 (euclidean) or 1 (manhattan).

fn parse_coordinate(arg: &str) -> Option<i32> {
    arg.parse().ok()
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 7 {
        eprintln!("Usage: <map_file> <start_row> <start_col> <goal_row> <goal_col> <heuristic>");
        return ExitCode::FAILURE;
    }
    let coordinates: Option<Vec<i32>> = args[2..6].iter().map(|a| parse_coordinate(a)).collect();
    let Some(coordinates) = coordinates else {
        eprintln!("Coordinates must be integers");
        return ExitCode::FAILURE;
    };
    let heuristic: Heuristic = match args[6].parse() {
        Ok(h) => h,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let pathing_grid = match load_map(&args[1], MOVING_AI_HEADER_LINES) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Failed to load map file: {err}");
            return ExitCode::FAILURE;
        }
    };

    let start = Cell::new(coordinates[0], coordinates[1]);
    let goal = Cell::new(coordinates[2], coordinates[3]);
    match AstarSolver::new(heuristic).get_path_length(&pathing_grid, start, goal) {
        Ok(length) => println!("Path length: {length}"),
        Err(PathError::NoPathExists { .. }) => println!("No path found"),
        Err(err) => {
            println!("No path found: {err}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

//! # grid_astar
//!
//! Shortest paths on 4-connected occupancy grids using
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Every move between orthogonally
//! adjacent passable cells costs [EDGE_COST]; the search is guided by either the Euclidean or the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry), both of which are
//! admissible and consistent on such a grid, so returned paths are always shortest paths.
//!
//! Grids can be built in memory or read from plaintext maps (see [map]), including those of the
//! [Moving AI benchmarks](https://movingai.com/benchmarks/grids.html) together with their
//! scenario files (see [scenario]).
//!
//! ```
//! use grid_astar::{find_path, Cell, Heuristic, PathingGrid};
//! use grid_util::grid::ValueGrid;
//!
//! let mut grid = PathingGrid::new(3, 3, false);
//! grid.set_blocked(Cell::new(1, 1), true);
//! let path = find_path(&grid, Cell::new(0, 0), Cell::new(2, 2), Heuristic::Manhattan).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
mod astar;
pub mod cell;
pub mod error;
pub mod heuristic;
pub mod map;
pub mod pathing_grid;
pub mod scenario;
pub mod solver;

pub use cell::Cell;
pub use error::{MapFormatError, PathError};
pub use heuristic::Heuristic;
pub use pathing_grid::PathingGrid;

use itertools::Itertools;
use solver::{astar::AstarSolver, GridSolver};

/// Cost of a single move to an orthogonal neighbour.
pub const EDGE_COST: f64 = 1.0;
/// Number of header lines (`type`, `height`, `width`, `map`) preceding the rows of a Moving AI map.
pub const MOVING_AI_HEADER_LINES: usize = 4;

/// Computes a shortest path from start to goal with an unbounded [AstarSolver].
pub fn find_path(
    grid: &PathingGrid,
    start: Cell,
    goal: Cell,
    heuristic: Heuristic,
) -> Result<Vec<Cell>, PathError> {
    AstarSolver::new(heuristic).get_path_single_goal(grid, start, goal)
}

/// Checks that a path is non-empty, only visits passable cells and only makes single orthogonal
/// steps.
pub fn is_valid_path(grid: &PathingGrid, path: &[Cell]) -> bool {
    !path.is_empty()
        && path.iter().all(|c| grid.is_passable(*c))
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.manhattan_distance(b) == 1)
}

/// Formats a path as `(r, c) -> (r, c) -> ...`.
pub fn format_path(path: &[Cell]) -> String {
    path.iter().join(" -> ")
}

use crate::astar::astar_grid;
use crate::error::PathError;
use crate::pathing_grid::PathingGrid;
use crate::{Cell, EDGE_COST};
use log::{info, warn};

pub mod astar;
pub mod dijkstra;

/// Checks the endpoints of a query in the order bounds, then passability: the start is checked
/// before the goal in both steps.
pub fn validate_endpoints(grid: &PathingGrid, start: Cell, goal: Cell) -> Result<(), PathError> {
    for cell in [start, goal] {
        if !grid.in_bounds(cell) {
            return Err(PathError::InvalidCoordinate(cell));
        }
    }
    for cell in [start, goal] {
        if !grid.is_passable(cell) {
            return Err(PathError::UnreachableEndpoint(cell));
        }
    }
    Ok(())
}

pub trait GridSolver {
    /// Estimated cost from `p1` to `p2`. Paths are shortest when this never overestimates the
    /// remaining cost; it does not have to be zero at the goal.
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> f64;

    /// Upper bound on the number of expanded nodes, [None] for an unbounded search.
    fn max_expansions(&self) -> Option<usize> {
        None
    }

    /// Move cost of a path: every step between adjacent cells costs [EDGE_COST].
    fn get_path_cost(&self, path: &[Cell]) -> f64 {
        path.len().saturating_sub(1) as f64 * EDGE_COST
    }

    /// Computes a shortest path from start to goal, both included. The grid is only read.
    fn get_path_single_goal(
        &self,
        grid: &PathingGrid,
        start: Cell,
        goal: Cell,
    ) -> Result<Vec<Cell>, PathError> {
        self.get_path_and_cost(grid, start, goal).map(|(path, _)| path)
    }

    /// Number of cells on the shortest path, which is one more than the number of moves.
    fn get_path_length(
        &self,
        grid: &PathingGrid,
        start: Cell,
        goal: Cell,
    ) -> Result<usize, PathError> {
        self.get_path_single_goal(grid, start, goal)
            .map(|path| path.len())
    }

    /// Like [get_path_single_goal](Self::get_path_single_goal) but also returns the path cost.
    fn get_path_and_cost(
        &self,
        grid: &PathingGrid,
        start: Cell,
        goal: Cell,
    ) -> Result<(Vec<Cell>, f64), PathError> {
        validate_endpoints(grid, start, goal)?;
        if start == goal {
            return Ok((vec![start], 0.0));
        }
        // Only trust the components when they match the occupancy values
        let components_current = !grid.components_dirty;
        if components_current && grid.unreachable(start, goal) {
            info!("{} is not reachable from {}", goal, start);
            return Err(PathError::NoPathExists { start, goal });
        }
        let result = astar_grid(
            grid,
            start,
            goal,
            |cell| self.heuristic(cell, &goal),
            self.max_expansions(),
        );
        if components_current && matches!(result, Err(PathError::NoPathExists { .. })) {
            warn!("Reachable goal could not be pathed to, are the components correct?");
        }
        result
    }
}

use crate::{solver::GridSolver, Cell};

/// Uniform-cost search: A* with a heuristic that is always zero.
#[derive(Clone, Debug)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &Cell, _: &Cell) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathing_grid::PathingGrid;
    use grid_util::ValueGrid;

    #[test]
    fn open_grid_distance_is_manhattan() {
        let pathing_grid = PathingGrid::new(6, 4, false);
        let start = Cell::new(3, 0);
        for goal in [Cell::new(0, 5), Cell::new(3, 5), Cell::new(0, 0)] {
            let length = DijkstraSolver
                .get_path_length(&pathing_grid, start, goal)
                .unwrap();
            assert_eq!(length as i32, start.manhattan_distance(&goal) + 1);
        }
    }
}

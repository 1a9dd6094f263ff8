use crate::{heuristic::Heuristic, solver::GridSolver, Cell};

/// A* with a selectable [Heuristic] and an optional cap on the number of expanded nodes.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub heuristic: Heuristic,
    pub max_expansions: Option<usize>,
}

impl AstarSolver {
    pub fn new(heuristic: Heuristic) -> AstarSolver {
        AstarSolver {
            heuristic,
            max_expansions: None,
        }
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> AstarSolver {
        self.max_expansions = Some(max_expansions);
        self
    }
}

impl GridSolver for AstarSolver {
    fn heuristic(&self, p1: &Cell, p2: &Cell) -> f64 {
        self.heuristic.estimate(p1, p2)
    }

    fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }
}

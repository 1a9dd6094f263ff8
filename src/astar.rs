//! This module implements the A* search loop itself. Node state lives in an arena indexed by the
//! row-major cell index of the [PathingGrid], so parents are indices rather than references and
//! the whole table is dropped when the search returns.
use crate::error::PathError;
use crate::pathing_grid::PathingGrid;
use crate::{Cell, EDGE_COST};
use log::{debug, warn};
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Clone, Copy, Debug)]
struct SearchNode {
    g: f64,
    h: f64,
    f: f64,
    /// The root of the search is its own parent.
    parent: Option<usize>,
}

impl Default for SearchNode {
    fn default() -> Self {
        SearchNode {
            g: f64::INFINITY,
            h: f64::INFINITY,
            f: f64::INFINITY,
            parent: None,
        }
    }
}

struct OpenEntry {
    estimated_cost: OrderedFloat<f64>,
    cell: Cell,
    index: usize,
}

impl Eq for OpenEntry {}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: the smallest estimate, then the smallest (row, col), wins
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

fn reverse_path(grid: &PathingGrid, nodes: &[SearchNode], goal: usize) -> Vec<Cell> {
    let mut path: Vec<Cell> = std::iter::successors(Some(goal), |&i| match nodes[i].parent {
        Some(parent) if parent != i => Some(parent),
        _ => None,
    })
    .map(|i| grid.cell_at(i))
    .collect();
    path.reverse();
    path
}

/// Runs A* from `start` to `goal` over the passable 4-neighbourhood of `grid`, returning the path
/// (both endpoints included) and its cost. Both endpoints must be in bounds and passable.
///
/// Entries in the open set are never removed when a cheaper route to a cell is found; the stale
/// entry is skipped when popped because the cell is already closed by then.
///
/// Closed cells are never reopened, so the returned path is only guaranteed shortest when
/// `heuristic` never overestimates. Its value at the goal is not required to be zero.
pub(crate) fn astar_grid<FH>(
    grid: &PathingGrid,
    start: Cell,
    goal: Cell,
    mut heuristic: FH,
    max_expansions: Option<usize>,
) -> Result<(Vec<Cell>, f64), PathError>
where
    FH: FnMut(&Cell) -> f64,
{
    let size = grid.rows() * grid.cols();
    let mut nodes = vec![SearchNode::default(); size];
    let mut closed = vec![false; size];
    let start_ix = grid.index(start);
    let goal_ix = grid.index(goal);

    let h = heuristic(&start);
    nodes[start_ix] = SearchNode {
        g: 0.0,
        h,
        f: h,
        parent: Some(start_ix),
    };
    let mut to_see = BinaryHeap::new();
    to_see.push(OpenEntry {
        estimated_cost: OrderedFloat(h),
        cell: start,
        index: start_ix,
    });

    let mut expanded = 0;
    while let Some(OpenEntry { cell, index, .. }) = to_see.pop() {
        if closed[index] {
            continue;
        }
        closed[index] = true;
        expanded += 1;

        if index == goal_ix {
            debug!(
                "Reached {} from {} after expanding {} nodes (goal estimate {})",
                goal, start, expanded, nodes[index].h
            );
            let path = reverse_path(grid, &nodes, index);
            return Ok((path, nodes[index].g));
        }
        if max_expansions.is_some_and(|max| expanded >= max) {
            warn!(
                "Search from {} to {} exceeded its budget of {} expansions",
                start, goal, expanded
            );
            return Err(PathError::ExpansionBudgetExceeded { expanded });
        }

        let g = nodes[index].g;
        for successor in grid.passable_neighbours(cell) {
            let n = grid.index(successor);
            if closed[n] {
                continue;
            }
            let new_cost = g + EDGE_COST;
            let h = heuristic(&successor);
            let f = new_cost + h;
            let node = &mut nodes[n];
            if f < node.f {
                *node = SearchNode {
                    g: new_cost,
                    h,
                    f,
                    parent: Some(index),
                };
                to_see.push(OpenEntry {
                    estimated_cost: OrderedFloat(f),
                    cell: successor,
                    index: n,
                });
            }
        }
    }
    debug!(
        "Open set exhausted after expanding {} nodes without reaching {}",
        expanded, goal
    );
    Err(PathError::NoPathExists { start, goal })
}

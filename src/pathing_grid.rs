use crate::error::MapFormatError;
use crate::Cell;
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use log::{info, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [PathingGrid] holds the raw occupancy values in a [BoolGrid] where [true] marks a blocked cell
/// and [false] a passable one, together with 4-connected components kept in a [UnionFind].
///
/// Cells are addressed as (row, col). Through [ValueGrid] the same data is addressed as (x, y),
/// with x the column and y the row. A search only ever borrows the grid immutably.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    /// Set while the components do not reflect the occupancy values, including before the
    /// first call to [generate_components](Self::generate_components).
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::default(),
            components: UnionFind::new(0),
            components_dirty: true,
        }
    }
}

impl PathingGrid {
    /// Builds a grid from rows of blocked flags. Every row must have the same length.
    pub fn from_blocked_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<PathingGrid, MapFormatError> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(MapFormatError::Empty);
        }
        let mut pathing_grid = PathingGrid::new(width, rows.len(), false);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(MapFormatError::RaggedRow {
                    line: row + 1,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, &blocked) in values.iter().enumerate() {
                pathing_grid.grid.set(col as i32, row as i32, blocked);
            }
        }
        Ok(pathing_grid)
    }

    pub fn rows(&self) -> usize {
        self.grid.height()
    }

    pub fn cols(&self) -> usize {
        self.grid.width()
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows()
            && (cell.col as usize) < self.cols()
    }

    /// Whether the cell is inside the grid and not blocked.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.grid.get(cell.col, cell.row)
    }

    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) {
        self.set(cell.col, cell.row, blocked);
    }

    /// Row-major index of an in-bounds cell, shared by the components and the search tables.
    pub fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.in_bounds(cell));
        cell.row as usize * self.cols() + cell.col as usize
    }

    pub fn cell_at(&self, index: usize) -> Cell {
        let cols = self.cols();
        Cell::new((index / cols) as i32, (index % cols) as i32)
    }

    pub fn passable_neighbours(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        cell.neumann_neighborhood()
            .filter(|n| self.is_passable(*n))
            .collect()
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        (0..self.rows() as i32)
            .flat_map(|row| (0..self.cols() as i32).map(move |col| Cell::new(row, col)))
            .filter(|c| !self.is_passable(*c))
            .count()
    }

    /// Retrieves the component id a given [Cell] belongs to.
    pub fn get_component(&self, cell: Cell) -> usize {
        self.components.find(self.index(cell))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component. Out of bounds cells are never
    /// reachable.
    pub fn unreachable(&self, start: Cell, goal: Cell) -> bool {
        if self.in_bounds(start) && self.in_bounds(goal) {
            !self
                .components
                .equiv(self.index(start), self.index(goal))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable 4-neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.rows(),
            self.cols()
        );
        self.components = UnionFind::new(self.rows() * self.cols());
        self.components_dirty = false;
        for row in 0..self.rows() as i32 {
            for col in 0..self.cols() as i32 {
                let cell = Cell::new(row, col);
                if !self.is_passable(cell) {
                    continue;
                }
                let ix = self.index(cell);
                // South and east suffice, the other two directions are covered by the neighbour.
                for n in [cell.offset(1, 0), cell.offset(0, 1)].into_iter().flatten() {
                    if self.is_passable(n) {
                        self.components.union(ix, self.index(n));
                    }
                }
            }
        }
    }
}

/// Writes the grid in map notation: `.` for passable and `@` for blocked cells.
impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows() as i32 {
            let line = (0..self.cols() as i32)
                .map(|col| {
                    if self.is_passable(Cell::new(row, col)) {
                        '.'
                    } else {
                        '@'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl ValueGrid<bool> for PathingGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        PathingGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: UnionFind::new(width * height),
            components_dirty: true,
        }
    }
    /// Positions outside the grid read as blocked.
    fn get(&self, x: i32, y: i32) -> bool {
        !self.in_bounds(Cell::new(y, x)) || self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple. Positions outside the
    /// grid are ignored.
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        let cell = Cell::new(y, x);
        if !self.in_bounds(cell) {
            warn!(
                "Ignoring update of {}, outside the {}x{} grid",
                cell,
                self.rows(),
                self.cols()
            );
            return;
        }
        if blocked {
            if !self.grid.get(x, y) {
                self.components_dirty = true;
            }
        } else {
            let ix = self.index(cell);
            for n in self.passable_neighbours(cell) {
                self.components.union(ix, self.index(n));
            }
        }
        self.grid.set(x, y, blocked);
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}

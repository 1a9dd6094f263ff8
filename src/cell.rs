use core::fmt;
use grid_util::point::Point;

/// Offsets of the 4-neighbourhood in (row, col) form: north, south, east, west.
pub const NEUMANN_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// A grid coordinate addressed as (row, col). Coordinates are signed so that positions outside
/// the grid can be represented and rejected instead of wrapping around.
///
/// The derived ordering is lexicographic over (row, col), which is the tie-breaking order used
/// by the search when two open entries have the same score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }

    /// The shifted cell, or [None] when it is not representable.
    pub fn offset(&self, d_row: i32, d_col: i32) -> Option<Cell> {
        Some(Cell::new(
            self.row.checked_add(d_row)?,
            self.col.checked_add(d_col)?,
        ))
    }

    /// The up to four orthogonal neighbours, without any bounds checking.
    pub fn neumann_neighborhood(&self) -> impl Iterator<Item = Cell> {
        let cell = *self;
        NEUMANN_OFFSETS
            .into_iter()
            .filter_map(move |(dr, dc)| cell.offset(dr, dc))
    }

    /// Saturates at [i32::MAX] for cells at opposite ends of the coordinate range.
    pub fn manhattan_distance(&self, other: &Cell) -> i32 {
        let distance = self.row.abs_diff(other.row) as u64 + self.col.abs_diff(other.col) as u64;
        i32::try_from(distance).unwrap_or(i32::MAX)
    }

    pub fn euclidean_distance(&self, other: &Cell) -> f64 {
        let d_row = self.row as f64 - other.row as f64;
        let d_col = self.col as f64 - other.col as f64;
        d_row.hypot(d_col)
    }

    /// Converts to a [Point] of [grid_util], where x is the column and y the row.
    pub fn to_point(self) -> Point {
        Point::new(self.col, self.row)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Cell::new(row, col)
    }
}

impl From<Point> for Cell {
    fn from(p: Point) -> Self {
        Cell::new(p.y, p.x)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 2), Cell::new(0, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, 1), Cell::new(0, 2), Cell::new(1, 0)]);
    }

    #[test]
    fn neighbourhood_is_orthogonal() {
        let c = Cell::new(2, 2);
        for n in c.neumann_neighborhood() {
            assert_eq!(c.manhattan_distance(&n), 1);
        }
    }

    #[test]
    fn distances() {
        let a = Cell::new(0, 0);
        let b = Cell::new(3, 4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert!((a.euclidean_distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn extreme_coordinates() {
        let corner = Cell::new(i32::MAX, i32::MIN);
        assert_eq!(corner.offset(1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(-1, 1), Some(Cell::new(i32::MAX - 1, i32::MIN + 1)));
        assert_eq!(corner.neumann_neighborhood().count(), 2);

        let opposite = Cell::new(i32::MIN, i32::MAX);
        assert_eq!(corner.manhattan_distance(&opposite), i32::MAX);
        assert_eq!(Cell::new(i32::MIN, 0).manhattan_distance(&Cell::new(-1, 0)), i32::MAX);
        let d = corner.euclidean_distance(&opposite);
        assert!(d.is_finite());
        assert!((d - (2.0f64).sqrt() * (u32::MAX as f64)).abs() < 1.0);
    }

    #[test]
    fn point_conversion_swaps_axes() {
        let c = Cell::new(3, 7);
        let p = c.to_point();
        assert_eq!((p.x, p.y), (7, 3));
        assert_eq!(Cell::from(p), c);
    }
}

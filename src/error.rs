//! Error types for searches and map input.

use crate::Cell;
use thiserror::Error;

/// Expected, recoverable outcomes of a search that did not produce a path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("{0} lies outside the grid")]
    InvalidCoordinate(Cell),

    #[error("{0} is blocked")]
    UnreachableEndpoint(Cell),

    #[error("no path exists from {start} to {goal}")]
    NoPathExists { start: Cell, goal: Cell },

    #[error("search aborted after expanding {expanded} nodes")]
    ExpansionBudgetExceeded { expanded: usize },
}

/// Malformed or unreadable map and scenario input.
#[derive(Debug, Error)]
pub enum MapFormatError {
    #[error("could not read map: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected {expected} header lines, found {found} lines")]
    MissingHeader { expected: usize, found: usize },

    #[error("map contains no rows")]
    Empty,

    #[error("line {line} has {found} columns, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line} has whitespace at column {column}")]
    WhitespaceInRow { line: usize, column: usize },

    #[error("header declares {declared_height}x{declared_width} but map body is {height}x{width}")]
    DimensionMismatch {
        declared_height: usize,
        declared_width: usize,
        height: usize,
        width: usize,
    },

    #[error("malformed scenario record: {0}")]
    Scenario(#[from] csv::Error),
}

use crate::Cell;
use core::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Distance estimate used to guide the search towards the goal. Both variants are admissible
/// and consistent on a 4-connected grid with unit move cost, so either yields a shortest path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    /// Straight-line distance; underestimates on a 4-grid.
    Euclidean,
    /// Exact distance on an obstacle-free 4-grid.
    #[default]
    Manhattan,
}

impl Heuristic {
    pub fn estimate(&self, from: &Cell, to: &Cell) -> f64 {
        match self {
            Heuristic::Euclidean => from.euclidean_distance(to),
            Heuristic::Manhattan => from.manhattan_distance(to) as f64,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown heuristic '{0}', expected 0/euclidean or 1/manhattan")]
pub struct ParseHeuristicError(pub String);

/// Accepts the numeric selectors `0` (Euclidean) and `1` (Manhattan) as well as the names.
impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "euclidean" => Ok(Heuristic::Euclidean),
            "1" | "manhattan" => Ok(Heuristic::Manhattan),
            _ => Err(ParseHeuristicError(s.to_owned())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Heuristic::Euclidean => write!(f, "euclidean"),
            Heuristic::Manhattan => write!(f, "manhattan"),
        }
    }
}

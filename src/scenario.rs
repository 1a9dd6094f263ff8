//! Loading of Moving AI scenario (`.scen`) files, each line of which is one start/goal query on a
//! named map, and recording of per-query results as CSV.
use crate::error::MapFormatError;
use crate::pathing_grid::PathingGrid;
use crate::solver::GridSolver;
use crate::Cell;
use csv::{ReaderBuilder, Trim, Writer};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;
use std::time::Instant;

/// One record of a scenario file. Coordinates follow the file format: x is the column and y the
/// row.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Scenario {
    pub bucket: u32,
    pub map_name: String,
    pub map_width: u32,
    pub map_height: u32,
    pub start_x: i32,
    pub start_y: i32,
    pub goal_x: i32,
    pub goal_y: i32,
    /// Reference length from the benchmark set. It is computed for 8-connected movement and so
    /// only bounds the 4-connected length from below.
    pub optimal_length: f64,
}

impl Scenario {
    pub fn start(&self) -> Cell {
        Cell::new(self.start_y, self.start_x)
    }

    pub fn goal(&self) -> Cell {
        Cell::new(self.goal_y, self.goal_x)
    }
}

/// Parses tab separated scenario records. A leading `version` line is skipped.
pub fn parse_scenarios<R: Read>(reader: R) -> Result<Vec<Scenario>, MapFormatError> {
    let mut lines = BufReader::new(reader).lines();
    let mut remaining = Vec::new();
    if let Some(first) = lines.next() {
        let first = first?;
        if !first.trim_start().starts_with("version") {
            remaining.push(first);
        }
    }
    for line in lines {
        let line = line?;
        if !line.trim().is_empty() {
            remaining.push(line);
        }
    }
    let remaining_data = remaining.join("\n");

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(remaining_data.as_bytes());
    csv_reader
        .deserialize()
        .map(|record| record.map_err(MapFormatError::from))
        .collect()
}

pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, MapFormatError> {
    let file = File::open(path)?;
    parse_scenarios(file)
}

/// Outcome of one scenario query, written as one CSV record by [write_results].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub heuristic: String,
    pub start_row: i32,
    pub start_col: i32,
    pub goal_row: i32,
    pub goal_col: i32,
    /// Cells on the path, [None] (an empty field) when the query failed.
    pub path_length: Option<usize>,
    pub optimal_length: f64,
    pub elapsed_secs: f64,
}

/// Solves every scenario on `pathing_grid`, timing each query separately. `label` names the
/// solver in the results.
pub fn run_scenarios<S: GridSolver>(
    solver: &S,
    label: &str,
    pathing_grid: &PathingGrid,
    scenarios: &[Scenario],
) -> Vec<ScenarioResult> {
    scenarios
        .iter()
        .map(|scenario| {
            let (start, goal) = (scenario.start(), scenario.goal());
            let before = Instant::now();
            let result = solver.get_path_length(pathing_grid, start, goal);
            let elapsed = before.elapsed();
            if let Err(err) = &result {
                debug!("Scenario {} -> {} failed: {}", start, goal, err);
            }
            ScenarioResult {
                heuristic: label.to_string(),
                start_row: start.row,
                start_col: start.col,
                goal_row: goal.row,
                goal_col: goal.col,
                path_length: result.ok(),
                optimal_length: scenario.optimal_length,
                elapsed_secs: elapsed.as_secs_f64(),
            }
        })
        .collect()
}

/// Writes results as comma separated records preceded by a header row.
pub fn write_results<W: Write>(writer: W, results: &[ScenarioResult]) -> csv::Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    for result in results {
        csv_writer.serialize(result)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn save_results<P: AsRef<Path>>(path: P, results: &[ScenarioResult]) -> csv::Result<()> {
    let file = File::create(path)?;
    write_results(file, results)
}

//! Reading grids from plaintext maps.
//!
//! A map is a fixed number of header lines followed by one line per grid row. A `.` is a passable
//! cell and every other non-whitespace character a blocked one. Maps from the
//! [Moving AI benchmarks](https://movingai.com/benchmarks/grids.html) have a four line header
//! (`type`, `height`, `width`, `map`), see [MOVING_AI_HEADER_LINES](crate::MOVING_AI_HEADER_LINES).
use crate::error::MapFormatError;
use crate::pathing_grid::PathingGrid;
use grid_util::grid::ValueGrid;
use std::fs;
use std::path::Path;

const PASSABLE: char = '.';

/// Looks for a `key value` line in the header, e.g. `height 64`.
fn declared_dimension(header: &[&str], key: &str) -> Option<usize> {
    header.iter().find_map(|line| {
        let (k, v) = line.trim().split_once(char::is_whitespace)?;
        if k == key {
            v.trim().parse().ok()
        } else {
            None
        }
    })
}

/// Parses a map after skipping `header_lines` lines. Trailing whitespace on each row and trailing
/// blank lines are ignored; every remaining row must be as wide as the first non-blank one, so a
/// blank line inside the body is a [RaggedRow](MapFormatError::RaggedRow). Whitespace within a row
/// is rejected rather than read as a blocked cell. When the header declares a `height` or `width`,
/// it must agree with the rows that follow.
///
/// The returned grid has its connected components generated.
pub fn parse_map(text: &str, header_lines: usize) -> Result<PathingGrid, MapFormatError> {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    if lines.len() < header_lines {
        return Err(MapFormatError::MissingHeader {
            expected: header_lines,
            found: lines.len(),
        });
    }
    let (header, mut body) = lines.split_at(header_lines);
    while let Some((last, rest)) = body.split_last() {
        if !last.is_empty() {
            break;
        }
        body = rest;
    }
    let width = match body.iter().find(|line| !line.is_empty()) {
        Some(row) => row.chars().count(),
        None => return Err(MapFormatError::Empty),
    };
    let height = body.len();

    for (y, line) in body.iter().enumerate() {
        let line_number = header_lines + y + 1;
        let found = line.chars().count();
        if found != width {
            return Err(MapFormatError::RaggedRow {
                line: line_number,
                expected: width,
                found,
            });
        }
        if let Some(column) = line.chars().position(char::is_whitespace) {
            return Err(MapFormatError::WhitespaceInRow {
                line: line_number,
                column: column + 1,
            });
        }
    }

    let declared_height = declared_dimension(header, "height");
    let declared_width = declared_dimension(header, "width");
    if declared_height.is_some_and(|h| h != height) || declared_width.is_some_and(|w| w != width) {
        return Err(MapFormatError::DimensionMismatch {
            declared_height: declared_height.unwrap_or(height),
            declared_width: declared_width.unwrap_or(width),
            height,
            width,
        });
    }

    let mut pathing_grid = PathingGrid::new(width, height, false);
    for (y, line) in body.iter().enumerate() {
        for (x, tile) in line.chars().enumerate() {
            pathing_grid.grid.set(x as i32, y as i32, tile != PASSABLE);
        }
    }
    pathing_grid.generate_components();
    Ok(pathing_grid)
}

/// Reads and parses a map file, see [parse_map].
pub fn load_map<P: AsRef<Path>>(path: P, header_lines: usize) -> Result<PathingGrid, MapFormatError> {
    let text = fs::read_to_string(path)?;
    parse_map(&text, header_lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, MOVING_AI_HEADER_LINES};

    const MAZE: &str = "type octile\nheight 5\nwidth 5\nmap\n.....\n.TTT.\n.....\n.@@@.\n.....\n";

    #[test]
    fn parses_moving_ai_map() {
        let pathing_grid = parse_map(MAZE, MOVING_AI_HEADER_LINES).unwrap();
        assert_eq!((pathing_grid.rows(), pathing_grid.cols()), (5, 5));
        assert!(!pathing_grid.is_passable(Cell::new(1, 2)));
        assert!(!pathing_grid.is_passable(Cell::new(3, 1)));
        assert!(pathing_grid.is_passable(Cell::new(2, 2)));
        assert_eq!(pathing_grid.blocked_count(), 6);
        assert!(!pathing_grid.components_dirty);
    }

    #[test]
    fn headerless_map_with_trailing_blank_lines() {
        let pathing_grid = parse_map("..@  \n...\n\n\n", 0).unwrap();
        assert_eq!((pathing_grid.rows(), pathing_grid.cols()), (2, 3));
        assert!(!pathing_grid.is_passable(Cell::new(0, 2)));
    }

    #[test]
    fn ragged_row_reports_file_line() {
        let err = parse_map("header\n...\n..\n...\n", 1).unwrap_err();
        match err {
            MapFormatError::RaggedRow {
                line,
                expected,
                found,
            } => assert_eq!((line, expected, found), (3, 3, 2)),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn blank_first_row_is_ragged() {
        let text = "type octile\nheight 2\nwidth 3\nmap\n\n...\n...\n";
        assert!(matches!(
            parse_map(text, MOVING_AI_HEADER_LINES),
            Err(MapFormatError::RaggedRow {
                line: 5,
                expected: 3,
                found: 0
            })
        ));
    }

    #[test]
    fn whitespace_inside_row_is_rejected() {
        assert!(matches!(
            parse_map("...\n. .\n", 0),
            Err(MapFormatError::WhitespaceInRow { line: 2, column: 2 })
        ));
        assert!(matches!(
            parse_map("header\n\t..\n", 1),
            Err(MapFormatError::WhitespaceInRow { line: 2, column: 1 })
        ));
    }

    #[test]
    fn header_dimensions_must_match() {
        let text = "type octile\nheight 3\nwidth 5\nmap\n.....\n.....\n";
        assert!(matches!(
            parse_map(text, MOVING_AI_HEADER_LINES),
            Err(MapFormatError::DimensionMismatch {
                declared_height: 3,
                height: 2,
                ..
            })
        ));
    }

    #[test]
    fn missing_header_and_empty_body() {
        assert!(matches!(
            parse_map("type octile\n", MOVING_AI_HEADER_LINES),
            Err(MapFormatError::MissingHeader {
                expected: 4,
                found: 1
            })
        ));
        assert!(matches!(
            parse_map("type octile\nheight 0\nwidth 0\nmap\n", MOVING_AI_HEADER_LINES),
            Err(MapFormatError::Empty)
        ));
    }

    #[test]
    fn unreadable_file_is_io_error() {
        let result = load_map("/nonexistent/definitely/missing.map", 0);
        assert!(matches!(result, Err(MapFormatError::Io(_))));
    }

    #[test]
    fn display_output_parses_back() {
        let pathing_grid = parse_map(MAZE, MOVING_AI_HEADER_LINES).unwrap();
        let reparsed = parse_map(&pathing_grid.to_string(), 0).unwrap();
        assert_eq!(reparsed.to_string(), pathing_grid.to_string());
    }
}

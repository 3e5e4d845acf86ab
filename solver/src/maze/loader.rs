use std::{fs, path::Path};

use super::{cell::Cell, grid::Grid, position::Position};
use crate::error::{MapError, MapResult};

const WIDTH: &str = "WIDTH";
const HEIGHT: &str = "HEIGHT";
const START: &str = "START";
const GOAL: &str = "GOAL";

/// Reads and parses a map file. See [`parse_map`] for the format.
pub fn load_map(path: impl AsRef<Path>) -> MapResult<Grid> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("read {} bytes from {}", text.len(), path.display());
    parse_map(&text)
}

/// Parses the line-oriented map format:
///
/// ```text
/// WIDTH 5
/// HEIGHT 2
/// START 0 0
/// GOAL 1 4
/// ..#..
/// .....
/// ```
///
/// Directives may appear in any order, each exactly once. Every other
/// non-blank line is a grid row.
pub fn parse_map(text: &str) -> MapResult<Grid> {
    let mut header = Header::default();
    let mut rows: Vec<(usize, &str)> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        let args: Vec<&str> = tokens.collect();

        match keyword {
            WIDTH => header.set_size(WIDTH, line_no, &args)?,
            HEIGHT => header.set_size(HEIGHT, line_no, &args)?,
            START => header.set_position(START, line_no, &args)?,
            GOAL => header.set_position(GOAL, line_no, &args)?,
            _ => rows.push((line_no, line)),
        }
    }

    let width = header.width.ok_or(MapError::MissingDirective(WIDTH))?;
    let height = header.height.ok_or(MapError::MissingDirective(HEIGHT))?;
    let start = header.start.ok_or(MapError::MissingDirective(START))?;
    let goal = header.goal.ok_or(MapError::MissingDirective(GOAL))?;

    if width == 0 || height == 0 {
        return Err(MapError::EmptyGrid { width, height });
    }

    if width.checked_mul(height).is_none() {
        return Err(MapError::TooLarge { width, height });
    }

    let mut cells = Vec::new();
    for &(line, row) in &rows {
        let found = row.chars().count();
        if found != width {
            return Err(MapError::RowWidth {
                line,
                expected: width,
                found,
            });
        }
        cells.extend(row.chars().map(Cell::from_char));
    }

    if rows.len() != height {
        return Err(MapError::RowCount {
            expected: height,
            found: rows.len(),
        });
    }

    let grid = Grid::new(width, height, start, goal, cells)?;
    log::debug!("parsed {}", grid.summary());

    Ok(grid)
}

#[derive(Default)]
struct Header {
    width: Option<usize>,
    height: Option<usize>,
    start: Option<Position>,
    goal: Option<Position>,
}

impl Header {
    fn set_size(&mut self, directive: &'static str, line: usize, args: &[&str]) -> MapResult<()> {
        let [value] = args else {
            return Err(arity(directive, line, 1, args.len()));
        };
        let value = parse_number(directive, line, value)?;

        let slot = if directive == WIDTH {
            &mut self.width
        } else {
            &mut self.height
        };
        store(slot, value, directive, line)
    }

    fn set_position(
        &mut self,
        directive: &'static str,
        line: usize,
        args: &[&str],
    ) -> MapResult<()> {
        let [row, col] = args else {
            return Err(arity(directive, line, 2, args.len()));
        };
        let pos = Position::new(
            parse_number(directive, line, row)?,
            parse_number(directive, line, col)?,
        );

        let slot = if directive == START {
            &mut self.start
        } else {
            &mut self.goal
        };
        store(slot, pos, directive, line)
    }
}

fn store<T>(slot: &mut Option<T>, value: T, directive: &'static str, line: usize) -> MapResult<()> {
    if slot.is_some() {
        return Err(MapError::DuplicateDirective { directive, line });
    }
    *slot = Some(value);
    Ok(())
}

fn arity(directive: &'static str, line: usize, expected: usize, found: usize) -> MapError {
    MapError::InvalidDirective {
        directive,
        line,
        reason: format!("expected {expected} value(s), got {found}"),
    }
}

fn parse_number(directive: &'static str, line: usize, token: &str) -> MapResult<usize> {
    token
        .parse::<usize>()
        .map_err(|e| MapError::InvalidDirective {
            directive,
            line,
            reason: format!("{token:?} is not a non-negative integer ({e})"),
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SMALL: &str = "\
WIDTH 4
HEIGHT 3
START 0 0
GOAL 2 3
..#.
.#..
....
";

    #[test]
    fn parses_small_map() {
        let grid = parse_map(SMALL).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.start(), Position::new(0, 0));
        assert_eq!(grid.goal(), Position::new(2, 3));
        assert!(grid.is_blocked(0, 2));
        assert!(grid.is_blocked(1, 1));
        assert!(!grid.is_blocked(2, 0));
    }

    #[test]
    fn directive_order_and_blank_lines() {
        let text = "\r\n....\r\nGOAL 1 3\r\n\r\n....\r\nSTART 0 0\r\nHEIGHT 2\r\nWIDTH 4\r\n";
        let grid = parse_map(text).unwrap();
        assert_eq!(grid.len(), 8);
        assert_eq!(grid.goal(), Position::new(1, 3));
    }

    #[test]
    fn keeps_unknown_symbols() {
        let text = "WIDTH 3\nHEIGHT 1\nSTART 0 0\nGOAL 0 2\nS~G\n";
        let grid = parse_map(text).unwrap();
        assert_eq!(grid.cell(0), Cell::Other('S'));
        assert_eq!(grid.cell(1), Cell::Other('~'));
        assert_eq!(grid.neighbors(0), vec![1]);
    }

    #[test]
    fn bundled_maps_parse() {
        for text in [
            include_str!("../../maps/open.txt"),
            include_str!("../../maps/walled.txt"),
            include_str!("../../maps/maze.txt"),
        ] {
            parse_map(text).unwrap();
        }
    }

    #[test]
    fn missing_directive() {
        let text = "WIDTH 2\nHEIGHT 1\nSTART 0 0\n..\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::MissingDirective("GOAL"))
        ));
    }

    #[test]
    fn duplicate_directive() {
        let text = "WIDTH 2\nWIDTH 2\nHEIGHT 1\nSTART 0 0\nGOAL 0 1\n..\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::DuplicateDirective {
                directive: "WIDTH",
                line: 2
            })
        ));
    }

    #[test]
    fn invalid_directive_values() {
        let text = "WIDTH two\nHEIGHT 1\nSTART 0 0\nGOAL 0 1\n..\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::InvalidDirective {
                directive: "WIDTH",
                line: 1,
                ..
            })
        ));

        let text = "WIDTH 2\nHEIGHT 1\nSTART 0\nGOAL 0 1\n..\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::InvalidDirective {
                directive: "START",
                line: 3,
                ..
            })
        ));

        let text = "WIDTH 2\nHEIGHT 1\nSTART 0 0\nGOAL -1 1\n..\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::InvalidDirective {
                directive: "GOAL",
                ..
            })
        ));
    }

    #[test]
    fn zero_size() {
        let text = "WIDTH 0\nHEIGHT 1\nSTART 0 0\nGOAL 0 0\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::EmptyGrid {
                width: 0,
                height: 1
            })
        ));
    }

    #[test]
    fn semicolon_is_an_ordinary_symbol() {
        let text = "WIDTH 2\nHEIGHT 2\nSTART 1 0\nGOAL 1 1\n;.\n..\n";
        let grid = parse_map(text).unwrap();
        assert_eq!(grid.cell(0), Cell::Other(';'));
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn overflowing_dimensions() {
        let text = format!("WIDTH {}\nHEIGHT 2\nSTART 0 0\nGOAL 0 0\n.\n", usize::MAX);
        assert!(matches!(
            parse_map(&text),
            Err(MapError::TooLarge { height: 2, .. })
        ));
    }

    #[test]
    fn huge_dimensions_fail_on_rows() {
        let text = "WIDTH 1000000\nHEIGHT 1000000\nSTART 0 0\nGOAL 0 0\n.\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::RowWidth {
                line: 5,
                expected: 1_000_000,
                found: 1
            })
        ));

        let text = "WIDTH 1\nHEIGHT 1000000\nSTART 0 0\nGOAL 0 0\n.\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::RowCount {
                expected: 1_000_000,
                found: 1
            })
        ));
    }

    #[test]
    fn row_width_mismatch() {
        let text = "WIDTH 3\nHEIGHT 2\nSTART 0 0\nGOAL 1 2\n...\n..\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::RowWidth {
                line: 6,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn row_count_mismatch() {
        let text = "WIDTH 3\nHEIGHT 3\nSTART 0 0\nGOAL 1 2\n...\n...\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::RowCount {
                expected: 3,
                found: 2
            })
        ));

        let text = "WIDTH 3\nHEIGHT 1\nSTART 0 0\nGOAL 0 2\n...\n...\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::RowCount {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn endpoint_preconditions() {
        let text = "WIDTH 3\nHEIGHT 1\nSTART 0 3\nGOAL 0 2\n...\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::EndpointOutOfBounds {
                endpoint: "START",
                ..
            })
        ));

        let text = "WIDTH 3\nHEIGHT 1\nSTART 0 0\nGOAL 0 2\n..#\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::EndpointBlocked {
                endpoint: "GOAL",
                row: 0,
                col: 2
            })
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let grid = load_map(file.path()).unwrap();
        assert_eq!(grid, parse_map(SMALL).unwrap());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        assert!(matches!(load_map(&path), Err(MapError::Io { .. })));
    }
}

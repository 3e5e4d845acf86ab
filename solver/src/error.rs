//! Errors raised while loading and validating a map.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing {0} directive")]
    MissingDirective(&'static str),

    #[error("line {line}: duplicate {directive} directive")]
    DuplicateDirective { directive: &'static str, line: usize },

    #[error("line {line}: invalid {directive} directive: {reason}")]
    InvalidDirective {
        directive: &'static str,
        line: usize,
        reason: String,
    },

    #[error("grid must be non-empty, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("line {line}: row has {found} cells, expected {expected}")]
    RowWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("map has {found} rows, expected {expected}")]
    RowCount { expected: usize, found: usize },

    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },

    #[error("grid has {found} cells, expected {expected}")]
    CellCount { expected: usize, found: usize },

    #[error("{endpoint} ({row}, {col}) is outside the {width}x{height} grid")]
    EndpointOutOfBounds {
        endpoint: &'static str,
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("{endpoint} ({row}, {col}) is on a blocked cell")]
    EndpointBlocked {
        endpoint: &'static str,
        row: usize,
        col: usize,
    },
}

pub type MapResult<T> = std::result::Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MapError::RowWidth {
            line: 7,
            expected: 5,
            found: 4,
        };
        assert_eq!(format!("{err}"), "line 7: row has 4 cells, expected 5");

        let err = MapError::EndpointBlocked {
            endpoint: "GOAL",
            row: 1,
            col: 2,
        };
        assert_eq!(format!("{err}"), "GOAL (1, 2) is on a blocked cell");

        let err = MapError::MissingDirective("WIDTH");
        assert!(format!("{err}").contains("WIDTH"));
    }
}

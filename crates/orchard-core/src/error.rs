//! Error types shared by the orchard crates.

use std::fmt;

use crate::geom::Point;

/// Errors raised by box and path requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomError {
    /// Both endpoints of a box or path request are the same point.
    Degenerate(Point),
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate(p) => write!(f, "degenerate request: both endpoints are {p}"),
        }
    }
}

impl std::error::Error for GeomError {}

/// Errors raised while building a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Columns of differing heights.
    Ragged {
        column: usize,
        expected: usize,
        got: usize,
    },
    /// A board needs at least one cell.
    Empty,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ragged {
                column,
                expected,
                got,
            } => write!(
                f,
                "board: column {column} has {got} cells, expected {expected}"
            ),
            Self::Empty => f.write_str("board: no cells"),
        }
    }
}

impl std::error::Error for BoardError {}

use thiserror::Error;

use crate::grid::Coord;

/// Top-level error type for floor plan processing.
#[derive(Debug, Error)]
pub enum FloorplanError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Trace(#[from] TraceError),
}

/// Errors raised while loading a character grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows or no columns")]
    Empty,

    #[error("inconsistent grid: row {row} has {found} columns, expected {expected}")]
    InconsistentRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised while walking room boundaries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    #[error("malformed boundary at {at} (glyph {glyph:?}): {reason}")]
    MalformedBoundary {
        at: Coord,
        glyph: char,
        reason: &'static str,
    },
}

/// Convenience type alias for results using [`FloorplanError`].
pub type Result<T> = std::result::Result<T, FloorplanError>;

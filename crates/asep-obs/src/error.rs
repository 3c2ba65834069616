//! Error types for grid averaging.

use std::fmt;

/// Errors from [`mean_occupancy`](crate::mean_occupancy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObsError {
    /// Not enough grids remain once the transient is discarded.
    TransientTooLong {
        /// Grids supplied.
        available: usize,
        /// Grids to discard.
        transient: usize,
    },
    /// A grid's shape differs from the first grid's.
    ShapeMismatch {
        /// Index of the offending grid.
        index: usize,
        /// Shape of the first grid, `(lanes, columns)`.
        expected: (usize, usize),
        /// Shape of the offending grid.
        got: (usize, usize),
    },
}

impl fmt::Display for ObsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransientTooLong {
                available,
                transient,
            } => write!(
                f,
                "{available} grids leave nothing after a transient of {transient}"
            ),
            Self::ShapeMismatch {
                index,
                expected,
                got,
            } => write!(
                f,
                "grid {index} is {}x{}, expected {}x{}",
                got.0, got.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for ObsError {}

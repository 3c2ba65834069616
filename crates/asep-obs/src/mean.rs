//! Time-averaged occupancy of one particle species.

use crate::error::ObsError;
use crate::grid::OccupancyGrid;

/// Which species [`mean_occupancy`] counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    /// Cells equal to `+1`.
    Type1,
    /// Cells equal to `-1`.
    Type2,
}

impl Species {
    fn marker(self) -> i8 {
        match self {
            Self::Type1 => 1,
            Self::Type2 => -1,
        }
    }
}

/// Cell-wise mean occupancy in `[0, 1]`, row-major by lane.
#[derive(Clone, Debug, PartialEq)]
pub struct MeanGrid {
    lanes: usize,
    columns: usize,
    values: Vec<f64>,
}

impl MeanGrid {
    /// Number of rows.
    pub fn lanes(&self) -> usize {
        self.lanes
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Mean at `(lane, col)`. Panics when out of range.
    pub fn get(&self, lane: usize, col: usize) -> f64 {
        assert!(col < self.columns, "column {col} out of range");
        self.values[lane * self.columns + col]
    }

    /// One lane's row.
    pub fn row(&self, lane: usize) -> &[f64] {
        let start = lane * self.columns;
        &self.values[start..start + self.columns]
    }

    /// All means, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Average the occupancy of `species` over `grids`, skipping the first
/// `transient` grids.
///
/// A cell counts as `1` when it holds the species marker and `0`
/// otherwise, so each result cell is the fraction of retained samples in
/// which that species occupied it.
///
/// # Errors
///
/// [`ObsError::TransientTooLong`] if `grids.len() <= transient`.
/// [`ObsError::ShapeMismatch`] if any retained grid differs in shape from
/// the first retained grid.
pub fn mean_occupancy(
    grids: &[OccupancyGrid],
    species: Species,
    transient: usize,
) -> Result<MeanGrid, ObsError> {
    let kept = match grids.get(transient..) {
        Some(kept) if !kept.is_empty() => kept,
        _ => {
            return Err(ObsError::TransientTooLong {
                available: grids.len(),
                transient,
            })
        }
    };

    let expected = kept[0].shape();
    let mut counts = vec![0u64; expected.0 * expected.1];
    let marker = species.marker();
    for (offset, grid) in kept.iter().enumerate() {
        if grid.shape() != expected {
            return Err(ObsError::ShapeMismatch {
                index: transient + offset,
                expected,
                got: grid.shape(),
            });
        }
        for (count, &cell) in counts.iter_mut().zip(grid.as_slice()) {
            if cell == marker {
                *count += 1;
            }
        }
    }

    let samples = kept.len() as f64;
    Ok(MeanGrid {
        lanes: expected.0,
        columns: expected.1,
        values: counts.into_iter().map(|c| c as f64 / samples).collect(),
    })
}

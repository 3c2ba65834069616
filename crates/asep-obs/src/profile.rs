//! Occupancy as a function of distance from the track diagonal.
//!
//! In a restricted projection the type-1 particles of a well-mixed track
//! sit near the line `col = lane * L / n`. Binning a [`MeanGrid`] by
//! perpendicular distance from that line measures how wide the band of
//! type-1 particles is.

use crate::mean::MeanGrid;

/// Mean occupancy per integer distance from the diagonal.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagonalProfile {
    /// Average cell value in each distance bucket. Empty buckets hold `0.0`.
    pub means: Vec<f64>,
    /// Number of cells in each bucket.
    pub counts: Vec<usize>,
}

impl DiagonalProfile {
    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.means.len()
    }

    /// Whether the profile has no buckets.
    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }

    /// The first `width` bucket means, or all of them if fewer exist.
    pub fn head(&self, width: usize) -> &[f64] {
        &self.means[..width.min(self.means.len())]
    }
}

/// Distance bucket of cell `(lane, col)` for a grid of the given shape.
///
/// The perpendicular distance from the line through `(0, 0)` with slope
/// `columns / lanes`, truncated toward zero.
pub fn diagonal_bucket(lane: usize, col: usize, lanes: usize, columns: usize) -> usize {
    let slope = columns as f64 / lanes as f64;
    let offset = (slope * lane as f64 - col as f64).abs();
    (offset / (1.0 + slope * slope).sqrt()) as usize
}

/// Bin every cell of `mean` by [`diagonal_bucket`] and average each bin.
///
/// # Examples
///
/// ```
/// use asep_core::Track;
/// use asep_obs::{diagonal_profile, mean_occupancy, project, Species};
///
/// let track = Track::from_labels(2, vec![0, 2, 1, 3]).unwrap();
/// let mean = mean_occupancy(&[project(&track, true)], Species::Type1, 0).unwrap();
/// let profile = diagonal_profile(&mean);
/// assert_eq!(profile.counts, vec![7, 1]);
/// assert!((profile.means[0] - 2.0 / 7.0).abs() < 1e-12);
/// assert_eq!(profile.means[1], 0.0);
/// ```
pub fn diagonal_profile(mean: &MeanGrid) -> DiagonalProfile {
    let (lanes, columns) = (mean.lanes(), mean.columns());
    let mut sums: Vec<f64> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();
    for lane in 0..lanes {
        for col in 0..columns {
            let bucket = diagonal_bucket(lane, col, lanes, columns);
            if bucket >= sums.len() {
                sums.resize(bucket + 1, 0.0);
                counts.resize(bucket + 1, 0);
            }
            sums[bucket] += mean.get(lane, col);
            counts[bucket] += 1;
        }
    }
    let means = sums
        .iter()
        .zip(&counts)
        .map(|(&sum, &count)| if count == 0 { 0.0 } else { sum / count as f64 })
        .collect();
    DiagonalProfile { means, counts }
}

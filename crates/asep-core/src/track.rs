//! The track: an `L`-column periodic array holding both particle species.

use std::fmt;

use rand::Rng;

use crate::error::ConfigError;
use crate::label::{Label, RawLabel};

/// Circular array of labels encoding the positions of both species.
///
/// # Invariants
///
/// - `columns() > lanes() >= 1`
/// - every type-1 label `0..lanes` occurs in exactly one column
/// - every other column holds a type-2 label in `[lanes, 2 * lanes)`
///
/// Every constructor checks these and the only mutator is
/// [`step`](crate::step::step), which preserves them.
///
/// # Examples
///
/// ```
/// use asep_core::{Label, Track};
///
/// let track = Track::from_labels(3, vec![0, 1, 3, 2, 4, 3, 4]).unwrap();
/// assert_eq!(track.lanes(), 3);
/// assert_eq!(track.columns(), 7);
/// assert_eq!(track.position_of(2), Some(3));
/// assert_eq!(track.label(4), Label::Type2 { lane: 1 });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Track {
    lanes: usize,
    labels: Vec<RawLabel>,
}

impl Track {
    /// Check that `(lanes, columns)` describes a legal track shape.
    pub fn check_shape(lanes: usize, columns: usize) -> Result<(), ConfigError> {
        if lanes == 0 {
            return Err(ConfigError::NoLanes);
        }
        if columns <= lanes {
            return Err(ConfigError::TooFewColumns { lanes, columns });
        }
        if 2 * lanes > RawLabel::MAX as usize {
            return Err(ConfigError::MalformedTrack {
                reason: format!("lane count {lanes} does not fit the label encoding"),
            });
        }
        Ok(())
    }

    /// Draw a random track.
    ///
    /// Picks `lanes` distinct columns uniformly without replacement, sorts
    /// them ascending and assigns type-1 labels `0..lanes` in that order.
    /// Every remaining column, in ascending order, receives an independent
    /// uniform lane affiliation as a type-2 label.
    pub fn randomize<R: Rng + ?Sized>(
        lanes: usize,
        columns: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        Self::check_shape(lanes, columns)?;

        let mut chosen = rand::seq::index::sample(rng, columns, lanes).into_vec();
        chosen.sort_unstable();

        let mut is_type1 = vec![false; columns];
        let mut labels: Vec<RawLabel> = vec![0; columns];
        for (lane, &col) in chosen.iter().enumerate() {
            labels[col] = lane as RawLabel;
            is_type1[col] = true;
        }
        for (slot, _) in labels.iter_mut().zip(&is_type1).filter(|(_, t1)| !**t1) {
            *slot = (rng.random_range(0..lanes) + lanes) as RawLabel;
        }

        Ok(Self { lanes, labels })
    }

    /// Wrap an externally supplied label sequence, checking every invariant.
    ///
    /// The column count is `labels.len()`.
    pub fn from_labels(lanes: usize, labels: Vec<RawLabel>) -> Result<Self, ConfigError> {
        Self::check_shape(lanes, labels.len())?;
        let track = Self { lanes, labels };
        track.validate()?;
        Ok(track)
    }

    /// Re-check the track invariants, reporting the first breach found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check_shape(self.lanes, self.labels.len())?;

        let mut seen_at: Vec<Option<usize>> = vec![None; self.lanes];
        for (col, &raw) in self.labels.iter().enumerate() {
            match Label::decode(raw, self.lanes) {
                None => {
                    return Err(ConfigError::MalformedTrack {
                        reason: format!(
                            "column {col} holds label {raw}, outside [0, {})",
                            2 * self.lanes
                        ),
                    });
                }
                Some(Label::Type1 { lane }) => {
                    if let Some(first) = seen_at[lane] {
                        return Err(ConfigError::MalformedTrack {
                            reason: format!(
                                "type-1 label {lane} occurs at columns {first} and {col}"
                            ),
                        });
                    }
                    seen_at[lane] = Some(col);
                }
                Some(Label::Type2 { .. }) => {}
            }
        }
        if let Some(lane) = seen_at.iter().position(Option::is_none) {
            return Err(ConfigError::MalformedTrack {
                reason: format!("type-1 label {lane} does not occur"),
            });
        }
        Ok(())
    }

    /// Number of lanes `n`.
    #[inline]
    pub fn lanes(&self) -> usize {
        self.lanes
    }

    /// Number of columns `L`.
    #[inline]
    pub fn columns(&self) -> usize {
        self.labels.len()
    }

    /// Raw labels, column by column.
    #[inline]
    pub fn labels(&self) -> &[RawLabel] {
        &self.labels
    }

    /// Raw label at `col`. Panics if `col >= columns()`.
    #[inline]
    pub fn raw(&self, col: usize) -> RawLabel {
        self.labels[col]
    }

    /// Decoded label at `col`. Panics if `col >= columns()`.
    #[inline]
    pub fn label(&self, col: usize) -> Label {
        let raw = self.labels[col] as usize;
        if raw < self.lanes {
            Label::Type1 { lane: raw }
        } else {
            Label::Type2 {
                lane: raw - self.lanes,
            }
        }
    }

    /// Column holding the type-1 particle of `lane`.
    ///
    /// `None` only when `lane >= lanes()`.
    pub fn position_of(&self, lane: usize) -> Option<usize> {
        if lane >= self.lanes {
            return None;
        }
        self.labels.iter().position(|&raw| raw as usize == lane)
    }

    /// Number of type-2 columns affiliated with each lane.
    pub fn type2_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.lanes];
        for &raw in &self.labels {
            if let Some(Label::Type2 { lane }) = Label::decode(raw, self.lanes) {
                counts[lane] += 1;
            }
        }
        counts
    }

    /// Copy of the track rotated so that lane 0's type-1 particle sits in
    /// column 0.
    ///
    /// Removes the arbitrary global phase before averaging across samples.
    pub fn rotated_to_lane_zero(&self) -> Track {
        let offset = self.position_of(0).unwrap_or(0);
        let mut labels = self.labels.clone();
        labels.rotate_left(offset);
        Track {
            lanes: self.lanes,
            labels,
        }
    }

    #[inline]
    pub(crate) fn set_raw(&mut self, col: usize, raw: RawLabel) {
        self.labels[col] = raw;
    }

    #[inline]
    pub(crate) fn swap_columns(&mut self, a: usize, b: usize) {
        self.labels.swap(a, b);
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.labels)
    }
}

//! Error types shared across the workspace.
//!
//! Two families, matching the two ways a caller can misuse the engine:
//! [`ConfigError`] for configurations rejected before any simulation work
//! starts, and [`PreconditionError`] for calls whose arguments contradict the
//! state they operate on. Neither is transient; both indicate a programming
//! error upstream.

use std::error::Error;
use std::fmt;

/// A configuration was rejected (`InvalidConfiguration`).
///
/// Raised at construction or before a run starts. No partial state is
/// created when one of these is returned.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Lane count is zero.
    NoLanes,
    /// The track must have strictly more columns than lanes.
    TooFewColumns {
        /// Configured lane count `n`.
        lanes: usize,
        /// Configured column count `L`.
        columns: usize,
    },
    /// A hazard-rate vector does not have one entry per lane.
    RateLengthMismatch {
        /// Which vector: `"p"` (forward) or `"q"` (backward).
        which: &'static str,
        /// Expected length (the lane count).
        expected: usize,
        /// Actual length supplied.
        got: usize,
    },
    /// A hazard rate is negative, NaN, or infinite.
    InvalidRate {
        /// Which vector: `"p"` (forward) or `"q"` (backward).
        which: &'static str,
        /// Lane index of the offending rate.
        lane: usize,
        /// The rejected value.
        value: f64,
    },
    /// Every lane has zero total hazard, so no event can ever fire.
    ZeroHazard,
    /// A label sequence does not satisfy the track invariants.
    MalformedTrack {
        /// Description of the first breach found.
        reason: String,
    },
    /// Two pieces of state disagree on `(lanes, columns)`.
    ShapeMismatch {
        /// Shape the receiver was configured with.
        expected: (usize, usize),
        /// Shape that was supplied.
        got: (usize, usize),
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLanes => write!(f, "lane count must be at least 1"),
            Self::TooFewColumns { lanes, columns } => write!(
                f,
                "column count {columns} must exceed lane count {lanes}"
            ),
            Self::RateLengthMismatch {
                which,
                expected,
                got,
            } => write!(
                f,
                "rate vector '{which}' has {got} entries, expected {expected}"
            ),
            Self::InvalidRate { which, lane, value } => write!(
                f,
                "rate '{which}' for lane {lane} must be finite and >= 0, got {value}"
            ),
            Self::ZeroHazard => write!(f, "total hazard is zero; no lane can fire"),
            Self::MalformedTrack { reason } => write!(f, "malformed track: {reason}"),
            Self::ShapeMismatch { expected, got } => write!(
                f,
                "shape mismatch: expected {} lanes x {} columns, got {} x {}",
                expected.0, expected.1, got.0, got.1
            ),
        }
    }
}

impl Error for ConfigError {}

/// A call contradicts the state it was made against (`PreconditionViolation`).
///
/// The engine never attempts repair. Validation always happens before any
/// mutation, so the track is left exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreconditionError {
    /// The requested lane is not in `[0, n)`.
    LaneOutOfRange {
        /// The requested lane.
        lane: usize,
        /// The track's lane count.
        lanes: usize,
    },
    /// No column holds the type-1 label of this lane.
    MissingLane {
        /// The lane whose type-1 particle could not be found.
        lane: usize,
    },
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LaneOutOfRange { lane, lanes } => {
                write!(f, "lane {lane} out of range [0, {lanes})")
            }
            Self::MissingLane { lane } => {
                write!(f, "no column holds the type-1 particle of lane {lane}")
            }
        }
    }
}

impl Error for PreconditionError {}

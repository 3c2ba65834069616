//! Error types for replay.

use std::fmt;

use asep_core::{PreconditionError, StepOutcome};

/// Errors that stop a replay before it finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// A logged event could not be applied to the replayed track.
    Step {
        /// Index of the event in the log.
        index: usize,
        /// The underlying stepping failure.
        source: PreconditionError,
    },
    /// A logged outcome differs from the one the replay produced.
    OutcomeMismatch {
        /// Index of the event in the log.
        index: usize,
        /// Outcome from the log.
        recorded: StepOutcome,
        /// Outcome from the replay.
        replayed: StepOutcome,
    },
    /// The log was recorded under a different seed or track shape.
    ConfigMismatch {
        /// Configuration hash stored with the log.
        recorded: u64,
        /// Configuration hash of the simulation being checked.
        current: u64,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step { index, source } => write!(f, "event {index} cannot be replayed: {source}"),
            Self::OutcomeMismatch {
                index,
                recorded,
                replayed,
            } => write!(
                f,
                "outcome mismatch at event {index}: recorded={recorded:?}, replayed={replayed:?}"
            ),
            Self::ConfigMismatch { recorded, current } => write!(
                f,
                "config hash mismatch: recorded={recorded:#018x}, current={current:#018x}"
            ),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Step { source, .. } => Some(source),
            Self::OutcomeMismatch { .. } | Self::ConfigMismatch { .. } => None,
        }
    }
}

//! Simulation configuration and the engine-level error type.
//!
//! [`SimConfig`] is the builder-input for [`Simulation`](crate::Simulation).
//! [`validate()`](SimConfig::validate) checks every structural constraint
//! before any state is created.

use std::error::Error;
use std::fmt;

use asep_core::{ConfigError, PreconditionError, Track};

// ── RunError ───────────────────────────────────────────────────────

/// Errors returned by [`Simulation::run`](crate::Simulation::run).
#[derive(Clone, Debug, PartialEq)]
pub enum RunError {
    /// The run was rejected before any step was taken.
    Config(ConfigError),
    /// A step was attempted against inconsistent state; the run stopped
    /// and the last completed step's state was kept.
    Precondition(PreconditionError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Precondition(e) => write!(f, "precondition violated: {e}"),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Precondition(e) => Some(e),
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PreconditionError> for RunError {
    fn from(e: PreconditionError) -> Self {
        Self::Precondition(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing a [`Simulation`](crate::Simulation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of lanes `n`. Must be at least 1.
    pub lanes: usize,
    /// Number of columns `L`. Must exceed `lanes`.
    pub columns: usize,
    /// RNG seed. `None` draws one from the thread RNG at construction; the
    /// drawn value is kept and reported by
    /// [`Simulation::seed`](crate::Simulation::seed).
    pub seed: Option<u64>,
    /// Accumulate per-lane particle currents during runs. Default: `false`.
    pub track_currents: bool,
}

impl SimConfig {
    /// Configuration for `lanes` lanes of `columns` columns, unseeded,
    /// without current statistics.
    pub fn new(lanes: usize, columns: usize) -> Self {
        Self {
            lanes,
            columns,
            seed: None,
            track_currents: false,
        }
    }

    /// Set an explicit RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable current statistics.
    pub fn with_currents(mut self, enabled: bool) -> Self {
        self.track_currents = enabled;
        self
    }

    /// Validate all structural constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Track::check_shape(self.lanes, self.columns)
    }

    /// Check that `track` has the configured shape.
    pub fn check_track(&self, track: &Track) -> Result<(), ConfigError> {
        if track.lanes() != self.lanes || track.columns() != self.columns {
            return Err(ConfigError::ShapeMismatch {
                expected: (self.lanes, self.columns),
                got: (track.lanes(), track.columns()),
            });
        }
        Ok(())
    }
}

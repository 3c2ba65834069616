//! Run options and the record of a completed run.

use asep_core::{Direction, StepOutcome, Track};

use crate::metrics::RunMetrics;

/// What a run should record besides updating the simulation state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Keep a copy of the track after every elementary transition.
    pub record_trajectory: bool,
    /// Keep the sampled `(lane, direction)` pair and outcome of every
    /// elementary transition, for replay.
    pub record_events: bool,
}

impl RunOptions {
    /// Record the trajectory.
    pub fn with_trajectory(mut self) -> Self {
        self.record_trajectory = true;
        self
    }

    /// Record the event log.
    pub fn with_events(mut self) -> Self {
        self.record_events = true;
        self
    }
}

/// One elementary transition as sampled and applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StepEvent {
    /// Lane whose type-1 particle attempted the hop.
    pub lane: usize,
    /// Direction of the attempted hop.
    pub direction: Direction,
    /// What the stepping engine did.
    pub outcome: StepOutcome,
}

/// Result of a successful [`Simulation::run`](crate::Simulation::run).
#[derive(Clone, Debug, Default)]
pub struct RunReport {
    /// Track after each transition, when
    /// [`record_trajectory`](RunOptions::record_trajectory) was set.
    pub trajectory: Option<Vec<Track>>,
    /// Every transition, when [`record_events`](RunOptions::record_events)
    /// was set.
    pub events: Option<Vec<StepEvent>>,
    /// Outcome counts and timing.
    pub metrics: RunMetrics,
}

/// Upper bound on up-front allocation for recorded sequences.
pub(crate) const PREALLOC_CAP: u64 = 1 << 16;

/// Start an empty buffer if `enabled`, sized for `steps` entries up to
/// [`PREALLOC_CAP`].
pub(crate) fn recorder<T>(enabled: bool, steps: u64) -> Option<Vec<T>> {
    enabled.then(|| Vec::with_capacity(steps.min(PREALLOC_CAP) as usize))
}

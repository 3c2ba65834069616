//! Self-contained recordings of a single run.

use asep_core::Track;
use asep_engine::{HazardRates, RunError, RunOptions, Simulation, StepEvent};

use crate::compare::{replay_and_compare, DivergenceReport};
use crate::error::ReplayError;
use crate::hash::{config_hash, track_hash};

/// A run's starting track, event log and fingerprints.
///
/// Holds everything needed to re-check the run without its RNG.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRun {
    /// [`config_hash`] of the recording simulation.
    pub config_hash: u64,
    /// Track at the start of the run.
    pub initial: Track,
    /// Every transition of the run, in order.
    pub events: Vec<StepEvent>,
    /// [`track_hash`] of the track after the run.
    pub final_hash: u64,
}

/// [`config_hash`] of a simulation's seed and shape.
pub fn simulation_config_hash(sim: &Simulation) -> u64 {
    config_hash(sim.seed(), sim.lanes(), sim.columns())
}

impl RecordedRun {
    /// Run `steps` transitions on `sim` and record them.
    pub fn record(sim: &mut Simulation, steps: u64, rates: &HazardRates) -> Result<Self, RunError> {
        let initial = sim.track().clone();
        let report = sim.run(steps, rates, RunOptions::default().with_events())?;
        Ok(Self {
            config_hash: simulation_config_hash(sim),
            initial,
            events: report.events.unwrap_or_default(),
            final_hash: track_hash(sim.track()),
        })
    }

    /// Replay this recording on behalf of `sim`.
    ///
    /// # Errors
    ///
    /// [`ReplayError::ConfigMismatch`] if `sim` has a different seed or
    /// shape than the recording simulation; otherwise as
    /// [`replay_and_compare`].
    pub fn verify(&self, sim: &Simulation) -> Result<Option<DivergenceReport>, ReplayError> {
        let current = simulation_config_hash(sim);
        if current != self.config_hash {
            return Err(ReplayError::ConfigMismatch {
                recorded: self.config_hash,
                current,
            });
        }
        replay_and_compare(&self.initial, &self.events, self.final_hash)
    }
}

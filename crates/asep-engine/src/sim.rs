//! The simulation aggregate and its run loop.
//!
//! [`Simulation`] owns every piece of mutable state: the track, the
//! initial track kept for [`reset`](Simulation::reset), the seeded RNG, the
//! optional current counters and the lifetime step count.
//!
//! # Ownership model
//!
//! All mutating methods take `&mut self`, so two runs can never interleave
//! on one track. Independent simulations share nothing and may live on
//! different threads.

use std::time::Instant;

use asep_core::{step, ConfigError, Track};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{RunError, SimConfig};
use crate::currents::CurrentCounters;
use crate::metrics::RunMetrics;
use crate::rates::{EventSampler, HazardRates};
use crate::run::{recorder, RunOptions, RunReport, StepEvent};
use crate::snapshot::SimSnapshot;

// Compile-time assertion: Simulation can be moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

/// A single lane-coupled exclusion process and its statistics.
///
/// # Example
///
/// ```
/// use asep_engine::{HazardRates, RunOptions, SimConfig, Simulation};
///
/// let config = SimConfig::new(4, 12).with_seed(7).with_currents(true);
/// let mut sim = Simulation::new(config).unwrap();
/// let rates = HazardRates::uniform(4, 1.0, 0.0).unwrap();
///
/// let report = sim.run(500, &rates, RunOptions::default()).unwrap();
/// assert_eq!(report.metrics.steps, 500);
/// assert_eq!(sim.total_steps(), 500);
/// assert_eq!(sim.currents().unwrap().samples().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimConfig,
    seed: u64,
    rng: ChaCha8Rng,
    track: Track,
    initial: Track,
    currents: Option<CurrentCounters>,
    total_steps: u64,
    last_rates: Option<HazardRates>,
}

impl Simulation {
    /// Validate `config`, seed the RNG and draw a random initial track.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = resolve_seed(config.seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let track = Track::randomize(config.lanes, config.columns, &mut rng)?;
        log::debug!(
            "simulation created: {} lanes x {} columns, seed {seed}",
            config.lanes,
            config.columns
        );
        Ok(Self::assemble(config, seed, rng, track))
    }

    /// Validate `config` and start from a caller-supplied track.
    ///
    /// The RNG is seeded but not advanced.
    pub fn from_track(config: SimConfig, track: Track) -> Result<Self, ConfigError> {
        config.validate()?;
        config.check_track(&track)?;
        let seed = resolve_seed(config.seed);
        let rng = ChaCha8Rng::seed_from_u64(seed);
        Ok(Self::assemble(config, seed, rng, track))
    }

    fn assemble(config: SimConfig, seed: u64, rng: ChaCha8Rng, track: Track) -> Self {
        let currents = config
            .track_currents
            .then(|| CurrentCounters::new(config.lanes));
        Self {
            seed,
            rng,
            initial: track.clone(),
            track,
            currents,
            total_steps: 0,
            last_rates: None,
            config,
        }
    }

    /// Run `steps` elementary transitions driven by `rates`.
    ///
    /// Each transition samples a lane with probability proportional to its
    /// total hazard, samples a direction from that lane's `p / (p + q)`,
    /// and applies [`step`]. When current statistics are enabled, one
    /// sample is appended to the mean-current series after the loop, even
    /// for `steps == 0`.
    ///
    /// # Errors
    ///
    /// [`RunError::Config`] if `rates` does not have one entry per lane;
    /// nothing is mutated in that case. [`RunError::Precondition`] if a
    /// step finds the track inconsistent; the state after the last
    /// completed step is kept.
    pub fn run(
        &mut self,
        steps: u64,
        rates: &HazardRates,
        options: RunOptions,
    ) -> Result<RunReport, RunError> {
        rates.check_lanes(self.lanes())?;
        let sampler = EventSampler::new(rates)?;
        self.last_rates = Some(rates.clone());

        let started = Instant::now();
        let mut metrics = RunMetrics::default();
        let mut trajectory = recorder(options.record_trajectory, steps);
        let mut events = recorder(options.record_events, steps);

        for _ in 0..steps {
            let (lane, direction) = sampler.sample(&mut self.rng);
            let outcome = step(&mut self.track, lane, direction)?;
            self.total_steps += 1;
            metrics.record(outcome);

            if let Some(currents) = self.currents.as_mut() {
                currents.record(lane, direction, outcome);
            }
            if let Some(trajectory) = trajectory.as_mut() {
                trajectory.push(self.track.clone());
            }
            if let Some(events) = events.as_mut() {
                events.push(StepEvent {
                    lane,
                    direction,
                    outcome,
                });
            }
        }

        if let Some(currents) = self.currents.as_mut() {
            currents.push_sample(self.total_steps);
        }
        metrics.elapsed_us = started.elapsed().as_micros() as u64;
        log::debug!(
            "run of {steps} steps: {} blocked ({:.3}), {} swapped, {} rotated ({} total, {}us)",
            metrics.blocked,
            metrics.blocked_fraction(),
            metrics.swapped,
            metrics.rotated,
            self.total_steps,
            metrics.elapsed_us
        );

        Ok(RunReport {
            trajectory,
            events,
            metrics,
        })
    }

    /// Restore the initial track and zero the statistics and step count.
    ///
    /// The RNG stream is not rewound.
    pub fn reset(&mut self) {
        self.track = self.initial.clone();
        self.total_steps = 0;
        if let Some(currents) = self.currents.as_mut() {
            currents.clear();
        }
        log::debug!("simulation reset to initial track");
    }

    /// Draw a fresh random track from the RNG, make it the new initial
    /// track, and zero the statistics and step count.
    pub fn randomize(&mut self) -> Result<(), ConfigError> {
        let track = Track::randomize(self.config.lanes, self.config.columns, &mut self.rng)?;
        self.initial = track;
        self.reset();
        log::debug!("simulation re-randomized");
        Ok(())
    }

    /// Capture everything needed to resume this simulation bit-identically.
    pub fn snapshot(&self) -> SimSnapshot {
        SimSnapshot {
            lanes: self.lanes(),
            columns: self.columns(),
            track: self.track.labels().to_vec(),
            initial: self.initial.labels().to_vec(),
            rates: self.last_rates.clone(),
            total_steps: self.total_steps,
            currents: self.currents.clone(),
            seed: self.seed,
            word_pos: self.rng.get_word_pos(),
        }
    }

    /// Rebuild a simulation from a [`SimSnapshot`].
    ///
    /// Every component is validated against the snapshot's shape before
    /// anything is constructed.
    pub fn restore(snapshot: SimSnapshot) -> Result<Self, ConfigError> {
        let config = SimConfig {
            lanes: snapshot.lanes,
            columns: snapshot.columns,
            seed: Some(snapshot.seed),
            track_currents: snapshot.currents.is_some(),
        };
        config.validate()?;
        let track = Track::from_labels(snapshot.lanes, snapshot.track)?;
        let initial = Track::from_labels(snapshot.lanes, snapshot.initial)?;
        config.check_track(&track)?;
        config.check_track(&initial)?;
        if let Some(rates) = &snapshot.rates {
            rates.check_lanes(snapshot.lanes)?;
        }
        if let Some(currents) = &snapshot.currents {
            if currents.lanes() != snapshot.lanes {
                return Err(ConfigError::ShapeMismatch {
                    expected: (snapshot.lanes, snapshot.columns),
                    got: (currents.lanes(), snapshot.columns),
                });
            }
        }

        let mut rng = ChaCha8Rng::seed_from_u64(snapshot.seed);
        rng.set_word_pos(snapshot.word_pos);
        log::debug!(
            "simulation restored at step {} (seed {})",
            snapshot.total_steps,
            snapshot.seed
        );
        Ok(Self {
            config,
            seed: snapshot.seed,
            rng,
            track,
            initial,
            currents: snapshot.currents,
            total_steps: snapshot.total_steps,
            last_rates: snapshot.rates,
        })
    }

    /// Current track.
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Track captured at construction or the last [`randomize`](Self::randomize).
    pub fn initial_track(&self) -> &Track {
        &self.initial
    }

    /// Number of lanes `n`.
    pub fn lanes(&self) -> usize {
        self.config.lanes
    }

    /// Number of columns `L`.
    pub fn columns(&self) -> usize {
        self.config.columns
    }

    /// Elementary transitions since construction or the last reset.
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Current statistics, if enabled.
    pub fn currents(&self) -> Option<&CurrentCounters> {
        self.currents.as_ref()
    }

    /// The seed the RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rates passed to the most recent successful validation in
    /// [`run`](Self::run).
    pub fn last_rates(&self) -> Option<&HazardRates> {
        self.last_rates.as_ref()
    }

    /// The configuration this simulation was built from, with the resolved
    /// seed filled in.
    pub fn config(&self) -> SimConfig {
        SimConfig {
            seed: Some(self.seed),
            ..self.config.clone()
        }
    }
}

fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::rng().random())
}

#[cfg(test)]
mod tests {
    use super::*;
    use asep_core::{ConfigError, Direction, StepOutcome};
    use asep_test_utils::scenario_track;

    fn tasep(lanes: usize) -> HazardRates {
        HazardRates::uniform(lanes, 1.0, 0.0).unwrap()
    }

    #[test]
    fn new_rejects_bad_shape() {
        assert!(matches!(
            Simulation::new(SimConfig::new(5, 3)),
            Err(ConfigError::TooFewColumns { .. })
        ));
    }

    #[test]
    fn unseeded_construction_records_seed() {
        let sim = Simulation::new(SimConfig::new(2, 5)).unwrap();
        let again = Simulation::new(SimConfig::new(2, 5).with_seed(sim.seed())).unwrap();
        assert_eq!(sim.track(), again.track());
        assert_eq!(sim.config().seed, Some(sim.seed()));
    }

    #[test]
    fn from_track_checks_shape() {
        let err = Simulation::from_track(SimConfig::new(3, 8), scenario_track()).unwrap_err();
        assert!(matches!(err, ConfigError::ShapeMismatch { .. }));
    }

    #[test]
    fn run_rejects_mismatched_rates_without_mutation() {
        let mut sim = Simulation::new(SimConfig::new(3, 7).with_seed(1)).unwrap();
        let before = sim.track().clone();
        let err = sim
            .run(10, &tasep(2), RunOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            RunError::Config(ConfigError::RateLengthMismatch { .. })
        ));
        assert_eq!(sim.track(), &before);
        assert_eq!(sim.total_steps(), 0);
        assert!(sim.last_rates().is_none());
    }

    #[test]
    fn zero_steps_is_a_no_op_but_samples_currents() {
        let mut sim = Simulation::new(SimConfig::new(3, 7).with_seed(1).with_currents(true)).unwrap();
        let before = sim.track().clone();
        let report = sim.run(0, &tasep(3), RunOptions::default().with_trajectory()).unwrap();
        assert_eq!(sim.track(), &before);
        assert_eq!(report.trajectory.unwrap().len(), 0);
        assert_eq!(sim.currents().unwrap().samples().len(), 1);
    }

    #[test]
    fn trajectory_and_events_have_one_entry_per_step() {
        let mut sim = Simulation::new(SimConfig::new(3, 9).with_seed(4)).unwrap();
        let opts = RunOptions::default().with_trajectory().with_events();
        let report = sim.run(200, &tasep(3), opts).unwrap();
        let trajectory = report.trajectory.unwrap();
        let events = report.events.unwrap();
        assert_eq!(trajectory.len(), 200);
        assert_eq!(events.len(), 200);
        assert_eq!(trajectory.last(), Some(sim.track()));
        assert!(events.iter().all(|e| e.direction == Direction::Forward));
    }

    #[test]
    fn total_steps_accumulates_across_runs() {
        let mut sim = Simulation::new(SimConfig::new(2, 6).with_seed(9)).unwrap();
        sim.run(30, &tasep(2), RunOptions::default()).unwrap();
        sim.run(12, &tasep(2), RunOptions::default()).unwrap();
        assert_eq!(sim.total_steps(), 42);
    }

    #[test]
    fn metrics_partition_steps() {
        let mut sim = Simulation::new(SimConfig::new(4, 10).with_seed(2)).unwrap();
        let rates = HazardRates::uniform(4, 0.7, 0.3).unwrap();
        let m = sim.run(1000, &rates, RunOptions::default()).unwrap().metrics;
        assert_eq!(m.steps, 1000);
        assert_eq!(m.blocked + m.swapped + m.rotated, 1000);
        assert_eq!(m.blocked_fraction(), m.blocked as f64 / 1000.0);
    }

    #[test]
    fn reset_restores_initial_track_and_clears_stats() {
        let mut sim = Simulation::new(SimConfig::new(3, 10).with_seed(5).with_currents(true)).unwrap();
        let initial = sim.track().clone();
        sim.run(100, &tasep(3), RunOptions::default()).unwrap();
        sim.reset();
        assert_eq!(sim.track(), &initial);
        assert_eq!(sim.total_steps(), 0);
        let currents = sim.currents().unwrap();
        assert_eq!(currents.net(), 0);
        assert!(currents.samples().is_empty());
    }

    #[test]
    fn randomize_replaces_initial_track() {
        let mut sim = Simulation::new(SimConfig::new(3, 30).with_seed(5)).unwrap();
        let first = sim.initial_track().clone();
        sim.randomize().unwrap();
        assert_ne!(sim.initial_track(), &first);
        assert_eq!(sim.track(), sim.initial_track());
        assert!(sim.track().validate().is_ok());
    }

    #[test]
    fn from_track_runs_scenario() {
        let mut sim =
            Simulation::from_track(SimConfig::new(3, 7).with_seed(0), scenario_track()).unwrap();
        let report = sim
            .run(50, &tasep(3), RunOptions::default().with_events())
            .unwrap();
        let events = report.events.unwrap();
        let blocked = events
            .iter()
            .filter(|e| e.outcome == StepOutcome::Blocked)
            .count() as u64;
        assert_eq!(blocked, report.metrics.blocked);
        assert!(sim.track().validate().is_ok());
    }
}

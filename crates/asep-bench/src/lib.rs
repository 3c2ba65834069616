//! Benchmark profiles for lane-coupled exclusion processes.
//!
//! Provides pre-built [`SimConfig`] profiles shared by the benches and
//! examples:
//!
//! - [`reference_profile`]: 20 lanes on 100 columns with current tracking
//! - [`stress_profile`]: 500 lanes on 1000 columns
//! - [`reference_rates`]: mostly-forward uniform hazards

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use asep_engine::{HazardRates, RunOptions, SimConfig, Simulation};

/// Forward hazard of the reference profiles.
pub const REFERENCE_P: f64 = 1.0;
/// Backward hazard of the reference profiles.
pub const REFERENCE_Q: f64 = 0.25;

/// Build the reference profile: 20 lanes, 100 columns, currents on.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig::new(20, 100).with_seed(seed).with_currents(true)
}

/// Build the stress profile: 500 lanes, 1000 columns.
///
/// Same shape ratio as the half-filled sweeps, at ten times the columns
/// of [`reference_profile`].
pub fn stress_profile(seed: u64) -> SimConfig {
    SimConfig::new(500, 1000).with_seed(seed)
}

/// Uniform rates `(REFERENCE_P, REFERENCE_Q)` for `lanes` lanes.
pub fn reference_rates(lanes: usize) -> HazardRates {
    HazardRates::uniform(lanes, REFERENCE_P, REFERENCE_Q)
        .unwrap_or_else(|e| panic!("reference rates are valid: {e}"))
}

/// Build a simulation from `config` and run `warmup` steps at
/// [`reference_rates`], discarding the report.
///
/// Panics if `config` is invalid; profiles here are known-good.
pub fn warmed_simulation(config: SimConfig, warmup: u64) -> Simulation {
    let rates = reference_rates(config.lanes);
    let mut sim =
        Simulation::new(config).unwrap_or_else(|e| panic!("benchmark profile is valid: {e}"));
    sim.run(warmup, &rates, RunOptions::default())
        .unwrap_or_else(|e| panic!("warmup run failed: {e}"));
    sim
}

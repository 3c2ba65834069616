//! Plain-data capture of a simulation's resumable state.

use asep_core::RawLabel;

use crate::currents::CurrentCounters;
use crate::rates::HazardRates;

/// Everything a persistence layer needs to resume a
/// [`Simulation`](crate::Simulation) bit-identically.
///
/// Produced by [`Simulation::snapshot`](crate::Simulation::snapshot) and
/// consumed by [`Simulation::restore`](crate::Simulation::restore). Fields
/// are public so that external codecs can read and write them directly;
/// `restore` re-validates every one.
#[derive(Clone, Debug, PartialEq)]
pub struct SimSnapshot {
    /// Number of lanes `n`.
    pub lanes: usize,
    /// Number of columns `L`.
    pub columns: usize,
    /// Current track labels.
    pub track: Vec<RawLabel>,
    /// Initial track labels, restored by `reset`.
    pub initial: Vec<RawLabel>,
    /// Hazard rates of the most recent run, if any.
    pub rates: Option<HazardRates>,
    /// Elementary transitions taken so far.
    pub total_steps: u64,
    /// Current statistics, when enabled.
    pub currents: Option<CurrentCounters>,
    /// RNG seed.
    pub seed: u64,
    /// Position of the RNG within its keystream, in 32-bit words.
    pub word_pos: u128,
}

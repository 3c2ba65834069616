//! Hand-built tracks.
//!
//! - [`scenario_track`]: `n=3, L=7`, lane 0 blocked forward, lane 2 swaps forward.
//! - [`forward_rotation_track`]: lane 0 faces its partner; the arc wraps.
//! - [`backward_rotation_track`]: lane 1 faces its partner backwards; no wrap.
//! - [`single_lane_track`]: `n=1`, every hop meets the partner.

use asep_core::Track;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn build(lanes: usize, labels: &[u32]) -> Track {
    Track::from_labels(lanes, labels.to_vec()).expect("fixture track is valid")
}

/// Columns `0..7` hold `[0, 1, 3, 2, 4, 3, 4]`.
pub fn scenario_track() -> Track {
    build(3, &[0, 1, 3, 2, 4, 3, 4])
}

/// Columns `0..7` hold `[0, 3, 1, 5, 2, 4, 4]`.
pub fn forward_rotation_track() -> Track {
    build(3, &[0, 3, 1, 5, 2, 4, 4])
}

/// Columns `0..7` hold `[0, 4, 1, 5, 2, 3, 4]`.
pub fn backward_rotation_track() -> Track {
    build(3, &[0, 4, 1, 5, 2, 3, 4])
}

/// Columns `0..4` hold `[1, 0, 1, 1]`.
pub fn single_lane_track() -> Track {
    build(1, &[1, 0, 1, 1])
}

/// Random track drawn from a ChaCha8 stream seeded with `seed`.
pub fn seeded_track(lanes: usize, columns: usize, seed: u64) -> Track {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Track::randomize(lanes, columns, &mut rng).expect("fixture shape is valid")
}

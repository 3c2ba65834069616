//! [`proptest`] strategies over tracks and hop sequences.

use asep_core::{Direction, Track};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Arbitrary valid track with `1..=max_lanes` lanes and up to `max_extra`
/// type-2 columns.
pub fn arb_track_with(max_lanes: usize, max_extra: usize) -> impl Strategy<Value = Track> {
    (1..=max_lanes, 1..=max_extra, any::<u64>()).prop_map(|(lanes, extra, seed)| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Track::randomize(lanes, lanes + extra, &mut rng).expect("strategy shape is valid")
    })
}

/// Arbitrary valid track of moderate size.
pub fn arb_track() -> impl Strategy<Value = Track> {
    arb_track_with(6, 14)
}

/// Either hop direction.
pub fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Backward)]
}

/// Up to `max_len` `(lane_seed, direction)` pairs. Reduce `lane_seed`
/// modulo the lane count before use.
pub fn arb_moves(max_len: usize) -> impl Strategy<Value = Vec<(usize, Direction)>> {
    prop::collection::vec((any::<usize>(), arb_direction()), 0..=max_len)
}

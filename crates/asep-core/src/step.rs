//! Single elementary transition.
//!
//! [`step`] moves one lane's type-1 particle one column in a given
//! direction. Depending on what occupies the destination column the hop is
//! refused, performed as a local exchange, or performed as a non-local
//! rotation of the arc behind the mover.
//!
//! # Rotation
//!
//! When the destination holds a type-2 particle affiliated with the mover's
//! own lane (its partner), the partner cannot simply be exchanged. Let
//! `back` be the column of the type-1 particle of the lane *behind* the
//! mover (`lane - direction`, cyclically). Walking from `back` in the
//! direction of motion, the arc `back+d, back+2d, ..., ncol` is shifted one
//! slot forward: the partner at `ncol` is consumed, the mover lands on
//! `ncol`, every other label in the arc advances one slot, and the slot
//! adjacent to `back` receives a fresh type-2 label affiliated with the
//! lane behind. The `back` column itself never moves.
//!
//! The arc is addressed with modular indices, so an arc that crosses the
//! `L-1 / 0` boundary takes the same path as one that does not.

use crate::circular::{circular_column, circular_distance, circular_lane};
use crate::error::PreconditionError;
use crate::label::{Direction, Label, RawLabel};
use crate::track::Track;

/// What a call to [`step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepOutcome {
    /// The destination held a type-1 particle; the track is unchanged.
    Blocked,
    /// The destination held a type-2 particle of another lane; the two
    /// columns were exchanged.
    Swapped,
    /// The destination held the mover's partner; the arc behind the mover
    /// was rotated.
    Rotated,
}

impl StepOutcome {
    /// Whether the type-1 particle moved.
    #[inline]
    pub fn moved(self) -> bool {
        !matches!(self, Self::Blocked)
    }
}

/// Apply one elementary transition to `track`.
///
/// # Errors
///
/// Returns [`PreconditionError::LaneOutOfRange`] if `lane >= track.lanes()`,
/// or [`PreconditionError::MissingLane`] if a required type-1 particle
/// cannot be found. Both checks run before any mutation.
///
/// # Examples
///
/// ```
/// use asep_core::{step, Direction, StepOutcome, Track};
///
/// let mut track = Track::from_labels(3, vec![0, 1, 3, 2, 4, 3, 4]).unwrap();
/// assert_eq!(step(&mut track, 0, Direction::Forward).unwrap(), StepOutcome::Blocked);
/// assert_eq!(step(&mut track, 2, Direction::Forward).unwrap(), StepOutcome::Swapped);
/// assert_eq!(track.labels(), &[0, 1, 3, 4, 2, 3, 4]);
/// ```
pub fn step(
    track: &mut Track,
    lane: usize,
    direction: Direction,
) -> Result<StepOutcome, PreconditionError> {
    let lanes = track.lanes();
    if lane >= lanes {
        return Err(PreconditionError::LaneOutOfRange { lane, lanes });
    }
    let col = track
        .position_of(lane)
        .ok_or(PreconditionError::MissingLane { lane })?;
    let ncol = circular_column(col, direction.sign(), track.columns());

    match track.label(ncol) {
        Label::Type1 { .. } => Ok(StepOutcome::Blocked),
        Label::Type2 { lane: affiliation } if affiliation != lane => {
            track.swap_columns(col, ncol);
            Ok(StepOutcome::Swapped)
        }
        Label::Type2 { .. } => {
            rotate_past_partner(track, lane, col, ncol, direction)?;
            Ok(StepOutcome::Rotated)
        }
    }
}

fn rotate_past_partner(
    track: &mut Track,
    lane: usize,
    col: usize,
    ncol: usize,
    direction: Direction,
) -> Result<(), PreconditionError> {
    let lanes = track.lanes();
    let len = track.columns();
    let sign = direction.sign();

    let back_lane = circular_lane(lane, direction.reverse().sign(), lanes);
    let back_col = track
        .position_of(back_lane)
        .ok_or(PreconditionError::MissingLane { lane: back_lane })?;
    let fill = Label::Type2 { lane: back_lane }.encode(lanes);

    if back_col == col {
        // Single lane: the partner already carries the lane-behind label.
        track.swap_columns(col, ncol);
        return Ok(());
    }

    let arc_len = circular_distance(back_col, ncol, sign, len);
    log::trace!(
        "rotate lane {lane} dir {direction}: back lane {back_lane} at {back_col}, \
         arc {arc_len} to {ncol}, wraps={}",
        (col as isize - back_col as isize) * sign < 0
    );

    shift_arc(track, back_col, arc_len, sign, fill);
    Ok(())
}

/// Shift the labels at `anchor + k*sign` for `k in 1..arc_len` one slot in
/// the direction of `sign`, overwriting `anchor + arc_len*sign`, then write
/// `fill` at `anchor + sign`.
fn shift_arc(track: &mut Track, anchor: usize, arc_len: usize, sign: isize, fill: RawLabel) {
    let len = track.columns();
    let at = |k: usize| circular_column(anchor, sign * k as isize, len);
    for k in (1..arc_len).rev() {
        let moved = track.raw(at(k));
        track.set_raw(at(k + 1), moved);
    }
    track.set_raw(at(1), fill);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn scenario() -> Track {
        Track::from_labels(3, vec![0, 1, 3, 2, 4, 3, 4]).unwrap()
    }

    // ── Blocked ─────────────────────────────────────────────────

    #[test]
    fn blocked_leaves_track_untouched() {
        let mut track = scenario();
        let before = track.clone();
        let outcome = step(&mut track, 0, Direction::Forward).unwrap();
        assert_eq!(outcome, StepOutcome::Blocked);
        assert_eq!(track, before);
    }

    #[test]
    fn blocked_across_boundary() {
        // Lane 1 at column 4, lane 0 at column 0: hopping forward from
        // column 4 wraps to column 0.
        let mut track = Track::from_labels(2, vec![0, 2, 3, 2, 1]).unwrap();
        let before = track.clone();
        assert_eq!(
            step(&mut track, 1, Direction::Forward).unwrap(),
            StepOutcome::Blocked
        );
        assert_eq!(track, before);
    }

    // ── Swapped ─────────────────────────────────────────────────

    #[test]
    fn swapped_exchanges_columns() {
        let mut track = scenario();
        let outcome = step(&mut track, 2, Direction::Forward).unwrap();
        assert_eq!(outcome, StepOutcome::Swapped);
        assert_eq!(track.labels(), &[0, 1, 3, 4, 2, 3, 4]);
    }

    #[test]
    fn swapped_backward_wraps_to_last_column() {
        let mut track = scenario();
        // Lane 0 at column 0, column 6 holds type-2 of lane 1.
        let outcome = step(&mut track, 0, Direction::Backward).unwrap();
        assert_eq!(outcome, StepOutcome::Swapped);
        assert_eq!(track.labels(), &[4, 1, 3, 2, 4, 3, 0]);
    }

    #[test]
    fn swap_is_self_inverse() {
        let mut track = scenario();
        let before = track.clone();
        assert_eq!(
            step(&mut track, 2, Direction::Forward).unwrap(),
            StepOutcome::Swapped
        );
        assert_eq!(
            step(&mut track, 2, Direction::Backward).unwrap(),
            StepOutcome::Swapped
        );
        assert_eq!(track, before);
    }

    // ── Rotated ─────────────────────────────────────────────────

    #[test]
    fn rotated_forward_with_wrapping_arc() {
        // Lane 0 at column 0 faces its partner (label 3) at column 1.
        // Lane behind is 2, at column 4; the arc 5, 6, 0, 1 wraps.
        let mut track = Track::from_labels(3, vec![0, 3, 1, 5, 2, 4, 4]).unwrap();
        let outcome = step(&mut track, 0, Direction::Forward).unwrap();
        assert_eq!(outcome, StepOutcome::Rotated);
        assert_eq!(track.labels(), &[4, 0, 1, 5, 2, 5, 4]);
        assert_eq!(track.position_of(0), Some(1));
        assert_eq!(track.position_of(2), Some(4));
    }

    #[test]
    fn rotated_backward_without_wrapping() {
        // Lane 1 at column 2 faces its partner (label 4) at column 1.
        // Lane behind is 2, at column 4; the arc is 3, 2, 1.
        let mut track = Track::from_labels(3, vec![0, 4, 1, 5, 2, 3, 4]).unwrap();
        let outcome = step(&mut track, 1, Direction::Backward).unwrap();
        assert_eq!(outcome, StepOutcome::Rotated);
        assert_eq!(track.labels(), &[0, 1, 5, 5, 2, 3, 4]);
        assert_eq!(track.position_of(2), Some(4), "back particle stays put");
    }

    #[test]
    fn rotated_backward_with_wrapping_arc() {
        // Lane 1 at column 5 faces its partner at column 4. Lane behind is
        // 0, at column 1; the arc 0, 6, 5, 4 wraps.
        let mut track = Track::from_labels(2, vec![2, 0, 3, 2, 3, 1, 2]).unwrap();
        let outcome = step(&mut track, 1, Direction::Backward).unwrap();
        assert_eq!(outcome, StepOutcome::Rotated);
        assert_eq!(track.labels(), &[2, 0, 3, 2, 1, 2, 2]);
    }

    #[test]
    fn rotated_single_lane_exchanges_with_partner() {
        let mut track = Track::from_labels(1, vec![1, 0, 1, 1]).unwrap();
        let outcome = step(&mut track, 0, Direction::Forward).unwrap();
        assert_eq!(outcome, StepOutcome::Rotated);
        assert_eq!(track.labels(), &[1, 1, 0, 1]);
    }

    #[test]
    fn rotation_relabels_exactly_one_type2() {
        let mut track = Track::from_labels(3, vec![0, 3, 1, 5, 2, 4, 4]).unwrap();
        let before = track.type2_counts();
        step(&mut track, 0, Direction::Forward).unwrap();
        let after = track.type2_counts();
        // Partner of lane 0 consumed, one lane-2 label created.
        assert_eq!(after[0], before[0] - 1);
        assert_eq!(after[2], before[2] + 1);
        assert_eq!(after[1], before[1]);
    }

    // ── Preconditions ───────────────────────────────────────────

    #[test]
    fn lane_out_of_range_is_rejected_without_mutation() {
        let mut track = scenario();
        let before = track.clone();
        assert_eq!(
            step(&mut track, 3, Direction::Forward),
            Err(PreconditionError::LaneOutOfRange { lane: 3, lanes: 3 })
        );
        assert_eq!(track, before);
    }

    // ── Properties ──────────────────────────────────────────────

    fn arb_track() -> impl Strategy<Value = Track> {
        (1usize..6, 1usize..12, any::<u64>()).prop_map(|(lanes, extra, seed)| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            Track::randomize(lanes, lanes + extra, &mut rng).unwrap()
        })
    }

    fn arb_moves() -> impl Strategy<Value = Vec<(usize, bool)>> {
        prop::collection::vec((0usize..64, any::<bool>()), 0..64)
    }

    fn dir(forward: bool) -> Direction {
        if forward {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    proptest! {
        #[test]
        fn invariants_hold_after_every_step(track in arb_track(), moves in arb_moves()) {
            let mut track = track;
            for (lane, forward) in moves {
                let lane = lane % track.lanes();
                step(&mut track, lane, dir(forward)).unwrap();
                prop_assert!(track.validate().is_ok(), "broken track {}", track);
            }
        }

        #[test]
        fn step_is_deterministic(track in arb_track(), moves in arb_moves()) {
            let mut a = track.clone();
            let mut b = track;
            for (lane, forward) in moves {
                let lane = lane % a.lanes();
                let oa = step(&mut a, lane, dir(forward)).unwrap();
                let ob = step(&mut b, lane, dir(forward)).unwrap();
                prop_assert_eq!(oa, ob);
                prop_assert_eq!(&a, &b);
            }
        }

        #[test]
        fn mover_lands_on_neighbour_unless_blocked(track in arb_track(), lane in 0usize..64, forward in any::<bool>()) {
            let mut track = track;
            let lane = lane % track.lanes();
            let direction = dir(forward);
            let col = track.position_of(lane).unwrap();
            let ncol = circular_column(col, direction.sign(), track.columns());
            let before = track.clone();
            let outcome = step(&mut track, lane, direction).unwrap();
            match outcome {
                StepOutcome::Blocked => prop_assert_eq!(track, before),
                _ => prop_assert_eq!(track.position_of(lane), Some(ncol)),
            }
        }

        #[test]
        fn swap_then_reverse_restores_position(track in arb_track(), lane in 0usize..64, forward in any::<bool>()) {
            let mut track = track;
            let lane = lane % track.lanes();
            let col = track.position_of(lane).unwrap();
            let direction = dir(forward);
            if step(&mut track, lane, direction).unwrap() == StepOutcome::Swapped {
                step(&mut track, lane, direction.reverse()).unwrap();
                prop_assert_eq!(track.position_of(lane), Some(col));
            }
        }
    }
}

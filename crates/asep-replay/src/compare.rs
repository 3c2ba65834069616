//! Event-log replay and divergence reporting.

use asep_core::{step, StepOutcome, Track};
use asep_engine::StepEvent;

use crate::error::ReplayError;
use crate::hash::track_hash;

/// What diverged between the recorded and the replayed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivergenceKind {
    /// A single transition produced a different outcome.
    Outcome {
        /// Index of the event in the log.
        index: usize,
        /// Outcome from the log.
        recorded: StepOutcome,
        /// Outcome from the replay.
        replayed: StepOutcome,
    },
    /// Every outcome matched but the final track hash did not.
    FinalHash {
        /// Hash from the recorded run.
        recorded: u64,
        /// Hash of the replayed final track.
        replayed: u64,
    },
}

/// First divergence found by [`replay_and_compare`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivergenceReport {
    /// Events applied before the divergence was detected.
    pub events_applied: usize,
    /// The divergence itself.
    pub kind: DivergenceKind,
}

fn apply(track: &mut Track, index: usize, event: &StepEvent) -> Result<StepOutcome, ReplayError> {
    step(track, event.lane, event.direction).map_err(|source| ReplayError::Step { index, source })
}

/// Re-apply `events` to a copy of `initial` and return the final track.
///
/// # Errors
///
/// [`ReplayError::Step`] if an event names a lane the track does not
/// have, and [`ReplayError::OutcomeMismatch`] at the first event whose
/// replayed outcome differs from the logged one.
pub fn replay_events(initial: &Track, events: &[StepEvent]) -> Result<Track, ReplayError> {
    let mut track = initial.clone();
    for (index, event) in events.iter().enumerate() {
        let replayed = apply(&mut track, index, event)?;
        if replayed != event.outcome {
            return Err(ReplayError::OutcomeMismatch {
                index,
                recorded: event.outcome,
                replayed,
            });
        }
    }
    Ok(track)
}

/// Replay `events` from `initial` and compare against `recorded_hash`,
/// the [`track_hash`] of the recorded run's final track.
///
/// Returns `Ok(None)` when every outcome and the final hash match, or
/// `Ok(Some(report))` describing the first divergence. Only events that
/// cannot be applied at all are errors.
pub fn replay_and_compare(
    initial: &Track,
    events: &[StepEvent],
    recorded_hash: u64,
) -> Result<Option<DivergenceReport>, ReplayError> {
    let mut track = initial.clone();
    for (index, event) in events.iter().enumerate() {
        let replayed = apply(&mut track, index, event)?;
        if replayed != event.outcome {
            log::debug!("replay diverged at event {index}");
            return Ok(Some(DivergenceReport {
                events_applied: index + 1,
                kind: DivergenceKind::Outcome {
                    index,
                    recorded: event.outcome,
                    replayed,
                },
            }));
        }
    }

    let replayed_hash = track_hash(&track);
    if replayed_hash != recorded_hash {
        log::debug!(
            "replay final hash mismatch: recorded={recorded_hash:#018x}, replayed={replayed_hash:#018x}"
        );
        return Ok(Some(DivergenceReport {
            events_applied: events.len(),
            kind: DivergenceKind::FinalHash {
                recorded: recorded_hash,
                replayed: replayed_hash,
            },
        }));
    }
    Ok(None)
}

//! Record a run's event log, replay it from the initial track, and check
//! the replay reproduces every outcome and the final track hash.

use asep_core::{step, Direction, StepOutcome, Track};
use asep_engine::{HazardRates, RunOptions, SimConfig, Simulation, StepEvent};
use asep_replay::{
    replay_and_compare, replay_events, simulation_config_hash, track_hash, DivergenceKind,
    RecordedRun,
};
use asep_test_utils::{
    arb_direction, arb_moves, arb_track_with, backward_rotation_track, forward_rotation_track,
    seeded_track, single_lane_track,
};
use proptest::prelude::*;

fn recorded_run(
    lanes: usize,
    columns: usize,
    seed: u64,
    steps: u64,
) -> (Simulation, Vec<StepEvent>) {
    let mut sim = Simulation::new(SimConfig::new(lanes, columns).with_seed(seed)).unwrap();
    let rates = HazardRates::uniform(lanes, 0.7, 0.3).unwrap();
    let events = sim
        .run(steps, &rates, RunOptions::default().with_events())
        .unwrap()
        .events
        .unwrap();
    (sim, events)
}

#[test]
fn replay_reproduces_final_track() {
    let (sim, events) = recorded_run(5, 19, 1234, 3_000);
    let replayed = replay_events(sim.initial_track(), &events).unwrap();
    assert_eq!(&replayed, sim.track());
    assert_eq!(
        replay_and_compare(sim.initial_track(), &events, track_hash(sim.track())).unwrap(),
        None
    );
}

#[test]
fn truncated_log_is_detected_by_hash() {
    let (sim, events) = recorded_run(3, 9, 88, 1_000);
    // Stop just short of the last move, so the replay ends one move behind.
    let cut = events.iter().rposition(|e| e.outcome.moved()).unwrap();
    let report = replay_and_compare(sim.initial_track(), &events[..cut], track_hash(sim.track()))
        .unwrap()
        .unwrap();
    assert!(matches!(report.kind, DivergenceKind::FinalHash { .. }));
}

#[test]
fn rotations_replay_from_fixture() {
    let mut sim = Simulation::from_track(
        SimConfig::new(3, 7).with_seed(5),
        forward_rotation_track(),
    )
    .unwrap();
    let rates = HazardRates::uniform(3, 1.0, 0.2).unwrap();
    let events = sim
        .run(2_000, &rates, RunOptions::default().with_events())
        .unwrap()
        .events
        .unwrap();
    let replayed = replay_events(&forward_rotation_track(), &events).unwrap();
    assert_eq!(&replayed, sim.track());
}

#[test]
fn backward_biased_run_replays_from_fixture() {
    let mut sim = Simulation::from_track(
        SimConfig::new(3, 7).with_seed(21),
        backward_rotation_track(),
    )
    .unwrap();
    let rates = HazardRates::uniform(3, 0.1, 1.0).unwrap();
    let run = RecordedRun::record(&mut sim, 2_000, &rates).unwrap();
    assert!(run.events.iter().any(|e| e.outcome == StepOutcome::Rotated));
    assert_eq!(run.initial, backward_rotation_track());
    assert_eq!(run.verify(&sim), Ok(None));
}

#[test]
fn single_lane_run_replays() {
    let mut sim =
        Simulation::from_track(SimConfig::new(1, 4).with_seed(3), single_lane_track()).unwrap();
    let rates = HazardRates::uniform(1, 0.6, 0.4).unwrap();
    let run = RecordedRun::record(&mut sim, 500, &rates).unwrap();
    // One lane: every hop meets the partner.
    assert!(run.events.iter().all(|e| e.outcome == StepOutcome::Rotated));
    assert_eq!(replay_events(&run.initial, &run.events).unwrap(), *sim.track());
    assert_eq!(run.verify(&sim), Ok(None));
}

#[test]
fn same_seed_same_fingerprints() {
    let (a, _) = recorded_run(4, 10, 9, 0);
    let (b, _) = recorded_run(4, 10, 9, 0);
    assert_eq!(simulation_config_hash(&a), simulation_config_hash(&b));
    assert_eq!(track_hash(a.initial_track()), track_hash(b.initial_track()));
    assert_eq!(a.initial_track(), &seeded_track(4, 10, 9));
}

/// Apply `moves` directly with `step`, logging each as an event.
fn direct_log(track: &Track, moves: &[(usize, Direction)]) -> (Track, Vec<StepEvent>) {
    let mut track = track.clone();
    let mut events = Vec::with_capacity(moves.len());
    for &(lane_seed, direction) in moves {
        let lane = lane_seed % track.lanes();
        let outcome = step(&mut track, lane, direction).unwrap();
        events.push(StepEvent {
            lane,
            direction,
            outcome,
        });
    }
    (track, events)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn any_seeded_run_replays(
        lanes in 1usize..5,
        extra in 1usize..10,
        seed in any::<u64>(),
        steps in 0u64..500,
    ) {
        let (sim, events) = recorded_run(lanes, lanes + extra, seed, steps);
        prop_assert_eq!(events.len() as u64, steps);
        let result = replay_and_compare(sim.initial_track(), &events, track_hash(sim.track()));
        prop_assert_eq!(result, Ok(None));
    }

    #[test]
    fn direct_step_logs_replay(track in arb_track_with(5, 10), moves in arb_moves(64)) {
        let (end, events) = direct_log(&track, &moves);
        prop_assert_eq!(replay_events(&track, &events), Ok(end.clone()));
        prop_assert_eq!(replay_and_compare(&track, &events, track_hash(&end)), Ok(None));
    }

    #[test]
    fn flipped_outcome_is_reported(
        track in arb_track_with(4, 8),
        moves in arb_moves(32),
        flip in any::<prop::sample::Index>(),
        direction in arb_direction(),
    ) {
        let (_, mut events) = direct_log(&track, &moves);
        prop_assume!(!events.is_empty());
        let index = flip.index(events.len());
        let forged = match events[index].outcome {
            StepOutcome::Blocked => StepOutcome::Swapped,
            _ => StepOutcome::Blocked,
        };
        events[index].outcome = forged;
        let report = replay_and_compare(&track, &events, 0).unwrap().unwrap();
        prop_assert_eq!(report.events_applied, index + 1);
        prop_assert!(matches!(report.kind, DivergenceKind::Outcome { .. }), "expected Outcome divergence, got {:?}", report.kind);

        // Everything before the forged event, plus one fresh hop, replays.
        events.truncate(index);
        let (end, _) = direct_log(&track, &moves[..index]);
        prop_assert_eq!(replay_events(&track, &events), Ok(end.clone()));
        let mut extended = end.clone();
        let outcome = step(&mut extended, 0, direction).unwrap();
        events.push(StepEvent { lane: 0, direction, outcome });
        prop_assert_eq!(replay_events(&track, &events), Ok(extended));
    }
}

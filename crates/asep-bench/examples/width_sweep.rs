//! Band-width sweep over track length.
//!
//! For each `L`, runs half-filled (`n = L / 2`) totally asymmetric
//! simulations, averages the restricted type-1 occupancy after a warmup,
//! and prints the diagonal profile's first buckets.

use asep_engine::{HazardRates, RunOptions, SimConfig, Simulation};
use asep_obs::{diagonal_profile, mean_occupancy, project_trajectory, Species};

const REPS: u64 = 4;
const WARMUP: u64 = 5_000;
const SAMPLES: u64 = 5_000;
const WIDTH: usize = 10;

fn main() {
    println!("=== Diagonal profile sweep ===\n");

    for columns in (20..=100).step_by(20) {
        let lanes = columns / 2;
        let rates = HazardRates::uniform(lanes, 1.0, 0.0).unwrap();
        let mut accumulated = vec![0.0; WIDTH];

        for rep in 0..REPS {
            let config = SimConfig::new(lanes, columns).with_seed(rep);
            let mut sim = Simulation::new(config).unwrap();
            sim.run(WARMUP, &rates, RunOptions::default()).unwrap();
            let trajectory = sim
                .run(SAMPLES, &rates, RunOptions::default().with_trajectory())
                .unwrap()
                .trajectory
                .unwrap();

            let grids = project_trajectory(&trajectory, true);
            let mean = mean_occupancy(&grids, Species::Type1, 0).unwrap();
            let profile = diagonal_profile(&mean);
            for (acc, &m) in accumulated.iter_mut().zip(profile.head(WIDTH)) {
                *acc += m;
            }
        }

        let row: Vec<String> = accumulated
            .iter()
            .map(|sum| format!("{:.3}", sum / REPS as f64))
            .collect();
        println!("L = {columns:>3}  n = {lanes:>2}  [{}]", row.join(", "));
    }
}

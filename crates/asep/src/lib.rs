//! Two-species asymmetric exclusion process on `n` coupled periodic lanes.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the `asep-*` sub-crates. For most users, adding `asep` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use asep::prelude::*;
//!
//! // 4 lanes on a 12-column track, fixed seed, currents recorded.
//! let config = SimConfig::new(4, 12).with_seed(42).with_currents(true);
//! let mut sim = Simulation::new(config).unwrap();
//! let rates = HazardRates::uniform(4, 1.0, 0.25).unwrap();
//!
//! let report = sim
//!     .run(2_000, &rates, RunOptions::default().with_trajectory())
//!     .unwrap();
//! assert_eq!(sim.total_steps(), 2_000);
//!
//! // Average the type-1 occupancy after a 500-step transient.
//! let grids = project_trajectory(&report.trajectory.unwrap(), true);
//! let mean = mean_occupancy(&grids, Species::Type1, 500).unwrap();
//! assert_eq!(mean.get(0, 0), 1.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `asep-core` | `Track`, labels, `step`, errors |
//! | [`engine`] | `asep-engine` | `Simulation`, rates, currents, snapshots |
//! | [`obs`] | `asep-obs` | Grid projection, mean occupancy, profiles |
//! | [`replay`] | `asep-replay` | Track hashing and event-log replay |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Track encoding and the stepping engine (`asep-core`).
pub use asep_core as types;

/// Run loop, hazard rates and current statistics (`asep-engine`).
///
/// [`engine::Simulation`] is the owned aggregate; capture and resume it
/// with [`engine::SimSnapshot`].
pub use asep_engine as engine;

/// Occupancy grids and their averages (`asep-obs`).
pub use asep_obs as obs;

/// Deterministic replay verification (`asep-replay`).
pub use asep_replay as replay;

/// Common imports for typical usage.
///
/// ```rust
/// use asep::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use asep_core::{step, Direction, Label, StepOutcome, Track};

    // Errors
    pub use asep_core::{ConfigError, PreconditionError};
    pub use asep_engine::RunError;
    pub use asep_obs::ObsError;
    pub use asep_replay::ReplayError;

    // Engine
    pub use asep_engine::{
        CurrentCounters, HazardRates, RunOptions, RunReport, SimConfig, SimSnapshot, Simulation,
    };

    // Observation
    pub use asep_obs::{mean_occupancy, project, project_trajectory, OccupancyGrid, Species};
}

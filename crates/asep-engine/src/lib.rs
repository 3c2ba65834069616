//! Run loop, current statistics and simulation state for lane-coupled
//! exclusion processes.
//!
//! Provides [`Simulation`], the owned aggregate that drives many
//! elementary transitions from per-lane [`HazardRates`], optionally
//! recording the trajectory, the event log and per-lane particle currents.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod currents;
pub mod metrics;
pub mod rates;
pub mod run;
pub mod sim;
pub mod snapshot;

pub use config::{RunError, SimConfig};
pub use currents::{CurrentCounters, CurrentSample};
pub use metrics::RunMetrics;
pub use rates::{EventSampler, HazardRates};
pub use run::{RunOptions, RunReport, StepEvent};
pub use sim::Simulation;
pub use snapshot::SimSnapshot;

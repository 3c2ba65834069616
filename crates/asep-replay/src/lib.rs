//! Deterministic replay for lane-coupled exclusion processes.
//!
//! A run recorded with [`RunOptions::with_events`](asep_engine::RunOptions::with_events)
//! carries every `(lane, direction, outcome)` triple. Because the stepping
//! rule is deterministic, re-applying those triples to the initial track
//! must reproduce each outcome and the final track exactly.
//!
//! - [`track_hash`] / [`config_hash`]: FNV-1a fingerprints
//! - [`replay_events`]: re-apply an event log, failing on the first
//!   outcome that differs
//! - [`replay_and_compare`]: replay and check the final hash, reporting
//!   divergences instead of failing
//! - [`RecordedRun`]: a run's log and fingerprints, checked against the
//!   configuration it was recorded under

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compare;
pub mod error;
pub mod hash;
pub mod record;

pub use compare::{replay_and_compare, replay_events, DivergenceKind, DivergenceReport};
pub use error::ReplayError;
pub use hash::{config_hash, track_hash};
pub use record::{simulation_config_hash, RecordedRun};

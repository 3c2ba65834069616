//! Track encoding and single-step dynamics for a two-species exclusion
//! process on `n` coupled periodic lanes.
//!
//! This is the leaf crate of the workspace. It defines:
//!
//! - [`Track`]: the `L`-column circular label array and its invariants
//! - [`Label`] / [`Direction`]: decoded column contents and hop directions
//! - [`step`]: the elementary transition (blocked, swapped or rotated)
//! - [`circular_column`] / [`circular_lane`]: modular index helpers
//! - [`ConfigError`] / [`PreconditionError`]: the two error families

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod circular;
pub mod error;
pub mod label;
pub mod step;
pub mod track;

pub use circular::{circular_column, circular_distance, circular_lane};
pub use error::{ConfigError, PreconditionError};
pub use label::{Direction, Label, RawLabel};
pub use step::{step, StepOutcome};
pub use track::Track;

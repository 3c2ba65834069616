//! Occupancy-grid projection for lane-coupled exclusion processes.
//!
//! Turns a [`Track`](asep_core::Track) into a dense `lanes x columns` grid
//! consumed by visualisation and analysis code, and averages sequences of
//! such grids.
//!
//! - [`project`] / [`project_trajectory`]: track(s) to [`OccupancyGrid`]
//! - [`mean_occupancy`]: per-species average after a transient
//! - [`diagonal_profile`]: band width of a mean grid around the diagonal

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod mean;
pub mod profile;

pub use error::ObsError;
pub use grid::{project, project_trajectory, OccupancyGrid};
pub use mean::{mean_occupancy, MeanGrid, Species};
pub use profile::{diagonal_bucket, diagonal_profile, DiagonalProfile};

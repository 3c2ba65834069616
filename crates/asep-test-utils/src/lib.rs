//! Test fixtures and property-test strategies for asep development.
//!
//! Provides hand-built tracks covering each stepping case and
//! [`proptest`] strategies producing arbitrary valid tracks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;
mod strategies;

pub use fixtures::{
    backward_rotation_track, forward_rotation_track, scenario_track, seeded_track,
    single_lane_track,
};
pub use strategies::{arb_direction, arb_moves, arb_track, arb_track_with};

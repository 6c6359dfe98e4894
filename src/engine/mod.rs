//! Engine: the per-hand session loop and the outcome tallies it feeds.

pub mod session;
pub mod stats;

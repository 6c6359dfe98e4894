//! AUTOPLAYER: card-counting blackjack agent
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod client;
pub mod config;
pub mod engine;
pub mod strategy;
pub mod types;

//! Game server integration.
//!
//! Defines the `GameClient` trait the session loop drives, and the HTTP
//! implementation that talks to the remote blackjack server.

pub mod http;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::GameState;

/// Abstraction over the remote blackjack engine.
///
/// Every action returns the full snapshot of the hand afterwards. Failures
/// are returned as errors and are never retried by the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameClient: Send + Sync {
    /// Open a session. The returned snapshot carries the session id.
    async fn start_game(&self) -> Result<GameState>;

    /// Place a bet, which deals the opening cards.
    async fn place_bet(&self, session_id: &str, amount: u32) -> Result<GameState>;

    async fn hit(&self, session_id: &str) -> Result<GameState>;

    async fn stand(&self, session_id: &str) -> Result<GameState>;

    /// Start the next hand within the same session.
    async fn new_game(&self, session_id: &str) -> Result<GameState>;

    /// Close the session.
    async fn finish_game(&self, session_id: &str) -> Result<()>;
}

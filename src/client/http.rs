//! HTTP client for the remote blackjack server.
//!
//! JSON over HTTP, one POST per action:
//! - `POST {base}/start` opens a session
//! - `POST {base}/{session}/bet` with `{"amount": n}`
//! - `POST {base}/{session}/hit` | `/stand` | `/newgame`
//! - `POST {base}/{session}/finish` closes the session
//!
//! Auth: HTTP basic auth with the account username and password on every
//! request. Errors are surfaced as-is; nothing is retried.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use super::GameClient;
use crate::types::GameState;

const USER_AGENT: &str = "AUTOPLAYER/0.1.0 (blackjack-agent)";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Non-success answer from the game server.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("game server {endpoint} error {status}: {body}")]
    Status {
        endpoint: String,
        status: StatusCode,
        body: String,
    },
}

#[derive(Debug, Serialize)]
struct BetRequest {
    amount: u32,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Blackjack server client.
pub struct HttpGameClient {
    http: Client,
    base_url: String,
    username: String,
    password: SecretString,
}

impl HttpGameClient {
    pub fn new(
        base_url: &str,
        username: String,
        password: SecretString,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client for game server")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password,
        })
    }

    // -- Internal helpers ------------------------------------------------

    /// URL for a per-session action.
    fn session_url(&self, session_id: &str, action: &str) -> String {
        format!(
            "{}/{}/{action}",
            self.base_url,
            urlencoding::encode(session_id)
        )
    }

    /// Send an authenticated POST and fail on non-2xx.
    async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response> {
        debug!(url = %url, "Game server request");

        let mut req = self
            .http
            .post(url)
            .basic_auth(&self.username, Some(self.password.expose_secret()));
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req
            .send()
            .await
            .with_context(|| format!("Game server {endpoint} request failed"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                endpoint: endpoint.to_string(),
                status,
                body,
            }
            .into());
        }

        Ok(resp)
    }

    /// POST and decode the returned snapshot.
    async fn action(&self, url: &str, endpoint: &str, body: Option<&BetRequest>) -> Result<GameState> {
        let resp = self.post(url, endpoint, body).await?;
        let state: GameState = resp
            .json()
            .await
            .with_context(|| format!("Failed to parse game server {endpoint} response"))?;
        debug!(endpoint, %state, "Snapshot received");
        Ok(state)
    }
}

#[async_trait]
impl GameClient for HttpGameClient {
    async fn start_game(&self) -> Result<GameState> {
        let url = format!("{}/start", self.base_url);
        let state = self.action(&url, "start", None).await?;
        info!(session_id = %state.session_id, balance = %state.balance, "Session started");
        Ok(state)
    }

    async fn place_bet(&self, session_id: &str, amount: u32) -> Result<GameState> {
        let url = self.session_url(session_id, "bet");
        self.action(&url, "bet", Some(&BetRequest { amount })).await
    }

    async fn hit(&self, session_id: &str) -> Result<GameState> {
        let url = self.session_url(session_id, "hit");
        self.action(&url, "hit", None).await
    }

    async fn stand(&self, session_id: &str) -> Result<GameState> {
        let url = self.session_url(session_id, "stand");
        self.action(&url, "stand", None).await
    }

    async fn new_game(&self, session_id: &str) -> Result<GameState> {
        let url = self.session_url(session_id, "newgame");
        self.action(&url, "newgame", None).await
    }

    async fn finish_game(&self, session_id: &str) -> Result<()> {
        let url = self.session_url(session_id, "finish");
        self.post::<BetRequest>(&url, "finish", None).await?;
        info!(session_id, "Session finished");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

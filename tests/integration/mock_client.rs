//! Scripted game server for integration testing.
//!
//! Provides a deterministic `GameClient` implementation that replays
//! queued snapshots per action and records every call made against it,
//! all in-memory with no network.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use autoplayer::client::GameClient;
use autoplayer::types::{GameState, Outcome, Phase};

pub const SESSION_ID: &str = "mock-session";

/// A call received by the mock, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Start,
    Bet(u32),
    Hit,
    Stand,
    NewGame,
    Finish,
}

#[derive(Default)]
struct Script {
    bets: VecDeque<GameState>,
    hits: VecDeque<GameState>,
    stands: VecDeque<GameState>,
}

/// A mock blackjack server driven by queued snapshots.
///
/// `new_game` always answers with a fresh betting snapshot, so tests only
/// script the bet/hit/stand responses they care about.
pub struct MockGameClient {
    script: Mutex<Script>,
    calls: Arc<Mutex<Vec<Call>>>,
    balance: Decimal,
    /// If set, every call once this many calls have succeeded returns
    /// the error message.
    force_error: Mutex<Option<(usize, String)>>,
}

impl MockGameClient {
    pub fn new(balance: Decimal) -> Self {
        Self {
            script: Mutex::new(Script::default()),
            calls: Arc::new(Mutex::new(Vec::new())),
            balance,
            force_error: Mutex::new(None),
        }
    }

    pub fn push_bet(&self, state: GameState) {
        self.script.lock().unwrap().bets.push_back(state);
    }

    pub fn push_hit(&self, state: GameState) {
        self.script.lock().unwrap().hits.push_back(state);
    }

    pub fn push_stand(&self, state: GameState) {
        self.script.lock().unwrap().stands.push_back(state);
    }

    /// Force all subsequent operations to return an error.
    pub fn set_error(&self, msg: &str) {
        self.set_error_after(0, msg);
    }

    /// Let `calls` more calls succeed, then fail every call after them.
    pub fn set_error_after(&self, calls: usize, msg: &str) {
        let threshold = self.calls.lock().unwrap().len() + calls;
        *self.force_error.lock().unwrap() = Some((threshold, msg.to_string()));
    }

    /// All calls recorded so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: Call, session_id: &str) -> Result<()> {
        if let Some((threshold, msg)) = self.force_error.lock().unwrap().clone() {
            if self.calls.lock().unwrap().len() >= threshold {
                return Err(anyhow!(msg));
            }
        }
        if call != Call::Start && session_id != SESSION_ID {
            return Err(anyhow!("unknown session {session_id}"));
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }

    fn betting(&self) -> GameState {
        GameState {
            session_id: SESSION_ID.to_string(),
            player_cards: Vec::new(),
            dealer_cards: Vec::new(),
            player_value: 0,
            dealer_value: None,
            phase: Phase::Active,
            outcome: None,
            can_hit: false,
            can_stand: false,
            reshuffled: false,
            balance: self.balance,
        }
    }
}

#[async_trait]
impl GameClient for MockGameClient {
    async fn start_game(&self) -> Result<GameState> {
        self.record(Call::Start, "")?;
        Ok(self.betting())
    }

    async fn place_bet(&self, session_id: &str, amount: u32) -> Result<GameState> {
        self.record(Call::Bet(amount), session_id)?;
        self.script
            .lock()
            .unwrap()
            .bets
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted bet response"))
    }

    async fn hit(&self, session_id: &str) -> Result<GameState> {
        self.record(Call::Hit, session_id)?;
        self.script
            .lock()
            .unwrap()
            .hits
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted hit response"))
    }

    async fn stand(&self, session_id: &str) -> Result<GameState> {
        self.record(Call::Stand, session_id)?;
        self.script
            .lock()
            .unwrap()
            .stands
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted stand response"))
    }

    async fn new_game(&self, session_id: &str) -> Result<GameState> {
        self.record(Call::NewGame, session_id)?;
        Ok(self.betting())
    }

    async fn finish_game(&self, session_id: &str) -> Result<()> {
        self.record(Call::Finish, session_id)
    }
}

// ---------------------------------------------------------------------------
// Snapshot builders
// ---------------------------------------------------------------------------

fn cards(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// A hand still in play.
pub fn playing(player: &[&str], dealer: &[&str], value: i32, can_hit: bool) -> GameState {
    GameState {
        session_id: SESSION_ID.to_string(),
        player_cards: cards(player),
        dealer_cards: cards(dealer),
        player_value: value,
        dealer_value: None,
        phase: Phase::Active,
        outcome: None,
        can_hit,
        can_stand: true,
        reshuffled: false,
        balance: Decimal::from(1000),
    }
}

/// A finished hand.
pub fn resolved(player: &[&str], dealer: &[&str], value: i32, outcome: Outcome) -> GameState {
    GameState {
        phase: Phase::Resolved,
        outcome: Some(outcome),
        can_hit: false,
        can_stand: false,
        ..playing(player, dealer, value, false)
    }
}

//! Shared types for the AUTOPLAYER agent.
//!
//! The game server answers every action with a complete [`GameState`]
//! snapshot. Snapshots are never edited in place: each call replaces the
//! previous one wholesale, so "the current hand" is always a single owned
//! value.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Lifecycle phase of the current hand.
///
/// The server reports several in-play phases; only `RESOLVED` matters to the
/// agent, so everything else collapses into `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Phase {
    Active,
    Resolved,
}

impl From<String> for Phase {
    fn from(raw: String) -> Self {
        if raw.eq_ignore_ascii_case("RESOLVED") {
            Phase::Resolved
        } else {
            Phase::Active
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Active => write!(f, "ACTIVE"),
            Phase::Resolved => write!(f, "RESOLVED"),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// How a resolved hand ended. Only meaningful when `phase == Resolved`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Outcome {
    PlayerWins,
    DealerWins,
    Push,
    PlayerBlackjack,
    /// Any outcome string the agent does not recognise. Changes no counters.
    Unknown(String),
}

impl From<String> for Outcome {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PLAYER_WINS" => Outcome::PlayerWins,
            "DEALER_WINS" => Outcome::DealerWins,
            "PUSH" => Outcome::Push,
            "PLAYER_BLACKJACK" => Outcome::PlayerBlackjack,
            _ => Outcome::Unknown(raw),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlayerWins => write!(f, "PLAYER_WINS"),
            Outcome::DealerWins => write!(f, "DEALER_WINS"),
            Outcome::Push => write!(f, "PUSH"),
            Outcome::PlayerBlackjack => write!(f, "PLAYER_BLACKJACK"),
            Outcome::Unknown(raw) => write!(f, "{raw}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Game state snapshot
// ---------------------------------------------------------------------------

/// Point-in-time view of a hand as returned by the game server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub session_id: String,
    /// Player card tokens in deal order, e.g. `["10♠", "A♥"]`.
    #[serde(default)]
    pub player_cards: Vec<String>,
    /// Dealer card tokens; the first element is the up-card.
    #[serde(default)]
    pub dealer_cards: Vec<String>,
    /// Best total of the player's hand as computed by the server.
    #[serde(default)]
    pub player_value: i32,
    #[serde(default)]
    pub dealer_value: Option<i32>,
    pub phase: Phase,
    #[serde(default)]
    pub outcome: Option<Outcome>,
    #[serde(default)]
    pub can_hit: bool,
    #[serde(default)]
    pub can_stand: bool,
    /// Set when the server reshuffled the shoe while producing this snapshot.
    #[serde(default)]
    pub reshuffled: bool,
    #[serde(default)]
    pub balance: Decimal,
}

impl GameState {
    /// The dealer's visible card, if one has been dealt.
    pub fn dealer_up_card(&self) -> Option<&str> {
        self.dealer_cards.first().map(String::as_str)
    }

    /// The most recently dealt player card.
    pub fn newest_player_card(&self) -> Option<&str> {
        self.player_cards.last().map(String::as_str)
    }

    pub fn is_resolved(&self) -> bool {
        self.phase == Phase::Resolved
    }

    /// Helper to build a test snapshot with sensible defaults.
    #[cfg(test)]
    pub fn sample() -> Self {
        GameState {
            session_id: "sess-001".to_string(),
            player_cards: vec!["10H".to_string(), "4C".to_string()],
            dealer_cards: vec!["9S".to_string()],
            player_value: 14,
            dealer_value: None,
            phase: Phase::Active,
            outcome: None,
            can_hit: true,
            can_stand: true,
            reshuffled: false,
            balance: Decimal::from(1000),
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] player {:?} ({}) vs dealer {:?} | {}",
            self.session_id, self.player_cards, self.player_value, self.dealer_cards, self.phase,
        )?;
        if let Some(ref outcome) = self.outcome {
            write!(f, " {outcome}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

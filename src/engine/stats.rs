//! Stats accumulator: outcome tallies and the end-of-run report.
//!
//! Outcomes are classified differently depending on whether the hand
//! resolved straight off the deal or after the player acted. Blackjacks,
//! player or dealer, are only recognised on the early path.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use crate::types::Outcome;

// ---------------------------------------------------------------------------
// Resolution path
// ---------------------------------------------------------------------------

/// Where in the hand the outcome was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Resolved immediately after the bet, before any player action.
    Early,
    /// Resolved after the hit loop and stand.
    AfterPlay,
}

// ---------------------------------------------------------------------------
// Counters
// ---------------------------------------------------------------------------

/// Outcome counters for one run. Never decremented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsAccumulator {
    pub games: u64,
    pub wins: u64,
    pub losses: u64,
    pub pushes: u64,
    pub blackjacks: u64,
    pub dealer_blackjacks: u64,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished hand, whatever its outcome.
    pub fn record_hand(&mut self) {
        self.games += 1;
    }

    /// Apply one resolved outcome to the counters.
    pub fn record(&mut self, outcome: &Outcome, resolution: Resolution) {
        match (outcome, resolution) {
            (Outcome::PlayerBlackjack, Resolution::Early) => {
                self.blackjacks += 1;
                self.wins += 1;
            }
            (Outcome::DealerWins, Resolution::Early) => {
                self.dealer_blackjacks += 1;
                self.losses += 1;
            }
            (Outcome::DealerWins, Resolution::AfterPlay) => self.losses += 1,
            (Outcome::Push, _) => self.pushes += 1,
            (Outcome::PlayerWins, Resolution::AfterPlay) => self.wins += 1,
            (Outcome::PlayerWins, Resolution::Early)
            | (Outcome::PlayerBlackjack, Resolution::AfterPlay)
            | (Outcome::Unknown(_), _) => {
                debug!(%outcome, ?resolution, "Outcome not tallied");
            }
        }
    }

    /// Fraction of completed hands won, or 0 before any hand completes.
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

// ---------------------------------------------------------------------------
// Session report
// ---------------------------------------------------------------------------

/// Read-only summary of a completed run.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub run_id: Uuid,
    pub stats: StatsAccumulator,
    pub final_balance: Decimal,
    pub final_running_count: i32,
    pub reshuffles: u64,
    pub total_wagered: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        writeln!(f, "Number of games played: {}", s.games)?;
        writeln!(f, "Number of wins: {}", s.wins)?;
        writeln!(f, "Number of losses: {}", s.losses)?;
        writeln!(f, "Number of pushes: {}", s.pushes)?;
        writeln!(f, "Number of blackjacks: {}", s.blackjacks)?;
        writeln!(f, "Number of dealer blackjacks: {}", s.dealer_blackjacks)?;
        writeln!(f, "Final balance: {}", self.final_balance)?;
        writeln!(f, "Final running count: {}", self.final_running_count)?;
        writeln!(f, "Win rate: {:.1}%", s.win_rate() * 100.0)?;
        writeln!(f, "Total wagered: {}", self.total_wagered)?;
        write!(f, "Reshuffles: {}", self.reshuffles)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

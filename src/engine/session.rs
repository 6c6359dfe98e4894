//! Session loop: plays a fixed number of hands against the game server.
//!
//! Per hand: reset the per-hand count guard, size the bet from the running
//! count, count the opening cards, then either tally an immediate
//! resolution or run the hit loop, stand, count the dealer's cards, and
//! tally the result. The next hand is requested after every hand, and the
//! session is closed once all hands are played.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::client::GameClient;
use crate::engine::stats::{Resolution, SessionReport, StatsAccumulator};
use crate::strategy::{bet_size, should_hit, HandCountTracker};
use crate::types::GameState;

/// Owns all mutable state for one run: the running count and the tallies.
pub struct Session<'a, C: GameClient + ?Sized> {
    client: &'a C,
    tracker: HandCountTracker,
    stats: StatsAccumulator,
    reshuffles: u64,
    total_wagered: u64,
}

impl<'a, C: GameClient + ?Sized> Session<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            tracker: HandCountTracker::new(),
            stats: StatsAccumulator::new(),
            reshuffles: 0,
            total_wagered: 0,
        }
    }

    pub fn running_count(&self) -> i32 {
        self.tracker.running_count()
    }

    pub fn stats(&self) -> &StatsAccumulator {
        &self.stats
    }

    /// Open a session, play `hands` hands, close the session and report.
    pub async fn run(mut self, hands: u32) -> Result<SessionReport> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!(%run_id, hands, "Starting run");

        let mut state = self
            .client
            .start_game()
            .await
            .context("Failed to start game session")?;

        for hand in 1..=hands {
            state = self
                .play_hand(&state.session_id)
                .await
                .with_context(|| format!("Hand {hand} failed"))?;
        }

        self.client
            .finish_game(&state.session_id)
            .await
            .context("Failed to finish game session")?;

        let report = SessionReport {
            run_id,
            stats: self.stats,
            final_balance: state.balance,
            final_running_count: self.tracker.running_count(),
            reshuffles: self.reshuffles,
            total_wagered: self.total_wagered,
            started_at,
            finished_at: Utc::now(),
        };

        info!(
            %run_id,
            games = report.stats.games,
            wins = report.stats.wins,
            losses = report.stats.losses,
            balance = %report.final_balance,
            running_count = report.final_running_count,
            "Run complete"
        );

        Ok(report)
    }

    /// Play one hand and return the snapshot for the next one.
    pub async fn play_hand(&mut self, session_id: &str) -> Result<GameState> {
        self.tracker.reset_hand();

        let bet = bet_size(self.tracker.running_count());
        let mut state = self.client.place_bet(session_id, bet).await?;
        self.total_wagered += u64::from(bet);
        self.stats.record_hand();
        debug!(bet, running_count = self.tracker.running_count(), %state, "Bet placed");

        for card in &state.player_cards {
            self.tracker.observe(card);
        }
        if let Some(up_card) = state.dealer_up_card() {
            self.tracker.observe(up_card);
        }

        if state.is_resolved() {
            self.tally(&state, Resolution::Early);
            return self.client.new_game(&state.session_id).await;
        }

        while state.can_hit {
            let up_card = state
                .dealer_up_card()
                .context("Snapshot allows a hit but has no dealer up-card")?;
            if !should_hit(state.player_value, up_card, self.tracker.running_count()) {
                break;
            }

            state = self.client.hit(&state.session_id).await?;
            if state.reshuffled {
                self.tracker.reset_count();
                self.reshuffles += 1;
                info!(reshuffles = self.reshuffles, "Deck reshuffled, count reset");
            }
            if let Some(card) = state.newest_player_card() {
                self.tracker.observe(card);
            }
        }

        if state.can_stand {
            state = self.client.stand(&state.session_id).await?;
            for card in &state.dealer_cards {
                self.tracker.observe(card);
            }
        }

        if state.is_resolved() {
            self.tally(&state, Resolution::AfterPlay);
        }

        self.client.new_game(&state.session_id).await
    }

    fn tally(&mut self, state: &GameState, resolution: Resolution) {
        if let Some(ref outcome) = state.outcome {
            self.stats.record(outcome, resolution);
        }
        debug!(
            outcome = ?state.outcome,
            ?resolution,
            balance = %state.balance,
            running_count = self.tracker.running_count(),
            "Hand resolved"
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

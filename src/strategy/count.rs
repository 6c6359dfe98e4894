//! Card counting.
//!
//! A High-Low style count with custom weights, plus the per-hand guard that
//! stops the same card from being counted twice when the agent re-reads a
//! snapshot it has already seen.

use std::collections::HashSet;

use tracing::debug;

/// Extract the rank from a card token: every character except the trailing
/// suit marker. Suits may be multi-byte symbols, so this works on chars.
pub fn rank_of(card: &str) -> &str {
    match card.char_indices().last() {
        Some((idx, _)) => &card[..idx],
        None => "",
    }
}

/// Count contribution of a single card. Unrecognised ranks count as 0.
pub fn card_value(card: &str) -> i32 {
    match rank_of(card).to_ascii_uppercase().as_str() {
        "A" => -2,
        "K" | "Q" | "J" | "10" | "9" => -1,
        "8" => 0,
        "7" | "6" | "4" | "3" | "2" => 1,
        "5" => 2,
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// Hand count tracker
// ---------------------------------------------------------------------------

/// Running count for one run, with a per-hand set of cards already counted.
#[derive(Debug, Default)]
pub struct HandCountTracker {
    running_count: i32,
    counted_this_hand: HashSet<String>,
}

impl HandCountTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Count `card` unless it was already counted this hand.
    /// Returns `true` if the running count was updated.
    pub fn observe(&mut self, card: &str) -> bool {
        if self.counted_this_hand.contains(card) {
            return false;
        }
        let value = card_value(card);
        self.running_count += value;
        self.counted_this_hand.insert(card.to_string());
        debug!(card, value, running_count = self.running_count, "Card counted");
        true
    }

    /// Forget which cards were counted. Call before the first card of a hand.
    pub fn reset_hand(&mut self) {
        self.counted_this_hand.clear();
    }

    /// Zero the running count after a reshuffle. The per-hand guard is kept.
    pub fn reset_count(&mut self) {
        self.running_count = 0;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

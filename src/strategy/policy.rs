//! Playing and betting decisions.
//!
//! A fixed hit/stand table keyed on the player's total and the dealer's
//! up-card, nudged by the running count, plus a step-function bet spread.

use tracing::debug;

use super::count::rank_of;

/// Dealer up-card ranks that make the dealer likely to bust.
const WEAK_DEALER_RANKS: [&str; 5] = ["2", "3", "4", "5", "6"];

/// With a stiff hand against a weak dealer, hit only below this count.
const STIFF_HIT_COUNT: i32 = -2;

/// Whether the dealer's up-card rank is one of 2 through 6.
/// Exact rank match: a "10" must never match the digit list.
pub fn is_weak_dealer_card(up_card: &str) -> bool {
    let rank = rank_of(up_card);
    WEAK_DEALER_RANKS.contains(&rank)
}

/// Decide whether to take another card.
pub fn should_hit(player_total: i32, dealer_up_card: &str, running_count: i32) -> bool {
    let hit = if player_total <= 11 {
        true
    } else if player_total >= 17 {
        false
    } else if is_weak_dealer_card(dealer_up_card) {
        // 12..=16: stand against a weak dealer unless the count is very negative
        running_count < STIFF_HIT_COUNT
    } else {
        true
    };

    debug!(player_total, dealer_up_card, running_count, hit, "Play decision");
    hit
}

/// Bet size for the next hand given the running count.
pub fn bet_size(running_count: i32) -> u32 {
    if running_count >= 4 {
        30
    } else if running_count >= 2 {
        20
    } else if running_count <= -2 {
        5
    } else {
        10
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Strategy engine: card counting and the hit/stand and bet-size tables.

pub mod count;
pub mod policy;

pub use count::{card_value, rank_of, HandCountTracker};
pub use policy::{bet_size, should_hit};

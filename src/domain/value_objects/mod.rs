//! Value objects - Immutable objects defined by their attributes

mod guess_result;
mod rank_table;
mod stat_value;

pub use guess_result::GuessResult;
pub use rank_table::{RankTable, ATTACK_SPEED_RANKS, RARITY_RANKS};
pub use stat_value::StatValue;

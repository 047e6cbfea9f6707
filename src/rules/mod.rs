//! Game rules.
//!
//! - `turn`: the waiting / ongoing / finished state machine and every
//!   operation a player can take
//! - `engine`: the `RulesEngine` trait over those operations, implemented
//!   by `MathableRules`

pub mod engine;
pub mod turn;

pub use engine::{ActionOutcome, GameResult, MathableRules, RulesEngine};
pub use turn::{
    end_turn, has_legal_placement, is_game_over, join, legal_placements, pick_bonus_tile,
    place_tile, start, PlaceOutcome, TurnEnd,
};

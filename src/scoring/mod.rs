//! Placement and turn scoring.

pub mod engine;

pub use engine::{
    final_scores, placed_full_hand, score_for_placement, score_placement, tile_points, turn_score,
    winner,
    PlacementScore, TurnScore,
};

//! Rules engine trait and the game's implementation of it.
//!
//! `RulesEngine` is the action-level view of the turn state machine:
//! - What actions are legal
//! - How actions modify state
//! - Whether the game is over and who won

use serde::{Deserialize, Serialize};

use super::turn::{self, PlaceOutcome, TurnEnd};
use crate::core::{Action, EngineError, GameState, GameStatus, PlayerId, PlayerMap, TileId};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Highest final score; ties go to the lower order.
    pub winner: PlayerId,
    /// Final scores after the end-game deduction.
    pub scores: PlayerMap<i64>,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}

/// What applying an action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Placed(PlaceOutcome),
    /// The bonus tile drawn, if the bag had one.
    Bonus(Option<TileId>),
    TurnEnded(TurnEnd),
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if player can't act
/// - `apply_action`: Must be deterministic given the state, and must leave
///   the state untouched when it returns an error
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Enumerate all legal actions for a player.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    /// Apply an action to the game state.
    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<ActionOutcome, EngineError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Whether `action` is currently legal for `player`.
    fn is_legal(&self, state: &GameState, player: PlayerId, action: &Action) -> bool {
        self.legal_actions(state, player).contains(action)
    }
}

/// The number-equation board game.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathableRules;

impl RulesEngine for MathableRules {
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        if state.status() != GameStatus::Ongoing || state.current != Some(player) {
            return vec![];
        }

        let mut actions: Vec<Action> = turn::legal_placements(state, player)
            .into_iter()
            .map(|(tile, cell)| Action::PlaceTile { tile, cell })
            .collect();

        if state.turn.bonus_credits > 0 {
            actions.push(Action::PickBonus);
        }

        // Can always end the turn
        actions.push(Action::EndTurn);

        actions
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<ActionOutcome, EngineError> {
        match *action {
            Action::PlaceTile { tile, cell } => {
                turn::place_tile(state, player, tile, cell).map(ActionOutcome::Placed)
            }
            Action::PickBonus => turn::pick_bonus_tile(state, player).map(ActionOutcome::Bonus),
            Action::EndTurn => turn::end_turn(state, player).map(ActionOutcome::TurnEnded),
        }
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if state.status() != GameStatus::Finished {
            return None;
        }
        let winner = state.game.winner?;
        let mut scores = PlayerMap::new();
        for player in state.players.values() {
            scores.push(player.score);
        }
        Some(GameResult { winner, scores })
    }
}

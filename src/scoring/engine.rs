//! Scoring: placements, turns and the end-game deduction.
//!
//! A tile is worth its value times the factor of the award square it sits
//! on. Each equation a placement completes scores every tile in it that was
//! placed this turn, the new tile included; a tile on two completed
//! equations counts twice. A placement completing nothing scores 0. A turn
//! adds the full-hand bonus when the player placed every tile they held at
//! turn start.

use serde::{Deserialize, Serialize};

use crate::bag::TileLedger;
use crate::board::{Board, CellKind};
use crate::core::{CellId, GameConfig, Player, PlayerId, PlayerMap, TileId, TurnState};
use crate::equations::Equation;

/// The points one placement earned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementScore {
    pub tile: TileId,
    pub cell: CellId,
    pub value: i32,
    /// Equations the placement completed (0 to 2).
    pub equations: u8,
    pub points: i64,
}

/// Breakdown of a turn's points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnScore {
    pub placements: i64,
    pub bonus: i64,
}

impl TurnScore {
    #[must_use]
    pub fn total(&self) -> i64 {
        self.placements + self.bonus
    }
}

/// Points a tile of `value` is worth on a cell of `kind`.
///
/// ```
/// use rust_mathable::board::CellKind;
/// use rust_mathable::scoring::tile_points;
///
/// assert_eq!(tile_points(6, &CellKind::Multiplier { factor: 2 }), 12);
/// assert_eq!(tile_points(6, &CellKind::Empty), 6);
/// ```
#[must_use]
pub fn tile_points(value: i32, kind: &CellKind) -> i64 {
    i64::from(value) * kind.multiplier()
}

/// Points for the tile just put on `cell`, given the equations it completes.
///
/// For each equation, every cell holding a tile placed this turn (per
/// `turn`, plus `cell` itself) adds its tile points.
#[must_use]
pub fn score_for_placement(
    board: &Board,
    turn: &TurnState,
    cell: CellId,
    equations: &[Equation],
) -> i64 {
    equations
        .iter()
        .flat_map(|eq| eq.cells.iter().zip(eq.values.iter()))
        .filter(|&(&c, _)| c == cell || turn.placed_on(c))
        .map(|(&c, &value)| {
            let kind = board.cell(c).map_or(&CellKind::Empty, |square| &square.kind);
            tile_points(value, kind)
        })
        .sum()
}

/// Score a placement into a ledger entry.
#[must_use]
pub fn score_placement(
    board: &Board,
    turn: &TurnState,
    tile: TileId,
    cell: CellId,
    value: i32,
    equations: &[Equation],
) -> PlacementScore {
    PlacementScore {
        tile,
        cell,
        value,
        equations: equations.len() as u8,
        points: score_for_placement(board, turn, cell, equations),
    }
}

/// Whether the turn placed every tile of a full starting hand.
#[must_use]
pub fn placed_full_hand(turn: &TurnState, hand_size: usize) -> bool {
    turn.hand_at_start.len() == hand_size && turn.hand_at_start.iter().all(|&t| turn.placed(t))
}

/// Points the open turn would commit now.
#[must_use]
pub fn turn_score(turn: &TurnState, config: &GameConfig) -> TurnScore {
    let bonus = if placed_full_hand(turn, config.hand_size) {
        config.full_hand_bonus
    } else {
        0
    };
    TurnScore {
        placements: turn.placement_points(),
        bonus,
    }
}

/// Final scores: each player's score less the value of the tiles they
/// still hold.
#[must_use]
pub fn final_scores(players: &PlayerMap<Player>, tiles: &TileLedger) -> PlayerMap<i64> {
    let mut scores = PlayerMap::new();
    for (id, player) in players.iter() {
        scores.push(player.score - tiles.hand_value(id));
    }
    scores
}

/// Highest score wins; ties go to the lower turn order. `None` without
/// players.
#[must_use]
pub fn winner(scores: &PlayerMap<i64>) -> Option<PlayerId> {
    scores
        .iter()
        .max_by(|(a, sa), (b, sb)| sa.cmp(sb).then(b.cmp(a)))
        .map(|(id, _)| id)
}

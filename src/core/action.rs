//! Player actions and the action history.
//!
//! A turn is any number of `PlaceTile`s, at most one `PickBonus` per
//! earned credit, and a closing `EndTurn`.
//!
//! ## Example
//!
//! ```
//! use rust_mathable::core::{Action, ActionRecord, CellId, PlayerId, TileId};
//!
//! let place = Action::PlaceTile { tile: TileId(12), cell: CellId(90) };
//! let record = ActionRecord::new(PlayerId::new(0), place, 1, 0);
//!
//! assert_eq!(record.action.to_string(), "place Tile(12) on Cell(90)");
//! assert!(Action::EndTurn.ends_turn());
//! ```

use serde::{Deserialize, Serialize};

use super::entity::{CellId, TileId};
use super::player::PlayerId;

/// A move by the current player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Put a tile from the hand on an empty cell.
    PlaceTile { tile: TileId, cell: CellId },

    /// Claim a bonus draw earned on a restriction square.
    PickBonus,

    /// Commit the turn and pass control.
    EndTurn,
}

impl Action {
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        matches!(self, Action::EndTurn)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlaceTile { tile, cell } => write!(f, "place {tile} on {cell}"),
            Action::PickBonus => write!(f, "pick bonus"),
            Action::EndTurn => write!(f, "end turn"),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}

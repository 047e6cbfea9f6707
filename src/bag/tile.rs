//! Numbered tiles and where they are.

use serde::{Deserialize, Serialize};

use crate::core::{CellId, PlayerId, TileId};

/// Where a tile currently is.
///
/// The owner and cell references live inside the variant, so a tile can
/// never be in a hand without an owner or on the board without a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileLocation {
    InBag,
    InHand(PlayerId),
    OnBoard(CellId),
}

impl std::fmt::Display for TileLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileLocation::InBag => write!(f, "bag"),
            TileLocation::InHand(player) => write!(f, "{player}'s hand"),
            TileLocation::OnBoard(cell) => write!(f, "{cell}"),
        }
    }
}

/// A numbered tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub value: i32,
    pub location: TileLocation,
}

impl Tile {
    /// Create a tile in the bag.
    #[must_use]
    pub fn new(id: TileId, value: i32) -> Self {
        Self {
            id,
            value,
            location: TileLocation::InBag,
        }
    }

    /// Holding player, if the tile is in a hand.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        match self.location {
            TileLocation::InHand(player) => Some(player),
            _ => None,
        }
    }

    /// Occupied cell, if the tile is on the board.
    #[must_use]
    pub fn cell(&self) -> Option<CellId> {
        match self.location {
            TileLocation::OnBoard(cell) => Some(cell),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_in_bag(&self) -> bool {
        self.location == TileLocation::InBag
    }
}

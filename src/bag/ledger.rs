//! Tile ledger: the arena of every tile in a game and its location.
//!
//! The bag has no storage of its own; it is the set of tiles whose
//! location is `InBag`. Tiles are created once and only ever change
//! location, so the total tile value of a game never changes.
//!
//! ## Usage
//!
//! ```
//! use rust_mathable::bag::{TileLedger, TileLocation};
//! use rust_mathable::core::{PlayerId, TileId};
//!
//! let mut ledger = TileLedger::from_distribution(&[(1, 2), (5, 1)]);
//! assert_eq!(ledger.bag_len(), 3);
//!
//! ledger.move_to(TileId(2), TileLocation::InHand(PlayerId::new(0)));
//! assert_eq!(ledger.hand_value(PlayerId::new(0)), 5);
//! assert_eq!(ledger.bag_len(), 2);
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileLocation};
use crate::core::{PlayerId, TileId};

/// Every tile of one game, indexed by `TileId`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLedger {
    tiles: Vector<Tile>,
}

impl TileLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create `count` bag tiles for every `(value, count)` pair, in order.
    #[must_use]
    pub fn from_distribution(distribution: &[(i32, u32)]) -> Self {
        let mut ledger = Self::new();
        for &(value, count) in distribution {
            for _ in 0..count {
                ledger.add(value);
            }
        }
        ledger
    }

    /// Add a tile to the bag and return its id.
    pub fn add(&mut self, value: i32) -> TileId {
        let id = TileId(self.tiles.len() as u32);
        self.tiles.push_back(Tile::new(id, value));
        id
    }

    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Move a tile. Returns the previous location, or `None` if the tile
    /// does not exist.
    pub fn move_to(&mut self, id: TileId, location: TileLocation) -> Option<TileLocation> {
        let tile = self.tiles.get_mut(id.index())?;
        let previous = tile.location;
        tile.location = location;
        Some(previous)
    }

    /// All tiles in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    fn at(&self, location: TileLocation) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(move |t| t.location == location)
    }

    /// Ids of the tiles in the bag, ascending.
    #[must_use]
    pub fn bag(&self) -> Vec<TileId> {
        self.at(TileLocation::InBag).map(|t| t.id).collect()
    }

    #[must_use]
    pub fn bag_len(&self) -> usize {
        self.at(TileLocation::InBag).count()
    }

    #[must_use]
    pub fn bag_value(&self) -> i64 {
        self.at(TileLocation::InBag).map(|t| i64::from(t.value)).sum()
    }

    /// First bag tile with the given value.
    #[must_use]
    pub fn find_in_bag(&self, value: i32) -> Option<TileId> {
        self.at(TileLocation::InBag).find(|t| t.value == value).map(|t| t.id)
    }

    /// Tiles held by a player, in id order.
    pub fn hand(&self, player: PlayerId) -> impl Iterator<Item = &Tile> {
        self.at(TileLocation::InHand(player))
    }

    #[must_use]
    pub fn hand_len(&self, player: PlayerId) -> usize {
        self.hand(player).count()
    }

    #[must_use]
    pub fn hand_value(&self, player: PlayerId) -> i64 {
        self.hand(player).map(|t| i64::from(t.value)).sum()
    }

    /// Sum of every tile value, wherever the tile is.
    #[must_use]
    pub fn total_value(&self) -> i64 {
        self.tiles.iter().map(|t| i64::from(t.value)).sum()
    }
}

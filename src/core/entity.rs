//! Entity identification system.
//!
//! Every record the engine owns has a small copyable identifier:
//!
//! - `GameId`: assigned by the store when a game is created
//! - `TileId`: dense index into a game's tile arena
//! - `CellId`: dense index into a game's board, `row * columns + column`
//!
//! Players are identified by `PlayerId` (see `core::player`), which doubles
//! as their turn order.
//!
//! ## Usage
//!
//! ```
//! use rust_mathable::core::{CellId, Position};
//!
//! let columns = 14;
//! let cell = CellId::from_position(Position::new(6, 7), columns);
//! assert_eq!(cell, CellId(91));
//! assert_eq!(cell.position(columns), Position::new(6, 7));
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a game, unique within a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Identifier of a tile within one game.
///
/// Tiles are created once, when the game is created, and never destroyed;
/// their ids are the indices of the game's tile arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Arena index of this tile.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Row/column coordinates of a cell. Row 0 is the top edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u16,
    pub column: u16,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(row: u16, column: u16) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Identifier of a board cell within one game.
///
/// Cell ids are row-major, so the id of a position is a pure function of
/// the board width. This keeps the board an arena addressed by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellId(pub u32);

impl CellId {
    /// Create a cell ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Arena index of this cell.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Cell id for a position on a board `columns` wide.
    #[must_use]
    pub const fn from_position(position: Position, columns: u16) -> Self {
        Self(position.row as u32 * columns as u32 + position.column as u32)
    }

    /// Position of this cell on a board `columns` wide.
    #[must_use]
    pub const fn position(self, columns: u16) -> Position {
        let columns = columns as u32;
        Position {
            row: (self.0 / columns) as u16,
            column: (self.0 % columns) as u16,
        }
    }
}

impl From<u32> for CellId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

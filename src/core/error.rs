//! Engine error types.
//!
//! Placement-time violations are `PlacementError`s and are always detected
//! before any state changes. Everything a caller can get back from a game
//! operation is an `EngineError`.

use thiserror::Error;

use super::entity::{CellId, GameId, Position, TileId};
use super::player::PlayerId;
use crate::board::{Axis, Operator};
use crate::core::state::GameStatus;

/// Why a tile may not go on a cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("{cell} is not on the board")]
    OffBoard { cell: CellId },

    #[error("{cell} already holds a tile")]
    CellOccupied { cell: CellId },

    #[error("value {value} is not allowed on {cell}")]
    ValueNotAllowed { cell: CellId, value: i32 },

    #[error("{axis} run through {cell} does not resolve: {lhs}, {rhs}, {result}")]
    InvalidEquation {
        cell: CellId,
        axis: Axis,
        lhs: i32,
        rhs: i32,
        result: i32,
    },

    #[error("{cell} requires {expected}, but the {axis} run resolves with {found}")]
    OperatorMismatch {
        cell: CellId,
        axis: Axis,
        expected: Operator,
        found: Operator,
    },

    #[error("placing on {cell} completes no equation")]
    NoEquation { cell: CellId },
}

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("hand size must be at least 1")]
    ZeroHandSize,

    #[error("a game needs at least 2 players, got minimum {0}")]
    TooFewPlayers(usize),

    #[error("maximum players {max} is below minimum {min}")]
    PlayerRange { min: usize, max: usize },

    #[error("tile distribution is empty")]
    EmptyDistribution,
}

/// Invalid board layout text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell token {token:?} at {position}")]
    UnknownToken { token: String, position: Position },

    #[error("no tile of value {value} left to seed {position}")]
    MissingSeedTile { value: i32, position: Position },
}

/// Failures reported by a `GameStore`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    GameNotFound(GameId),

    #[error("no record for token {0:?}")]
    TokenNotFound(String),

    #[error("{game} was modified concurrently (expected version {expected}, actual {actual})")]
    VersionConflict {
        game: GameId,
        expected: u64,
        actual: u64,
    },

    #[error("snapshot codec error: {0}")]
    Codec(String),
}

/// Central engine error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("it is {current}'s turn, not {player}'s")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("game not found")]
    GameNotFound,

    #[error("{0} not found")]
    PlayerNotFound(PlayerId),

    #[error("no player with token {0}")]
    PlayerTokenNotFound(String),

    #[error("{0} not found")]
    TileNotFound(TileId),

    #[error("{0} not found")]
    CellNotFound(CellId),

    #[error("{tile} is not in {player}'s hand")]
    TileNotInHand { tile: TileId, player: PlayerId },

    #[error("game is full ({max} players)")]
    GameFull { max: usize },

    #[error("game has already started")]
    GameAlreadyStarted,

    #[error("game is {0}, not ongoing")]
    GameNotOngoing(GameStatus),

    #[error("need at least {min} players, have {found}")]
    NotEnoughPlayers { min: usize, found: usize },

    #[error("{0} does not own this game")]
    NotGameOwner(PlayerId),

    #[error("{0} has no bonus draw available")]
    NoBonusAvailable(PlayerId),
}

impl EngineError {
    /// Whether this error is a rejected placement (the turn stays open).
    #[must_use]
    pub fn is_placement(&self) -> bool {
        matches!(self, EngineError::Placement(_))
    }
}

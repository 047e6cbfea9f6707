//! # rust-mathable
//!
//! Rules and scoring engine for a turn-based number-equation board game.
//! Players place numbered tiles next to tiles already on the board so that
//! every run of three or more reads as `a op b = c`, on a board whose
//! squares restrict values and operators or multiply points.
//!
//! ## Design Principles
//!
//! 1. **All-or-nothing**: every operation validates before it mutates, and
//!    the service applies it to a private snapshot that is only saved on
//!    success.
//!
//! 2. **Deterministic**: each game carries a seed; every draw derives a
//!    fresh ChaCha8 stream from it, so games replay exactly.
//!
//! 3. **Configuration Over Convention**: hand size, players, bonus,
//!    distribution and the board layout come from `GameConfig`.
//!
//! ## Architecture
//!
//! - **Arena ids**: cells and tiles are addressed by dense ids; the impact
//!   graph is an index over cell ids, not pointers.
//!
//! - **Persistent Data Structures**: O(1) snapshot cloning via `im-rs`.
//!
//! ## Modules
//!
//! - `core`: ids, players, configuration, RNG, actions, state, errors
//! - `board`: cells, the grid, layouts, the impact graph
//! - `bag`: tiles, the tile ledger and dealing
//! - `equations`: equation detection
//! - `scoring`: placement, turn and end-game scoring
//! - `rules`: the turn state machine and `RulesEngine`
//! - `store`: storage collaborator trait and an in-memory store
//! - `service`: caller-facing operations

pub mod core;
pub mod board;
pub mod bag;
pub mod equations;
pub mod scoring;
pub mod rules;
pub mod store;
pub mod service;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, CellId, ConfigError, DrawSeed, EngineError, Game, GameConfig, GameId,
    GameRng, GameState, GameStatus, LayoutError, PlacementError, Player, PlayerId, PlayerMap,
    Position, StoreError, TileId, TurnState,
};

pub use crate::board::{
    Axis, Board, BoardLayout, Cell, CellImpact, CellKind, Direction, ImpactGraph, Operator,
    Placement,
};

pub use crate::bag::{Tile, TileLedger, TileLocation};

pub use crate::equations::{detect, Equation, Step};

pub use crate::scoring::{score_for_placement, PlacementScore, TurnScore};

pub use crate::rules::{ActionOutcome, GameResult, MathableRules, PlaceOutcome, RulesEngine, TurnEnd};

pub use crate::store::{GameStore, MemoryStore, Versioned};

pub use crate::service::GameService;

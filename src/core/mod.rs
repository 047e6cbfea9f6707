//! Core engine types: ids, players, configuration, RNG, actions, state and
//! errors.
//!
//! Everything a game snapshot is made of lives here; the rules in
//! `rules` and the caller-facing `service` operate on these types.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use entity::{CellId, GameId, Position, TileId};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{DrawSeed, GameRng};
pub use config::{GameConfig, STANDARD_DISTRIBUTION};
pub use action::{Action, ActionRecord};
pub use state::{Game, GameState, GameStatus, TurnState};
pub use error::{ConfigError, EngineError, LayoutError, PlacementError, StoreError};

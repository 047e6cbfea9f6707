//! Storage collaborator.
//!
//! The engine never owns durability. A `GameStore` hands out ids, keeps
//! versioned game snapshots and answers token lookups. Saves are
//! compare-and-swap on the snapshot version: a writer that read version
//! `n` may only store version `n + 1`, which serializes all writes to one
//! game without holding a lock across an operation.

pub mod memory;

pub use memory::MemoryStore;

use crate::core::{GameId, GameState, PlayerId, StoreError};

/// A value read together with the version it was stored at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Versioned<T> {
    pub version: u64,
    pub value: T,
}

/// Persistence and lookup of game snapshots.
pub trait GameStore: Send + Sync {
    /// Reserve a fresh game id.
    fn allocate_id(&self) -> GameId;

    /// Store a new game at version 1.
    fn insert(&self, state: &GameState) -> Result<u64, StoreError>;

    /// Read a game and its version.
    fn load(&self, id: GameId) -> Result<Versioned<GameState>, StoreError>;

    /// Replace a game if it is still at `expected`; returns the new version.
    fn save(&self, id: GameId, expected: u64, state: &GameState) -> Result<u64, StoreError>;

    /// Game id for a game join token.
    fn game_by_token(&self, token: &str) -> Result<GameId, StoreError>;

    /// Game and player for a player token.
    fn player_by_token(&self, token: &str) -> Result<(GameId, PlayerId), StoreError>;
}

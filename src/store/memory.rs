//! In-memory `GameStore`.
//!
//! Snapshots are kept bincode-encoded, so a loaded game never aliases the
//! stored one. Each index sits behind its own `parking_lot` lock.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::{GameStore, Versioned};
use crate::core::{GameId, GameState, PlayerId, StoreError};

struct Entry {
    version: u64,
    snapshot: Vec<u8>,
}

/// Process-local store.
#[derive(Default)]
pub struct MemoryStore {
    next_id: AtomicU64,
    games: RwLock<FxHashMap<GameId, Entry>>,
    game_tokens: RwLock<FxHashMap<String, GameId>>,
    player_tokens: RwLock<FxHashMap<String, (GameId, PlayerId)>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }

    fn index(&self, state: &GameState) {
        let id = state.game.id;
        self.game_tokens.write().insert(state.game.token.clone(), id);

        let mut players = self.player_tokens.write();
        for player in state.players.values() {
            players.insert(player.token.clone(), (id, player.id));
        }
    }
}

fn encode(state: &GameState) -> Result<Vec<u8>, StoreError> {
    bincode::serialize(state).map_err(|e| StoreError::Codec(e.to_string()))
}

fn decode(bytes: &[u8]) -> Result<GameState, StoreError> {
    bincode::deserialize(bytes).map_err(|e| StoreError::Codec(e.to_string()))
}

impl GameStore for MemoryStore {
    fn allocate_id(&self) -> GameId {
        GameId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn insert(&self, state: &GameState) -> Result<u64, StoreError> {
        let snapshot = encode(state)?;
        self.games.write().insert(
            state.game.id,
            Entry {
                version: 1,
                snapshot,
            },
        );
        self.index(state);
        debug!(game = %state.game.id, "game stored");
        Ok(1)
    }

    fn load(&self, id: GameId) -> Result<Versioned<GameState>, StoreError> {
        let games = self.games.read();
        let entry = games.get(&id).ok_or(StoreError::GameNotFound(id))?;
        Ok(Versioned {
            version: entry.version,
            value: decode(&entry.snapshot)?,
        })
    }

    fn save(&self, id: GameId, expected: u64, state: &GameState) -> Result<u64, StoreError> {
        let snapshot = encode(state)?;
        let version = {
            let mut games = self.games.write();
            let entry = games.get_mut(&id).ok_or(StoreError::GameNotFound(id))?;
            if entry.version != expected {
                warn!(game = %id, expected, actual = entry.version, "version conflict");
                return Err(StoreError::VersionConflict {
                    game: id,
                    expected,
                    actual: entry.version,
                });
            }
            entry.version += 1;
            entry.snapshot = snapshot;
            entry.version
        };
        self.index(state);
        Ok(version)
    }

    fn game_by_token(&self, token: &str) -> Result<GameId, StoreError> {
        self.game_tokens
            .read()
            .get(token)
            .copied()
            .ok_or_else(|| StoreError::TokenNotFound(token.to_string()))
    }

    fn player_by_token(&self, token: &str) -> Result<(GameId, PlayerId), StoreError> {
        self.player_tokens
            .read()
            .get(token)
            .copied()
            .ok_or_else(|| StoreError::TokenNotFound(token.to_string()))
    }
}

//! Caller-facing game operations over a `GameStore`.
//!
//! Every mutating call loads the game snapshot, applies one rules
//! operation to that private copy and saves it back with the version it
//! was loaded at. A failed operation is never saved, and a concurrent
//! writer makes the save fail with a version conflict rather than
//! interleaving.
//!
//! ## Usage
//!
//! ```
//! use rust_mathable::service::GameService;
//! use rust_mathable::store::MemoryStore;
//!
//! let service = GameService::new(MemoryStore::new()).with_seed(7);
//!
//! let game = service.create_game("friday").unwrap();
//! let ada = service.join_game(game.id, "ada").unwrap();
//! let bo = service.join_game(game.id, "bo").unwrap();
//! service.start_game(game.id, ada.id).unwrap();
//!
//! assert_eq!(service.get_hand(game.id, bo.id).unwrap().len(), 7);
//! assert_eq!(service.get_current_turn_score(game.id).unwrap(), 0);
//!
//! let end = service.end_turn(game.id, ada.id).unwrap();
//! assert_eq!(end.next, Some(bo.id));
//! ```

use parking_lot::Mutex;
use tracing::warn;

use crate::bag::Tile;
use crate::board::Cell;
use crate::core::{
    CellId, EngineError, Game, GameConfig, GameId, GameRng, GameState, Player, PlayerId,
    StoreError, TileId,
};
use crate::rules::{self, PlaceOutcome, TurnEnd};
use crate::scoring;
use crate::store::{GameStore, Versioned};

/// Game operations backed by a store.
pub struct GameService<S> {
    store: S,
    config: GameConfig,
    seeds: Mutex<GameRng>,
}

impl<S: GameStore> GameService<S> {
    /// Service creating standard games with OS-random seeds.
    pub fn new(store: S) -> Self {
        Self {
            store,
            config: GameConfig::standard(),
            seeds: Mutex::new(GameRng::from_entropy()),
        }
    }

    /// Configuration for games created from now on.
    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Derive every new game's seed from `seed`, for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seeds = Mutex::new(GameRng::new(seed));
        self
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    // === Lifecycle ===

    /// Create a waiting game.
    pub fn create_game(&self, name: impl Into<String>) -> Result<Game, EngineError> {
        let seed = self.seeds.lock().fork().seed();
        let id = self.store.allocate_id();
        let state = GameState::new(id, name, self.config.clone(), seed)?;
        self.store.insert(&state)?;
        Ok(state.game)
    }

    /// Seat a player in a waiting game.
    pub fn join_game(&self, game: GameId, name: impl Into<String>) -> Result<Player, EngineError> {
        self.mutate(game, "join", |state| {
            let id = rules::join(state, name)?;
            Ok(state.players[id].clone())
        })
    }

    /// Start the game; only its owner may.
    pub fn start_game(&self, game: GameId, player: PlayerId) -> Result<(), EngineError> {
        self.mutate(game, "start", |state| rules::start(state, player))
    }

    // === Turn actions ===

    pub fn place_tile(
        &self,
        game: GameId,
        tile: TileId,
        cell: CellId,
        player: PlayerId,
    ) -> Result<PlaceOutcome, EngineError> {
        self.mutate(game, "place", |state| rules::place_tile(state, player, tile, cell))
    }

    /// Claim an earned bonus draw. `None` if the bag was empty.
    pub fn pick_bonus_tile(&self, game: GameId, player: PlayerId) -> Result<Option<Tile>, EngineError> {
        self.mutate(game, "pick bonus", |state| {
            let drawn = rules::pick_bonus_tile(state, player)?;
            Ok(drawn.and_then(|id| state.tiles.get(id).copied()))
        })
    }

    pub fn end_turn(&self, game: GameId, player: PlayerId) -> Result<TurnEnd, EngineError> {
        self.mutate(game, "end turn", |state| rules::end_turn(state, player))
    }

    // === Queries ===

    /// Load a full snapshot.
    pub fn load(&self, game: GameId) -> Result<GameState, EngineError> {
        self.load_versioned(game).map(|v| v.value)
    }

    pub fn get_game(&self, game: GameId) -> Result<Game, EngineError> {
        self.load(game).map(|state| state.game)
    }

    /// Every cell in row-major order.
    pub fn get_board(&self, game: GameId) -> Result<Vec<Cell>, EngineError> {
        self.load(game).map(|state| state.board.cells().cloned().collect())
    }

    pub fn get_hand(&self, game: GameId, player: PlayerId) -> Result<Vec<Tile>, EngineError> {
        let state = self.load(game)?;
        state.player(player)?;
        Ok(state.hand(player))
    }

    /// Points the open turn would commit if it ended now.
    pub fn get_current_turn_score(&self, game: GameId) -> Result<i64, EngineError> {
        let state = self.load(game)?;
        Ok(scoring::turn_score(&state.turn, &state.config).total())
    }

    /// Players in turn order.
    pub fn get_players(&self, game: GameId) -> Result<Vec<Player>, EngineError> {
        self.load(game).map(|state| state.players.values().cloned().collect())
    }

    pub fn game_by_token(&self, token: &str) -> Result<Game, EngineError> {
        let id = self.store.game_by_token(token).map_err(|err| match err {
            StoreError::TokenNotFound(_) => EngineError::GameNotFound,
            other => other.into(),
        })?;
        self.get_game(id)
    }

    pub fn player_by_token(&self, token: &str) -> Result<(GameId, Player), EngineError> {
        let (game, player) = self.store.player_by_token(token).map_err(|err| match err {
            StoreError::TokenNotFound(token) => EngineError::PlayerTokenNotFound(token),
            other => other.into(),
        })?;
        let state = self.load(game)?;
        Ok((game, state.player(player)?.clone()))
    }

    // === Internals ===

    fn load_versioned(&self, game: GameId) -> Result<Versioned<GameState>, EngineError> {
        self.store.load(game).map_err(|err| match err {
            StoreError::GameNotFound(_) => EngineError::GameNotFound,
            other => other.into(),
        })
    }

    fn mutate<T>(
        &self,
        game: GameId,
        op: &'static str,
        apply: impl FnOnce(&mut GameState) -> Result<T, EngineError>,
    ) -> Result<T, EngineError> {
        let Versioned { version, value: mut state } = self.load_versioned(game)?;
        match apply(&mut state) {
            Ok(out) => {
                self.store.save(game, version, &state)?;
                Ok(out)
            }
            Err(err) => {
                warn!(game = %game, op, error = %err, "action rejected");
                Err(err)
            }
        }
    }
}

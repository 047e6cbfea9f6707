//! Game state: the aggregate of everything one game owns.
//!
//! ## Game
//!
//! Identity, display name, join token, status, winner and the draw seed.
//!
//! ## GameState
//!
//! Complete game snapshot:
//! - Configuration
//! - Players in turn order
//! - Tile ledger (bag, hands and board tiles)
//! - Board and the cell impact graph
//! - The current player and the open turn
//! - Action history
//!
//! Every collection is either an `im` persistent structure or small, so
//! cloning a snapshot to apply an operation tentatively is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::info;

use super::action::{Action, ActionRecord};
use super::config::GameConfig;
use super::entity::{CellId, GameId, TileId};
use super::error::{EngineError, LayoutError};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::DrawSeed;
use crate::bag::{Tile, TileLedger, TileLocation};
use crate::board::{Board, ImpactGraph};
use crate::scoring::PlacementScore;

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Accepting players; no board play.
    Waiting,
    /// Turns are being played.
    Ongoing,
    /// Terminal; the winner is set.
    Finished,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Waiting => write!(f, "waiting"),
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Finished => write!(f, "finished"),
        }
    }
}

/// The game record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub token: String,
    pub status: GameStatus,
    /// Set only once the game is finished.
    pub winner: Option<PlayerId>,
    pub draw_seed: DrawSeed,
}

/// Bookkeeping for the turn in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Turn number, starting at 1.
    pub number: u32,

    /// Actions taken so far this turn.
    pub sequence: u32,

    /// Tiles the player held when the turn began.
    pub hand_at_start: SmallVec<[TileId; 8]>,

    /// Placements made this turn, in order.
    pub placements: SmallVec<[PlacementScore; 8]>,

    /// Unclaimed bonus draws earned this turn.
    pub bonus_credits: u32,
}

impl TurnState {
    /// Open turn `number` for a player holding `hand`.
    #[must_use]
    pub fn begin(number: u32, hand: impl IntoIterator<Item = TileId>) -> Self {
        Self {
            number,
            hand_at_start: hand.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Whether `tile` was placed this turn.
    #[must_use]
    pub fn placed(&self, tile: TileId) -> bool {
        self.placements.iter().any(|p| p.tile == tile)
    }

    /// Whether a tile was placed on `cell` this turn.
    #[must_use]
    pub fn placed_on(&self, cell: CellId) -> bool {
        self.placements.iter().any(|p| p.cell == cell)
    }

    /// Sum of placement points so far.
    #[must_use]
    pub fn placement_points(&self) -> i64 {
        self.placements.iter().map(|p| p.points).sum()
    }

    /// Take the next sequence number.
    pub fn next_sequence(&mut self) -> u32 {
        let seq = self.sequence;
        self.sequence += 1;
        seq
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub game: Game,
    pub players: PlayerMap<Player>,
    pub tiles: TileLedger,
    pub board: Board,
    pub impacts: ImpactGraph,
    /// The player to act. `Some` exactly while the game is ongoing.
    pub current: Option<PlayerId>,
    pub turn: TurnState,
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a waiting game: build the board, put every tile of the
    /// distribution in the bag and seed the layout's value cells.
    pub fn new(
        id: GameId,
        name: impl Into<String>,
        config: GameConfig,
        seed: u64,
    ) -> Result<Self, EngineError> {
        config.validate()?;

        let mut tiles = TileLedger::from_distribution(&config.distribution);
        let mut board = config.layout.build();
        let mut impacts = ImpactGraph::new();

        for s in config.layout.seeds() {
            let position = s.cell.position(board.columns());
            let tile = tiles
                .find_in_bag(s.value)
                .ok_or(LayoutError::MissingSeedTile { value: s.value, position })?;
            board.place(tile, s.cell, s.value)?;
            tiles.move_to(tile, TileLocation::OnBoard(s.cell));
            impacts.record_placement(&board, s.cell);
        }

        let mut draw_seed = DrawSeed::new(seed);
        let token = draw_seed.next_rng().token();
        let game = Game {
            id,
            name: name.into(),
            token,
            status: GameStatus::Waiting,
            winner: None,
            draw_seed,
        };

        info!(game = %id, name = %game.name, tiles = tiles.len(), cells = board.len(), "game created");

        Ok(Self {
            config,
            game,
            players: PlayerMap::new(),
            tiles,
            board,
            impacts,
            current: None,
            turn: TurnState::default(),
            history: Vector::new(),
        })
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.game.status
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player, EngineError> {
        self.players.get(id).ok_or(EngineError::PlayerNotFound(id))
    }

    pub fn tile(&self, id: TileId) -> Result<&Tile, EngineError> {
        self.tiles.get(id).ok_or(EngineError::TileNotFound(id))
    }

    /// Tiles held by a player, in id order.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Vec<Tile> {
        self.tiles.hand(player).copied().collect()
    }

    /// Id of the tile on a cell, if any.
    #[must_use]
    pub fn tile_on(&self, cell: CellId) -> Option<TileId> {
        self.board.cell(cell).and_then(|c| c.tile())
    }

    /// Append to the action history.
    pub fn record_action(&mut self, player: PlayerId, action: Action) {
        let sequence = self.turn.next_sequence();
        self.history
            .push_back(ActionRecord::new(player, action, self.turn.number, sequence));
    }
}

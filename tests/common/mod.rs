//! Shared setup for integration tests.
#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use rust_mathable::bag::TileLocation;
use rust_mathable::board::BoardLayout;
use rust_mathable::core::{GameConfig, GameId, GameState, PlayerId, Position, TileId, CellId};
use rust_mathable::rules::{join, start};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test log subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Config with a custom layout and tile set.
pub fn config(layout: &str, distribution: &[(i32, u32)], hand_size: usize) -> GameConfig {
    GameConfig::standard()
        .with_layout(BoardLayout::parse(layout).unwrap())
        .with_distribution(distribution.iter().copied())
        .with_hand_size(hand_size)
}

/// A started game with `players` seated; player 0 is current.
pub fn started(config: GameConfig, players: usize, seed: u64) -> GameState {
    init_logging();
    let mut state = GameState::new(GameId(1), "test", config, seed).unwrap();
    for i in 0..players {
        join(&mut state, format!("player-{i}")).unwrap();
    }
    start(&mut state, PlayerId::new(0)).unwrap();
    state
}

/// Replace every hand: all held tiles go back to the bag, then player `i`
/// receives bag tiles with the values in `hands[i]`. Returns the tile ids
/// per player, in the order given.
///
/// Call before the current player places anything; their turn-start hand
/// is reset to the stacked one.
pub fn stack_hands(state: &mut GameState, hands: &[&[i32]]) -> Vec<Vec<TileId>> {
    let held: Vec<TileId> = state
        .tiles
        .iter()
        .filter(|t| t.owner().is_some())
        .map(|t| t.id)
        .collect();
    for tile in held {
        state.tiles.move_to(tile, TileLocation::InBag);
    }

    let stacked: Vec<Vec<TileId>> = hands
        .iter()
        .enumerate()
        .map(|(i, values)| {
            let player = PlayerId::new(i as u8);
            assert!(state.players.contains(player), "{player} has not joined");
            values
                .iter()
                .map(|&value| {
                    let tile = state
                        .tiles
                        .find_in_bag(value)
                        .unwrap_or_else(|| panic!("no tile of value {value} in the bag"));
                    state.tiles.move_to(tile, TileLocation::InHand(player));
                    tile
                })
                .collect()
        })
        .collect();

    if let Some(current) = state.current {
        assert!(state.turn.placements.is_empty(), "hands stacked mid-turn");
        state.turn.hand_at_start = state.tiles.hand(current).map(|t| t.id).collect();
    }
    stacked
}

/// Cell id at a grid position of the game's board.
pub fn cell(state: &GameState, row: u16, column: u16) -> CellId {
    CellId::from_position(Position::new(row, column), state.board.columns())
}

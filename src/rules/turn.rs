//! The turn state machine.
//!
//! ```text
//! waiting --start (owner, >= min players)--> ongoing --end check--> finished
//! ```
//!
//! While ongoing exactly one player is current. A turn is any number of
//! placements, bonus draws for credits earned on restriction squares, and
//! an explicit end: the turn's points are committed, the hand is refilled,
//! control passes to the next player by order and the end check runs.
//!
//! Every operation validates completely before it mutates, so an `Err`
//! leaves the state exactly as it was.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::engine::GameResult;
use crate::bag::{self, TileLocation};
use crate::board::Placement;
use crate::core::{
    Action, CellId, EngineError, GameState, GameStatus, PlacementError, Player, PlayerId, TileId,
    TurnState,
};
use crate::equations::{detect, Equation};
use crate::scoring::{self, TurnScore};

/// What a successful placement did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceOutcome {
    pub placement: Placement,
    pub equations: Vec<Equation>,
    /// Points this placement adds to the open turn.
    pub points: i64,
    /// Whether the placement earned a bonus draw.
    pub bonus_earned: bool,
}

/// What ending a turn did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnEnd {
    pub player: PlayerId,
    pub score: TurnScore,
    /// Tiles drawn to refill the hand.
    pub drawn: Vec<TileId>,
    /// The new current player; `None` once the game is finished.
    pub next: Option<PlayerId>,
    /// Set when this turn finished the game.
    pub result: Option<GameResult>,
}

/// Seat a new player. The first player to join owns the game.
pub fn join(state: &mut GameState, name: impl Into<String>) -> Result<PlayerId, EngineError> {
    if state.status() != GameStatus::Waiting {
        return Err(EngineError::GameAlreadyStarted);
    }
    let max = state.config.max_players;
    if state.player_count() >= max {
        return Err(EngineError::GameFull { max });
    }

    let id = PlayerId(state.player_count() as u8);
    let token = state.game.draw_seed.next_rng().token();
    let owner = state.players.is_empty();
    state.players.push(Player::new(id, name, token, owner));

    info!(game = %state.game.id, player = %id, owner, "player joined");
    Ok(id)
}

/// Deal the opening hands and hand control to the first player.
pub fn start(state: &mut GameState, player: PlayerId) -> Result<(), EngineError> {
    if state.status() != GameStatus::Waiting {
        return Err(EngineError::GameAlreadyStarted);
    }
    if !state.player(player)?.owner {
        return Err(EngineError::NotGameOwner(player));
    }
    let (min, found) = (state.config.min_players, state.player_count());
    if found < min {
        return Err(EngineError::NotEnoughPlayers { min, found });
    }

    let players: Vec<PlayerId> = state.players.player_ids().collect();
    let dealt = bag::deal_initial(
        &mut state.tiles,
        players,
        state.config.hand_size,
        &mut state.game.draw_seed,
    );

    let first = PlayerId::new(0);
    state.game.status = GameStatus::Ongoing;
    state.current = Some(first);
    state.turn = TurnState::begin(1, hand_ids(state, first));

    info!(game = %state.game.id, players = found, dealt, "game started");
    Ok(())
}

/// Put a tile from the current player's hand on an empty cell.
pub fn place_tile(
    state: &mut GameState,
    player: PlayerId,
    tile: TileId,
    cell: CellId,
) -> Result<PlaceOutcome, EngineError> {
    ensure_turn(state, player)?;

    let held = *state.tile(tile)?;
    if held.owner() != Some(player) {
        return Err(EngineError::TileNotInHand { tile, player });
    }
    let kind = state.board.cell(cell).ok_or(EngineError::CellNotFound(cell))?.kind.clone();

    state.board.check(cell, held.value)?;
    let equations = detect(&state.board, cell, held.value)?;
    if state.config.require_equation && equations.is_empty() {
        return Err(PlacementError::NoEquation { cell }.into());
    }

    // Validated; from here on nothing fails.
    let placement = state.board.place(tile, cell, held.value)?;
    state.tiles.move_to(tile, TileLocation::OnBoard(cell));
    state.impacts.record_placement(&state.board, cell);

    let score =
        scoring::score_placement(&state.board, &state.turn, tile, cell, held.value, &equations);
    let bonus_earned = kind.operator().is_some() && !equations.is_empty();
    if bonus_earned {
        state.turn.bonus_credits += 1;
    }
    state.turn.placements.push(score);
    state.record_action(player, Action::PlaceTile { tile, cell });

    debug!(
        game = %state.game.id,
        %player,
        %tile,
        %cell,
        value = held.value,
        equations = equations.len(),
        points = score.points,
        bonus_earned,
        "tile placed"
    );

    Ok(PlaceOutcome {
        placement,
        equations,
        points: score.points,
        bonus_earned,
    })
}

/// Spend a bonus credit on one tile from the bag.
///
/// An empty bag still consumes the credit and yields `None`.
pub fn pick_bonus_tile(state: &mut GameState, player: PlayerId) -> Result<Option<TileId>, EngineError> {
    ensure_turn(state, player)?;
    if state.turn.bonus_credits == 0 {
        return Err(EngineError::NoBonusAvailable(player));
    }

    state.turn.bonus_credits -= 1;
    let drawn = bag::draw_bonus(&mut state.tiles, player, &mut state.game.draw_seed);
    state.record_action(player, Action::PickBonus);

    debug!(game = %state.game.id, %player, tile = ?drawn, "bonus tile picked");
    Ok(drawn)
}

/// Commit the current turn and pass control, finishing the game when the
/// end condition holds.
pub fn end_turn(state: &mut GameState, player: PlayerId) -> Result<TurnEnd, EngineError> {
    ensure_turn(state, player)?;

    let score = scoring::turn_score(&state.turn, &state.config);
    state.players[player].score += score.total();
    let drawn = bag::refill(
        &mut state.tiles,
        player,
        state.config.hand_size,
        &mut state.game.draw_seed,
    );
    state.record_action(player, Action::EndTurn);

    let number = state.turn.number + 1;
    let (next, result) = if is_game_over(state) {
        state.turn = TurnState::begin(number, Vec::new());
        (None, finish(state))
    } else {
        let next = player.next(state.player_count());
        state.current = Some(next);
        state.turn = TurnState::begin(number, hand_ids(state, next));
        (Some(next), None)
    };

    info!(
        game = %state.game.id,
        %player,
        points = score.total(),
        bonus = score.bonus,
        drawn = drawn.len(),
        next = ?next,
        "turn ended"
    );

    Ok(TurnEnd {
        player,
        score,
        drawn,
        next,
        result,
    })
}

/// The bag is empty and either some hand is empty or nobody can place.
#[must_use]
pub fn is_game_over(state: &GameState) -> bool {
    if state.tiles.bag_len() > 0 {
        return false;
    }
    let some_hand_empty = state
        .players
        .player_ids()
        .any(|p| state.tiles.hand_len(p) == 0);
    some_hand_empty || !has_legal_placement(state)
}

/// Whether any player could place any of their tiles anywhere.
#[must_use]
pub fn has_legal_placement(state: &GameState) -> bool {
    state
        .players
        .player_ids()
        .any(|p| !legal_placements(state, p).is_empty())
}

/// Every `(tile, cell)` the player could legally place right now, ignoring
/// whose turn it is.
#[must_use]
pub fn legal_placements(state: &GameState, player: PlayerId) -> Vec<(TileId, CellId)> {
    let hand: Vec<(TileId, i32)> = state.tiles.hand(player).map(|t| (t.id, t.value)).collect();
    if hand.is_empty() {
        return Vec::new();
    }

    let mut legal = Vec::new();
    for cell in candidate_cells(state) {
        let mut by_value: FxHashMap<i32, bool> = FxHashMap::default();
        for &(tile, value) in &hand {
            let ok = *by_value
                .entry(value)
                .or_insert_with(|| is_legal(state, cell, value));
            if ok {
                legal.push((tile, cell));
            }
        }
    }
    legal
}

fn candidate_cells(state: &GameState) -> Vec<CellId> {
    if state.config.require_equation {
        state.impacts.frontier(&state.board)
    } else {
        state.board.empty_cells().map(|c| c.id).collect()
    }
}

fn is_legal(state: &GameState, cell: CellId, value: i32) -> bool {
    state.board.check(cell, value).is_ok()
        && detect(&state.board, cell, value)
            .is_ok_and(|equations| !state.config.require_equation || !equations.is_empty())
}

fn ensure_turn(state: &GameState, player: PlayerId) -> Result<(), EngineError> {
    let status = state.status();
    if status != GameStatus::Ongoing {
        return Err(EngineError::GameNotOngoing(status));
    }
    state.player(player)?;
    match state.current {
        Some(current) if current == player => Ok(()),
        Some(current) => Err(EngineError::NotYourTurn { player, current }),
        None => Err(EngineError::GameNotOngoing(status)),
    }
}

fn hand_ids(state: &GameState, player: PlayerId) -> Vec<TileId> {
    state.tiles.hand(player).map(|t| t.id).collect()
}

/// Apply the end-game deduction and settle the winner.
fn finish(state: &mut GameState) -> Option<GameResult> {
    let scores = scoring::final_scores(&state.players, &state.tiles);
    for (id, player) in state.players.iter_mut() {
        player.score = scores[id];
    }
    let winner = scoring::winner(&scores);

    state.game.status = GameStatus::Finished;
    state.game.winner = winner;
    state.current = None;

    info!(game = %state.game.id, winner = ?winner, "game finished");
    winner.map(|winner| GameResult { winner, scores })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardLayout;
    use crate::core::{GameConfig, GameId};

    fn state(layout: &str, distribution: &[(i32, u32)], hand_size: usize) -> GameState {
        let config = GameConfig::standard()
            .with_layout(BoardLayout::parse(layout).unwrap())
            .with_distribution(distribution.iter().copied())
            .with_hand_size(hand_size);
        GameState::new(GameId(1), "test", config, 42).unwrap()
    }

    fn two_players(state: &mut GameState) -> (PlayerId, PlayerId) {
        (join(state, "ada").unwrap(), join(state, "bo").unwrap())
    }

    #[test]
    fn test_join_assigns_order_and_owner() {
        let mut state = state(". . .", &[(1, 20)], 3);
        let (a, b) = two_players(&mut state);

        assert_eq!((a, b), (PlayerId::new(0), PlayerId::new(1)));
        assert!(state.players[a].owner);
        assert!(!state.players[b].owner);
        assert_ne!(state.players[a].token, state.players[b].token);
    }

    #[test]
    fn test_join_limits() {
        let mut state = state(". . .", &[(1, 20)], 3);
        for name in ["a", "b", "c", "d"] {
            join(&mut state, name).unwrap();
        }
        assert_eq!(join(&mut state, "e"), Err(EngineError::GameFull { max: 4 }));

        start(&mut state, PlayerId::new(0)).unwrap();
        assert_eq!(join(&mut state, "f"), Err(EngineError::GameAlreadyStarted));
    }

    #[test]
    fn test_start_requirements() {
        let mut state = state(". . .", &[(1, 20)], 3);
        let a = join(&mut state, "ada").unwrap();
        assert_eq!(
            start(&mut state, a),
            Err(EngineError::NotEnoughPlayers { min: 2, found: 1 })
        );

        let b = join(&mut state, "bo").unwrap();
        assert_eq!(start(&mut state, b), Err(EngineError::NotGameOwner(b)));
        assert_eq!(
            start(&mut state, PlayerId::new(7)),
            Err(EngineError::PlayerNotFound(PlayerId::new(7)))
        );

        start(&mut state, a).unwrap();
        assert_eq!(state.status(), GameStatus::Ongoing);
        assert_eq!(state.current, Some(a));
        assert_eq!(state.tiles.hand_len(a), 3);
        assert_eq!(state.tiles.hand_len(b), 3);
        assert_eq!(state.turn.hand_at_start.len(), 3);
        assert_eq!(start(&mut state, a), Err(EngineError::GameAlreadyStarted));
    }

    #[test]
    fn test_actions_before_start() {
        let mut state = state(". . .", &[(1, 20)], 3);
        let (a, _) = two_players(&mut state);

        assert_eq!(
            end_turn(&mut state, a),
            Err(EngineError::GameNotOngoing(GameStatus::Waiting))
        );
    }

    #[test]
    fn test_not_your_turn() {
        let mut state = state(". . .", &[(1, 20)], 3);
        let (a, b) = two_players(&mut state);
        start(&mut state, a).unwrap();

        let tile = state.hand(b)[0].id;
        assert_eq!(
            place_tile(&mut state, b, tile, CellId(0)),
            Err(EngineError::NotYourTurn { player: b, current: a })
        );
        assert_eq!(
            pick_bonus_tile(&mut state, b),
            Err(EngineError::NotYourTurn { player: b, current: a })
        );
    }

    #[test]
    fn test_place_rejections_leave_state_untouched() {
        let mut state = state(". . .", &[(1, 20)], 3);
        let (a, b) = two_players(&mut state);
        start(&mut state, a).unwrap();
        let before = state.clone();

        let theirs = state.hand(b)[0].id;
        assert_eq!(
            place_tile(&mut state, a, theirs, CellId(0)),
            Err(EngineError::TileNotInHand { tile: theirs, player: a })
        );
        assert_eq!(
            place_tile(&mut state, a, TileId(99), CellId(0)),
            Err(EngineError::TileNotFound(TileId(99)))
        );
        let mine = state.hand(a)[0].id;
        assert_eq!(
            place_tile(&mut state, a, mine, CellId(9)),
            Err(EngineError::CellNotFound(CellId(9)))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_turn_rotation_wraps() {
        let mut state = state(". . . . .\n. . . . .", &[(1, 30)], 2);
        let (a, b) = two_players(&mut state);
        start(&mut state, a).unwrap();

        assert_eq!(end_turn(&mut state, a).unwrap().next, Some(b));
        assert_eq!(end_turn(&mut state, b).unwrap().next, Some(a));
        assert_eq!(state.turn.number, 3);
    }

    #[test]
    fn test_end_turn_commits_and_refills() {
        let mut state = state(". . . . .", &[(1, 4), (2, 6)], 2);
        let (a, _) = two_players(&mut state);
        start(&mut state, a).unwrap();
        let tile = state.hand(a)[0].id;

        place_tile(&mut state, a, tile, CellId(2)).unwrap();
        assert_eq!(state.tiles.hand_len(a), 1);

        let end = end_turn(&mut state, a).unwrap();
        assert_eq!(end.drawn.len(), 1);
        assert_eq!(state.tiles.hand_len(a), 2);
        assert_eq!(state.players[a].score, end.score.total());
    }

    #[test]
    fn test_require_equation() {
        let mut state = state(". . .", &[(1, 20)], 3);
        state.config.require_equation = true;
        let (a, _) = two_players(&mut state);
        start(&mut state, a).unwrap();
        let tile = state.hand(a)[0].id;

        assert_eq!(
            place_tile(&mut state, a, tile, CellId(0)),
            Err(EngineError::Placement(PlacementError::NoEquation { cell: CellId(0) }))
        );
        assert!(legal_placements(&state, a).is_empty());
    }

    #[test]
    fn test_legal_placements_respect_value_cells() {
        let mut state = state("v5 .", &[(1, 20)], 2);
        let (a, _) = two_players(&mut state);
        start(&mut state, a).unwrap();

        let legal = legal_placements(&state, a);
        assert_eq!(legal.len(), 2);
        assert!(legal.iter().all(|&(_, cell)| cell == CellId(1)));
    }

    #[test]
    fn test_history_is_recorded() {
        let mut state = state(". . .", &[(1, 20)], 3);
        let (a, _) = two_players(&mut state);
        start(&mut state, a).unwrap();
        let tile = state.hand(a)[0].id;

        place_tile(&mut state, a, tile, CellId(1)).unwrap();
        end_turn(&mut state, a).unwrap();

        let actions: Vec<Action> = state.history.iter().map(|r| r.action).collect();
        assert_eq!(actions, vec![Action::PlaceTile { tile, cell: CellId(1) }, Action::EndTurn]);
        assert_eq!(state.history[1].sequence, 1);
        assert_eq!(state.history[1].turn, 1);
    }
}

//! Game lifecycle: turn rotation, the end-game check, deductions and the
//! winner tie-break, driven through the rule functions and `MathableRules`.

mod common;

use common::{cell, config, stack_hands, started};
use rust_mathable::core::{Action, EngineError, GameStatus, PlayerId};
use rust_mathable::rules::{
    end_turn, is_game_over, place_tile, start, ActionOutcome, MathableRules, RulesEngine,
};

const A: PlayerId = PlayerId(0);
const B: PlayerId = PlayerId(1);
const C: PlayerId = PlayerId(2);

#[test]
fn test_three_player_rotation() {
    let mut state = started(config(". . . . . .\n. . . . . .", &[(1, 40)], 3), 3, 11);

    let order: Vec<_> = (0..6)
        .map(|_| {
            let current = state.current.unwrap();
            end_turn(&mut state, current).unwrap().next.unwrap()
        })
        .collect();

    assert_eq!(order, vec![B, C, A, B, C, A]);
    assert_eq!(state.turn.number, 7);
    assert_eq!(state.history.len(), 6);
}

/// With the bag empty, the player who empties their hand ends the game;
/// everyone else loses the value of what they still hold.
#[test]
fn test_empty_hand_ends_game() {
    let distribution = [(2, 1), (3, 1), (1, 2)];
    let mut state = started(config(". . . . .", &distribution, 2), 2, 12);
    let hands = stack_hands(&mut state, &[&[2, 3], &[1, 1]]);
    assert_eq!(state.tiles.bag_len(), 0);

    let (left, right) = (cell(&state, 0, 0), cell(&state, 0, 4));
    place_tile(&mut state, A, hands[0][0], left).unwrap();
    place_tile(&mut state, A, hands[0][1], right).unwrap();
    let end = end_turn(&mut state, A).unwrap();

    assert!(end.drawn.is_empty());
    assert_eq!(end.next, None);
    assert_eq!(end.score.bonus, 50);

    let result = end.result.unwrap();
    assert!(result.is_winner(A));
    assert_eq!(result.scores[A], 50);
    assert_eq!(result.scores[B], -2);

    assert_eq!(state.status(), GameStatus::Finished);
    assert_eq!(state.current, None);
    assert_eq!(state.players[B].score, -2);
    assert_eq!(
        end_turn(&mut state, B),
        Err(EngineError::GameNotOngoing(GameStatus::Finished))
    );
}

/// Equal final scores go to the player earlier in turn order, even when the
/// later player is the one who went out.
#[test]
fn test_tie_goes_to_lower_order() {
    let no_bonus = config(". . . . .", &[(0, 4)], 2).with_full_hand_bonus(0);
    let mut state = started(no_bonus, 2, 13);

    let end = end_turn(&mut state, A).unwrap();
    assert_eq!(end.next, Some(B));

    let hand: Vec<_> = state.hand(B).iter().map(|t| t.id).collect();
    let (left, right) = (cell(&state, 0, 0), cell(&state, 0, 4));
    place_tile(&mut state, B, hand[0], left).unwrap();
    place_tile(&mut state, B, hand[1], right).unwrap();
    let end = end_turn(&mut state, B).unwrap();

    assert_eq!(state.status(), GameStatus::Finished);
    assert_eq!(end.result.map(|r| r.winner), Some(A));
    assert_eq!(state.game.winner, Some(A));
}

#[test]
fn test_game_ends_when_nobody_can_place() {
    let mut state = started(config("v5 v5", &[(1, 4)], 2), 2, 14);
    assert!(is_game_over(&state));

    let end = end_turn(&mut state, A).unwrap();

    assert_eq!(state.status(), GameStatus::Finished);
    assert_eq!(state.players[A].score, -2);
    assert_eq!(state.players[B].score, -2);
    assert_eq!(end.result.unwrap().winner, A);
}

#[test]
fn test_game_continues_while_bag_has_tiles() {
    let mut state = started(config("v5 v5", &[(1, 10)], 2), 2, 15);

    assert!(!is_game_over(&state));
    assert_eq!(end_turn(&mut state, A).unwrap().next, Some(B));
    assert_eq!(state.status(), GameStatus::Ongoing);
}

#[test]
fn test_start_is_owner_only_and_once() {
    let mut state = started(config(". . .", &[(1, 20)], 2), 2, 16);

    assert_eq!(start(&mut state, A), Err(EngineError::GameAlreadyStarted));
    assert_eq!(start(&mut state, B), Err(EngineError::GameAlreadyStarted));
}

#[test]
fn test_rules_engine_drives_a_game_to_the_end() {
    // Zero tiles always chain (0 + 0 = 0), so every empty cell stays legal.
    let mut state = started(config(". . . .\n. . . .", &[(0, 12)], 3), 2, 17);
    let rules = MathableRules;

    let mut steps = 0;
    while rules.is_terminal(&state).is_none() {
        let player = state.current.unwrap();
        let actions = rules.legal_actions(&state, player);
        let action = actions[0];
        match rules.apply_action(&mut state, player, &action).unwrap() {
            ActionOutcome::Placed(outcome) => assert_eq!(
                Action::PlaceTile {
                    tile: outcome.placement.tile,
                    cell: outcome.placement.cell,
                },
                action
            ),
            ActionOutcome::TurnEnded(end) => assert_eq!(end.player, player),
            ActionOutcome::Bonus(_) => {}
        }
        steps += 1;
        assert!(steps < 200, "game did not terminate");
    }

    let result = rules.is_terminal(&state).unwrap();
    assert_eq!(Some(result.winner), state.game.winner);
    assert_eq!(result.scores[A], state.players[A].score);
    assert!(state.board.empty_cells().next().is_none() || state.tiles.bag_len() == 0);
    assert!(rules.legal_actions(&state, A).is_empty());
}

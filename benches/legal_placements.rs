use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_mathable::core::{GameConfig, GameId, GameState, PlayerId};
use rust_mathable::equations::detect;
use rust_mathable::rules::{join, legal_placements, start, MathableRules, RulesEngine};

fn started(config: GameConfig) -> GameState {
    let mut state = GameState::new(GameId(1), "bench", config, 12345).unwrap();
    join(&mut state, "ada").unwrap();
    join(&mut state, "bo").unwrap();
    start(&mut state, PlayerId::new(0)).unwrap();
    state
}

/// Play the first legal placement each turn for a few rounds so the board
/// has more than the seeded centre.
fn midgame(config: GameConfig) -> GameState {
    let mut state = started(config);
    let rules = MathableRules;
    for _ in 0..40 {
        let Some(player) = state.current else { break };
        let action = rules.legal_actions(&state, player)[0];
        rules.apply_action(&mut state, player, &action).unwrap();
    }
    state
}

fn bench_legal_placements(c: &mut Criterion) {
    let opening = started(GameConfig::standard());
    c.bench_function("legal_placements_opening", |b| {
        b.iter(|| legal_placements(black_box(&opening), PlayerId::new(0)))
    });

    let state = midgame(GameConfig::standard());
    let player = state.current.unwrap_or(PlayerId::new(0));
    c.bench_function("legal_placements_midgame", |b| {
        b.iter(|| legal_placements(black_box(&state), player))
    });

    let frontier = midgame(GameConfig::standard().with_require_equation(true));
    let player = frontier.current.unwrap_or(PlayerId::new(0));
    c.bench_function("legal_placements_frontier", |b| {
        b.iter(|| legal_placements(black_box(&frontier), player))
    });
}

fn bench_detect(c: &mut Criterion) {
    let state = started(GameConfig::standard());
    let above = state.board.cell_at(5, 6).unwrap().id;

    c.bench_function("detect_center", |b| {
        b.iter(|| detect(&state.board, black_box(above), black_box(2)))
    });
}

fn bench_snapshot_clone(c: &mut Criterion) {
    let state = midgame(GameConfig::standard());

    c.bench_function("snapshot_clone", |b| b.iter(|| black_box(&state).clone()));
}

criterion_group!(benches, bench_legal_placements, bench_detect, bench_snapshot_clone);
criterion_main!(benches);

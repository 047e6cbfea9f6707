//! Dealing tiles from the bag.
//!
//! Every draw takes a fresh RNG stream from the game's `DrawSeed` and picks
//! a uniform sample (partial Fisher-Yates) of the bag's tile ids in id
//! order. Asking for more tiles than the bag holds deals what is left;
//! running dry is never an error.

use tracing::debug;

use super::ledger::TileLedger;
use super::tile::TileLocation;
use crate::core::{DrawSeed, GameRng, PlayerId, TileId};

/// Choose up to `n` distinct bag tiles without moving them.
///
/// ```
/// use rust_mathable::bag::{draw_random, TileLedger};
/// use rust_mathable::core::GameRng;
///
/// let ledger = TileLedger::from_distribution(&[(1, 3)]);
/// let mut rng = GameRng::new(5);
///
/// assert_eq!(draw_random(&ledger, 2, &mut rng).len(), 2);
/// assert_eq!(draw_random(&ledger, 10, &mut rng).len(), 3);
/// ```
#[must_use]
pub fn draw_random(ledger: &TileLedger, n: usize, rng: &mut GameRng) -> Vec<TileId> {
    let mut bag = ledger.bag();
    rng.sample(&mut bag, n).to_vec()
}

/// Draw up to `n` tiles into a player's hand.
pub fn draw_into_hand(
    ledger: &mut TileLedger,
    player: PlayerId,
    n: usize,
    seed: &mut DrawSeed,
) -> Vec<TileId> {
    let drawn = draw_random(ledger, n, &mut seed.next_rng());
    for &tile in &drawn {
        ledger.move_to(tile, TileLocation::InHand(player));
    }
    debug!(%player, requested = n, drawn = drawn.len(), left = ledger.bag_len(), "tiles drawn");
    drawn
}

/// Deal `hand_size` tiles to each player in turn order.
///
/// Returns the number of tiles dealt.
pub fn deal_initial(
    ledger: &mut TileLedger,
    players: impl IntoIterator<Item = PlayerId>,
    hand_size: usize,
    seed: &mut DrawSeed,
) -> usize {
    players
        .into_iter()
        .map(|player| draw_into_hand(ledger, player, hand_size, seed).len())
        .sum()
}

/// Top a player's hand back up to `hand_size`.
pub fn refill(
    ledger: &mut TileLedger,
    player: PlayerId,
    hand_size: usize,
    seed: &mut DrawSeed,
) -> Vec<TileId> {
    let missing = hand_size.saturating_sub(ledger.hand_len(player));
    if missing == 0 {
        return Vec::new();
    }
    draw_into_hand(ledger, player, missing, seed)
}

/// Draw a single bonus tile, if the bag has one.
pub fn draw_bonus(ledger: &mut TileLedger, player: PlayerId, seed: &mut DrawSeed) -> Option<TileId> {
    draw_into_hand(ledger, player, 1, seed).first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> TileLedger {
        TileLedger::from_distribution(&[(1, 5), (2, 5), (3, 5)])
    }

    #[test]
    fn test_draw_random_is_distinct() {
        let ledger = ledger();
        let mut rng = GameRng::new(42);

        let mut drawn = draw_random(&ledger, 10, &mut rng);
        drawn.sort_unstable();
        drawn.dedup();
        assert_eq!(drawn.len(), 10);
    }

    #[test]
    fn test_draw_is_deterministic() {
        let mut a = DrawSeed::new(8);
        let mut b = DrawSeed::new(8);
        let mut left = ledger();
        let mut right = ledger();

        assert_eq!(
            draw_into_hand(&mut left, PlayerId::new(0), 4, &mut a),
            draw_into_hand(&mut right, PlayerId::new(0), 4, &mut b)
        );
    }

    #[test]
    fn test_deal_initial() {
        let mut ledger = ledger();
        let mut seed = DrawSeed::new(1);

        let dealt = deal_initial(&mut ledger, PlayerId::all(2), 7, &mut seed);

        assert_eq!(dealt, 14);
        assert_eq!(ledger.hand_len(PlayerId::new(0)), 7);
        assert_eq!(ledger.hand_len(PlayerId::new(1)), 7);
        assert_eq!(ledger.bag_len(), 1);
    }

    #[test]
    fn test_deal_runs_dry() {
        let mut ledger = TileLedger::from_distribution(&[(4, 10)]);
        let mut seed = DrawSeed::new(1);

        let dealt = deal_initial(&mut ledger, PlayerId::all(2), 7, &mut seed);

        assert_eq!(dealt, 10);
        assert_eq!(ledger.hand_len(PlayerId::new(0)), 7);
        assert_eq!(ledger.hand_len(PlayerId::new(1)), 3);
        assert_eq!(ledger.bag_len(), 0);
    }

    #[test]
    fn test_refill_tops_up() {
        let mut ledger = ledger();
        let mut seed = DrawSeed::new(3);
        let player = PlayerId::new(0);

        draw_into_hand(&mut ledger, player, 2, &mut seed);
        let drawn = refill(&mut ledger, player, 7, &mut seed);

        assert_eq!(drawn.len(), 5);
        assert_eq!(ledger.hand_len(player), 7);

        let draws = seed.draws();
        assert!(refill(&mut ledger, player, 7, &mut seed).is_empty());
        assert_eq!(seed.draws(), draws);
    }

    #[test]
    fn test_draw_bonus() {
        let mut ledger = TileLedger::from_distribution(&[(6, 1)]);
        let mut seed = DrawSeed::new(3);
        let player = PlayerId::new(1);

        assert_eq!(draw_bonus(&mut ledger, player, &mut seed), Some(TileId(0)));
        assert_eq!(draw_bonus(&mut ledger, player, &mut seed), None);
        assert_eq!(ledger.hand_len(player), 1);
    }
}

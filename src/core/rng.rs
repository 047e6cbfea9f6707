//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Per-draw streams**: every bag draw derives a fresh stream from the
//!   game seed and a draw counter, so no RNG state is carried between calls
//! - **Forkable**: a service-level master RNG forks one seed per new game
//!
//! ## Usage
//!
//! ```
//! use rust_mathable::core::GameRng;
//!
//! // Two draws with the same (seed, counter) see the same stream.
//! let mut a = GameRng::for_draw(42, 3);
//! let mut b = GameRng::for_draw(42, 3);
//! assert_eq!(a.gen_range_usize(0..100), b.gen_range_usize(0..100));
//!
//! // Forking hands out independent per-game seeds.
//! let mut master = GameRng::new(7);
//! assert_ne!(master.fork().seed(), master.fork().seed());
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Crockford base-32 alphabet used for tokens (no I, L, O, U).
const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Length of generated join tokens.
pub const TOKEN_LEN: usize = 10;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Fresh stream for the `draw`-th draw of a game seeded with `game_seed`.
    #[must_use]
    pub fn for_draw(game_seed: u64, draw: u64) -> Self {
        Self::new(game_seed ^ draw.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA))
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(GOLDEN_GAMMA));
        Self::new(fork_seed)
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a uniform random sample of `amount` elements of `slice`
    /// (partial Fisher-Yates, reordering `slice` in place) and return it.
    ///
    /// Every subset of size `amount` is equally likely, in uniformly random
    /// order. If `amount` exceeds the slice length the whole slice is
    /// shuffled and returned.
    pub fn sample<'a, T>(&mut self, slice: &'a mut [T], amount: usize) -> &'a [T] {
        let amount = amount.min(slice.len());
        let (chosen, _) = slice.partial_shuffle(&mut self.inner, amount);
        chosen
    }

    /// Generate a token from the Crockford base-32 alphabet.
    #[must_use]
    pub fn token(&mut self) -> String {
        (0..TOKEN_LEN)
            .map(|_| CROCKFORD[self.inner.gen_range(0..CROCKFORD.len())] as char)
            .collect()
    }
}

/// Per-game source of draw streams.
///
/// Stores only the game seed and how many streams have been handed out, so
/// it serializes with the game and replays identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawSeed {
    seed: u64,
    draws: u64,
}

impl DrawSeed {
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Streams handed out so far.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Fresh RNG for the next draw.
    pub fn next_rng(&mut self) -> GameRng {
        let rng = GameRng::for_draw(self.seed, self.draws);
        self.draws += 1;
        rng
    }
}

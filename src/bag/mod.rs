//! Tiles, the tile ledger and dealing from the bag.

pub mod tile;
pub mod ledger;
pub mod distribution;

pub use tile::{Tile, TileLocation};
pub use ledger::TileLedger;
pub use distribution::{deal_initial, draw_bonus, draw_into_hand, draw_random, refill};

//! The board: cells, the grid, layouts and the cell impact graph.
//!
//! - `cell`: square kinds and occupants
//! - `grid`: the `Board` arena, neighbours and static placement checks
//! - `layout`: text layouts and the standard board
//! - `impact`: incremental dependency edges between cells

pub mod cell;
pub mod grid;
pub mod layout;
pub mod impact;

pub use cell::{Cell, CellKind, Occupant, Operator};
pub use grid::{Axis, Board, Direction, Neighbors, Placement};
pub use layout::{BoardLayout, Seed};
pub use impact::{CellImpact, ImpactGraph};

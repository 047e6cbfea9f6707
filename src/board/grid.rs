//! The board: a fixed-size grid of cells stored as an arena addressed by
//! `CellId`.
//!
//! Cells live in an `im::Vector`, so cloning a board for a tentative
//! mutation is O(1) and only the touched cells are copied.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, CellKind, Occupant};
use crate::core::{CellId, PlacementError, Position, TileId};

/// Board axis along which runs are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Direction in which this axis is read.
    #[must_use]
    pub const fn forward(self) -> Direction {
        match self {
            Axis::Horizontal => Direction::Right,
            Axis::Vertical => Direction::Down,
        }
    }

    /// Direction against reading order.
    #[must_use]
    pub const fn backward(self) -> Direction {
        match self {
            Axis::Horizontal => Direction::Left,
            Axis::Vertical => Direction::Up,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// One step on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The axis this direction moves along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Orthogonal neighbours of a cell; `None` past the board edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    pub up: Option<CellId>,
    pub down: Option<CellId>,
    pub left: Option<CellId>,
    pub right: Option<CellId>,
}

impl Neighbors {
    /// Neighbour in the given direction.
    #[must_use]
    pub fn get(&self, direction: Direction) -> Option<CellId> {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Iterate over present neighbours with their direction.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, CellId)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.get(d).map(|c| (d, c)))
    }
}

/// A tile that has been put on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub tile: TileId,
    pub cell: CellId,
    pub value: i32,
}

/// Fixed-size grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: u16,
    columns: u16,
    cells: Vector<Cell>,
}

impl Board {
    /// Build a board from row-major cell kinds.
    ///
    /// Panics if `kinds.len() != rows * columns`.
    #[must_use]
    pub fn from_kinds(rows: u16, columns: u16, kinds: Vec<CellKind>) -> Self {
        assert_eq!(
            kinds.len(),
            rows as usize * columns as usize,
            "cell kinds must cover the whole grid"
        );

        let cells = kinds
            .into_iter()
            .enumerate()
            .map(|(i, kind)| {
                let id = CellId(i as u32);
                Cell::new(id, id.position(columns), kind)
            })
            .collect();

        Self { rows, columns, cells }
    }

    /// Board of `rows × columns` unrestricted cells.
    #[must_use]
    pub fn blank(rows: u16, columns: u16) -> Self {
        Self::from_kinds(rows, columns, vec![CellKind::Empty; rows as usize * columns as usize])
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at a grid position, if on the board.
    #[must_use]
    pub fn cell_at(&self, row: u16, column: u16) -> Option<&Cell> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(CellId::from_position(Position::new(row, column), self.columns).index())
    }

    /// Cell by id.
    #[must_use]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Value of the tile on a cell, if any.
    #[must_use]
    pub fn value_at(&self, id: CellId) -> Option<i32> {
        self.cell(id).and_then(Cell::value)
    }

    /// The adjacent cell in `direction`, if on the board.
    #[must_use]
    pub fn step(&self, id: CellId, direction: Direction) -> Option<CellId> {
        let Position { row, column } = id.position(self.columns);
        let (row, column) = match direction {
            Direction::Up => (row.checked_sub(1)?, column),
            Direction::Down => (row + 1, column),
            Direction::Left => (row, column.checked_sub(1)?),
            Direction::Right => (row, column + 1),
        };
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(CellId::from_position(Position::new(row, column), self.columns))
    }

    /// Orthogonal neighbours of a cell.
    #[must_use]
    pub fn neighbors(&self, id: CellId) -> Neighbors {
        Neighbors {
            up: self.step(id, Direction::Up),
            down: self.step(id, Direction::Down),
            left: self.step(id, Direction::Left),
            right: self.step(id, Direction::Right),
        }
    }

    /// Check the cell's own static constraint for a tile value, without
    /// changing anything.
    pub fn check(&self, id: CellId, value: i32) -> Result<&Cell, PlacementError> {
        let cell = self.cell(id).ok_or(PlacementError::OffBoard { cell: id })?;
        if cell.is_occupied() {
            return Err(PlacementError::CellOccupied { cell: id });
        }
        if !cell.kind.admits(value) {
            return Err(PlacementError::ValueNotAllowed { cell: id, value });
        }
        Ok(cell)
    }

    /// Put a tile on a cell.
    ///
    /// Enforces only the cell's own constraint; arithmetic validity is the
    /// equation detector's job and must be checked first.
    pub fn place(&mut self, tile: TileId, id: CellId, value: i32) -> Result<Placement, PlacementError> {
        self.check(id, value)?;
        if let Some(cell) = self.cells.get_mut(id.index()) {
            cell.occupant = Some(Occupant { tile, value });
        }
        Ok(Placement { tile, cell: id, value })
    }

    /// Empty cells.
    pub fn empty_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| !c.is_occupied())
    }
}

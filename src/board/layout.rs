//! Board layouts parsed from text.
//!
//! One whitespace-separated token per cell, one line per row:
//!
//! | Token        | Cell                                                   |
//! |--------------|--------------------------------------------------------|
//! | `.`          | unrestricted                                           |
//! | `2x`, `3x`   | award square                                           |
//! | `+ - * /`    | restriction square                                     |
//! | `n`          | value square allowing `{n}`, seeded with a tile of `n` |
//! | `v<a>,<b>..` | value square allowing the listed values, not seeded    |
//!
//! ```
//! use rust_mathable::board::{BoardLayout, CellKind};
//!
//! let layout = BoardLayout::parse("
//!     .  2x .
//!     +  1  v5,7
//! ").unwrap();
//!
//! assert_eq!((layout.rows(), layout.columns()), (2, 3));
//! assert_eq!(layout.seeds().len(), 1);
//! assert_eq!(layout.kinds()[5], CellKind::value([5, 7]));
//! ```

use serde::{Deserialize, Serialize};

use super::cell::{CellKind, Operator};
use super::grid::Board;
use crate::core::{CellId, LayoutError, Position};

const STANDARD: &str = "
    3x .  .  .  .  .  3x 3x .  .  .  .  .  3x
    .  2x .  .  /  .  .  .  .  /  .  .  2x .
    .  .  2x .  .  -  .  .  -  .  .  2x .  .
    .  .  .  2x .  .  +  *  .  .  2x .  .  .
    .  /  .  .  2x .  *  +  .  2x .  .  /  .
    .  .  -  .  .  .  .  .  .  .  .  -  .  .
    3x .  .  *  +  .  1  2  .  *  +  .  .  3x
    3x .  .  +  *  .  3  4  .  +  *  .  .  3x
    .  .  -  .  .  .  .  .  .  .  .  -  .  .
    .  /  .  .  2x .  +  *  .  2x .  .  /  .
    .  .  .  2x .  .  *  +  .  .  2x .  .  .
    .  .  2x .  .  -  .  .  -  .  .  2x .  .
    .  2x .  .  /  .  .  .  .  /  .  .  2x .
    3x .  .  .  .  .  3x 3x .  .  .  .  .  3x
";

/// A tile value that must be on a cell when the game is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    pub cell: CellId,
    pub value: i32,
}

/// Parsed description of a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    rows: u16,
    columns: u16,
    kinds: Vec<CellKind>,
    seeds: Vec<Seed>,
}

impl BoardLayout {
    /// The standard 14×14 board with `1 2 / 3 4` seeded in the centre.
    #[must_use]
    pub fn standard() -> Self {
        Self::parse(STANDARD).expect("standard layout is well-formed")
    }

    /// Parse a layout from text.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let lines: Vec<Vec<&str>> = text
            .lines()
            .map(|line| line.split_whitespace().collect::<Vec<_>>())
            .filter(|tokens| !tokens.is_empty())
            .collect();

        let columns = lines.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(LayoutError::Empty);
        }

        let mut kinds = Vec::with_capacity(lines.len() * columns);
        let mut seeds = Vec::new();

        for (row, tokens) in lines.iter().enumerate() {
            if tokens.len() != columns {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: columns,
                    found: tokens.len(),
                });
            }

            for (column, token) in tokens.iter().enumerate() {
                let position = Position::new(row as u16, column as u16);
                let (kind, seed) = parse_token(token).ok_or_else(|| LayoutError::UnknownToken {
                    token: (*token).to_string(),
                    position,
                })?;
                if let Some(value) = seed {
                    seeds.push(Seed {
                        cell: CellId::from_position(position, columns as u16),
                        value,
                    });
                }
                kinds.push(kind);
            }
        }

        Ok(Self {
            rows: lines.len() as u16,
            columns: columns as u16,
            kinds,
            seeds,
        })
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Row-major cell kinds.
    #[must_use]
    pub fn kinds(&self) -> &[CellKind] {
        &self.kinds
    }

    /// Cells that start with a tile on them.
    #[must_use]
    pub fn seeds(&self) -> &[Seed] {
        &self.seeds
    }

    /// Build an empty board for this layout. Seeds are placed by the game
    /// state, which owns the tiles.
    #[must_use]
    pub fn build(&self) -> Board {
        Board::from_kinds(self.rows, self.columns, self.kinds.clone())
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::standard()
    }
}

fn parse_token(token: &str) -> Option<(CellKind, Option<i32>)> {
    if token == "." {
        return Some((CellKind::Empty, None));
    }
    if let Some(op) = Operator::from_symbol(token) {
        return Some((CellKind::Operator { op }, None));
    }
    match token {
        "2x" => return Some((CellKind::Multiplier { factor: 2 }, None)),
        "3x" => return Some((CellKind::Multiplier { factor: 3 }, None)),
        _ => {}
    }
    if let Some(list) = token.strip_prefix('v') {
        let allowed = list
            .split(',')
            .map(|v| v.parse::<i32>().ok().filter(|v| *v >= 0))
            .collect::<Option<Vec<_>>>()?;
        return Some((CellKind::value(allowed), None));
    }
    let value = token.parse::<i32>().ok().filter(|v| *v >= 0)?;
    Some((CellKind::value([value]), Some(value)))
}

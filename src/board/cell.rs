//! Board cells.
//!
//! A cell is a position plus a `CellKind` tag and, once a tile lands on it,
//! an `Occupant`. The kind carries the square's static constraint:
//!
//! | Kind         | Constraint                                         |
//! |--------------|----------------------------------------------------|
//! | `Empty`      | none                                               |
//! | `Value`      | tile value must be one of `allowed`                |
//! | `Operator`   | equations through the cell must use the operator  |
//! | `Multiplier` | none; the tile's points are multiplied by `factor` |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CellId, Position, TileId};

/// One of the four arithmetic operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// All operators, in the order ties are resolved.
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    /// Apply `lhs op rhs` over non-negative integers.
    ///
    /// Returns `None` when the result is not a valid tile value: negative,
    /// overflowing, a non-exact or by-zero division, or a product with a
    /// zero operand.
    ///
    /// ```
    /// use rust_mathable::board::Operator;
    ///
    /// assert_eq!(Operator::Add.apply(3, 4), Some(7));
    /// assert_eq!(Operator::Sub.apply(3, 4), None);
    /// assert_eq!(Operator::Div.apply(12, 4), Some(3));
    /// assert_eq!(Operator::Div.apply(7, 2), None);
    /// assert_eq!(Operator::Mul.apply(5, 0), None);
    /// ```
    #[must_use]
    pub fn apply(self, lhs: i32, rhs: i32) -> Option<i32> {
        let value = match self {
            Operator::Add => lhs.checked_add(rhs)?,
            Operator::Sub => lhs.checked_sub(rhs)?,
            Operator::Mul => {
                if lhs == 0 || rhs == 0 {
                    return None;
                }
                lhs.checked_mul(rhs)?
            }
            Operator::Div => {
                if rhs == 0 || lhs % rhs != 0 {
                    return None;
                }
                lhs / rhs
            }
        };
        (value >= 0).then_some(value)
    }

    /// Parse the single-character symbol used in layouts.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" | "x" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    /// The layout symbol of this operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Static type of a square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Unrestricted square.
    Empty,
    /// Value square: only the listed values may be placed here.
    Value { allowed: SmallVec<[i32; 4]> },
    /// Restriction square: equations through it must use `op`.
    Operator { op: Operator },
    /// Award square: the tile placed here scores `factor` times its value.
    Multiplier { factor: u8 },
}

impl CellKind {
    /// Value square allowing exactly the given values.
    pub fn value(allowed: impl IntoIterator<Item = i32>) -> Self {
        CellKind::Value {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Values a tile placed here must match. Empty means unrestricted.
    #[must_use]
    pub fn allowed_values(&self) -> &[i32] {
        match self {
            CellKind::Value { allowed } => allowed,
            CellKind::Empty | CellKind::Operator { .. } | CellKind::Multiplier { .. } => &[],
        }
    }

    /// Restriction operator, if this is an operator square.
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        match self {
            CellKind::Operator { op } => Some(*op),
            _ => None,
        }
    }

    /// Score multiplier of this square (1 unless it is an award square).
    #[must_use]
    pub fn multiplier(&self) -> i64 {
        match self {
            CellKind::Multiplier { factor } => i64::from(*factor),
            _ => 1,
        }
    }

    /// Whether `value` satisfies this square's static constraint.
    #[must_use]
    pub fn admits(&self, value: i32) -> bool {
        let allowed = self.allowed_values();
        allowed.is_empty() || allowed.contains(&value)
    }
}

/// The tile sitting on a cell. The value is denormalized from the tile so
/// the equation detector can read the board alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    pub tile: TileId,
    pub value: i32,
}

/// A square of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub position: Position,
    pub kind: CellKind,
    pub occupant: Option<Occupant>,
}

impl Cell {
    /// Create an unoccupied cell.
    #[must_use]
    pub fn new(id: CellId, position: Position, kind: CellKind) -> Self {
        Self {
            id,
            position,
            kind,
            occupant: None,
        }
    }

    /// Whether a tile references this cell.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Value of the tile on this cell.
    #[must_use]
    pub fn value(&self) -> Option<i32> {
        self.occupant.map(|o| o.value)
    }

    /// Id of the tile on this cell.
    #[must_use]
    pub fn tile(&self) -> Option<TileId> {
        self.occupant.map(|o| o.tile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(0, 0), Some(0));
        assert_eq!(Operator::Sub.apply(9, 9), Some(0));
        assert_eq!(Operator::Sub.apply(2, 9), None);
        assert_eq!(Operator::Mul.apply(7, 1), Some(7));
        assert_eq!(Operator::Mul.apply(0, 7), None);
        assert_eq!(Operator::Div.apply(0, 5), Some(0));
        assert_eq!(Operator::Div.apply(5, 0), None);
        assert_eq!(Operator::Add.apply(i32::MAX, 1), None);
        assert_eq!(Operator::Mul.apply(i32::MAX, 2), None);
    }

    #[test]
    fn test_operator_symbols() {
        for op in Operator::ALL {
            let symbol = op.symbol().to_string();
            assert_eq!(Operator::from_symbol(&symbol), Some(op));
        }
        assert_eq!(Operator::from_symbol("x"), Some(Operator::Mul));
        assert_eq!(Operator::from_symbol("%"), None);
    }

    #[test]
    fn test_kind_constraints() {
        assert!(CellKind::Empty.admits(42));
        assert!(CellKind::Multiplier { factor: 3 }.admits(42));
        assert!(CellKind::Operator { op: Operator::Add }.admits(42));

        let value = CellKind::value([1, 4]);
        assert!(value.admits(4));
        assert!(!value.admits(2));
        assert_eq!(value.allowed_values(), &[1, 4]);
    }

    #[test]
    fn test_kind_multiplier() {
        assert_eq!(CellKind::Empty.multiplier(), 1);
        assert_eq!(CellKind::Multiplier { factor: 2 }.multiplier(), 2);
        assert_eq!(CellKind::Multiplier { factor: 3 }.multiplier(), 3);
        assert_eq!(CellKind::Operator { op: Operator::Div }.multiplier(), 1);
    }

    #[test]
    fn test_cell_occupancy() {
        let mut cell = Cell::new(CellId(0), Position::new(0, 0), CellKind::Empty);
        assert!(!cell.is_occupied());
        assert_eq!(cell.value(), None);

        cell.occupant = Some(Occupant { tile: TileId(3), value: 9 });
        assert!(cell.is_occupied());
        assert_eq!(cell.value(), Some(9));
        assert_eq!(cell.tile(), Some(TileId(3)));
    }
}

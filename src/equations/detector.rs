//! Equation detection for a single placement.
//!
//! For each axis the detector walks outward from the target cell while
//! cells are occupied, collecting the maximal run through it. Runs shorter
//! than three cells are incomplete and ignored. Longer runs are checked
//! triple by triple in reading order: `values[i] op values[i + 1]` must
//! equal `values[i + 2]` for some operator.
//!
//! If the target cell is a restriction square, every triple that contains
//! it must resolve with that square's operator.
//!
//! Both axes are checked before anything is returned, so a placement is
//! accepted on both axes or rejected outright.
//!
//! ## Usage
//!
//! ```
//! use rust_mathable::board::{Axis, Board};
//! use rust_mathable::core::{CellId, TileId};
//! use rust_mathable::equations::detect;
//!
//! let mut board = Board::blank(1, 3);
//! board.place(TileId(0), CellId(0), 3).unwrap();
//! board.place(TileId(1), CellId(1), 4).unwrap();
//!
//! let equations = detect(&board, CellId(2), 7).unwrap();
//! assert_eq!(equations.len(), 1);
//! assert_eq!(equations[0].axis, Axis::Horizontal);
//! assert_eq!(equations[0].to_string(), "3 + 4 = 7");
//!
//! assert!(detect(&board, CellId(2), 8).is_err());
//! ```

use smallvec::SmallVec;
use tracing::debug;

use super::equation::{Equation, Step};
use crate::board::{Axis, Board, Operator};
use crate::core::{CellId, PlacementError};

/// Find and validate every equation completed by putting `value` on the
/// empty cell `cell`. The board itself is not modified.
pub fn detect(board: &Board, cell: CellId, value: i32) -> Result<Vec<Equation>, PlacementError> {
    let target = board.cell(cell).ok_or(PlacementError::OffBoard { cell })?;
    let restriction = target.kind.operator();

    let mut equations = Vec::with_capacity(2);
    for axis in Axis::BOTH {
        let (cells, values) = run_through(board, cell, value, axis);
        if cells.len() < 3 {
            continue;
        }
        let placed = cells.iter().position(|&c| c == cell).unwrap_or_default();
        let steps = resolve(cell, axis, &values, placed, restriction)?;
        equations.push(Equation {
            axis,
            cells,
            values,
            steps,
        });
    }

    debug!(%cell, value, equations = equations.len(), "placement checked");
    Ok(equations)
}

type Run = (SmallVec<[CellId; 8]>, SmallVec<[i32; 8]>);

/// The maximal occupied run along `axis` through `cell`, with `value`
/// standing in for the target cell.
fn run_through(board: &Board, cell: CellId, value: i32, axis: Axis) -> Run {
    let mut start = cell;
    while let Some(prev) = board.step(start, axis.backward()) {
        if board.value_at(prev).is_none() {
            break;
        }
        start = prev;
    }

    let mut cells = SmallVec::new();
    let mut values = SmallVec::new();
    let mut current = Some(start);
    while let Some(id) = current {
        let v = if id == cell {
            value
        } else {
            match board.value_at(id) {
                Some(v) => v,
                None => break,
            }
        };
        cells.push(id);
        values.push(v);
        current = board.step(id, axis.forward());
    }
    (cells, values)
}

fn resolve(
    cell: CellId,
    axis: Axis,
    values: &[i32],
    placed: usize,
    restriction: Option<Operator>,
) -> Result<SmallVec<[Step; 6]>, PlacementError> {
    values
        .windows(3)
        .enumerate()
        .map(|(i, triple)| {
            let (lhs, rhs, result) = (triple[0], triple[1], triple[2]);
            let resolves = |op: Operator| op.apply(lhs, rhs) == Some(result);
            let first = Operator::ALL.into_iter().find(|&op| resolves(op));
            let touches_placed = (i..i + 3).contains(&placed);

            let op = match (restriction.filter(|_| touches_placed), first) {
                (Some(expected), _) if resolves(expected) => expected,
                (Some(expected), Some(found)) => {
                    return Err(PlacementError::OperatorMismatch {
                        cell,
                        axis,
                        expected,
                        found,
                    });
                }
                (None, Some(found)) => found,
                (_, None) => {
                    return Err(PlacementError::InvalidEquation {
                        cell,
                        axis,
                        lhs,
                        rhs,
                        result,
                    });
                }
            };
            Ok(Step {
                lhs,
                op,
                rhs,
                result,
            })
        })
        .collect()
}

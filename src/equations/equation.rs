//! Validated equations.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Axis, Operator};
use crate::core::CellId;

/// One `lhs op rhs = result` link of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub lhs: i32,
    pub op: Operator,
    pub rhs: i32,
    pub result: i32,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} = {}", self.lhs, self.op, self.rhs, self.result)
    }
}

/// A run of three or more occupied cells whose consecutive triples all
/// resolve.
///
/// `cells` and `values` are in reading order (left to right, top to
/// bottom); `steps[i]` links `values[i]`, `values[i + 1]` and
/// `values[i + 2]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub axis: Axis,
    pub cells: SmallVec<[CellId; 8]>,
    pub values: SmallVec<[i32; 8]>,
    pub steps: SmallVec<[Step; 6]>,
}

impl Equation {
    /// Number of cells in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.contains(&cell)
    }
}

impl std::fmt::Display for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

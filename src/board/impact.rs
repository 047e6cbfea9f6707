//! Incremental cell dependency graph.
//!
//! A `CellImpact` edge `impacting -> impacted` records that the tile on
//! `impacting` constrains what may later go on `impacted` (or constrained
//! what went there). Edges are appended whenever a tile lands and never
//! removed:
//!
//! - every occupied neighbour of the new tile impacts the new tile's cell
//! - the new tile impacts every empty neighbour
//!
//! Edges therefore always point from an earlier-filled cell to a later or
//! still-empty one, so the graph is acyclic. The empty targets form the
//! frontier: the only cells where a new placement can complete an equation.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{Board, Direction};
use crate::core::CellId;

/// Directed dependency between two adjacent cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellImpact {
    pub impacting: CellId,
    pub impacted: CellId,
    /// Step from `impacting` to `impacted`.
    pub direction: Direction,
}

type EdgeList = SmallVec<[u32; 4]>;

/// Append-only edge set indexed by both endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactGraph {
    edges: Vec<CellImpact>,
    by_impacting: FxHashMap<CellId, EdgeList>,
    by_impacted: FxHashMap<CellId, EdgeList>,
}

impl ImpactGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the edges created by a tile landing on `cell`.
    ///
    /// `board` must already show the tile on `cell`. Returns the number of
    /// new edges.
    pub fn record_placement(&mut self, board: &Board, cell: CellId) -> usize {
        let mut added = 0;
        for (direction, neighbor) in board.neighbors(cell).iter() {
            let occupied = board.cell(neighbor).is_some_and(|c| c.is_occupied());
            let edge = if occupied {
                CellImpact {
                    impacting: neighbor,
                    impacted: cell,
                    direction: direction.opposite(),
                }
            } else {
                CellImpact {
                    impacting: cell,
                    impacted: neighbor,
                    direction,
                }
            };
            if self.insert(edge) {
                added += 1;
            }
        }
        added
    }

    fn insert(&mut self, edge: CellImpact) -> bool {
        if self.impacts(edge.impacting, edge.impacted) {
            return false;
        }
        let index = self.edges.len() as u32;
        self.edges.push(edge);
        self.by_impacting.entry(edge.impacting).or_default().push(index);
        self.by_impacted.entry(edge.impacted).or_default().push(index);
        true
    }

    /// Whether an edge `impacting -> impacted` exists.
    #[must_use]
    pub fn impacts(&self, impacting: CellId, impacted: CellId) -> bool {
        self.impacted_by(impacting).any(|e| e.impacted == impacted)
    }

    /// Edges leaving `cell`.
    pub fn impacted_by(&self, cell: CellId) -> impl Iterator<Item = &CellImpact> {
        self.lookup(&self.by_impacting, cell)
    }

    /// Edges arriving at `cell`.
    pub fn impacting(&self, cell: CellId) -> impl Iterator<Item = &CellImpact> {
        self.lookup(&self.by_impacted, cell)
    }

    /// The edge arriving at `cell` from the given direction, if any.
    #[must_use]
    pub fn impacting_from(&self, cell: CellId, direction: Direction) -> Option<&CellImpact> {
        self.impacting(cell).find(|e| e.direction == direction.opposite())
    }

    fn lookup<'a>(
        &'a self,
        index: &'a FxHashMap<CellId, EdgeList>,
        cell: CellId,
    ) -> impl Iterator<Item = &'a CellImpact> {
        index
            .get(&cell)
            .into_iter()
            .flat_map(|list| list.iter())
            .map(|&i| &self.edges[i as usize])
    }

    /// Empty cells that some tile impacts, in id order.
    #[must_use]
    pub fn frontier(&self, board: &Board) -> Vec<CellId> {
        let mut cells: Vec<CellId> = self
            .by_impacted
            .keys()
            .copied()
            .filter(|&c| board.cell(c).is_some_and(|cell| !cell.is_occupied()))
            .collect::<FxHashSet<_>>()
            .into_iter()
            .collect();
        cells.sort_unstable();
        cells
    }

    /// All edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[CellImpact] {
        &self.edges
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileId;

    fn place(board: &mut Board, graph: &mut ImpactGraph, cell: u32, value: i32) {
        board.place(TileId(cell), CellId(cell), value).unwrap();
        graph.record_placement(board, CellId(cell));
    }

    #[test]
    fn test_first_tile_impacts_empty_neighbors() {
        let mut board = Board::blank(3, 3);
        let mut graph = ImpactGraph::new();

        place(&mut board, &mut graph, 4, 5);

        assert_eq!(graph.len(), 4);
        assert!(graph.impacts(CellId(4), CellId(1)));
        assert!(graph.impacts(CellId(4), CellId(7)));
        assert_eq!(graph.frontier(&board), vec![CellId(1), CellId(3), CellId(5), CellId(7)]);
    }

    #[test]
    fn test_neighbor_tile_impacts_new_cell() {
        let mut board = Board::blank(1, 3);
        let mut graph = ImpactGraph::new();

        place(&mut board, &mut graph, 0, 2);
        place(&mut board, &mut graph, 1, 3);

        // 0 -> 1 from the first placement is not duplicated.
        assert_eq!(graph.len(), 2);
        let edge = graph.impacting_from(CellId(1), Direction::Left).unwrap();
        assert_eq!(edge.impacting, CellId(0));
        assert_eq!(edge.direction, Direction::Right);
        assert!(graph.impacts(CellId(1), CellId(2)));
        assert_eq!(graph.frontier(&board), vec![CellId(2)]);
    }

    #[test]
    fn test_edges_never_point_back() {
        let mut board = Board::blank(3, 3);
        let mut graph = ImpactGraph::new();

        for (cell, value) in [(4, 1), (5, 2), (3, 3), (1, 4), (7, 5)] {
            place(&mut board, &mut graph, cell, value);
        }

        for edge in graph.edges() {
            assert!(!graph.impacts(edge.impacted, edge.impacting));
        }
    }

    #[test]
    fn test_serialization() {
        let mut board = Board::blank(2, 2);
        let mut graph = ImpactGraph::new();
        place(&mut board, &mut graph, 0, 1);

        let bytes = bincode::serialize(&graph).unwrap();
        let restored: ImpactGraph = bincode::deserialize(&bytes).unwrap();
        assert_eq!(graph, restored);
    }
}

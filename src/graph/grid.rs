// src/graph/grid.rs

use std::fmt::{Display, Formatter};
use crate::core::{EulerError, Result};
use crate::graph::dijkstra::{dijkstra, path_cost};
use crate::graph::graph::{DiGraph, GraphOps};

/// Node of a matrix graph: one cell, or one of the synthetic terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GridNode {
    Start,
    Cell(usize, usize),
    End,
}

impl Display for GridNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GridNode::Start => write!(f, "START"),
            GridNode::Cell(r, c) => write!(f, "({}, {})", r, c),
            GridNode::End => write!(f, "END"),
        }
    }
}

/// Matrix encoded as a digraph whose edge weights are the cost of the cell
/// being entered, with the start terminal paying for the first cell.
#[derive(Debug, Clone)]
pub struct GridGraph {
    pub graph: DiGraph<GridNode, i64>,
    pub start: GridNode,
    pub goal: GridNode,
}

impl GridGraph {
    /// Moves right and down only, from the top-left to the bottom-right cell.
    pub fn right_down(matrix: &[Vec<i64>]) -> Result<Self> {
        let (rows, cols) = dimensions(matrix)?;
        let mut graph: DiGraph<GridNode, i64> = DiGraph::new();
        for r in 0..rows {
            for c in 0..cols {
                let u = GridNode::Cell(r, c);
                if c + 1 < cols {
                    graph.add_edge(u, GridNode::Cell(r, c + 1), Some(matrix[r][c + 1]));
                }
                if r + 1 < rows {
                    graph.add_edge(u, GridNode::Cell(r + 1, c), Some(matrix[r + 1][c]));
                }
            }
        }
        graph.add_edge(GridNode::Start, GridNode::Cell(0, 0), Some(matrix[0][0]));
        Ok(GridGraph {
            graph,
            start: GridNode::Start,
            goal: GridNode::Cell(rows - 1, cols - 1),
        })
    }

    /// Moves in all four directions, from the top-left to the bottom-right
    /// cell, with a zero-cost exit into an `End` terminal.
    pub fn four_way(matrix: &[Vec<i64>]) -> Result<Self> {
        let (rows, cols) = dimensions(matrix)?;
        let mut graph: DiGraph<GridNode, i64> = DiGraph::new();
        for r in 0..rows {
            for c in 0..cols {
                let u = GridNode::Cell(r, c);
                if c > 0 {
                    graph.add_edge(u, GridNode::Cell(r, c - 1), Some(matrix[r][c - 1]));
                }
                if c + 1 < cols {
                    graph.add_edge(u, GridNode::Cell(r, c + 1), Some(matrix[r][c + 1]));
                }
                if r + 1 < rows {
                    graph.add_edge(u, GridNode::Cell(r + 1, c), Some(matrix[r + 1][c]));
                }
                if r > 0 {
                    graph.add_edge(u, GridNode::Cell(r - 1, c), Some(matrix[r - 1][c]));
                }
            }
        }
        graph.add_edge(GridNode::Start, GridNode::Cell(0, 0), Some(matrix[0][0]));
        graph.add_edge(GridNode::Cell(rows - 1, cols - 1), GridNode::End, Some(0));
        Ok(GridGraph {
            graph,
            start: GridNode::Start,
            goal: GridNode::End,
        })
    }

    pub fn shortest_path(&self) -> Result<Vec<GridNode>> {
        dijkstra(&self.graph, &self.start, &self.goal)
    }

    /// Cost of the cheapest start-to-goal route, cell values summed.
    pub fn minimal_path_sum(&self) -> Result<i64> {
        let path = self.shortest_path()?;
        path_cost(&self.graph, &path)
    }
}

fn dimensions(matrix: &[Vec<i64>]) -> Result<(usize, usize)> {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, |row| row.len());
    if rows == 0 || cols == 0 {
        return Err(EulerError::invalid_argument("matrix must have at least one cell"));
    }
    if matrix.iter().any(|row| row.len() != cols) {
        return Err(EulerError::invalid_argument("matrix rows must all have the same length"));
    }
    if matrix.iter().flatten().any(|&cell| cell < 0) {
        return Err(EulerError::invalid_argument("matrix cells must be non-negative"));
    }
    Ok((rows, cols))
}

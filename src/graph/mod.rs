// src/graph/mod.rs

pub mod dijkstra;
pub mod graph;
pub mod grid;
pub mod loader;

pub use dijkstra::{dijkstra, path_cost};
pub use graph::{DiGraph, Graph, GraphOps};
pub use grid::{GridGraph, GridNode};

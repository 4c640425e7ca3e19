//! Single-source shortest paths over planar point graphs.
//!
//! A [`Graph`] is loaded from vertex coordinates and undirected index pairs;
//! every edge is weighted by the euclidean distance between its endpoints.
//! [`dijkstra::dijkstra_all`] solves from one source and returns a
//! [`ShortestPaths`] table that reconstructs paths on demand.

use std::str::FromStr;

pub mod astar;
pub mod dijkstra;
pub mod dijkstra_pq;
pub mod error;
pub mod geo;
pub mod graph;
pub mod input;
pub mod shortest_paths;

#[cfg(test)]
mod test_graphs;

pub use error::{Error, Result};
pub use graph::{Graph, Vertex};
pub use shortest_paths::{Path, ShortestPaths};

pub type VertexIndex = usize;
pub type Cost = f64;

/// Frontier used by the solver.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// Binary heap with lazy deletion of stale entries.
    #[default]
    Lazy,
    /// Indexed binary heap with decrease-key.
    DecreaseKey,
    /// Goal-directed search for point-to-point queries. Without a goal it
    /// solves like `Lazy`.
    AStar,
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lazy" | "dijkstra" => Ok(Algorithm::Lazy),
            "decrease-key" => Ok(Algorithm::DecreaseKey),
            "astar" => Ok(Algorithm::AStar),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Algorithm {
    pub fn run(&self, graph: &Graph, source: VertexIndex) -> Result<ShortestPaths> {
        match self {
            Algorithm::Lazy | Algorithm::AStar => dijkstra::dijkstra_all(graph, source),
            Algorithm::DecreaseKey => dijkstra_pq::dijkstra_pq_all(graph, source),
        }
    }

    /// Shortest path between two vertices.
    pub fn path(&self, graph: &Graph, source: VertexIndex, target: VertexIndex) -> Result<Path> {
        match self {
            Algorithm::Lazy => dijkstra::shortest_path(graph, source, target),
            Algorithm::DecreaseKey => {
                graph.check(target)?;
                dijkstra_pq::dijkstra_pq_all(graph, source)?.path_to(target)
            }
            Algorithm::AStar => astar::astar_path(graph, source, target),
        }
    }
}

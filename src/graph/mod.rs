//! Graph containers.
//!
//! - `undirected`: the doubled-adjacency undirected graph and its edge type

pub mod undirected;

pub use undirected::{Edge, EdgeIter, UGraph, UGraphStatistics, VertexIter};

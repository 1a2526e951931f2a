//! # `ugraph` - Undirected Graph Container
//!
//! A generic undirected graph that stores its edges in a doubled, ordered
//! adjacency multimap and walks that structure with a deduplicating iterator.
//!
//! ## Guarantees
//!
//! ### Edge Normalization
//! - **Unordered pairs**: `Edge::new(a, b) == Edge::new(b, a)` for every pair of vertices.
//! - **Canonical endpoints**: the smaller vertex is always reported as `first`,
//!   the larger as `second`; a self-loop normalizes to `(v, v)`.
//!
//! ### Storage Invariants
//! - **Doubled adjacency**: every edge `{s, d}` is stored as two directed entries,
//!   `s -> d` and `d -> s`. A self-loop stores `v -> v` twice.
//! - **Even entry count**: the number of stored entries is always `2 * edge_count()`.
//! - **Closed vertex set**: both endpoints of every stored edge are vertices.
//!
//! ### Traversal
//! - **Deduplicated edges**: [`UGraph::edges`] yields exactly one view per undirected
//!   edge, in ascending key order, including exactly one per self-loop.
//! - **Restartable**: every call starts a fresh traversal; the loop-merging state
//!   lives in the iterator, never in the graph.
//!
//! ## Caller Contract
//!
//! The vertex type must implement a lawful total order (`Ord`). Normalization and
//! the ordered backing structures rely on it; a type whose `Ord` implementation is
//! inconsistent produces unspecified (but memory-safe) results.
//!
//! ## Example
//!
//! ```rust
//! use ugraph::{Edge, UGraph};
//!
//! let mut g = UGraph::new();
//! g.add_edge(1, 2);
//! g.add_edge(3, 1);
//! g.add_edge(5, 5);
//!
//! assert_eq!(g.vertex_count(), 4);
//! assert_eq!(g.edge_count(), 3);
//! assert!(g.contains_edge(&2, &1));
//!
//! let edges: Vec<Edge<i32>> = g.edges().map(|(a, b)| Edge::new(*a, *b)).collect();
//! assert_eq!(edges, vec![Edge::new(1, 2), Edge::new(1, 3), Edge::new(5, 5)]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;

pub use graph::{Edge, EdgeIter, UGraph, UGraphStatistics, VertexIter};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // An edge is exactly its two endpoints.
    assert!(mem::size_of::<Edge<u32>>() == 2 * mem::size_of::<u32>());
    assert!(mem::size_of::<Edge<u64>>() == 2 * mem::size_of::<u64>());
};

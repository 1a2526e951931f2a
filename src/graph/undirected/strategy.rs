//! `proptest` strategies for generating graphs.
//!
//! Available with the `proptest` feature.

use core::fmt::Debug;

use proptest::collection::vec;
use proptest::prelude::*;

use super::UGraph;

/// Generates graphs whose vertices are drawn from `vertex` and whose edge
/// insertion sequence has a length in `0..max_edges`.
///
/// Insertion sequences may repeat edges, mirror them, and contain self-loops.
pub fn ugraph<V, S>(vertex: S, max_edges: usize) -> impl Strategy<Value = UGraph<V>>
where
    V: Ord + Clone + Debug,
    S: Strategy<Value = V> + Clone,
{
    vec((vertex.clone(), vertex), 0..max_edges.max(1))
        .prop_map(|pairs: Vec<(V, V)>| pairs.into_iter().collect::<UGraph<V>>())
}

/// Generates small `u8` graphs with many collisions, loops included.
pub fn small_u8_ugraph() -> impl Strategy<Value = UGraph<u8>> {
    ugraph(0u8..16, 64)
}

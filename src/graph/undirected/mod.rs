//! Undirected graph over a doubled, ordered adjacency multimap.
//!
//! Vertical split:
//! - `edge`: the normalized unordered pair
//! - `iter`: vertex iteration and the deduplicating edge iteration
//! - `stats`: degree statistics
//! - `snapshot`: serde representation
//! - `text`: plain-text edge-list reader/writer
//! - `tests`: module tests

use std::collections::{BTreeMap, BTreeSet};

mod edge;
mod iter;
mod snapshot;
mod stats;
#[cfg(feature = "proptest")]
pub mod strategy;
mod text;

pub use edge::Edge;
pub use iter::{EdgeIter, VertexIter};
pub use stats::UGraphStatistics;

/// An undirected graph whose vertices are caller-chosen ordered values.
///
/// Every edge `{s, d}` is stored twice in the adjacency multimap, as `s -> d`
/// and `d -> s`. Entries sharing a key keep their insertion order, so the two
/// copies of a self-loop are always adjacent. This doubles the storage but lets
/// existence checks and neighbor queries look only at the entries keyed by one
/// endpoint.
///
/// Vertices and edges are only ever added; there is no removal.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(\log n)\) | `BTreeSet` insert |
/// | `add_edge` | \(O(\log n + \deg(s))\) | Existence check first |
/// | `contains_edge` | \(O(\log n + \deg(s))\) | Scans entries keyed by `s` only |
/// | `contains_vertex` | \(O(\log n)\) | |
/// | `vertex_count` / `edge_count` | \(O(1)\) | |
/// | `edges` | \(O(n + m)\) total | Lazy |
///
/// The vertex type must be a lawful total order; this is a caller contract and
/// is not checked at runtime.
#[derive(Debug, Clone)]
pub struct UGraph<V> {
    vertices: BTreeSet<V>,
    /// Doubled adjacency: key -> values in insertion order.
    adjacency: BTreeMap<V, Vec<V>>,
    /// Total number of directed entries across all keys.
    entries: usize,
}

impl<V> Default for UGraph<V> {
    fn default() -> Self {
        Self {
            vertices: BTreeSet::new(),
            adjacency: BTreeMap::new(),
            entries: 0,
        }
    }
}

impl<V: Ord + Clone> UGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph holding the given vertices and no edges.
    pub fn with_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self {
            vertices: vertices.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Adds `v` as a vertex if it is not present yet, and returns it.
    pub fn add_vertex(&mut self, v: V) -> V {
        if !self.vertices.contains(&v) {
            self.vertices.insert(v.clone());
        }
        v
    }

    /// Adds the undirected edge `{s, d}` and returns it normalized.
    ///
    /// If the edge already exists in either orientation the graph is left
    /// untouched. Both endpoints become vertices. Self-loops (`s == d`) are
    /// accepted.
    pub fn add_edge(&mut self, s: V, d: V) -> Edge<V> {
        if self.contains_edge(&s, &d) {
            #[cfg(feature = "tracing")]
            tracing::trace!(edges = self.edge_count(), "edge already present");
            return Edge::new(s, d);
        }

        self.push_entry(s.clone(), d.clone());
        self.push_entry(d.clone(), s.clone());
        self.add_vertex(s.clone());
        self.add_vertex(d.clone());

        #[cfg(feature = "tracing")]
        tracing::trace!(edges = self.edge_count(), self_loop = (s == d), "edge inserted");

        debug_assert!(self.entries % 2 == 0, "directed entry count must be even");
        debug_assert!(
            self.vertices.contains(&s) && self.vertices.contains(&d),
            "edge endpoints must be vertices"
        );

        Edge::new(s, d)
    }

    fn push_entry(&mut self, from: V, to: V) {
        self.adjacency.entry(from).or_default().push(to);
        self.entries += 1;
    }
}

impl<V: Ord> UGraph<V> {
    /// Returns `true` if the entry `s -> d` is stored.
    ///
    /// Since every edge is stored in both directions, `contains_edge(s, d)`
    /// always equals `contains_edge(d, s)`. Only the entries keyed by `s` are
    /// scanned.
    pub fn contains_edge(&self, s: &V, d: &V) -> bool {
        self.neighbors(s).any(|v| v == d)
    }

    /// Returns `true` if `v` is a vertex of this graph.
    #[inline]
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.vertices.contains(v)
    }

    /// Returns the neighbors stored under `v`, in insertion order.
    ///
    /// A self-loop lists `v` twice, matching its contribution to the degree.
    /// Unknown vertices have no neighbors.
    pub fn neighbors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.adjacency.get(v).into_iter().flatten()
    }

    /// Returns the degree of `v`; a self-loop contributes two.
    pub fn degree(&self, v: &V) -> usize {
        self.adjacency.get(v).map_or(0, Vec::len)
    }

    /// Returns the vertices in ascending order.
    #[inline]
    pub fn vertices(&self) -> VertexIter<'_, V> {
        VertexIter::new(self.vertices.iter())
    }

    /// Returns one `(first, second)` view per undirected edge, in ascending key order.
    ///
    /// Each call starts a fresh traversal. See [`EdgeIter`] for the exact order.
    #[inline]
    pub fn edges(&self) -> EdgeIter<'_, V> {
        EdgeIter::new(&self.adjacency, self.entries)
    }
}

impl<V> UGraph<V> {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.entries / 2
    }

    /// Returns the number of stored directed entries (always `2 * edge_count()`).
    #[inline]
    pub fn directed_entry_count(&self) -> usize {
        self.entries
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl<V: Ord + Clone> UGraph<V> {
    /// Collects every edge, in [`edges`](Self::edges) order.
    pub fn edge_list(&self) -> Vec<Edge<V>> {
        self.edges()
            .map(|(s, d)| Edge::new(s.clone(), d.clone()))
            .collect()
    }
}

impl<V: Ord> PartialEq for UGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
            && self.entries == other.entries
            && self.edges().all(|(s, d)| other.contains_edge(s, d))
    }
}

impl<V: Ord> Eq for UGraph<V> {}

impl<V: Ord + Clone> FromIterator<(V, V)> for UGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend(iter);
        graph
    }
}

impl<V: Ord + Clone> Extend<(V, V)> for UGraph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, iter: I) {
        for (s, d) in iter {
            self.add_edge(s, d);
        }
    }
}

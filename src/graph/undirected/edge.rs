use core::fmt;

use serde::{Deserialize, Serialize};

/// An undirected edge: an unordered pair of vertices.
///
/// Endpoints are normalized at construction, so the smaller vertex is always
/// `first` and the larger is always `second`. Equality, ordering and hashing
/// all operate on the normalized pair, which makes `Edge::new(a, b)` and
/// `Edge::new(b, a)` indistinguishable.
///
/// Serializes as a 2-tuple `[first, second]`; deserialization normalizes again,
/// so `[2, 1]` reads back as `Edge::new(1, 2)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(
    from = "(V, V)",
    into = "(V, V)",
    bound(serialize = "V: Serialize + Clone", deserialize = "V: Deserialize<'de> + Ord")
)]
pub struct Edge<V> {
    first: V,
    second: V,
}

impl<V: Ord> Edge<V> {
    /// Creates the normalized edge `{s, d}`.
    pub fn new(s: V, d: V) -> Self {
        if s <= d {
            Self { first: s, second: d }
        } else {
            Self { first: d, second: s }
        }
    }

    /// Returns `true` if both endpoints are the same vertex.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.first == self.second
    }

    /// Returns `true` if `v` is one of the endpoints.
    #[inline]
    pub fn contains(&self, v: &V) -> bool {
        self.first == *v || self.second == *v
    }

    /// Returns the endpoint opposite to `v`, or `None` if `v` is not an endpoint.
    ///
    /// For a self-loop the opposite endpoint is the vertex itself.
    pub fn other(&self, v: &V) -> Option<&V> {
        if self.first == *v {
            Some(&self.second)
        } else if self.second == *v {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl<V> Edge<V> {
    /// The smaller endpoint.
    #[inline]
    pub fn first(&self) -> &V {
        &self.first
    }

    /// The larger endpoint.
    #[inline]
    pub fn second(&self) -> &V {
        &self.second
    }

    /// Consumes the edge, returning `(first, second)`.
    #[inline]
    pub fn into_inner(self) -> (V, V) {
        (self.first, self.second)
    }
}

impl<V: Ord> From<(V, V)> for Edge<V> {
    fn from((s, d): (V, V)) -> Self {
        Self::new(s, d)
    }
}

impl<'a, V: Ord + Clone> From<(&'a V, &'a V)> for Edge<V> {
    fn from((s, d): (&'a V, &'a V)) -> Self {
        Self::new(s.clone(), d.clone())
    }
}

impl<V> From<Edge<V>> for (V, V) {
    fn from(edge: Edge<V>) -> Self {
        edge.into_inner()
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.first, self.second)
    }
}

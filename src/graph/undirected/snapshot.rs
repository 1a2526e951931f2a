//! Serde representation of a graph.
//!
//! A graph serializes as `{ "vertices": [...], "edges": [[s, d], ...] }`, with
//! each edge listed once in traversal order. Deserialization replays the lists
//! through `add_vertex`/`add_edge`, so duplicated or mirrored edges in the input
//! collapse and the doubled storage stays consistent.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::UGraph;

#[derive(Serialize)]
struct SnapshotRef<'a, V> {
    vertices: Vec<&'a V>,
    edges: Vec<(&'a V, &'a V)>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Snapshot<V> {
    #[serde(default = "Vec::new")]
    vertices: Vec<V>,
    #[serde(default = "Vec::new")]
    edges: Vec<(V, V)>,
}

impl<V: Ord + Serialize> Serialize for UGraph<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SnapshotRef {
            vertices: self.vertices().collect(),
            edges: self.edges().collect(),
        }
        .serialize(serializer)
    }
}

impl<'de, V> Deserialize<'de> for UGraph<V>
where
    V: Ord + Clone + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = Snapshot::<V>::deserialize(deserializer)?;
        let mut graph = UGraph::with_vertices(snapshot.vertices);
        graph.extend(snapshot.edges);
        Ok(graph)
    }
}

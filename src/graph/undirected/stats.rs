use super::UGraph;

/// Statistics about an undirected graph.
#[derive(Debug, Clone, PartialEq)]
pub struct UGraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of undirected edges, self-loops included.
    pub edge_count: usize,
    /// Number of self-loops.
    pub self_loop_count: usize,
    /// Number of vertices with degree zero.
    pub isolated_vertex_count: usize,
    /// Minimum degree over all vertices.
    pub min_degree: usize,
    /// Maximum degree over all vertices.
    pub max_degree: usize,
    /// Average degree \(= 2m/n\).
    pub average_degree: f64,
}

impl<V: Ord> UGraph<V> {
    /// Computes basic graph statistics. A self-loop adds two to its vertex's degree.
    #[allow(clippy::cast_precision_loss)]
    pub fn statistics(&self) -> UGraphStatistics {
        let vertex_count = self.vertex_count();
        let edge_count = self.edge_count();

        let degrees = self.vertices().map(|v| self.degree(v));
        let (min_degree, max_degree, isolated_vertex_count) = degrees.fold(
            (usize::MAX, 0usize, 0usize),
            |(lo, hi, isolated), d| (lo.min(d), hi.max(d), isolated + usize::from(d == 0)),
        );
        let min_degree = if vertex_count == 0 { 0 } else { min_degree };

        let self_loop_count = self.edges().filter(|(s, d)| s == d).count();

        UGraphStatistics {
            vertex_count,
            edge_count,
            self_loop_count,
            isolated_vertex_count,
            min_degree,
            max_degree,
            average_degree: if vertex_count == 0 {
                0.0
            } else {
                (2 * edge_count) as f64 / vertex_count as f64
            },
        }
    }
}

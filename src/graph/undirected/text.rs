//! Plain-text edge lists.
//!
//! One record per line:
//! - `s d` declares the edge `{s, d}`
//! - `v` declares a (possibly isolated) vertex
//! - blank lines and everything after `#` are ignored

use core::fmt::{self, Write as _};
use core::str::FromStr;

use anyhow::{bail, Context, Result};

use super::UGraph;

impl<V> UGraph<V>
where
    V: Ord + Clone + FromStr,
    V::Err: std::error::Error + Send + Sync + 'static,
{
    /// Parses a graph from an edge list.
    ///
    /// # Errors
    /// Returns an error naming the line if a token does not parse as a vertex
    /// or a record holds more than two tokens.
    pub fn from_edge_list(text: &str) -> Result<Self> {
        let mut graph = Self::new();

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let record = raw.split('#').next().unwrap_or_default();
            let tokens: Vec<&str> = record.split_whitespace().collect();

            match tokens.as_slice() {
                [] => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(line = line_no, "skipping empty record");
                }
                [v] => {
                    let v = parse_vertex::<V>(v, line_no)?;
                    graph.add_vertex(v);
                }
                [s, d] => {
                    let s = parse_vertex::<V>(s, line_no)?;
                    let d = parse_vertex::<V>(d, line_no)?;
                    graph.add_edge(s, d);
                }
                _ => bail!(
                    "line {line_no}: expected `vertex` or `vertex vertex`, found {} tokens",
                    tokens.len()
                ),
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "edge list loaded"
        );

        Ok(graph)
    }
}

fn parse_vertex<V>(token: &str, line_no: usize) -> Result<V>
where
    V: FromStr,
    V::Err: std::error::Error + Send + Sync + 'static,
{
    token
        .parse::<V>()
        .with_context(|| format!("line {line_no}: invalid vertex `{token}`"))
}

impl<V: Ord + fmt::Display> UGraph<V> {
    /// Writes the graph as an edge list that [`from_edge_list`](Self::from_edge_list)
    /// reads back to an equal graph, provided `V`'s `FromStr` inverts its `Display`.
    ///
    /// Isolated vertices come first, one per line, followed by every edge in
    /// [`edges`](Self::edges) order.
    ///
    /// # Errors
    /// Returns an error if a vertex renders as an empty string or its rendering
    /// contains whitespace or `#`; such a record would not read back as the
    /// same vertex.
    pub fn to_edge_list(&self) -> Result<String> {
        let mut out = String::new();
        for v in self.vertices().filter(|v| self.degree(v) == 0) {
            writeln!(out, "{}", render_vertex(v)?)?;
        }
        for (s, d) in self.edges() {
            writeln!(out, "{} {}", render_vertex(s)?, render_vertex(d)?)?;
        }
        Ok(out)
    }
}

fn render_vertex<V: fmt::Display>(v: &V) -> Result<String> {
    let token = v.to_string();
    if token.is_empty() {
        bail!("vertex renders as an empty token");
    }
    if token.chars().any(|c| c.is_whitespace() || c == '#') {
        bail!("vertex `{token}` contains whitespace or `#`");
    }
    Ok(token)
}

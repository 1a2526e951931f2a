use std::collections::BTreeSet;

use ugraph::{Edge, UGraph};

type IntGraph = UGraph<i32>;

#[test]
fn empty_graph_properties() {
    let g = IntGraph::new();
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert_eq!(g.edges().count(), 0);
}

#[test]
fn add_edges_grow_counts() {
    let mut g = IntGraph::new();
    assert!(!g.contains_vertex(&1));
    assert!(!g.contains_vertex(&3));

    g.add_edge(1, 2);
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.edge_count(), 1);
    assert!(g.contains_vertex(&1));
    assert!(!g.contains_vertex(&3));

    g.add_edge(1, 3);
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 2);
    assert!(g.contains_vertex(&1));
    assert!(g.contains_vertex(&3));
}

#[test]
fn self_loop_yields_single_edge() {
    let mut g = IntGraph::new();
    g.add_edge(5, 5);
    assert_eq!(g.edge_count(), 1);

    let edges: Vec<_> = g.edges().collect();
    assert_eq!(edges, vec![(&5, &5)]);
}

#[test]
fn reversed_duplicate_is_ignored() {
    let mut g = IntGraph::new();
    g.add_edge(1, 2);
    g.add_edge(2, 1);
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn edge_equality_is_unordered() {
    let e1 = Edge::new(1, 2);
    let e2 = Edge::new(1, 2);
    let e3 = Edge::new(2, 1);
    assert_eq!(e1, e2);
    assert_eq!(e1, e3);
    assert_eq!(*e3.first(), 1);
    assert_eq!(*e3.second(), 2);
}

#[test]
fn mixed_graph_enumerates_every_edge_once() {
    let inserted = [(4, 2), (2, 2), (0, 4), (4, 4), (3, 1), (1, 3), (2, 0), (6, 6), (2, 4)];
    let g: IntGraph = inserted.into_iter().collect();

    let expected: BTreeSet<Edge<i32>> = inserted.iter().map(|&(s, d)| Edge::new(s, d)).collect();
    let produced: Vec<Edge<i32>> = g.edge_list();
    let unique: BTreeSet<Edge<i32>> = produced.iter().copied().collect();

    assert_eq!(produced.len(), g.edge_count());
    assert_eq!(unique.len(), produced.len());
    assert_eq!(unique, expected);

    for (s, d) in g.edges() {
        assert!(s <= d);
        assert!(g.contains_vertex(s));
        assert!(g.contains_vertex(d));
    }
    assert_eq!(g.directed_entry_count(), 2 * g.edge_count());
}

#[test]
fn string_vertices_are_supported() {
    let mut g: UGraph<String> = UGraph::new();
    g.add_edge("b".to_owned(), "a".to_owned());
    g.add_edge("c".to_owned(), "c".to_owned());

    assert!(g.contains_edge(&"a".to_owned(), &"b".to_owned()));
    assert_eq!(
        g.edge_list(),
        vec![
            Edge::new("a".to_owned(), "b".to_owned()),
            Edge::new("c".to_owned(), "c".to_owned()),
        ]
    );
}

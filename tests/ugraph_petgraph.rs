use petgraph::graphmap::UnGraphMap;
use proptest::prelude::*;
use ugraph::{Edge, UGraph};

proptest! {
    #[test]
    fn counts_match_petgraph_graphmap(pairs in proptest::collection::vec((0u16..32, 0u16..32), 0..96)) {
        let mut reference = UnGraphMap::<u16, ()>::new();
        for &(s, d) in &pairs {
            reference.add_edge(s, d, ());
        }
        let g: UGraph<u16> = pairs.into_iter().collect();

        prop_assert_eq!(g.vertex_count(), reference.node_count());
        prop_assert_eq!(g.edge_count(), reference.edge_count());

        let mut expected: Vec<Edge<u16>> = reference.all_edges().map(|(s, d, _)| Edge::new(s, d)).collect();
        expected.sort();
        let mut produced = g.edge_list();
        produced.sort();
        prop_assert_eq!(produced, expected);

        for (s, d, _) in reference.all_edges() {
            prop_assert!(g.contains_edge(&s, &d));
            prop_assert!(g.contains_edge(&d, &s));
        }
    }
}

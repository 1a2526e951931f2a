use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ugraph::UGraph;

fn build_graph(vertices: u32, fanout: u32) -> UGraph<u32> {
    let mut g = UGraph::new();
    for i in 0..vertices {
        for j in 0..fanout {
            g.add_edge(i, (i + j * 7) % vertices);
        }
    }
    g
}

fn bench_ugraph_build(c: &mut Criterion) {
    c.bench_function("ugraph_build_1000x16", |b| {
        b.iter(|| black_box(build_graph(1000, 16)));
    });
}

fn bench_ugraph_queries(c: &mut Criterion) {
    let g = build_graph(1000, 16);

    c.bench_function("ugraph_contains_edge", |b| {
        b.iter(|| {
            for i in 0..100u32 {
                black_box(g.contains_edge(&i, &((i + 21) % 1000)));
            }
        });
    });

    // Degree-skewed: a hub touching every vertex.
    let mut hub = build_graph(1000, 4);
    for v in 0..1000u32 {
        hub.add_edge(0, v);
    }
    c.bench_function("ugraph_contains_edge_skewed", |b| {
        b.iter(|| {
            for i in 1..100u32 {
                black_box(hub.contains_edge(&i, &0));
            }
        });
    });
}

fn bench_ugraph_edges(c: &mut Criterion) {
    let g = build_graph(1000, 16);

    c.bench_function("ugraph_edges_traversal", |b| {
        b.iter(|| black_box(g.edges().count()));
    });

    c.bench_function("ugraph_vertices_traversal", |b| {
        b.iter(|| black_box(g.vertices().count()));
    });
}

criterion_group!(benches, bench_ugraph_build, bench_ugraph_queries, bench_ugraph_edges);
criterion_main!(benches);

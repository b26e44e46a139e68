use super::*;

/// Path a-b-c-d with unit weights, plus a long chord a-d.
fn path_with_chord() -> Graph {
    let mut g = Graph::new();
    for (k, x) in [0.0, 1.0, 2.0, 3.0].into_iter().enumerate() {
        g.add_vertex(VertexId(10 + k as u64), x, 0.0).unwrap();
    }
    g.add_edge(0, 1, 1.0).unwrap();
    g.add_edge(1, 2, 1.0).unwrap();
    g.add_edge(2, 3, 1.0).unwrap();
    g.add_edge(0, 3, 10.0).unwrap();
    g
}

#[test]
fn ids_resolve_to_indices() {
    let g = path_with_chord();
    assert_eq!(g.find(VertexId(12)), Some(2));
    assert_eq!(g.find(VertexId(99)), None);
    assert_eq!(
        g.resolve(VertexId(99)),
        Err(crate::Error::UnknownVertex(VertexId(99)))
    );
}

#[test]
fn rejects_duplicate_ids_and_bad_edges() {
    let mut g = path_with_chord();
    assert!(g.add_vertex(VertexId(10), 5.0, 5.0).is_err());
    assert!(g.add_edge(0, 0, 1.0).is_err());
    assert!(g.add_edge(0, 7, 1.0).is_err());
    assert!(g.add_edge(0, 2, -1.0).is_err());
    assert!(g.add_edge(0, 2, f64::NAN).is_err());
    assert_eq!(g.ecount(), 4);
}

#[test]
fn dijkstra_prefers_short_detour() {
    let g = path_with_chord();
    assert!((g.distance(0, 3) - 3.0).abs() < 1e-12);
    assert_eq!(g.shortest_path(0, 3), Some(vec![0, 1, 2, 3]));
    assert_eq!(g.shortest_path(2, 2), Some(vec![2]));
}

#[test]
fn unreachable_is_signalled() {
    let mut g = path_with_chord();
    let lone = g.add_vertex(VertexId(50), 9.0, 9.0).unwrap();
    assert!(g.distance(0, lone).is_infinite());
    assert_eq!(g.shortest_path(0, lone), None);
}

#[test]
fn shortest_path_tie_break_is_stable() {
    // Square with two equal routes 0-1-3 and 0-2-3.
    let mut g = Graph::new();
    for k in 0..4u64 {
        g.add_vertex(VertexId(k), k as f64, 0.0).unwrap();
    }
    g.add_edge(0, 2, 1.0).unwrap();
    g.add_edge(0, 1, 1.0).unwrap();
    g.add_edge(2, 3, 1.0).unwrap();
    g.add_edge(1, 3, 1.0).unwrap();
    let p = g.shortest_path(0, 3).unwrap();
    for _ in 0..5 {
        assert_eq!(g.shortest_path(0, 3).unwrap(), p);
    }
    // Vertex 1 is popped before vertex 2 at equal distance.
    assert_eq!(p, vec![0, 1, 3]);
}

#[test]
fn induced_subgraph_keeps_internal_edges() {
    let g = path_with_chord();
    let sub = g.induced_subgraph([3, 0, 1, 1]);
    assert_eq!(sub.vcount(), 3);
    // Edges 0-1 and 0-3 survive; 1-2 and 2-3 lose an endpoint.
    assert_eq!(sub.ecount(), 2);
    assert_eq!(sub.find(VertexId(13)), Some(2));
    let e = sub.edge_between(0, 2).unwrap();
    assert!((sub.edge(e).weight - 10.0).abs() < 1e-12);
}

#[test]
fn subgraph_edges_keeps_all_vertices() {
    let g = path_with_chord();
    let sub = g.subgraph_edges(&[true, false, false, true]);
    assert_eq!(sub.vcount(), 4);
    assert_eq!(sub.ecount(), 2);
    assert!(sub.edge_between(0, 3).is_some());
    assert!(sub.edge_between(1, 2).is_none());
    assert_eq!(g.without_edges().ecount(), 0);
    assert_eq!(g.without_edges().vcount(), 4);
}

#[test]
fn betweenness_on_a_path() {
    // 0 - 1 - 2 : each edge lies on two of the three pairs.
    let mut g = Graph::new();
    for k in 0..3u64 {
        g.add_vertex(VertexId(k), k as f64, 0.0).unwrap();
    }
    g.add_edge(0, 1, 1.0).unwrap();
    g.add_edge(1, 2, 1.0).unwrap();
    let eb = edge_betweenness(&g);
    assert_eq!(eb.len(), 2);
    assert!((eb[0] - 2.0).abs() < 1e-12);
    assert!((eb[1] - 2.0).abs() < 1e-12);
}

#[test]
fn betweenness_splits_equal_paths() {
    // 4-cycle with unit weights: the opposite pairs have two shortest paths.
    let mut g = Graph::new();
    for k in 0..4u64 {
        g.add_vertex(VertexId(k), k as f64, 0.0).unwrap();
    }
    g.add_edge(0, 1, 1.0).unwrap();
    g.add_edge(1, 2, 1.0).unwrap();
    g.add_edge(2, 3, 1.0).unwrap();
    g.add_edge(3, 0, 1.0).unwrap();
    let eb = edge_betweenness(&g);
    // Each edge: 1 (its own pair) + 2 * 0.5 (two opposite pairs routed half through it).
    for b in eb {
        assert!((b - 2.0).abs() < 1e-12, "got {b}");
    }
}

#[test]
fn betweenness_ignores_the_long_chord() {
    let g = path_with_chord();
    let eb = edge_betweenness(&g);
    assert!(eb[3].abs() < 1e-12);
    // Middle edge carries pairs (0,2),(0,3),(1,2),(1,3).
    assert!((eb[1] - 4.0).abs() < 1e-12);
}

fn triangle(weights: [f64; 3]) -> Graph {
    let mut g = Graph::new();
    for (k, (x, y)) in [(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)].into_iter().enumerate() {
        g.add_vertex(VertexId(k as u64), x, y).unwrap();
    }
    for ((a, b), w) in [(0, 1), (0, 2), (1, 2)].into_iter().zip(weights) {
        g.add_edge(a, b, w).unwrap();
    }
    g
}

#[test]
fn betweenness_with_a_zero_weight_edge_is_label_independent() {
    // Equal-length detours over the zero-weight edge do not count as shortest.
    for weights in [[1.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 0.0, 1.0]] {
        let eb = edge_betweenness(&triangle(weights));
        for b in &eb {
            assert!((b - 1.0).abs() < 1e-12, "{weights:?} -> {eb:?}");
        }
    }
}

#[test]
fn closeness_of_path_and_isolated_vertex() {
    let mut g = Graph::new();
    for k in 0..4u64 {
        g.add_vertex(VertexId(k), k as f64, 0.0).unwrap();
    }
    g.add_edge(0, 1, 1.0).unwrap();
    g.add_edge(1, 2, 1.0).unwrap();
    let c = closeness(&g);
    assert!((c[0] - 2.0 / 3.0).abs() < 1e-12);
    assert!((c[1] - 1.0).abs() < 1e-12);
    assert_eq!(c[3], 0.0);
}

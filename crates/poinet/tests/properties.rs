use std::collections::{BTreeSet, HashSet};

use poinet::api::{
    greedy_triangulation, poi_pairs_by_distance, poi_skeleton, prune, route, route_pairs,
    segments_cross, Graph, PruneCfg, PruneMeasure, VertexId,
};
use proptest::prelude::*;

/// Complete graph on lattice points with Euclidean weights; ids follow input order.
fn complete(points: &[(i32, i32)]) -> Graph {
    let mut g = Graph::new();
    for (k, &(x, y)) in points.iter().enumerate() {
        g.add_vertex(VertexId(k as u64), x as f64, y as f64).unwrap();
    }
    for a in 0..points.len() {
        for b in a + 1..points.len() {
            let d = (g.vertex(a).pos - g.vertex(b).pos).norm();
            g.add_edge(a, b, d).unwrap();
        }
    }
    g
}

fn all_ids(g: &Graph) -> Vec<VertexId> {
    g.ids().collect()
}

fn triangulated(g: &Graph) -> (Graph, Vec<usize>) {
    let pois = all_ids(g);
    let pairs = poi_pairs_by_distance(g, &pois).unwrap();
    let mut tri = poi_skeleton(g, &pois).unwrap();
    let pass = greedy_triangulation(&mut tri, &pairs).unwrap();
    (tri, pass.added)
}

fn edge_set(g: &Graph) -> BTreeSet<(VertexId, VertexId)> {
    g.edges()
        .iter()
        .map(|e| {
            let (a, b) = (g.vertex(e.source).id, g.vertex(e.target).id);
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        })
        .collect()
}

fn points() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::hash_set((0i32..24, 0i32..24), 3..14)
        .prop_map(|set: HashSet<(i32, i32)>| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 48, .. ProptestConfig::default() })]

    #[test]
    fn triangulation_has_no_crossings(pts in points()) {
        let (tri, added) = triangulated(&complete(&pts));
        prop_assert_eq!(added.len(), tri.ecount());
        for e in 0..tri.ecount() {
            for f in e + 1..tri.ecount() {
                let (a, b) = tri.segment(e);
                let (c, d) = tri.segment(f);
                prop_assert!(!segments_cross(a, b, c, d), "edges {} and {} cross", e, f);
            }
        }
    }

    #[test]
    fn betweenness_pruning_is_monotone(pts in points(), q1 in 0.0f64..=1.0, q2 in 0.0f64..=1.0) {
        let (lo, hi) = if q1 <= q2 { (q1, q2) } else { (q2, q1) };
        let (tri, added) = triangulated(&complete(&pts));
        let cfg = PruneCfg::default();
        let small = prune(&tri, lo, PruneMeasure::Betweenness, &added, cfg).unwrap();
        let large = prune(&tri, hi, PruneMeasure::Betweenness, &added, cfg).unwrap();
        prop_assert!(edge_set(&small).is_subset(&edge_set(&large)));
        prop_assert!(small.ecount() >= 1);
    }

    #[test]
    fn random_pruning_replays_by_seed(pts in points(), q in 0.0f64..=1.0, seed in any::<u64>()) {
        let (tri, added) = triangulated(&complete(&pts));
        let cfg = PruneCfg { seed };
        let x = prune(&tri, q, PruneMeasure::Random, &added, cfg).unwrap();
        let y = prune(&tri, q, PruneMeasure::Random, &added, cfg).unwrap();
        prop_assert_eq!(edge_set(&x), edge_set(&y));
        prop_assert_eq!(x.vcount(), tri.vcount());
    }

    #[test]
    fn routing_keeps_every_poi(pts in points(), q in 0.0f64..=1.0) {
        let g = complete(&pts);
        let (tri, added) = triangulated(&g);
        let pruned = prune(&tri, q, PruneMeasure::Closeness, &added, PruneCfg::default()).unwrap();
        let pois = all_ids(&g);
        let routed = route(&g, &route_pairs(&pruned), &pois).unwrap();
        prop_assert!(routed.unreachable.is_empty());
        for id in pois {
            prop_assert!(routed.graph.find(id).is_some());
        }
    }
}

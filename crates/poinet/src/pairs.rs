//! Unordered POI pairs sorted by routing distance.
//!
//! The result is a pure function of the POI subset: calling it on a growing
//! pool yields orderings that agree on every pair the pools share.

use std::collections::HashSet;

use crate::error::Result;
use crate::graph::{Graph, VertexId};

/// Unordered POI pair with its shortest-path distance in the routing graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoiPair {
    pub a: VertexId,
    pub b: VertexId,
    /// `INFINITY` when the two POIs are disconnected.
    pub distance: f64,
}

impl PoiPair {
    #[inline]
    pub fn ids(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }
}

/// First occurrence of each id, in input order.
pub(crate) fn dedup_ids(ids: &[VertexId]) -> Vec<VertexId> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// All unordered pairs of `pois`, ascending by shortest-path distance in `graph`.
///
/// - Duplicate ids are collapsed; fewer than two POIs give an empty list.
/// - Equal distances keep enumeration order (pairs `(pois[i], pois[j])`, `i < j`,
///   row-major), so the order is reproducible but depends on the input order.
/// - Disconnected pairs carry `INFINITY` and sort last.
pub fn poi_pairs_by_distance(graph: &Graph, pois: &[VertexId]) -> Result<Vec<PoiPair>> {
    let pois = dedup_ids(pois);
    let idx = pois
        .iter()
        .map(|&id| graph.resolve(id))
        .collect::<Result<Vec<usize>>>()?;
    if pois.len() < 2 {
        return Ok(Vec::new());
    }
    let mut pairs = Vec::with_capacity(pois.len() * (pois.len() - 1) / 2);
    for i in 0..pois.len() - 1 {
        let dist = graph.distances_from(idx[i]);
        for j in i + 1..pois.len() {
            pairs.push(PoiPair {
                a: pois[i],
                b: pois[j],
                distance: dist[idx[j]],
            });
        }
    }
    pairs.sort_by(|p, q| p.distance.total_cmp(&q.distance));
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: u64) -> Graph {
        let mut g = Graph::new();
        for k in 0..n {
            g.add_vertex(VertexId(k), k as f64, 0.0).unwrap();
        }
        for k in 1..n as usize {
            g.add_edge(k - 1, k, k as f64).unwrap();
        }
        g
    }

    #[test]
    fn sorted_by_routing_distance() {
        let g = line(4); // weights 1, 2, 3
        let pairs = poi_pairs_by_distance(&g, &[VertexId(0), VertexId(2), VertexId(3)]).unwrap();
        let got: Vec<_> = pairs.iter().map(|p| (p.ids(), p.distance)).collect();
        // Ties keep enumeration order: (0,2) precedes (2,3).
        assert_eq!(
            got,
            vec![
                ((VertexId(0), VertexId(2)), 3.0),
                ((VertexId(2), VertexId(3)), 3.0),
                ((VertexId(0), VertexId(3)), 6.0),
            ]
        );
    }

    #[test]
    fn fewer_than_two_pois_is_empty() {
        let g = line(3);
        assert!(poi_pairs_by_distance(&g, &[]).unwrap().is_empty());
        assert!(poi_pairs_by_distance(&g, &[VertexId(1)]).unwrap().is_empty());
        assert!(poi_pairs_by_distance(&g, &[VertexId(1), VertexId(1)])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn unknown_poi_is_an_error() {
        let g = line(3);
        assert_eq!(
            poi_pairs_by_distance(&g, &[VertexId(0), VertexId(42)]),
            Err(crate::Error::UnknownVertex(VertexId(42)))
        );
    }

    #[test]
    fn disconnected_pairs_sort_last() {
        let mut g = line(3);
        g.add_vertex(VertexId(9), 9.0, 9.0).unwrap();
        let pairs = poi_pairs_by_distance(&g, &[VertexId(9), VertexId(0), VertexId(1)]).unwrap();
        assert_eq!(pairs.len(), 3);
        assert!(pairs[0].is_reachable());
        assert!(!pairs[1].is_reachable());
        assert!(!pairs[2].is_reachable());
    }

    #[test]
    fn subset_order_agrees_with_superset() {
        let g = line(6);
        let small = poi_pairs_by_distance(&g, &[VertexId(0), VertexId(2), VertexId(5)]).unwrap();
        let big = poi_pairs_by_distance(
            &g,
            &[VertexId(0), VertexId(2), VertexId(5), VertexId(3)],
        )
        .unwrap();
        let filtered: Vec<_> = big
            .into_iter()
            .filter(|p| p.a != VertexId(3) && p.b != VertexId(3))
            .collect();
        assert_eq!(small, filtered);
    }
}

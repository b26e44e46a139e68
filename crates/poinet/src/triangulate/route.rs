//! Routing abstract edges through the full graph.

use std::collections::{BTreeSet, HashSet};

use tracing::warn;

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::pairs::PoiPair;

/// Routed subgraph plus the pairs that could not be routed.
#[derive(Clone, Debug)]
pub struct Routed {
    pub graph: Graph,
    pub unreachable: Vec<(VertexId, VertexId)>,
}

/// Abstract edges as id pairs with their weights, ascending by weight.
///
/// Parallel edges between the same two ids are reported once.
pub fn route_pairs(abstract_graph: &Graph) -> Vec<PoiPair> {
    let mut seen = HashSet::new();
    let mut pairs: Vec<PoiPair> = abstract_graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let a = abstract_graph.vertex(edge.source).id;
            let b = abstract_graph.vertex(edge.target).id;
            let key = if a <= b { (a, b) } else { (b, a) };
            seen.insert(key).then_some(PoiPair {
                a,
                b,
                distance: edge.weight,
            })
        })
        .collect();
    pairs.sort_by(|p, q| p.distance.total_cmp(&q.distance));
    pairs
}

/// Induced subgraph of `full` over every vertex on one shortest path per pair,
/// plus all `pois`.
///
/// Disconnected pairs are collected in `unreachable` and otherwise skipped.
/// Unknown ids are an error.
pub fn route(full: &Graph, pairs: &[PoiPair], pois: &[VertexId]) -> Result<Routed> {
    let mut keep: BTreeSet<usize> = pois
        .iter()
        .map(|&id| full.resolve(id))
        .collect::<Result<_>>()?;
    let mut unreachable = Vec::new();
    for pair in pairs {
        let v = full.resolve(pair.a)?;
        let w = full.resolve(pair.b)?;
        match full.shortest_path(v, w) {
            Some(path) => keep.extend(path),
            None => {
                warn!(a = pair.a.0, b = pair.b.0, "POI pair unreachable in routing graph");
                unreachable.push(pair.ids());
            }
        }
    }
    Ok(Routed {
        graph: full.induced_subgraph(keep),
        unreachable,
    })
}

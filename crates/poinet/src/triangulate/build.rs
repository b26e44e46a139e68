//! Greedy triangulation over the abstract POI graph.

use tracing::debug;

use crate::error::Result;
use crate::geometry::crosses_any;
use crate::graph::{Graph, VertexId};
use crate::pairs::PoiPair;

use super::types::TriangulationPass;

/// Edgeless abstract graph on the POI vertices of `full`.
///
/// Vertex order follows `full`; ids and coordinates are copied.
pub fn poi_skeleton(full: &Graph, pois: &[VertexId]) -> Result<Graph> {
    let idx = pois
        .iter()
        .map(|&id| full.resolve(id))
        .collect::<Result<Vec<usize>>>()?;
    Ok(full.induced_subgraph(idx).without_edges())
}

/// Add pairs in the given order unless the new segment would cross an edge
/// already in `abstract_graph`.
///
/// - Edge weight is the pair's routing distance.
/// - Pairs with non-finite distance, and pairs already joined by an edge, are
///   skipped.
/// - Each pair is looked at exactly once; O(pairs · edges).
pub fn greedy_triangulation(
    abstract_graph: &mut Graph,
    pairs: &[PoiPair],
) -> Result<TriangulationPass> {
    let mut pass = TriangulationPass::default();
    for pair in pairs {
        if !pair.is_reachable() {
            pass.skipped_unreachable += 1;
            continue;
        }
        let v = abstract_graph.resolve(pair.a)?;
        let w = abstract_graph.resolve(pair.b)?;
        if abstract_graph.edge_between(v, w).is_some() {
            pass.skipped_existing += 1;
            continue;
        }
        let (p, q) = (abstract_graph.vertex(v).pos, abstract_graph.vertex(w).pos);
        if crosses_any(abstract_graph, p, q) {
            pass.rejected_crossing += 1;
            continue;
        }
        pass.added.push(abstract_graph.add_edge(v, w, pair.distance)?);
    }
    debug!(
        pairs = pairs.len(),
        added = pass.added.len(),
        rejected_crossing = pass.rejected_crossing,
        skipped_unreachable = pass.skipped_unreachable,
        skipped_existing = pass.skipped_existing,
        "triangulation pass"
    );
    Ok(pass)
}

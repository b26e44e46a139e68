//! Orchestrators: one-shot and stepwise triangulate → prune → route.
//!
//! The full graph is only borrowed. Each quantile starts from its own copy of
//! the edgeless POI skeleton (or of the shared unpruned triangulation in the
//! one-shot case), so quantile iterations share nothing mutable.

use tracing::{debug, info, info_span};

use crate::error::Result;
use crate::graph::{Graph, VertexId};
use crate::pairs::{dedup_ids, poi_pairs_by_distance};
use crate::sampling::{poi_pools, validate_percentages, ReplayToken};

use super::build::{greedy_triangulation, poi_skeleton};
use super::prune::prune;
use super::route::{route, route_pairs};
use super::types::{PruneCfg, RunCfg, TriangulationOutput};

impl RunCfg {
    fn replay(&self) -> ReplayToken {
        ReplayToken::new(self.seed, self.iteration)
    }

    fn prune_cfg(&self) -> PruneCfg {
        PruneCfg {
            seed: self.replay().mixed(),
        }
    }
}

/// Checks shared by both orchestrators; returns the de-duplicated POIs.
fn prepare(graph: &Graph, pois: &[VertexId], cfg: &RunCfg) -> Result<Vec<VertexId>> {
    cfg.validate()?;
    let pois = dedup_ids(pois);
    for &id in &pois {
        graph.resolve(id)?;
    }
    Ok(pois)
}

/// Greedy triangulation on all POIs, pruned and routed once per quantile.
///
/// Fewer than two POIs yield an empty output.
///
/// Reference: Cardillo, Scellato, Latora, Porta (2006), Structural properties
/// of planar graphs of urban street patterns, Phys. Rev. E 73, 066107.
pub fn triangulate_and_route(
    graph: &Graph,
    pois: &[VertexId],
    cfg: &RunCfg,
) -> Result<TriangulationOutput> {
    let pois = prepare(graph, pois, cfg)?;
    let mut out = TriangulationOutput::default();
    if pois.len() < 2 {
        return Ok(out);
    }
    let pairs = poi_pairs_by_distance(graph, &pois)?;
    // The pass does not depend on the quantile; triangulate once.
    let mut triangulation = poi_skeleton(graph, &pois)?;
    let pass = greedy_triangulation(&mut triangulation, &pairs)?;
    let prune_cfg = cfg.prune_cfg();

    for &q in &cfg.prune_quantiles {
        let _span = info_span!("quantile", q, measure = %cfg.prune_measure).entered();
        let pruned = prune(&triangulation, q, cfg.prune_measure, &pass.added, prune_cfg)?;
        let routed = route(graph, &route_pairs(&pruned), &pois)?;
        info!(
            abstract_edges = pruned.ecount(),
            routed_vertices = routed.graph.vcount(),
            routed_edges = routed.graph.ecount(),
            unreachable = routed.unreachable.len(),
            "routed"
        );
        out.unreachable.push(routed.unreachable.len());
        out.routed.push(routed.graph);
        out.abstracts.push(pruned);
    }
    Ok(out)
}

/// Stepwise variant: POIs enter in seeded groups sized by
/// `subgraph_percentages`; each step triangulates the grown pool on top of
/// the previous step's pruned graph and prunes only that step's new edges.
///
/// Percentages must lie in [0,1] and sum to 1; checked before any work.
pub fn triangulate_stepwise(
    graph: &Graph,
    pois: &[VertexId],
    subgraph_percentages: &[f64],
    cfg: &RunCfg,
) -> Result<TriangulationOutput> {
    validate_percentages(subgraph_percentages)?;
    let pois = prepare(graph, pois, cfg)?;
    let mut out = TriangulationOutput::default();
    if pois.len() < 2 {
        return Ok(out);
    }
    let pools = poi_pools(&pois, subgraph_percentages, cfg.replay())?;
    let step_pairs = pools
        .iter()
        .map(|pool| poi_pairs_by_distance(graph, pool))
        .collect::<Result<Vec<_>>>()?;
    let skeleton = poi_skeleton(graph, &pois)?;
    let prune_cfg = cfg.prune_cfg();

    for &q in &cfg.prune_quantiles {
        let _span = info_span!("quantile", q, measure = %cfg.prune_measure).entered();
        let mut current = skeleton.clone();
        for (step, pairs) in step_pairs.iter().enumerate() {
            let _step = info_span!("step", step, pool = pools[step].len()).entered();
            let pass = greedy_triangulation(&mut current, pairs)?;
            current = prune(&current, q, cfg.prune_measure, &pass.added, prune_cfg)?;
            debug!(edges = current.ecount(), "step done");
        }
        let routed = route(graph, &route_pairs(&current), &pois)?;
        info!(
            abstract_edges = current.ecount(),
            routed_vertices = routed.graph.vcount(),
            routed_edges = routed.graph.ecount(),
            unreachable = routed.unreachable.len(),
            "routed"
        );
        out.unreachable.push(routed.unreachable.len());
        out.routed.push(routed.graph);
        out.abstracts.push(current);
    }
    Ok(out)
}

//! Pruning strategies scoped to the newest triangulation pass.
//!
//! Every strategy keeps all edges outside `provenance` and decides only over
//! the provenance edges, so earlier stepwise decisions are never undone.
//! `quantile = 1` keeps every provenance edge.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use crate::error::Result;
use crate::graph::{closeness, edge_betweenness, Graph};

use super::types::{validate_quantile, PruneCfg, PruneMeasure};

/// Guard for `ceil` against products like `0.3 * 10 = 3.0000000000000004`.
const CEIL_GUARD: f64 = 1e-9;

/// Prune `graph` down to the `quantile` share of its provenance edges.
///
/// Returns a new graph with every vertex of `graph`; scores computed on the
/// way (betweenness, width, closeness) are written into the result.
pub fn prune(
    graph: &Graph,
    quantile: f64,
    measure: PruneMeasure,
    provenance: &[usize],
    cfg: PruneCfg,
) -> Result<Graph> {
    validate_quantile(quantile)?;
    let provenance: BTreeSet<usize> = provenance
        .iter()
        .copied()
        .filter(|&e| e < graph.ecount())
        .collect();
    let pruned = match measure {
        PruneMeasure::Betweenness => prune_betweenness(graph, quantile, &provenance),
        PruneMeasure::Closeness => prune_closeness(graph, quantile, &provenance),
        PruneMeasure::Random => prune_random(graph, quantile, &provenance, cfg.seed),
    };
    debug!(
        %measure,
        quantile,
        provenance = provenance.len(),
        before = graph.ecount(),
        after = pruned.ecount(),
        "prune"
    );
    Ok(pruned)
}

/// Linear-interpolation quantile of unsorted `values` at `p ∈ [0,1]`.
///
/// Returns `None` for an empty slice.
pub fn quantile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let h = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    let frac = h - lo as f64;
    let (a, b) = (sorted[lo], sorted[hi]);
    if frac == 0.0 || a == b {
        return Some(a);
    }
    Some((a + frac * (b - a)).max(a).min(b))
}

/// Number of provenance edges kept by random pruning.
pub fn random_keep_count(quantile: f64, n: usize) -> usize {
    if quantile <= 0.0 || n == 0 {
        return 0;
    }
    let k = ((quantile * n as f64) - CEIL_GUARD).ceil().max(1.0) as usize;
    k.min(n)
}

fn prune_betweenness(graph: &Graph, quantile: f64, provenance: &BTreeSet<usize>) -> Graph {
    let eb = edge_betweenness(graph);
    let mut scored = graph.clone();
    for (e, &b) in eb.iter().enumerate() {
        let edge = scored.edge_mut(e);
        edge.betweenness = Some(b);
        edge.width = Some((b + 1.0).sqrt() * 0.5);
    }
    let values: Vec<f64> = provenance.iter().map(|&e| eb[e]).collect();
    let Some(tau) = quantile_threshold(&values, quantile) else {
        return scored;
    };
    let mask: Vec<bool> = (0..graph.ecount())
        .map(|e| !provenance.contains(&e) || eb[e] >= tau)
        .collect();
    scored.subgraph_edges(&mask)
}

fn prune_closeness(graph: &Graph, quantile: f64, provenance: &BTreeSet<usize>) -> Graph {
    let cc = closeness(graph);
    let mut scored = graph.clone();
    for (v, &c) in cc.iter().enumerate() {
        scored.vertex_mut(v).closeness = Some(c);
    }
    for e in 0..graph.ecount() {
        let edge = graph.edge(e);
        scored.edge_mut(e).closeness = Some(cc[edge.source].min(cc[edge.target]));
    }

    let mut previous: BTreeSet<usize> = BTreeSet::new();
    let mut candidates: BTreeSet<usize> = BTreeSet::new();
    for (e, edge) in graph.edges().iter().enumerate() {
        let set = if provenance.contains(&e) {
            &mut candidates
        } else {
            &mut previous
        };
        set.insert(edge.source);
        set.insert(edge.target);
    }
    let values: Vec<f64> = candidates.iter().map(|&v| cc[v]).collect();
    let Some(tau) = quantile_threshold(&values, quantile) else {
        return scored;
    };
    let retained = |v: usize| previous.contains(&v) || cc[v] >= tau;
    let mask: Vec<bool> = graph
        .edges()
        .iter()
        .map(|edge| retained(edge.source) && retained(edge.target))
        .collect();
    scored.subgraph_edges(&mask)
}

fn prune_random(graph: &Graph, quantile: f64, provenance: &BTreeSet<usize>, seed: u64) -> Graph {
    let mut order: Vec<usize> = provenance.iter().copied().collect();
    order.shuffle(&mut StdRng::seed_from_u64(seed));
    order.truncate(random_keep_count(quantile, order.len()));
    let keep: BTreeSet<usize> = order.into_iter().collect();
    let mask: Vec<bool> = (0..graph.ecount())
        .map(|e| !provenance.contains(&e) || keep.contains(&e))
        .collect();
    graph.subgraph_edges(&mask)
}

/// Threshold keeping the top `share` of `values`.
fn quantile_threshold(values: &[f64], share: f64) -> Option<f64> {
    quantile(values, 1.0 - share)
}

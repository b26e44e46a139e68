//! Serializable run and comparison summaries.

use poinet::api::{Comparison, Graph, TriangulationOutput};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub mode: &'static str,
    pub measure: String,
    pub seed: u64,
    pub pois: usize,
    pub iterations: Vec<IterationSummary>,
}

#[derive(Debug, Serialize)]
pub struct IterationSummary {
    pub iteration: u64,
    pub quantiles: Vec<QuantileSummary>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct QuantileSummary {
    pub quantile: f64,
    pub abstract_edges: usize,
    pub abstract_length: f64,
    pub routed_vertices: usize,
    pub routed_edges: usize,
    pub routed_length: f64,
    pub unreachable_pairs: usize,
}

impl IterationSummary {
    pub fn new(iteration: u64, quantiles: &[f64], out: &TriangulationOutput) -> Self {
        let quantiles = quantiles
            .iter()
            .zip(&out.abstracts)
            .zip(&out.routed)
            .zip(&out.unreachable)
            .map(|(((&q, abs), routed), &unreachable)| QuantileSummary::new(q, abs, routed, unreachable))
            .collect();
        Self {
            iteration,
            quantiles,
        }
    }
}

impl QuantileSummary {
    fn new(quantile: f64, abstract_graph: &Graph, routed: &Graph, unreachable: usize) -> Self {
        Self {
            quantile,
            abstract_edges: abstract_graph.ecount(),
            abstract_length: abstract_graph.total_weight(),
            routed_vertices: routed.vcount(),
            routed_edges: routed.ecount(),
            routed_length: routed.total_weight(),
            unreachable_pairs: unreachable,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompareSummary {
    pub mode: String,
    pub signed_error: f64,
    pub pairs_compared: usize,
    pub unreachable_in_a: usize,
    pub unreachable_in_b: usize,
}

impl CompareSummary {
    pub fn new(mode: impl Into<String>, c: Comparison) -> Self {
        Self {
            mode: mode.into(),
            signed_error: c.signed_error,
            pairs_compared: c.pairs_compared,
            unreachable_in_a: c.unreachable_in_a,
            unreachable_in_b: c.unreachable_in_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poinet::api::{triangulate_and_route, RunCfg, VertexId};

    #[test]
    fn one_row_per_quantile() {
        // Unit triangle with a pendant vertex that is not a POI.
        let mut g = Graph::new();
        for (k, (x, y)) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (2.0, 2.0)]
            .into_iter()
            .enumerate()
        {
            g.add_vertex(VertexId(k as u64), x, y).unwrap();
        }
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(0, 2, 1.0).unwrap();
        g.add_edge(1, 2, 2.0).unwrap();
        g.add_edge(2, 3, 1.0).unwrap();
        let cfg = RunCfg {
            prune_quantiles: vec![1.0, 0.0],
            ..RunCfg::default()
        };
        let pois = [VertexId(0), VertexId(1), VertexId(2)];
        let out = triangulate_and_route(&g, &pois, &cfg).unwrap();
        let s = IterationSummary::new(3, &cfg.prune_quantiles, &out);
        assert_eq!(s.iteration, 3);
        assert_eq!(s.quantiles.len(), 2);
        let full = &s.quantiles[0];
        assert_eq!(full.abstract_edges, 3);
        assert_eq!(full.routed_vertices, 3);
        assert_eq!(full.routed_length, 4.0);
        assert_eq!(full.unreachable_pairs, 0);
        assert!(s.quantiles[1].abstract_edges <= full.abstract_edges);

        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["quantiles"][0]["quantile"], 1.0);
    }
}

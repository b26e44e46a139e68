//! Configuration and result types for triangulation runs.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Structural measure used to prune a triangulation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PruneMeasure {
    /// Weighted edge betweenness; keeps the most travelled new edges.
    #[default]
    Betweenness,
    /// Weighted vertex closeness; keeps new edges between central vertices.
    Closeness,
    /// Seeded random subset of the new edges.
    Random,
}

impl PruneMeasure {
    pub const ALL: [PruneMeasure; 3] = [Self::Betweenness, Self::Closeness, Self::Random];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Betweenness => "betweenness",
            Self::Closeness => "closeness",
            Self::Random => "random",
        }
    }
}

impl fmt::Display for PruneMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PruneMeasure {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| Error::config(format!("unknown pruning measure: {s}")))
    }
}

/// Pruning knobs that are not part of the quantile itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PruneCfg {
    /// Seed for `PruneMeasure::Random`.
    pub seed: u64,
}

/// Run configuration shared by both orchestrators.
#[derive(Clone, Debug, PartialEq)]
pub struct RunCfg {
    /// One output pair per quantile, in this order.
    pub prune_quantiles: Vec<f64>,
    pub prune_measure: PruneMeasure,
    /// Experiment seed (POI sampling and random pruning).
    pub seed: u64,
    /// Iteration index within the experiment; mixed into the seed.
    pub iteration: u64,
}

impl Default for RunCfg {
    fn default() -> Self {
        Self {
            prune_quantiles: vec![1.0],
            prune_measure: PruneMeasure::Betweenness,
            seed: 0,
            iteration: 0,
        }
    }
}

impl RunCfg {
    pub fn validate(&self) -> Result<()> {
        if self.prune_quantiles.is_empty() {
            return Err(Error::config("no prune quantiles given"));
        }
        self.prune_quantiles
            .iter()
            .try_for_each(|&q| validate_quantile(q))
    }
}

/// Quantiles live in [0, 1].
pub fn validate_quantile(q: f64) -> Result<()> {
    if q.is_finite() && (0.0..=1.0).contains(&q) {
        Ok(())
    } else {
        Err(Error::config(format!("prune quantile {q} is outside [0, 1]")))
    }
}

/// Edges added by one triangulation pass (the provenance set), in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriangulationPass {
    pub added: Vec<usize>,
    pub rejected_crossing: usize,
    pub skipped_unreachable: usize,
    pub skipped_existing: usize,
}

/// Parallel per-quantile results.
#[derive(Clone, Debug, Default)]
pub struct TriangulationOutput {
    /// Routed subgraphs of the full graph.
    pub routed: Vec<Graph>,
    /// Pruned abstract graphs that were routed.
    pub abstracts: Vec<Graph>,
    /// Abstract edges whose endpoints are disconnected in the full graph.
    pub unreachable: Vec<usize>,
}

impl TriangulationOutput {
    pub fn len(&self) -> usize {
        self.routed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routed.is_empty()
    }

    /// `(routed_graphs, abstract_graphs)`.
    pub fn into_parts(self) -> (Vec<Graph>, Vec<Graph>) {
        (self.routed, self.abstracts)
    }
}

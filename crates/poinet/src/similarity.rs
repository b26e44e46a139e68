//! Shortest-path "sum of errors" between two graphs on the same vertex set.
//!
//! Vertices correspond by index. Pairs are ordered, so on undirected graphs
//! every unordered pair contributes twice. For every compared pair the error
//! is `d_b − d_a`; pairs that are unreachable in either graph are left out of
//! the sum and counted per graph instead.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use crate::pairs::dedup_ids;
use crate::sampling::ReplayToken;

/// Which vertex pairs to compare.
#[derive(Clone, Debug, PartialEq)]
pub enum SampleMode {
    /// Every ordered pair `(i, j)`, `i ≠ j`.
    AllPairs,
    /// `floor(n · fraction)` distinct ordered pairs drawn from `[0, n)²`;
    /// draws with equal endpoints are skipped.
    Fraction { fraction: f64, seed: u64 },
    /// Every ordered pair of distinct listed POIs (resolved by id in graph `a`).
    Pois(Vec<VertexId>),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Comparison {
    /// `Σ (d_b − d_a)` over pairs finite in both graphs.
    pub signed_error: f64,
    pub unreachable_in_a: usize,
    pub unreachable_in_b: usize,
    /// Pairs that contributed to `signed_error`.
    pub pairs_compared: usize,
}

impl Comparison {
    fn record(&mut self, da: f64, db: f64) {
        let (fa, fb) = (da.is_finite(), db.is_finite());
        if !fa {
            self.unreachable_in_a += 1;
        }
        if !fb {
            self.unreachable_in_b += 1;
        }
        if fa && fb {
            self.signed_error += db - da;
            self.pairs_compared += 1;
        }
    }
}

/// Compare shortest-path distances of `b` against `a`.
pub fn compare(a: &Graph, b: &Graph, mode: &SampleMode) -> Result<Comparison> {
    if a.vcount() != b.vcount() {
        return Err(Error::config(format!(
            "graphs differ in vertex count ({} vs {})",
            a.vcount(),
            b.vcount()
        )));
    }
    let targets = match mode {
        SampleMode::AllPairs => all_pairs(a.vcount()),
        SampleMode::Fraction { fraction, seed } => sampled_pairs(a.vcount(), *fraction, *seed)?,
        SampleMode::Pois(pois) => {
            let idx = dedup_ids(pois)
                .into_iter()
                .map(|id| a.resolve(id))
                .collect::<Result<Vec<usize>>>()?;
            poi_pairs(&idx)
        }
    };

    let mut out = Comparison::default();
    for (src, dsts) in &targets {
        let da = a.distances_from(*src);
        let db = b.distances_from(*src);
        for &dst in dsts {
            out.record(da[dst], db[dst]);
        }
    }
    debug!(
        sources = targets.len(),
        compared = out.pairs_compared,
        unreachable_in_a = out.unreachable_in_a,
        unreachable_in_b = out.unreachable_in_b,
        "graph comparison"
    );
    Ok(out)
}

/// Targets grouped by source, so each source runs one Dijkstra per graph.
type Targets = BTreeMap<usize, Vec<usize>>;

fn all_pairs(n: usize) -> Targets {
    let all: Vec<usize> = (0..n).collect();
    poi_pairs(&all)
}

/// `idx` holds distinct indices.
fn poi_pairs(idx: &[usize]) -> Targets {
    idx.iter()
        .map(|&i| (i, idx.iter().copied().filter(|&j| j != i).collect::<Vec<_>>()))
        .filter(|(_, dsts)| !dsts.is_empty())
        .collect()
}

fn sampled_pairs(n: usize, fraction: f64, seed: u64) -> Result<Targets> {
    if !(fraction.is_finite() && (0.0..=1.0).contains(&fraction)) {
        return Err(Error::config(format!(
            "sample fraction {fraction} is outside [0, 1]"
        )));
    }
    let count = (n as f64 * fraction).floor() as usize;
    let mut rng = ReplayToken::new(seed, 0).to_std_rng();
    let mut drawn = BTreeSet::new();
    while drawn.len() < count {
        drawn.insert((rng.gen_range(0..n), rng.gen_range(0..n)));
    }
    let mut out = Targets::new();
    for (i, j) in drawn.into_iter().filter(|(i, j)| i != j) {
        out.entry(i).or_default().push(j);
    }
    Ok(out)
}

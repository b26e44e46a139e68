//! Weighted centrality measures used by the pruning strategies.
//!
//! - Edge betweenness: Brandes' accumulation over weighted shortest paths.
//!   Each unordered vertex pair contributes once; equal-length paths split the
//!   pair's unit of flow by path count. Among paths of equal length, only
//!   those using the fewest zero-weight edges count as shortest; otherwise
//!   two vertices joined by a zero-weight edge would be each other's
//!   predecessor and the result would depend on vertex order.
//! - Closeness: `reachable / Σ distance` over the vertices reachable from `v`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::types::Graph;

/// Relative tolerance under which two path lengths count as equal.
const PATH_TIE_REL_EPS: f64 = 1e-10;

fn cmp_len(a: f64, b: f64) -> Ordering {
    if a.is_finite() && b.is_finite() {
        let scale = a.abs().max(b.abs());
        if (a - b).abs() <= PATH_TIE_REL_EPS * scale {
            return Ordering::Equal;
        }
    }
    a.total_cmp(&b)
}

/// Lexicographic path key: length, then zero-weight edges used.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Label {
    dist: f64,
    zeros: usize,
    vertex: usize,
}

impl Eq for Label {}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on (dist, zeros, vertex).
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.zeros.cmp(&self.zeros))
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Edge betweenness per edge index.
pub fn edge_betweenness(g: &Graph) -> Vec<f64> {
    let n = g.vcount();
    let mut eb = vec![0.0; g.ecount()];
    let mut dist = vec![f64::INFINITY; n];
    let mut zeros = vec![usize::MAX; n];
    let mut sigma = vec![0.0f64; n];
    let mut delta = vec![0.0f64; n];
    let mut settled = vec![false; n];
    let mut preds: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
    let mut order: Vec<usize> = Vec::with_capacity(n);

    for s in 0..n {
        dist.fill(f64::INFINITY);
        zeros.fill(usize::MAX);
        sigma.fill(0.0);
        delta.fill(0.0);
        settled.fill(false);
        preds.iter_mut().for_each(Vec::clear);
        order.clear();

        dist[s] = 0.0;
        zeros[s] = 0;
        sigma[s] = 1.0;
        let mut heap = BinaryHeap::new();
        heap.push(Label {
            dist: 0.0,
            zeros: 0,
            vertex: s,
        });
        while let Some(Label { vertex: v, .. }) = heap.pop() {
            if settled[v] {
                continue;
            }
            settled[v] = true;
            order.push(v);
            for (w, e) in g.neighbors(v) {
                if settled[w] {
                    continue;
                }
                let weight = g.edge(e).weight;
                let nd = dist[v] + weight;
                let nz = zeros[v] + usize::from(weight == 0.0);
                match cmp_len(nd, dist[w]).then(nz.cmp(&zeros[w])) {
                    Ordering::Less => {
                        dist[w] = nd;
                        zeros[w] = nz;
                        sigma[w] = sigma[v];
                        preds[w].clear();
                        preds[w].push((v, e));
                        heap.push(Label {
                            dist: nd,
                            zeros: nz,
                            vertex: w,
                        });
                    }
                    Ordering::Equal => {
                        sigma[w] += sigma[v];
                        preds[w].push((v, e));
                    }
                    Ordering::Greater => {}
                }
            }
        }
        // Dependencies in reverse settle order.
        for &w in order.iter().rev() {
            for &(v, e) in &preds[w] {
                let c = sigma[v] / sigma[w] * (1.0 + delta[w]);
                eb[e] += c;
                delta[v] += c;
            }
        }
    }
    // Every unordered pair was visited from both ends.
    eb.iter_mut().for_each(|b| *b /= 2.0);
    eb
}

/// Closeness per vertex index; 0 for a vertex that reaches nothing.
pub fn closeness(g: &Graph) -> Vec<f64> {
    (0..g.vcount())
        .map(|v| {
            let dist = g.distances_from(v);
            let (reached, total) = dist
                .iter()
                .enumerate()
                .filter(|&(w, d)| w != v && d.is_finite())
                .fold((0usize, 0.0f64), |(r, t), (_, d)| (r + 1, t + d));
            if reached == 0 {
                0.0
            } else if total <= 0.0 {
                f64::INFINITY
            } else {
                reached as f64 / total
            }
        })
        .collect()
}

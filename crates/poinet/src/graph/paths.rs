//! Weighted shortest paths (Dijkstra on a binary heap).
//!
//! Tie-break: the heap pops smaller distance first, then smaller vertex index,
//! and a predecessor is replaced only on strict improvement. Repeated runs on
//! the same graph therefore return the same path.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::types::Graph;

#[derive(Clone, Copy, Debug, PartialEq)]
struct HeapEntry {
    dist: f64,
    vertex: usize,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on (dist, vertex).
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances and predecessor vertices from one source.
struct Tree {
    dist: Vec<f64>,
    pred: Vec<Option<usize>>,
}

impl Graph {
    /// Runs until the heap is empty or `target` is settled.
    fn dijkstra(&self, src: usize, target: Option<usize>) -> Tree {
        let n = self.vcount();
        let mut dist = vec![f64::INFINITY; n];
        let mut pred = vec![None; n];
        let mut settled = vec![false; n];
        let mut heap = BinaryHeap::new();
        dist[src] = 0.0;
        heap.push(HeapEntry {
            dist: 0.0,
            vertex: src,
        });
        while let Some(HeapEntry { dist: d, vertex: v }) = heap.pop() {
            if settled[v] {
                continue;
            }
            settled[v] = true;
            if Some(v) == target {
                break;
            }
            for (w, e) in self.neighbors(v) {
                if settled[w] {
                    continue;
                }
                let nd = d + self.edge(e).weight;
                if nd < dist[w] {
                    dist[w] = nd;
                    pred[w] = Some(v);
                    heap.push(HeapEntry {
                        dist: nd,
                        vertex: w,
                    });
                }
            }
        }
        Tree { dist, pred }
    }

    /// Weighted distances from `src` to every vertex (`INFINITY` if unreachable).
    pub fn distances_from(&self, src: usize) -> Vec<f64> {
        self.dijkstra(src, None).dist
    }

    /// Weighted distance between two vertices (`INFINITY` if unreachable).
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.dijkstra(a, Some(b)).dist[b]
    }

    /// Vertex sequence of one shortest path from `a` to `b`, both included.
    ///
    /// Returns `None` when `b` is unreachable from `a`.
    pub fn shortest_path(&self, a: usize, b: usize) -> Option<Vec<usize>> {
        if a == b {
            return Some(vec![a]);
        }
        let tree = self.dijkstra(a, Some(b));
        if !tree.dist[b].is_finite() {
            return None;
        }
        let mut path = vec![b];
        let mut cur = b;
        while let Some(p) = tree.pred[cur] {
            path.push(p);
            cur = p;
        }
        path.reverse();
        debug_assert_eq!(path.first(), Some(&a));
        Some(path)
    }
}

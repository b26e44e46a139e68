//! Vertex/edge arenas and the id→index map.
//!
//! Indices are only meaningful inside one `Graph` value. Every structural
//! reduction (`induced_subgraph`, `subgraph_edges`, `without_edges`) builds a
//! fresh graph with its own index space and its own id map.

use std::collections::{BTreeSet, HashMap};

use nalgebra::Vector2;

use crate::error::{Error, Result};

/// Stable external vertex identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub pos: Vector2<f64>,
    /// Written by closeness pruning.
    pub closeness: Option<f64>,
}

/// Undirected weighted edge between two vertex indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
    pub betweenness: Option<f64>,
    /// Smaller closeness of the two endpoints.
    pub closeness: Option<f64>,
    /// Display width derived from betweenness.
    pub width: Option<f64>,
}

impl Edge {
    fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
            betweenness: None,
            closeness: None,
            width: None,
        }
    }

    /// Endpoint opposite to `v` (assumes `v` is an endpoint).
    #[inline]
    pub fn other(&self, v: usize) -> usize {
        if self.source == v {
            self.target
        } else {
            self.source
        }
    }

    #[inline]
    pub fn joins(&self, a: usize, b: usize) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// Undirected planar-embedded graph.
///
/// Invariants:
/// - `index[vertices[k].id] == k` for every vertex.
/// - `adj[k]` lists every edge index incident to vertex `k`, in insertion order.
/// - Edge weights are finite and non-negative; no self-loops.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
    adj: Vec<Vec<usize>>,
    index: HashMap<VertexId, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, id: VertexId, x: f64, y: f64) -> Result<usize> {
        if self.index.contains_key(&id) {
            return Err(Error::graph(format!("duplicate vertex id {}", id.0)));
        }
        if !(x.is_finite() && y.is_finite()) {
            return Err(Error::graph(format!(
                "vertex {} has non-finite coordinates",
                id.0
            )));
        }
        let k = self.vertices.len();
        self.vertices.push(Vertex {
            id,
            pos: Vector2::new(x, y),
            closeness: None,
        });
        self.adj.push(Vec::new());
        self.index.insert(id, k);
        Ok(k)
    }

    pub fn add_edge(&mut self, a: usize, b: usize, weight: f64) -> Result<usize> {
        let n = self.vertices.len();
        if a >= n || b >= n {
            return Err(Error::graph(format!(
                "edge ({a}, {b}) references a vertex outside 0..{n}"
            )));
        }
        if a == b {
            return Err(Error::graph(format!("self-loop on vertex index {a}")));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::graph(format!(
                "edge ({a}, {b}) has invalid weight {weight}"
            )));
        }
        let e = self.edges.len();
        self.edges.push(Edge::new(a, b, weight));
        self.adj[a].push(e);
        self.adj[b].push(e);
        Ok(e)
    }

    /// Convenience for providers that speak ids.
    pub fn add_edge_by_id(&mut self, a: VertexId, b: VertexId, weight: f64) -> Result<usize> {
        let ia = self.resolve(a)?;
        let ib = self.resolve(b)?;
        self.add_edge(ia, ib, weight)
    }

    #[inline]
    pub fn find(&self, id: VertexId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn resolve(&self, id: VertexId) -> Result<usize> {
        self.find(id).ok_or(Error::UnknownVertex(id))
    }

    #[inline]
    pub fn vcount(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn ecount(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn vertex(&self, v: usize) -> &Vertex {
        &self.vertices[v]
    }

    #[inline]
    pub fn edge(&self, e: usize) -> &Edge {
        &self.edges[e]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn vertex_mut(&mut self, v: usize) -> &mut Vertex {
        &mut self.vertices[v]
    }

    pub(crate) fn edge_mut(&mut self, e: usize) -> &mut Edge {
        &mut self.edges[e]
    }

    /// Edge indices incident to `v`.
    #[inline]
    pub fn incident(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// `(neighbor, edge)` pairs around `v`.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj[v].iter().map(move |&e| (self.edges[e].other(v), e))
    }

    pub fn edge_between(&self, a: usize, b: usize) -> Option<usize> {
        // Scan the shorter incidence list.
        let (u, w) = if self.adj[a].len() <= self.adj[b].len() {
            (a, b)
        } else {
            (b, a)
        };
        self.adj[u]
            .iter()
            .copied()
            .find(|&e| self.edges[e].joins(u, w))
    }

    /// Endpoint coordinates of edge `e`.
    #[inline]
    pub fn segment(&self, e: usize) -> (Vector2<f64>, Vector2<f64>) {
        let edge = &self.edges[e];
        (
            self.vertices[edge.source].pos,
            self.vertices[edge.target].pos,
        )
    }

    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(|v| v.id)
    }

    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(|e| e.weight).sum()
    }

    /// Same vertices (ids, coordinates, order), no edges.
    pub fn without_edges(&self) -> Graph {
        let vertices: Vec<Vertex> = self
            .vertices
            .iter()
            .map(|v| Vertex {
                closeness: None,
                ..v.clone()
            })
            .collect();
        let adj = vec![Vec::new(); vertices.len()];
        Graph {
            vertices,
            edges: Vec::new(),
            adj,
            index: self.index.clone(),
        }
    }

    /// Subgraph on the given vertex indices, keeping every edge with both
    /// endpoints inside. Vertex order follows this graph; duplicates are ignored.
    pub fn induced_subgraph<I>(&self, keep: I) -> Graph
    where
        I: IntoIterator<Item = usize>,
    {
        let keep: BTreeSet<usize> = keep.into_iter().filter(|&v| v < self.vcount()).collect();
        let mut remap: Vec<Option<usize>> = vec![None; self.vcount()];
        let mut out = Graph::new();
        for &v in &keep {
            let src = &self.vertices[v];
            let k = out.vertices.len();
            out.vertices.push(src.clone());
            out.adj.push(Vec::new());
            out.index.insert(src.id, k);
            remap[v] = Some(k);
        }
        for edge in &self.edges {
            if let (Some(a), Some(b)) = (remap[edge.source], remap[edge.target]) {
                let e = out.edges.len();
                out.edges.push(Edge {
                    source: a,
                    target: b,
                    ..edge.clone()
                });
                out.adj[a].push(e);
                out.adj[b].push(e);
            }
        }
        out
    }

    /// All vertices, plus the edges whose mask entry is `true` (order preserved).
    pub fn subgraph_edges(&self, mask: &[bool]) -> Graph {
        debug_assert_eq!(mask.len(), self.edges.len());
        let mut out = Graph {
            vertices: self.vertices.clone(),
            edges: Vec::new(),
            adj: vec![Vec::new(); self.vertices.len()],
            index: self.index.clone(),
        };
        for (edge, _) in self
            .edges
            .iter()
            .zip(mask.iter())
            .filter(|(_, &keep)| keep)
        {
            let e = out.edges.len();
            out.edges.push(edge.clone());
            out.adj[edge.source].push(e);
            out.adj[edge.target].push(e);
        }
        out
    }
}

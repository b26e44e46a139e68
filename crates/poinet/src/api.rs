//! Curated internal API (UNSTABLE).
//!
//! Not a public API. A convenience surface for the CLI and experiments;
//! breaking changes are allowed.

// Graph model and measures
pub use crate::graph::{closeness, edge_betweenness, Edge, Graph, Vertex, VertexId};
// Geometry
pub use crate::geometry::{crosses_any, segments_cross};
// Pairs and sampling
pub use crate::pairs::{poi_pairs_by_distance, PoiPair};
pub use crate::sampling::{
    poi_pools, shuffled, split_collection, validate_percentages, ReplayToken as PoolReplay,
};
// Triangulation pipeline
pub use crate::triangulate::{
    greedy_triangulation, poi_skeleton, prune, route, route_pairs, triangulate_and_route,
    triangulate_stepwise, PruneCfg, PruneMeasure, Routed, RunCfg, TriangulationOutput,
    TriangulationPass,
};
// Comparison
pub use crate::similarity::{compare, Comparison, SampleMode};

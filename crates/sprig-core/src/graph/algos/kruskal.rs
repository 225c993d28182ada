use crate::graph::disjoint_set::DisjointSet;
use crate::graph::types::{Edge, Graph};

/// Minimum spanning forest of `graph` via Kruskal's algorithm.
///
/// Edges are considered in ascending weight order (stable, so equal weights
/// keep their input order). An edge is accepted when its endpoints are in
/// different sets, which are then merged; an edge whose endpoints already
/// share a set would close a cycle and is rejected. A disconnected graph
/// yields one tree per component.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn kruskal(graph: &Graph) -> Vec<Edge> {
    let mut forest = Vec::new();
    let mut sets = DisjointSet::new(graph.vertex_count());

    for edge in graph.edges_by_weight() {
        if sets.find(edge.u) != sets.find(edge.v) {
            sets.union(edge.u, edge.v);
            forest.push(edge);
        }
    }

    forest
}

/// Total weight of an edge list
pub fn sum_weights(edges: &[Edge]) -> i64 {
    edges.iter().map(|edge| edge.weight).sum()
}

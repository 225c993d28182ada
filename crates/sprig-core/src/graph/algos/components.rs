use std::collections::HashMap;

use crate::graph::disjoint_set::DisjointSet;
use crate::graph::types::{Graph, Vertex};

/// Connected components of `graph`.
///
/// Every edge unions its endpoints, then vertices are grouped by root.
/// Each group is ascending and groups are ordered by their smallest
/// member; isolated vertices form singleton groups.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn components(graph: &Graph) -> Vec<Vec<Vertex>> {
    let mut sets = DisjointSet::new(graph.vertex_count());
    for edge in graph.edges() {
        sets.union(edge.u, edge.v);
    }

    // Walking vertices in ascending order keeps each group sorted and
    // orders groups by their first (smallest) member.
    let mut groups: Vec<Vec<Vertex>> = Vec::new();
    let mut group_of_root: HashMap<Vertex, usize> = HashMap::new();
    for vertex in 0..graph.vertex_count() {
        let root = sets.find(vertex);
        let slot = *group_of_root.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(vertex);
    }

    groups
}

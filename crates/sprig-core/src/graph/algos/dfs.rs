use std::collections::HashSet;

use crate::error::Result;
use crate::graph::types::{Graph, Vertex};

/// Depth-first visit order from `start`.
///
/// Explicit stack, not recursion. A vertex may sit on the stack several
/// times; membership is decided at pop time against the vertices already
/// appended to the result, tracked with a seen-set that is updated at the
/// same moment a vertex is appended (never at push time). Neighbors are
/// pushed in ascending order, so the highest-numbered unvisited neighbor
/// is expanded first.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), start))]
pub fn dfs(graph: &Graph, start: Vertex) -> Result<Vec<Vertex>> {
    graph.check_vertex(start)?;

    let mut order = Vec::new();
    let mut seen = HashSet::new();
    let mut stack = vec![start];

    while let Some(vertex) = stack.pop() {
        if seen.insert(vertex) {
            order.push(vertex);
            for neighbor in graph.neighbors(vertex) {
                stack.push(neighbor);
            }
        }
    }

    Ok(order)
}

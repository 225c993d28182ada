use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{Result, SprigError};

/// Vertex identifier in `[0, vertex_count)`
pub type Vertex = usize;

/// Undirected weighted edge between two vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub u: Vertex,
    pub v: Vertex,
    pub weight: i64,
}

impl Edge {
    pub fn new(u: Vertex, v: Vertex, weight: i64) -> Self {
        Edge { u, v, weight }
    }

    /// Whether both endpoints are the same vertex
    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }
}

/// Undirected weighted graph: a fixed vertex count plus an edge list in
/// insertion order. Read-only after construction, so shared references may
/// be used concurrently from independent callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Build a graph, validating that every edge endpoint is in range
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Self> {
        for edge in &edges {
            for endpoint in [edge.u, edge.v] {
                if endpoint >= vertex_count {
                    return Err(SprigError::vertex_out_of_range(endpoint, vertex_count));
                }
            }
        }
        Ok(Graph {
            vertex_count,
            edges,
        })
    }

    /// Graph with vertices but no edges
    pub fn empty(vertex_count: usize) -> Self {
        Graph {
            vertex_count,
            edges: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        vertex < self.vertex_count
    }

    /// Validate a caller-supplied vertex before traversal or adjacency use
    pub fn check_vertex(&self, vertex: Vertex) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(SprigError::vertex_out_of_range(vertex, self.vertex_count))
        }
    }

    /// Edges ordered by ascending weight. The sort is stable: edges of
    /// equal weight keep their relative input order.
    pub fn edges_by_weight(&self) -> Vec<Edge> {
        let mut edges = self.edges.clone();
        edges.sort_by_key(|edge| edge.weight);
        edges
    }

    /// Distinct neighbors of `vertex` in ascending order. An edge counts
    /// whichever endpoint matches; a self-loop contributes no neighbor.
    pub fn neighbors(&self, vertex: Vertex) -> Vec<Vertex> {
        let mut adjacent = BTreeSet::new();

        for edge in &self.edges {
            if edge.is_self_loop() {
                continue;
            }
            if edge.u == vertex {
                adjacent.insert(edge.v);
            } else if edge.v == vertex {
                adjacent.insert(edge.u);
            }
        }

        adjacent.into_iter().collect()
    }
}

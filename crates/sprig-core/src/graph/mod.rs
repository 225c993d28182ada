//! Graph data model and algorithms
//!
//! Provides the undirected weighted graph container and the operations
//! built over it:
//! - `types`: vertices, edges, and the validated `Graph` container
//! - `disjoint_set`: union-find with path compression
//! - `algos`: Kruskal spanning forests, DFS/BFS traversal, components

pub mod algos;
pub mod disjoint_set;
pub mod types;

pub use algos::{bfs, components, dfs, kruskal, sum_weights};
pub use disjoint_set::DisjointSet;
pub use types::{Edge, Graph, Vertex};

//! Graph algorithm implementations
//!
//! Contains concrete implementations of the graph operations:
//! - `kruskal`: minimum spanning forest over weight-sorted edges
//! - `dfs` / `bfs`: deterministic traversal orders
//! - `components`: connected-component grouping

pub mod bfs;
pub mod components;
pub mod dfs;
pub mod kruskal;

pub use bfs::bfs;
pub use components::components;
pub use dfs::dfs;
pub use kruskal::{kruskal, sum_weights};

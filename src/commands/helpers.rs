//! Helper functions shared across commands

use std::path::Path;
use std::time::Instant;

use sprig_core::edgelist;
use sprig_core::error::Result;
use sprig_core::graph::Graph;

/// Load a graph from an edge-list file, reporting timing at debug level
pub fn load_graph(path: &Path, start: Instant) -> Result<Graph> {
    let graph = edgelist::read_graph(path)?;
    tracing::debug!(
        elapsed = ?start.elapsed(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "load_graph"
    );
    Ok(graph)
}

//! Traversal commands (dfs, bfs)

use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::helpers::load_graph;
use sprig_core::error::Result;
use sprig_core::format::OutputFormat;
use sprig_core::graph::{bfs, dfs, Vertex};

/// Which traversal discipline to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Depth,
    Breadth,
}

impl Strategy {
    fn name(self) -> &'static str {
        match self {
            Strategy::Depth => "dfs",
            Strategy::Breadth => "bfs",
        }
    }
}

#[derive(Debug, Serialize)]
struct TraversalReport {
    strategy: &'static str,
    start: Vertex,
    order: Vec<Vertex>,
    visited: usize,
}

/// Execute the dfs and bfs commands
pub fn execute(
    cli: &Cli,
    path: &Path,
    from: Vertex,
    strategy: Strategy,
    start: Instant,
) -> Result<()> {
    let graph = load_graph(path, start)?;

    let order = match strategy {
        Strategy::Depth => dfs(&graph, from)?,
        Strategy::Breadth => bfs(&graph, from)?,
    };

    tracing::debug!(
        elapsed = ?start.elapsed(),
        strategy = strategy.name(),
        visited = order.len(),
        "traverse"
    );

    let report = TraversalReport {
        strategy: strategy.name(),
        start: from,
        visited: order.len(),
        order,
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            for vertex in &report.order {
                println!("{}", vertex);
            }
        }
    }

    Ok(())
}

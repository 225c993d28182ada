//! Neighbor listing command

use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::helpers::load_graph;
use sprig_core::error::Result;
use sprig_core::format::OutputFormat;
use sprig_core::graph::Vertex;

#[derive(Debug, Serialize)]
struct NeighborReport {
    vertex: Vertex,
    neighbors: Vec<Vertex>,
    count: usize,
}

/// Execute the neighbors command
pub fn execute(cli: &Cli, path: &Path, vertex: Vertex, start: Instant) -> Result<()> {
    let graph = load_graph(path, start)?;

    graph.check_vertex(vertex)?;
    let neighbors = graph.neighbors(vertex);

    let report = NeighborReport {
        vertex,
        count: neighbors.len(),
        neighbors,
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            if report.neighbors.is_empty() {
                if !cli.quiet {
                    println!("No neighbors");
                }
            } else {
                for neighbor in &report.neighbors {
                    println!("{}", neighbor);
                }
            }
        }
    }

    Ok(())
}

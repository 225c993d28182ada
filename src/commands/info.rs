//! Graph summary command

use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::helpers::load_graph;
use sprig_core::error::Result;
use sprig_core::format::OutputFormat;
use sprig_core::graph::{components, sum_weights};

#[derive(Debug, Serialize)]
struct GraphSummary {
    vertex_count: usize,
    edge_count: usize,
    total_weight: i64,
    component_count: usize,
    component_sizes: Vec<usize>,
}

/// Execute the info command
pub fn execute(cli: &Cli, path: &Path, start: Instant) -> Result<()> {
    let graph = load_graph(path, start)?;

    let groups = components(&graph);
    let summary = GraphSummary {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        total_weight: sum_weights(graph.edges()),
        component_count: groups.len(),
        component_sizes: groups.iter().map(Vec::len).collect(),
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Human => output_human(&summary),
    }

    Ok(())
}

fn output_human(summary: &GraphSummary) {
    println!("vertices: {}", summary.vertex_count);
    println!("edges: {}", summary.edge_count);
    println!("total weight: {}", summary.total_weight);
    println!("components: {}", summary.component_count);
    if !summary.component_sizes.is_empty() {
        let sizes: Vec<String> = summary
            .component_sizes
            .iter()
            .map(|size| size.to_string())
            .collect();
        println!("component sizes: {}", sizes.join(", "));
    }
}

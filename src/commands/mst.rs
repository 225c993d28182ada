//! Minimum spanning forest command

use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::helpers::load_graph;
use sprig_core::error::Result;
use sprig_core::format::OutputFormat;
use sprig_core::graph::{components, kruskal, sum_weights, Edge};

#[derive(Debug, Serialize)]
struct ForestReport {
    vertex_count: usize,
    edge_count: usize,
    edges: Vec<Edge>,
    total_weight: i64,
    tree_count: usize,
}

/// Execute the mst command
pub fn execute(cli: &Cli, path: &Path, start: Instant) -> Result<()> {
    let graph = load_graph(path, start)?;

    let forest = kruskal(&graph);
    let total_weight = sum_weights(&forest);
    let tree_count = components(&graph).len();

    tracing::debug!(elapsed = ?start.elapsed(), accepted = forest.len(), "kruskal");

    let report = ForestReport {
        vertex_count: graph.vertex_count(),
        edge_count: forest.len(),
        edges: forest,
        total_weight,
        tree_count,
    };

    match cli.format {
        OutputFormat::Json => output_json(&report)?,
        OutputFormat::Human => output_human(cli, &report),
    }

    Ok(())
}

fn output_json(report: &ForestReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn output_human(cli: &Cli, report: &ForestReport) {
    if report.edges.is_empty() {
        if !cli.quiet {
            println!("No spanning edges");
        }
    } else {
        for edge in &report.edges {
            println!("{} -- {}  (weight {})", edge.u, edge.v, edge.weight);
        }
    }
    println!("total weight: {}", report.total_weight);
    println!("trees: {}", report.tree_count);
}

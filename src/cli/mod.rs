//! CLI argument parsing for sprig
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::parse_format;
use sprig_core::format::OutputFormat;
use sprig_core::graph::Vertex;

/// Sprig - graph algorithms over edge-list files
#[derive(Parser, Debug)]
#[command(name = "sprig")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute a minimum spanning forest of the graph
    Mst {
        /// Edge-list graph file
        graph: PathBuf,
    },

    /// Depth-first visit order from a start vertex
    Dfs {
        /// Edge-list graph file
        graph: PathBuf,

        /// Start vertex
        start: Vertex,
    },

    /// Breadth-first visit order from a start vertex
    Bfs {
        /// Edge-list graph file
        graph: PathBuf,

        /// Start vertex
        start: Vertex,
    },

    /// List the neighbors of a vertex
    Neighbors {
        /// Edge-list graph file
        graph: PathBuf,

        /// Vertex to query
        vertex: Vertex,
    },

    /// Summarize a graph: counts, weight, components
    Info {
        /// Edge-list graph file
        graph: PathBuf,
    },
}

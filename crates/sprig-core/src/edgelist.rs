//! Edge-list graph loader
//!
//! Text format: blank lines and lines starting with `#` are ignored; the
//! first significant line is the vertex count, and every following
//! significant line is an edge `u v w` (two endpoints and an integer
//! weight, whitespace-separated). Malformed sources are rejected here with
//! line-numbered errors before any algorithm sees the graph.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, SprigError};
use crate::graph::types::{Edge, Graph};

/// Read a graph from an edge-list file
pub fn read_graph(path: &Path) -> Result<Graph> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(SprigError::GraphNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(err) => return Err(err.into()),
    };

    let graph = parse_contents(&contents, path)?;
    tracing::debug!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph_loaded"
    );
    Ok(graph)
}

/// Parse a graph from in-memory edge-list text
pub fn parse_graph(contents: &str) -> Result<Graph> {
    parse_contents(contents, Path::new("<memory>"))
}

fn parse_contents(contents: &str, path: &Path) -> Result<Graph> {
    let mut vertex_count: Option<usize> = None;
    let mut edges = Vec::new();

    for (index, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = index + 1;

        match vertex_count {
            None => {
                let count = line.parse::<usize>().map_err(|_| {
                    SprigError::invalid_edge_list(
                        path,
                        line_no,
                        format!("expected vertex count, got '{line}'"),
                    )
                })?;
                vertex_count = Some(count);
            }
            Some(_) => edges.push(parse_edge(line, path, line_no)?),
        }
    }

    let vertex_count = vertex_count
        .ok_or_else(|| SprigError::invalid_edge_list(path, 1, "missing vertex count header"))?;

    Graph::new(vertex_count, edges)
}

fn parse_edge(line: &str, path: &Path, line_no: usize) -> Result<Edge> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(SprigError::invalid_edge_list(
            path,
            line_no,
            format!("expected 'u v w', got {} field(s)", fields.len()),
        ));
    }

    let u = parse_endpoint(fields[0], path, line_no)?;
    let v = parse_endpoint(fields[1], path, line_no)?;
    let weight = fields[2].parse::<i64>().map_err(|_| {
        SprigError::invalid_edge_list(path, line_no, format!("invalid weight '{}'", fields[2]))
    })?;

    Ok(Edge::new(u, v, weight))
}

fn parse_endpoint(field: &str, path: &Path, line_no: usize) -> Result<usize> {
    field.parse::<usize>().map_err(|_| {
        SprigError::invalid_edge_list(path, line_no, format!("invalid endpoint '{field}'"))
    })
}

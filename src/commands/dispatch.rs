//! Command dispatch logic for sprig

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::traverse::Strategy;
use sprig_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Mst { graph }) => commands::mst::execute(cli, graph, start),

        Some(Commands::Dfs { graph, start: from }) => {
            commands::traverse::execute(cli, graph, *from, Strategy::Depth, start)
        }

        Some(Commands::Bfs { graph, start: from }) => {
            commands::traverse::execute(cli, graph, *from, Strategy::Breadth, start)
        }

        Some(Commands::Neighbors { graph, vertex }) => {
            commands::neighbors::execute(cli, graph, *vertex, start)
        }

        Some(Commands::Info { graph }) => commands::info::execute(cli, graph, start),
    }
}

fn handle_no_command() -> Result<()> {
    println!("sprig {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Graph algorithms over edge-list files.");
    println!();
    println!("Run `sprig --help` for usage information.");
    Ok(())
}

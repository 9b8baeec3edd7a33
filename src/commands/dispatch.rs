//! Command dispatch logic for waypath
use std::path::Path;
use std::time::Instant;

use clap::CommandFactory;

use crate::cli::{Cli, Commands};
use crate::commands;
use waypath_core::error::Result;
use waypath_core::graph::LoadedGraph;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Paths { graph, source, to }) => {
            let loaded = load_graph(cli, &graph.graph, start)?;
            commands::paths::execute(cli, &loaded, source, to.as_deref())
        }

        Some(Commands::Neighbors { graph, node }) => {
            let loaded = load_graph(cli, &graph.graph, start)?;
            commands::neighbors::execute(cli, &loaded, node)
        }

        Some(Commands::Validate { graph }) => {
            let loaded = load_graph(cli, &graph.graph, start)?;
            commands::validate::execute(cli, &loaded)
        }
    }
}

fn handle_no_command() -> Result<()> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}

fn load_graph(cli: &Cli, path: &Path, start: Instant) -> Result<LoadedGraph> {
    let graph = LoadedGraph::from_path(path)?;
    if cli.verbose {
        tracing::debug!(
            elapsed = ?start.elapsed(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "load_graph"
        );
    }
    Ok(graph)
}

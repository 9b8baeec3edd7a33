//! `waypath validate` command - load a graph document and report its size
//!
//! Loading already enforces every document rule, so reaching the output
//! stage means the document is valid.

use crate::cli::{Cli, OutputFormat};
use waypath_core::error::Result;
use waypath_core::graph::LoadedGraph;

/// Execute the validate command
pub fn execute(cli: &Cli, graph: &LoadedGraph) -> Result<()> {
    tracing::debug!(kind = %graph.kind(), "validated");

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "status": "ok",
                "kind": graph.kind(),
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H waypath=1 records=1 mode=validate status=ok kind={} nodes={} edges={}",
                graph.kind(),
                graph.node_count(),
                graph.edge_count()
            );
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("ok: {}", graph);
            }
        }
    }

    Ok(())
}

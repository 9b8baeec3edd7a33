//! `waypath neighbors` command - one-hop neighbors of a node

use crate::cli::{Cli, OutputFormat};
use waypath_core::error::Result;
use waypath_core::format::escape_record_value;
use waypath_core::graph::{GraphProvider, LoadedGraph};

/// Execute the neighbors command
pub fn execute(cli: &Cli, graph: &LoadedGraph, node: &str) -> Result<()> {
    let neighbors = graph.neighbors_of(&node.to_string())?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "node": node,
                "kind": graph.kind(),
                "neighbors": neighbors
                    .iter()
                    .map(|(id, weight)| serde_json::json!({ "id": id, "weight": weight }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H waypath=1 records=1 mode=neighbors node={} kind={} count={}",
                escape_record_value(node),
                graph.kind(),
                neighbors.len()
            );
            for (id, weight) in &neighbors {
                println!(
                    "E from={} to={} weight={}",
                    escape_record_value(node),
                    escape_record_value(id),
                    weight
                );
            }
        }
        OutputFormat::Human => {
            if neighbors.is_empty() {
                if !cli.quiet {
                    println!("{} has no neighbors", node);
                }
                return Ok(());
            }
            for (id, weight) in &neighbors {
                println!("{}\t{}", id, weight);
            }
        }
    }

    Ok(())
}

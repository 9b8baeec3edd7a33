//! `waypath paths` command - single-source shortest paths
//!
//! - `waypath paths --graph FILE SOURCE` - distance and predecessor for every node
//! - `waypath paths --graph FILE SOURCE --to TARGET` - one path, node by node

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use waypath_core::error::Result;
use waypath_core::format::escape_record_value;
use waypath_core::graph::{Cost, Dijkstra, LoadedGraph, PathResult, ShortestPaths};

#[derive(Serialize)]
struct NodeDistance<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<&'a str>,
    distance: Cost,
    predecessor: Option<&'a str>,
    reachable: bool,
}

#[derive(Serialize)]
struct PathsOutput<'a> {
    source: &'a str,
    kind: String,
    reachable: usize,
    nodes: Vec<NodeDistance<'a>>,
}

#[derive(Serialize)]
struct PathOutput<'a> {
    #[serde(flatten)]
    path: &'a PathResult<String>,
    hops: usize,
}

/// Execute the paths command
pub fn execute(cli: &Cli, graph: &LoadedGraph, source: &str, to: Option<&str>) -> Result<()> {
    let engine = Dijkstra::new(graph);
    let source = source.to_string();

    match to {
        Some(target) => {
            let result = engine.shortest_path(&source, &target.to_string())?;
            output_path(cli, graph, &result)
        }
        None => {
            let paths = engine.find_shortest_paths(&source)?;
            output_all(cli, graph, &paths)
        }
    }
}

fn output_all(cli: &Cli, graph: &LoadedGraph, paths: &ShortestPaths<String>) -> Result<()> {
    let source = paths.source().as_str();

    crate::output_by_format_result!(cli.format,
        json => {
            let nodes = paths
                .iter()
                .map(|(id, entry)| NodeDistance {
                    id,
                    label: graph.node(id).and_then(|n| n.label.as_deref()),
                    distance: entry.distance,
                    predecessor: entry.predecessor.as_deref(),
                    reachable: entry.is_reachable(),
                })
                .collect();
            let output = PathsOutput {
                source,
                kind: graph.kind().to_string(),
                reachable: paths.reachable_count(),
                nodes,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        },
        human => {
            if !cli.quiet {
                println!(
                    "Shortest paths from {} ({} graph, {} of {} reachable)",
                    source,
                    graph.kind(),
                    paths.reachable_count(),
                    paths.len()
                );
            }
            for (id, entry) in paths {
                match (&entry.predecessor, entry.is_reachable()) {
                    (_, false) => println!("  {}: unreachable", id),
                    (None, true) => println!("  {}: {} (source)", id, entry.distance),
                    (Some(pred), true) => println!("  {}: {} via {}", id, entry.distance, pred),
                }
            }
        },
        records => {
            println!(
                "H waypath=1 records=1 mode=paths source={} kind={} nodes={} reachable={}",
                escape_record_value(source),
                graph.kind(),
                paths.len(),
                paths.reachable_count()
            );
            for (id, entry) in paths {
                println!(
                    "N id={} distance={} predecessor={}",
                    escape_record_value(id),
                    entry.distance,
                    entry
                        .predecessor
                        .as_deref()
                        .map_or_else(|| "-".to_string(), escape_record_value)
                );
            }
        }
    )
}

fn output_path(cli: &Cli, graph: &LoadedGraph, result: &PathResult<String>) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output = PathOutput {
                path: result,
                hops: result.hop_count(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H waypath=1 records=1 mode=path source={} target={} kind={} found={} distance={} hops={}",
                escape_record_value(&result.source),
                escape_record_value(&result.target),
                graph.kind(),
                result.found,
                result.distance,
                result.hop_count()
            );
            for (index, id) in result.nodes.iter().enumerate() {
                println!("P index={} id={}", index, escape_record_value(id));
            }
        }
        OutputFormat::Human => {
            if result.found {
                println!("{}", result.nodes.join(" -> "));
                if !cli.quiet {
                    println!(
                        "distance {} over {} hop(s)",
                        result.distance,
                        result.hop_count()
                    );
                }
            } else {
                println!("No path from {} to {}", result.source, result.target);
            }
        }
    }
    Ok(())
}

//! CLI argument parsing for waypath
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod output;
pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;
use parse::parse_output_format;

/// Waypath - shortest paths over weighted graphs
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json or records
    #[arg(long, global = true, value_parser = parse_output_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging and phase timing
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `waypath_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Graph document selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph document (.toml, .json, .yaml or .yml)
    #[arg(long, short, env = "WAYPATH_GRAPH")]
    pub graph: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute shortest paths from a source node
    Paths {
        #[command(flatten)]
        graph: GraphArgs,

        /// Source node id
        source: String,

        /// Only report the path to this node
        #[arg(long)]
        to: Option<String>,
    },

    /// List the one-hop neighbors of a node
    Neighbors {
        #[command(flatten)]
        graph: GraphArgs,

        /// Node id
        node: String,
    },

    /// Load a graph document and report its size
    Validate {
        #[command(flatten)]
        graph: GraphArgs,
    },
}

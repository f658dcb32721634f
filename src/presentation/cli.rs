//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --verbose, --config) are inherited by all
//! subcommands. Running without a subcommand renders the tree.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::ResourceKind;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// fluxtree - Flux dependency tree with health status
#[derive(Parser, Debug)]
#[command(name = "fluxtree")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'fluxtree' without arguments to render the tree for flux-system.")]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of fluxtree.toml / ~/.config/fluxtree/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the dependency tree (default)
    Tree(TreeArgs),

    /// Show version and environment information
    Version,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeArgs {
    /// Read a captured snapshot (JSON or YAML) instead of calling kubectl; '-' for stdin
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Namespace to query
    #[arg(short, long, conflicts_with = "all_namespaces")]
    pub namespace: Option<String>,

    /// Query every namespace; names become namespace/name
    #[arg(short = 'A', long)]
    pub all_namespaces: bool,

    /// Kubeconfig context
    #[arg(long)]
    pub context: Option<String>,

    /// Flux resource kind to list
    #[arg(long, value_enum)]
    pub kind: Option<ResourceKind>,

    /// Show status messages of unhealthy nodes
    #[arg(long)]
    pub messages: bool,

    /// Hide nodes whose dependencies are all missing
    #[arg(long)]
    pub no_detached: bool,
}

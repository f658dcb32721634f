//! fluxtree CLI - dependency-aware status tree for Flux
//!
//! Usage: fluxtree [--json] [--color <WHEN>] [-v...] [COMMAND]
//!
//! Commands:
//!   tree     Render the dependency tree (default)
//!   version  Show version and environment information

mod commands;

use clap::Parser;

use fluxtree::logging::init_logging;
use fluxtree::presentation::{Cli, ColorWhen, Commands, TreeArgs};
use fluxtree::ui::error::{is_broken_pipe, print_error};

fn main() {
    let cli = Cli::parse();

    let ansi_logs = cli.color != Some(ColorWhen::Never) && std::env::var_os("NO_COLOR").is_none();
    init_logging(cli.verbose, ansi_logs);

    let json = cli.json;
    if let Err(err) = run(cli) {
        // The reader went away (`| head`); the output it wanted was written.
        if is_broken_pipe(&err) {
            return;
        }
        print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        None => commands::tree::cmd_tree(
            &TreeArgs::default(),
            config_path,
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Some(Commands::Tree(args)) => {
            commands::tree::cmd_tree(&args, config_path, cli.json, cli.verbose, cli.color)
        }
        Some(Commands::Version) => commands::version::cmd_version(config_path, cli.json),
    }
}

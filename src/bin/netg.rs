//! CLI entry point for the `netg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use networkg::cli::commands;
use networkg::{checked_size, parse_delimiter, GraphResult, DEFAULT_DELIMITER};

#[derive(Parser)]
#[command(
    name = "netg",
    about = "networkg CLI — build adjacency-list graphs from edge lists"
)]
struct Cli {
    /// Output format for `info` and `neighbors`: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that imports an edge list.
#[derive(Args)]
struct ImportArgs {
    /// Path to the edge-list file
    file: PathBuf,
    /// Number of nodes in the graph
    #[arg(long, allow_negative_numbers = true)]
    size: i64,
    /// Single ASCII character separating the two node indices [default: ,]
    #[arg(long)]
    delimiter: Option<String>,
}

impl ImportArgs {
    fn resolve(&self) -> GraphResult<(usize, u8)> {
        let delimiter = match &self.delimiter {
            Some(d) => parse_delimiter(d)?,
            None => DEFAULT_DELIMITER,
        };
        Ok((checked_size(self.size)?, delimiter))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display summary statistics for an edge-list file
    Info {
        #[command(flatten)]
        import: ImportArgs,
    },
    /// Import an edge-list file and print its adjacency lists as JSON
    Import {
        #[command(flatten)]
        import: ImportArgs,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print a fully connected graph as JSON
    Complete {
        /// Number of nodes
        #[arg(allow_negative_numbers = true)]
        size: i64,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the neighbors of one node
    Neighbors {
        #[command(flatten)]
        import: ImportArgs,
        /// Node index
        node: usize,
    },
}

fn run(command: Commands, json: bool) -> GraphResult<()> {
    match command {
        Commands::Info { import } => {
            let (size, delimiter) = import.resolve()?;
            commands::cmd_info(&import.file, size, delimiter, json)
        }
        Commands::Import { import, pretty } => {
            let (size, delimiter) = import.resolve()?;
            commands::cmd_import(&import.file, size, delimiter, pretty)
        }
        Commands::Complete { size, pretty } => commands::cmd_complete(checked_size(size)?, pretty),
        Commands::Neighbors { import, node } => {
            let (size, delimiter) = import.resolve()?;
            commands::cmd_neighbors(&import.file, size, delimiter, node, json)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(cli.command, json) {
        eprintln!("Error: {}", e);
        process::exit(commands::exit_code(&e));
    }
}

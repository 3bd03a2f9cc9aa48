//! hops CLI - hop distances and shortest paths between labelled nodes
//!
//! Loads a directed edge list and a label file, then answers "how many links
//! separate A from B" and "which links lead from A to B", either one query at
//! a time or in an interactive shell.

use clap::{Parser, Subcommand};
use hops_core::{IntegrityPolicy, LabelCase};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::shell::ShellOptions;
use commands::DataSource;
use config::{HopsConfig, QueryMode, UnknownLabelPolicy};
use output::OutputFormat;

/// Hop distances and shortest paths over a directed edge list.
#[derive(Parser)]
#[command(name = "hops")]
#[command(version)]
#[command(about = "Hop distances and shortest paths over a directed edge list")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  hops steps alice bob          How many links from alice to bob?
  hops path rust python         Which pages lead from rust to python?
  hops shell --mode path        Ask repeatedly (default when no command is given)
  hops info                     Dataset size and dead ends")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Edge list file: one `source target` pair per line
    #[arg(long, global = true, env = "HOPS_EDGES")]
    edges: Option<PathBuf>,

    /// Label file: one `node label` pair per line
    #[arg(long, global = true, env = "HOPS_LABELS")]
    labels: Option<PathBuf>,

    /// Refuse to start if the edge list references unlabelled nodes
    #[arg(long, global = true)]
    strict: bool,

    /// Match labels exactly instead of lower-casing input
    #[arg(long, global = true)]
    keep_case: bool,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the hops from one label to another
    #[command(visible_alias = "s")]
    Steps {
        /// Source label
        from: String,

        /// Target label
        to: String,
    },

    /// Show one shortest path from one label to another
    #[command(visible_alias = "p")]
    Path {
        /// Source label
        from: String,

        /// Target label
        to: String,
    },

    /// Interactive loop: read two labels, answer, repeat until end of input
    Shell {
        /// Answer with hop counts or full paths (overrides config)
        #[arg(short, long, value_enum)]
        mode: Option<QueryMode>,

        /// Exit with an error on an unknown label instead of asking again
        #[arg(long)]
        exit_on_unknown: bool,
    },

    /// Show dataset statistics
    Info,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .hopsrc.toml
    let config = HopsConfig::load(std::path::Path::new("."));

    // Resolve output format: CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| config.output_format());

    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let source = DataSource {
        edges: cli.edges.unwrap_or_else(|| config.edges_path()),
        labels: cli.labels.unwrap_or_else(|| config.labels_path()),
        integrity: if cli.strict || config.strict() {
            IntegrityPolicy::Strict
        } else {
            IntegrityPolicy::Warn
        },
        case: if cli.keep_case || !config.lowercase_input() {
            LabelCase::Exact
        } else {
            LabelCase::Insensitive
        },
    };

    // With no command, behave like the classic tool: an endless prompt loop.
    let command = cli.command.unwrap_or(Commands::Shell {
        mode: None,
        exit_on_unknown: false,
    });

    match command {
        Commands::Steps { from, to } => commands::steps::run(&source, &from, &to, format),
        Commands::Path { from, to } => commands::path::run(&source, &from, &to, format),
        Commands::Shell {
            mode,
            exit_on_unknown,
        } => {
            let options = ShellOptions {
                mode: mode.unwrap_or_else(|| config.default_mode()),
                on_unknown: if exit_on_unknown {
                    UnknownLabelPolicy::Exit
                } else {
                    config.unknown_label_policy()
                },
                format,
            };
            commands::shell::run(&source, &options)
        }
        Commands::Info => commands::info::run(&source, format),
    }
}

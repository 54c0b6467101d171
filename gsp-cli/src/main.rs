//! GSP CLI - Command-line interface for graph signal processing
//!
//! Generates random connected weighted graphs, transforms node signals into the
//! Laplacian eigenbasis and back, and applies vertex-domain and spectral filters.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::generate::MatrixKind;
use commands::{Context, GraphArgs, SignalArgs};
use config::GspConfig;
use gsp_core::FilterKind;
use output::{OutputConfig, OutputFormat};

/// Graph signal processing on random weighted graphs.
///
/// Signals live on graph vertices. The graph Laplacian's eigenvectors form a
/// Fourier basis, and filters act on vertex values or on the transformed signal.
#[derive(Parser)]
#[command(name = "gsp")]
#[command(author, version)]
#[command(about = "Graph signal processing on random weighted graphs")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  gsp demo --seed 42                  Full pipeline on a 7-node graph
  gsp generate -n 10 --matrix laplacian
  gsp spectrum --signal 1,2,3,4,5,6,7
  gsp filter low-pass --seed 7 --normalize
  gsp export -o graph.dot             Graphviz rendering of the graph")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Decimal places for table output
    #[arg(long, global = true, default_value = "4")]
    precision: usize,

    /// Compact output (minified JSON, borderless tables)
    #[arg(long, global = true)]
    compact: bool,

    /// Show detailed version information
    #[arg(long = "version-verbose")]
    version_verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: graph, matrices, transform, every filter
    Demo {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        signal: SignalArgs,
    },

    /// Generate a random connected graph and show it
    #[command(visible_alias = "gen")]
    Generate {
        #[command(flatten)]
        graph: GraphArgs,

        /// Show a derived matrix instead of the adjacency list
        #[arg(short, long, value_enum)]
        matrix: Option<MatrixKind>,
    },

    /// Laplacian eigenvalues, plus the transformed signal if one is given
    Spectrum {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        signal: SignalArgs,
    },

    /// Apply a filter: laplacian, high-pass, low-pass or fourier
    Filter {
        /// Filter to apply
        kind: FilterKind,

        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        signal: SignalArgs,
    },

    /// Export the graph as Graphviz DOT, or the signal as CSV
    Export {
        #[command(flatten)]
        graph: GraphArgs,

        #[command(flatten)]
        signal: SignalArgs,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Graph name in the DOT header
        #[arg(long, default_value = "gsp")]
        name: String,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug,gsp_core=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Print verbose version information
fn print_verbose_version() {
    use colored::Colorize;

    let cli_version = env!("CARGO_PKG_VERSION");
    let platform = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    println!("gsp {}", cli_version);
    println!("  {:<10} {}", "gsp-cli:".cyan(), cli_version);
    println!("  {:<10} {}", "gsp-core:".cyan(), gsp_core::version());
    println!("  {:<10} {}", "Platform:".cyan(), platform);
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version_verbose {
        print_verbose_version();
        return Ok(());
    }

    setup_logging(cli.verbose, cli.quiet);

    let config = GspConfig::load(std::path::Path::new("."));

    // CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    let mut output = OutputConfig::auto_detect(format).with_precision(cli.precision);
    if let Some(use_color) = config.use_color() {
        output.no_color = !use_color;
    }
    if output.no_color {
        colored::control::set_override(false);
    }
    if cli.compact {
        output = output.compact();
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    let ctx = Context { config, output };

    match command {
        Commands::Demo { graph, signal } => commands::demo::run(&ctx, &graph, &signal),
        Commands::Generate { graph, matrix } => commands::generate::run(&ctx, &graph, matrix),
        Commands::Spectrum { graph, signal } => commands::spectrum::run(&ctx, &graph, &signal),
        Commands::Filter {
            kind,
            graph,
            signal,
        } => commands::filter::run(&ctx, kind, &graph, &signal),
        Commands::Export {
            graph,
            signal,
            output,
            name,
        } => commands::export::run(&ctx, &graph, &signal, output.as_deref(), &name),
    }
}

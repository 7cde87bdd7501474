use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wikigraph::{ConfigLoader, ExplorerView, Theme};

#[derive(Parser)]
#[command(name = "wikigraph")]
#[command(
    version,
    about = "Diagram-to-graph conversion and layout pipeline for AI-generated codebase wikis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, help = "Config file to use instead of the resolution chain")]
    config: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline over fragment files and print a positioned graph
    Layout {
        #[arg(required = true, help = "Fragment JSON files (object or array per file)")]
        inputs: Vec<PathBuf>,
        #[arg(long, help = "Inclusive depth ceiling (omit for no limit)")]
        max_depth: Option<u32>,
        #[arg(long, help = "View: architecture, dataflow, dependencies")]
        view: Option<ExplorerView>,
        #[arg(long, help = "Theme: light, dark")]
        theme: Option<Theme>,
        #[arg(long, help = "Pretty-print the JSON output")]
        pretty: bool,
    },

    /// Derive the simple-view source for a fragment or raw mermaid file
    Simplify {
        #[arg(help = "Fragment JSON file or raw mermaid file")]
        input: PathBuf,
        #[arg(long, help = "Build the neighborhood sub-diagram of this node instead")]
        focus: Option<String>,
    },

    /// Extract structured diagram blocks from a wiki page
    Extract {
        #[arg(help = "Wiki page markdown file")]
        page: PathBuf,
        #[arg(long, help = "Pretty-print the JSON output")]
        pretty: bool,
    },

    /// Print a per-node category/depth summary of merged fragments
    Inspect {
        #[arg(required = true, help = "Fragment JSON files")]
        inputs: Vec<PathBuf>,
        #[arg(long, help = "Inclusive depth ceiling (omit for no limit)")]
        max_depth: Option<u32>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("✗ {}", err);
            return ExitCode::FAILURE;
        }
    };

    let level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.log.level.clone()
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match cli.command {
        Commands::Layout {
            inputs,
            max_depth,
            view,
            theme,
            pretty,
        } => wikigraph::cli::commands::layout::run(
            &inputs,
            max_depth.or(config.explorer.max_depth),
            view.unwrap_or(config.explorer.view),
            theme.unwrap_or(config.explorer.theme),
            pretty,
        ),
        Commands::Simplify { input, focus } => {
            wikigraph::cli::commands::simplify::run(&input, focus.as_deref())
        }
        Commands::Extract { page, pretty } => {
            wikigraph::cli::commands::extract::run(&page, pretty)
        }
        Commands::Inspect { inputs, max_depth } => wikigraph::cli::commands::inspect::run(
            &inputs,
            max_depth.or(config.explorer.max_depth),
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("✗ {}", err);
            ExitCode::FAILURE
        }
    }
}

//! # ewik CLI
//!
//! Command-line interface for the ewik static wiki generator.

mod commands;
mod generator;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ewik")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate _config.json, the directory structure and static files
    Init {
        /// Wiki directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Render every page, the stylesheet and the script bundle
    Build {
        /// Wiki directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Rebuild on changes to _config.json and markdown pages in _pages/
    Watch {
        /// Wiki directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// Search page names the way the landing page does
    Search {
        /// Fragment of a page name
        query: String,

        /// Wiki directory
        #[arg(long, default_value = ".")]
        path: PathBuf,

        /// Maximum results to return
        #[arg(long, default_value_t = 10)]
        limit: usize,

        /// Return JSON for machine consumption
        #[arg(long)]
        json: bool,
    },
}

fn wiki_root(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `search --json` output stays clean.
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => commands::init_wiki(&wiki_root(path)),
        Commands::Build { path } => commands::build_wiki(&wiki_root(path)).map(|_| ()),
        Commands::Watch { path } => commands::watch_wiki(&wiki_root(path)).await,
        Commands::Search {
            query,
            path,
            limit,
            json,
        } => commands::search_wiki(&path, &query, commands::SearchOptions { limit, json }),
    }
}

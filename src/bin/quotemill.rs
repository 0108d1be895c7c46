//! Quotemill CLI — builds the quote dataset behind the viewer.
//!
//! Usage:
//!   quotemill fetch [--config path] [--dataset path]
//!   quotemill vault [--books dir] [--config path] [--dataset path]

use clap::{Parser, Subcommand};
use quotemill::config::SourceConfig;
use quotemill::pipeline::{self, RunSummary};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "quotemill",
    version,
    about = "Quote dataset builder: wiki and API scraping plus notes-vault extraction"
)]
struct Cli {
    /// Path to the source configuration file
    #[arg(long, global = true, default_value = "config/sources.json")]
    config: PathBuf,

    /// Path to the dataset file
    #[arg(long, global = true, default_value = "data/quotes.json")]
    dataset: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch from the wiki and tag APIs, appending new quotes
    Fetch,
    /// Rebuild the dataset from the notes vault, replacing the file
    Vault {
        /// Notes directory (overrides booksPath from the config)
        #[arg(long)]
        books: Option<PathBuf>,
    },
}

fn print_summary(summary: RunSummary) {
    println!(
        "Done. Added {} new quotes. Total dataset: {} quotes.",
        summary.added, summary.total
    );
}

async fn cmd_fetch(config_path: &PathBuf, dataset_path: &PathBuf) -> i32 {
    let config = match SourceConfig::load(config_path) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {}", error);
            return 1;
        }
    };
    match pipeline::run_fetch(&config, dataset_path).await {
        Ok(summary) => {
            print_summary(summary);
            0
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            1
        }
    }
}

async fn cmd_vault(
    books: Option<PathBuf>,
    config_path: &PathBuf,
    dataset_path: &PathBuf,
) -> i32 {
    let books = match books {
        Some(path) => Some(path),
        // The config is only consulted when --books is absent; a missing
        // config file is fatal in that case only.
        None => match SourceConfig::load(config_path) {
            Ok(config) => config.books_path,
            Err(error) => {
                eprintln!("Error: {}", error);
                return 1;
            }
        },
    };
    let Some(books) = books else {
        eprintln!("Error: {}", pipeline::PipelineError::MissingBooksPath);
        return 1;
    };
    match pipeline::run_vault(&books, dataset_path).await {
        Ok(summary) => {
            print_summary(summary);
            0
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            1
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Fetch => cmd_fetch(&cli.config, &cli.dataset).await,
        Commands::Vault { books } => cmd_vault(books, &cli.config, &cli.dataset).await,
    };
    std::process::exit(code);
}

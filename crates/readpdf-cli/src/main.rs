//! CLI application for reading PDFs as page-marked text, TOC-like pages,
//! caption candidates and search matches.

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, config, pages, search, text, truncate, Context};

/// read-pdf - Read PDFs page by page within a token budget
#[derive(Parser)]
#[command(name = "read-pdf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Token budget for stdout (0 disables truncation; default from config)
    #[arg(long, global = true, allow_negative_numbers = true)]
    max_output_tokens: Option<i64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print page text with page markers
    Text(text::TextArgs),

    /// Find TOC-like, table or chart candidate pages
    Pages(pages::PagesArgs),

    /// Search page text with a regular expression
    Search(search::SearchArgs),

    /// Truncate a text file to a token budget
    Truncate(truncate::TruncateArgs),

    /// Find TOC-like pages in multiple files
    Batch(batch::BatchArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Set up logging based on verbosity; stdout carries only results
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    let load = || Context::load(config_path, cli.max_output_tokens);

    match cli.command {
        Commands::Text(args) => text::run(args, &load()?).await,
        Commands::Pages(args) => pages::run(args, &load()?).await.map(|()| ExitCode::SUCCESS),
        Commands::Search(args) => search::run(args, &load()?).await.map(|()| ExitCode::SUCCESS),
        Commands::Truncate(args) => truncate::run(args, &load()?).await.map(|()| ExitCode::SUCCESS),
        Commands::Batch(args) => batch::run(args, &load()?).await.map(|()| ExitCode::SUCCESS),
        Commands::Config(args) => config::run(args, config_path).await.map(|()| ExitCode::SUCCESS),
    }
}

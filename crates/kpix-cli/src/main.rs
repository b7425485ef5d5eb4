//! CLI for extracting and comparing KPIs of dental-practice insurance offers.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, compare, config, extract, letter};

/// kpix - Compare a current insurance policy with a new offer
#[derive(Parser)]
#[command(name = "kpix")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the current policy with a new offer
    Compare(compare::CompareArgs),

    /// Extract KPIs from a single document
    Extract(extract::ExtractArgs),

    /// Write the customer letter for a new offer
    Letter(letter::LetterArgs),

    /// Extract KPIs from many documents into one CSV
    Batch(batch::BatchArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Logs go to stderr so reports can be piped
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Compare(args) => compare::run(args, config_path),
        Commands::Extract(args) => extract::run(args, config_path),
        Commands::Letter(args) => letter::run(args, config_path),
        Commands::Batch(args) => batch::run(args, config_path),
        Commands::Config(args) => config::run(args, config_path),
    }
}

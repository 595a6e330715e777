mod collect;
mod export;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "vegscan")]
#[command(about = "Collect plant-based product listings and export them to a spreadsheet")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Paginate the listing grid and write the products JSON file
    Collect {
        /// Stop once this many products have been collected
        limit: Option<usize>,
    },
    /// Convert the products JSON file into a spreadsheet
    Export,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = vegscan_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Collect { limit } => collect::run_collect(&config, limit).await?,
        Commands::Export => export::run_export(&config),
    }

    Ok(())
}

#[cfg(test)]
mod tests;

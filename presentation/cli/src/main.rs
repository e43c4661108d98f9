use clap::Parser;
use dotenvy::dotenv;

mod args;
mod commands;
mod setup;

use args::{Cli, Command};
use persistence::backend::Repositories;
use setup::Services;

/// PharmaCompare CLI entry point
///
/// Picks the storage backend, wires the use cases and runs one command.
/// Errors end the process with a non-zero status.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    dotenv().ok();
    let cli = Cli::parse();

    // inspect never touches storage
    if let Command::Inspect { file } = &cli.command {
        return commands::import::inspect(file).await;
    }

    let storage = setup::storage_config(cli.local_store)?;
    tracing::info!("Using {}", storage.describe());
    let repositories = Repositories::connect(&storage).await?;
    let services = Services::new(repositories, cli.batch_size.max(1));

    match cli.command {
        Command::ImportPrices { file, distributor } => {
            commands::import::import_prices(&services, &file, distributor).await
        }
        Command::ImportCatalog { file } => commands::import::import_catalog(&services, &file).await,
        Command::Inspect { file } => commands::import::inspect(&file).await,
        Command::Check => commands::check::check(&services).await,
        Command::Export { format, output } => {
            commands::backup::export(&services, format, output).await
        }
        Command::Restore { file } => commands::backup::restore(&services, &file).await,
        Command::Clear { yes } => commands::backup::clear(&services, yes).await,
    }
}

//! Phonebook Server - HTTP API over the in-memory address book

use clap::Parser;
use server::{Cli, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // File and environment first, flags on top
    let config = ServerConfig::load()?.with_cli(&cli);

    server::start_server(config).await?;

    Ok(())
}

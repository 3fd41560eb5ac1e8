use anyhow::{Context, Result};
use clap::Parser;
use eth_sweeper::config::Cli;
use eth_sweeper::credentials;
use eth_sweeper::scanner::Scanner;
use tokio::sync::watch;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Decode every key up front: a malformed credential aborts before any
    // network activity. The key text itself is never echoed.
    let mut identities = Vec::new();
    for (i, key) in cli.private_keys.iter().enumerate() {
        let identity = credentials::decode_key(key)
            .with_context(|| format!("invalid private key at position {i}"))?;
        identities.push(identity);
    }

    let options = cli.into_options()?;
    info!("Configuration loaded");
    info!(
        "RPC URLs: {} endpoint(s), {} account(s), {} contract(s)",
        options.rpc_urls.len(),
        identities.len(),
        options.contract_addresses.len()
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, finishing current step before exit");
            let _ = shutdown_tx.send(true);
        }
    });

    let scanner = Scanner::new(options, identities, shutdown_rx);
    if let Err(e) = scanner.run().await {
        error!("Scanner error: {}", e);
        return Err(e);
    }

    Ok(())
}

//! SnipMatch Server - HTTP REST API for batch snippet scoring
//!
//! This binary serves the scoring engine over REST with structured logging
//! and graceful shutdown.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env before reading configuration
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}

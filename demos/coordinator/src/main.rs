//! Standalone coordinator binary.
//!
//! Runs a relay coordinator on the given address (default
//! `127.0.0.1:8080`). Log verbosity follows `RUST_LOG`, e.g.
//! `RUST_LOG=chessrelay=debug cargo run -p coordinator`.

use chessrelay::CoordinatorServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:8080".to_string());

    let server = CoordinatorServer::builder().bind(&addr).build().await?;
    tracing::info!(addr = %server.local_addr()?, "coordinator listening");
    server.run().await?;
    Ok(())
}

//! `CoordinatorServer` builder and accept loop.
//!
//! This is the entry point for running a chessrelay coordinator. It
//! ties together the layers: transport → protocol → relay.

use std::sync::Arc;

use chessrelay_protocol::JsonCodec;
use chessrelay_room::Relay;
use chessrelay_transport::{Transport, WebSocketTransport};
use tokio::sync::Mutex;

use crate::handler::handle_connection;
use crate::RelayError;

/// Shared server state passed to each connection handler task.
///
/// Wrapped in `Arc` so it can be cheaply cloned across tasks. The
/// relay sits behind a mutex; every relay operation is synchronous, so
/// the lock is held only for map updates, never across network I/O.
pub(crate) struct ServerState {
    pub(crate) relay: Mutex<Relay>,
    pub(crate) codec: JsonCodec,
}

/// Builder for configuring and starting a coordinator.
///
/// # Example
///
/// ```rust,ignore
/// use chessrelay::CoordinatorServer;
///
/// let server = CoordinatorServer::builder()
///     .bind("0.0.0.0:8080")
///     .build()
///     .await?;
/// server.run().await
/// ```
pub struct CoordinatorServerBuilder {
    bind_addr: String,
}

impl CoordinatorServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
        }
    }

    /// Sets the address to bind the coordinator to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Binds the listener and builds the server.
    pub async fn build(self) -> Result<CoordinatorServer, RelayError> {
        let transport = WebSocketTransport::bind(&self.bind_addr).await?;
        let state = Arc::new(ServerState {
            relay: Mutex::new(Relay::new()),
            codec: JsonCodec,
        });
        Ok(CoordinatorServer { transport, state })
    }
}

impl Default for CoordinatorServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A running coordinator.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct CoordinatorServer {
    transport: WebSocketTransport,
    state: Arc<ServerState>,
}

impl CoordinatorServer {
    /// Creates a new builder.
    pub fn builder() -> CoordinatorServerBuilder {
        CoordinatorServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.transport.local_addr()
    }

    /// Runs the accept loop: one handler task per connection, until
    /// the process is terminated.
    pub async fn run(mut self) -> Result<(), RelayError> {
        tracing::info!("coordinator running");

        loop {
            match self.transport.accept().await {
                Ok(conn) => {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(conn, state).await {
                            tracing::debug!(
                                error = %e,
                                "connection ended with error"
                            );
                        }
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }
    }
}

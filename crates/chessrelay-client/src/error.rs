//! Error types for the session client.

use chessrelay_protocol::ProtocolError;
use chessrelay_transport::TransportError;

/// Errors that can occur in the session client core.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A join was attempted before the transport was established.
    #[error("not connected to a coordinator")]
    NotConnected,

    /// A relayed move was rejected by the local rules engine: the two
    /// participants' positions have diverged. There is no automatic
    /// recovery — the user must rejoin to resynchronize.
    #[error("desynchronized from peer: {0}")]
    Desynchronized(String),

    /// The coordinator sent a position the rules engine refused to load.
    #[error("could not load assigned position {0:?}")]
    BadPosition(String),

    /// A protocol-level error (empty room id, encode failure).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A transport-level error (connect, send, receive).
    #[error(transparent)]
    Transport(#[from] TransportError),
}

//! WebSocket transport implementation using `tokio-tungstenite`.
//!
//! One implementation serves both ends: the coordinator accepts
//! connections through [`WebSocketTransport`], the session client dials
//! out through [`connect`], and both sides talk through
//! [`WebSocketConnection`].
//!
//! Frames are sent as WebSocket *text* (the protocol payloads are JSON
//! and browser clients expect text); inbound text and binary frames are
//! both accepted.

use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;
use tokio_tungstenite::tungstenite::Message as WsFrame;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use crate::{Connection, ConnectionId, Transport, TransportError};

/// Counter for generating unique connection IDs, shared by accepted
/// and dialed connections.
static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

fn next_connection_id() -> ConnectionId {
    ConnectionId::new(NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed))
}

/// An accepted (coordinator-side) connection.
pub type WsServerConnection = WebSocketConnection<TcpStream>;

/// A dialed (client-side) connection.
pub type WsClientConnection =
    WebSocketConnection<MaybeTlsStream<TcpStream>>;

// ---------------------------------------------------------------------------
// Listening side
// ---------------------------------------------------------------------------

/// A WebSocket [`Transport`] that listens for incoming connections.
pub struct WebSocketTransport {
    listener: TcpListener,
}

impl WebSocketTransport {
    /// Binds a new WebSocket transport to the given address.
    ///
    /// # Errors
    /// Returns [`TransportError::AcceptFailed`] if the address cannot
    /// be bound.
    pub async fn bind(addr: &str) -> Result<Self, TransportError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(TransportError::AcceptFailed)?;
        tracing::info!(addr, "WebSocket transport listening");
        Ok(Self { listener })
    }

    /// Returns the local address the listener is bound to. Needed when
    /// binding to port 0 (tests, ephemeral deployments).
    pub fn local_addr(&self) -> io::Result<std::net::SocketAddr> {
        self.listener.local_addr()
    }
}

impl Transport for WebSocketTransport {
    type Connection = WsServerConnection;
    type Error = TransportError;

    async fn accept(&mut self) -> Result<Self::Connection, Self::Error> {
        let (stream, addr) = self
            .listener
            .accept()
            .await
            .map_err(TransportError::AcceptFailed)?;

        let ws = tokio_tungstenite::accept_async(stream)
            .await
            .map_err(|e| {
                TransportError::AcceptFailed(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    e,
                ))
            })?;

        let conn = WebSocketConnection::new(ws);
        tracing::debug!(id = %conn.id(), %addr, "accepted WebSocket connection");
        Ok(conn)
    }
}

// ---------------------------------------------------------------------------
// Dialing side
// ---------------------------------------------------------------------------

/// Dials the coordinator at the given `ws://` / `wss://` URL.
///
/// # Errors
/// Returns [`TransportError::ConnectFailed`] if the handshake fails.
pub async fn connect(url: &str) -> Result<WsClientConnection, TransportError> {
    let (ws, _response) = tokio_tungstenite::connect_async(url)
        .await
        .map_err(|e| {
            TransportError::ConnectFailed(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                e,
            ))
        })?;
    let conn = WebSocketConnection::new(ws);
    tracing::debug!(id = %conn.id(), url, "connected to coordinator");
    Ok(conn)
}

// ---------------------------------------------------------------------------
// Connection
// ---------------------------------------------------------------------------

/// A single WebSocket connection, usable from either end.
///
/// The underlying stream is split into independent reader and writer
/// halves so that one task can sit in `recv()` while another sends —
/// the coordinator's per-connection writer pump depends on this (a
/// single mutex around the whole stream would let a blocked read
/// starve every send).
///
/// Cloning shares both halves; `send`/`recv` from multiple clones
/// serialize through the half's own lock.
pub struct WebSocketConnection<S> {
    id: ConnectionId,
    writer: Arc<Mutex<SplitSink<WebSocketStream<S>, WsFrame>>>,
    reader: Arc<Mutex<SplitStream<WebSocketStream<S>>>>,
}

impl<S> Clone for WebSocketConnection<S> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            writer: Arc::clone(&self.writer),
            reader: Arc::clone(&self.reader),
        }
    }
}

impl<S> WebSocketConnection<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    fn new(ws: WebSocketStream<S>) -> Self {
        let (writer, reader) = ws.split();
        Self {
            id: next_connection_id(),
            writer: Arc::new(Mutex::new(writer)),
            reader: Arc::new(Mutex::new(reader)),
        }
    }
}

impl<S> Connection for WebSocketConnection<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
{
    type Error = TransportError;

    async fn send(&self, data: &[u8]) -> Result<(), Self::Error> {
        let text = String::from_utf8_lossy(data).into_owned();
        self.writer
            .lock()
            .await
            .send(WsFrame::Text(text.into()))
            .await
            .map_err(|e| {
                TransportError::SendFailed(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    e,
                ))
            })
    }

    async fn recv(&self) -> Result<Option<Vec<u8>>, Self::Error> {
        loop {
            let frame = self.reader.lock().await.next().await;
            match frame {
                Some(Ok(WsFrame::Text(text))) => {
                    return Ok(Some(text.as_bytes().to_vec()));
                }
                Some(Ok(WsFrame::Binary(data))) => {
                    return Ok(Some(data.into()));
                }
                Some(Ok(WsFrame::Close(_))) | None => return Ok(None),
                Some(Ok(_)) => continue, // ping/pong/raw frame
                Some(Err(e)) => {
                    return Err(TransportError::ReceiveFailed(
                        io::Error::new(io::ErrorKind::ConnectionReset, e),
                    ));
                }
            }
        }
    }

    async fn close(&self) -> Result<(), Self::Error> {
        self.writer.lock().await.close().await.map_err(|e| {
            TransportError::SendFailed(io::Error::new(
                io::ErrorKind::BrokenPipe,
                e,
            ))
        })
    }

    fn id(&self) -> ConnectionId {
        self.id
    }
}

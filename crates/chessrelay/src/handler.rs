//! Per-connection handler: message routing between one socket and the
//! relay.
//!
//! Each accepted connection gets its own Tokio task running this
//! handler, plus a writer pump task. The pump exists because the relay
//! delivers to members through channels while holding its lock —
//! handing the bytes to a channel instead of awaiting a socket write
//! keeps lock hold times bounded and lets a slow reader lag without
//! stalling its opponent's handler.

use std::sync::Arc;

use chessrelay_protocol::{Codec, Message};
use chessrelay_transport::{Connection, WsServerConnection};
use tokio::sync::mpsc;

use crate::server::ServerState;
use crate::RelayError;

/// Handles a single connection from accept to close.
pub(crate) async fn handle_connection(
    conn: WsServerConnection,
    state: Arc<ServerState>,
) -> Result<(), RelayError> {
    let conn_id = conn.id();
    tracing::debug!(id = %conn_id, "handling new connection");

    // Everything the relay (or this handler) wants delivered to this
    // client goes through the pump.
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    let pump = {
        let conn = conn.clone();
        let codec = state.codec;
        tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                let bytes = match codec.encode(&msg) {
                    Ok(b) => b,
                    Err(e) => {
                        tracing::error!(id = %conn_id, error = %e, "encode failed");
                        continue;
                    }
                };
                if let Err(e) = conn.send(&bytes).await {
                    tracing::debug!(id = %conn_id, error = %e, "send failed, stopping pump");
                    break;
                }
            }
        })
    };

    let result = read_loop(&conn, &state, &tx).await;

    // Unseat the connection whichever way the loop ended; the peer
    // gets its disconnect notice through the relay.
    state.relay.lock().await.disconnect(conn_id);

    drop(tx); // pump drains what is queued, then exits
    let _ = pump.await;
    let _ = conn.close().await;
    tracing::debug!(id = %conn_id, "connection handler done");
    result
}

/// Receives and dispatches frames until the connection closes.
async fn read_loop(
    conn: &WsServerConnection,
    state: &Arc<ServerState>,
    tx: &mpsc::UnboundedSender<Message>,
) -> Result<(), RelayError> {
    let conn_id = conn.id();

    loop {
        let data = match conn.recv().await {
            Ok(Some(data)) => data,
            Ok(None) => {
                tracing::info!(id = %conn_id, "connection closed cleanly");
                return Ok(());
            }
            Err(e) => {
                tracing::debug!(id = %conn_id, error = %e, "recv error");
                return Err(e.into());
            }
        };

        let msg = match state.codec.decode(&data) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(id = %conn_id, error = %e, "malformed frame");
                reply_error(tx, "malformed message");
                continue;
            }
        };

        match msg {
            Message::Join { room_id, player_id } => {
                let result = state.relay.lock().await.join(
                    conn_id,
                    room_id,
                    player_id,
                    tx.clone(),
                );
                // A full room is answered, not fatal: the client stays
                // connected and may try another room name.
                if let Err(e) = result {
                    reply_error(tx, &e.to_string());
                }
            }
            msg @ Message::Move { .. } => {
                let result =
                    state.relay.lock().await.relay_move(conn_id, &msg);
                if let Err(e) = result {
                    tracing::debug!(id = %conn_id, error = %e, "move before join");
                    reply_error(tx, &e.to_string());
                }
            }
            // Coordinator-to-client kinds arriving inbound, or kinds
            // this build doesn't know: drop them.
            other => {
                tracing::debug!(id = %conn_id, ?other, "ignoring unexpected message");
            }
        }
    }
}

/// Queues an `error` message for the client. Non-fatal by contract —
/// the connection stays up.
fn reply_error(tx: &mpsc::UnboundedSender<Message>, message: &str) {
    let _ = tx.send(Message::Error {
        message: message.to_string(),
    });
}

//! Error types for room operations.

use chessrelay_protocol::RoomId;
use chessrelay_transport::ConnectionId;

/// Errors from room pairing and relay operations.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// Both seats are taken and the joiner is not a returning member.
    #[error("room {0} is full")]
    RoomFull(RoomId),

    /// The connection has not joined any room yet.
    #[error("connection {0} is not in a room")]
    NotInRoom(ConnectionId),
}

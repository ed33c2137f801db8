//! Unified error type for the chessrelay meta-crate.

use chessrelay_client::ClientError;
use chessrelay_protocol::ProtocolError;
use chessrelay_room::RoomError;
use chessrelay_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `chessrelay` meta-crate, you deal with this single
/// error type instead of importing errors from each sub-crate.
/// The `#[from]` attribute on each variant auto-generates `From` impls,
/// so the `?` operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// A transport-level error (bind, accept, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode, invalid field).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A room-level error (full, not joined).
    #[error(transparent)]
    Room(#[from] RoomError),

    /// A session-client error (desync, bad position, not connected).
    #[error(transparent)]
    Client(#[from] ClientError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessrelay_protocol::RoomId;
    use chessrelay_transport::ConnectionId;

    #[test]
    fn test_from_protocol_error() {
        let err: RelayError = ProtocolError::EmptyRoomId.into();
        assert!(matches!(err, RelayError::Protocol(_)));
    }

    #[test]
    fn test_from_room_error() {
        let err: RelayError =
            RoomError::RoomFull(RoomId::new("r1").unwrap()).into();
        assert!(matches!(err, RelayError::Room(_)));
        assert!(err.to_string().contains("r1"));
    }

    #[test]
    fn test_from_client_error() {
        let err: RelayError = ClientError::NotConnected.into();
        assert!(matches!(err, RelayError::Client(_)));
    }

    #[test]
    fn test_room_error_message_passthrough() {
        let err: RelayError =
            RoomError::NotInRoom(ConnectionId::new(3)).into();
        assert_eq!(err.to_string(), "connection conn-3 is not in a room");
    }
}

//! Codec seam between [`Message`] values and raw frame bytes.
//!
//! The rest of the system never calls `serde_json` directly — it goes
//! through the [`Codec`] trait, so a binary encoding could be swapped
//! in later without touching the controller or the coordinator.

use crate::{Message, ProtocolError};

/// Encodes and decodes wire messages.
///
/// `Send + Sync + 'static` because a codec is shared by the coordinator
/// across connection handler tasks.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a message into frame bytes.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Encode`] if serialization fails.
    fn encode(&self, msg: &Message) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes frame bytes into a message.
    ///
    /// Total over well-formed input: an unrecognized message kind
    /// decodes to [`Message::Unknown`] rather than erroring.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Decode`] if the bytes are malformed or
    /// a known kind is missing required fields.
    fn decode(&self, data: &[u8]) -> Result<Message, ProtocolError>;
}

/// A [`Codec`] producing human-readable JSON frames.
///
/// JSON keeps the wire inspectable in browser dev tools and logs, and
/// matches what non-Rust clients of the relay speak. Behind the `json`
/// feature flag (enabled by default).
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode(&self, msg: &Message) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(msg).map_err(ProtocolError::Encode)
    }

    fn decode(&self, data: &[u8]) -> Result<Message, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use crate::{PlayerId, RoomId};

    #[test]
    fn test_json_codec_round_trip() {
        let codec = JsonCodec;
        let msg = Message::Join {
            room_id: RoomId::new("r1").unwrap(),
            player_id: PlayerId::new("p1"),
        };

        let bytes = codec.encode(&msg).unwrap();
        let decoded = codec.decode(&bytes).unwrap();

        assert_eq!(msg, decoded);
    }

    #[test]
    fn test_json_codec_decode_garbage_returns_error() {
        let codec = JsonCodec;
        let result = codec.decode(b"not json at all");
        assert!(matches!(result, Err(ProtocolError::Decode(_))));
    }

    #[test]
    fn test_json_codec_decode_unknown_kind_is_not_an_error() {
        let codec = JsonCodec;
        let msg = codec
            .decode(br#"{"type":"resign","playerId":"p1"}"#)
            .unwrap();
        assert_eq!(msg, Message::Unknown);
    }
}

//! Error types for the protocol layer.
//!
//! Each chessrelay crate defines its own error enum; a `ProtocolError`
//! always means "the bytes or the message were wrong", never a network
//! or session problem.

/// Errors that can occur while constructing or (de)serializing wire
/// messages.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization failed.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed: malformed JSON, missing required fields,
    /// or wrong field types. Unknown message *kinds* are not a decode
    /// error — they decode to `Message::Unknown`.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// A room id was empty (or whitespace-only). Rejected locally,
    /// before anything is sent.
    #[error("room id must not be empty")]
    EmptyRoomId,

    /// A square name was not of the form `[a-h][1-8]`.
    #[error("invalid square {0:?}")]
    InvalidSquare(String),
}

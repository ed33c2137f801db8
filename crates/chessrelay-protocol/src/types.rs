//! Core protocol types for chessrelay's wire format.
//!
//! Every type here is part of the wire contract: it gets serialized to
//! JSON, relayed through the coordinator, and deserialized by the peer.
//! The field names and tag values are fixed — a renamed field is a
//! protocol break, so the serde attributes below are load-bearing.

use serde::{Deserialize, Serialize};

use std::fmt;

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// An opaque participant identity token.
///
/// Generated once per client process (see the client crate's identity
/// module) and attached to every relayed move. Its only job is echo
/// recognition: a client that receives a `move` carrying its own token
/// knows the message is a reflection of a move it already applied.
///
/// `#[serde(transparent)]` keeps the wire form a plain JSON string,
/// so `PlayerId("ab12".into())` serializes as `"ab12"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wraps a raw token. No format is enforced — the token is opaque.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An opaque, user-supplied room name.
///
/// Two participants are in the same session iff they joined with the
/// same room id. The only validation is non-emptiness; everything else
/// is up to the users agreeing on a name out of band.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    /// Creates a room id from user input, trimming surrounding
    /// whitespace.
    ///
    /// # Errors
    /// Returns [`ProtocolError::EmptyRoomId`] when the input is empty
    /// or whitespace-only.
    pub fn new(raw: &str) -> Result<Self, ProtocolError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ProtocolError::EmptyRoomId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the room name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Board vocabulary
// ---------------------------------------------------------------------------

/// One of the two sides of the board.
///
/// Wire form is lowercase (`"white"` / `"black"`), matching the
/// `playerColor` field the coordinator sends on assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// A board square in algebraic notation, e.g. `"e4"`.
///
/// Validated on construction *and* on decode
/// (`#[serde(try_from = "String")]`), so a `Square` in hand is always a
/// well-formed file/rank pair. Malformed squares in an inbound message
/// surface as a decode error instead of flowing into the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square(String);

impl Square {
    /// Parses an algebraic square name (`[a-h][1-8]`, lowercase).
    ///
    /// # Errors
    /// Returns [`ProtocolError::InvalidSquare`] for anything else.
    pub fn new(raw: &str) -> Result<Self, ProtocolError> {
        let bytes = raw.as_bytes();
        let ok = bytes.len() == 2
            && (b'a'..=b'h').contains(&bytes[0])
            && (b'1'..=b'8').contains(&bytes[1]);
        if !ok {
            return Err(ProtocolError::InvalidSquare(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns the square name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Square {
    type Error = ProtocolError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A piece kind a pawn can promote to.
///
/// Wire form is the single-letter code used by the standard move
/// notation (`"q"`, `"r"`, `"b"`, `"n"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PieceKind {
    #[serde(rename = "q")]
    Queen,
    #[serde(rename = "r")]
    Rook,
    #[serde(rename = "b")]
    Bishop,
    #[serde(rename = "n")]
    Knight,
}

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

/// A single move, carrying enough information for the remote peer's
/// rules engine to reapply it deterministically from the same preceding
/// position.
///
/// `promotion` is omitted from the wire entirely when absent, and extra
/// fields a richer rules engine may attach (SAN text, capture flags)
/// are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a move without a promotion.
    pub fn plain(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)?;
        if let Some(p) = self.promotion {
            write!(f, "={p:?}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Message — the wire union
// ---------------------------------------------------------------------------

/// Every message on the wire, discriminated by a `"type"` tag.
///
/// The tag values and field names are the protocol: `join` and `move`
/// flow client → coordinator (`move` is relayed back out verbatim),
/// `gameState`, `status` and `error` flow coordinator → client.
///
/// The `Unknown` catch-all (`#[serde(other)]`) makes decoding total
/// over well-formed JSON: a message kind this build doesn't know about
/// decodes successfully and is dropped by the receiver instead of
/// killing the connection. That is the forward-compatibility story —
/// new message kinds can ship without breaking old clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Message {
    /// Request to enter (or create) a room.
    #[serde(rename = "join", rename_all = "camelCase")]
    Join { room_id: RoomId, player_id: PlayerId },

    /// Authoritative seat (and optionally position) assignment.
    ///
    /// `fen` absent means "the canonical starting position".
    #[serde(rename = "gameState", rename_all = "camelCase")]
    GameState {
        player_color: Side,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fen: Option<String>,
    },

    /// A single applied move, tagged with its originator.
    #[serde(rename = "move", rename_all = "camelCase")]
    Move {
        room_id: RoomId,
        player_id: PlayerId,
        #[serde(rename = "move")]
        mv: Move,
    },

    /// Informational text from the coordinator.
    #[serde(rename = "status")]
    Status { message: String },

    /// A recoverable problem, surfaced to the user verbatim.
    #[serde(rename = "error")]
    Error { message: String },

    /// Any message kind this build does not recognize. Treated as a
    /// no-op by every receiver.
    #[serde(other)]
    Unknown,
}

// =========================================================================
// Tests
// =========================================================================

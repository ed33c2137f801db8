//! Wire protocol for chessrelay.
//!
//! This crate defines the "language" that session clients and the
//! coordinator speak:
//!
//! - **Types** ([`Message`], [`Move`], [`Side`], [`Square`], etc.) —
//!   the structures that travel on the wire.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how those messages
//!   are converted to/from bytes.
//! - **Errors** ([`ProtocolError`]) — what can go wrong during
//!   encoding/decoding.
//!
//! # Architecture
//!
//! The protocol layer sits between transport (raw frames) and the
//! synchronization layers on either end. It knows nothing about
//! connections, rooms, or chess rules — only how to turn messages
//! into bytes and back.
//!
//! ```text
//! Transport (bytes) → Protocol (Message) → Controller / Relay
//! ```

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{Message, Move, PieceKind, PlayerId, RoomId, Side, Square};

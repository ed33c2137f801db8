//! Room pairing and relay for the chessrelay coordinator.
//!
//! The coordinator's server-side model is deliberately thin: a
//! [`Room`] is at most two seated members, and the [`Relay`] maps room
//! names to rooms, pairs joiners (first gets White, second Black), and
//! forwards `move` messages verbatim between members. No game rules
//! run here — move legality is entirely the clients' business, which
//! keeps the coordinator oblivious to chess and therefore reusable for
//! any two-seat turn game speaking the same envelope.

mod error;
mod relay;
mod room;

pub use error::RoomError;
pub use relay::Relay;
pub use room::{Member, MemberSender, Room};

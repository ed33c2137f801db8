//! Session client core for chessrelay.
//!
//! This crate is the synchronization side of a two-player session: it
//! decides when a local move attempt is allowed, keeps the local seat
//! and position consistent with what the coordinator assigns, and
//! relays accepted moves while discarding echoes of its own.
//!
//! # Components
//!
//! ```text
//! presentation surface ──→ Turn Gate ──→ rules engine ──→ SessionState
//!                                                             │
//!                     Effects/RenderView ←── SyncController ──┴─→ outbound Message
//! ```
//!
//! - [`identity`] — per-process participant token generation
//! - [`gate`] — the pure turn-ownership policy
//! - [`SessionState`] — room, seat, and rules-engine ownership
//! - [`SyncController`] — the deterministic event core: every entry
//!   point returns a [`Step`] (outbound messages + UI effects), so the
//!   whole protocol is testable without a transport or a renderer
//! - [`SessionClient`] — the async driver that wires a controller to a
//!   live WebSocket connection
//!
//! The controller is strictly single-threaded: one event (gesture or
//! inbound frame) is processed to completion before the next, and
//! nothing else ever mutates [`SessionState`].

mod client;
mod controller;
mod error;
pub mod gate;
pub mod identity;
mod state;

pub use client::{SessionClient, UiEvent};
pub use controller::{
    ControllerConfig, Effect, MoveAttempt, Orientation, Phase, RenderView,
    Step, SyncController, TurnIndicator,
};
pub use error::ClientError;
pub use state::{Seat, SessionState};

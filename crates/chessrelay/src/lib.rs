//! # chessrelay
//!
//! Two-player chess session synchronization over a relay coordinator.
//!
//! Two clients agree on a room name out of band, connect to the
//! coordinator, and join. The coordinator seats them (first White,
//! second Black) and from then on forwards their moves verbatim — it
//! never runs chess rules. Each client applies its own moves locally,
//! applies the peer's relayed moves, and suppresses echoes of its own,
//! so both boards stay converged as long as both rules engines agree.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chessrelay::CoordinatorServer;
//!
//! # async fn run() -> Result<(), chessrelay::RelayError> {
//! let server = CoordinatorServer::builder()
//!     .bind("0.0.0.0:8080")
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```
//!
//! The client side lives in [`chessrelay_client`]: plug a
//! [`RulesEngine`](chessrelay_rules::RulesEngine) into a
//! [`SessionClient`](chessrelay_client::SessionClient) and drive it
//! with UI events.

mod error;
mod handler;
mod server;

pub use error::RelayError;
pub use server::{CoordinatorServer, CoordinatorServerBuilder};

/// One-stop imports for coordinator and client code.
pub mod prelude {
    pub use crate::{CoordinatorServer, CoordinatorServerBuilder, RelayError};
    pub use chessrelay_client::{
        MoveAttempt, SessionClient, SyncController, UiEvent,
    };
    pub use chessrelay_protocol::{
        Codec, JsonCodec, Message, Move, PieceKind, PlayerId, RoomId, Side,
        Square,
    };
    pub use chessrelay_room::Relay;
    pub use chessrelay_rules::RulesEngine;
}

//! Session state: the single source of truth for "am I allowed to act
//! now", owned exclusively by the controller.

use chessrelay_protocol::{Move, RoomId, Side};
use chessrelay_rules::RulesEngine;

use crate::ClientError;

// ---------------------------------------------------------------------------
// Seat
// ---------------------------------------------------------------------------

/// The client's assigned side in the current session.
///
/// `Unassigned` between a join and the coordinator's `gameState`
/// answer. Only an inbound `gameState` ever sets a side — the client
/// never self-assigns — and every (re)join resets back to `Unassigned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    White,
    Black,
    Unassigned,
}

impl Seat {
    /// Returns the assigned side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Self::White => Some(Side::White),
            Self::Black => Some(Side::Black),
            Self::Unassigned => None,
        }
    }

    /// Returns `true` once a side has been assigned.
    pub fn is_assigned(self) -> bool {
        !matches!(self, Self::Unassigned)
    }
}

impl From<Side> for Seat {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Self::White,
            Side::Black => Self::Black,
        }
    }
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Room, seat, and the rules-engine position for one session.
///
/// Session-scoped: everything here is reset by [`start_join`]
/// (`Self::start_join`), and at most one room is active at a time —
/// joining a new room unconditionally supersedes the old one.
///
/// The engine is private; callers go through the delegation methods so
/// that nothing outside this type can advance the position without the
/// state seeing it.
#[derive(Debug)]
pub struct SessionState<R: RulesEngine> {
    room: Option<RoomId>,
    seat: Seat,
    engine: R,
}

impl<R: RulesEngine> SessionState<R> {
    /// Wraps a rules engine with no room joined and no seat assigned.
    pub fn new(engine: R) -> Self {
        Self {
            room: None,
            seat: Seat::Unassigned,
            engine,
        }
    }

    /// Returns the active room, if any.
    pub fn room(&self) -> Option<&RoomId> {
        self.room.as_ref()
    }

    /// Returns the current seat.
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Returns the engine's current position string.
    pub fn position(&self) -> String {
        self.engine.position()
    }

    /// Returns the side whose turn it is, per the rules engine.
    pub fn side_to_move(&self) -> Side {
        self.engine.turn_to_move()
    }

    /// Returns `true` once the rules engine reports the game over.
    pub fn is_terminal(&self) -> bool {
        self.engine.is_terminal()
    }

    /// Begins joining a room: clears the seat, resets the engine to
    /// the starting position, and records the room id.
    ///
    /// Always a full reset — re-joining the same room carries nothing
    /// over, because the coordinator is the sole authority on resuming
    /// mid-game state.
    pub fn start_join(&mut self, room: RoomId) {
        self.seat = Seat::Unassigned;
        self.engine.reset();
        self.room = Some(room);
    }

    /// Applies an authoritative seat (and optional position) from the
    /// coordinator's `gameState`.
    ///
    /// # Errors
    /// Returns [`ClientError::BadPosition`] if the engine cannot load
    /// the supplied position; the error is surfaced, never absorbed.
    pub fn apply_assignment(
        &mut self,
        side: Side,
        position: Option<&str>,
    ) -> Result<(), ClientError> {
        match position {
            Some(fen) => {
                if !self.engine.load(fen) {
                    return Err(ClientError::BadPosition(fen.to_string()));
                }
            }
            None => self.engine.reset(),
        }
        self.seat = side.into();
        Ok(())
    }

    /// Applies a move attempted locally. `None` means the engine
    /// rejected it and nothing changed.
    pub fn apply_local_move(&mut self, mv: &Move) -> Option<Move> {
        self.engine.apply_move(mv)
    }

    /// Applies a move relayed from the peer.
    ///
    /// # Errors
    /// Returns [`ClientError::Desynchronized`] if the engine rejects
    /// it — the peer's position has diverged from ours, and silently
    /// dropping the move would leave both clients permanently split
    /// with no recovery signal.
    pub fn apply_remote_move(&mut self, mv: &Move) -> Result<Move, ClientError> {
        self.engine
            .apply_move(mv)
            .ok_or_else(|| ClientError::Desynchronized(format!("remote move {mv} is illegal here")))
    }
}

// =========================================================================
// Tests
// =========================================================================

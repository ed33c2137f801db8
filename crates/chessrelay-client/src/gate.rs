//! The turn gate: the pure policy deciding whether a local action is
//! currently permitted.
//!
//! This exists to centralize turn legality in one place, independent
//! of whatever gesture semantics the presentation surface has. It
//! holds no state of its own and has no side effects — the decision is
//! a function of [`SessionState`] and the side owning the touched
//! piece, nothing else.

use chessrelay_protocol::Side;
use chessrelay_rules::RulesEngine;

use crate::SessionState;

/// Why a local action was denied.
///
/// The variants are ordered: evaluation stops at the first rule that
/// matches, so e.g. a finished game always reports [`Denial::GameOver`]
/// even when it isn't the client's turn either.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// The rules engine reports the game has ended; nothing further is
    /// accepted regardless of seat or turn.
    GameOver,
    /// No seat assigned yet — there is no pairing to synchronize
    /// against.
    NoSeat,
    /// It is the other side's turn.
    NotYourTurn,
    /// The touched piece belongs to the opponent. Denied even on one's
    /// own turn, so a mis-bound interaction surface cannot drive the
    /// rules engine with the wrong side's pieces.
    NotYourPiece,
}

/// Evaluates the gate policy, first match wins. `None` means the
/// action is permitted.
pub fn deny_reason<R: RulesEngine>(
    state: &SessionState<R>,
    piece_owner: Side,
) -> Option<Denial> {
    if state.is_terminal() {
        return Some(Denial::GameOver);
    }
    let seat = match state.seat().side() {
        Some(side) => side,
        None => return Some(Denial::NoSeat),
    };
    if state.side_to_move() != seat {
        return Some(Denial::NotYourTurn);
    }
    if piece_owner != seat {
        return Some(Denial::NotYourPiece);
    }
    None
}

/// Boolean view of [`deny_reason`].
pub fn can_act<R: RulesEngine>(
    state: &SessionState<R>,
    piece_owner: Side,
) -> bool {
    deny_reason(state, piece_owner).is_none()
}

// =========================================================================
// Tests
// =========================================================================

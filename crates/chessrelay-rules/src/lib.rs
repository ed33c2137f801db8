//! The rules-engine seam for chessrelay.
//!
//! Move legality, position bookkeeping, and game termination are *not*
//! this project's problem — they belong to an external rules engine
//! (chess.js in the browser client, or any Rust chess crate). What this
//! crate owns is the [`RulesEngine`] trait: the exact surface the
//! synchronization core needs from such an engine, and nothing more.
//!
//! # Why a trait?
//!
//! The session client is generic over `R: RulesEngine`, which keeps the
//! synchronization logic testable with a scripted engine (see
//! [`fake::ScriptedEngine`]) and lets a real chess implementation drop
//! in without the controller changing.

pub mod fake;

use chessrelay_protocol::{Move, Side};

/// The canonical chess starting position in FEN.
///
/// Used whenever a `gameState` assignment arrives without a position,
/// and on every (re)join reset.
pub const START_POSITION: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// The surface the synchronization core requires from a rules engine.
///
/// An implementation owns the authoritative local position. The
/// controller never inspects the position beyond the opaque string —
/// it only needs accept/reject decisions, the side to move, and
/// terminality.
pub trait RulesEngine: Send + 'static {
    /// Attempts to apply a move to the current position.
    ///
    /// Returns the applied move (the engine may normalize it, e.g.
    /// fill in capture details) or `None` if the move is illegal in
    /// the current position. A `None` never mutates the position.
    fn apply_move(&mut self, mv: &Move) -> Option<Move>;

    /// Returns the current position as a FEN-style string.
    fn position(&self) -> String;

    /// Returns `true` once the game has ended (mate, stalemate, draw).
    fn is_terminal(&self) -> bool;

    /// Returns the side whose turn it currently is.
    fn turn_to_move(&self) -> Side;

    /// Resets the engine to the canonical starting position.
    fn reset(&mut self);

    /// Loads an arbitrary position, replacing the current one.
    ///
    /// Returns `false` (leaving the position unchanged) if the engine
    /// cannot parse the input.
    fn load(&mut self, position: &str) -> bool;
}

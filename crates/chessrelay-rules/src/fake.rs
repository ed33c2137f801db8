//! A scripted [`RulesEngine`] for development and tests.
//!
//! [`ScriptedEngine`] does not know chess. It accepts any move (minus
//! an explicit forbid-list), alternates the side to move, and derives
//! its "position" string from the loaded base position plus the exact
//! sequence of applied moves. Two engines that start from the same
//! base and apply the same move sequence therefore report identical
//! positions — which is precisely the property the synchronization
//! tests need to observe, without dragging a real chess crate into the
//! workspace.

use std::collections::HashSet;

use chessrelay_protocol::{Move, Side};

use crate::{RulesEngine, START_POSITION};

/// A deterministic, non-chess-playing rules engine.
#[derive(Debug, Clone)]
pub struct ScriptedEngine {
    /// The position loaded via `load`/`reset`; applied moves append to it.
    base: String,
    /// Moves applied since the last load, in order.
    applied: Vec<Move>,
    turn: Side,
    /// (from, to) pairs the engine will reject as illegal.
    forbidden: HashSet<(String, String)>,
    /// When set, the game is terminal once this many moves are applied.
    terminal_after: Option<usize>,
}

impl ScriptedEngine {
    /// Creates an engine at the canonical starting position.
    pub fn new() -> Self {
        Self {
            base: START_POSITION.to_string(),
            applied: Vec::new(),
            turn: Side::White,
            forbidden: HashSet::new(),
            terminal_after: None,
        }
    }

    /// Marks a (from, to) pair as illegal. Used by tests to script a
    /// rejection without modelling actual chess rules.
    pub fn forbid(&mut self, from: &str, to: &str) {
        self.forbidden.insert((from.to_string(), to.to_string()));
    }

    /// Declares the game over after `n` applied moves.
    pub fn end_after(&mut self, n: usize) {
        self.terminal_after = Some(n);
    }

    /// Returns how many moves have been applied since the last load.
    pub fn move_count(&self) -> usize {
        self.applied.len()
    }

    fn side_from_fen(position: &str) -> Side {
        // Field two of a FEN record is the side to move.
        match position.split_whitespace().nth(1) {
            Some("b") => Side::Black,
            _ => Side::White,
        }
    }
}

impl Default for ScriptedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine for ScriptedEngine {
    fn apply_move(&mut self, mv: &Move) -> Option<Move> {
        if self.is_terminal() {
            return None;
        }
        let key = (mv.from.as_str().to_string(), mv.to.as_str().to_string());
        if self.forbidden.contains(&key) {
            return None;
        }
        self.applied.push(mv.clone());
        self.turn = self.turn.opponent();
        Some(mv.clone())
    }

    fn position(&self) -> String {
        if self.applied.is_empty() {
            return self.base.clone();
        }
        let trail: Vec<String> = self
            .applied
            .iter()
            .map(|m| format!("{}{}", m.from, m.to))
            .collect();
        format!("{}#{}", self.base, trail.join(","))
    }

    fn is_terminal(&self) -> bool {
        self.terminal_after
            .is_some_and(|n| self.applied.len() >= n)
    }

    fn turn_to_move(&self) -> Side {
        self.turn
    }

    fn reset(&mut self) {
        self.base = START_POSITION.to_string();
        self.applied.clear();
        self.turn = Side::White;
    }

    fn load(&mut self, position: &str) -> bool {
        if position.trim().is_empty() {
            return false;
        }
        self.base = position.to_string();
        self.applied.clear();
        self.turn = Self::side_from_fen(position);
        true
    }
}

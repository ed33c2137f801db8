//! The synchronization controller: the event-driven core of a session
//! client.
//!
//! The controller reacts to exactly two event sources — local move
//! attempts from the presentation surface and inbound frames from the
//! transport — and answers each with a [`Step`]: the messages to send
//! and the UI effects to apply. It is the *only* component that
//! mutates [`SessionState`], and it is fully synchronous, so every
//! behavior in this file is testable by feeding it events and
//! asserting on the returned steps.
//!
//! # Session phases
//!
//! ```text
//! Disconnected ──connected()──→ Idle ──join()──→ AwaitingAssignment
//!                                                      │ gameState
//!                                                      ▼
//!                         Finished ←──terminal──── Active ⟲ moves
//! ```
//!
//! A fresh `join()` re-enters `AwaitingAssignment` from any connected
//! phase; inbound `error` messages never change phase.

use chessrelay_protocol::{
    Codec, JsonCodec, Message, Move, PieceKind, PlayerId, RoomId, Side,
    Square,
};
use chessrelay_rules::RulesEngine;

use std::fmt;

use crate::{gate, identity, ClientError, Seat, SessionState};

// ---------------------------------------------------------------------------
// Events in
// ---------------------------------------------------------------------------

/// A candidate move reported by the presentation surface.
///
/// `piece_owner` is the side owning the dragged piece — the surface
/// knows it from the piece glyph, and the turn gate uses it to stop a
/// player from moving the opponent's pieces on their own turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveAttempt {
    pub from: Square,
    pub to: Square,
    pub piece_owner: Side,
    /// Chosen promotion piece, if the surface offers a choice.
    /// `None` falls back to [`ControllerConfig::default_promotion`].
    pub promotion: Option<PieceKind>,
}

// ---------------------------------------------------------------------------
// Effects out
// ---------------------------------------------------------------------------

/// Which side sits at the bottom of the rendered board.
///
/// Derived absolutely from the seat on every render (Black seat →
/// Black at the bottom), never toggled — so a repeated identical
/// assignment cannot flip the board twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    White,
    Black,
}

/// What the turn indicator should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnIndicator {
    /// No seat assigned yet.
    Waiting,
    /// It is this client's turn, playing the named side.
    YourTurn(Side),
    /// The opponent is to move, playing the named side.
    OpponentTurn(Side),
}

impl fmt::Display for TurnIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waiting => write!(f, "Waiting for game to start..."),
            Self::YourTurn(side) => write!(f, "Your turn ({side})"),
            Self::OpponentTurn(side) => write!(f, "Opponent's turn ({side})"),
        }
    }
}

/// The complete presentation projection of the session state.
///
/// Recomputed after every state transition and handed to the surface
/// as one value, so the surface never reads protocol state piecemeal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderView {
    pub position: String,
    pub orientation: Orientation,
    pub indicator: TurnIndicator,
}

/// A UI effect requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Redraw from this projection.
    Render(RenderView),
    /// Revert the attempted move visually; nothing changed.
    Snapback,
    /// Non-blocking informational notice (status/error messages from
    /// the coordinator).
    Notify(String),
    /// Hard, user-visible failure: the peers' positions diverged and
    /// only a fresh join will resynchronize.
    Desync(String),
}

/// The deterministic result of handling one event: messages to put on
/// the wire and effects for the presentation surface, in order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Step {
    pub outbound: Vec<Message>,
    pub effects: Vec<Effect>,
}

impl Step {
    /// A step that sends nothing and changes nothing.
    pub fn noop() -> Self {
        Self::default()
    }

    fn effects(effects: Vec<Effect>) -> Self {
        Self {
            outbound: Vec::new(),
            effects,
        }
    }
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Where the client session currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No transport yet.
    Disconnected,
    /// Connected, no room joined.
    Idle,
    /// Join sent, waiting for the coordinator's `gameState`.
    AwaitingAssignment,
    /// Seat assigned, game in progress.
    Active,
    /// The rules engine reported a terminal position; only a fresh
    /// join leaves this phase.
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disconnected => "Disconnected",
            Self::Idle => "Idle",
            Self::AwaitingAssignment => "AwaitingAssignment",
            Self::Active => "Active",
            Self::Finished => "Finished",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Controller tuning.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Promotion piece used when a move attempt does not specify one.
    /// Queen by default; exposing the choice here keeps under-promotion
    /// possible without a protocol change.
    pub default_promotion: PieceKind,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            default_promotion: PieceKind::Queen,
        }
    }
}

// ---------------------------------------------------------------------------
// SyncController
// ---------------------------------------------------------------------------

/// The event-driven synchronization core for one client session.
///
/// Owns the [`SessionState`] exclusively. Constructed once per
/// connection; a fresh identity token is generated at construction and
/// kept for the controller's lifetime.
pub struct SyncController<R: RulesEngine, C: Codec = JsonCodec> {
    identity: PlayerId,
    phase: Phase,
    state: SessionState<R>,
    config: ControllerConfig,
    codec: C,
}

impl<R: RulesEngine> SyncController<R, JsonCodec> {
    /// Creates a controller around the given rules engine, with a
    /// fresh identity, default config, and the JSON codec.
    pub fn new(engine: R) -> Self {
        Self::with_codec(engine, JsonCodec, ControllerConfig::default())
    }
}

impl<R: RulesEngine, C: Codec> SyncController<R, C> {
    /// Creates a controller with an explicit codec and config.
    pub fn with_codec(engine: R, codec: C, config: ControllerConfig) -> Self {
        Self {
            identity: identity::generate(),
            phase: Phase::Disconnected,
            state: SessionState::new(engine),
            config,
            codec,
        }
    }

    /// This client's participant identity token.
    pub fn identity(&self) -> &PlayerId {
        &self.identity
    }

    /// The current session phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Read access to the session state (tests, status displays).
    pub fn session(&self) -> &SessionState<R> {
        &self.state
    }

    /// The codec shared with the driver for outbound encoding.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Transport established: Disconnected → Idle.
    pub fn connected(&mut self) -> Step {
        if self.phase == Phase::Disconnected {
            self.phase = Phase::Idle;
        }
        Step::effects(vec![Effect::Render(self.render())])
    }

    /// The user asked to join a room.
    ///
    /// Validates the room name locally — an empty name is rejected
    /// before anything is sent — then fully resets session state and
    /// emits the `join` message. Legal from any connected phase.
    ///
    /// # Errors
    /// [`ClientError::NotConnected`] before the transport is up, or
    /// [`ProtocolError::EmptyRoomId`](chessrelay_protocol::ProtocolError::EmptyRoomId)
    /// wrapped in [`ClientError::Protocol`] for an empty name.
    pub fn join(&mut self, raw_room: &str) -> Result<Step, ClientError> {
        if self.phase == Phase::Disconnected {
            return Err(ClientError::NotConnected);
        }
        let room = RoomId::new(raw_room)?;
        tracing::info!(%room, "joining room");

        self.state.start_join(room.clone());
        self.phase = Phase::AwaitingAssignment;

        Ok(Step {
            outbound: vec![Message::Join {
                room_id: room,
                player_id: self.identity.clone(),
            }],
            effects: vec![Effect::Render(self.render())],
        })
    }

    /// The presentation surface reported a move attempt.
    ///
    /// Gate first, rules engine second. A denial or rejection produces
    /// only a `Snapback` — nothing is mutated and nothing is relayed.
    /// An accepted move renders the new position and emits the `move`
    /// message tagged with this client's identity and room.
    pub fn local_move(&mut self, attempt: MoveAttempt) -> Step {
        if let Some(denial) = gate::deny_reason(&self.state, attempt.piece_owner) {
            tracing::debug!(?denial, %attempt.from, %attempt.to, "move attempt denied");
            return Step::effects(vec![Effect::Snapback]);
        }

        let mv = Move {
            from: attempt.from,
            to: attempt.to,
            promotion: attempt
                .promotion
                .or(Some(self.config.default_promotion)),
        };

        let Some(applied) = self.state.apply_local_move(&mv) else {
            tracing::debug!(%mv, "rules engine rejected local move");
            return Step::effects(vec![Effect::Snapback]);
        };

        // The gate guarantees a seat, and a seat implies a join, so a
        // missing room here would be a controller bug.
        let Some(room) = self.state.room().cloned() else {
            tracing::warn!(%applied, "accepted move with no active room");
            return Step::effects(vec![Effect::Snapback]);
        };

        self.advance_phase();
        Step {
            outbound: vec![Message::Move {
                room_id: room,
                player_id: self.identity.clone(),
                mv: applied,
            }],
            effects: vec![Effect::Render(self.render())],
        }
    }

    /// An inbound frame arrived from the transport.
    ///
    /// Malformed frames are logged at debug and discarded — they never
    /// tear the session down.
    pub fn handle_frame(&mut self, bytes: &[u8]) -> Step {
        match self.codec.decode(bytes) {
            Ok(msg) => self.handle_message(msg),
            Err(e) => {
                tracing::debug!(error = %e, "discarding malformed frame");
                Step::noop()
            }
        }
    }

    /// Dispatches one decoded message.
    pub fn handle_message(&mut self, msg: Message) -> Step {
        match msg {
            Message::Move { player_id, mv, .. } => {
                self.handle_relayed_move(player_id, mv)
            }
            Message::GameState { player_color, fen } => {
                self.handle_assignment(player_color, fen.as_deref())
            }
            Message::Status { message } => {
                tracing::info!(%message, "coordinator status");
                Step::effects(vec![Effect::Notify(message)])
            }
            Message::Error { message } => {
                // Surfaced verbatim, non-fatal, phase unchanged.
                tracing::warn!(%message, "coordinator error");
                Step::effects(vec![Effect::Notify(message)])
            }
            Message::Join { .. } => {
                tracing::debug!("ignoring join addressed to the coordinator");
                Step::noop()
            }
            Message::Unknown => {
                tracing::debug!("ignoring unknown message kind");
                Step::noop()
            }
        }
    }

    /// The single presentation projection (spec'd render function):
    /// position, absolute orientation, and the derived turn indicator.
    pub fn render(&self) -> RenderView {
        let seat = self.state.seat();
        let orientation = match seat {
            Seat::Black => Orientation::Black,
            _ => Orientation::White,
        };
        let indicator = match seat.side() {
            None => TurnIndicator::Waiting,
            Some(side) => {
                let to_move = self.state.side_to_move();
                if to_move == side {
                    TurnIndicator::YourTurn(side)
                } else {
                    TurnIndicator::OpponentTurn(to_move)
                }
            }
        };
        RenderView {
            position: self.state.position(),
            orientation,
            indicator,
        }
    }

    fn handle_relayed_move(&mut self, origin: PlayerId, mv: Move) -> Step {
        if origin == self.identity {
            // Echo of our own relayed move; we already applied it.
            tracing::debug!(%mv, "suppressing echoed move");
            return Step::noop();
        }

        match self.state.apply_remote_move(&mv) {
            Ok(_) => {
                self.advance_phase();
                Step::effects(vec![Effect::Render(self.render())])
            }
            Err(e) => {
                tracing::error!(%mv, error = %e, "desynchronized from peer");
                Step::effects(vec![Effect::Desync(e.to_string())])
            }
        }
    }

    fn handle_assignment(&mut self, side: Side, fen: Option<&str>) -> Step {
        match self.state.apply_assignment(side, fen) {
            Ok(()) => {
                tracing::info!(%side, "seat assigned");
                self.phase = if self.state.is_terminal() {
                    Phase::Finished
                } else {
                    Phase::Active
                };
                Step::effects(vec![Effect::Render(self.render())])
            }
            Err(e) => {
                tracing::error!(error = %e, "unusable game state from coordinator");
                Step::effects(vec![Effect::Desync(e.to_string())])
            }
        }
    }

    /// Active → Finished once the engine reports a terminal position.
    fn advance_phase(&mut self) {
        if self.state.is_terminal() {
            self.phase = Phase::Finished;
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chessrelay_rules::fake::ScriptedEngine;
    use chessrelay_rules::START_POSITION;

    fn sq(s: &str) -> Square {
        Square::new(s).unwrap()
    }

    fn attempt(from: &str, to: &str, owner: Side) -> MoveAttempt {
        MoveAttempt {
            from: sq(from),
            to: sq(to),
            piece_owner: owner,
            promotion: None,
        }
    }

    /// A controller that has connected, joined `room`, and been
    /// assigned `side`.
    fn active_controller(
        room: &str,
        side: Side,
    ) -> SyncController<ScriptedEngine> {
        let mut c = SyncController::new(ScriptedEngine::new());
        c.connected();
        c.join(room).unwrap();
        c.handle_message(Message::GameState {
            player_color: side,
            fen: None,
        });
        c
    }

    fn render_of(step: &Step) -> &RenderView {
        step.effects
            .iter()
            .find_map(|e| match e {
                Effect::Render(view) => Some(view),
                _ => None,
            })
            .expect("step should render")
    }

    // =====================================================================
    // Phase machine
    // =====================================================================

    #[test]
    fn test_new_controller_is_disconnected() {
        let c = SyncController::new(ScriptedEngine::new());
        assert_eq!(c.phase(), Phase::Disconnected);
    }

    #[test]
    fn test_connected_enters_idle() {
        let mut c = SyncController::new(ScriptedEngine::new());
        c.connected();
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_join_before_connect_is_rejected() {
        let mut c = SyncController::new(ScriptedEngine::new());
        assert!(matches!(c.join("r1"), Err(ClientError::NotConnected)));
    }

    #[test]
    fn test_join_emits_join_message_and_awaits_assignment() {
        let mut c = SyncController::new(ScriptedEngine::new());
        c.connected();

        let step = c.join("r1").unwrap();

        assert_eq!(c.phase(), Phase::AwaitingAssignment);
        assert_eq!(
            step.outbound,
            vec![Message::Join {
                room_id: RoomId::new("r1").unwrap(),
                player_id: c.identity().clone(),
            }]
        );
        assert_eq!(render_of(&step).indicator, TurnIndicator::Waiting);
    }

    #[test]
    fn test_join_empty_room_is_rejected_before_sending() {
        let mut c = SyncController::new(ScriptedEngine::new());
        c.connected();
        assert!(matches!(c.join("   "), Err(ClientError::Protocol(_))));
        assert_eq!(c.phase(), Phase::Idle, "failed join must not change phase");
    }

    #[test]
    fn test_game_state_activates_session() {
        let c = active_controller("r1", Side::White);
        assert_eq!(c.phase(), Phase::Active);
        assert_eq!(c.session().seat(), Seat::White);
    }

    #[test]
    fn test_rejoin_from_active_resets_everything() {
        // A fresh join from any phase re-enters AwaitingAssignment
        // with seat and position fully reset.
        let mut c = active_controller("r1", Side::Black);
        c.join("r1").unwrap();

        assert_eq!(c.phase(), Phase::AwaitingAssignment);
        assert_eq!(c.session().seat(), Seat::Unassigned);
        assert_eq!(c.session().position(), START_POSITION);
    }

    // =====================================================================
    // Local moves
    // =====================================================================

    #[test]
    fn test_local_move_accepted_emits_move_message() {
        let mut c = active_controller("r1", Side::White);

        let step = c.local_move(attempt("e2", "e4", Side::White));

        let Message::Move {
            room_id,
            player_id,
            mv,
        } = &step.outbound[0]
        else {
            panic!("expected a move message, got {:?}", step.outbound);
        };
        assert_eq!(room_id.as_str(), "r1");
        assert_eq!(player_id, c.identity());
        assert_eq!(mv.from.as_str(), "e2");
        assert_eq!(mv.to.as_str(), "e4");
        assert_eq!(
            render_of(&step).indicator,
            TurnIndicator::OpponentTurn(Side::Black)
        );
    }

    #[test]
    fn test_local_move_defaults_promotion_to_queen() {
        let mut c = active_controller("r1", Side::White);
        let step = c.local_move(attempt("e7", "e8", Side::White));
        let Message::Move { mv, .. } = &step.outbound[0] else {
            panic!("expected a move message");
        };
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn test_local_move_respects_configured_promotion() {
        let mut c = SyncController::with_codec(
            ScriptedEngine::new(),
            JsonCodec,
            ControllerConfig {
                default_promotion: PieceKind::Knight,
            },
        );
        c.connected();
        c.join("r1").unwrap();
        c.handle_message(Message::GameState {
            player_color: Side::White,
            fen: None,
        });

        let step = c.local_move(attempt("e7", "e8", Side::White));
        let Message::Move { mv, .. } = &step.outbound[0] else {
            panic!("expected a move message");
        };
        assert_eq!(mv.promotion, Some(PieceKind::Knight));
    }

    #[test]
    fn test_local_move_before_assignment_snaps_back() {
        let mut c = SyncController::new(ScriptedEngine::new());
        c.connected();
        c.join("r1").unwrap();

        let step = c.local_move(attempt("e2", "e4", Side::White));

        assert!(step.outbound.is_empty(), "nothing may be relayed");
        assert_eq!(step.effects, vec![Effect::Snapback]);
        assert_eq!(c.session().position(), START_POSITION);
    }

    #[test]
    fn test_local_move_rejected_by_engine_snaps_back() {
        let mut engine = ScriptedEngine::new();
        engine.forbid("e2", "e5");
        let mut c = SyncController::new(engine);
        c.connected();
        c.join("r1").unwrap();
        c.handle_message(Message::GameState {
            player_color: Side::White,
            fen: None,
        });

        let step = c.local_move(attempt("e2", "e5", Side::White));

        assert!(step.outbound.is_empty(), "rejected moves are never relayed");
        assert_eq!(step.effects, vec![Effect::Snapback]);
    }

    #[test]
    fn test_local_move_to_terminal_position_finishes_session() {
        let mut engine = ScriptedEngine::new();
        engine.end_after(1);
        let mut c = SyncController::new(engine);
        c.connected();
        c.join("r1").unwrap();
        c.handle_message(Message::GameState {
            player_color: Side::White,
            fen: None,
        });

        c.local_move(attempt("e2", "e4", Side::White));

        assert_eq!(c.phase(), Phase::Finished);
        // And the gate now denies everything.
        let step = c.local_move(attempt("d2", "d4", Side::White));
        assert_eq!(step.effects, vec![Effect::Snapback]);
    }

    // =====================================================================
    // Inbound messages
    // =====================================================================

    #[test]
    fn test_echoed_own_move_is_discarded() {
        let mut c = active_controller("r1", Side::White);
        let step = c.local_move(attempt("e2", "e4", Side::White));
        let echo = step.outbound[0].clone();
        let position = c.session().position();

        let echo_step = c.handle_message(echo);

        assert_eq!(echo_step, Step::noop());
        assert_eq!(
            c.session().position(),
            position,
            "echo must not re-apply the move"
        );
    }

    #[test]
    fn test_peer_move_is_applied_and_rendered() {
        let mut c = active_controller("r1", Side::Black);

        let step = c.handle_message(Message::Move {
            room_id: RoomId::new("r1").unwrap(),
            player_id: PlayerId::new("someone-else"),
            mv: Move::plain(sq("e2"), sq("e4")),
        });

        assert_ne!(c.session().position(), START_POSITION);
        assert_eq!(
            render_of(&step).indicator,
            TurnIndicator::YourTurn(Side::Black)
        );
    }

    #[test]
    fn test_illegal_peer_move_surfaces_desync() {
        let mut engine = ScriptedEngine::new();
        engine.forbid("e2", "e5");
        let mut c = SyncController::new(engine);
        c.connected();
        c.join("r1").unwrap();
        c.handle_message(Message::GameState {
            player_color: Side::Black,
            fen: None,
        });

        let step = c.handle_message(Message::Move {
            room_id: RoomId::new("r1").unwrap(),
            player_id: PlayerId::new("someone-else"),
            mv: Move::plain(sq("e2"), sq("e5")),
        });

        assert!(
            matches!(step.effects.as_slice(), [Effect::Desync(_)]),
            "desynchronization must be surfaced, got {:?}",
            step.effects
        );
        assert_eq!(c.phase(), Phase::Active, "controller must not crash out");
    }

    #[test]
    fn test_game_state_black_flips_orientation_absolutely() {
        let mut c = active_controller("r1", Side::Black);
        assert_eq!(c.render().orientation, Orientation::Black);

        // A repeated identical assignment must not flip back.
        c.handle_message(Message::GameState {
            player_color: Side::Black,
            fen: None,
        });
        assert_eq!(c.render().orientation, Orientation::Black);
    }

    #[test]
    fn test_game_state_with_fen_loads_position() {
        let mut c = SyncController::new(ScriptedEngine::new());
        c.connected();
        c.join("r1").unwrap();

        let fen = "8/8/8/8/8/8/8/8 b - - 0 1";
        let step = c.handle_message(Message::GameState {
            player_color: Side::Black,
            fen: Some(fen.into()),
        });

        assert_eq!(c.session().position(), fen);
        assert_eq!(
            render_of(&step).indicator,
            TurnIndicator::YourTurn(Side::Black)
        );
    }

    #[test]
    fn test_status_and_error_notify_without_phase_change() {
        let mut c = active_controller("r1", Side::White);

        let step = c.handle_message(Message::Status {
            message: "opponent joined".into(),
        });
        assert_eq!(step.effects, vec![Effect::Notify("opponent joined".into())]);

        let step = c.handle_message(Message::Error {
            message: "room r2 is full".into(),
        });
        assert_eq!(step.effects, vec![Effect::Notify("room r2 is full".into())]);
        assert_eq!(c.phase(), Phase::Active);
    }

    #[test]
    fn test_unknown_message_is_a_noop() {
        let mut c = active_controller("r1", Side::White);
        let step = c.handle_message(Message::Unknown);
        assert_eq!(step, Step::noop());
        assert_eq!(c.phase(), Phase::Active);
    }

    #[test]
    fn test_malformed_frame_is_discarded() {
        let mut c = active_controller("r1", Side::White);
        let position = c.session().position();

        let step = c.handle_frame(b"}{ definitely not json");

        assert_eq!(step, Step::noop());
        assert_eq!(c.session().position(), position);
        assert_eq!(c.phase(), Phase::Active, "connection is not torn down");
    }

    #[test]
    fn test_handle_frame_decodes_and_applies() {
        let mut c = active_controller("r1", Side::Black);

        let frame = br#"{"type":"move","roomId":"r1","playerId":"peer","move":{"from":"e2","to":"e4"}}"#;
        c.handle_frame(frame);

        assert_ne!(c.session().position(), START_POSITION);
    }

    // =====================================================================
    // Render projection
    // =====================================================================

    #[test]
    fn test_render_waiting_before_assignment() {
        let mut c = SyncController::new(ScriptedEngine::new());
        c.connected();
        let view = c.render();
        assert_eq!(view.indicator, TurnIndicator::Waiting);
        assert_eq!(view.orientation, Orientation::White);
        assert_eq!(view.position, START_POSITION);
    }

    #[test]
    fn test_turn_indicator_display_strings() {
        assert_eq!(
            TurnIndicator::YourTurn(Side::White).to_string(),
            "Your turn (white)"
        );
        assert_eq!(
            TurnIndicator::OpponentTurn(Side::Black).to_string(),
            "Opponent's turn (black)"
        );
        assert_eq!(
            TurnIndicator::Waiting.to_string(),
            "Waiting for game to start..."
        );
    }
}

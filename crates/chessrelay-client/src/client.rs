//! The async driver that binds a [`SyncController`] to a live
//! WebSocket connection.
//!
//! [`SessionClient`] owns the I/O; the controller owns the logic. The
//! driver's whole job is a select loop: UI events in, frames in, and
//! for every [`Step`] the controller returns, encode-and-send the
//! outbound messages and forward the effects to the presentation
//! surface. It adds no decisions of its own, so everything worth
//! testing lives in the controller.

use chessrelay_protocol::Codec;
use chessrelay_rules::RulesEngine;
use chessrelay_transport::{Connection, WsClientConnection};
use tokio::sync::mpsc;

use crate::{
    ClientError, Effect, MoveAttempt, Step, SyncController,
};

/// An action originating from the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Join (or rejoin) the named room.
    Join(String),
    /// A move attempt on the board.
    Move(MoveAttempt),
}

/// A connected session client: one WebSocket connection plus the
/// controller driving it.
pub struct SessionClient<R: RulesEngine> {
    controller: SyncController<R>,
    connection: WsClientConnection,
}

impl<R: RulesEngine> SessionClient<R> {
    /// Dials the coordinator and marks the controller connected.
    ///
    /// # Errors
    /// Returns [`ClientError::Transport`] when the handshake fails.
    pub async fn connect(url: &str, engine: R) -> Result<Self, ClientError> {
        let connection = chessrelay_transport::connect(url).await?;
        let mut controller = SyncController::new(engine);
        controller.connected();
        tracing::info!(player_id = %controller.identity(), url, "session client connected");
        Ok(Self {
            controller,
            connection,
        })
    }

    /// Read access to the controller (phase, identity, render).
    pub fn controller(&self) -> &SyncController<R> {
        &self.controller
    }

    /// Closes the connection. `run` (if active) returns once the
    /// close frame is acknowledged; also usable when `run` was never
    /// started.
    ///
    /// # Errors
    /// Returns [`ClientError::Transport`] if the close frame cannot
    /// be sent.
    pub async fn disconnect(&self) -> Result<(), ClientError> {
        tracing::info!(player_id = %self.controller.identity(), "disconnecting");
        self.connection.close().await?;
        Ok(())
    }

    /// Runs the session until the connection closes or the UI channel
    /// is dropped.
    ///
    /// Effects are pushed to `effects` in the order the controller
    /// produced them; the initial post-connect render is emitted first
    /// so the surface starts from a known view.
    ///
    /// # Errors
    /// Returns the first transport or encode error. Malformed inbound
    /// frames are *not* errors — the controller discards them.
    pub async fn run(
        &mut self,
        mut ui: mpsc::UnboundedReceiver<UiEvent>,
        effects: mpsc::UnboundedSender<Effect>,
    ) -> Result<(), ClientError> {
        self.emit(
            Step {
                outbound: Vec::new(),
                effects: vec![Effect::Render(self.controller.render())],
            },
            &effects,
        )
        .await?;

        loop {
            tokio::select! {
                event = ui.recv() => {
                    let Some(event) = event else {
                        tracing::debug!("UI channel closed, shutting down");
                        self.connection.close().await?;
                        return Ok(());
                    };
                    let step = self.handle_ui_event(event, &effects).await?;
                    self.emit(step, &effects).await?;
                }
                frame = self.connection.recv() => {
                    let Some(bytes) = frame? else {
                        tracing::info!("coordinator closed the connection");
                        return Ok(());
                    };
                    let step = self.controller.handle_frame(&bytes);
                    self.emit(step, &effects).await?;
                }
            }
        }
    }

    async fn handle_ui_event(
        &mut self,
        event: UiEvent,
        effects: &mpsc::UnboundedSender<Effect>,
    ) -> Result<Step, ClientError> {
        match event {
            UiEvent::Join(room) => match self.controller.join(&room) {
                Ok(step) => Ok(step),
                // A bad room name is the user's to fix, not fatal.
                Err(e @ ClientError::Protocol(_)) => {
                    let _ = effects.send(Effect::Notify(e.to_string()));
                    Ok(Step::noop())
                }
                Err(e) => Err(e),
            },
            UiEvent::Move(attempt) => Ok(self.controller.local_move(attempt)),
        }
    }

    /// Sends a step's outbound messages and forwards its effects.
    async fn emit(
        &self,
        step: Step,
        effects: &mpsc::UnboundedSender<Effect>,
    ) -> Result<(), ClientError> {
        for msg in &step.outbound {
            let bytes = self.controller.codec().encode(msg)?;
            self.connection.send(&bytes).await?;
        }
        for effect in step.effects {
            if effects.send(effect).is_err() {
                tracing::debug!("effect receiver dropped");
                break;
            }
        }
        Ok(())
    }
}

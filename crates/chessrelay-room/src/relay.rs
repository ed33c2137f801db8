//! The relay: room directory, pairing, and message fan-out.

use std::collections::HashMap;

use chessrelay_protocol::{Message, PlayerId, RoomId, Side};
use chessrelay_transport::ConnectionId;

use crate::room::{Member, MemberSender, Room};
use crate::RoomError;

/// Tracks all active rooms and which connection sits in which room.
///
/// Synchronous by design: the server wraps one `Relay` in a mutex and
/// every operation completes without awaiting, so pairing decisions are
/// serialized and there is no room-filled-during-await race to handle.
/// Delivery is asynchronous anyway — members receive through unbounded
/// channels drained by their connection handlers.
pub struct Relay {
    rooms: HashMap<RoomId, Room>,
    /// Each connection is in at most one room at a time.
    memberships: HashMap<ConnectionId, RoomId>,
}

impl Relay {
    pub fn new() -> Self {
        Self {
            rooms: HashMap::new(),
            memberships: HashMap::new(),
        }
    }

    /// Handles a `join`: seats the player and delivers the handshake
    /// messages.
    ///
    /// First joiner gets White, second Black. A returning `player_id`
    /// reclaims its existing seat (new connection replaces the old one)
    /// and gets its `gameState` re-sent. Joining while seated elsewhere
    /// first leaves the old room, with the usual peer notification.
    ///
    /// # Errors
    /// Returns [`RoomError::RoomFull`] for a third distinct player;
    /// nothing is mutated in that case.
    pub fn join(
        &mut self,
        connection: ConnectionId,
        room_id: RoomId,
        player_id: PlayerId,
        sender: MemberSender,
    ) -> Result<Side, RoomError> {
        // A connection hopping rooms implicitly leaves the old one.
        if let Some(current) = self.memberships.get(&connection) {
            if *current != room_id {
                self.disconnect(connection);
            }
        }

        let room = self
            .rooms
            .entry(room_id.clone())
            .or_insert_with(|| Room::new(room_id.clone()));

        // Returning member: reclaim the seat, replace the channel.
        if let Some(member) = room.member_by_player_mut(&player_id) {
            let stale = member.connection;
            member.reseat(connection, sender);
            let side = member.side;
            if stale != connection {
                self.memberships.remove(&stale);
            }
            self.memberships.insert(connection, room_id.clone());
            tracing::info!(%room_id, %player_id, %side, "member rejoined");
            self.send_game_state(&room_id, &player_id, side);
            return Ok(side);
        }

        let Some(side) = room.free_side() else {
            tracing::info!(%room_id, %player_id, "join rejected, room full");
            return Err(RoomError::RoomFull(room_id));
        };

        room.push(Member::new(player_id.clone(), connection, side, sender));
        self.memberships.insert(connection, room_id.clone());
        tracing::info!(
            %room_id,
            %player_id,
            %side,
            members = self.rooms[&room_id].member_count(),
            "player joined"
        );

        self.send_game_state(&room_id, &player_id, side);
        if let Some(room) = self.rooms.get(&room_id) {
            if room.is_full() {
                room.send_to_others(
                    connection,
                    &Message::Status {
                        message: "Your opponent has joined.".into(),
                    },
                );
            }
        }
        Ok(side)
    }

    /// Relays a `move` verbatim to the other member of the sender's
    /// room. The coordinator never inspects the move itself.
    ///
    /// # Errors
    /// Returns [`RoomError::NotInRoom`] when the connection has not
    /// joined yet.
    pub fn relay_move(
        &self,
        connection: ConnectionId,
        msg: &Message,
    ) -> Result<(), RoomError> {
        let room_id = self
            .memberships
            .get(&connection)
            .ok_or(RoomError::NotInRoom(connection))?;
        // Membership entries always point at live rooms.
        let room = &self.rooms[room_id];
        tracing::debug!(%room_id, id = %connection, "relaying move");
        room.send_to_others(connection, msg);
        Ok(())
    }

    /// Handles a connection going away: unseats it, tells the peer,
    /// and drops the room once it empties.
    ///
    /// A no-op for connections that never joined.
    pub fn disconnect(&mut self, connection: ConnectionId) {
        let Some(room_id) = self.memberships.remove(&connection) else {
            return;
        };
        let Some(room) = self.rooms.get_mut(&room_id) else {
            return;
        };

        if let Some(member) = room.remove_by_connection(connection) {
            tracing::info!(
                %room_id,
                player_id = %member.player_id,
                side = %member.side,
                "member disconnected"
            );
            room.send_to_others(
                connection,
                &Message::Status {
                    message: "Your opponent has disconnected.".into(),
                },
            );
        }

        if room.is_empty() {
            self.rooms.remove(&room_id);
            tracing::info!(%room_id, "room dropped");
        }
    }

    /// The room a connection currently sits in, if any.
    pub fn room_of(&self, connection: ConnectionId) -> Option<&RoomId> {
        self.memberships.get(&connection)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    fn send_game_state(&self, room_id: &RoomId, player_id: &PlayerId, side: Side) {
        if let Some(member) = self
            .rooms
            .get(room_id)
            .and_then(|room| room.member_by_player(player_id))
        {
            member.send(Message::GameState {
                player_color: side,
                // No position is carried: clients reset to the start
                // on every (re)join and replay from there.
                fen: None,
            });
        }
    }
}

impl Default for Relay {
    fn default() -> Self {
        Self::new()
    }
}

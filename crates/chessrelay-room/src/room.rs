//! A single two-seat room.

use chessrelay_protocol::{Message, PlayerId, RoomId, Side};
use chessrelay_transport::ConnectionId;
use tokio::sync::mpsc;

/// Channel sender for delivering coordinator messages to one member's
/// connection handler.
pub type MemberSender = mpsc::UnboundedSender<Message>;

/// One seated participant.
#[derive(Debug)]
pub struct Member {
    pub player_id: PlayerId,
    pub connection: ConnectionId,
    pub side: Side,
    sender: MemberSender,
}

impl Member {
    pub fn new(
        player_id: PlayerId,
        connection: ConnectionId,
        side: Side,
        sender: MemberSender,
    ) -> Self {
        Self {
            player_id,
            connection,
            side,
            sender,
        }
    }

    /// Queues a message for this member. Silently drops if the
    /// connection handler is gone — disconnect cleanup will catch up.
    pub fn send(&self, msg: Message) {
        let _ = self.sender.send(msg);
    }

    /// Rebinds the member to a new connection, replacing the delivery
    /// channel. Used when a returning player reclaims their seat.
    pub fn reseat(&mut self, connection: ConnectionId, sender: MemberSender) {
        self.connection = connection;
        self.sender = sender;
    }
}

/// A room holds at most two members, one per side.
///
/// Seats are assigned by arrival order — first joiner White, second
/// Black — but tracked as *seats*, not ordinals: if White leaves and a
/// third player arrives, they take the free White seat rather than
/// displacing the remaining Black.
#[derive(Debug)]
pub struct Room {
    id: RoomId,
    members: Vec<Member>,
}

impl Room {
    pub fn new(id: RoomId) -> Self {
        Self {
            id,
            members: Vec::with_capacity(2),
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= 2
    }

    /// The side a new joiner would be assigned, or `None` when full.
    pub fn free_side(&self) -> Option<Side> {
        for side in [Side::White, Side::Black] {
            if !self.members.iter().any(|m| m.side == side) {
                return Some(side);
            }
        }
        None
    }

    pub fn push(&mut self, member: Member) {
        debug_assert!(!self.is_full(), "seat check precedes push");
        self.members.push(member);
    }

    pub fn member_by_player(&self, player_id: &PlayerId) -> Option<&Member> {
        self.members.iter().find(|m| m.player_id == *player_id)
    }

    pub fn member_by_player_mut(
        &mut self,
        player_id: &PlayerId,
    ) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.player_id == *player_id)
    }

    pub fn remove_by_connection(
        &mut self,
        connection: ConnectionId,
    ) -> Option<Member> {
        let idx = self
            .members
            .iter()
            .position(|m| m.connection == connection)?;
        Some(self.members.swap_remove(idx))
    }

    /// All members except the named connection.
    pub fn others(
        &self,
        connection: ConnectionId,
    ) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(move |m| m.connection != connection)
    }

    /// Sends a message to every member except the named connection.
    pub fn send_to_others(&self, connection: ConnectionId, msg: &Message) {
        for member in self.others(connection) {
            member.send(msg.clone());
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

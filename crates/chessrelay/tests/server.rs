//! End-to-end coordinator tests over real WebSocket connections.

use std::time::Duration;

use chessrelay::CoordinatorServer;
use chessrelay_client::{MoveAttempt, SessionClient, TurnIndicator, UiEvent};
use chessrelay_client::Effect;
use chessrelay_protocol::{
    Codec, JsonCodec, Message, Move, PlayerId, RoomId, Side, Square,
};
use chessrelay_rules::fake::ScriptedEngine;
use chessrelay_transport::{connect, Connection, WsClientConnection};
use tokio::sync::mpsc;

/// Starts a coordinator on an ephemeral port and returns its URL.
async fn start_coordinator() -> String {
    let server = CoordinatorServer::builder()
        .bind("127.0.0.1:0")
        .build()
        .await
        .expect("bind coordinator");
    let addr = server.local_addr().expect("local addr");
    tokio::spawn(server.run());
    format!("ws://{addr}")
}

async fn send(conn: &WsClientConnection, msg: &Message) {
    let bytes = JsonCodec.encode(msg).unwrap();
    conn.send(&bytes).await.expect("send");
}

/// Receives the next frame with a timeout, decoded.
async fn recv(conn: &WsClientConnection) -> Message {
    let frame = tokio::time::timeout(Duration::from_secs(5), conn.recv())
        .await
        .expect("timed out waiting for a frame")
        .expect("recv")
        .expect("connection closed unexpectedly");
    JsonCodec.decode(&frame).expect("decode")
}

fn join_msg(room: &str, player: &str) -> Message {
    Message::Join {
        room_id: RoomId::new(room).unwrap(),
        player_id: PlayerId::new(player),
    }
}

#[tokio::test]
async fn test_pairing_and_move_relay_end_to_end() {
    let url = start_coordinator().await;

    let alice = connect(&url).await.unwrap();
    send(&alice, &join_msg("r1", "alice")).await;
    assert_eq!(
        recv(&alice).await,
        Message::GameState {
            player_color: Side::White,
            fen: None,
        }
    );

    let bob = connect(&url).await.unwrap();
    send(&bob, &join_msg("r1", "bob")).await;
    assert_eq!(
        recv(&bob).await,
        Message::GameState {
            player_color: Side::Black,
            fen: None,
        }
    );

    // Alice learns her opponent arrived.
    assert!(matches!(recv(&alice).await, Message::Status { .. }));

    // Alice's move reaches Bob verbatim, and only Bob.
    let mv = Message::Move {
        room_id: RoomId::new("r1").unwrap(),
        player_id: PlayerId::new("alice"),
        mv: Move::plain(
            Square::new("e2").unwrap(),
            Square::new("e4").unwrap(),
        ),
    };
    send(&alice, &mv).await;
    assert_eq!(recv(&bob).await, mv);
}

#[tokio::test]
async fn test_third_player_gets_an_error_and_stays_connected() {
    let url = start_coordinator().await;

    let a = connect(&url).await.unwrap();
    let b = connect(&url).await.unwrap();
    send(&a, &join_msg("full", "p1")).await;
    recv(&a).await;
    send(&b, &join_msg("full", "p2")).await;
    recv(&b).await;

    let c = connect(&url).await.unwrap();
    send(&c, &join_msg("full", "p3")).await;
    let reply = recv(&c).await;
    assert!(
        matches!(reply, Message::Error { ref message } if message.contains("full")),
        "expected a room-full error, got {reply:?}"
    );

    // Still usable: a different room works.
    send(&c, &join_msg("elsewhere", "p3")).await;
    assert_eq!(
        recv(&c).await,
        Message::GameState {
            player_color: Side::White,
            fen: None,
        }
    );
}

#[tokio::test]
async fn test_disconnect_notifies_the_peer() {
    let url = start_coordinator().await;

    let a = connect(&url).await.unwrap();
    let b = connect(&url).await.unwrap();
    send(&a, &join_msg("r1", "p1")).await;
    recv(&a).await;
    send(&b, &join_msg("r1", "p2")).await;
    recv(&b).await;
    recv(&a).await; // opponent-joined status

    b.close().await.unwrap();

    assert!(matches!(recv(&a).await, Message::Status { .. }));
}

#[tokio::test]
async fn test_move_before_join_is_answered_with_error() {
    let url = start_coordinator().await;

    let conn = connect(&url).await.unwrap();
    send(
        &conn,
        &Message::Move {
            room_id: RoomId::new("r1").unwrap(),
            player_id: PlayerId::new("ghost"),
            mv: Move::plain(
                Square::new("e2").unwrap(),
                Square::new("e4").unwrap(),
            ),
        },
    )
    .await;

    assert!(matches!(recv(&conn).await, Message::Error { .. }));
}

#[tokio::test]
async fn test_malformed_frame_is_answered_with_error() {
    let url = start_coordinator().await;

    let conn = connect(&url).await.unwrap();
    conn.send(b"this is not a protocol message").await.unwrap();

    assert!(matches!(recv(&conn).await, Message::Error { .. }));
}

/// Full stack: two `SessionClient`s play a move through a real
/// coordinator and converge.
#[tokio::test]
async fn test_session_clients_converge_through_coordinator() {
    let url = start_coordinator().await;

    let (a_ui, a_ui_rx) = mpsc::unbounded_channel();
    let (a_fx_tx, mut a_fx) = mpsc::unbounded_channel();
    let (b_ui, b_ui_rx) = mpsc::unbounded_channel();
    let (b_fx_tx, mut b_fx) = mpsc::unbounded_channel();

    let mut alice = SessionClient::connect(&url, ScriptedEngine::new())
        .await
        .unwrap();
    let mut bob = SessionClient::connect(&url, ScriptedEngine::new())
        .await
        .unwrap();

    tokio::spawn(async move { alice.run(a_ui_rx, a_fx_tx).await });
    tokio::spawn(async move { bob.run(b_ui_rx, b_fx_tx).await });

    a_ui.send(UiEvent::Join("r9".into())).unwrap();
    // Alice must be seated (White) before Bob joins.
    let view = wait_for_render(&mut a_fx, |v| {
        v.indicator == TurnIndicator::YourTurn(Side::White)
    })
    .await;
    assert_eq!(view.indicator, TurnIndicator::YourTurn(Side::White));

    b_ui.send(UiEvent::Join("r9".into())).unwrap();
    wait_for_render(&mut b_fx, |v| {
        v.indicator == TurnIndicator::OpponentTurn(Side::White)
    })
    .await;

    a_ui.send(UiEvent::Move(MoveAttempt {
        from: Square::new("e2").unwrap(),
        to: Square::new("e4").unwrap(),
        piece_owner: Side::White,
        promotion: None,
    }))
    .unwrap();

    // Both sides end up at the same position with Black to move.
    let a_view =
        wait_for_render(&mut a_fx, |v| v.position.contains("e2e4")).await;
    let b_view =
        wait_for_render(&mut b_fx, |v| v.position.contains("e2e4")).await;
    assert_eq!(a_view.position, b_view.position);
    assert_eq!(b_view.indicator, TurnIndicator::YourTurn(Side::Black));
}

/// Drains effects until a render matching `pred` arrives.
async fn wait_for_render(
    effects: &mut mpsc::UnboundedReceiver<Effect>,
    pred: impl Fn(&chessrelay_client::RenderView) -> bool,
) -> chessrelay_client::RenderView {
    let deadline = Duration::from_secs(5);
    tokio::time::timeout(deadline, async {
        loop {
            match effects.recv().await {
                Some(Effect::Render(view)) if pred(&view) => return view,
                Some(_) => continue,
                None => panic!("effect channel closed"),
            }
        }
    })
    .await
    .expect("timed out waiting for render")
}

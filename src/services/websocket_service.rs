use axum::extract::ws::{Message, WebSocket};
use futures::{SinkExt, StreamExt};
use tokio::{
    sync::{broadcast::error::RecvError, mpsc},
    task::JoinHandle,
};
use tracing::{info, warn};

use crate::{dto::ws::ClientMessage, services::game_service, state::SharedState};

/// Handle the full lifecycle for an individual game-client WebSocket connection.
pub async fn handle_socket(state: SharedState, socket: WebSocket) {
    let (mut sender, mut receiver) = socket.split();
    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<Message>();

    // Dedicated writer task keeps broadcasts flowing even while we await inbound frames.
    let writer_task = tokio::spawn(async move {
        while let Some(message) = outbound_rx.recv().await {
            if sender.send(message).await.is_err() {
                break;
            }
        }
    });

    // Forward hub broadcasts (button presses) to this client.
    let mut events = state.events().subscribe();
    let forward_tx = outbound_tx.clone();
    let forwarder_task = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    if forward_tx.send(Message::Text(event.data.into())).is_err() {
                        break;
                    }
                }
                Err(RecvError::Closed) => break,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "client fell behind on broadcasts");
                }
            }
        }
    });

    info!("game client connected");

    while let Some(message) = receiver.next().await {
        match message {
            Ok(Message::Text(text)) => match ClientMessage::from_json_str(&text) {
                Ok(message) => dispatch(&state, message).await,
                Err(err) => {
                    warn!(error = %err, payload = %text, "failed to parse client message");
                }
            },
            Ok(Message::Ping(payload)) => {
                let _ = outbound_tx.send(Message::Pong(payload));
            }
            Ok(Message::Close(frame)) => {
                info!("game client closed");
                let _ = outbound_tx.send(Message::Close(frame));
                break;
            }
            Ok(Message::Binary(_)) | Ok(Message::Pong(_)) => {}
            Err(err) => {
                warn!(error = %err, "websocket error");
                break;
            }
        }
    }

    info!("game client disconnected");
    forwarder_task.abort();
    finalize(writer_task, outbound_tx).await;
}

/// Apply one inbound event.
///
/// Errors are logged and the connection keeps going: the realtime path is
/// fire-and-forget with no user-facing error channel.
async fn dispatch(state: &SharedState, message: ClientMessage) {
    match message {
        ClientMessage::AnswerCorrect {
            player_id,
            category,
        } => {
            if let Err(err) = game_service::answer_correct(state, player_id, category).await {
                warn!(player_id, error = %err, "failed to persist correct answer");
            }
        }
        ClientMessage::AnswerIncorrect {
            player_id,
            category,
        } => {
            if let Err(err) = game_service::answer_incorrect(state, player_id, category).await {
                warn!(player_id, error = %err, "failed to persist incorrect answer");
            }
        }
        ClientMessage::RewardView => game_service::reward_view(state),
        ClientMessage::Reset => game_service::reset(state),
        ClientMessage::Unknown => warn!("ignoring unknown client message type"),
    }
}

/// Ensure the writer task winds down before we return from the socket handler.
async fn finalize(writer_task: JoinHandle<()>, outbound_tx: mpsc::UnboundedSender<Message>) {
    drop(outbound_tx);
    let _ = writer_task.await;
}

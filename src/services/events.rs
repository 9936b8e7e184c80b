use serde::Serialize;
use tracing::warn;

use crate::{
    dto::{sse::ServerEvent, ws::ServerMessage},
    state::EventHub,
};

const EVENT_BUTTON_PRESSED: &str = "button_pressed";

/// Broadcast a raw button report from the panel to every realtime client.
pub fn broadcast_button_pressed(hub: &EventHub, raw: &str) {
    let payload = ServerMessage::ButtonPressed {
        raw: raw.to_string(),
    };
    send_event(hub, EVENT_BUTTON_PRESSED, &payload);
}

fn send_event(hub: &EventHub, event: &str, payload: &impl Serialize) {
    match ServerEvent::json(Some(event.to_string()), payload) {
        Ok(event) => hub.broadcast(event),
        Err(err) => warn!(event, error = %err, "failed to serialize broadcast payload"),
    }
}

//! Event coordinator: applies realtime game events to the session score,
//! the result store, and the panel hardware.
//!
//! Hardware and persistence are independent side effects. The panel command
//! is issued before the store write so a persistence failure can never
//! suppress it; the bridge itself never fails, so the store write is never
//! blocked either. The store error still reaches the caller.

use tracing::info;

use crate::{error::ServiceError, serial::PanelCommand, state::SharedState};

/// Handle a correct answer: bump the tally, flash the panel, persist the result.
pub async fn answer_correct(
    state: &SharedState,
    player_id: i64,
    category: String,
) -> Result<(), ServiceError> {
    let total = state.score().record_correct();
    info!(player_id, category, total, "correct answer");
    state.panel().send(PanelCommand::Correct);

    let store = state.require_store().await?;
    store.record_result(player_id, category, true).await?;
    Ok(())
}

/// Handle an incorrect answer: flash the panel and persist. The tally is untouched.
pub async fn answer_incorrect(
    state: &SharedState,
    player_id: i64,
    category: String,
) -> Result<(), ServiceError> {
    info!(player_id, category, "incorrect answer");
    state.panel().send(PanelCommand::Incorrect);

    let store = state.require_store().await?;
    store.record_result(player_id, category, false).await?;
    Ok(())
}

/// Re-evaluate the bonus rule for a reward-screen view.
///
/// Repeated views while the tally stays in range re-trigger the animation.
pub fn reward_view(state: &SharedState) {
    let total = state.score().current();
    if state.score().in_bonus_range() {
        info!(total, "bonus threshold met; triggering panel animation");
        state.panel().send(PanelCommand::Bonus);
    } else {
        info!(total, "reward screen shown");
    }
}

/// Start over: clear the tally, then tell the panel.
///
/// The in-memory reset always succeeds; the hardware command is best effort.
pub fn reset(state: &SharedState) {
    state.score().reset();
    info!("game reset; tally cleared");
    state.panel().send(PanelCommand::Reset);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::mpsc;

    use super::*;
    use crate::{
        dao::quiz_store::testing::MemoryStore,
        serial::SerialBridge,
        state::{AppState, EventHub},
    };

    fn channel_bridge() -> (SerialBridge, mpsc::UnboundedReceiver<PanelCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (SerialBridge::connected(tx), rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<PanelCommand>) -> Vec<PanelCommand> {
        let mut commands = Vec::new();
        while let Ok(command) = rx.try_recv() {
            commands.push(command);
        }
        commands
    }

    #[tokio::test]
    async fn correct_answers_accumulate_and_persist() {
        let (bridge, mut rx) = channel_bridge();
        let store = Arc::new(MemoryStore::default());
        let state = AppState::new(bridge, EventHub::new(8));
        state.install_store(store.clone()).await;

        for _ in 0..3 {
            answer_correct(&state, 1, "history".into()).await.unwrap();
        }

        assert_eq!(state.score().current(), 3);
        let recorded = store.recorded();
        assert_eq!(recorded.len(), 3);
        assert!(recorded.iter().all(|(id, entry)| *id == 1 && entry.correct));
        assert_eq!(drain(&mut rx), vec![PanelCommand::Correct; 3]);
    }

    #[tokio::test]
    async fn incorrect_answer_leaves_tally_untouched() {
        let (bridge, mut rx) = channel_bridge();
        let store = Arc::new(MemoryStore::default());
        let state = AppState::new(bridge, EventHub::new(8));
        state.install_store(store.clone()).await;

        answer_incorrect(&state, 2, "science".into()).await.unwrap();

        assert_eq!(state.score().current(), 0);
        let recorded = store.recorded();
        assert_eq!(recorded.len(), 1);
        assert!(!recorded[0].1.correct);
        assert_eq!(drain(&mut rx), vec![PanelCommand::Incorrect]);
    }

    #[tokio::test]
    async fn panel_flashes_even_without_storage() {
        let (bridge, mut rx) = channel_bridge();
        let state = AppState::new(bridge, EventHub::new(8));

        let outcome = answer_correct(&state, 1, "history".into()).await;

        assert!(matches!(outcome, Err(ServiceError::Degraded)));
        assert_eq!(state.score().current(), 1);
        assert_eq!(drain(&mut rx), vec![PanelCommand::Correct]);
    }

    #[tokio::test]
    async fn panel_flashes_even_when_store_write_fails() {
        let (bridge, mut rx) = channel_bridge();
        let state = AppState::new(bridge, EventHub::new(8));
        state.install_store(Arc::new(MemoryStore::failing())).await;

        let outcome = answer_incorrect(&state, 1, "history".into()).await;

        assert!(matches!(outcome, Err(ServiceError::Unavailable(_))));
        assert_eq!(drain(&mut rx), vec![PanelCommand::Incorrect]);
    }

    #[tokio::test]
    async fn bonus_fires_only_between_seven_and_eight() {
        let (bridge, mut rx) = channel_bridge();
        let state = AppState::new(bridge, EventHub::new(8));
        state.install_store(Arc::new(MemoryStore::default())).await;

        let mut bonus_counts = Vec::new();
        for count in 1..=10 {
            answer_correct(&state, 1, "history".into()).await.unwrap();
            reward_view(&state);
            if drain(&mut rx).contains(&PanelCommand::Bonus) {
                bonus_counts.push(count);
            }
        }

        assert_eq!(bonus_counts, vec![7, 8]);
    }

    #[tokio::test]
    async fn repeated_reward_views_retrigger_bonus() {
        let (bridge, mut rx) = channel_bridge();
        let state = AppState::new(bridge, EventHub::new(8));
        for _ in 0..7 {
            state.score().record_correct();
        }

        reward_view(&state);
        reward_view(&state);

        assert_eq!(drain(&mut rx), vec![PanelCommand::Bonus; 2]);
    }

    #[tokio::test]
    async fn reset_clears_tally_and_notifies_panel() {
        let (bridge, mut rx) = channel_bridge();
        let state = AppState::new(bridge, EventHub::new(8));
        state.score().record_correct();
        state.score().record_correct();

        reset(&state);
        assert_eq!(state.score().current(), 0);
        reset(&state);
        assert_eq!(state.score().current(), 0);

        assert_eq!(drain(&mut rx), vec![PanelCommand::Reset; 2]);
    }

    #[tokio::test]
    async fn reset_with_absent_panel_still_clears() {
        let state = AppState::new(SerialBridge::disconnected(), EventHub::new(8));
        state.score().record_correct();

        reset(&state);

        assert_eq!(state.score().current(), 0);
    }
}

//! Map [parley_core::SessionEvent] to [TuiState] updates.

use std::time::Instant;

use parley_core::{Role, SessionEvent};

use crate::state::TuiState;
use crate::utils::format_duration;

pub const STATUS_WAITING: &str = "Waiting for reply…";

/// Apply a session event to TUI state.
/// Runtime logs are shown in the debug traces screen (Ctrl+D), not session events.
pub fn apply_session_event(state: &mut TuiState, event: SessionEvent) {
    state.needs_redraw = true;
    let now = Instant::now();
    match event {
        SessionEvent::TurnStart { role } => {
            if role == Role::Assistant {
                state.pending = true;
                state.pending_since = Some(now);
                state.set_status(STATUS_WAITING);
            }
        }
        SessionEvent::MessageAppended { index, message } => {
            // Only the reply to the turn in flight is revealed; the user's own
            // message arrives before TurnStart and shows at once.
            let live = state.pending && message.role() == Role::Assistant;
            state.push_message(index, &message, live, now);
        }
        SessionEvent::Status { message } => {
            state.set_status(message);
        }
        SessionEvent::TurnEnd => {
            state.pending = false;
            match state.pending_since.take() {
                Some(started) => state.set_status(format!(
                    "Replied in {}",
                    format_duration(now.saturating_duration_since(started))
                )),
                None => state.set_status(String::new()),
            }
        }
        SessionEvent::Error { error } => {
            state.set_status(error.clone());
            let ts = chrono::Local::now().format("%H:%M").to_string();
            state.push_error(error, Some(ts));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ChatItem;
    use parley_core::Message;

    fn turn(state: &mut TuiState, user: &str, reply: &str) {
        apply_session_event(state, SessionEvent::message_appended(0, Message::user(user).unwrap()));
        apply_session_event(state, SessionEvent::turn_start(Role::Assistant));
        apply_session_event(state, SessionEvent::message_appended(1, Message::assistant(reply).unwrap()));
    }

    #[test]
    fn turn_start_marks_pending() {
        let mut state = TuiState::new();
        apply_session_event(&mut state, SessionEvent::turn_start(Role::Assistant));
        assert!(state.pending);
        assert!(state.is_busy());
        assert_eq!(state.status, STATUS_WAITING);
    }

    #[test]
    fn reply_during_turn_is_revealed() {
        let mut state = TuiState::new();
        turn(&mut state, "hi", "hello there friend");
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.reveal.as_ref().map(|r| r.message()), Some(1));

        apply_session_event(&mut state, SessionEvent::turn_end());
        assert!(!state.pending);
        assert!(state.status.starts_with("Replied in "));
        // still revealing after the turn ends
        assert!(state.is_busy());
    }

    #[test]
    fn user_message_is_not_revealed() {
        let mut state = TuiState::new();
        apply_session_event(&mut state, SessionEvent::message_appended(0, Message::user("a b c").unwrap()));
        assert!(state.reveal.is_none());
        assert!(matches!(state.messages[0], ChatItem::Message(ref m) if m.role == Role::User));
    }

    #[test]
    fn code_in_reply_gets_a_view() {
        let mut state = TuiState::new();
        turn(&mut state, "json please", "```json\n{\"a\":1}\n```");
        let view = &state.code_views[&crate::code_view::WidgetKey::new(1, 0)];
        assert_eq!(view.language(), "json");
        assert_eq!(view.text(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn error_pushes_item_and_status() {
        let mut state = TuiState::new();
        apply_session_event(&mut state, SessionEvent::error("empty reply"));
        assert_eq!(state.status, "empty reply");
        assert!(matches!(state.messages.last(), Some(ChatItem::Error(e)) if e.text == "empty reply"));
    }

    #[test]
    fn status_event_sets_status() {
        let mut state = TuiState::new();
        apply_session_event(&mut state, SessionEvent::status("Connecting"));
        assert_eq!(state.status, "Connecting");
    }
}

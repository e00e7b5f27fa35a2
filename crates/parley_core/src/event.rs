use serde::{Deserialize, Serialize};

use crate::message::{Message, Role};

/// Events sent from the runtime loop to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    TurnStart { role: Role },

    /// A message was stored at `index` in the conversation.
    MessageAppended { index: usize, message: Message },

    Status { message: String },

    TurnEnd,

    Error { error: String },
}

impl SessionEvent {
    pub fn turn_start(role: Role) -> Self {
        SessionEvent::TurnStart { role }
    }

    pub fn message_appended(index: usize, message: Message) -> Self {
        SessionEvent::MessageAppended { index, message }
    }

    pub fn status(message: impl Into<String>) -> Self {
        SessionEvent::Status {
            message: message.into(),
        }
    }

    pub fn turn_end() -> Self {
        SessionEvent::TurnEnd
    }

    pub fn error(error: impl Into<String>) -> Self {
        SessionEvent::Error {
            error: error.into(),
        }
    }
}

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of the conversation.
///
/// Always carries `content`, `code`, or both. `language` is only kept next to `code`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MessageRecord")]
pub struct Message {
    role: Role,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

#[derive(Deserialize)]
struct MessageRecord {
    role: Role,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

impl TryFrom<MessageRecord> for Message {
    type Error = CoreError;

    fn try_from(record: MessageRecord) -> Result<Self> {
        let mut message = Message::new(record.role, record.content, record.code, record.language)?;
        message.timestamp = record.timestamp;
        Ok(message)
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl Message {
    pub fn new(
        role: Role,
        content: Option<String>,
        code: Option<String>,
        language: Option<String>,
    ) -> Result<Self> {
        let content = present(content);
        let code = present(code);
        if content.is_none() && code.is_none() {
            return Err(CoreError::EmptyMessage);
        }
        let language = if code.is_some() { language } else { None };
        Ok(Self {
            role,
            timestamp: Utc::now(),
            content,
            code,
            language,
        })
    }

    pub fn text(role: Role, content: impl Into<String>) -> Result<Self> {
        Self::new(role, Some(content.into()), None, None)
    }

    pub fn user(content: impl Into<String>) -> Result<Self> {
        Self::text(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Result<Self> {
        Self::text(Role::Assistant, content)
    }

    pub fn with_code(
        role: Role,
        code: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self> {
        Self::new(role, None, Some(code.into()), Some(language.into()))
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Text sent to the completion service for this turn; code-only messages send "".
    pub fn history_content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

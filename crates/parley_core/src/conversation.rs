use serde::{Deserialize, Serialize};

use crate::message::{Message, Role};

/// Append-only, in-memory log of the messages in one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `message` at the end and returns its index.
    pub fn append(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len() - 1
    }

    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// `(role, content)` pairs in order, as sent to the completion service.
    pub fn history(&self) -> impl Iterator<Item = (Role, &str)> {
        self.messages
            .iter()
            .map(|m| (m.role(), m.history_content()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_conversation_is_empty() {
        let conversation = Conversation::new();
        assert!(conversation.is_empty());
        assert!(conversation.last().is_none());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut conversation = Conversation::new();
        let first = conversation.append(Message::user("question").unwrap());
        let second = conversation.append(Message::assistant("answer").unwrap());

        assert_eq!((first, second), (0, 1));
        let roles: Vec<Role> = conversation.all().iter().map(|m| m.role()).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
        assert_eq!(conversation.all()[0].content(), Some("question"));
        assert_eq!(conversation.all()[1].content(), Some("answer"));
    }

    #[test]
    fn test_history_uses_empty_content_for_code_only() {
        let mut conversation = Conversation::new();
        conversation.append(Message::user("show me").unwrap());
        conversation.append(Message::with_code(Role::Assistant, "x = 1", "python").unwrap());

        let history: Vec<(Role, &str)> = conversation.history().collect();
        assert_eq!(history, vec![(Role::User, "show me"), (Role::Assistant, "")]);
    }

    #[test]
    fn test_get_and_len() {
        let mut conversation = Conversation::new();
        conversation.append(Message::user("a").unwrap());
        assert_eq!(conversation.len(), 1);
        assert_eq!(conversation.get(0).and_then(|m| m.content()), Some("a"));
        assert!(conversation.get(1).is_none());
    }
}

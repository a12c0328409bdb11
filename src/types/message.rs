use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Unique identifier for a message in the conversation log.
///
/// Ids are allocated monotonically by the conversation store and are never
/// reused within a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a message in the conversation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A message typed by the user.
    User,

    /// A reply produced by the remote assistant.
    Assistant,
}

/// A single message in the conversation log.
///
/// Messages are created once, when submitted (user) or received (assistant),
/// and are immutable thereafter. The role is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier, assigned at creation.
    pub id: MessageId,

    /// Non-empty text payload.
    pub content: String,

    /// Who authored the message.
    pub role: Role,

    /// Creation time, used for display ordering and formatting.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl Message {
    /// Create a new message with the given id, role, and content, stamped
    /// with the current time.
    pub fn new(id: MessageId, role: Role, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            role,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    /// Create a new user message.
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, Role::User, content)
    }

    /// Create a new assistant message.
    pub fn assistant(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, Role::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn message_roundtrip() {
        let message = Message::user(MessageId(7), "What drives cancellations?");
        let json = serde_json::to_string(&message).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
    }

    #[test]
    fn constructors_fix_role() {
        let user = Message::user(MessageId(1), "hi");
        let assistant = Message::assistant(MessageId(2), "hello");
        assert_eq!(user.role, Role::User);
        assert_eq!(assistant.role, Role::Assistant);
    }
}

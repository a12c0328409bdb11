use serde::{Deserialize, Serialize};

use crate::types::{Message, Role};

/// Role tag used by the provider's chat-history entries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChatRole {
    /// The provider's tag for user turns.
    User,

    /// The provider's tag for assistant turns.
    Chatbot,
}

/// One entry in the chat history sent to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role tag for this entry.
    pub role: ChatRole,

    /// The text of the turn.
    pub message: String,
}

impl ChatMessage {
    /// Create a new `ChatMessage` with the given role and text.
    pub fn new(role: ChatRole, message: impl Into<String>) -> Self {
        Self {
            role,
            message: message.into(),
        }
    }

    /// Create a new user history entry.
    pub fn user(message: impl Into<String>) -> Self {
        Self::new(ChatRole::User, message)
    }

    /// Create a new chatbot history entry.
    pub fn chatbot(message: impl Into<String>) -> Self {
        Self::new(ChatRole::Chatbot, message)
    }
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        let role = match message.role {
            Role::User => ChatRole::User,
            Role::Assistant => ChatRole::Chatbot,
        };
        Self::new(role, message.content.clone())
    }
}

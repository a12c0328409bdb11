use serde::{Deserialize, Serialize};

use crate::types::{ChatMessage, Connector, PromptTruncation};

/// Parameters for a chat completion request.
///
/// The history entries in `chat_history` cover every turn *before* the one
/// being submitted; the new user text travels in `message`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The new user text to respond to.
    pub message: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Prior turns, in chronological order.
    #[serde(rename = "chatHistory")]
    pub chat_history: Vec<ChatMessage>,

    /// Retrieval connectors to consult.
    pub connectors: Vec<Connector>,

    /// Prompt truncation policy.
    #[serde(rename = "promptTruncation")]
    pub prompt_truncation: PromptTruncation,

    /// Whether to stream the response. Always false for this client.
    pub stream: bool,

    /// System-level instruction establishing the assistant's persona.
    pub preamble: String,
}

impl ChatRequest {
    /// Create a new request with the given message, history, and preamble.
    ///
    /// Defaults: temperature 0.7, the web-search connector, AUTO truncation,
    /// streaming disabled.
    pub fn new(
        message: impl Into<String>,
        chat_history: Vec<ChatMessage>,
        preamble: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            temperature: 0.7,
            chat_history,
            connectors: vec![Connector::web_search()],
            prompt_truncation: PromptTruncation::Auto,
            stream: false,
            preamble: preamble.into(),
        }
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the connectors to consult.
    pub fn with_connectors(mut self, connectors: Vec<Connector>) -> Self {
        self.connectors = connectors;
        self
    }

    /// Sets the prompt truncation policy.
    pub fn with_prompt_truncation(mut self, prompt_truncation: PromptTruncation) -> Self {
        self.prompt_truncation = prompt_truncation;
        self
    }
}

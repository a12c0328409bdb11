//! Configuration types for the chat assistant.
//!
//! This module provides CLI argument parsing via `arrrg` and the static
//! configuration record of generation parameters sent with every request.

use arrrg_derive::CommandLine;

use crate::chat::commands::parse_f32_in_range;
use crate::types::{ChatMessage, ChatRequest, Connector, PromptTruncation};

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default persona and domain instruction sent with every request.
pub const DEFAULT_PREAMBLE: &str = "You are a helpful hotel booking analytics assistant analyzing data from a comprehensive dataset of hotel bookings. The dataset includes information about hotel types (City Hotel and Resort Hotel), bookings, cancellations, guest demographics, length of stay, booking channels, and revenue metrics. Help users understand booking patterns, revenue trends, cancellation rates, and other key metrics. When providing answers, focus on clear, data-driven insights and relevant statistics from the hotel industry context.";

/// Command-line arguments for the concierge-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Override the assistant persona preamble.
    #[arrrg(optional, "Persona preamble for the conversation", "PROMPT")]
    pub preamble: Option<String>,

    /// Sampling temperature, parsed and range-checked when the config is
    /// resolved.
    #[arrrg(optional, "Sampling temperature (default: 0.7)", "TEMP")]
    pub temperature: Option<String>,

    /// Disable the web-search connector.
    #[arrrg(flag, "Disable the web-search connector")]
    pub no_web_search: bool,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a chat session.
///
/// This is a static record of the generation parameters sent with every
/// request, resolved from command-line arguments with appropriate defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Persona and domain instruction sent with every request.
    pub preamble: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Retrieval connectors the provider may consult.
    pub connectors: Vec<Connector>,

    /// Prompt truncation policy.
    pub prompt_truncation: PromptTruncation,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Preamble: the hotel booking analytics persona
    /// - Temperature: 0.7
    /// - Connectors: web-search
    /// - Truncation: AUTO
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            preamble: DEFAULT_PREAMBLE.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            connectors: vec![Connector::web_search()],
            prompt_truncation: PromptTruncation::Auto,
            use_color: true,
        }
    }

    /// Sets the persona preamble.
    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = preamble.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the connectors.
    pub fn with_connectors(mut self, connectors: Vec<Connector>) -> Self {
        self.connectors = connectors;
        self
    }

    /// Builds the request for one turn from this configuration.
    ///
    /// `chat_history` covers every turn before the one being submitted; the
    /// new user text travels in `message`.
    pub fn request(&self, message: impl Into<String>, chat_history: Vec<ChatMessage>) -> ChatRequest {
        ChatRequest::new(message, chat_history, self.preamble.clone())
            .with_temperature(self.temperature)
            .with_connectors(self.connectors.clone())
            .with_prompt_truncation(self.prompt_truncation)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        let mut config = ChatConfig::new();
        if let Some(preamble) = args.preamble {
            config.preamble = preamble;
        }
        if let Some(temperature) = args.temperature {
            // Same range check as the /temperature command; invalid values
            // keep the default.
            if let Ok(value) = parse_f32_in_range(&temperature, 0.0, 1.0) {
                config.temperature = value;
            }
        }
        if args.no_web_search {
            config.connectors = Vec::new();
        }
        config.use_color = !args.no_color;
        config
    }
}

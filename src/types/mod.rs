// Public modules
pub mod chat_message;
pub mod chat_request;
pub mod chat_response;
pub mod connector;
pub mod message;
pub mod prompt_truncation;

// Re-exports
pub use chat_message::{ChatMessage, ChatRole};
pub use chat_request::ChatRequest;
pub use chat_response::ChatResponse;
pub use connector::Connector;
pub use message::{Message, MessageId, Role};
pub use prompt_truncation::PromptTruncation;

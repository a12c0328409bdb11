// Public modules
pub mod chat;
pub mod client;
pub mod client_logger;
pub mod error;
pub mod observability;
pub mod render;
pub mod store;
pub mod types;

// Re-exports
pub use client::Cohere;
pub use client_logger::ClientLogger;
pub use error::{Error, Result};
pub use store::{ChatState, ConversationStore};
pub use types::*;

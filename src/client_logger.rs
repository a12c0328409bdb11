//! Logging trait for Cohere client operations.
//!
//! This module provides the [`ClientLogger`] trait that allows users to
//! capture and log all API interactions passing through the
//! [`Cohere`](crate::Cohere) client.

use crate::types::{ChatRequest, ChatResponse};

/// A trait for logging Cohere client operations.
///
/// Implement this trait to capture and record all API interactions.
///
/// # Example
///
/// ```rust,ignore
/// use concierge::{ChatRequest, ChatResponse, ClientLogger};
/// use std::io::Write;
/// use std::sync::Mutex;
///
/// struct FileLogger {
///     file: Mutex<std::fs::File>,
/// }
///
/// impl ClientLogger for FileLogger {
///     fn log_request(&self, request: &ChatRequest) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Request: {}", serde_json::to_string(request).unwrap()).unwrap();
///     }
///
///     fn log_response(&self, response: &ChatResponse) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "Response: {}", serde_json::to_string(response).unwrap()).unwrap();
///     }
/// }
/// ```
pub trait ClientLogger: Send + Sync {
    /// Log a chat request immediately before it is sent.
    fn log_request(&self, request: &ChatRequest);

    /// Log a successfully parsed chat response.
    fn log_response(&self, response: &ChatResponse);
}

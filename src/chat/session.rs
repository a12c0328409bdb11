//! Core chat session management.
//!
//! This module provides [`ChatSession`], which orchestrates one user turn:
//! the optimistic user-message append, the single remote call, and the
//! reconciliation of its outcome into the conversation store.

use crate::chat::config::ChatConfig;
use crate::client::Cohere;
use crate::error::{Error, Result};
use crate::observability;
use crate::store::{ChatState, ConversationStore, Watcher};
use crate::types::{ChatMessage, ChatRequest, ChatResponse, Message};

/// Fallback error text when a failure carries no message of its own.
const GENERIC_FAILURE: &str = "Failed to get response. Please try again.";

/// Remote completion service expected by the chat session.
///
/// The session is generic over this trait so tests can substitute a mock
/// service for the [`Cohere`] client.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// Issue one chat request and return the completion.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse>;
}

#[async_trait::async_trait]
impl CompletionClient for Cohere {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        Cohere::chat(self, request).await
    }
}

/// Whether a call to [`ChatSession::submit`] ran a turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A turn ran to completion; the store reflects the reply or the error.
    Completed,

    /// The submission was a no-op: empty text, or a turn already in flight.
    Rejected,
}

/// A chat session that manages conversation state and API interactions.
///
/// The session owns the [`ConversationStore`] and is the only component
/// that mutates it. Each turn has exactly two state-transition points: the
/// synchronous submit (optimistic append, loading set, error cleared) and
/// the resolve after the remote call settles.
pub struct ChatSession<C: CompletionClient> {
    client: C,
    config: ChatConfig,
    store: ConversationStore,
    turn_count: u64,
    failure_count: u64,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// The number of messages in the conversation.
    pub message_count: usize,
    /// Turns that issued a remote call.
    pub turn_count: u64,
    /// Turns that settled in failure.
    pub failure_count: u64,
    /// The sampling temperature.
    pub temperature: f32,
    /// The persona preamble.
    pub preamble: String,
    /// Whether the web-search connector is enabled.
    pub web_search: bool,
}

impl ChatSession<Cohere> {
    /// Creates a new chat session with the given client and configuration.
    pub fn new(client: Cohere, config: ChatConfig) -> Self {
        Self::with_client(client, config)
    }
}

impl<C: CompletionClient> ChatSession<C> {
    /// Creates a new chat session with a custom completion client.
    pub fn with_client(client: C, config: ChatConfig) -> Self {
        Self {
            client,
            config,
            store: ConversationStore::new(),
            turn_count: 0,
            failure_count: 0,
        }
    }

    /// Submits one user turn.
    ///
    /// Empty or whitespace-only input is a no-op, as is a call while a
    /// remote call is outstanding. Otherwise this method:
    ///
    /// 1. Appends the user message, sets `is_loading`, clears `error`
    /// 2. Sends the prior history plus the new text to the service
    /// 3. On success, appends the assistant reply and clears `is_loading`
    /// 4. On failure, clears `is_loading` and records the error text; the
    ///    user message appended in step 1 stays in history
    ///
    /// Failures never surface as `Err`; they are normalized into the
    /// store's `error` field. There are no automatic retries.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() || self.store.state().is_loading {
            observability::SESSION_REJECTED_SUBMITS.click();
            return SubmitOutcome::Rejected;
        }

        // The history sent with turn N reflects the log as it stood before
        // this turn's user message was appended.
        let chat_history: Vec<ChatMessage> = self
            .store
            .state()
            .messages
            .iter()
            .map(ChatMessage::from)
            .collect();

        let user_message = Message::user(self.store.next_message_id(), text);
        self.store.update(|state| ChatState {
            is_loading: true,
            error: None,
            ..state.with_message(user_message)
        });

        observability::SESSION_TURNS.click();
        self.turn_count += 1;

        let request = self.config.request(text, chat_history);
        let outcome = match self.client.chat(request).await {
            Ok(response) => match response.text() {
                Some(reply) => Ok(reply.to_string()),
                None => {
                    observability::SESSION_EMPTY_RESPONSES.click();
                    Err(Error::empty_response("No response received from Cohere"))
                }
            },
            Err(err) => Err(err),
        };

        match outcome {
            Ok(reply) => {
                let assistant_message = Message::assistant(self.store.next_message_id(), reply);
                self.store.update(|state| ChatState {
                    is_loading: false,
                    ..state.with_message(assistant_message)
                });
            }
            Err(err) => {
                observability::SESSION_TURN_FAILURES.click();
                self.failure_count += 1;
                let mut message = err.to_string();
                if message.is_empty() {
                    message = GENERIC_FAILURE.to_string();
                }
                self.store.update(|state| ChatState {
                    is_loading: false,
                    error: Some(message),
                    ..state
                });
            }
        }
        SubmitOutcome::Completed
    }

    /// Borrows the current conversation state.
    pub fn state(&self) -> &ChatState {
        self.store.state()
    }

    /// Returns a read-only clone of the current conversation state.
    pub fn snapshot(&self) -> ChatState {
        self.store.snapshot()
    }

    /// Registers a watcher notified after every state change.
    pub fn subscribe(&mut self, watcher: Watcher) {
        self.store.subscribe(watcher);
    }

    /// Clears the conversation history and any recorded error.
    pub fn clear(&mut self) {
        self.store.update(|_| ChatState::default());
    }

    /// Returns the number of messages in the conversation.
    pub fn message_count(&self) -> usize {
        self.store.state().messages.len()
    }

    /// Returns the active chat configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Returns the active chat configuration for mutation.
    pub fn config_mut(&mut self) -> &mut ChatConfig {
        &mut self.config
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            message_count: self.message_count(),
            turn_count: self.turn_count,
            failure_count: self.failure_count,
            temperature: self.config.temperature,
            preamble: self.config.preamble.clone(),
            web_search: !self.config.connectors.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChatRole, Role};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Completion client that replays scripted results and records every
    /// request it receives.
    struct MockClient {
        script: Mutex<VecDeque<Result<ChatResponse>>>,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl MockClient {
        fn new(script: Vec<Result<ChatResponse>>) -> Self {
            Self {
                script: Mutex::new(script.into_iter().collect()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn replying(texts: &[&str]) -> Self {
            Self::new(
                texts
                    .iter()
                    .map(|text| {
                        Ok(ChatResponse {
                            text: Some(text.to_string()),
                            ..ChatResponse::default()
                        })
                    })
                    .collect(),
            )
        }

        fn request_count(session: &ChatSession<MockClient>) -> usize {
            session.client.requests.lock().unwrap().len()
        }

        fn last_request(session: &ChatSession<MockClient>) -> ChatRequest {
            session
                .client
                .requests
                .lock()
                .unwrap()
                .last()
                .cloned()
                .unwrap()
        }
    }

    #[async_trait::async_trait]
    impl CompletionClient for MockClient {
        async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
            self.requests.lock().unwrap().push(request);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Error::empty_response("script exhausted")))
        }
    }

    fn session(client: MockClient) -> ChatSession<MockClient> {
        ChatSession::with_client(client, ChatConfig::default())
    }

    #[tokio::test]
    async fn successful_turn_appends_alternating_pair() {
        let mut session = session(MockClient::replying(&["8.2%"]));

        let outcome = session.submit("What is the cancellation rate?").await;
        assert_eq!(outcome, SubmitOutcome::Completed);

        let state = session.state();
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[0].role, Role::User);
        assert_eq!(state.messages[0].content, "What is the cancellation rate?");
        assert_eq!(state.messages[1].role, Role::Assistant);
        assert_eq!(state.messages[1].content, "8.2%");
        assert!(!state.is_loading);
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn n_turns_yield_2n_messages_in_role_order() {
        let mut session = session(MockClient::replying(&["a", "b", "c"]));
        for question in ["one", "two", "three"] {
            session.submit(question).await;
        }

        let state = session.state();
        assert_eq!(state.messages.len(), 6);
        for (i, message) in state.messages.iter().enumerate() {
            let expected = if i % 2 == 0 {
                Role::User
            } else {
                Role::Assistant
            };
            assert_eq!(message.role, expected);
        }
        // Ids are strictly increasing across the whole log.
        for pair in state.messages.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }

    #[tokio::test]
    async fn whitespace_submit_is_a_no_op() {
        let mut session = session(MockClient::replying(&["unused"]));

        assert_eq!(session.submit("").await, SubmitOutcome::Rejected);
        assert_eq!(session.submit("   \t\n").await, SubmitOutcome::Rejected);

        assert_eq!(session.state(), &ChatState::default());
        assert_eq!(MockClient::request_count(&session), 0);
    }

    #[tokio::test]
    async fn submit_while_loading_is_a_no_op() {
        let mut session = session(MockClient::replying(&["unused"]));
        session.store.update(|state| ChatState {
            is_loading: true,
            ..state
        });

        assert_eq!(session.submit("hello?").await, SubmitOutcome::Rejected);
        assert!(session.state().messages.is_empty());
        assert_eq!(MockClient::request_count(&session), 0);
    }

    #[tokio::test]
    async fn input_is_trimmed_before_appending() {
        let mut session = session(MockClient::replying(&["ok"]));
        session.submit("  revenue trends  ").await;
        assert_eq!(session.state().messages[0].content, "revenue trends");
        assert_eq!(
            MockClient::last_request(&session).message,
            "revenue trends"
        );
    }

    #[tokio::test]
    async fn failure_keeps_optimistic_message_and_sets_error() {
        let mut session = session(MockClient::new(vec![Err(Error::connection(
            "connection refused",
            None,
        ))]));

        session.submit("anything").await;

        let state = session.state();
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].role, Role::User);
        assert!(!state.is_loading);
        assert_eq!(
            state.error.as_deref(),
            Some("Connection error: connection refused")
        );
    }

    #[tokio::test]
    async fn missing_credential_surfaces_through_error_path() {
        let mut session = session(MockClient::new(vec![Err(Error::authentication(
            "API key not provided and COHERE_API_KEY environment variable not set",
        ))]));

        session.submit("hello").await;

        let state = session.state();
        assert_eq!(state.messages.len(), 1);
        assert!(!state.is_loading);
        assert!(state.error.as_deref().unwrap().contains("COHERE_API_KEY"));
    }

    #[tokio::test]
    async fn empty_reply_is_a_failure() {
        for response in [
            ChatResponse::default(),
            ChatResponse {
                text: Some(String::new()),
                ..ChatResponse::default()
            },
        ] {
            let mut session = session(MockClient::new(vec![Ok(response)]));
            session.submit("hello").await;

            let state = session.state();
            assert_eq!(state.messages.len(), 1);
            assert!(!state.is_loading);
            assert_eq!(
                state.error.as_deref(),
                Some("Empty response: No response received from Cohere")
            );
        }
    }

    #[tokio::test]
    async fn next_success_clears_prior_error() {
        let mut session = session(MockClient::new(vec![
            Err(Error::service_unavailable("overloaded", None)),
            Ok(ChatResponse {
                text: Some("recovered".to_string()),
                ..ChatResponse::default()
            }),
        ]));

        session.submit("first").await;
        assert!(session.state().error.is_some());

        session.submit("second").await;
        let state = session.state();
        assert!(state.error.is_none());
        assert_eq!(state.messages.len(), 3);
        assert_eq!(state.last_reply().unwrap().content, "recovered");
    }

    #[tokio::test]
    async fn context_covers_prior_turns_in_order() {
        let mut session = session(MockClient::replying(&["r1", "r2", "r3"]));
        session.submit("q1").await;
        session.submit("q2").await;
        session.submit("q3").await;

        let request = MockClient::last_request(&session);
        assert_eq!(request.message, "q3");

        // Turn N carries 2(N-1) history entries with mapped role tags.
        let history = &request.chat_history;
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].role, ChatRole::User);
        assert_eq!(history[0].message, "q1");
        assert_eq!(history[1].role, ChatRole::Chatbot);
        assert_eq!(history[1].message, "r1");
        assert_eq!(history[2].role, ChatRole::User);
        assert_eq!(history[2].message, "q2");
        assert_eq!(history[3].role, ChatRole::Chatbot);
        assert_eq!(history[3].message, "r2");
    }

    #[tokio::test]
    async fn failed_turn_appears_in_later_context() {
        // The optimistic user message from a failed turn stays in history
        // and is sent as context on the next turn.
        let mut session = session(MockClient::new(vec![
            Err(Error::timeout("slow", None)),
            Ok(ChatResponse {
                text: Some("ok".to_string()),
                ..ChatResponse::default()
            }),
        ]));

        session.submit("lost question").await;
        session.submit("retry").await;

        let request = MockClient::last_request(&session);
        assert_eq!(request.chat_history.len(), 1);
        assert_eq!(request.chat_history[0].role, ChatRole::User);
        assert_eq!(request.chat_history[0].message, "lost question");
    }

    #[tokio::test]
    async fn clear_resets_state() {
        let mut session = session(MockClient::replying(&["reply"]));
        session.submit("hello").await;
        assert_eq!(session.message_count(), 2);

        session.clear();
        assert_eq!(session.state(), &ChatState::default());
    }

    #[tokio::test]
    async fn stats_track_turns_and_failures() {
        let mut session = session(MockClient::new(vec![
            Ok(ChatResponse {
                text: Some("fine".to_string()),
                ..ChatResponse::default()
            }),
            Err(Error::internal_server("boom")),
        ]));

        session.submit("one").await;
        session.submit("two").await;

        let stats = session.stats();
        assert_eq!(stats.message_count, 3);
        assert_eq!(stats.turn_count, 2);
        assert_eq!(stats.failure_count, 1);
        assert!(stats.web_search);
    }

    #[tokio::test]
    async fn watchers_observe_both_transition_points() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let mut session = session(MockClient::replying(&["reply"]));
        let updates = Arc::new(AtomicUsize::new(0));
        let updates_seen = Arc::clone(&updates);
        session.subscribe(Box::new(move |_| {
            updates_seen.fetch_add(1, Ordering::SeqCst);
        }));

        session.submit("hello").await;
        // One update at submit, one at resolve.
        assert_eq!(updates.load(Ordering::SeqCst), 2);
    }
}

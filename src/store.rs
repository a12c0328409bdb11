//! Conversation state container.
//!
//! This module provides [`ConversationStore`], the single source of truth
//! for the message log and request status. All mutation goes through
//! [`ConversationStore::update`], which applies a pure transformation to the
//! previous state and publishes the result to subscribers. The submission
//! flow in [`crate::chat::session`] is the only component that constructs
//! new states.

use crate::types::{Message, MessageId, Role};

/// A watcher notified with the new state after every update.
pub type Watcher = Box<dyn Fn(&ChatState) + Send>;

/// Snapshot of the conversation: the ordered message log plus the transient
/// request status.
///
/// Invariants maintained by the submission flow:
/// - `messages` is append-only within a session; insertion order is
///   chronological order is display order.
/// - `is_loading` is true exactly while a remote call is outstanding.
/// - `is_loading` and `error` are mutually exclusive in steady state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    /// The conversation log, oldest first.
    pub messages: Vec<Message>,

    /// True while a remote call is outstanding.
    pub is_loading: bool,

    /// Human-readable description of the last failure, if any. Cleared when
    /// a new submission starts.
    pub error: Option<String>,
}

impl ChatState {
    /// Returns a state with the given message appended.
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Returns the most recent assistant message, if any.
    pub fn last_reply(&self) -> Option<&Message> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.role == Role::Assistant)
    }
}

/// Owns the [`ChatState`] and the message-id counter.
///
/// The store performs no validation; it accepts whatever state the
/// submission flow constructs.
#[derive(Default)]
pub struct ConversationStore {
    state: ChatState,
    next_id: u64,
    watchers: Vec<Watcher>,
}

impl ConversationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows the current state.
    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// Returns a read-only clone of the current state.
    pub fn snapshot(&self) -> ChatState {
        self.state.clone()
    }

    /// Applies `transform` to the previous state and publishes the result.
    ///
    /// The transform receives the previous state by value so concurrent
    /// producers added later cannot lose updates by reading a stale
    /// snapshot.
    pub fn update(&mut self, transform: impl FnOnce(ChatState) -> ChatState) {
        let previous = std::mem::take(&mut self.state);
        self.state = transform(previous);
        for watcher in &self.watchers {
            watcher(&self.state);
        }
    }

    /// Registers a watcher that is notified with the new state after every
    /// update.
    pub fn subscribe(&mut self, watcher: Watcher) {
        self.watchers.push(watcher);
    }

    /// Allocates the next message id. Ids are monotonic and never reused.
    pub fn next_message_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn empty_store() {
        let store = ConversationStore::new();
        assert!(store.state().messages.is_empty());
        assert!(!store.state().is_loading);
        assert!(store.state().error.is_none());
    }

    #[test]
    fn update_sees_previous_state() {
        let mut store = ConversationStore::new();
        let id = store.next_message_id();
        store.update(|state| state.with_message(Message::user(id, "first")));
        store.update(|state| {
            assert_eq!(state.messages.len(), 1);
            ChatState {
                is_loading: true,
                ..state
            }
        });
        assert_eq!(store.state().messages.len(), 1);
        assert!(store.state().is_loading);
    }

    #[test]
    fn ids_are_monotonic() {
        let mut store = ConversationStore::new();
        let first = store.next_message_id();
        let second = store.next_message_id();
        assert!(first < second);
    }

    #[test]
    fn watchers_see_every_update() {
        let mut store = ConversationStore::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_by_watcher = Arc::clone(&seen);
        store.subscribe(Box::new(move |state| {
            seen_by_watcher.store(state.messages.len(), Ordering::SeqCst);
        }));

        let id = store.next_message_id();
        store.update(|state| state.with_message(Message::user(id, "hello")));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn last_reply_skips_user_messages() {
        let mut state = ChatState::default();
        state = state.with_message(Message::user(MessageId(0), "q"));
        assert!(state.last_reply().is_none());
        state = state.with_message(Message::assistant(MessageId(1), "a"));
        state = state.with_message(Message::user(MessageId(2), "q2"));
        assert_eq!(state.last_reply().unwrap().content, "a");
    }
}

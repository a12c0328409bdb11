//! Integration tests for the concierge library.
//! These tests require an API key in the environment to run.

#[cfg(test)]
mod tests {
    use concierge::chat::{ChatConfig, ChatSession};
    use concierge::types::ChatRequest;
    use concierge::{Cohere, Role};

    #[tokio::test]
    async fn test_simple_chat_request() {
        // This test requires COHERE_API_KEY to be set
        let api_key = std::env::var("COHERE_API_KEY").ok();
        if api_key.is_none() {
            eprintln!("Skipping test: COHERE_API_KEY not set");
            return;
        }

        let client = Cohere::new(api_key).expect("Failed to create client");

        let request = ChatRequest::new(
            "Say 'test passed'",
            Vec::new(),
            "You are a terse test assistant.",
        );

        let response = client.chat(request).await;
        assert!(
            response.is_ok(),
            "Request should succeed with valid API key"
        );
        assert!(response.unwrap().text().is_some());
    }

    #[tokio::test]
    async fn test_session_turn() {
        let api_key = std::env::var("COHERE_API_KEY").ok();
        if api_key.is_none() {
            eprintln!("Skipping test: COHERE_API_KEY not set");
            return;
        }

        let client = Cohere::new(api_key).expect("Failed to create client");
        let mut session = ChatSession::new(client, ChatConfig::default());

        session.submit("What is a typical hotel cancellation rate?").await;

        let state = session.snapshot();
        assert!(state.error.is_none(), "Turn should succeed: {:?}", state.error);
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[1].role, Role::Assistant);
    }
}

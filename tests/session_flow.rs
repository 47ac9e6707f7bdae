//! End-to-end lifecycle scenarios over the public API: restore, exchange,
//! fail, and persist against an in-memory store and stubbed assistant.

use std::cell::RefCell;

use async_trait::async_trait;
use portfolio_chat::store::encode_snapshot;
use portfolio_chat::{
    AssistantClient, ChatError, ChatResponse, ConversationStore, MemoryStore, MessageRole, Phase,
    SessionController,
};

/// Scripted assistant: pops the next canned result per call.
struct ScriptedClient {
    script: RefCell<Vec<Result<ChatResponse, ChatError>>>,
}

impl ScriptedClient {
    fn new(script: Vec<Result<ChatResponse, ChatError>>) -> Self {
        Self { script: RefCell::new(script) }
    }

    fn reply(response: &str, session_id: &str) -> Result<ChatResponse, ChatError> {
        Ok(ChatResponse {
            response: response.to_string(),
            session_id: session_id.to_string(),
            timestamp: "2024-01-01T00:00:00Z".parse().unwrap(),
        })
    }
}

#[async_trait(?Send)]
impl AssistantClient for ScriptedClient {
    async fn send(
        &self,
        _utterance: &str,
        _session_id: Option<&str>,
    ) -> Result<ChatResponse, ChatError> {
        self.script.borrow_mut().remove(0)
    }
}

#[tokio::test]
async fn first_exchange_starts_the_session_and_persists_it() {
    let store = MemoryStore::new();
    let client = ScriptedClient::new(vec![ScriptedClient::reply(
        "I moved from manufacturing into AI work.",
        "abc123",
    )]);

    let mut controller = SessionController::new(&store);
    controller.send(&client, "What's your background?").await;

    let conversation = controller.conversation();
    assert_eq!(conversation.messages.len(), 3);
    assert_eq!(conversation.messages[0].role, MessageRole::Assistant);
    assert_eq!(conversation.messages[1].content, "What's your background?");
    assert_eq!(conversation.session_id.as_deref(), Some("abc123"));
    assert_eq!(store.raw().unwrap(), encode_snapshot(conversation).unwrap());
}

#[tokio::test]
async fn conversation_survives_a_page_reload() {
    let store = MemoryStore::new();
    let client = ScriptedClient::new(vec![
        ScriptedClient::reply("First answer.", "abc123"),
        ScriptedClient::reply("Second answer.", "zzz999"),
    ]);

    {
        let mut controller = SessionController::new(&store);
        controller.send(&client, "first question").await;
    }

    // Next page load: same store slot, new controller.
    let mut controller = SessionController::new(&store);
    assert_eq!(controller.conversation().messages.len(), 3);
    assert_eq!(controller.conversation().session_id.as_deref(), Some("abc123"));

    controller.send(&client, "second question").await;
    let conversation = controller.conversation();
    assert_eq!(conversation.messages.len(), 5);
    // The session stays pinned to the id adopted before the reload.
    assert_eq!(conversation.session_id.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn reloading_an_unstarted_conversation_starts_fresh() {
    let store = MemoryStore::new();
    let client = ScriptedClient::new(vec![Err(ChatError::Unavailable)]);

    {
        let mut controller = SessionController::new(&store);
        controller.send(&client, "hello?").await;
        // Failed first turn: no session id, so nothing was persisted.
        assert_eq!(controller.conversation().messages.len(), 3);
    }

    let controller = SessionController::new(&store);
    assert_eq!(controller.conversation().messages.len(), 1);
    assert!(controller.conversation().session_id.is_none());
}

#[tokio::test]
async fn failed_turn_then_retry_recovers_in_one_conversation() {
    let store = MemoryStore::new();
    let client = ScriptedClient::new(vec![
        Err(ChatError::Timeout),
        ScriptedClient::reply("Here at last.", "abc123"),
    ]);

    let mut controller = SessionController::new(&store);

    controller.send(&client, "anyone home?").await;
    assert_eq!(controller.phase(), Phase::Error);
    assert!(controller.current_error().is_some());
    // Seed + user + synthetic failure reply, all still readable.
    assert_eq!(controller.conversation().messages.len(), 3);

    controller.send(&client, "trying again").await;
    assert_eq!(controller.phase(), Phase::Idle);
    assert!(controller.current_error().is_none());
    let conversation = controller.conversation();
    assert_eq!(conversation.messages.len(), 5);
    assert_eq!(conversation.messages[4].content, "Here at last.");
    assert_eq!(conversation.session_id.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn persisted_snapshot_is_stable_across_load_save_cycles() {
    let store = MemoryStore::new();
    let client = ScriptedClient::new(vec![ScriptedClient::reply("Answer.", "abc123")]);

    let mut controller = SessionController::new(&store);
    controller.send(&client, "question").await;
    let first_bytes = store.raw().unwrap();

    // Load the snapshot back and save it untouched.
    let reloaded = store.load().unwrap();
    store.save(&reloaded).unwrap();

    assert_eq!(store.raw().unwrap(), first_bytes);
}

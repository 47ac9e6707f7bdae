use log::{debug, warn};

use crate::client::AssistantClient;
use crate::errors::ChatError;
use crate::models::{ChatRequest, ChatResponse, Conversation, MessageRole};
use crate::store::ConversationStore;

const DEFAULT_GREETING: &str = "Hi! I'm the AI assistant for this portfolio. \
     Ask me anything about my background, skills, projects, or career journey.";

/// Appended after the user-safe failure sentence in the synthetic reply,
/// pointing at the alternate contact path.
const FAILURE_FOLLOW_UP: &str =
    "Please try again later, or reach out through the contact form if the issue persists!";

/// Where the controller is in the current turn. `Error` is transient: the
/// next submission collapses it back into a normal turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingReply,
    Error,
}

/// Orchestrates one conversation against an injected store and client:
/// optimistic local append, the network round-trip, error recovery, and
/// persistence. Constructed once per page session and handed to the boundary
/// layer explicitly — there is no ambient instance.
///
/// The turn is an explicit two-phase machine so the suspension point is
/// first-class: [`submit`](Self::submit) appends the user message and yields
/// the wire request, then exactly one of [`succeed`](Self::succeed) or
/// [`fail`](Self::fail) resolves the turn. [`send`](Self::send) drives a
/// whole turn in one call for non-reactive embeddings.
///
/// Submissions are not blocked in-model while a reply is outstanding; the
/// boundary layer keeps at most one request in flight. If two turns do
/// overlap, both optimistic appends are kept in order and session adoption
/// is first-write-wins, so late replies cannot repin the session.
pub struct SessionController<S: ConversationStore> {
    store: S,
    conversation: Conversation,
    phase: Phase,
    error: Option<String>,
}

impl<S: ConversationStore> SessionController<S> {
    /// Restores the persisted conversation, or seeds a fresh one with the
    /// default greeting when the slot is absent or unreadable.
    pub fn new(store: S) -> Self {
        Self::with_greeting(store, DEFAULT_GREETING)
    }

    pub fn with_greeting(store: S, greeting: &str) -> Self {
        let conversation = match store.load() {
            Some(conversation) => {
                debug!(
                    "restored conversation: {} messages, session {:?}",
                    conversation.messages.len(),
                    conversation.session_id
                );
                conversation
            }
            None => Conversation::seeded(greeting),
        };
        Self { store, conversation, phase: Phase::Idle, error: None }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The transient notice for the inline error banner. Distinct from the
    /// synthetic chat message and never persisted.
    pub fn current_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Starts a turn. Whitespace-only input is a no-op and yields `None`:
    /// nothing is appended and no request should be made. Otherwise the user
    /// message is appended immediately — it stays visible regardless of how
    /// the network call ends — any previous error notice is cleared, and the
    /// wire request for the assistant call is returned.
    pub fn submit(&mut self, text: &str) -> Option<ChatRequest> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.error = None;
        self.conversation.append(MessageRole::User, trimmed);
        self.phase = Phase::AwaitingReply;
        Some(ChatRequest {
            message: trimmed.to_string(),
            session_id: self.conversation.session_id.clone(),
        })
    }

    /// Resolves the outstanding turn with the assistant's reply: appends it
    /// (stamped with the backend timestamp), pins the session identifier if
    /// none was adopted yet, and persists.
    pub fn succeed(&mut self, response: ChatResponse) {
        let ChatResponse { response: reply, session_id, timestamp } = response;
        self.conversation.append_at(MessageRole::Assistant, reply, timestamp);
        self.conversation.adopt_session(&session_id);
        self.phase = Phase::Idle;
        self.persist();
    }

    /// Resolves the outstanding turn with a failure. The user's message is
    /// kept, a synthetic assistant reply describes the failure in user-safe
    /// terms, and the short notice is recorded for the inline banner. The
    /// turn is terminal: there is no automatic retry.
    pub fn fail(&mut self, error: ChatError) {
        warn!("assistant turn failed: {error}");
        let text = format!("{} {}", error.user_message(), FAILURE_FOLLOW_UP);
        self.conversation.append(MessageRole::Assistant, text);
        self.error = Some(error.notice().to_string());
        self.phase = Phase::Error;
        self.persist();
    }

    /// One full turn: submit, call the assistant, resolve. Returns `false`
    /// when the input was rejected as empty and no call was made.
    pub async fn send<C: AssistantClient>(&mut self, client: &C, text: &str) -> bool {
        let Some(request) = self.submit(text) else {
            return false;
        };
        match client.send(&request.message, request.session_id.as_deref()).await {
            Ok(response) => self.succeed(response),
            Err(error) => self.fail(error),
        }
        true
    }

    /// Fire-and-forget persistence, gated so a conversation that never
    /// really started (no session, nothing beyond the seed) is not written.
    fn persist(&self) {
        if !self.conversation.started() {
            return;
        }
        if let Err(e) = self.store.save(&self.conversation) {
            warn!("failed to persist conversation: {e}");
        }
    }
}

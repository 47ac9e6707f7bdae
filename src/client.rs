use async_trait::async_trait;

use crate::errors::ChatError;
use crate::models::ChatResponse;

/// Network boundary to the remote assistant. One round-trip: the user's
/// utterance plus the pinned session identifier (if any) go out, the reply
/// text, the authoritative session identifier, and the backend timestamp
/// come back.
///
/// Callers are responsible for handing in a non-empty trimmed utterance;
/// validation is the session controller's job, not the client's. Impls must
/// not touch conversation state or storage: the one side effect is the
/// network call itself. Any timeout handling lives behind this trait and
/// surfaces as [`ChatError::Timeout`].
///
/// Futures are deliberately `?Send` so browser-side impls qualify.
#[async_trait(?Send)]
pub trait AssistantClient {
    async fn send(
        &self,
        utterance: &str,
        session_id: Option<&str>,
    ) -> Result<ChatResponse, ChatError>;
}

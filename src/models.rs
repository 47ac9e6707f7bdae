use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single exchanged message. Ordering within a conversation is list
/// position; `id` is identity only and `created_at` is display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// The conversation held in memory for the active page load. The same shape
/// is the durable snapshot: `sessionId` is omitted until the backend assigns
/// one, and message timestamps serialize as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub messages: Vec<Message>,
}

impl Conversation {
    /// Fresh conversation holding exactly the seed assistant greeting.
    pub fn seeded(greeting: &str) -> Self {
        let mut conversation = Self { session_id: None, messages: Vec::new() };
        conversation.append(MessageRole::Assistant, greeting);
        conversation
    }

    /// Appends a message stamped with the current time.
    pub fn append(&mut self, role: MessageRole, content: impl Into<String>) {
        self.append_at(role, content, Utc::now());
    }

    /// Appends a message with an explicit timestamp (assistant replies carry
    /// the backend's `timestamp` rather than local receipt time).
    pub fn append_at(&mut self, role: MessageRole, content: impl Into<String>, at: DateTime<Utc>) {
        let message = Message {
            id: self.next_id(),
            role,
            content: content.into(),
            created_at: at,
        };
        self.messages.push(message);
    }

    /// Adopts a backend-assigned session identifier. First write wins: once a
    /// non-empty id is pinned, later values are ignored. Identifiers are
    /// never generated on this side.
    pub fn adopt_session(&mut self, session_id: &str) {
        if self.session_id.is_none() && !session_id.is_empty() {
            self.session_id = Some(session_id.to_string());
        }
    }

    /// Whether the conversation has actually started: a session id has been
    /// assigned and something beyond the seed greeting was exchanged. Only
    /// started conversations are worth persisting.
    pub fn started(&self) -> bool {
        self.session_id.is_some() && self.messages.len() > 1
    }

    /// Next message id, derived from creation time in epoch milliseconds.
    /// Same-millisecond appends fall back to `last + 1` so ids stay strictly
    /// increasing in insertion order.
    fn next_id(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        match self.messages.last() {
            Some(last) => now_ms.max(last.id + 1),
            None => now_ms,
        }
    }
}

/// Request body for the chat endpoint. Matches the backend contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Successful reply from the chat endpoint. Matches the backend contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
}

/// Error payload the backend attaches to non-2xx chat responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

/// Contact-form submission. Single request/response, nothing persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_conversation_has_one_assistant_message() {
        let conversation = Conversation::seeded("Hi there!");
        assert_eq!(conversation.messages.len(), 1);
        assert_eq!(conversation.messages[0].role, MessageRole::Assistant);
        assert_eq!(conversation.messages[0].content, "Hi there!");
        assert!(conversation.session_id.is_none());
        assert!(!conversation.started());
    }

    #[test]
    fn message_ids_strictly_increase_for_same_millisecond_appends() {
        let mut conversation = Conversation::seeded("hello");
        conversation.append(MessageRole::User, "one");
        conversation.append(MessageRole::Assistant, "two");
        conversation.append(MessageRole::User, "three");

        let ids: Vec<i64> = conversation.messages.iter().map(|m| m.id).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "ids must strictly increase: {ids:?}");
        }
    }

    #[test]
    fn session_adoption_pins_the_first_nonempty_id() {
        let mut conversation = Conversation::seeded("hello");
        conversation.adopt_session("");
        assert!(conversation.session_id.is_none());

        conversation.adopt_session("abc123");
        assert_eq!(conversation.session_id.as_deref(), Some("abc123"));

        conversation.adopt_session("zzz999");
        assert_eq!(conversation.session_id.as_deref(), Some("abc123"));
    }

    #[test]
    fn started_requires_session_and_more_than_the_seed() {
        let mut conversation = Conversation::seeded("hello");
        conversation.adopt_session("abc123");
        assert!(!conversation.started());

        conversation.append(MessageRole::User, "question");
        assert!(conversation.started());
    }

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&MessageRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&MessageRole::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn chat_request_omits_absent_session_id() {
        let request = ChatRequest { message: "hi".to_string(), session_id: None };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"message":"hi"}"#);

        let request = ChatRequest {
            message: "hi".to_string(),
            session_id: Some("abc123".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"message":"hi","sessionId":"abc123"}"#
        );
    }
}

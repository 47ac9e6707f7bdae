use thiserror::Error;

/// Failure kinds at the assistant-client boundary. The distinction only
/// drives user-facing wording: the session controller recovers the same way
/// for all of them, and none of them ever escapes to the UI as a fault.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatError {
    // ── Transport ────────────────────────────────────────────────────────────
    #[error("assistant service unavailable")]
    Unavailable,

    #[error("assistant did not respond in time")]
    Timeout,

    // ── Backend-reported ─────────────────────────────────────────────────────
    #[error("assistant rejected the request: {detail}")]
    Rejected { detail: String },

    #[error("unexpected chat failure: {0}")]
    Unknown(String),
}

impl ChatError {
    pub fn rejected(detail: impl Into<String>) -> Self {
        ChatError::Rejected { detail: detail.into() }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ChatError::Unavailable | ChatError::Timeout)
    }

    /// Sentence embedded in the synthetic assistant message appended when a
    /// turn fails. Rejections surface the backend's own human-readable
    /// detail; everything else gets a generic apology.
    pub fn user_message(&self) -> String {
        match self {
            ChatError::Unavailable | ChatError::Unknown(_) => {
                "I'm sorry, I'm having trouble connecting to my AI brain right now.".to_string()
            }
            ChatError::Timeout => {
                "I'm sorry, that answer took too long and I had to give up.".to_string()
            }
            ChatError::Rejected { detail } => detail.clone(),
        }
    }

    /// Short string for the inline error banner, tracked separately from the
    /// chat message text and never persisted.
    pub fn notice(&self) -> &'static str {
        match self {
            ChatError::Unavailable => "Unable to connect to the assistant service",
            ChatError::Timeout => "The assistant service is temporarily unavailable",
            ChatError::Rejected { .. } => "The assistant could not answer that message",
            ChatError::Unknown(_) => "Failed to get a response from the assistant",
        }
    }
}

/// Persistence-edge failure. Saving is fire-and-forget from the controller's
/// perspective: these are logged and dropped, never propagated.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize conversation snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage backend rejected the write: {0}")]
    Backend(String),
}

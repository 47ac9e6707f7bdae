use std::cell::RefCell;

use crate::errors::StoreError;
use crate::models::Conversation;
use crate::store::{decode_snapshot, encode_snapshot, ConversationStore};

/// In-process store holding the serialized snapshot in a single slot.
/// The stub used throughout the tests, and the fallback for embedders with
/// no durable storage at all (the conversation then lives for one page load).
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with raw slot content, as if a previous page load had
    /// written it.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { slot: RefCell::new(Some(raw.into())) }
    }

    /// The stored bytes, exactly as written.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ConversationStore for MemoryStore {
    fn load(&self) -> Option<Conversation> {
        self.slot.borrow().as_deref().and_then(decode_snapshot)
    }

    fn save(&self, conversation: &Conversation) -> Result<(), StoreError> {
        let encoded = encode_snapshot(conversation)?;
        *self.slot.borrow_mut() = Some(encoded);
        Ok(())
    }
}

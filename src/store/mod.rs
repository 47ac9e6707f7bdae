mod memory;

pub use memory::MemoryStore;

use log::warn;

use crate::errors::StoreError;
use crate::models::Conversation;

/// Durable slot for the conversation snapshot. Injected into the session
/// controller so tests and embedders without browser storage can swap in
/// [`MemoryStore`].
///
/// `load` never fails loudly: an absent or malformed snapshot yields `None`
/// and the caller starts a fresh conversation. `save` overwrites the slot
/// with the serialized snapshot; writing the same conversation twice stores
/// the same bytes.
pub trait ConversationStore {
    fn load(&self) -> Option<Conversation>;
    fn save(&self, conversation: &Conversation) -> Result<(), StoreError>;
}

impl<S: ConversationStore + ?Sized> ConversationStore for &S {
    fn load(&self) -> Option<Conversation> {
        (**self).load()
    }

    fn save(&self, conversation: &Conversation) -> Result<(), StoreError> {
        (**self).save(conversation)
    }
}

/// Serializes the snapshot. Field order is fixed by the struct, so encoding
/// is deterministic and load-then-save round-trips byte-identically.
pub fn encode_snapshot(conversation: &Conversation) -> Result<String, StoreError> {
    Ok(serde_json::to_string(conversation)?)
}

/// Parses a stored snapshot, failing soft: malformed JSON, missing fields,
/// unparsable timestamps, or an empty message list all discard the snapshot.
/// An empty list cannot satisfy the seed-greeting invariant, so it is
/// treated as corrupt rather than restored.
pub fn decode_snapshot(raw: &str) -> Option<Conversation> {
    let conversation: Conversation = match serde_json::from_str(raw) {
        Ok(conversation) => conversation,
        Err(e) => {
            warn!("discarding stored conversation snapshot: {e}");
            return None;
        }
    };
    if conversation.messages.is_empty() {
        warn!("discarding stored conversation snapshot: empty message list");
        return None;
    }
    Some(conversation)
}

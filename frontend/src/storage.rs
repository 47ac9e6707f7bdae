use log::warn;

use portfolio_chat::store::{decode_snapshot, encode_snapshot};
use portfolio_chat::{Conversation, ConversationStore, StoreError};

/// localStorage slot holding the conversation snapshot.
const SESSION_SLOT: &str = "aiChatSession";

/// `localStorage`-backed conversation store. When storage is unavailable
/// (privacy mode, sandboxed webviews) the widget still works for the current
/// page load: loads see nothing and saves are dropped with a logged warning.
pub struct BrowserStore {
    storage: Option<web_sys::Storage>,
}

impl BrowserStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage unavailable; the conversation will not survive reloads");
        }
        Self { storage }
    }
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStore for BrowserStore {
    fn load(&self) -> Option<Conversation> {
        let storage = self.storage.as_ref()?;
        let raw = storage.get_item(SESSION_SLOT).ok().flatten()?;
        decode_snapshot(&raw)
    }

    fn save(&self, conversation: &Conversation) -> Result<(), StoreError> {
        let Some(storage) = self.storage.as_ref() else {
            return Err(StoreError::Backend("localStorage unavailable".to_string()));
        };
        let encoded = encode_snapshot(conversation)?;
        storage
            .set_item(SESSION_SLOT, &encoded)
            .map_err(|_| StoreError::Backend("localStorage write rejected".to_string()))
    }
}

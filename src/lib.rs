//! Session lifecycle core for the portfolio assistant widget.
//!
//! Turns free-text user input into a persisted, ordered conversation with the
//! remote assistant service, surviving page reloads, network failures, and
//! partial responses. The boundary layer renders [`Conversation`] and drives
//! [`SessionController`]; persistence and the network call sit behind the
//! injected [`ConversationStore`] and [`AssistantClient`] seams.

pub mod client;
pub mod errors;
pub mod models;
pub mod session;
pub mod store;

pub use client::AssistantClient;
pub use errors::{ChatError, StoreError};
pub use models::{
    ApiErrorBody, ChatRequest, ChatResponse, ContactRequest, ContactResponse, Conversation,
    Message, MessageRole,
};
pub use session::{Phase, SessionController};
pub use store::{ConversationStore, MemoryStore};

//! Conversation storage
//!
//! Handlers only talk to the [`ConversationStore`] trait, so a durable
//! backend can replace [`InMemoryStore`] without touching request logic.

pub mod error;
pub mod memory;

use async_trait::async_trait;

use crate::models::Turn;

pub use error::{Result, StoreError};
pub use memory::InMemoryStore;

/// Append-only log of turns keyed by conversation id
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Return the turns stored under `id` in insertion order.
    ///
    /// An unknown id yields an empty list, it is not an error.
    async fn get(&self, id: &str) -> Result<Vec<Turn>>;

    /// Append `turn` to the end of `id`, creating the conversation if absent.
    async fn append(&self, id: &str, turn: Turn) -> Result<()>;

    /// Every known conversation id, in the order the store first saw them.
    async fn list_ids(&self) -> Result<Vec<String>>;
}

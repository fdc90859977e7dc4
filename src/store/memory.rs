use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ConversationStore, Result};
use crate::models::{ConversationId, Turn};

#[derive(Debug, Default)]
struct Inner {
    turns: HashMap<ConversationId, Vec<Turn>>,
    // first-seen order of the keys above
    order: Vec<ConversationId>,
}

/// Process-lifetime store. Nothing survives a restart.
///
/// The lock only keeps the map consistent; two appends made by one
/// submission are not atomic with respect to other requests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the three sample conversations shown on first start
    pub fn seeded() -> Self {
        Self::with_conversations(vec![
            (
                "1".to_string(),
                vec![
                    Turn::user("Hello, world!"),
                    Turn::assistant("Howdy, how can I help you?"),
                ],
            ),
            (
                "2".to_string(),
                vec![
                    Turn::user("What's the weather?"),
                    Turn::assistant("I don't have access to weather data."),
                ],
            ),
            ("3".to_string(), Vec::new()),
        ])
    }

    /// Create a store from `(id, turns)` pairs, keeping their order.
    ///
    /// A repeated id extends the earlier entry.
    pub fn with_conversations(conversations: Vec<(ConversationId, Vec<Turn>)>) -> Self {
        let mut inner = Inner::default();
        for (id, turns) in conversations {
            match inner.turns.get_mut(&id) {
                Some(existing) => existing.extend(turns),
                None => {
                    inner.order.push(id.clone());
                    inner.turns.insert(id, turns);
                }
            }
        }
        Self {
            inner: RwLock::new(inner),
        }
    }
}

#[async_trait]
impl ConversationStore for InMemoryStore {
    async fn get(&self, id: &str) -> Result<Vec<Turn>> {
        let inner = self.inner.read().await;
        Ok(inner.turns.get(id).cloned().unwrap_or_default())
    }

    async fn append(&self, id: &str, turn: Turn) -> Result<()> {
        let mut inner = self.inner.write().await;
        match inner.turns.get_mut(id) {
            Some(turns) => turns.push(turn),
            None => {
                tracing::debug!(conversation_id = %id, "Creating conversation");
                inner.order.push(id.to_string());
                inner.turns.insert(id.to_string(), vec![turn]);
            }
        }
        Ok(())
    }

    async fn list_ids(&self) -> Result<Vec<String>> {
        let inner = self.inner.read().await;
        Ok(inner.order.clone())
    }
}

//! Conversation selection and message submission
//!
//! This is the request logic behind `GET /chat/{id}` and
//! `POST /send-message`, kept free of HTTP types so it can be driven
//! directly.

use std::sync::Arc;

use uuid::Uuid;

use crate::generator::ResponseGenerator;
use crate::models::{Exchange, Turn};
use crate::sessions::SessionRegistry;
use crate::store::{ConversationStore, Result};

#[derive(Clone)]
pub struct ChatService {
    store: Arc<dyn ConversationStore>,
    sessions: Arc<SessionRegistry>,
    generator: Arc<dyn ResponseGenerator>,
}

impl ChatService {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        sessions: Arc<SessionRegistry>,
        generator: Arc<dyn ResponseGenerator>,
    ) -> Self {
        Self {
            store,
            sessions,
            generator,
        }
    }

    pub fn store(&self) -> &Arc<dyn ConversationStore> {
        &self.store
    }

    /// Make `id` the active conversation of `session` and return its turns.
    ///
    /// Unknown ids are accepted: the result is empty and the first submission
    /// afterwards creates the conversation.
    pub async fn select_conversation(&self, session: Uuid, id: &str) -> Result<Vec<Turn>> {
        self.sessions.select(session, id).await;
        let turns = self.store.get(id).await?;
        tracing::debug!(
            session = %session,
            conversation_id = %id,
            turns = turns.len(),
            "Selected conversation"
        );
        Ok(turns)
    }

    /// Generate a reply to `message` and persist both turns to the session's
    /// active conversation.
    ///
    /// Without an active conversation nothing is stored, but the exchange is
    /// still returned for display. The reply is generated once and the same
    /// value is stored and returned.
    pub async fn submit_message(&self, session: Uuid, message: &str) -> Result<Exchange> {
        let exchange = Exchange {
            user: Turn::user(message),
            assistant: Turn::assistant(self.generator.generate(message)),
        };

        match self.sessions.active(session).await {
            Some(id) => {
                self.store.append(&id, exchange.user.clone()).await?;
                self.store.append(&id, exchange.assistant.clone()).await?;
                tracing::info!(session = %session, conversation_id = %id, "Stored exchange");
            }
            None => {
                tracing::debug!(session = %session, "No active conversation, exchange not stored");
            }
        }

        Ok(exchange)
    }
}

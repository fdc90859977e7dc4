// Shared application state handed to every route

use std::sync::Arc;

use crate::chat::ChatService;
use crate::generator::{MirrorGenerator, ResponseGenerator};
use crate::sessions::SessionRegistry;
use crate::store::{ConversationStore, InMemoryStore};

#[derive(Clone)]
pub struct AppState {
    pub chat: ChatService,
}

impl AppState {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        generator: Arc<dyn ResponseGenerator>,
    ) -> Self {
        Self {
            chat: ChatService::new(store, Arc::new(SessionRegistry::new()), generator),
        }
    }

    /// Like [`AppState::new`] with a caller-owned session registry
    pub fn with_sessions(
        store: Arc<dyn ConversationStore>,
        generator: Arc<dyn ResponseGenerator>,
        sessions: Arc<SessionRegistry>,
    ) -> Self {
        Self {
            chat: ChatService::new(store, sessions, generator),
        }
    }

    /// Sample conversations answered by the mirror generator
    pub fn seeded(session_capacity: usize) -> Self {
        Self::with_sessions(
            Arc::new(InMemoryStore::seeded()),
            Arc::new(MirrorGenerator),
            Arc::new(SessionRegistry::with_capacity(session_capacity)),
        )
    }
}

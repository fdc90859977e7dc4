//! Per-session active conversation tracking
//!
//! Each browser carries its own session id, so selecting a conversation in
//! one tab never redirects another client's submissions.

use std::collections::{HashMap, VecDeque};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::ConversationId;

/// Name of the cookie carrying the session id
pub const SESSION_COOKIE: &str = "session_id";

/// Session resolved for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    /// True when the request carried no usable cookie
    pub is_new: bool,
}

impl Session {
    /// Resolve a session from the raw cookie value, minting a new id when it
    /// is missing or not a UUID.
    pub fn from_cookie(value: Option<&str>) -> Self {
        match value.and_then(|v| Uuid::parse_str(v.trim()).ok()) {
            Some(id) => Self { id, is_new: false },
            None => Self {
                id: Uuid::new_v4(),
                is_new: true,
            },
        }
    }

    /// `Set-Cookie` header value pinning this session in the browser
    pub fn cookie_header(&self) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, self.id
        )
    }
}

/// Sessions remembered before the oldest selection is evicted
pub const DEFAULT_SESSION_CAPACITY: usize = 10_000;

#[derive(Debug, Default)]
struct Selections {
    active: HashMap<Uuid, (ConversationId, u64)>,
    // (session, generation) per select call, oldest first; stale entries are skipped
    order: VecDeque<(Uuid, u64)>,
    next_generation: u64,
}

/// Maps session id to the conversation that session last selected.
///
/// Holds at most `capacity` sessions; selecting beyond that forgets the
/// session whose last selection is oldest.
#[derive(Debug)]
pub struct SessionRegistry {
    capacity: usize,
    inner: RwLock<Selections>,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_SESSION_CAPACITY)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: RwLock::new(Selections::default()),
        }
    }

    /// Point `session` at conversation `id`. The id need not exist yet.
    pub async fn select(&self, session: Uuid, id: &str) {
        let mut inner = self.inner.write().await;
        let generation = inner.next_generation;
        inner.next_generation += 1;
        inner.active.insert(session, (id.to_string(), generation));
        inner.order.push_back((session, generation));

        while inner.active.len() > self.capacity {
            let Some((oldest, generation)) = inner.order.pop_front() else {
                break;
            };
            if inner.active.get(&oldest).map(|(_, g)| *g) == Some(generation) {
                inner.active.remove(&oldest);
                tracing::debug!(session = %oldest, "Evicted session");
            }
        }

        // repeated selects by live sessions leave stale entries behind
        if inner.order.len() > self.capacity.saturating_mul(2) {
            let Selections { active, order, .. } = &mut *inner;
            order.retain(|(s, g)| active.get(s).map(|(_, current)| current) == Some(g));
        }
    }

    /// Conversation targeted by submissions from `session`, if any
    pub async fn active(&self, session: Uuid) -> Option<ConversationId> {
        self.inner
            .read()
            .await
            .active
            .get(&session)
            .map(|(id, _)| id.clone())
    }

    /// Number of sessions currently remembered
    pub async fn len(&self) -> usize {
        self.inner.read().await.active.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

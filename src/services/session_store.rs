use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::models::{AppConfig, SessionId};
use crate::services::palette_session::{PaletteSession, SessionError};

/// Trait for palette session storage
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a new session, replacing any with the same ID
    async fn insert(&self, session: PaletteSession) -> Result<(), ApiError>;

    /// Find a session by ID, returning a snapshot
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<PaletteSession>, ApiError>;

    /// Remove a session, returning whether it existed
    async fn remove(&self, id: &SessionId) -> Result<bool, ApiError>;

    /// Number of live sessions
    async fn count(&self) -> usize;
}

/// In-memory session storage, capped at `max_sessions`.
///
/// Inserting past the cap evicts the session that was edited least
/// recently. Reads do not count as edits.
pub struct InMemorySessions {
    inner: Arc<RwLock<Sessions>>,
    max_sessions: usize,
}

struct Sessions {
    entries: HashMap<SessionId, Entry>,
    clock: u64,
}

struct Entry {
    session: PaletteSession,
    last_edit: u64,
}

impl Sessions {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn evict_least_recent(&mut self) -> Option<SessionId> {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_edit)
            .map(|(id, _)| id.clone())?;
        self.entries.remove(&oldest);
        Some(oldest)
    }
}

impl InMemorySessions {
    pub fn new() -> Self {
        Self::with_max_sessions(AppConfig::default().max_sessions)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Sessions {
                entries: HashMap::new(),
                clock: 0,
            })),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Apply an edit to one session under the write lock.
    ///
    /// The closure sees the live session; when it fails the session is left
    /// as the closure left it, so edits must validate before mutating.
    pub async fn update<T, F>(&self, id: &SessionId, edit: F) -> Result<T, ApiError>
    where
        F: FnOnce(&mut PaletteSession) -> Result<T, SessionError>,
    {
        let mut inner = self.inner.write().await;
        let stamp = inner.tick();
        let entry = inner
            .entries
            .get_mut(id)
            .ok_or_else(|| ApiError::SessionNotFound(id.to_string()))?;
        entry.last_edit = stamp;
        Ok(edit(&mut entry.session)?)
    }
}

impl Default for InMemorySessions {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessions {
    async fn insert(&self, session: PaletteSession) -> Result<(), ApiError> {
        let mut inner = self.inner.write().await;
        if !inner.entries.contains_key(&session.id) {
            while inner.entries.len() >= self.max_sessions {
                match inner.evict_least_recent() {
                    Some(evicted) => {
                        tracing::info!(session = %evicted, "Evicted least recently edited session")
                    }
                    None => break,
                }
            }
        }

        let stamp = inner.tick();
        inner.entries.insert(
            session.id.clone(),
            Entry {
                session,
                last_edit: stamp,
            },
        );
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<PaletteSession>, ApiError> {
        let inner = self.inner.read().await;
        Ok(inner.entries.get(id).map(|entry| entry.session.clone()))
    }

    async fn remove(&self, id: &SessionId) -> Result<bool, ApiError> {
        let mut inner = self.inner.write().await;
        Ok(inner.entries.remove(id).is_some())
    }

    async fn count(&self) -> usize {
        self.inner.read().await.entries.len()
    }
}

use super::session::InterviewSession;
use crate::error::{InterviewError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// In-memory session table shared by all request handlers
///
/// Each method takes the lock for exactly one map operation. Nothing holds
/// the lock across a network call; read-then-mutate sequences that must be
/// atomic go through [`SessionStore::update`].
#[derive(Clone, Default)]
pub struct SessionStore {
    /// session_id → session
    sessions: Arc<RwLock<HashMap<String, InterviewSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new session, refusing to overwrite an existing id
    pub async fn create(&self, session: InterviewSession) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.session_id) {
            return Err(InterviewError::AlreadyExists(session.session_id));
        }

        info!("Creating session in store: {}", session.session_id);
        sessions.insert(session.session_id.clone(), session);
        Ok(())
    }

    /// Snapshot of a session, if present
    pub async fn get(&self, session_id: &str) -> Option<InterviewSession> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(session_id).cloned();
        debug!(
            "Session lookup {}: {}",
            session_id,
            if session.is_some() { "found" } else { "not found" }
        );
        session
    }

    /// Remove a session unconditionally, returning it if it existed
    pub async fn delete(&self, session_id: &str) -> Option<InterviewSession> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_id)
    }

    /// Apply `mutator` to a session in place under the write lock
    pub async fn update<F, T>(&self, session_id: &str, mutator: F) -> Result<T>
    where
        F: FnOnce(&mut InterviewSession) -> T,
    {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(session_id) {
            Some(session) => Ok(mutator(session)),
            None => Err(InterviewError::NotFound(session_id.to_string())),
        }
    }

    pub async fn contains(&self, session_id: &str) -> bool {
        self.sessions.read().await.contains_key(session_id)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Ids of all live sessions (diagnostics only, unordered)
    pub async fn ids(&self) -> Vec<String> {
        self.sessions.read().await.keys().cloned().collect()
    }
}

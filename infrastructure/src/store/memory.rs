//! In-process conversation store
//!
//! The map lock is held only long enough to clone a handle out; message
//! handling then locks the session's own mutex, so sessions never contend
//! with each other.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;
use tracing::debug;
use triage_application::{ConversationStore, SessionHandle};
use triage_domain::ConversationSession;

#[derive(Debug, Default)]
pub struct InMemoryConversationStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl InMemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn insert(&self, session: ConversationSession) -> SessionHandle {
        let id = session.id().to_string();
        let handle = Arc::new(Mutex::new(session));
        match self.sessions.write() {
            Ok(mut map) => {
                if map.insert(id.clone(), handle.clone()).is_some() {
                    debug!("Replaced session {}", id);
                }
            }
            Err(poisoned) => {
                poisoned.into_inner().insert(id, handle.clone());
            }
        }
        handle
    }

    async fn get(&self, session_id: &str) -> Option<SessionHandle> {
        match self.sessions.read() {
            Ok(map) => map.get(session_id).cloned(),
            Err(poisoned) => poisoned.into_inner().get(session_id).cloned(),
        }
    }

    async fn remove(&self, session_id: &str) -> bool {
        match self.sessions.write() {
            Ok(mut map) => map.remove(session_id).is_some(),
            Err(poisoned) => poisoned.into_inner().remove(session_id).is_some(),
        }
    }
}

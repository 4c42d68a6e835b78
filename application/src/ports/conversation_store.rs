//! Conversation store port
//!
//! Sessions are handed out behind their own async mutex so that one
//! session's read-advance-write never interleaves with another message for
//! the same session, while different sessions proceed independently.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use triage_domain::ConversationSession;

/// Shared, lockable handle to one session
pub type SessionHandle = Arc<Mutex<ConversationSession>>;

#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Store a fresh session, replacing any existing one with the same id.
    async fn insert(&self, session: ConversationSession) -> SessionHandle;

    /// Handle to an existing session
    async fn get(&self, session_id: &str) -> Option<SessionHandle>;

    /// Drop a session. Returns false if it did not exist.
    async fn remove(&self, session_id: &str) -> bool;
}

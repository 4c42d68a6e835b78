//! Conversation session domain.
//!
//! - [`entities::ConversationSession`]: one user's triage conversation
//! - [`entities::Message`]: a single message within a session

pub mod entities;

//! Conversation session entities

use crate::triage::decision::{TriageDecision, TriageOutcome};
use crate::triage::followup::SessionTriageState;
use serde::{Deserialize, Serialize};

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    /// The clinic agent (older transcripts call it "agent")
    #[serde(alias = "agent")]
    Assistant,
}

impl Role {
    pub fn is_agent(&self) -> bool {
        matches!(self, Role::Assistant)
    }
}

/// A message in a conversation (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A triage conversation (Entity)
///
/// Holds the message log, the collected symptom texts and the triage record.
/// Persisting it is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSession {
    id: String,
    messages: Vec<Message>,
    symptoms_collected: Vec<String>,
    triage_state: SessionTriageState,
}

impl ConversationSession {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            messages: Vec::new(),
            symptoms_collected: Vec::new(),
            triage_state: SessionTriageState::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn symptoms_collected(&self) -> &[String] {
        &self.symptoms_collected
    }

    pub fn triage_state(&self) -> &SessionTriageState {
        &self.triage_state
    }

    /// Replace the triage record after a transition
    pub fn set_triage_state(&mut self, state: SessionTriageState) {
        self.triage_state = state;
    }

    /// Record an inbound user message as both a message and a symptom text
    pub fn add_user_message(&mut self, content: impl Into<String>) {
        let content = content.into();
        self.symptoms_collected.push(content.clone());
        self.messages.push(Message::user(content));
    }

    pub fn add_agent_message(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Messages before the most recent one
    pub fn history_before_latest(&self) -> &[Message] {
        match self.messages.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    pub fn user_message_count(&self) -> usize {
        self.messages.iter().filter(|m| m.role == Role::User).count()
    }

    /// True once a triage decision has been cached
    pub fn is_finalized(&self) -> bool {
        self.triage_state.is_decided()
    }

    pub fn decision(&self) -> Option<&TriageDecision> {
        self.triage_state.decision()
    }

    /// Session-level result: the decision's outcome, or pending
    pub fn triage_result(&self) -> TriageOutcome {
        self.decision()
            .map(|d| d.triage_result)
            .unwrap_or(TriageOutcome::Pending)
    }
}

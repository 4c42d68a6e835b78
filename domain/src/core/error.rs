//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The triage engine itself is total; these only surface when rebuilding
/// domain values from persisted or user-supplied strings, or when a caller
/// drives the follow-up state machine out of order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown trigger: {0}")]
    UnknownTrigger(String),

    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    #[error("Unknown FAQ topic: {0}")]
    UnknownFaqTopic(String),

    #[error("Corrupt triage state: {0}")]
    CorruptTriageState(String),

    #[error("Follow-ups still outstanding: {asked} of {total} asked")]
    FollowupsOutstanding { asked: usize, total: usize },
}

impl DomainError {
    /// Check if this error came from a persisted record that cannot be trusted
    pub fn is_corrupt_state(&self) -> bool {
        matches!(self, DomainError::CorruptTriageState(_))
    }
}

//! Dialogue gateway port
//!
//! Free-form conversational replies come from an external collaborator,
//! usually a hosted language model. The triage engine never depends on
//! what it says; a failed call is replaced with a fixed fallback reply.

use async_trait::async_trait;
use thiserror::Error;
use triage_domain::Message;

/// Errors that can occur while asking the dialogue collaborator for a reply
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Missing API key: set {0}")]
    MissingApiKey(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for free-form dialogue
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait DialogueGateway: Send + Sync {
    /// Reply to `message` given the conversation so far (excluding `message`).
    async fn reply(&self, history: &[Message], message: &str) -> Result<String, GatewayError>;

    /// Short provider name for logs
    fn name(&self) -> &str;
}

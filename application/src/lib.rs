//! Application layer for symptom-triage
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    conversation_store::{ConversationStore, SessionHandle},
    dialogue_gateway::{DialogueGateway, GatewayError},
};
pub use use_cases::assess_symptoms::{AssessSymptomsUseCase, Assessment};
pub use use_cases::handle_message::{
    BOOKING_PROMPT, FALLBACK_REPLY, HandleMessageError, HandleMessageUseCase, ReplyKind,
    TriageReply,
};

//! Infrastructure layer for symptom-triage
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod dialogue;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, DialogueProvider, FileConfig, FileDialogueConfig,
    FileLoggingConfig, FileOutputConfig, FileTriageConfig,
};
#[cfg(feature = "http-dialogue")]
pub use dialogue::OpenAiDialogue;
pub use dialogue::{OfflineDialogue, dialogue_from_config};
pub use logging::JsonlConversationLogger;
pub use store::InMemoryConversationStore;

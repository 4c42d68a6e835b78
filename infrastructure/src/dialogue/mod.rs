//! Dialogue gateway adapters
//!
//! [`OfflineDialogue`] is always available. [`OpenAiDialogue`] needs the
//! `http-dialogue` feature.

mod offline;
#[cfg(feature = "http-dialogue")]
mod openai;

pub use offline::OfflineDialogue;
#[cfg(feature = "http-dialogue")]
pub use openai::OpenAiDialogue;

use crate::config::{DialogueProvider, FileDialogueConfig};
use std::sync::Arc;
use tracing::{info, warn};
use triage_application::DialogueGateway;

/// Build the configured dialogue gateway.
///
/// Anything that prevents the HTTP adapter from starting (feature disabled,
/// missing API key) falls back to [`OfflineDialogue`] with a warning.
pub fn dialogue_from_config(config: &FileDialogueConfig) -> Arc<dyn DialogueGateway> {
    match config.parse_provider().0 {
        DialogueProvider::Offline => {
            info!("Using offline dialogue replies");
            Arc::new(OfflineDialogue::new())
        }
        DialogueProvider::OpenAi => http_dialogue(config),
    }
}

#[cfg(feature = "http-dialogue")]
fn http_dialogue(config: &FileDialogueConfig) -> Arc<dyn DialogueGateway> {
    match OpenAiDialogue::from_config(config) {
        Ok(dialogue) => {
            info!("Using chat-completions dialogue at {}", config.base_url);
            Arc::new(dialogue)
        }
        Err(e) => {
            warn!("Cannot start HTTP dialogue ({}), using offline replies", e);
            Arc::new(OfflineDialogue::new())
        }
    }
}

#[cfg(not(feature = "http-dialogue"))]
fn http_dialogue(_config: &FileDialogueConfig) -> Arc<dyn DialogueGateway> {
    warn!("Built without the http-dialogue feature, using offline replies");
    Arc::new(OfflineDialogue::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_by_default() {
        let gateway = dialogue_from_config(&FileDialogueConfig::default());
        assert_eq!(gateway.name(), "offline");
    }

    #[test]
    fn test_openai_without_key_falls_back() {
        let config = FileDialogueConfig {
            provider: "openai".to_string(),
            api_key: None,
            api_key_env: "SYMPTOM_TRIAGE_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert_eq!(dialogue_from_config(&config).name(), "offline");
    }
}

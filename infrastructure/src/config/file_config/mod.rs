//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Enumerated values are kept as strings and parsed on use so that an
//! unknown name degrades to a warning instead of a load failure.

mod dialogue;
mod logging;
mod output;
mod triage;

pub use dialogue::{DialogueProvider, FileDialogueConfig};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use triage::FileTriageConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use triage_application::BehaviorConfig;
use triage_domain::ConfigIssue;

/// Configuration that cannot be used at all
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Triage behavior
    pub triage: FileTriageConfig,
    /// Free-form dialogue provider
    pub dialogue: FileDialogueConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.triage.validate());
        issues.extend(self.dialogue.validate());
        issues.extend(self.output.parse_format().1);
        issues
    }

    /// Fail on Error-severity issues, handing back the warnings otherwise.
    pub fn ensure_valid(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(
                errors.into_iter().map(|issue| issue.message).collect(),
            ))
        }
    }

    /// Behavior settings for the message use case
    pub fn behavior_config(&self) -> BehaviorConfig {
        BehaviorConfig::default()
            .with_message_threshold(self.triage.message_threshold)
            .with_offer_booking(self.triage.offer_booking)
            .with_recommend_clinics(self.triage.recommend_clinics)
            .with_timeout_seconds(self.dialogue.timeout_seconds)
    }
}

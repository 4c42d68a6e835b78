//! Triage configuration from TOML (`[triage]` section)

use serde::{Deserialize, Serialize};
use triage_domain::{ConfigIssue, ConfigIssueCode, Severity};

/// Raw triage behavior configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTriageConfig {
    /// User messages after which an untriggered conversation is finalized
    pub message_threshold: usize,
    /// Append the booking prompt after a CLINIC decision
    pub offer_booking: bool,
    /// Attach a clinic recommendation to CLINIC decisions
    pub recommend_clinics: bool,
}

impl Default for FileTriageConfig {
    fn default() -> Self {
        Self {
            message_threshold: 5,
            offer_booking: true,
            recommend_clinics: true,
        }
    }
}

impl FileTriageConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.message_threshold > 0 {
            return vec![];
        }
        vec![ConfigIssue {
            severity: Severity::Error,
            code: ConfigIssueCode::InvalidValue {
                field: "triage.message_threshold".to_string(),
                value: self.message_threshold.to_string(),
            },
            message: "triage.message_threshold must be at least 1".to_string(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_threshold_is_an_error() {
        let config = FileTriageConfig {
            message_threshold: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_default_is_valid() {
        assert!(FileTriageConfig::default().validate().is_empty());
    }
}

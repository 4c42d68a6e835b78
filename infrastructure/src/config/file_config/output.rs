//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use triage_domain::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// "text" or "json"; unset means text
    pub format: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Parse the format name, falling back to text with a warning.
    pub fn parse_format(&self) -> (OutputFormat, Vec<ConfigIssue>) {
        let Some(raw) = &self.format else {
            return (OutputFormat::default(), vec![]);
        };
        match raw.parse::<OutputFormat>() {
            Ok(format) => (format, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::UnknownName {
                        field: "output.format".to_string(),
                        value: raw.clone(),
                        valid_values: vec!["text".to_string(), "json".to_string()],
                    },
                    message: format!("output.format: unknown value '{}', falling back to 'text'", raw),
                };
                (OutputFormat::default(), vec![issue])
            }
        }
    }
}

//! Dialogue provider configuration from TOML (`[dialogue]` section)

use serde::{Deserialize, Serialize};
use triage_domain::{ConfigIssue, ConfigIssueCode, Severity};

/// Which adapter answers free-form dialogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogueProvider {
    /// Deterministic canned replies, no network
    #[default]
    Offline,
    /// OpenAI-compatible chat-completions endpoint
    OpenAi,
}

impl DialogueProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogueProvider::Offline => "offline",
            DialogueProvider::OpenAi => "openai",
        }
    }
}

impl std::str::FromStr for DialogueProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "offline" | "none" => Ok(DialogueProvider::Offline),
            "openai" | "openrouter" => Ok(DialogueProvider::OpenAi),
            other => Err(format!("unknown dialogue provider: {}", other)),
        }
    }
}

/// Raw dialogue configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDialogueConfig {
    /// "offline" or "openai"
    pub provider: String,
    /// Base URL of the chat-completions API
    pub base_url: String,
    /// Model identifier sent with each request
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead)
    pub api_key: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Reply timeout; the fallback reply is used when it elapses
    pub timeout_seconds: Option<u64>,
}

impl Default for FileDialogueConfig {
    fn default() -> Self {
        Self {
            provider: "offline".to_string(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "openai/gpt-3.5-turbo".to_string(),
            api_key_env: "OPENROUTER_API_KEY".to_string(),
            api_key: None,
            temperature: 0.7,
            max_tokens: 80,
            timeout_seconds: Some(20),
        }
    }
}

impl FileDialogueConfig {
    /// Parse the provider name, falling back to offline with a warning.
    pub fn parse_provider(&self) -> (DialogueProvider, Vec<ConfigIssue>) {
        match self.provider.parse::<DialogueProvider>() {
            Ok(provider) => (provider, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::UnknownName {
                        field: "dialogue.provider".to_string(),
                        value: self.provider.clone(),
                        valid_values: vec!["offline".to_string(), "openai".to_string()],
                    },
                    message: format!(
                        "dialogue.provider: unknown value '{}', falling back to 'offline'",
                        self.provider
                    ),
                };
                (DialogueProvider::Offline, vec![issue])
            }
        }
    }

    /// API key from the config file, else from `api_key_env`
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|key| !key.is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.parse_provider().1;
        if !(0.0..=2.0).contains(&self.temperature) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::InvalidValue {
                    field: "dialogue.temperature".to_string(),
                    value: self.temperature.to_string(),
                },
                message: format!(
                    "dialogue.temperature: {} is outside 0.0..=2.0",
                    self.temperature
                ),
            });
        }
        issues
    }
}

//! OpenAI-compatible chat-completions adapter
//!
//! Works with any endpoint that speaks the `/chat/completions` protocol
//! (OpenAI, OpenRouter, local servers).

use crate::config::FileDialogueConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use triage_application::{DialogueGateway, GatewayError};
use triage_domain::{Message, Role};

const SYSTEM_PROMPT: &str = "You are the front-desk agent of a medical clinic. You help patients describe their symptoms and book appointments.

Booking flow:
1. The patient describes symptoms: ask one follow-up question, such as how long they have had it.
2. Ask at most one more follow-up, such as whether there are other symptoms.
3. Ask when they would like to come in.
4. Ask for their name and phone number, then stop. The system confirms the booking.

Rules:
- Keep replies to one or two sentences.
- Ask one question at a time.
- Answer greetings briefly and steer back to health concerns.
- Accept Tanglish (Tamil-English mix).
- Never diagnose.";

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

/// Dialogue gateway backed by a chat-completions HTTP API
pub struct OpenAiDialogue {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiDialogue {
    /// Build from the `[dialogue]` section. Fails when no API key is found.
    pub fn from_config(config: &FileDialogueConfig) -> Result<Self, GatewayError> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| GatewayError::MissingApiKey(config.api_key_env.clone()))?;

        let mut builder = reqwest::Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Other(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            api_key,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn build_request<'a>(&'a self, history: &'a [Message], message: &'a str) -> ChatRequest<'a> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatMessage {
            role: "system",
            content: SYSTEM_PROMPT,
        });
        messages.extend(history.iter().map(|m| ChatMessage {
            role: role_name(m.role),
            content: &m.content,
        }));
        messages.push(ChatMessage {
            role: "user",
            content: message,
        });

        ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

/// Extract `choices[0].message.content`, trimmed
fn parse_reply(body: &str) -> Result<String, GatewayError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| GatewayError::InvalidResponse("no choices in response".to_string()))
}

#[async_trait]
impl DialogueGateway for OpenAiDialogue {
    async fn reply(&self, history: &[Message], message: &str) -> Result<String, GatewayError> {
        let request = self.build_request(history, message);
        debug!(
            "Sending {} messages to {} ({})",
            request.messages.len(),
            self.endpoint,
            self.model
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;
        if !status.is_success() {
            return Err(GatewayError::RequestFailed(format!("HTTP {}: {}", status, body)));
        }

        parse_reply(&body)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialogue() -> OpenAiDialogue {
        let config = FileDialogueConfig {
            api_key: Some("sk-test".to_string()),
            base_url: "https://example.invalid/v1/".to_string(),
            ..Default::default()
        };
        OpenAiDialogue::from_config(&config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_cleanly() {
        assert_eq!(dialogue().endpoint, "https://example.invalid/v1/chat/completions");
    }

    #[test]
    fn test_missing_api_key() {
        let config = FileDialogueConfig {
            api_key: None,
            api_key_env: "SYMPTOM_TRIAGE_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            OpenAiDialogue::from_config(&config),
            Err(GatewayError::MissingApiKey(var)) if var == "SYMPTOM_TRIAGE_TEST_UNSET_KEY"
        ));
    }

    #[test]
    fn test_request_maps_agent_messages_to_assistant() {
        let dialogue = dialogue();
        let history = vec![Message::user("I have a fever"), Message::assistant("Since when?")];
        let request = dialogue.build_request(&history, "two days");
        let json = serde_json::to_value(&request).unwrap();

        let messages = json["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[2]["role"], "assistant");
        assert_eq!(messages[3]["content"], "two days");
        assert_eq!(json["max_tokens"], 80);
    }

    #[test]
    fn test_parse_reply() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  How long?  "}}]}"#;
        assert_eq!(parse_reply(body).unwrap(), "How long?");

        assert!(matches!(
            parse_reply(r#"{"choices":[]}"#),
            Err(GatewayError::InvalidResponse(_))
        ));
        assert!(matches!(parse_reply("not json"), Err(GatewayError::InvalidResponse(_))));
    }
}

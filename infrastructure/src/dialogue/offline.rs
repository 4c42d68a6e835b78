//! Offline dialogue adapter
//!
//! Deterministic replies that walk the user toward a booking without any
//! network access: greet briefly, ask how long, ask for other symptoms, ask
//! when they would like to come in, then ask for a name and phone number.

use async_trait::async_trait;
use triage_application::{DialogueGateway, GatewayError};
use triage_domain::{Message, Role};

const GREETINGS: &[&str] = &["hi", "hello", "hey", "hii", "vanakkam", "namaste"];
const GREETING_PHRASES: &[&str] = &["how are you", "how r u", "good morning", "good evening"];

const GREETING_REPLY: &str =
    "I'm doing well, thank you! Do you have any health concerns I can help with?";

const SCRIPT: &[&str] = &[
    "How long have you had this?",
    "Do you have any other symptoms?",
    "When would you like to come in?",
    "What's your name and phone number?",
];

/// Dialogue gateway that never leaves the process
#[derive(Debug, Default, Clone)]
pub struct OfflineDialogue;

impl OfflineDialogue {
    pub fn new() -> Self {
        Self
    }

    fn is_greeting(message: &str) -> bool {
        let lower = message.to_lowercase();
        let first_word = lower
            .split(|c: char| !c.is_alphanumeric())
            .find(|word| !word.is_empty());
        first_word.is_some_and(|word| GREETINGS.contains(&word))
            || GREETING_PHRASES.iter().any(|phrase| lower.contains(phrase))
    }
}

#[async_trait]
impl DialogueGateway for OfflineDialogue {
    async fn reply(&self, history: &[Message], message: &str) -> Result<String, GatewayError> {
        if Self::is_greeting(message) {
            return Ok(GREETING_REPLY.to_string());
        }

        let asked = history
            .iter()
            .filter(|m| m.role == Role::Assistant && SCRIPT.contains(&m.content.as_str()))
            .count();
        let step = asked.min(SCRIPT.len() - 1);
        Ok(SCRIPT[step].to_string())
    }

    fn name(&self) -> &str {
        "offline"
    }
}

//! Off-topic detection and the redirect gate

use crate::core::text::{contains_any, normalize};
use crate::session::entities::{Message, Role};

/// Off-topic user messages (history plus current) that close the gate
pub const REDIRECT_THRESHOLD: usize = 2;

/// Fixed reply once the gate closes
pub const REDIRECT_MESSAGE: &str = "I'm here to help with appointments and clinic-related queries. Do you have any health concerns I can assist with?";

const OFF_TOPIC_KEYWORDS: &[&str] = &[
    "how are you",
    "how r u",
    "what is your name",
    "who are you",
    "tell me about yourself",
    "where are you from",
    "what do you do",
    "are you real",
    "are you human",
    "weather",
    "news",
    "politics",
    "sports",
    "movie",
    "food",
    "recipe",
    "joke",
    "story",
];

const MEDICAL_KEYWORDS: &[&str] = &[
    "symptom",
    "pain",
    "fever",
    "cough",
    "cold",
    "sick",
    "hurt",
    "doctor",
    "appointment",
    "clinic",
    "hospital",
    "medicine",
    "treatment",
    "health",
    "medical",
    "disease",
    "injury",
];

/// Off-topic and not medical. A medical keyword always wins.
pub fn detect_off_topic(text: &str) -> bool {
    let text = normalize(text);
    contains_any(&text, OFF_TOPIC_KEYWORDS) && !contains_any(&text, MEDICAL_KEYWORDS)
}

/// Count off-topic user messages in `history` plus the current message.
///
/// `history` must not already contain `current`.
pub fn count_off_topic_questions(history: &[Message], current: &str) -> usize {
    let earlier = history
        .iter()
        .filter(|message| message.role == Role::User && detect_off_topic(&message.content))
        .count();
    earlier + usize::from(detect_off_topic(current))
}

/// True once the off-topic count reaches [`REDIRECT_THRESHOLD`].
pub fn should_redirect(history: &[Message], current: &str) -> bool {
    count_off_topic_questions(history, current) >= REDIRECT_THRESHOLD
}

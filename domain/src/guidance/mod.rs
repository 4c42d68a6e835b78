//! Conversation guard
//!
//! Decides whether a message that reached the free-form dialogue path is
//! answered locally instead: an FAQ answer first, then the off-topic
//! redirect. FAQ matches bypass off-topic counting entirely.

pub mod faq;
pub mod off_topic;

pub use faq::{FAQ_SUPPRESSION_WINDOW, FaqTopic, check_faq, detect_faq_topic};
pub use off_topic::{
    REDIRECT_MESSAGE, REDIRECT_THRESHOLD, count_off_topic_questions, detect_off_topic,
    should_redirect,
};

use crate::session::entities::Message;

/// Outcome of the guard for one message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardVerdict {
    /// Answer with the topic's canned answer
    Faq(FaqTopic),
    /// Answer with [`REDIRECT_MESSAGE`]
    Redirect,
    /// Hand the message to free-form dialogue
    PassThrough,
}

impl GuardVerdict {
    /// The local reply, if the guard intercepted the message
    pub fn reply(&self) -> Option<&'static str> {
        match self {
            GuardVerdict::Faq(topic) => Some(topic.answer()),
            GuardVerdict::Redirect => Some(REDIRECT_MESSAGE),
            GuardVerdict::PassThrough => None,
        }
    }
}

/// Gate in front of free-form dialogue
pub struct ConversationGuard;

impl ConversationGuard {
    /// Evaluate `text` against the conversation so far (excluding `text`).
    pub fn evaluate(history: &[Message], text: &str) -> GuardVerdict {
        if let Some(topic) = check_faq(text, history) {
            return GuardVerdict::Faq(topic);
        }
        if should_redirect(history, text) {
            return GuardVerdict::Redirect;
        }
        GuardVerdict::PassThrough
    }
}

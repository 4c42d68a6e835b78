//! Clinic FAQ short-circuit
//!
//! Rules are evaluated in declared order. The doctor-timing rule needs a
//! time word AND a doctor word; every other rule fires on any single word.

use crate::core::error::DomainError;
use crate::core::text::{contains_any, normalize};
use crate::session::entities::Message;
use serde::{Deserialize, Serialize};

/// Number of most recent agent messages checked for a repeated answer
pub const FAQ_SUPPRESSION_WINDOW: usize = 3;

/// FAQ category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaqTopic {
    DoctorTiming,
    Trust,
    Emergency,
    Payment,
    Location,
    Services,
}

impl FaqTopic {
    pub const ALL: [FaqTopic; 6] = [
        FaqTopic::DoctorTiming,
        FaqTopic::Trust,
        FaqTopic::Emergency,
        FaqTopic::Payment,
        FaqTopic::Location,
        FaqTopic::Services,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaqTopic::DoctorTiming => "doctor_timing",
            FaqTopic::Trust => "trust",
            FaqTopic::Emergency => "emergency",
            FaqTopic::Payment => "payment",
            FaqTopic::Location => "location",
            FaqTopic::Services => "services",
        }
    }

    /// Canned answer for the topic
    pub fn answer(&self) -> &'static str {
        match self {
            FaqTopic::DoctorTiming => "Our doctors are available Monday to Saturday, 9 AM to 8 PM. Sunday appointments are available on request.",
            FaqTopic::Trust => "We are a certified clinic with experienced doctors. All our doctors are licensed and have 10+ years of experience. We follow strict hygiene protocols.",
            FaqTopic::Emergency => "For emergencies, please call 108 immediately. We handle non-emergency consultations and routine care.",
            FaqTopic::Payment => "We accept cash, cards, UPI, and all major insurance plans. Consultation fees start from ₹300.",
            FaqTopic::Location => "We are located in the city center with easy parking. You can find our exact location on Google Maps.",
            FaqTopic::Services => "We provide general consultation, diagnostics, minor procedures, and health checkups. Specialized treatments are referred to partner hospitals.",
        }
    }
}

impl std::fmt::Display for FaqTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FaqTopic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FaqTopic::ALL
            .into_iter()
            .find(|topic| topic.as_str() == s.trim())
            .ok_or_else(|| DomainError::UnknownFaqTopic(s.to_string()))
    }
}

enum FaqMatcher {
    AnyOf(&'static [&'static str]),
    AllOf(&'static [&'static [&'static str]]),
}

impl FaqMatcher {
    fn matches(&self, text: &str) -> bool {
        match self {
            FaqMatcher::AnyOf(words) => contains_any(text, words),
            FaqMatcher::AllOf(groups) => groups.iter().all(|words| contains_any(text, words)),
        }
    }
}

struct FaqRule {
    topic: FaqTopic,
    matcher: FaqMatcher,
}

static FAQ_RULES: [FaqRule; 6] = [
    FaqRule {
        topic: FaqTopic::DoctorTiming,
        matcher: FaqMatcher::AllOf(&[
            &["when", "what time", "timing", "hours", "schedule", "open", "close"],
            &["doctor", "physician", "clinic"],
        ]),
    },
    FaqRule {
        topic: FaqTopic::Trust,
        matcher: FaqMatcher::AnyOf(&[
            "trust",
            "certified",
            "qualified",
            "experience",
            "licensed",
            "why should",
        ]),
    },
    FaqRule {
        topic: FaqTopic::Emergency,
        matcher: FaqMatcher::AnyOf(&["emergency", "urgent", "critical", "108", "112"]),
    },
    FaqRule {
        topic: FaqTopic::Payment,
        matcher: FaqMatcher::AnyOf(&[
            "payment",
            "cost",
            "fee",
            "price",
            "insurance",
            "accept",
            "charge",
        ]),
    },
    FaqRule {
        topic: FaqTopic::Location,
        matcher: FaqMatcher::AnyOf(&["location", "address", "where", "parking", "map", "directions"]),
    },
    FaqRule {
        topic: FaqTopic::Services,
        matcher: FaqMatcher::AnyOf(&[
            "service",
            "treatment",
            "provide",
            "offer",
            "do you have",
            "what do you",
        ]),
    },
];

/// First FAQ topic whose rule matches, ignoring conversation history.
pub fn detect_faq_topic(text: &str) -> Option<FaqTopic> {
    let text = normalize(text);
    FAQ_RULES
        .iter()
        .find(|rule| rule.matcher.matches(&text))
        .map(|rule| rule.topic)
}

/// True if any FAQ answer was given verbatim in one of the last
/// [`FAQ_SUPPRESSION_WINDOW`] agent messages.
pub fn faq_recently_answered(history: &[Message]) -> bool {
    history
        .iter()
        .rev()
        .filter(|message| message.role.is_agent())
        .take(FAQ_SUPPRESSION_WINDOW)
        .any(|message| {
            FaqTopic::ALL
                .iter()
                .any(|topic| message.content.contains(topic.answer()))
        })
}

/// FAQ topic to answer for `text`, unless an FAQ answer was given recently.
///
/// The answer text is [`FaqTopic::answer`].
pub fn check_faq(text: &str, history: &[Message]) -> Option<FaqTopic> {
    if faq_recently_answered(history) {
        return None;
    }
    detect_faq_topic(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctor_timing_needs_both_word_sets() {
        assert_eq!(
            detect_faq_topic("When is the doctor available?"),
            Some(FaqTopic::DoctorTiming)
        );
        assert_eq!(
            detect_faq_topic("What time does the clinic open"),
            Some(FaqTopic::DoctorTiming)
        );
        // time word only
        assert_eq!(detect_faq_topic("when should I come"), None);
        // doctor word only
        assert_eq!(detect_faq_topic("I want to see a doctor"), None);
    }

    #[test]
    fn test_single_set_topics() {
        assert_eq!(detect_faq_topic("Are you licensed?"), Some(FaqTopic::Trust));
        assert_eq!(detect_faq_topic("Do you take insurance"), Some(FaqTopic::Payment));
        assert_eq!(detect_faq_topic("Where is the parking"), Some(FaqTopic::Location));
        assert_eq!(detect_faq_topic("Is it URGENT care?"), Some(FaqTopic::Emergency));
        assert_eq!(detect_faq_topic("What services are there"), Some(FaqTopic::Services));
    }

    #[test]
    fn test_declared_order_resolves_overlap() {
        // "where" (location) and "hours" + "clinic" (timing): timing is declared first
        assert_eq!(
            detect_faq_topic("where and what hours is the clinic"),
            Some(FaqTopic::DoctorTiming)
        );
        // trust before payment
        assert_eq!(
            detect_faq_topic("do you accept qualified referrals"),
            Some(FaqTopic::Trust)
        );
    }

    #[test]
    fn test_no_faq() {
        assert_eq!(detect_faq_topic("I have a cough"), None);
        assert_eq!(check_faq("", &[]), None);
    }

    #[test]
    fn test_suppressed_when_recently_answered() {
        let history = vec![
            Message::user("how much does it cost"),
            Message::assistant(FaqTopic::Payment.answer()),
            Message::user("ok"),
        ];
        assert_eq!(check_faq("what is the fee", &history), None);
        // Any FAQ answer suppresses, not only the matching one
        assert_eq!(check_faq("where are you", &history), None);
    }

    #[test]
    fn test_suppression_window_counts_agent_messages() {
        let mut history = vec![
            Message::assistant(FaqTopic::Location.answer()),
            Message::assistant("How long have you had it?"),
            Message::user("a while"),
            Message::assistant("Any other symptoms?"),
            Message::user("no"),
        ];
        // Third-last agent message still holds the answer
        assert!(faq_recently_answered(&history));

        history.push(Message::assistant("When would you like to come in?"));
        assert!(!faq_recently_answered(&history));
        assert_eq!(check_faq("where are you", &history), Some(FaqTopic::Location));
    }

    #[test]
    fn test_user_echo_does_not_suppress() {
        let history = vec![Message::user(FaqTopic::Payment.answer())];
        assert_eq!(check_faq("price?", &history), Some(FaqTopic::Payment));
    }

    #[test]
    fn test_topic_parse() {
        assert_eq!("doctor_timing".parse::<FaqTopic>(), Ok(FaqTopic::DoctorTiming));
        assert!("parking".parse::<FaqTopic>().is_err());
    }
}

//! Booking contact extraction
//!
//! Pulls a patient name and a 10-digit phone number out of a free-form
//! reply such as "my name is Priya and my number is 98765 43210".

use crate::core::text::title_case;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9][0-9\s-]{8,}[0-9]\b").expect("valid regex"));

const PHONE_DIGITS: usize = 10;
const NAME_WORDS: usize = 2;

const STOP_WORDS: &[&str] = &[
    "and", "is", "my", "name", "phone", "number", "the", "a", "an", "i", "am",
];

/// Name and phone captured from a booking reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingContact {
    pub name: String,
    pub phone: String,
}

impl BookingContact {
    /// Phone with all but the last four digits masked, for logs
    pub fn redacted_phone(&self) -> String {
        let len = self.phone.chars().count();
        let keep = len.saturating_sub(4);
        self.phone
            .chars()
            .enumerate()
            .map(|(i, c)| if i < keep { '*' } else { c })
            .collect()
    }

    /// Reply sent once the contact is captured
    pub fn confirmation_message(&self) -> String {
        format!(
            "✅ Appointment request received!\n\nPatient: {}\nPhone: {}\n\nThe clinic will call you to confirm the date and time. Thank you!",
            self.name, self.phone
        )
    }
}

/// Extract a booking contact, or `None` unless both a name and a valid
/// phone number are present.
///
/// # Example
///
/// ```
/// use triage_domain::extract_booking_info;
///
/// let contact = extract_booking_info("my name is John Doe and number is 9876543210").unwrap();
/// assert_eq!(contact.name, "John Doe");
/// assert_eq!(contact.phone, "9876543210");
/// ```
pub fn extract_booking_info(text: &str) -> Option<BookingContact> {
    let matched = PHONE_RE.find(text)?.as_str();
    let phone: String = matched
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if phone.chars().count() != PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let remainder = text.replace(matched, "");
    let name_words: Vec<&str> = remainder
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(&word.to_lowercase().as_str()))
        .filter(|word| !word.chars().all(|c| c.is_ascii_digit()))
        .take(NAME_WORDS)
        .collect();
    if name_words.is_empty() {
        return None;
    }

    Some(BookingContact {
        name: title_case(&name_words.join(" ")),
        phone,
    })
}

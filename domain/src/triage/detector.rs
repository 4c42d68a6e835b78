//! Trigger detection
//!
//! Classifies free text against the trigger and routine tables.

use super::trigger::{ROUTINE_SYMPTOMS, TRIGGERS, TriggerKey};
use crate::core::text::{contains_any, normalize};

/// Return the first trigger category (in declared order) whose keywords
/// occur in `text`.
///
/// # Example
///
/// ```
/// use triage_domain::{TriggerKey, detect_high_risk_trigger};
///
/// // Both chest pain and breathing keywords: declared order decides.
/// let key = detect_high_risk_trigger("I can't breathe and have chest pain");
/// assert_eq!(key, Some(TriggerKey::ChestPain));
/// assert_eq!(detect_high_risk_trigger("my knee hurts"), None);
/// ```
pub fn detect_high_risk_trigger(text: &str) -> Option<TriggerKey> {
    let text = normalize(text);
    TRIGGERS
        .iter()
        .find(|trigger| contains_any(&text, trigger.keywords))
        .map(|trigger| trigger.key)
}

/// True if `text` mentions any routine symptom keyword.
pub fn detect_routine_symptoms(text: &str) -> bool {
    contains_any(&normalize(text), ROUTINE_SYMPTOMS.keywords)
}

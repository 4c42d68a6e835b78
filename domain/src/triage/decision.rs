//! Triage decisions
//!
//! [`decide`] maps a (trigger, score) pair, a routine match, or nothing at
//! all to a [`TriageDecision`]. Rules are evaluated in a fixed priority
//! order; EMERGENCY can only come out of the triggered branch.

use super::detector::{detect_high_risk_trigger, detect_routine_symptoms};
use super::followup::SessionTriageState;
use super::scoring::{RiskScore, calculate_risk_score};
use super::trigger::TriggerKey;
use crate::core::error::DomainError;
use crate::core::text::join_fragments;
use serde::{Deserialize, Serialize};

/// Score at or above which a triggered session is an emergency
pub const EMERGENCY_THRESHOLD: i32 = 6;

/// Score at or above which a triggered clinic visit is urgent
pub const URGENT_THRESHOLD: i32 = 3;

/// Numbers offered with every emergency decision
pub const EMERGENCY_NUMBERS: [&str; 3] = ["108", "102", "112"];

/// Safety disclaimer attached to every decision
pub const DISCLAIMER: &str = "This is not a medical diagnosis. This is a safety assessment tool. If you feel your condition is worsening or life-threatening, call 108 or 112 immediately.";

/// Top-level outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CareLevel {
    Emergency,
    Clinic,
}

impl CareLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareLevel::Emergency => "EMERGENCY",
            CareLevel::Clinic => "CLINIC",
        }
    }

    pub fn is_emergency(&self) -> bool {
        matches!(self, CareLevel::Emergency)
    }
}

impl std::fmt::Display for CareLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CareLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EMERGENCY" => Ok(CareLevel::Emergency),
            "CLINIC" => Ok(CareLevel::Clinic),
            other => Err(DomainError::UnknownLevel(other.to_string())),
        }
    }
}

/// Secondary severity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    High,
    Medium,
    Low,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::High => "high",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::Low => "low",
        }
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for UrgencyLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(UrgencyLevel::High),
            "medium" => Ok(UrgencyLevel::Medium),
            "low" => Ok(UrgencyLevel::Low),
            other => Err(DomainError::UnknownLevel(other.to_string())),
        }
    }
}

/// Session-level triage result as stored on the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriageOutcome {
    Emergency,
    Clinic,
    #[default]
    Pending,
}

impl TriageOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriageOutcome::Emergency => "emergency",
            TriageOutcome::Clinic => "clinic",
            TriageOutcome::Pending => "pending",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TriageOutcome::Pending)
    }
}

impl std::fmt::Display for TriageOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Final triage decision (Value Object)
///
/// Serializes to the wire shape
/// `{care_level, reason, disclaimer, next_step, urgency_level, risk_score, triage_result, emergency_numbers?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageDecision {
    pub care_level: CareLevel,
    pub reason: String,
    pub disclaimer: String,
    pub next_step: String,
    pub urgency_level: UrgencyLevel,
    pub risk_score: RiskScore,
    pub triage_result: TriageOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_numbers: Option<Vec<String>>,
}

impl TriageDecision {
    fn clinic(urgency_level: UrgencyLevel, risk_score: RiskScore, reason: &str, next_step: &str) -> Self {
        Self {
            care_level: CareLevel::Clinic,
            reason: reason.to_string(),
            disclaimer: DISCLAIMER.to_string(),
            next_step: next_step.to_string(),
            urgency_level,
            risk_score,
            triage_result: TriageOutcome::Clinic,
            emergency_numbers: None,
        }
    }

    fn emergency(risk_score: RiskScore) -> Self {
        Self {
            care_level: CareLevel::Emergency,
            reason: "Based on your symptoms and responses, you may be experiencing a medical emergency".to_string(),
            disclaimer: DISCLAIMER.to_string(),
            next_step: "Call 108 (Medical Emergency) or 112 (Unified Emergency) immediately, or go to the nearest emergency room".to_string(),
            urgency_level: UrgencyLevel::High,
            risk_score,
            triage_result: TriageOutcome::Emergency,
            emergency_numbers: Some(EMERGENCY_NUMBERS.iter().map(|n| n.to_string()).collect()),
        }
    }

    pub fn is_emergency(&self) -> bool {
        self.care_level.is_emergency()
    }
}

/// Map the classification of a conversation to a decision.
///
/// Priority order:
/// 1. trigger, score >= 6: EMERGENCY / high
/// 2. trigger, 3 <= score < 6: CLINIC / high
/// 3. trigger, score < 3: CLINIC / medium
/// 4. no trigger, routine match: CLINIC / low
/// 5. otherwise: CLINIC / medium
///
/// `score` is ignored when there is no trigger; untriggered decisions carry
/// a zero score.
pub fn decide(trigger: Option<TriggerKey>, score: RiskScore, routine_matched: bool) -> TriageDecision {
    match trigger {
        Some(_) if score.value() >= EMERGENCY_THRESHOLD => TriageDecision::emergency(score),
        Some(_) if score.value() >= URGENT_THRESHOLD => TriageDecision::clinic(
            UrgencyLevel::High,
            score,
            "Your symptoms require prompt medical evaluation",
            "Schedule an appointment with a healthcare provider within 24 hours. If symptoms worsen, call 108.",
        ),
        Some(_) => TriageDecision::clinic(
            UrgencyLevel::Medium,
            score,
            "Your symptoms should be evaluated by a healthcare professional",
            "Schedule an appointment with a healthcare provider within the next few days",
        ),
        None if routine_matched => TriageDecision::clinic(
            UrgencyLevel::Low,
            RiskScore::ZERO,
            "Your symptoms suggest a condition that can be evaluated at a clinic",
            "Schedule an appointment with a healthcare provider",
        ),
        None => TriageDecision::clinic(
            UrgencyLevel::Medium,
            RiskScore::ZERO,
            "Your symptoms require professional evaluation",
            "Schedule an appointment with a healthcare provider to discuss your symptoms",
        ),
    }
}

/// Run the full assessment over the collected symptoms.
///
/// The trigger recorded in `state` takes precedence; without one, the
/// symptoms are scanned for a trigger (and failing that, for routine
/// keywords). Follow-up answers come from `state` only.
///
/// # Example
///
/// ```
/// use triage_domain::{CareLevel, UrgencyLevel, run_triage};
///
/// let decision = run_triage(&["I have a mild rash"], None);
/// assert_eq!(decision.care_level, CareLevel::Clinic);
/// assert_eq!(decision.urgency_level, UrgencyLevel::Low);
/// assert_eq!(decision.risk_score.value(), 0);
/// ```
pub fn run_triage<S: AsRef<str>>(symptoms: &[S], state: Option<&SessionTriageState>) -> TriageDecision {
    let all_symptoms = join_fragments(symptoms);
    let trigger = state
        .and_then(SessionTriageState::trigger_detected)
        .or_else(|| detect_high_risk_trigger(&all_symptoms));

    match trigger {
        Some(trigger) => {
            let responses = state.map(SessionTriageState::responses).unwrap_or_default();
            decide(Some(trigger), calculate_risk_score(trigger, responses), false)
        }
        None => decide(None, RiskScore::ZERO, detect_routine_symptoms(&all_symptoms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_emergency_boundary() {
        let at = decide(Some(TriggerKey::ChestPain), RiskScore::new(6), false);
        assert_eq!(at.care_level, CareLevel::Emergency);
        assert_eq!(at.urgency_level, UrgencyLevel::High);
        assert_eq!(at.triage_result, TriageOutcome::Emergency);
        assert_eq!(
            at.emergency_numbers,
            Some(vec!["108".to_string(), "102".to_string(), "112".to_string()])
        );

        let below = decide(Some(TriggerKey::ChestPain), RiskScore::new(5), false);
        assert_eq!(below.care_level, CareLevel::Clinic);
        assert_eq!(below.urgency_level, UrgencyLevel::High);
        assert!(below.next_step.contains("within 24 hours"));
        assert!(below.emergency_numbers.is_none());
    }

    #[test]
    fn test_urgent_boundary() {
        let at = decide(Some(TriggerKey::SevereBleeding), RiskScore::new(3), false);
        assert_eq!(at.care_level, CareLevel::Clinic);
        assert_eq!(at.urgency_level, UrgencyLevel::High);

        let below = decide(Some(TriggerKey::SevereBleeding), RiskScore::new(2), false);
        assert_eq!(below.care_level, CareLevel::Clinic);
        assert_eq!(below.urgency_level, UrgencyLevel::Medium);
        assert!(below.next_step.contains("next few days"));
    }

    #[test]
    fn test_routine_and_unknown() {
        let routine = decide(None, RiskScore::new(99), true);
        assert_eq!(routine.care_level, CareLevel::Clinic);
        assert_eq!(routine.urgency_level, UrgencyLevel::Low);
        assert_eq!(routine.risk_score, RiskScore::ZERO);

        let unknown = decide(None, RiskScore::new(99), false);
        assert_eq!(unknown.care_level, CareLevel::Clinic);
        assert_eq!(unknown.urgency_level, UrgencyLevel::Medium);
        assert_eq!(unknown.risk_score, RiskScore::ZERO);
        assert_eq!(unknown.reason, "Your symptoms require professional evaluation");
    }

    #[test]
    fn test_every_branch_carries_disclaimer() {
        let decisions = [
            decide(Some(TriggerKey::ChestPain), RiskScore::new(8), false),
            decide(Some(TriggerKey::ChestPain), RiskScore::new(4), false),
            decide(Some(TriggerKey::ChestPain), RiskScore::new(1), false),
            decide(None, RiskScore::ZERO, true),
            decide(None, RiskScore::ZERO, false),
        ];
        for decision in decisions {
            assert_eq!(decision.disclaimer, DISCLAIMER);
        }
    }

    #[test]
    fn test_decide_is_idempotent() {
        let a = decide(Some(TriggerKey::BreathingDifficulty), RiskScore::new(7), false);
        let b = decide(Some(TriggerKey::BreathingDifficulty), RiskScore::new(7), false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_triage_mild_rash() {
        let decision = run_triage(&["I have a mild rash"], None);
        assert_eq!(decision.care_level, CareLevel::Clinic);
        assert_eq!(decision.urgency_level, UrgencyLevel::Low);
        assert_eq!(decision.risk_score.value(), 0);
        assert_eq!(decision.triage_result, TriageOutcome::Clinic);
    }

    #[test]
    fn test_run_triage_unknown_and_empty() {
        let empty: [&str; 0] = [];
        for decision in [run_triage(&empty, None), run_triage(&["my knee hurts"], None)] {
            assert_eq!(decision.care_level, CareLevel::Clinic);
            assert_eq!(decision.urgency_level, UrgencyLevel::Medium);
        }
    }

    #[test]
    fn test_run_triage_trigger_without_answers_scores_base() {
        let decision = run_triage(&["I have severe chest pain and I can't breathe"], None);
        assert_eq!(decision.care_level, CareLevel::Clinic);
        assert_eq!(decision.urgency_level, UrgencyLevel::High);
        assert_eq!(decision.risk_score.value(), 3);
    }

    #[test]
    fn test_run_triage_prefers_recorded_trigger() {
        let state = SessionTriageState::restore(
            Some(TriggerKey::SevereBleeding),
            5,
            vec!["no".into(), "no".into(), "no".into(), "no".into(), "no".into()],
        )
        .unwrap();
        // The symptoms mention chest pain, but the session fired on bleeding.
        let decision = run_triage(&["heavy bleeding", "chest pain too"], Some(&state));
        assert_eq!(decision.risk_score.value(), 4);
    }

    #[test]
    fn test_wire_shape() {
        let decision = decide(Some(TriggerKey::ChestPain), RiskScore::new(9), false);
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["care_level"], "EMERGENCY");
        assert_eq!(json["urgency_level"], "high");
        assert_eq!(json["risk_score"], 9);
        assert_eq!(json["triage_result"], "emergency");
        assert_eq!(json["emergency_numbers"][2], "112");

        let clinic = decide(None, RiskScore::ZERO, true);
        let json = serde_json::to_value(&clinic).unwrap();
        assert!(json.get("emergency_numbers").is_none());
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!("clinic".parse::<CareLevel>(), Ok(CareLevel::Clinic));
        assert_eq!("HIGH".parse::<UrgencyLevel>(), Ok(UrgencyLevel::High));
        assert!("urgent".parse::<CareLevel>().is_err());
    }

    proptest! {
        #[test]
        fn prop_untriggered_never_emergency(score in -100i32..100, routine in any::<bool>()) {
            let decision = decide(None, RiskScore::new(score), routine);
            prop_assert_eq!(decision.care_level, CareLevel::Clinic);
        }

        #[test]
        fn prop_triggered_emergency_iff_threshold(score in -100i32..100) {
            let decision = decide(Some(TriggerKey::ChestPain), RiskScore::new(score), false);
            prop_assert_eq!(decision.is_emergency(), score >= EMERGENCY_THRESHOLD);
        }
    }
}

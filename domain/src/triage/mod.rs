//! Symptom triage domain
//!
//! # Flow
//!
//! ```text
//!  message ─▶ detector ─▶ followup (Idle → Triggered → Exhausted)
//!                                     │
//!                                     ▼
//!                 scoring ─▶ decision (Decided) ─▶ summary
//! ```
//!
//! - [`trigger`]: static trigger and routine tables
//! - [`detector`]: first-match keyword classification
//! - [`followup`]: the per-session state machine
//! - [`scoring`]: risk score from follow-up answers
//! - [`decision`]: priority-ordered decision rules
//! - [`summary`]: user-facing rendering of a decision

pub mod decision;
pub mod detector;
pub mod followup;
pub mod scoring;
pub mod summary;
pub mod trigger;

pub use decision::{
    CareLevel, DISCLAIMER, EMERGENCY_NUMBERS, EMERGENCY_THRESHOLD, TriageDecision, TriageOutcome,
    URGENT_THRESHOLD, UrgencyLevel, decide, run_triage,
};
pub use detector::{detect_high_risk_trigger, detect_routine_symptoms};
pub use followup::{FollowupPhase, FollowupStep, SessionTriageState, should_ask_followup};
pub use scoring::{RiskScore, calculate_risk_score};
pub use summary::get_triage_summary;
pub use trigger::{ROUTINE_SYMPTOMS, RiskWeights, SymptomTrigger, TRIGGERS, TriggerKey};

//! Domain layer for symptom-triage
//!
//! This crate contains the triage engine: static rule tables, the
//! per-session follow-up state machine, risk scoring and the decision
//! rules. It has no dependencies on infrastructure or presentation concerns
//! and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Triage
//!
//! A message mentioning a high-risk symptom (chest pain, breathing
//! difficulty, severe bleeding) starts a fixed series of follow-up
//! questions. The answers are scored and the score picks between an
//! emergency escalation and a clinic visit. Messages without a trigger are
//! classified as routine or unclassified once enough of them have arrived.
//!
//! ## Guidance
//!
//! Clinic FAQs are answered locally and repeated off-topic chatter is
//! redirected before anything reaches free-form dialogue.

pub mod booking;
pub mod clinic;
pub mod config;
pub mod core;
pub mod guidance;
pub mod session;
pub mod triage;

pub use booking::{BookingContact, extract_booking_info};
pub use clinic::{CLINICS, Clinic, ClinicId, ClinicRecommendation, find_clinic, get_clinic_recommendation};
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use crate::core::error::DomainError;
pub use guidance::{
    ConversationGuard, FaqTopic, GuardVerdict, REDIRECT_MESSAGE, check_faq,
    count_off_topic_questions, detect_faq_topic, detect_off_topic, should_redirect,
};
pub use session::entities::{ConversationSession, Message, Role};
pub use triage::{
    CareLevel, DISCLAIMER, EMERGENCY_NUMBERS, EMERGENCY_THRESHOLD, FollowupPhase, FollowupStep,
    ROUTINE_SYMPTOMS, RiskScore, RiskWeights, SessionTriageState, SymptomTrigger, TRIGGERS,
    TriageDecision, TriageOutcome, TriggerKey, URGENT_THRESHOLD, UrgencyLevel,
    calculate_risk_score, decide, detect_high_risk_trigger, detect_routine_symptoms,
    get_triage_summary, run_triage, should_ask_followup,
};

//! Follow-up state machine
//!
//! ```text
//!  ┌──────┐ trigger hit  ┌───────────┐ last answer  ┌───────────┐ finalize  ┌─────────┐
//!  │ Idle │ ───────────▶ │ Triggered │ ───────────▶ │ Exhausted │ ────────▶ │ Decided │
//!  └──────┘              └───────────┘              └───────────┘           └─────────┘
//!     │                    │      ▲                                              ▲
//!     │                    └──────┘ answer, ask next                              │
//!     └────────────────────────────────── finalize (message threshold) ───────────┘
//! ```
//!
//! There is no edge back to `Idle`: once a trigger fires, every follow-up is
//! asked, however reassuring the answers look.
//!
//! Transitions are pure: they consume the state and hand back the next one
//! together with what happened, so the caller decides what to persist.

use super::decision::{TriageDecision, run_triage};
use super::detector::detect_high_risk_trigger;
use super::trigger::TriggerKey;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Phase of a session's triage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowupPhase {
    /// No trigger has fired
    Idle,
    /// Waiting for the answer to question number `asked` (1-based)
    Triggered { trigger: TriggerKey, asked: usize },
    /// Every question has been answered; a decision is due
    Exhausted { trigger: TriggerKey },
    /// Terminal: the decision is cached on the state
    Decided,
}

impl FollowupPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            FollowupPhase::Idle => "idle",
            FollowupPhase::Triggered { .. } => "triggered",
            FollowupPhase::Exhausted { .. } => "exhausted",
            FollowupPhase::Decided => "decided",
        }
    }
}

impl std::fmt::Display for FollowupPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a single inbound message did to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowupStep {
    /// Nothing fired; the message is not part of a follow-up script
    NoTrigger,
    /// A trigger fired: send the warning, then the first question
    Started {
        trigger: TriggerKey,
        warning: &'static str,
        question: &'static str,
    },
    /// An answer was recorded and the next question is due
    Asked {
        trigger: TriggerKey,
        number: usize,
        question: &'static str,
    },
    /// The last answer was recorded; call [`SessionTriageState::finalize`]
    Exhausted { trigger: TriggerKey },
    /// The session already has a decision; the message was not recorded
    AlreadyDecided,
}

/// Per-session triage record
///
/// Owned by the conversation session and written back after every message.
/// `trigger_detected` is set once and never cleared; `followup_count` never
/// exceeds the trigger's question count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTriageState {
    trigger_detected: Option<TriggerKey>,
    followup_count: usize,
    responses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    decision: Option<TriageDecision>,
}

impl SessionTriageState {
    /// Fresh state for a new session
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a state from persisted fields, rejecting impossible records.
    pub fn restore(
        trigger_detected: Option<TriggerKey>,
        followup_count: usize,
        responses: Vec<String>,
    ) -> Result<Self, DomainError> {
        let state = Self {
            trigger_detected,
            followup_count,
            responses,
            decision: None,
        };
        state.validate()?;
        Ok(state)
    }

    /// Check the record's invariants (used after deserialization).
    pub fn validate(&self) -> Result<(), DomainError> {
        match self.trigger_detected {
            None if self.followup_count > 0 || !self.responses.is_empty() => {
                Err(DomainError::CorruptTriageState(format!(
                    "no trigger but {} follow-ups and {} answers recorded",
                    self.followup_count,
                    self.responses.len()
                )))
            }
            None => Ok(()),
            Some(trigger) => {
                let total = trigger.trigger().question_count();
                if self.followup_count > total {
                    return Err(DomainError::CorruptTriageState(format!(
                        "{} follow-ups asked but {} has only {}",
                        self.followup_count, trigger, total
                    )));
                }
                if self.responses.len() > self.followup_count {
                    return Err(DomainError::CorruptTriageState(format!(
                        "{} answers recorded for {} questions asked",
                        self.responses.len(),
                        self.followup_count
                    )));
                }
                Ok(())
            }
        }
    }

    pub fn trigger_detected(&self) -> Option<TriggerKey> {
        self.trigger_detected
    }

    pub fn followup_count(&self) -> usize {
        self.followup_count
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// The cached terminal decision, if any
    pub fn decision(&self) -> Option<&TriageDecision> {
        self.decision.as_ref()
    }

    pub fn is_decided(&self) -> bool {
        self.decision.is_some()
    }

    /// Current phase, derived from the record
    pub fn phase(&self) -> FollowupPhase {
        if self.decision.is_some() {
            return FollowupPhase::Decided;
        }
        match self.trigger_detected {
            None => FollowupPhase::Idle,
            Some(trigger) if self.responses.len() >= trigger.trigger().question_count() => {
                FollowupPhase::Exhausted { trigger }
            }
            Some(trigger) => FollowupPhase::Triggered {
                trigger,
                asked: self.followup_count,
            },
        }
    }

    /// Advance the machine with one inbound user message.
    pub fn advance(mut self, message: &str) -> (Self, FollowupStep) {
        match self.phase() {
            FollowupPhase::Decided => (self, FollowupStep::AlreadyDecided),
            FollowupPhase::Idle => match detect_high_risk_trigger(message) {
                None => (self, FollowupStep::NoTrigger),
                Some(trigger) => {
                    self.trigger_detected = Some(trigger);
                    self.followup_count = 0;
                    self.responses.clear();
                    match self.ask_next() {
                        Some(question) => (
                            self,
                            FollowupStep::Started {
                                trigger,
                                warning: trigger.trigger().initial_message,
                                question,
                            },
                        ),
                        None => (self, FollowupStep::Exhausted { trigger }),
                    }
                }
            },
            FollowupPhase::Triggered { trigger, .. } => {
                self.responses.push(message.to_string());
                match self.ask_next() {
                    Some(question) => {
                        let number = self.followup_count;
                        (
                            self,
                            FollowupStep::Asked {
                                trigger,
                                number,
                                question,
                            },
                        )
                    }
                    None => (self, FollowupStep::Exhausted { trigger }),
                }
            }
            FollowupPhase::Exhausted { trigger } => (self, FollowupStep::Exhausted { trigger }),
        }
    }

    /// Move to `Decided`, computing the decision from the collected symptoms.
    ///
    /// Valid from `Idle` (message threshold reached without a trigger) and
    /// `Exhausted`. Calling it on a decided state returns the cached
    /// decision unchanged.
    pub fn finalize<S: AsRef<str>>(
        mut self,
        symptoms: &[S],
    ) -> Result<(Self, TriageDecision), DomainError> {
        match self.phase() {
            FollowupPhase::Triggered { trigger, asked } => Err(DomainError::FollowupsOutstanding {
                asked,
                total: trigger.trigger().question_count(),
            }),
            FollowupPhase::Decided => {
                let decision = self.decision.clone().unwrap_or_else(|| run_triage(symptoms, None));
                Ok((self, decision))
            }
            FollowupPhase::Idle | FollowupPhase::Exhausted { .. } => {
                let decision = run_triage(symptoms, Some(&self));
                self.decision = Some(decision.clone());
                Ok((self, decision))
            }
        }
    }

    fn ask_next(&mut self) -> Option<&'static str> {
        let question = should_ask_followup(self)?;
        self.followup_count += 1;
        Some(question)
    }
}

/// Next follow-up question for the state, or `None` when there is no
/// active trigger or every question has been asked.
pub fn should_ask_followup(state: &SessionTriageState) -> Option<&'static str> {
    let trigger = state.trigger_detected?.trigger();
    trigger.question(state.followup_count)
}

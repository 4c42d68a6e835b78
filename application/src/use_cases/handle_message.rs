//! Handle Message use case
//!
//! Runs one inbound chat message through the triage engine and produces the
//! agent's reply. The session stays locked for the whole
//! read-advance-write, so concurrent messages for the same session are
//! applied one at a time.
//!
//! Order of evaluation for a session that has no decision yet:
//!
//! 1. follow-up state machine (trigger start, next question, finalize)
//! 2. booking contact extraction
//! 3. message-count threshold (finalize without a trigger)
//! 4. conversation guard (FAQ answer, off-topic redirect)
//! 5. free-form dialogue, with a fixed fallback on failure
//!
//! Once decided, the engine is never re-run: only booking extraction and
//! the guard/dialogue path remain.

use crate::config::BehaviorConfig;
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger};
use crate::ports::conversation_store::{ConversationStore, SessionHandle};
use crate::ports::dialogue_gateway::{DialogueGateway, GatewayError};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use triage_domain::core::text::join_fragments;
use triage_domain::{
    BookingContact, CareLevel, ClinicRecommendation, ConversationGuard, ConversationSession,
    DomainError, FollowupStep, GuardVerdict, Message, TriageDecision, TriggerKey,
    extract_booking_info, get_clinic_recommendation, get_triage_summary,
};

/// Reply used whenever the dialogue collaborator fails or times out
pub const FALLBACK_REPLY: &str = "Could you tell me more about what you're experiencing?";

/// Appended to the summary of a CLINIC decision
pub const BOOKING_PROMPT: &str = "Would you like to book an appointment with a nearby clinic?";

/// Errors that can occur while handling a message
#[derive(Error, Debug)]
pub enum HandleMessageError {
    #[error("Unknown session: {0}")]
    UnknownSession(String),

    #[error("Corrupt session state: {0}")]
    CorruptState(#[from] DomainError),
}

/// What kind of reply the agent produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Followup,
    Decision,
    Faq,
    Redirect,
    Dialogue,
    BookingConfirmed,
}

/// Agent reply to one inbound message
#[derive(Debug, Clone, Serialize)]
pub struct TriageReply {
    pub session_id: String,
    pub message: String,
    pub kind: ReplyKind,
    pub triage_complete: bool,
    pub needs_followup: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triage_result: Option<TriageDecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic_recommendation: Option<ClinicRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<BookingContact>,
}

impl TriageReply {
    fn new(session: &ConversationSession, kind: ReplyKind, message: impl Into<String>) -> Self {
        Self {
            session_id: session.id().to_string(),
            message: message.into(),
            kind,
            triage_complete: session.is_finalized(),
            needs_followup: kind == ReplyKind::Followup,
            trigger_warning: None,
            triage_result: None,
            clinic_recommendation: None,
            booking: None,
        }
    }
}

/// Use case for handling one chat message
pub struct HandleMessageUseCase {
    store: Arc<dyn ConversationStore>,
    dialogue: Arc<dyn DialogueGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
    config: BehaviorConfig,
}

impl HandleMessageUseCase {
    pub fn new(store: Arc<dyn ConversationStore>, dialogue: Arc<dyn DialogueGateway>) -> Self {
        Self {
            store,
            dialogue,
            conversation_logger: Arc::new(NoConversationLogger),
            config: BehaviorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BehaviorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Create (or replace) a session with the given id
    pub async fn start_session(&self, session_id: &str) -> SessionHandle {
        debug!("Starting session {}", session_id);
        self.store.insert(ConversationSession::new(session_id)).await
    }

    /// Drop a session; returns false if it was not known
    pub async fn end_session(&self, session_id: &str) -> bool {
        debug!("Ending session {}", session_id);
        self.store.remove(session_id).await
    }

    /// Copy of the session as it stands
    pub async fn snapshot(&self, session_id: &str) -> Option<ConversationSession> {
        let handle = self.store.get(session_id).await?;
        let session = handle.lock().await;
        Some(session.clone())
    }

    /// Handle one inbound user message
    pub async fn execute(
        &self,
        session_id: &str,
        text: &str,
    ) -> Result<TriageReply, HandleMessageError> {
        let handle = self
            .store
            .get(session_id)
            .await
            .ok_or_else(|| HandleMessageError::UnknownSession(session_id.to_string()))?;
        let mut session = handle.lock().await;
        session.triage_state().validate()?;

        session.add_user_message(text);
        self.log(
            "user_message",
            json!({ "session_id": session_id, "content": text }),
        );

        let reply = if session.is_finalized() {
            self.after_decision(&session, text).await
        } else {
            self.triage_step(&mut session, text).await?
        };

        session.add_agent_message(reply.message.clone());
        Ok(reply)
    }

    async fn triage_step(
        &self,
        session: &mut ConversationSession,
        text: &str,
    ) -> Result<TriageReply, HandleMessageError> {
        let (state, step) = session.triage_state().clone().advance(text);
        session.set_triage_state(state);

        match step {
            FollowupStep::Started {
                trigger,
                warning,
                question,
            } => {
                info!("Trigger detected in session {}: {}", session.id(), trigger);
                self.log(
                    "trigger_detected",
                    json!({ "session_id": session.id(), "trigger": trigger }),
                );
                self.log_followup(session, trigger, 1, question);

                session.add_agent_message(warning);
                let mut reply = TriageReply::new(session, ReplyKind::Followup, question);
                reply.trigger_warning = Some(warning.to_string());
                Ok(reply)
            }
            FollowupStep::Asked {
                trigger,
                number,
                question,
            } => {
                self.log_followup(session, trigger, number, question);
                Ok(TriageReply::new(session, ReplyKind::Followup, question))
            }
            FollowupStep::Exhausted { trigger } => {
                debug!("All {} follow-ups answered", trigger);
                self.finalize(session)
            }
            FollowupStep::NoTrigger => self.untriggered(session, text).await,
            FollowupStep::AlreadyDecided => Ok(self.after_decision(session, text).await),
        }
    }

    async fn untriggered(
        &self,
        session: &mut ConversationSession,
        text: &str,
    ) -> Result<TriageReply, HandleMessageError> {
        if let Some(contact) = extract_booking_info(text) {
            return Ok(self.confirm_booking(session, contact));
        }

        let count = session.user_message_count();
        if count >= self.config.message_threshold {
            debug!(
                "Message threshold reached ({} >= {})",
                count, self.config.message_threshold
            );
            return self.finalize(session);
        }

        Ok(self.converse(session, text).await)
    }

    async fn after_decision(&self, session: &ConversationSession, text: &str) -> TriageReply {
        match extract_booking_info(text) {
            Some(contact) => self.confirm_booking(session, contact),
            None => self.converse(session, text).await,
        }
    }

    fn finalize(&self, session: &mut ConversationSession) -> Result<TriageReply, HandleMessageError> {
        let (state, decision) = session
            .triage_state()
            .clone()
            .finalize(session.symptoms_collected())?;
        session.set_triage_state(state);

        info!(
            "Triage decided for session {}: {} / {} (score {})",
            session.id(),
            decision.care_level,
            decision.urgency_level,
            decision.risk_score
        );
        self.log(
            "triage_decided",
            json!({ "session_id": session.id(), "decision": decision }),
        );

        let mut message = get_triage_summary(&decision);
        let is_clinic = decision.care_level == CareLevel::Clinic;
        if is_clinic && self.config.offer_booking {
            message.push_str("\n\n");
            message.push_str(BOOKING_PROMPT);
        }

        let mut reply = TriageReply::new(session, ReplyKind::Decision, message);
        if is_clinic && self.config.recommend_clinics {
            reply.clinic_recommendation = Some(get_clinic_recommendation(&join_fragments(
                session.symptoms_collected(),
            )));
        }
        reply.triage_result = Some(decision);
        Ok(reply)
    }

    fn confirm_booking(&self, session: &ConversationSession, contact: BookingContact) -> TriageReply {
        info!(
            "Booking contact captured for session {} (phone {})",
            session.id(),
            contact.redacted_phone()
        );
        self.log(
            "booking_captured",
            json!({
                "session_id": session.id(),
                "name": contact.name,
                "phone": contact.redacted_phone(),
            }),
        );

        let mut reply = TriageReply::new(
            session,
            ReplyKind::BookingConfirmed,
            contact.confirmation_message(),
        );
        reply.booking = Some(contact);
        reply
    }

    async fn converse(&self, session: &ConversationSession, text: &str) -> TriageReply {
        let history = session.history_before_latest();
        let verdict = ConversationGuard::evaluate(history, text);

        match (verdict, verdict.reply()) {
            (GuardVerdict::Faq(topic), Some(answer)) => {
                info!("Answering FAQ: {}", topic);
                self.log(
                    "faq_answered",
                    json!({ "session_id": session.id(), "topic": topic }),
                );
                TriageReply::new(session, ReplyKind::Faq, answer)
            }
            (GuardVerdict::Redirect, Some(redirect)) => {
                info!("Redirecting off-topic conversation in session {}", session.id());
                self.log("off_topic_redirect", json!({ "session_id": session.id() }));
                TriageReply::new(session, ReplyKind::Redirect, redirect)
            }
            _ => {
                let message = self.dialogue_reply(session.id(), history, text).await;
                TriageReply::new(session, ReplyKind::Dialogue, message)
            }
        }
    }

    async fn dialogue_reply(&self, session_id: &str, history: &[Message], text: &str) -> String {
        let call = self.dialogue.reply(history, text);
        let result = match self.config.timeout {
            Some(timeout) => tokio::time::timeout(timeout, call)
                .await
                .unwrap_or_else(|_| Err(GatewayError::Timeout)),
            None => call.await,
        };

        let (message, fallback) = match result {
            Ok(reply) if !reply.trim().is_empty() => (reply.trim().to_string(), false),
            Ok(_) => {
                warn!("Dialogue provider {} returned an empty reply", self.dialogue.name());
                (FALLBACK_REPLY.to_string(), true)
            }
            Err(e) => {
                warn!("Dialogue provider {} failed: {}", self.dialogue.name(), e);
                (FALLBACK_REPLY.to_string(), true)
            }
        };

        self.log(
            "dialogue_reply",
            json!({
                "session_id": session_id,
                "provider": self.dialogue.name(),
                "content": message,
                "fallback": fallback,
            }),
        );
        message
    }

    fn log_followup(
        &self,
        session: &ConversationSession,
        trigger: TriggerKey,
        number: usize,
        question: &str,
    ) {
        debug!("Follow-up {} for {}: {}", number, trigger, question);
        self.log(
            "followup_asked",
            json!({
                "session_id": session.id(),
                "trigger": trigger,
                "number": number,
                "question": question,
            }),
        );
    }

    fn log(&self, event_type: &'static str, payload: serde_json::Value) {
        self.conversation_logger
            .log(ConversationEvent::new(event_type, payload));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;
    use std::time::Duration;
    use triage_domain::{FaqTopic, REDIRECT_MESSAGE, TriageOutcome, UrgencyLevel};

    // ==================== Test Mocks ====================

    #[derive(Default)]
    struct MockStore {
        sessions: Mutex<HashMap<String, SessionHandle>>,
    }

    #[async_trait]
    impl ConversationStore for MockStore {
        async fn insert(&self, session: ConversationSession) -> SessionHandle {
            let id = session.id().to_string();
            let handle = Arc::new(tokio::sync::Mutex::new(session));
            self.sessions.lock().unwrap().insert(id, handle.clone());
            handle
        }

        async fn get(&self, session_id: &str) -> Option<SessionHandle> {
            self.sessions.lock().unwrap().get(session_id).cloned()
        }

        async fn remove(&self, session_id: &str) -> bool {
            self.sessions.lock().unwrap().remove(session_id).is_some()
        }
    }

    /// Scripted dialogue: pops replies in order, errors when empty
    struct MockDialogue {
        replies: Mutex<VecDeque<Result<String, GatewayError>>>,
        calls: Mutex<usize>,
        delay: Option<Duration>,
    }

    impl MockDialogue {
        fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                replies: Mutex::new(VecDeque::from(replies)),
                calls: Mutex::new(0),
                delay: None,
            }
        }

        fn silent() -> Self {
            Self::new(vec![])
        }

        fn slow(delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Self::new(vec![Ok("too late".to_string())])
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl DialogueGateway for MockDialogue {
        async fn reply(&self, _history: &[Message], _message: &str) -> Result<String, GatewayError> {
            *self.calls.lock().unwrap() += 1;
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more replies".to_string())))
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<ConversationEvent>>,
    }

    impl RecordingLogger {
        fn types(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().iter().map(|e| e.event_type).collect()
        }

        fn payloads(&self, event_type: &str) -> Vec<serde_json::Value> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter(|e| e.event_type == event_type)
                .map(|e| e.payload.clone())
                .collect()
        }
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    struct Harness {
        use_case: HandleMessageUseCase,
        dialogue: Arc<MockDialogue>,
        logger: Arc<RecordingLogger>,
    }

    async fn harness(dialogue: MockDialogue, config: BehaviorConfig) -> Harness {
        let dialogue = Arc::new(dialogue);
        let logger = Arc::new(RecordingLogger::default());
        let use_case = HandleMessageUseCase::new(Arc::new(MockStore::default()), dialogue.clone())
            .with_config(config)
            .with_conversation_logger(logger.clone());
        use_case.start_session("s-1").await;
        Harness {
            use_case,
            dialogue,
            logger,
        }
    }

    async fn send(h: &Harness, text: &str) -> TriageReply {
        h.use_case.execute("s-1", text).await.unwrap()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_unknown_session() {
        let h = harness(MockDialogue::silent(), BehaviorConfig::default()).await;
        let result = h.use_case.execute("nope", "hello").await;
        assert!(matches!(result, Err(HandleMessageError::UnknownSession(id)) if id == "nope"));
    }

    #[tokio::test]
    async fn test_ended_session_is_forgotten() {
        let h = harness(MockDialogue::silent(), BehaviorConfig::default()).await;
        send(&h, "hello").await;

        assert!(h.use_case.end_session("s-1").await);
        assert!(h.use_case.snapshot("s-1").await.is_none());
        assert!(matches!(
            h.use_case.execute("s-1", "hello").await,
            Err(HandleMessageError::UnknownSession(_))
        ));
        assert!(!h.use_case.end_session("s-1").await);
    }

    #[tokio::test]
    async fn test_trigger_runs_full_followup_script() {
        let h = harness(MockDialogue::silent(), BehaviorConfig::default()).await;

        let first = send(&h, "I have chest pain").await;
        assert_eq!(first.kind, ReplyKind::Followup);
        assert!(first.needs_followup);
        assert!(!first.triage_complete);
        assert_eq!(
            first.trigger_warning.as_deref(),
            Some(TriggerKey::ChestPain.trigger().initial_message)
        );
        assert_eq!(first.message, TriggerKey::ChestPain.trigger().questions[0]);

        for i in 1..5 {
            let reply = send(&h, "yes, it is crushing").await;
            assert_eq!(reply.kind, ReplyKind::Followup);
            assert_eq!(reply.message, TriggerKey::ChestPain.trigger().questions[i]);
            assert!(reply.trigger_warning.is_none());
        }

        let last = send(&h, "yes").await;
        assert_eq!(last.kind, ReplyKind::Decision);
        assert!(last.triage_complete);
        assert!(!last.needs_followup);
        let decision = last.triage_result.unwrap();
        // base 3 + yes 2 + crushing 3
        assert_eq!(decision.risk_score.value(), 8);
        assert_eq!(decision.triage_result, TriageOutcome::Emergency);
        assert!(last.clinic_recommendation.is_none());
        assert!(!last.message.contains(BOOKING_PROMPT));
        assert_eq!(h.dialogue.calls(), 0);
    }

    #[tokio::test]
    async fn test_reassuring_answers_still_end_in_clinic() {
        let h = harness(MockDialogue::silent(), BehaviorConfig::default()).await;
        send(&h, "there is heavy bleeding from my leg").await;
        let mut last = None;
        for _ in 0..5 {
            last = Some(send(&h, "no").await);
        }
        let last = last.unwrap();
        let decision = last.triage_result.unwrap();
        assert_eq!(decision.care_level, CareLevel::Clinic);
        assert_eq!(decision.urgency_level, UrgencyLevel::High);
        assert_eq!(decision.risk_score.value(), 4);
        assert!(last.message.ends_with(BOOKING_PROMPT));
        assert!(last.clinic_recommendation.is_some());
    }

    #[tokio::test]
    async fn test_trigger_text_mid_followup_is_an_answer() {
        let h = harness(MockDialogue::silent(), BehaviorConfig::default()).await;
        send(&h, "I have chest pain").await;
        let reply = send(&h, "now I also can't breathe").await;
        assert_eq!(reply.kind, ReplyKind::Followup);
        let session = h.use_case.snapshot("s-1").await.unwrap();
        assert_eq!(session.triage_state().trigger_detected(), Some(TriggerKey::ChestPain));
        assert_eq!(session.triage_state().responses().len(), 1);
    }

    #[tokio::test]
    async fn test_threshold_finalizes_untriggered_conversation() {
        let replies = (0..4).map(|i| Ok(format!("reply {}", i))).collect();
        let h = harness(MockDialogue::new(replies), BehaviorConfig::default()).await;

        for text in ["hello", "I have a rash", "it itches", "since monday"] {
            let reply = send(&h, text).await;
            assert_eq!(reply.kind, ReplyKind::Dialogue);
        }
        let fifth = send(&h, "that's all").await;
        assert_eq!(fifth.kind, ReplyKind::Decision);
        let decision = fifth.triage_result.unwrap();
        assert_eq!(decision.urgency_level, UrgencyLevel::Low);
        assert_eq!(decision.risk_score.value(), 0);
        assert_eq!(h.dialogue.calls(), 4);
    }

    #[tokio::test]
    async fn test_custom_threshold_and_no_extras() {
        let config = BehaviorConfig::default()
            .with_message_threshold(1)
            .with_offer_booking(false)
            .with_recommend_clinics(false);
        let h = harness(MockDialogue::silent(), config).await;

        let reply = send(&h, "I feel dizzy").await;
        assert_eq!(reply.kind, ReplyKind::Decision);
        assert_eq!(reply.triage_result.unwrap().urgency_level, UrgencyLevel::Medium);
        assert!(!reply.message.contains(BOOKING_PROMPT));
        assert!(reply.clinic_recommendation.is_none());
    }

    #[tokio::test]
    async fn test_decided_session_is_not_retriaged() {
        let config = BehaviorConfig::default().with_message_threshold(1);
        let h = harness(MockDialogue::new(vec![Ok("Sure.".to_string())]), config).await;

        send(&h, "I have a cough").await;
        let reply = send(&h, "actually I have chest pain").await;
        assert_eq!(reply.kind, ReplyKind::Dialogue);
        assert!(reply.triage_complete);
        let session = h.use_case.snapshot("s-1").await.unwrap();
        assert!(session.triage_state().trigger_detected().is_none());
    }

    #[tokio::test]
    async fn test_booking_after_decision() {
        let config = BehaviorConfig::default().with_message_threshold(1);
        let h = harness(MockDialogue::silent(), config).await;

        send(&h, "I have a rash").await;
        let reply = send(&h, "my name is priya and number is 98765 43210").await;
        assert_eq!(reply.kind, ReplyKind::BookingConfirmed);
        let booking = reply.booking.unwrap();
        assert_eq!(booking.name, "Priya");
        assert_eq!(booking.phone, "9876543210");

        let logged = h.logger.payloads("booking_captured");
        assert_eq!(logged[0]["phone"], "******3210");
    }

    #[tokio::test]
    async fn test_booking_checked_before_threshold() {
        let config = BehaviorConfig::default().with_message_threshold(1);
        let h = harness(MockDialogue::silent(), config).await;
        let reply = send(&h, "Ravi 9876543210").await;
        assert_eq!(reply.kind, ReplyKind::BookingConfirmed);
        assert!(!reply.triage_complete);
    }

    #[tokio::test]
    async fn test_faq_answered_without_dialogue() {
        let h = harness(MockDialogue::silent(), BehaviorConfig::default()).await;
        let reply = send(&h, "Do you take insurance?").await;
        assert_eq!(reply.kind, ReplyKind::Faq);
        assert_eq!(reply.message, FaqTopic::Payment.answer());
        assert_eq!(h.dialogue.calls(), 0);
    }

    #[tokio::test]
    async fn test_second_off_topic_message_is_redirected() {
        let h = harness(
            MockDialogue::new(vec![Ok("I'm well, thanks!".to_string())]),
            BehaviorConfig::default(),
        )
        .await;
        let first = send(&h, "how are you").await;
        assert_eq!(first.kind, ReplyKind::Dialogue);
        assert_eq!(first.message, "I'm well, thanks!");

        let second = send(&h, "tell me a joke").await;
        assert_eq!(second.kind, ReplyKind::Redirect);
        assert_eq!(second.message, REDIRECT_MESSAGE);
        assert_eq!(h.dialogue.calls(), 1);
    }

    #[tokio::test]
    async fn test_dialogue_failure_uses_fallback() {
        let h = harness(
            MockDialogue::new(vec![
                Err(GatewayError::ConnectionError("refused".to_string())),
                Ok("   ".to_string()),
            ]),
            BehaviorConfig::default(),
        )
        .await;
        assert_eq!(send(&h, "hello").await.message, FALLBACK_REPLY);
        assert_eq!(send(&h, "hello again").await.message, FALLBACK_REPLY);

        let logged = h.logger.payloads("dialogue_reply");
        assert_eq!(logged.len(), 2);
        assert_eq!(logged[0]["fallback"], true);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dialogue_timeout_uses_fallback() {
        let config = BehaviorConfig::default().with_timeout_seconds(Some(1));
        let h = harness(MockDialogue::slow(Duration::from_secs(5)), config).await;
        let reply = send(&h, "hello").await;
        assert_eq!(reply.message, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn test_agent_replies_are_recorded() {
        let h = harness(MockDialogue::silent(), BehaviorConfig::default()).await;
        send(&h, "I can't breathe").await;
        let session = h.use_case.snapshot("s-1").await.unwrap();
        // user message, warning, first question
        assert_eq!(session.messages().len(), 3);
        assert!(session.messages()[1].role.is_agent());
        assert_eq!(session.symptoms_collected().len(), 1);
    }

    #[tokio::test]
    async fn test_transcript_events() {
        let h = harness(MockDialogue::silent(), BehaviorConfig::default()).await;
        send(&h, "I have chest pain").await;
        assert_eq!(
            h.logger.types(),
            vec!["user_message", "trigger_detected", "followup_asked"]
        );
        let triggered = h.logger.payloads("trigger_detected");
        assert_eq!(triggered[0]["trigger"], "chest_pain");
    }

    #[tokio::test]
    async fn test_reply_wire_shape() {
        let h = harness(MockDialogue::silent(), BehaviorConfig::default()).await;
        let reply = send(&h, "I have chest pain").await;
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["kind"], "followup");
        assert_eq!(json["session_id"], "s-1");
        assert!(json.get("triage_result").is_none());
        assert!(json.get("booking").is_none());
    }
}

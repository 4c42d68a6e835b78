//! Console output formatter for triage results

use colored::Colorize;
use serde::Serialize;
use triage_application::{Assessment, ReplyKind, TriageReply};
use triage_domain::{
    CareLevel, ClinicRecommendation, ConfigIssue, ConversationSession, TriageDecision,
    UrgencyLevel, find_clinic, get_triage_summary,
};

/// Formats triage results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a one-shot assessment
    pub fn format_assessment(assessment: &Assessment) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Symptom Triage"));
        output.push('\n');
        output.push_str(&Self::format_decision(&assessment.triage_result));
        if let Some(rec) = &assessment.clinic_recommendation {
            output.push('\n');
            output.push_str(&Self::format_recommendation(rec));
        }
        output.push_str(&Self::footer());
        output
    }

    /// Summary text with the banner line colored by severity
    pub fn format_decision(decision: &TriageDecision) -> String {
        let summary = get_triage_summary(decision);
        let (banner, body) = summary.split_once('\n').unwrap_or((summary.as_str(), ""));
        let banner = match (decision.care_level, decision.urgency_level) {
            (CareLevel::Emergency, _) => banner.red().bold(),
            (CareLevel::Clinic, UrgencyLevel::High) => banner.yellow().bold(),
            (CareLevel::Clinic, UrgencyLevel::Medium) => banner.cyan().bold(),
            (CareLevel::Clinic, UrgencyLevel::Low) => banner.green().bold(),
        };
        format!("\n{}\n{}\n", banner, body)
    }

    pub fn format_recommendation(rec: &ClinicRecommendation) -> String {
        let mut output = Self::section_header(&format!("Recommended clinics ({})", rec.specialty));
        for id in &rec.recommended_clinics {
            match find_clinic(*id) {
                Some(clinic) => output.push_str(&format!("  * {} {}\n", clinic.name, format!("[{}]", id).dimmed())),
                None => output.push_str(&format!("  * clinic #{}\n", id)),
            }
        }
        output.push_str(&format!("{} {}\n", "Reason:".cyan().bold(), rec.reason));
        output
    }

    /// Format one chat reply
    pub fn format_reply(reply: &TriageReply) -> String {
        let mut output = String::new();
        if let Some(warning) = &reply.trigger_warning {
            output.push_str(&format!("{}\n", warning.yellow().bold()));
        }

        match reply.kind {
            ReplyKind::Decision => match &reply.triage_result {
                Some(decision) => {
                    output.push_str(&Self::format_decision(decision));
                    // Anything the use case appended after the summary
                    let summary = get_triage_summary(decision);
                    if let Some(rest) = reply.message.strip_prefix(summary.as_str()) {
                        let rest = rest.trim();
                        if !rest.is_empty() {
                            output.push_str(&format!("\n{}\n", rest.bold()));
                        }
                    }
                }
                None => output.push_str(&reply.message),
            },
            ReplyKind::Followup => {
                output.push_str(&format!("{} {}", "?".yellow().bold(), reply.message.bold()))
            }
            ReplyKind::BookingConfirmed => output.push_str(&reply.message.green().to_string()),
            ReplyKind::Redirect => output.push_str(&reply.message.dimmed().to_string()),
            ReplyKind::Faq | ReplyKind::Dialogue => output.push_str(&reply.message),
        }

        if let Some(rec) = &reply.clinic_recommendation {
            output.push('\n');
            output.push_str(&Self::format_recommendation(rec));
        }
        output
    }

    /// Triage state of a chat session (for `/state`)
    pub fn format_state(session: &ConversationSession) -> String {
        let state = session.triage_state();
        let mut output = Self::section_header("Session state");
        output.push_str(&format!("  {:<14} {}\n", "session:", session.id()));
        output.push_str(&format!("  {:<14} {}\n", "phase:", state.phase()));
        match state.trigger_detected() {
            Some(trigger) => {
                output.push_str(&format!("  {:<14} {}\n", "trigger:", trigger));
                output.push_str(&format!(
                    "  {:<14} {}/{}\n",
                    "follow-ups:",
                    state.followup_count(),
                    trigger.trigger().question_count()
                ));
            }
            None => output.push_str(&format!("  {:<14} none\n", "trigger:")),
        }
        output.push_str(&format!(
            "  {:<14} {}\n",
            "user messages:",
            session.user_message_count()
        ));
        output.push_str(&format!("  {:<14} {}\n", "result:", session.triage_result()));
        output
    }

    /// Configuration warnings, one per line
    pub fn format_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| {
                let label = if issue.is_error() {
                    "error:".red().bold()
                } else {
                    "warning:".yellow().bold()
                };
                format!("{} {}", label, issue.message)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

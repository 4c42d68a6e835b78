//! Human-readable rendering of a decision

use super::decision::{CareLevel, TriageDecision, UrgencyLevel};

/// Render a decision as the text shown to the user.
pub fn get_triage_summary(decision: &TriageDecision) -> String {
    let (badge, header) = match decision.care_level {
        CareLevel::Emergency => ("🚨", "EMERGENCY - IMMEDIATE ATTENTION REQUIRED".to_string()),
        CareLevel::Clinic => {
            let badge = match decision.urgency_level {
                UrgencyLevel::High => "⚠️",
                UrgencyLevel::Medium => "📋",
                UrgencyLevel::Low => "✅",
            };
            (
                badge,
                format!(
                    "CLINIC VISIT RECOMMENDED ({} PRIORITY)",
                    decision.urgency_level.as_str().to_uppercase()
                ),
            )
        }
    };

    let mut summary = format!("{} {}\n\n", badge, header);
    summary.push_str(&format!("Assessment: {}\n\n", decision.reason));
    summary.push_str(&format!("Recommended Action: {}\n\n", decision.next_step));

    if decision.risk_score.value() > 0 {
        summary.push_str(&format!("Risk Assessment Score: {}\n\n", decision.risk_score));
    }

    summary.push_str(&format!("⚠️ {}", decision.disclaimer));
    summary
}

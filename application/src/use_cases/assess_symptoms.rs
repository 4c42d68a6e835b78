//! Assess Symptoms use case
//!
//! Stateless one-shot assessment: no follow-up questions are asked, so a
//! detected trigger is scored at its base weight.

use serde::Serialize;
use tracing::info;
use triage_domain::core::text::join_fragments;
use triage_domain::{
    CareLevel, ClinicRecommendation, TriageDecision, get_clinic_recommendation, run_triage,
};

/// Result of a one-shot assessment
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub triage_result: TriageDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinic_recommendation: Option<ClinicRecommendation>,
}

/// Use case for assessing a list of symptom descriptions
#[derive(Debug, Clone)]
pub struct AssessSymptomsUseCase {
    recommend_clinics: bool,
}

impl Default for AssessSymptomsUseCase {
    fn default() -> Self {
        Self {
            recommend_clinics: true,
        }
    }
}

impl AssessSymptomsUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recommend_clinics(mut self, recommend: bool) -> Self {
        self.recommend_clinics = recommend;
        self
    }

    pub fn execute<S: AsRef<str>>(&self, symptoms: &[S]) -> Assessment {
        let decision = run_triage(symptoms, None);
        info!(
            "Assessed {} symptom description(s): {} / {}",
            symptoms.len(),
            decision.care_level,
            decision.urgency_level
        );

        let clinic_recommendation = (decision.care_level == CareLevel::Clinic
            && self.recommend_clinics)
            .then(|| get_clinic_recommendation(&join_fragments(symptoms)));

        Assessment {
            triage_result: decision,
            clinic_recommendation,
        }
    }
}

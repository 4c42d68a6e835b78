//! Symptom text to clinic recommendation
//!
//! Independent of the trigger flow. Categories are checked in declared
//! order and the first keyword hit wins; nothing matching falls back to a
//! general consultation at every clinic.

use super::catalog::{CLINICS, ClinicId};
use crate::core::text::{contains_any, normalize};
use serde::{Deserialize, Serialize};

struct ClinicCategory {
    id: &'static str,
    keywords: &'static [&'static str],
    clinics: &'static [ClinicId],
    reason: &'static str,
    specialty: &'static str,
}

const BOTH: &[ClinicId] = &[ClinicId(6), ClinicId(7)];
const APOLLO: &[ClinicId] = &[ClinicId(6)];
const FORTIS: &[ClinicId] = &[ClinicId(7)];

static CLINIC_CATEGORIES: [ClinicCategory; 6] = [
    ClinicCategory {
        id: "fever",
        keywords: &["fever", "high temperature", "temperature", "hot", "burning up"],
        clinics: BOTH,
        reason: "General Medicine specialists who can diagnose and treat fever-related conditions",
        specialty: "General Medicine",
    },
    ClinicCategory {
        id: "heart",
        keywords: &["chest pain", "heart", "cardiac", "palpitation", "irregular heartbeat"],
        clinics: BOTH,
        reason: "Cardiology specialists for heart-related concerns",
        specialty: "Cardiology",
    },
    ClinicCategory {
        id: "child",
        keywords: &["child", "baby", "infant", "kid", "toddler", "pediatric"],
        clinics: APOLLO,
        reason: "Pediatric specialists for children's healthcare",
        specialty: "Pediatrics",
    },
    ClinicCategory {
        id: "emergency",
        keywords: &["emergency", "urgent", "severe", "critical"],
        clinics: FORTIS,
        reason: "24/7 Emergency Care available",
        specialty: "Emergency Care",
    },
    ClinicCategory {
        id: "orthopedic",
        keywords: &["bone", "fracture", "joint pain", "back pain", "neck pain", "sprain"],
        clinics: FORTIS,
        reason: "Orthopedic specialists for bone and joint issues",
        specialty: "Orthopedics",
    },
    ClinicCategory {
        id: "general",
        keywords: &["general", "checkup", "consultation", "routine"],
        clinics: BOTH,
        reason: "General physicians for routine checkups and consultations",
        specialty: "General Medicine",
    },
];

const FALLBACK_CATEGORY: &str = "general";
const FALLBACK_REASON: &str = "General consultation and healthcare services";
const FALLBACK_SPECIALTY: &str = "General Medicine";

/// Where to send the patient and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicRecommendation {
    pub recommended_clinics: Vec<ClinicId>,
    pub reason: String,
    pub specialty: String,
    pub category: String,
}

impl ClinicRecommendation {
    fn from_category(category: &ClinicCategory) -> Self {
        Self {
            recommended_clinics: category.clinics.to_vec(),
            reason: category.reason.to_string(),
            specialty: category.specialty.to_string(),
            category: category.id.to_string(),
        }
    }

    fn fallback() -> Self {
        Self {
            recommended_clinics: CLINICS.iter().map(|clinic| clinic.id).collect(),
            reason: FALLBACK_REASON.to_string(),
            specialty: FALLBACK_SPECIALTY.to_string(),
            category: FALLBACK_CATEGORY.to_string(),
        }
    }
}

/// Recommend clinics for free symptom text. Never empty.
pub fn get_clinic_recommendation(text: &str) -> ClinicRecommendation {
    let text = normalize(text);
    CLINIC_CATEGORIES
        .iter()
        .find(|category| contains_any(&text, category.keywords))
        .map(ClinicRecommendation::from_category)
        .unwrap_or_else(ClinicRecommendation::fallback)
}

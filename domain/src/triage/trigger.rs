//! High-risk trigger and routine symptom tables
//!
//! These are static, process-wide rule tables. Declaration order is
//! significant: detection walks [`TRIGGERS`] front to back and the first
//! category with a keyword hit wins.

use super::decision::{CareLevel, UrgencyLevel};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifier of a high-risk trigger category
///
/// # Example
///
/// ```
/// use triage_domain::TriggerKey;
///
/// let key: TriggerKey = "chest_pain".parse().unwrap();
/// assert_eq!(key, TriggerKey::ChestPain);
/// assert_eq!(key.trigger().questions.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKey {
    ChestPain,
    BreathingDifficulty,
    SevereBleeding,
}

impl TriggerKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerKey::ChestPain => "chest_pain",
            TriggerKey::BreathingDifficulty => "breathing_difficulty",
            TriggerKey::SevereBleeding => "severe_bleeding",
        }
    }

    /// The static rule entry for this key
    pub fn trigger(&self) -> &'static SymptomTrigger {
        match self {
            TriggerKey::ChestPain => &CHEST_PAIN,
            TriggerKey::BreathingDifficulty => &BREATHING_DIFFICULTY,
            TriggerKey::SevereBleeding => &SEVERE_BLEEDING,
        }
    }
}

impl std::fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TriggerKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chest_pain" => Ok(TriggerKey::ChestPain),
            "breathing_difficulty" => Ok(TriggerKey::BreathingDifficulty),
            "severe_bleeding" => Ok(TriggerKey::SevereBleeding),
            other => Err(DomainError::UnknownTrigger(other.to_string())),
        }
    }
}

/// Named risk weights of a trigger
///
/// `base` is the floor of every score computed for the trigger. The named
/// indicator weights describe what each follow-up question probes.
#[derive(Debug)]
pub struct RiskWeights {
    pub base: i32,
    pub indicators: &'static [(&'static str, i32)],
}

impl RiskWeights {
    /// Look up a named indicator weight (`"base"` included)
    pub fn weight(&self, name: &str) -> Option<i32> {
        if name == "base" {
            return Some(self.base);
        }
        self.indicators
            .iter()
            .find(|(indicator, _)| *indicator == name)
            .map(|(_, weight)| *weight)
    }
}

/// A high-risk symptom category with its follow-up script
#[derive(Debug)]
pub struct SymptomTrigger {
    pub key: TriggerKey,
    pub keywords: &'static [&'static str],
    /// Warning sent before the first follow-up question
    pub initial_message: &'static str,
    pub questions: &'static [&'static str],
    pub weights: RiskWeights,
}

impl SymptomTrigger {
    /// Number of follow-up questions in the script
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Question at a zero-based index
    pub fn question(&self, index: usize) -> Option<&'static str> {
        self.questions.get(index).copied()
    }
}

pub static CHEST_PAIN: SymptomTrigger = SymptomTrigger {
    key: TriggerKey::ChestPain,
    keywords: &[
        "chest pain",
        "chest pressure",
        "chest tightness",
        "chest discomfort",
    ],
    initial_message: "Chest pain can have different causes. I need to ask a few quick questions to ensure your safety.",
    questions: &[
        "Are you feeling breathless or having difficulty breathing right now?",
        "Is the pain severe or crushing (like pressure on your chest)?",
        "Is the pain spreading to your left arm, jaw, neck, or back?",
        "Are you sweating, dizzy, or feeling nauseous?",
        "Has this pain lasted more than 20 minutes?",
    ],
    weights: RiskWeights {
        base: 3,
        indicators: &[
            ("breathless", 3),
            ("severe_crushing", 3),
            ("radiating", 3),
            ("sweating_dizzy", 2),
            ("duration_long", 2),
        ],
    },
};

pub static BREATHING_DIFFICULTY: SymptomTrigger = SymptomTrigger {
    key: TriggerKey::BreathingDifficulty,
    keywords: &[
        "shortness of breath",
        "short of breath",
        "cant breathe",
        "can't breathe",
        "difficulty breathing",
        "hard to breathe",
        "gasping",
    ],
    initial_message: "Breathing difficulty needs careful assessment. Let me ask a few important questions.",
    questions: &[
        "Is your breathing getting worse rapidly?",
        "Are your lips or fingernails turning blue?",
        "Are you unable to speak in full sentences?",
        "Do you have chest pain along with the breathing difficulty?",
        "Do you have a history of asthma or heart problems?",
    ],
    weights: RiskWeights {
        base: 3,
        indicators: &[
            ("worsening", 3),
            ("blue_lips", 4),
            ("cant_speak", 3),
            ("chest_pain", 3),
            ("history", 1),
        ],
    },
};

pub static SEVERE_BLEEDING: SymptomTrigger = SymptomTrigger {
    key: TriggerKey::SevereBleeding,
    keywords: &[
        "severe bleeding",
        "heavy bleeding",
        "uncontrolled bleeding",
        "blood loss",
        "bleeding heavily",
    ],
    initial_message: "Bleeding needs immediate assessment. Please answer these questions.",
    questions: &[
        "Is the bleeding continuous and not stopping with pressure?",
        "Are you feeling dizzy or lightheaded?",
        "Is the blood spurting or pulsing out?",
        "Have you lost a significant amount of blood?",
        "Is the wound deep or large?",
    ],
    weights: RiskWeights {
        base: 4,
        indicators: &[
            ("continuous", 3),
            ("dizzy", 2),
            ("spurting", 4),
            ("significant_loss", 3),
            ("deep_wound", 2),
        ],
    },
};

/// Trigger categories in detection order
pub static TRIGGERS: [&SymptomTrigger; 3] = [&CHEST_PAIN, &BREATHING_DIFFICULTY, &SEVERE_BLEEDING];

/// Low-severity symptoms that bypass the follow-up flow
#[derive(Debug)]
pub struct RoutineSymptomSet {
    pub keywords: &'static [&'static str],
    pub care_level: CareLevel,
    pub urgency: UrgencyLevel,
}

pub static ROUTINE_SYMPTOMS: RoutineSymptomSet = RoutineSymptomSet {
    keywords: &[
        "rash",
        "skin rash",
        "itching",
        "itchy",
        "itch",
        "mild fever",
        "low fever",
        "headache",
        "cough",
        "cold",
        "sore throat",
        "runny nose",
        "congestion",
    ],
    care_level: CareLevel::Clinic,
    urgency: UrgencyLevel::Low,
};

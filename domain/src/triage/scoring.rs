//! Risk scoring from follow-up answers
//!
//! The whole transcript of answers is scanned as one lower-cased blob. Each
//! indicator phrase counts at most once, no matter how often it appears or
//! which answer it appears in.

use super::trigger::TriggerKey;
use crate::core::text::{join_fragments, normalize};
use serde::{Deserialize, Serialize};

/// Phrases that raise the score, with their weights
pub const POSITIVE_INDICATORS: &[(&str, i32)] = &[
    ("yes", 2),
    ("yeah", 2),
    ("yep", 2),
    ("severe", 2),
    ("intense", 2),
    ("very", 1),
    ("getting worse", 2),
    ("worsening", 2),
    ("spreading", 2),
    ("unbearable", 3),
    ("crushing", 3),
    ("cant", 2),
    ("can't", 2),
    ("unable", 2),
    ("more than", 1),
];

/// Phrases that lower the score, with the amount subtracted
pub const NEGATIVE_INDICATORS: &[(&str, i32)] = &[
    ("no", 1),
    ("nope", 1),
    ("not", 1),
    ("mild", 1),
    ("slight", 1),
    ("better", 2),
    ("improving", 2),
];

/// Integer risk score
///
/// Scores computed for a trigger never fall below that trigger's base weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(i32);

impl RiskScore {
    /// Score used for routine and unclassified outcomes
    pub const ZERO: RiskScore = RiskScore(0);

    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Score a trigger against the answers collected so far.
///
/// # Example
///
/// ```
/// use triage_domain::{TriggerKey, calculate_risk_score};
///
/// let score = calculate_risk_score(TriggerKey::ChestPain, &["no", "not severe"]);
/// assert_eq!(score.value(), 3); // clamped to the chest pain base weight
/// ```
pub fn calculate_risk_score<S: AsRef<str>>(trigger: TriggerKey, responses: &[S]) -> RiskScore {
    let base = trigger.trigger().weights.base;
    let blob = normalize(&join_fragments(responses));

    let raised: i32 = POSITIVE_INDICATORS
        .iter()
        .filter(|(phrase, _)| blob.contains(phrase))
        .map(|(_, weight)| weight)
        .sum();
    let lowered: i32 = NEGATIVE_INDICATORS
        .iter()
        .filter(|(phrase, _)| blob.contains(phrase))
        .map(|(_, weight)| weight)
        .sum();

    RiskScore((base + raised - lowered).max(base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL_TRIGGERS: [TriggerKey; 3] = [
        TriggerKey::ChestPain,
        TriggerKey::BreathingDifficulty,
        TriggerKey::SevereBleeding,
    ];

    #[test]
    fn test_no_responses_scores_base() {
        for trigger in ALL_TRIGGERS {
            let empty: [&str; 0] = [];
            assert_eq!(
                calculate_risk_score(trigger, &empty).value(),
                trigger.trigger().weights.base
            );
        }
    }

    #[test]
    fn test_all_negative_answers_clamp_to_base() {
        let score = calculate_risk_score(TriggerKey::ChestPain, &["no", "not severe"]);
        assert_eq!(score, RiskScore::new(3));

        let score = calculate_risk_score(
            TriggerKey::SevereBleeding,
            &["nope", "it is getting better", "improving, only slight"],
        );
        assert_eq!(score, RiskScore::new(4));
    }

    #[test]
    fn test_positive_indicators_accumulate() {
        // base 3 + yes 2 + crushing 3 + spreading 2
        let score = calculate_risk_score(
            TriggerKey::ChestPain,
            &["yes", "it's crushing", "spreading to my arm"],
        );
        assert_eq!(score.value(), 10);
    }

    #[test]
    fn test_indicator_counts_once_across_transcript() {
        let once = calculate_risk_score(TriggerKey::ChestPain, &["yes"]);
        let many = calculate_risk_score(TriggerKey::ChestPain, &["yes", "yes", "yes", "yes"]);
        assert_eq!(once, many);
        assert_eq!(once.value(), 5);
    }

    #[test]
    fn test_blob_spans_answer_boundaries() {
        // "more than" only appears when answers are joined
        let score = calculate_risk_score(TriggerKey::SevereBleeding, &["a bit more", "than usual"]);
        assert_eq!(score.value(), 4 + 1);
    }

    #[test]
    fn test_scoring_is_case_insensitive() {
        let upper = calculate_risk_score(TriggerKey::ChestPain, &["YES, UNBEARABLE"]);
        let lower = calculate_risk_score(TriggerKey::ChestPain, &["yes, unbearable"]);
        assert_eq!(upper, lower);
        assert_eq!(upper.value(), 3 + 2 + 3);
    }

    #[test]
    fn test_mixed_answers_net_out() {
        // base 3 + severe 2 + very 1 - mild 1
        let score = calculate_risk_score(
            TriggerKey::BreathingDifficulty,
            &["very severe at first", "later mild"],
        );
        assert_eq!(score.value(), 5);
    }

    proptest! {
        #[test]
        fn prop_score_never_below_base(
            trigger_idx in 0usize..3,
            responses in proptest::collection::vec("[a-z' ]{0,24}", 0..6),
        ) {
            let trigger = ALL_TRIGGERS[trigger_idx];
            let score = calculate_risk_score(trigger, responses.as_slice());
            prop_assert!(score.value() >= trigger.trigger().weights.base);
        }

        #[test]
        fn prop_answer_order_does_not_matter(
            responses in proptest::collection::vec("(yes|no|severe|mild|better|very|unable)", 0..6),
        ) {
            let mut reversed = responses.clone();
            reversed.reverse();
            prop_assert_eq!(
                calculate_risk_score(TriggerKey::ChestPain, responses.as_slice()),
                calculate_risk_score(TriggerKey::ChestPain, reversed.as_slice())
            );
        }
    }
}

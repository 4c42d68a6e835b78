//! Application-level configuration.
//!
//! Controls how the message use case behaves: when an untriggered
//! conversation is finalized, what is attached to a clinic outcome, and how
//! long free-form dialogue may take.

use std::time::Duration;

/// Default number of user messages before an untriggered conversation is finalized
pub const DEFAULT_MESSAGE_THRESHOLD: usize = 5;

/// Default dialogue timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 20;

/// Application behavior configuration.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// User messages after which an untriggered conversation is finalized.
    pub message_threshold: usize,
    /// Append the booking prompt after a CLINIC decision.
    pub offer_booking: bool,
    /// Attach a clinic recommendation to CLINIC decisions.
    pub recommend_clinics: bool,
    /// Maximum time to wait for a dialogue reply before falling back.
    pub timeout: Option<Duration>,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            message_threshold: DEFAULT_MESSAGE_THRESHOLD,
            offer_booking: true,
            recommend_clinics: true,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)),
        }
    }
}

impl BehaviorConfig {
    pub fn with_message_threshold(mut self, threshold: usize) -> Self {
        self.message_threshold = threshold;
        self
    }

    pub fn with_offer_booking(mut self, offer: bool) -> Self {
        self.offer_booking = offer;
        self
    }

    pub fn with_recommend_clinics(mut self, recommend: bool) -> Self {
        self.recommend_clinics = recommend;
        self
    }

    /// Set the dialogue timeout in seconds. `None` waits indefinitely.
    pub fn with_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        self.timeout = seconds.map(Duration::from_secs);
        self
    }
}

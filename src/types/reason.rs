//! Reason codes for stabilizer decisions

use serde::{Deserialize, Serialize};

/// Why a classified frame did or did not change the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    /// No hand in the frame
    G001_NO_HAND,
    /// Label has no display word (unknown pose)
    G002_UNMAPPED,
    /// Confidence not above the configured threshold
    G003_BELOW_THRESHOLD,
    /// Word already on display, history untouched
    G004_REPEATED_WORD,
    /// New word accepted and pushed to history
    G005_ACCEPTED,
    /// Capture session stopped, display frozen
    G006_SESSION_STOPPED,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::G001_NO_HAND => "G001_NO_HAND",
            Self::G002_UNMAPPED => "G002_UNMAPPED",
            Self::G003_BELOW_THRESHOLD => "G003_BELOW_THRESHOLD",
            Self::G004_REPEATED_WORD => "G004_REPEATED_WORD",
            Self::G005_ACCEPTED => "G005_ACCEPTED",
            Self::G006_SESSION_STOPPED => "G006_SESSION_STOPPED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::G001_NO_HAND => "No hand detected",
            Self::G002_UNMAPPED => "Gesture has no display word",
            Self::G003_BELOW_THRESHOLD => "Confidence too low",
            Self::G004_REPEATED_WORD => "Same word already shown",
            Self::G005_ACCEPTED => "New word accepted",
            Self::G006_SESSION_STOPPED => "Session stopped",
        }
    }

    pub fn is_accepted(&self) -> bool {
        *self == Self::G005_ACCEPTED
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

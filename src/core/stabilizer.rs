//! Stabilizer: debounces the per-frame label stream into display words
//!
//! A result changes the display only when its confidence is strictly above
//! the threshold AND its word differs from the one on screen. Accepted words
//! go to the front of a bounded history; the oldest entry falls off.

use tracing::info;
use crate::types::{DisplayState, GestureResult, ReasonCode, StabilizerConfig};

/// Outcome of evaluating one result against the current display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StabilizerDecision {
    pub reason: ReasonCode,
    /// Word to show, only set when accepted
    pub word: Option<&'static str>,
}

impl StabilizerDecision {
    fn reject(reason: ReasonCode) -> Self {
        Self { reason, word: None }
    }

    pub fn is_accepted(&self) -> bool {
        self.word.is_some()
    }
}

/// Stateless acceptance policy; the caller owns the `DisplayState`
#[derive(Debug, Clone, Copy, Default)]
pub struct Stabilizer {
    config: StabilizerConfig,
}

impl Stabilizer {
    pub fn new(config: StabilizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> StabilizerConfig {
        self.config
    }

    /// Decide what `result` would do to `state` without touching it
    pub fn decide(&self, result: &GestureResult, state: &DisplayState) -> StabilizerDecision {
        if result.is_no_hand() {
            return StabilizerDecision::reject(ReasonCode::G001_NO_HAND);
        }

        let Some(word) = result.label.display_word() else {
            return StabilizerDecision::reject(ReasonCode::G002_UNMAPPED);
        };

        // NaN never passes
        if !(result.confidence > self.config.threshold) {
            return StabilizerDecision::reject(ReasonCode::G003_BELOW_THRESHOLD);
        }

        if word == state.current_word {
            return StabilizerDecision::reject(ReasonCode::G004_REPEATED_WORD);
        }

        StabilizerDecision {
            reason: ReasonCode::G005_ACCEPTED,
            word: Some(word),
        }
    }

    /// Apply an accepted decision in place. Rejections leave `state` as is.
    pub fn apply(&self, decision: &StabilizerDecision, state: &mut DisplayState) {
        let Some(word) = decision.word else {
            return;
        };

        state.current_word = word.to_string();
        state.history.push_front(word.to_string());
        state.history.truncate(self.config.capacity);

        info!(word, history_len = state.history.len(), "display word accepted");
    }

    /// Value-in, value-out step: the new display state after `result`
    pub fn accept(&self, result: &GestureResult, mut state: DisplayState) -> DisplayState {
        let decision = self.decide(result, &state);
        self.apply(&decision, &mut state);
        state
    }
}

// =============================================================================
// TESTS
// =============================================================================

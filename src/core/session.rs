//! Gesture session: one capture session's frame loop
//!
//! Lifecycle:
//! - `start()`: display cleared, frames may change the display
//! - `process()`: classify → decide → apply, once per frame
//! - `stop()`: display cleared, later frames are classified but frozen out

use tracing::info;
use crate::core::{GestureClassifier, Stabilizer};
use crate::types::{
    DisplayState, FrameOutput, GestureResult, HandLandmarks, ReasonCode, RuleSet,
    StabilizerConfig,
};

/// Frame-loop engine owning the single `DisplayState` of a session
#[derive(Debug, Clone)]
pub struct GestureSession {
    classifier: GestureClassifier,
    stabilizer: Stabilizer,
    display: DisplayState,
    last_result: GestureResult,
    last_reason: ReasonCode,
    frame_count: u64,
    accepted_count: u64,
    active: bool,
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new(RuleSet::default(), StabilizerConfig::default())
    }
}

impl GestureSession {
    /// Create a new, active session
    pub fn new(rule_set: RuleSet, config: StabilizerConfig) -> Self {
        Self {
            classifier: GestureClassifier::new(rule_set),
            stabilizer: Stabilizer::new(config),
            display: DisplayState::new(),
            last_result: GestureResult::no_hand(),
            last_reason: ReasonCode::G001_NO_HAND,
            frame_count: 0,
            accepted_count: 0,
            active: true,
        }
    }

    /// Session with the preset stabilizer config of `rule_set`
    pub fn for_rule_set(rule_set: RuleSet) -> Self {
        Self::new(rule_set, StabilizerConfig::for_rule_set(rule_set))
    }

    /// Begin a capture session with a clean display
    pub fn start(&mut self) {
        self.clear();
        self.active = true;
        info!(rule_set = %self.classifier.rule_set(), "session started");
    }

    /// End the capture session; the display is cleared
    pub fn stop(&mut self) {
        self.clear();
        self.active = false;
        info!(frames = self.frame_count, accepted = self.accepted_count, "session stopped");
    }

    fn clear(&mut self) {
        self.display.clear();
        self.last_result = GestureResult::no_hand();
        self.last_reason = ReasonCode::G001_NO_HAND;
    }

    /// Process one frame of hands
    pub fn process(&mut self, hands: &[HandLandmarks]) -> FrameOutput {
        let result = self.classifier.classify(hands);
        self.process_result(result)
    }

    /// Feed an already classified result through the stabilizer
    pub fn process_result(&mut self, result: GestureResult) -> FrameOutput {
        self.frame_count += 1;
        self.last_result = result;

        let reason = if self.active {
            let decision = self.stabilizer.decide(&result, &self.display);
            self.stabilizer.apply(&decision, &mut self.display);
            if decision.is_accepted() {
                self.accepted_count += 1;
            }
            decision.reason
        } else {
            ReasonCode::G006_SESSION_STOPPED
        };
        self.last_reason = reason;

        FrameOutput::new(self.frame_count, result, reason, &self.display)
    }

    /// Output for the last frame without processing a new one
    pub fn current_output(&self) -> FrameOutput {
        FrameOutput::new(self.frame_count, self.last_result, self.last_reason, &self.display)
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn last_result(&self) -> GestureResult {
        self.last_result
    }

    pub fn rule_set(&self) -> RuleSet {
        self.classifier.rule_set()
    }

    pub fn config(&self) -> StabilizerConfig {
        self.stabilizer.config()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn accepted_count(&self) -> u64 {
        self.accepted_count
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

// =============================================================================
// TESTS
// =============================================================================

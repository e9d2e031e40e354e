//! Per-finger pose predicates and the feature set the rules read

use serde::{Deserialize, Serialize};

/// Derived pose of one finger.
///
/// `extended` and `curled` are independent predicates: a half-bent finger
/// can be neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerState {
    pub extended: bool,
    pub curled: bool,
}

impl FingerState {
    pub fn new(extended: bool, curled: bool) -> Self {
        Self { extended, curled }
    }

    /// Short tag for verbose output
    pub fn tag(&self) -> &'static str {
        match (self.extended, self.curled) {
            (true, _) => "up",
            (false, true) => "curled",
            (false, false) => "bent",
        }
    }
}

/// Everything the rule cascade needs from one hand
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HandFeatures {
    pub thumb: FingerState,
    pub index: FingerState,
    pub middle: FingerState,
    pub ring: FingerState,
    pub pinky: FingerState,
    /// Fingers (thumb included) whose extended predicate holds
    pub fingers_up: u8,
    /// 2-D distance thumb tip ↔ index tip
    pub thumb_index_distance: f32,
    /// 2-D distance thumb tip ↔ middle tip
    pub thumb_middle_distance: f32,
    /// |index tip y - index knuckle y|, small when pointing sideways
    pub index_rise: f32,
    /// |thumb tip x - index tip x|
    pub thumb_index_spread: f32,
    /// |index tip x - middle tip x|
    pub index_middle_spread: f32,
    /// Thumb tip lower on screen than the index tip
    pub thumb_below_index: bool,
    /// Index tip higher on screen than the middle tip
    pub index_above_middle: bool,
    /// Thumb tip lower on screen than the wrist
    pub thumb_below_wrist: bool,
}

impl HandFeatures {
    /// All four non-thumb fingers curled
    pub fn four_curled(&self) -> bool {
        self.index.curled && self.middle.curled && self.ring.curled && self.pinky.curled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(FingerState::new(true, false).tag(), "up");
        assert_eq!(FingerState::new(false, true).tag(), "curled");
        assert_eq!(FingerState::new(false, false).tag(), "bent");
    }

    #[test]
    fn test_four_curled_ignores_thumb() {
        let curled = FingerState::new(false, true);
        let features = HandFeatures {
            thumb: FingerState::new(true, false),
            index: curled,
            middle: curled,
            ring: curled,
            pinky: curled,
            ..Default::default()
        };
        assert!(features.four_curled());
        assert!(!HandFeatures { pinky: FingerState::default(), ..features }.four_curled());
    }
}

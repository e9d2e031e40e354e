//! Gesture classifier: first hand of a frame → (label, confidence)
//!
//! Stateless. Derives `HandFeatures` from the landmarks and walks the rule
//! table of the configured `RuleSet`, returning the first row that matches.

use tracing::debug;
use crate::UNKNOWN_CONFIDENCE;
use crate::types::{
    FrameInput, GestureLabel, GestureResult, HandFeatures, HandLandmarks, LandmarkError, Point,
    RuleSet,
};

/// Rule-cascade classifier for one rule set
#[derive(Debug, Default, Clone, Copy)]
pub struct GestureClassifier {
    rule_set: RuleSet,
}

impl GestureClassifier {
    /// Create new classifier
    pub fn new(rule_set: RuleSet) -> Self {
        Self { rule_set }
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    /// Classify a frame. Only the first hand is read; no hands is the
    /// `{"", 0}` sentinel.
    pub fn classify(&self, hands: &[HandLandmarks]) -> GestureResult {
        match hands.first() {
            Some(hand) => self.classify_hand(hand),
            None => GestureResult::no_hand(),
        }
    }

    /// Classify one hand
    pub fn classify_hand(&self, hand: &HandLandmarks) -> GestureResult {
        let features = HandFeatures::from_landmarks(hand);
        let result = self.classify_features(&features);
        debug!(
            label = result.label.as_str(),
            confidence = result.confidence,
            fingers_up = features.fingers_up,
            "classified hand"
        );
        result
    }

    /// Run the cascade over precomputed features
    pub fn classify_features(&self, features: &HandFeatures) -> GestureResult {
        self.rule_set
            .rules()
            .find(|rule| (rule.matches)(features))
            .map(|rule| GestureResult::new(rule.label, rule.confidence))
            .unwrap_or_else(|| GestureResult::new(GestureLabel::Unknown, UNKNOWN_CONFIDENCE))
    }

    /// Validate raw tracker points, then classify. Every hand is checked,
    /// not just the one that gets classified.
    pub fn classify_points(&self, hands: &[Vec<Point>]) -> Result<GestureResult, LandmarkError> {
        let hands = hands
            .iter()
            .enumerate()
            .map(|(i, points)| HandLandmarks::from_points(i, points))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.classify(&hands))
    }

    /// Validate and classify a deserialized frame
    pub fn classify_frame(&self, frame: FrameInput) -> Result<GestureResult, LandmarkError> {
        let hands = frame.into_hands()?;
        Ok(self.classify(&hands))
    }

    /// Quick classify - just return the label
    pub fn quick_classify(&self, hands: &[HandLandmarks]) -> GestureLabel {
        self.classify(hands).label
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LANDMARK_COUNT;
    use crate::types::INDEX_TIP;

    /// Upright right hand: every finger straight up, thumb out to the right
    fn open_hand() -> HandLandmarks {
        let mut points = [Point::default(); LANDMARK_COUNT];
        points[0] = Point::new(0.5, 0.9, 0.0);
        // thumb: cmc, mcp, ip, tip
        points[1] = Point::new(0.35, 0.8, 0.0);
        points[2] = Point::new(0.30, 0.75, 0.0);
        points[3] = Point::new(0.27, 0.70, 0.0);
        points[4] = Point::new(0.30, 0.66, 0.0);
        for (finger, x) in [0.40_f32, 0.47, 0.54, 0.61].iter().enumerate() {
            let base = 5 + finger * 4;
            points[base] = Point::new(*x, 0.60, 0.0);
            points[base + 1] = Point::new(*x, 0.50, 0.0);
            points[base + 2] = Point::new(*x, 0.45, 0.0);
            points[base + 3] = Point::new(*x, 0.40, 0.0);
        }
        HandLandmarks::new(points)
    }

    #[test]
    fn test_empty_frame_is_silent() {
        let classifier = GestureClassifier::new(RuleSet::Alphabet);
        let result = classifier.classify(&[]);
        assert_eq!(result.label, GestureLabel::NoHand);
        assert_eq!(result.label.as_str(), "");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_open_hand_is_five() {
        let classifier = GestureClassifier::new(RuleSet::Alphabet);
        let result = classifier.classify(&[open_hand()]);
        assert_eq!(result, GestureResult::new(GestureLabel::Five, 0.9));
    }

    #[test]
    fn test_only_first_hand_counts() {
        let classifier = GestureClassifier::new(RuleSet::Alphabet);
        let mut curled = open_hand();
        curled.points_mut()[INDEX_TIP] = Point::new(0.40, 0.55, 0.0);
        let first = classifier.classify(&[open_hand(), curled]);
        assert_eq!(first.label, GestureLabel::Five);
    }

    #[test]
    fn test_no_match_is_unknown() {
        let classifier = GestureClassifier::new(RuleSet::Numbers);
        // thumb, index, middle, ring up; pinky curled: four needs the thumb down
        let mut hand = open_hand();
        hand.points_mut()[20] = Point::new(0.61, 0.55, 0.0);
        let result = classifier.classify(&[hand]);
        assert_eq!(result, GestureResult::new(GestureLabel::Unknown, UNKNOWN_CONFIDENCE));
    }

    #[test]
    fn test_classify_points_rejects_short_hand() {
        let classifier = GestureClassifier::default();
        let hands = vec![vec![Point::default(); 20]];
        let err = classifier.classify_points(&hands).unwrap_err();
        assert_eq!(
            err,
            LandmarkError::WrongPointCount { hand: 0, expected: 21, actual: 20 }
        );
    }

    #[test]
    fn test_classify_points_checks_every_hand() {
        let classifier = GestureClassifier::default();
        let good = open_hand().points().to_vec();
        let hands = vec![good, vec![Point::default(); 22]];
        let err = classifier.classify_points(&hands).unwrap_err();
        assert!(matches!(err, LandmarkError::WrongPointCount { hand: 1, .. }));
    }

    #[test]
    fn test_classify_points_rejects_nan() {
        let classifier = GestureClassifier::default();
        let mut points = open_hand().points().to_vec();
        points[7].y = f32::NAN;
        let err = classifier.classify_points(&[points]).unwrap_err();
        assert_eq!(err, LandmarkError::NonFiniteCoordinate { hand: 0, index: 7 });
    }

    #[test]
    fn test_classify_points_empty_is_no_hand() {
        let classifier = GestureClassifier::default();
        let result = classifier.classify_points(&[]).unwrap();
        assert!(result.is_no_hand());
    }

    #[test]
    fn test_determinism() {
        let classifier = GestureClassifier::default();
        let hand = open_hand();
        let a = classifier.classify(&[hand]);
        let b = classifier.classify(&[hand]);
        assert_eq!(a, b);
    }
}

//! Gesture rule table: ordered (predicate, label, confidence) rows
//!
//! First match wins. Several letters share a finger pattern and differ only
//! in a distance test, so row order is part of the behaviour:
//! - A masks C and O (same pattern, A has no extra condition)
//! - E masks fist whenever all four fingers are curled
//! - B masks four in the alphabet set
//! - Y masks rock on when index, middle and ring are curled

use crate::{
    TOUCH_DISTANCE, CIRCLE_DISTANCE, SIDEWAYS_TOLERANCE, FINGER_SPREAD, L_SPREAD,
};
use crate::types::{GestureLabel, HandFeatures, RuleSet};

/// One row of the cascade
#[derive(Clone, Copy)]
pub struct Rule {
    pub label: GestureLabel,
    pub confidence: f32,
    pub matches: fn(&HandFeatures) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("label", &self.label)
            .field("confidence", &self.confidence)
            .finish()
    }
}

// =============================================================================
// LETTER RULES (evaluated first, in this order)
// =============================================================================

pub static LETTER_RULES: [Rule; 14] = [
    Rule { label: GestureLabel::A, confidence: 0.92, matches: letter_a },
    Rule { label: GestureLabel::B, confidence: 0.90, matches: letter_b },
    Rule { label: GestureLabel::C, confidence: 0.85, matches: letter_c },
    Rule { label: GestureLabel::D, confidence: 0.88, matches: letter_d },
    Rule { label: GestureLabel::E, confidence: 0.90, matches: letter_e },
    Rule { label: GestureLabel::F, confidence: 0.87, matches: letter_f },
    Rule { label: GestureLabel::G, confidence: 0.85, matches: letter_g },
    Rule { label: GestureLabel::I, confidence: 0.92, matches: letter_i },
    Rule { label: GestureLabel::L, confidence: 0.90, matches: letter_l },
    Rule { label: GestureLabel::O, confidence: 0.85, matches: letter_o },
    Rule { label: GestureLabel::U, confidence: 0.88, matches: letter_u },
    Rule { label: GestureLabel::V, confidence: 0.90, matches: letter_v },
    Rule { label: GestureLabel::W, confidence: 0.88, matches: letter_w },
    Rule { label: GestureLabel::Y, confidence: 0.90, matches: letter_y },
];

// =============================================================================
// COUNTING AND IDIOM RULES (fallback)
// =============================================================================

pub static COUNT_RULES: [Rule; 8] = [
    Rule { label: GestureLabel::Fist, confidence: 0.9, matches: count_fist },
    Rule { label: GestureLabel::One, confidence: 0.9, matches: count_one },
    Rule { label: GestureLabel::Two, confidence: 0.9, matches: count_two },
    Rule { label: GestureLabel::Three, confidence: 0.9, matches: count_three },
    Rule { label: GestureLabel::Four, confidence: 0.9, matches: count_four },
    Rule { label: GestureLabel::Five, confidence: 0.9, matches: count_five },
    Rule { label: GestureLabel::ThumbsUp, confidence: 0.8, matches: idiom_thumbs_up },
    Rule { label: GestureLabel::RockOn, confidence: 0.8, matches: idiom_rock_on },
];

impl RuleSet {
    /// Rows in evaluation order
    pub fn rules(&self) -> impl Iterator<Item = &'static Rule> {
        let letters: &'static [Rule] = match self {
            RuleSet::Alphabet => &LETTER_RULES,
            RuleSet::Numbers => &[],
        };
        letters.iter().chain(COUNT_RULES.iter())
    }

    /// Row for a label, if this rule set has one
    pub fn rule_for(&self, label: GestureLabel) -> Option<&'static Rule> {
        self.rules().find(|rule| rule.label == label)
    }
}

/// Every label a rule set can emit besides no-hand/unknown, in cascade order
pub fn supported_gestures(rule_set: RuleSet) -> Vec<(GestureLabel, f32)> {
    rule_set.rules().map(|rule| (rule.label, rule.confidence)).collect()
}

// -----------------------------------------------------------------------------
// Letter predicates
// -----------------------------------------------------------------------------

/// Closed fist, thumb alongside
fn letter_a(f: &HandFeatures) -> bool {
    f.four_curled() && f.thumb.extended
}

/// Four fingers up, thumb across the palm
fn letter_b(f: &HandFeatures) -> bool {
    f.index.extended && f.middle.extended && f.ring.extended && f.pinky.extended && f.thumb.curled
}

/// Curved hand
fn letter_c(f: &HandFeatures) -> bool {
    f.thumb.extended && f.four_curled() && f.thumb_below_index && f.index_above_middle
}

/// Index up, thumb touching the middle finger
fn letter_d(f: &HandFeatures) -> bool {
    index_only_with_thumb(f) && f.thumb_middle_distance < TOUCH_DISTANCE
}

fn letter_e(f: &HandFeatures) -> bool {
    f.four_curled() && f.thumb.curled
}

/// Ring and pinky up, thumb touching index
fn letter_f(f: &HandFeatures) -> bool {
    f.index.curled
        && f.middle.curled
        && f.ring.extended
        && f.pinky.extended
        && f.thumb.extended
        && f.thumb_index_distance < TOUCH_DISTANCE
}

/// Index pointing sideways
fn letter_g(f: &HandFeatures) -> bool {
    index_only_with_thumb(f) && f.index_rise < SIDEWAYS_TOLERANCE
}

fn letter_i(f: &HandFeatures) -> bool {
    f.index.curled && f.middle.curled && f.ring.curled && f.pinky.extended && f.thumb.curled
}

/// Index up, thumb spread out horizontally
fn letter_l(f: &HandFeatures) -> bool {
    index_only_with_thumb(f) && f.thumb_index_spread > L_SPREAD
}

/// Fingertips forming a circle
fn letter_o(f: &HandFeatures) -> bool {
    f.thumb.extended
        && f.four_curled()
        && f.thumb_index_distance < CIRCLE_DISTANCE
        && f.thumb_below_wrist
}

/// Index and middle up, together
fn letter_u(f: &HandFeatures) -> bool {
    index_middle_only(f) && f.index_middle_spread < FINGER_SPREAD
}

/// Index and middle up, apart
fn letter_v(f: &HandFeatures) -> bool {
    index_middle_only(f) && f.index_middle_spread > FINGER_SPREAD
}

fn letter_w(f: &HandFeatures) -> bool {
    f.index.extended && f.middle.extended && f.ring.extended && f.pinky.curled && f.thumb.curled
}

fn letter_y(f: &HandFeatures) -> bool {
    f.index.curled && f.middle.curled && f.ring.curled && f.pinky.extended && f.thumb.extended
}

/// Shared pattern of D, G and L
fn index_only_with_thumb(f: &HandFeatures) -> bool {
    f.index.extended && f.middle.curled && f.ring.curled && f.pinky.curled && f.thumb.extended
}

/// Shared pattern of U and V
fn index_middle_only(f: &HandFeatures) -> bool {
    f.index.extended && f.middle.extended && f.ring.curled && f.pinky.curled && f.thumb.curled
}

// -----------------------------------------------------------------------------
// Counting / idiom predicates
// -----------------------------------------------------------------------------

fn count_fist(f: &HandFeatures) -> bool {
    f.fingers_up == 0
}

fn count_one(f: &HandFeatures) -> bool {
    f.fingers_up == 1 && f.index.extended
}

fn count_two(f: &HandFeatures) -> bool {
    f.fingers_up == 2 && f.index.extended && f.middle.extended
}

fn count_three(f: &HandFeatures) -> bool {
    f.fingers_up == 3 && f.index.extended && f.middle.extended && f.ring.extended
}

fn count_four(f: &HandFeatures) -> bool {
    f.fingers_up == 4 && !f.thumb.extended
}

fn count_five(f: &HandFeatures) -> bool {
    f.fingers_up == 5
}

fn idiom_thumbs_up(f: &HandFeatures) -> bool {
    f.fingers_up == 1 && f.thumb.extended && !f.index.extended
}

fn idiom_rock_on(f: &HandFeatures) -> bool {
    f.fingers_up == 2
        && f.thumb.extended
        && f.pinky.extended
        && !f.index.extended
        && !f.middle.extended
        && !f.ring.extended
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FingerState;

    const UP: FingerState = FingerState { extended: true, curled: false };
    const DOWN: FingerState = FingerState { extended: false, curled: true };
    const BENT: FingerState = FingerState { extended: false, curled: false };

    fn features(fingers: [FingerState; 5]) -> HandFeatures {
        HandFeatures {
            thumb: fingers[0],
            index: fingers[1],
            middle: fingers[2],
            ring: fingers[3],
            pinky: fingers[4],
            fingers_up: fingers.iter().filter(|f| f.extended).count() as u8,
            thumb_index_distance: 0.3,
            thumb_middle_distance: 0.3,
            index_rise: 0.2,
            thumb_index_spread: 0.0,
            index_middle_spread: 0.07,
            ..Default::default()
        }
    }

    fn first_match(rule_set: RuleSet, f: &HandFeatures) -> Option<GestureLabel> {
        rule_set.rules().find(|rule| (rule.matches)(f)).map(|rule| rule.label)
    }

    #[test]
    fn test_letter_order_is_fixed() {
        let order: String = LETTER_RULES.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(order, "ABCDEFGILOUVWY");
    }

    #[test]
    fn test_count_order_is_fixed() {
        let order: Vec<&str> = COUNT_RULES.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            order,
            vec!["fist", "one", "two", "three", "four", "five", "thumbs up", "rock on"]
        );
    }

    #[test]
    fn test_confidences_within_documented_range() {
        for rule in RuleSet::Alphabet.rules() {
            assert!(
                (0.5..=0.92).contains(&rule.confidence),
                "{} has confidence {}",
                rule.label,
                rule.confidence
            );
        }
    }

    #[test]
    fn test_numbers_set_has_no_letters() {
        assert_eq!(RuleSet::Numbers.rules().count(), 8);
        assert!(RuleSet::Numbers.rules().all(|r| !r.label.is_letter()));
        assert_eq!(RuleSet::Alphabet.rules().count(), 22);
    }

    #[test]
    fn test_a_masks_c_and_o() {
        let mut f = features([UP, DOWN, DOWN, DOWN, DOWN]);
        f.thumb_below_index = true;
        f.index_above_middle = true;
        f.thumb_index_distance = 0.01;
        f.thumb_below_wrist = true;
        assert!(letter_c(&f));
        assert!(letter_o(&f));
        assert_eq!(first_match(RuleSet::Alphabet, &f), Some(GestureLabel::A));
    }

    #[test]
    fn test_e_masks_fist_when_all_curled() {
        let f = features([DOWN, DOWN, DOWN, DOWN, DOWN]);
        assert!(count_fist(&f));
        assert_eq!(first_match(RuleSet::Alphabet, &f), Some(GestureLabel::E));
        assert_eq!(first_match(RuleSet::Numbers, &f), Some(GestureLabel::Fist));
    }

    #[test]
    fn test_fist_reached_with_bent_fingers() {
        let f = features([DOWN, BENT, BENT, BENT, BENT]);
        assert_eq!(first_match(RuleSet::Alphabet, &f), Some(GestureLabel::Fist));
    }

    #[test]
    fn test_b_masks_four() {
        let f = features([DOWN, UP, UP, UP, UP]);
        assert!(count_four(&f));
        assert_eq!(first_match(RuleSet::Alphabet, &f), Some(GestureLabel::B));
        assert_eq!(first_match(RuleSet::Numbers, &f), Some(GestureLabel::Four));
    }

    #[test]
    fn test_u_v_split_on_spread() {
        let mut f = features([DOWN, UP, UP, DOWN, DOWN]);
        f.index_middle_spread = 0.01;
        assert_eq!(first_match(RuleSet::Alphabet, &f), Some(GestureLabel::U));
        f.index_middle_spread = 0.09;
        assert_eq!(first_match(RuleSet::Alphabet, &f), Some(GestureLabel::V));
    }

    #[test]
    fn test_spread_exactly_at_limit_falls_through_to_two() {
        let mut f = features([DOWN, UP, UP, DOWN, DOWN]);
        f.index_middle_spread = FINGER_SPREAD;
        assert_eq!(first_match(RuleSet::Alphabet, &f), Some(GestureLabel::Two));
    }

    #[test]
    fn test_d_before_g_before_l() {
        let mut f = features([UP, UP, DOWN, DOWN, DOWN]);
        f.thumb_middle_distance = 0.01;
        f.index_rise = 0.01;
        f.thumb_index_spread = 0.2;
        assert_eq!(first_match(RuleSet::Alphabet, &f), Some(GestureLabel::D));

        f.thumb_middle_distance = 0.3;
        assert_eq!(first_match(RuleSet::Alphabet, &f), Some(GestureLabel::G));

        f.index_rise = 0.2;
        assert_eq!(first_match(RuleSet::Alphabet, &f), Some(GestureLabel::L));

        f.thumb_index_spread = 0.05;
        assert_eq!(first_match(RuleSet::Alphabet, &f), None);
    }

    #[test]
    fn test_y_masks_rock_on() {
        let f = features([UP, DOWN, DOWN, DOWN, UP]);
        assert!(idiom_rock_on(&f));
        assert_eq!(first_match(RuleSet::Alphabet, &f), Some(GestureLabel::Y));
        assert_eq!(first_match(RuleSet::Numbers, &f), Some(GestureLabel::RockOn));
    }

    #[test]
    fn test_thumbs_up_needs_index_down() {
        let f = features([UP, BENT, BENT, BENT, BENT]);
        assert_eq!(first_match(RuleSet::Alphabet, &f), Some(GestureLabel::ThumbsUp));
    }

    #[test]
    fn test_rule_for_lookup() {
        let rule = RuleSet::Alphabet.rule_for(GestureLabel::I).unwrap();
        assert_eq!(rule.confidence, 0.92);
        assert!(RuleSet::Numbers.rule_for(GestureLabel::I).is_none());
    }
}

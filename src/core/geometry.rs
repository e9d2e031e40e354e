//! Landmark geometry: finger predicates and distances
//!
//! Extension is read along the screen y axis, so the predicates assume a
//! roughly upright hand facing the camera. The thumb is read along x, which
//! ties the result to one handedness/mirroring convention.

use crate::types::*;

/// Finger points straight up: tip above pip above mcp
pub fn is_extended(tip: Point, pip: Point, mcp: Point) -> bool {
    tip.y < pip.y && pip.y < mcp.y
}

/// Tip folded below the middle joint. Not the negation of `is_extended`.
pub fn is_curled(tip: Point, pip: Point, _mcp: Point) -> bool {
    tip.y > pip.y
}

/// Thumb extends sideways, away from the palm
pub fn thumb_extended(tip: Point, ip: Point) -> bool {
    tip.x > ip.x
}

/// Distance in the image plane (z ignored)
pub fn distance_2d(a: Point, b: Point) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Pose of a non-thumb finger from its (mcp, pip, tip) landmark indices
pub fn finger_state(hand: &HandLandmarks, mcp: usize, pip: usize, tip: usize) -> FingerState {
    let (mcp, pip, tip) = (hand.point(mcp), hand.point(pip), hand.point(tip));
    FingerState::new(is_extended(tip, pip, mcp), is_curled(tip, pip, mcp))
}

/// Thumb pose. Curled is simply "not extended" for the thumb.
pub fn thumb_state(hand: &HandLandmarks) -> FingerState {
    let extended = thumb_extended(hand.point(THUMB_TIP), hand.point(THUMB_IP));
    FingerState::new(extended, !extended)
}

/// Number of fingers, thumb included, whose extended predicate holds
pub fn fingers_up(fingers: &[FingerState]) -> u8 {
    fingers.iter().filter(|f| f.extended).count() as u8
}

impl HandFeatures {
    /// Derive the full feature set for one hand
    pub fn from_landmarks(hand: &HandLandmarks) -> Self {
        let thumb = thumb_state(hand);
        let index = finger_state(hand, INDEX_MCP, INDEX_PIP, INDEX_TIP);
        let middle = finger_state(hand, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP);
        let ring = finger_state(hand, RING_MCP, RING_PIP, RING_TIP);
        let pinky = finger_state(hand, PINKY_MCP, PINKY_PIP, PINKY_TIP);

        let thumb_tip = hand.point(THUMB_TIP);
        let index_tip = hand.point(INDEX_TIP);
        let middle_tip = hand.point(MIDDLE_TIP);

        Self {
            thumb,
            index,
            middle,
            ring,
            pinky,
            fingers_up: fingers_up(&[thumb, index, middle, ring, pinky]),
            thumb_index_distance: distance_2d(thumb_tip, index_tip),
            thumb_middle_distance: distance_2d(thumb_tip, middle_tip),
            index_rise: (index_tip.y - hand.point(INDEX_MCP).y).abs(),
            thumb_index_spread: (thumb_tip.x - index_tip.x).abs(),
            index_middle_spread: (index_tip.x - middle_tip.x).abs(),
            thumb_below_index: thumb_tip.y > index_tip.y,
            index_above_middle: index_tip.y < middle_tip.y,
            thumb_below_wrist: thumb_tip.y > hand.wrist().y,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

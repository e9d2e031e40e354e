//! Hand landmark definitions
//!
//! Index scheme follows the hand tracker: 0 = wrist, then thumb, index,
//! middle, ring, pinky with 4 points each ordered base → tip.

use serde::{Deserialize, Serialize};
use crate::LANDMARK_COUNT;
use crate::types::LandmarkError;

// =============================================================================
// INDICES
// =============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// One keypoint in normalized image space (x right, y down, z away from camera)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Point {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// The 21 landmarks of one detected hand.
///
/// Fixed-size by construction, so every per-index lookup in the rule
/// cascade is in bounds. Raw tracker output goes through [`HandLandmarks::from_points`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandLandmarks {
    points: [Point; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Point; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Validate raw points for hand number `hand` of a frame
    pub fn from_points(hand: usize, points: &[Point]) -> Result<Self, LandmarkError> {
        let points: [Point; LANDMARK_COUNT] = points.try_into().map_err(|_| {
            LandmarkError::WrongPointCount {
                hand,
                expected: LANDMARK_COUNT,
                actual: points.len(),
            }
        })?;

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(LandmarkError::NonFiniteCoordinate { hand, index });
        }

        Ok(Self { points })
    }

    /// Point at a landmark index (see the index constants in this module)
    pub fn point(&self, index: usize) -> Point {
        self.points[index]
    }

    pub fn wrist(&self) -> Point {
        self.points[WRIST]
    }

    pub fn points(&self) -> &[Point; LANDMARK_COUNT] {
        &self.points
    }

    pub fn points_mut(&mut self) -> &mut [Point; LANDMARK_COUNT] {
        &mut self.points
    }
}

/// One tracker frame as delivered over JSON: zero or more hands of raw points
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameInput {
    #[serde(default)]
    pub hands: Vec<Vec<Point>>,
}

impl FrameInput {
    /// Validate every hand in the frame, failing on the first malformed one
    pub fn into_hands(self) -> Result<Vec<HandLandmarks>, LandmarkError> {
        self.hands
            .iter()
            .enumerate()
            .map(|(i, points)| HandLandmarks::from_points(i, points))
            .collect()
    }
}

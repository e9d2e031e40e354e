//! Synthetic hand fixtures for integration tests
//!
//! Upright right hand, wrist at the bottom. Each finger is placed in one of
//! three poses so the extended/curled predicates are unambiguous.

#![allow(dead_code)]

use gesturetext::types::{HandLandmarks, Point, FrameInput, THUMB_IP, THUMB_TIP, WRIST};
use gesturetext::LANDMARK_COUNT;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pose {
    /// tip above pip above mcp: extended
    Up,
    /// tip below pip: curled
    Curled,
    /// tip level with pip: neither extended nor curled
    Bent,
}

pub const INDEX: usize = 0;
pub const MIDDLE: usize = 1;
pub const RING: usize = 2;
pub const PINKY: usize = 3;

const FINGER_X: [f32; 4] = [0.40, 0.47, 0.54, 0.61];

#[derive(Debug, Clone)]
pub struct HandBuilder {
    points: [Point; LANDMARK_COUNT],
}

impl HandBuilder {
    /// Open hand: all fingers up, thumb out
    pub fn new() -> Self {
        let mut builder = Self {
            points: [Point::default(); LANDMARK_COUNT],
        };
        builder.points[WRIST] = Point::new(0.50, 0.90, 0.0);
        builder.points[1] = Point::new(0.35, 0.80, 0.0);
        builder.points[2] = Point::new(0.30, 0.75, 0.0);
        builder.points[THUMB_IP] = Point::new(0.27, 0.70, 0.0);
        builder = builder.thumb_out(true);
        for finger in 0..4 {
            builder = builder.finger(finger, Pose::Up);
        }
        builder
    }

    /// All fingers in one pose
    pub fn fingers(mut self, pose: Pose) -> Self {
        for finger in 0..4 {
            self = self.finger(finger, pose);
        }
        self
    }

    pub fn finger(mut self, finger: usize, pose: Pose) -> Self {
        let x = FINGER_X[finger];
        let (dip_y, tip_y) = match pose {
            Pose::Up => (0.45, 0.40),
            Pose::Curled => (0.53, 0.55),
            Pose::Bent => (0.47, 0.50),
        };
        let base = 5 + finger * 4;
        self.points[base] = Point::new(x, 0.60, 0.0);
        self.points[base + 1] = Point::new(x, 0.50, 0.0);
        self.points[base + 2] = Point::new(x, dip_y, 0.0);
        self.points[base + 3] = Point::new(x, tip_y, 0.0);
        self
    }

    /// Shift a whole finger horizontally
    pub fn finger_x(mut self, finger: usize, x: f32) -> Self {
        let base = 5 + finger * 4;
        for i in base..base + 4 {
            self.points[i].x = x;
        }
        self
    }

    /// Thumb out to the side (extended) or across the palm (curled)
    pub fn thumb_out(mut self, out: bool) -> Self {
        let x = if out { 0.29 } else { 0.24 };
        self.points[THUMB_TIP] = Point::new(x, 0.66, 0.0);
        self
    }

    pub fn point(mut self, index: usize, x: f32, y: f32) -> Self {
        self.points[index] = Point::new(x, y, 0.0);
        self
    }

    pub fn build(&self) -> HandLandmarks {
        HandLandmarks::new(self.points)
    }

    pub fn raw(&self) -> Vec<Point> {
        self.points.to_vec()
    }

    pub fn frame(&self) -> FrameInput {
        FrameInput { hands: vec![self.raw()] }
    }
}

/// Frame JSON body for API tests
pub fn frame_json(hands: &[HandBuilder]) -> String {
    let frame = FrameInput {
        hands: hands.iter().map(HandBuilder::raw).collect(),
    };
    serde_json::to_string(&frame).unwrap()
}

//! GestureText: hand landmarks in, stable display words out
//!
//! Frame path: landmarks → geometry features → rule cascade → stabilizer → display state

pub mod core;
pub mod types;

// =============================================================================
// LANDMARK LAYOUT
// =============================================================================

/// Points per tracked hand (0 = wrist, then 4 per finger, base → tip)
pub const LANDMARK_COUNT: usize = 21;

// =============================================================================
// STABILIZER [C] - Mode presets
// =============================================================================

/// Full alphabet mode: minimum confidence (strictly greater) to accept a word
pub const ALPHABET_CONFIDENCE_THRESHOLD: f32 = 0.82;

/// Full alphabet mode: words kept in history
pub const ALPHABET_HISTORY_CAPACITY: usize = 10;

/// Number-only mode: minimum confidence (strictly greater) to accept a word
pub const NUMBERS_CONFIDENCE_THRESHOLD: f32 = 0.7;

/// Number-only mode: words kept in history
pub const NUMBERS_HISTORY_CAPACITY: usize = 5;

// =============================================================================
// GEOMETRY TOLERANCES [C] - Normalized image units
// =============================================================================

/// Two fingertips closer than this are touching (D, F)
pub const TOUCH_DISTANCE: f32 = 0.05;

/// Thumb-index tip distance that still closes a circle (O)
pub const CIRCLE_DISTANCE: f32 = 0.08;

/// Max index tip/knuckle height difference for a sideways point (G)
pub const SIDEWAYS_TOLERANCE: f32 = 0.05;

/// Index/middle tip separation splitting U (together) from V (apart)
pub const FINGER_SPREAD: f32 = 0.05;

/// Min horizontal thumb/index tip separation for the L shape
pub const L_SPREAD: f32 = 0.1;

/// Confidence reported when a hand is present but no rule matched
pub const UNKNOWN_CONFIDENCE: f32 = 0.5;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";

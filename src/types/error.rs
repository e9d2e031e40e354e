//! Error types for input validation and configuration

use thiserror::Error;

/// Malformed landmark input, rejected before classification
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LandmarkError {
    #[error("hand {hand}: expected {expected} landmarks, got {actual}")]
    WrongPointCount {
        hand: usize,
        expected: usize,
        actual: usize,
    },

    #[error("hand {hand}: landmark {index} has a non-finite coordinate")]
    NonFiniteCoordinate { hand: usize, index: usize },
}

/// Invalid stabilizer or rule set configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("confidence threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f32),

    #[error("history capacity must be at least 1")]
    ZeroCapacity,

    #[error("unknown rule set '{0}' (expected 'alphabet' or 'numbers')")]
    UnknownRuleSet(String),
}

//! Display state and stabilizer configuration

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use crate::{
    ALPHABET_CONFIDENCE_THRESHOLD, ALPHABET_HISTORY_CAPACITY,
    NUMBERS_CONFIDENCE_THRESHOLD, NUMBERS_HISTORY_CAPACITY,
};
use crate::types::{ConfigError, RuleSet};

/// What the presentation layer shows: the current word and recent words
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Last accepted word, empty before the first acceptance
    pub current_word: String,
    /// Accepted words, most recent first
    pub history: VecDeque<String>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.current_word.is_empty() && self.history.is_empty()
    }

    /// Most recently accepted word
    pub fn latest(&self) -> Option<&str> {
        self.history.front().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.current_word.clear();
        self.history.clear();
    }
}

/// Acceptance policy of the stabilizer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilizerConfig {
    /// A result is accepted only when its confidence is strictly above this
    pub threshold: f32,
    /// History length bound
    pub capacity: usize,
}

impl StabilizerConfig {
    /// Validated configuration
    pub fn new(threshold: f32, capacity: usize) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self { threshold, capacity })
    }

    /// Preset for each capability level
    pub fn for_rule_set(rule_set: RuleSet) -> Self {
        match rule_set {
            RuleSet::Alphabet => Self {
                threshold: ALPHABET_CONFIDENCE_THRESHOLD,
                capacity: ALPHABET_HISTORY_CAPACITY,
            },
            RuleSet::Numbers => Self {
                threshold: NUMBERS_CONFIDENCE_THRESHOLD,
                capacity: NUMBERS_HISTORY_CAPACITY,
            },
        }
    }

    /// Preset for `rule_set` with optional overrides, validated
    pub fn with_overrides(
        rule_set: RuleSet,
        threshold: Option<f32>,
        capacity: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let preset = Self::for_rule_set(rule_set);
        Self::new(
            threshold.unwrap_or(preset.threshold),
            capacity.unwrap_or(preset.capacity),
        )
    }
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self::for_rule_set(RuleSet::default())
    }
}

//! Gesture labels, classification results and rule set selection

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::types::ConfigError;

/// Closed vocabulary of classifier output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureLabel {
    /// No hand in the frame
    #[serde(rename = "")]
    NoHand,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    I,
    L,
    O,
    U,
    V,
    W,
    Y,
    #[serde(rename = "fist")]
    Fist,
    #[serde(rename = "one")]
    One,
    #[serde(rename = "two")]
    Two,
    #[serde(rename = "three")]
    Three,
    #[serde(rename = "four")]
    Four,
    #[serde(rename = "five")]
    Five,
    #[serde(rename = "thumbs up")]
    ThumbsUp,
    #[serde(rename = "rock on")]
    RockOn,
    /// Hand present, no rule matched
    #[serde(rename = "unknown")]
    Unknown,
}

impl GestureLabel {
    /// Label text as the tracker UI shows it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoHand => "",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::I => "I",
            Self::L => "L",
            Self::O => "O",
            Self::U => "U",
            Self::V => "V",
            Self::W => "W",
            Self::Y => "Y",
            Self::Fist => "fist",
            Self::One => "one",
            Self::Two => "two",
            Self::Three => "three",
            Self::Four => "four",
            Self::Five => "five",
            Self::ThumbsUp => "thumbs up",
            Self::RockOn => "rock on",
            Self::Unknown => "unknown",
        }
    }

    /// Word shown to the user once this label is accepted.
    /// `None` for labels the display never shows.
    pub fn display_word(&self) -> Option<&'static str> {
        match self {
            Self::NoHand | Self::Unknown => None,
            Self::Fist => Some("STOP"),
            Self::One => Some("ONE"),
            Self::Two => Some("TWO"),
            Self::Three => Some("THREE"),
            Self::Four => Some("FOUR"),
            Self::Five => Some("FIVE"),
            Self::ThumbsUp => Some("GOOD"),
            Self::RockOn => Some("COOL"),
            letter => Some(letter.as_str()),
        }
    }

    /// Big symbol rendered above the current word
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::NoHand => "",
            Self::Fist => "✊",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::ThumbsUp => "👍",
            Self::RockOn => "🤘",
            Self::Unknown => "?",
            letter => letter.as_str(),
        }
    }

    pub fn is_letter(&self) -> bool {
        matches!(
            self,
            Self::A | Self::B | Self::C | Self::D | Self::E | Self::F | Self::G
                | Self::I | Self::L | Self::O | Self::U | Self::V | Self::W | Self::Y
        )
    }
}

impl std::fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-frame classifier output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureResult {
    pub label: GestureLabel,
    /// Fixed per-rule prior, not a measured probability
    pub confidence: f32,
}

impl GestureResult {
    pub fn new(label: GestureLabel, confidence: f32) -> Self {
        Self { label, confidence }
    }

    /// Sentinel for a frame without hands
    pub fn no_hand() -> Self {
        Self::new(GestureLabel::NoHand, 0.0)
    }

    pub fn is_no_hand(&self) -> bool {
        self.label == GestureLabel::NoHand
    }

    /// Confidence as a whole percentage
    pub fn percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

impl Default for GestureResult {
    fn default() -> Self {
        Self::no_hand()
    }
}

/// Which rules the classifier evaluates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSet {
    /// Letter rules first, then counting and idiom rules
    #[default]
    Alphabet,
    /// Counting and idiom rules only
    Numbers,
}

impl RuleSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleSet::Alphabet => "alphabet",
            RuleSet::Numbers => "numbers",
        }
    }
}

impl FromStr for RuleSet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "alphabet" | "asl" | "full" => Ok(RuleSet::Alphabet),
            "numbers" | "basic" => Ok(RuleSet::Numbers),
            other => Err(ConfigError::UnknownRuleSet(other.to_string())),
        }
    }
}

impl std::fmt::Display for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Output structures for terminal display

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use crate::types::{DisplayState, GestureLabel, GestureResult, ReasonCode};

/// Output structure for each processed frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameOutput {
    /// Timestamp
    pub timestamp: DateTime<Utc>,
    /// Frame number within the session (1-based)
    pub frame: u64,
    /// Classified label
    pub label: GestureLabel,
    /// Rule confidence
    pub confidence: f32,
    /// Glyph for the label
    pub glyph: String,
    /// Stabilizer decision
    pub reason: ReasonCode,
    /// Did this frame change the display?
    pub accepted: bool,
    /// Word on display after this frame
    pub current_word: String,
    /// History after this frame, most recent first
    pub history: Vec<String>,
}

impl FrameOutput {
    /// Create new output
    pub fn new(frame: u64, result: GestureResult, reason: ReasonCode, display: &DisplayState) -> Self {
        Self {
            timestamp: Utc::now(),
            frame,
            label: result.label,
            confidence: result.confidence,
            glyph: result.label.glyph().to_string(),
            reason,
            accepted: reason.is_accepted(),
            current_word: display.current_word.clone(),
            history: display.history.iter().cloned().collect(),
        }
    }

    pub fn result(&self) -> GestureResult {
        GestureResult::new(self.label, self.confidence)
    }

    fn label_text(&self) -> &'static str {
        if self.label == GestureLabel::NoHand {
            "no gesture"
        } else {
            self.label.as_str()
        }
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let badge = format!(
            "{} {} {}%",
            self.glyph,
            self.label_text(),
            self.result().percent()
        );
        let badge = match self.reason {
            ReasonCode::G005_ACCEPTED => badge.green().bold(),
            ReasonCode::G004_REPEATED_WORD => badge.green(),
            ReasonCode::G003_BELOW_THRESHOLD => badge.yellow(),
            ReasonCode::G002_UNMAPPED => badge.red(),
            ReasonCode::G001_NO_HAND | ReasonCode::G006_SESSION_STOPPED => badge.dimmed(),
        };

        let word = if self.current_word.is_empty() {
            "Show a gesture".dimmed()
        } else {
            self.current_word.as_str().cyan().bold()
        };

        format!(
            "{} | word={} | history=[{}] | {}",
            badge,
            word,
            self.history.join(" "),
            self.reason.code().dimmed()
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "frame={} | label={} | confidence={:.2} | word={} | history={} | reason={}",
            self.frame,
            self.label.as_str(),
            self.confidence,
            self.current_word,
            self.history.join(","),
            self.reason.code()
        )
    }
}

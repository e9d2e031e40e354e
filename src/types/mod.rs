//! Core types for GestureText

mod landmark;
mod finger;
mod gesture;
mod display;
mod reason;
mod output;
mod error;

pub use landmark::{Point, HandLandmarks, FrameInput};
pub use landmark::{
    WRIST, THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};
pub use finger::{FingerState, HandFeatures};
pub use gesture::{GestureLabel, GestureResult, RuleSet};
pub use display::{DisplayState, StabilizerConfig};
pub use reason::ReasonCode;
pub use output::FrameOutput;
pub use error::{LandmarkError, ConfigError};

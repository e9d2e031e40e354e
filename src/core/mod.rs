//! Core modules for GestureText

pub mod geometry;
pub mod rules;
pub mod classifier;
pub mod stabilizer;
pub mod session;
pub mod api;

pub use rules::{Rule, LETTER_RULES, COUNT_RULES, supported_gestures};
pub use classifier::GestureClassifier;
pub use stabilizer::{Stabilizer, StabilizerDecision};
pub use session::GestureSession;
pub use api::{create_router, run_server};

//! Scoring: per-round counters and the correct/pass/taboo rules.
//!
//! The functions here are pure. `TurnCoordinator` owns the state and
//! decides what to do with each result.

pub mod engine;
pub mod state;

pub use engine::{apply_correct, apply_pass, apply_taboo, Rejected, ScoreKind, Scored, STREAK_TRIGGER};
pub use state::RoundState;
pub use crate::core::ScoringConfig;

//! # taboo-engine
//!
//! Round and turn engine for a two-team taboo word-guessing game.
//!
//! Two teams share one device and alternate timed rounds. The describing
//! player works through a deck of word cards, each with a list of forbidden
//! words. Teammates' correct guesses score points, passes spend a budget,
//! and saying a forbidden word costs points.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven Time**: The engine never spawns timers. The host calls
//!    `tick()` once per second and the engine reacts.
//!
//! 2. **Single Owner**: `TurnCoordinator` owns all mutable match state.
//!    Scoring is a set of pure functions over `RoundState` snapshots.
//!
//! 3. **Results, Not Panics**: Budget exhaustion, deck exhaustion and bad
//!    configuration are returned as values. The host decides messaging.
//!
//! ## Modules
//!
//! - `core`: Team IDs, per-team storage, RNG, configuration, errors
//! - `cards`: Word cards, content filtering, the non-repeating deck
//! - `clock`: Round countdown timer and the 3-2-1-Go lead-in
//! - `scoring`: Per-round counters and the correct/pass/taboo rules
//! - `turn`: The match state machine and the events it emits
//! - `history`: The finished-match sink and a capped score history

pub mod core;
pub mod cards;
pub mod clock;
pub mod scoring;
pub mod turn;
pub mod history;

// Re-export commonly used types
pub use crate::core::{
    TeamId, TeamMap,
    DeckRng, DeckRngState,
    MatchConfig, MatchConfigBuilder,
    ConfigError, EngineError,
};

pub use crate::cards::{
    CardId, CardOrigin, Difficulty, Language, WordCard,
    DeckFilter, Draw, WordDeck,
};

pub use crate::clock::{ClockState, Countdown, CountdownStep, RoundClock};

pub use crate::scoring::{
    apply_correct, apply_pass, apply_taboo,
    Rejected, RoundState, Scored, ScoringConfig,
};

pub use crate::turn::{
    EngineEvent, EventSink,
    MatchOutcome, MatchState, MatchSummary, RoundEnd, RoundSummary, Team, TeamStats,
    ActionOutcome, Phase, TurnCoordinator,
};

pub use crate::history::{HistoryStats, ScoreHistory, SessionRecorder};

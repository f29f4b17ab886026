//! Error types.
//!
//! - `ConfigError`: rejected at Setup, before any round starts.
//! - `EngineError`: the host asked for something the current phase does
//!   not allow, or tried to continue past an exhausted deck.
//!
//! Budget rejections during play are not errors; see `scoring::Rejected`.

use thiserror::Error;

use super::config::{PENALTY_MAX, PENALTY_MIN};
use super::team::TeamId;

/// Invalid match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} has an empty name")]
    EmptyTeamName(TeamId),

    #[error("both teams are named {0:?}")]
    DuplicateTeamNames(String),

    #[error("round duration must be at least one second")]
    ZeroRoundDuration,

    #[error("a match needs at least one set")]
    ZeroSets,

    #[error("penalty points {0} outside allowed range {min}..={max}", min = PENALTY_MIN, max = PENALTY_MAX)]
    PenaltyOutOfRange(u32),

    #[error("no word cards match the selected filter")]
    EmptyDeck,
}

/// Engine misuse or a halted match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("cannot {action} while in phase {phase}")]
    WrongPhase {
        action: &'static str,
        phase: &'static str,
    },

    #[error("the round clock is paused")]
    Paused,

    #[error("the word deck is exhausted; supply more cards or return to setup")]
    DeckExhausted,

    #[error("the match is over; start a new match from setup")]
    MatchOver,

    #[error("score history could not be decoded: {0}")]
    History(String),
}

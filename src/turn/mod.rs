//! Turn coordination: the match state machine.
//!
//! ## Key Types
//!
//! - `TurnCoordinator`: owns all match state and drives rounds
//! - `Phase`: where the match is in its lifecycle
//! - `MatchState` / `RoundSummary` / `MatchSummary`: scores and history
//! - `EngineEvent` / `EventSink`: hooks for presentation and feedback

pub mod coordinator;
pub mod events;
pub mod match_state;

pub use coordinator::{ActionOutcome, Phase, TurnCoordinator};
pub use events::{EngineEvent, EventSink};
pub use match_state::{MatchOutcome, MatchState, MatchSummary, RoundEnd, RoundSummary, Team, TeamStats};

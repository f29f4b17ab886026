//! Core engine types: teams, RNG, configuration, errors.
//!
//! These are the building blocks every other module shares.

pub mod team;
pub mod rng;
pub mod config;
pub mod error;

pub use team::{TeamId, TeamMap};
pub use rng::{DeckRng, DeckRngState};
pub use config::{MatchConfig, MatchConfigBuilder, ScoringConfig, PENALTY_MAX, PENALTY_MIN};
pub use error::{ConfigError, EngineError};

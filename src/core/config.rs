//! Match configuration.
//!
//! Everything the host decides at Setup lives here:
//! - `MatchConfig`: team names, timing, budgets, set count, content filter
//! - `ScoringConfig`: point values and the combo/penalty feature flags
//!
//! Configuration is captured once when the match is created and never
//! re-read from a settings store mid-match.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::team::{TeamId, TeamMap};
use crate::cards::{DeckFilter, Language};

/// Lowest allowed escalated taboo penalty.
pub const PENALTY_MIN: u32 = 20;
/// Highest allowed escalated taboo penalty.
pub const PENALTY_MAX: u32 = 50;

/// Point values and scoring feature flags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points for a correct guess.
    pub correct_points: u32,

    /// Points deducted for an ordinary taboo.
    pub taboo_points: u32,

    /// Award `combo_bonus` on every 3rd consecutive correct guess.
    pub combo_enabled: bool,

    /// Extra points on a combo.
    pub combo_bonus: u32,

    /// Replace the deduction on every 3rd consecutive taboo with `penalty_points`.
    pub penalty_enabled: bool,

    /// Deduction for an escalated taboo (20-50).
    pub penalty_points: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            correct_points: 10,
            taboo_points: 10,
            combo_enabled: true,
            combo_bonus: 5,
            penalty_enabled: true,
            penalty_points: PENALTY_MIN,
        }
    }
}

/// Full Setup configuration for one match.
///
/// Deserializes with defaults for every missing field, so a host can
/// store partial settings. Always call `validate()` on deserialized input;
/// `MatchConfigBuilder::build()` does this for you.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Display names, non-empty and distinct.
    pub team_names: TeamMap<String>,

    /// Length of every round in seconds.
    pub round_seconds: u32,

    /// Passes allowed per round.
    pub pass_budget: u32,

    /// Taboos allowed per round.
    pub taboo_budget: u32,

    /// Optional hard cap on recorded taboos per round.
    pub taboo_cap: Option<u32>,

    /// Number of sets. Each set is one round per team.
    pub sets: u32,

    /// Point values and feature flags.
    pub scoring: ScoringConfig,

    /// Which cards make it into the deck.
    pub filter: DeckFilter,

    /// Display language for card text.
    pub language: Language,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            team_names: TeamMap::from_pair("Team A".to_string(), "Team B".to_string()),
            round_seconds: 60,
            pass_budget: 3,
            taboo_budget: 3,
            taboo_cap: None,
            sets: 1,
            scoring: ScoringConfig::default(),
            filter: DeckFilter::default(),
            language: Language::default(),
        }
    }
}

impl MatchConfig {
    /// Total rounds in the match (`sets × 2`).
    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.sets.saturating_mul(2)
    }

    /// Name of a team.
    #[must_use]
    pub fn team_name(&self, team: TeamId) -> &str {
        &self.team_names[team]
    }

    /// Check the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (team, name) in self.team_names.iter() {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyTeamName(team));
            }
        }

        let a = self.team_names[TeamId::A].trim();
        let b = self.team_names[TeamId::B].trim();
        if a.to_lowercase() == b.to_lowercase() {
            return Err(ConfigError::DuplicateTeamNames(a.to_string()));
        }

        if self.round_seconds == 0 {
            return Err(ConfigError::ZeroRoundDuration);
        }
        if self.sets == 0 {
            return Err(ConfigError::ZeroSets);
        }

        let penalty = self.scoring.penalty_points;
        if !(PENALTY_MIN..=PENALTY_MAX).contains(&penalty) {
            return Err(ConfigError::PenaltyOutOfRange(penalty));
        }

        Ok(())
    }
}

/// Builder for `MatchConfig`.
///
/// ## Example
///
/// ```
/// use taboo_engine::core::MatchConfigBuilder;
///
/// let config = MatchConfigBuilder::new()
///     .teams("Owls", "Foxes")
///     .round_seconds(90)
///     .sets(2)
///     .penalty(30)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.max_rounds(), 4);
/// assert_eq!(config.scoring.penalty_points, 30);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchConfigBuilder {
    config: MatchConfig,
}

impl MatchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn teams(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.config.team_names = TeamMap::from_pair(a.into(), b.into());
        self
    }

    pub fn round_seconds(mut self, seconds: u32) -> Self {
        self.config.round_seconds = seconds;
        self
    }

    pub fn pass_budget(mut self, budget: u32) -> Self {
        self.config.pass_budget = budget;
        self
    }

    pub fn taboo_budget(mut self, budget: u32) -> Self {
        self.config.taboo_budget = budget;
        self
    }

    pub fn taboo_cap(mut self, cap: u32) -> Self {
        self.config.taboo_cap = Some(cap);
        self
    }

    pub fn sets(mut self, sets: u32) -> Self {
        self.config.sets = sets;
        self
    }

    /// Enable the combo bonus with the given extra points.
    pub fn combo(mut self, bonus: u32) -> Self {
        self.config.scoring.combo_enabled = true;
        self.config.scoring.combo_bonus = bonus;
        self
    }

    pub fn no_combo(mut self) -> Self {
        self.config.scoring.combo_enabled = false;
        self
    }

    /// Enable penalty escalation with the given deduction.
    pub fn penalty(mut self, points: u32) -> Self {
        self.config.scoring.penalty_enabled = true;
        self.config.scoring.penalty_points = points;
        self
    }

    pub fn no_penalty(mut self) -> Self {
        self.config.scoring.penalty_enabled = false;
        self
    }

    pub fn scoring(mut self, scoring: ScoringConfig) -> Self {
        self.config.scoring = scoring;
        self
    }

    pub fn filter(mut self, filter: DeckFilter) -> Self {
        self.config.filter = filter;
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.config.language = language;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<MatchConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

//! Per-round counters.
//!
//! `RoundState` is created when a round goes live and discarded when it
//! ends, after its word lists are folded into the match history. Word
//! lists use `im::Vector` so the scoring functions can return a fresh
//! state per action with O(1) clones.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{MatchConfig, TeamId};

/// Live state of the round being played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// The describing team.
    pub active_team: TeamId,

    /// Seconds left on the round clock, mirrored after every tick.
    pub remaining_seconds: u32,

    /// Passes left this round.
    pub pass_budget: u32,

    /// Taboos left this round.
    pub taboo_budget: u32,

    /// Hard cap on recorded taboos, if configured.
    pub taboo_cap: Option<u32>,

    /// Consecutive correct guesses. Reset by any other outcome.
    pub correct_streak: u32,

    /// Consecutive taboos. Reset by any other outcome and by escalation.
    pub taboo_streak: u32,

    /// Words guessed correctly, in order.
    pub correct_words: Vector<String>,

    /// Words passed, in order.
    pub passed_words: Vector<String>,

    /// Words lost to a taboo, in order.
    pub tabooed_words: Vector<String>,

    /// Net points actually applied to the active team this round.
    pub points: i64,

    starting_pass_budget: u32,
    starting_taboo_budget: u32,
}

impl RoundState {
    /// Fresh counters for `team` using the match budgets.
    #[must_use]
    pub fn new(team: TeamId, config: &MatchConfig) -> Self {
        Self::with_budgets(team, config.round_seconds, config.pass_budget, config.taboo_budget)
            .with_taboo_cap(config.taboo_cap)
    }

    /// Fresh counters with explicit budgets.
    #[must_use]
    pub fn with_budgets(team: TeamId, seconds: u32, pass_budget: u32, taboo_budget: u32) -> Self {
        Self {
            active_team: team,
            remaining_seconds: seconds,
            pass_budget,
            taboo_budget,
            taboo_cap: None,
            correct_streak: 0,
            taboo_streak: 0,
            correct_words: Vector::new(),
            passed_words: Vector::new(),
            tabooed_words: Vector::new(),
            points: 0,
            starting_pass_budget: pass_budget,
            starting_taboo_budget: taboo_budget,
        }
    }

    #[must_use]
    pub fn with_taboo_cap(mut self, cap: Option<u32>) -> Self {
        self.taboo_cap = cap;
        self
    }

    /// Passes used so far.
    #[must_use]
    pub fn passes_used(&self) -> u32 {
        self.starting_pass_budget - self.pass_budget
    }

    /// Taboos used so far.
    #[must_use]
    pub fn taboos_used(&self) -> u32 {
        self.starting_taboo_budget - self.taboo_budget
    }

    /// Whether the taboo cap has been reached.
    #[must_use]
    pub fn taboo_cap_reached(&self) -> bool {
        self.taboo_cap
            .is_some_and(|cap| self.tabooed_words.len() >= cap as usize)
    }

    /// Debug-build check of the budget invariants.
    pub(crate) fn debug_check(&self) {
        debug_assert!(self.pass_budget <= self.starting_pass_budget);
        debug_assert!(self.taboo_budget <= self.starting_taboo_budget);
        debug_assert!(self.passed_words.len() as u32 == self.passes_used());
        debug_assert!(self.tabooed_words.len() as u32 == self.taboos_used());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfigBuilder;

    #[test]
    fn test_new_from_config() {
        let config = MatchConfigBuilder::new()
            .round_seconds(45)
            .pass_budget(2)
            .taboo_budget(4)
            .taboo_cap(3)
            .build()
            .unwrap();

        let state = RoundState::new(TeamId::B, &config);

        assert_eq!(state.active_team, TeamId::B);
        assert_eq!(state.remaining_seconds, 45);
        assert_eq!(state.pass_budget, 2);
        assert_eq!(state.taboo_budget, 4);
        assert_eq!(state.taboo_cap, Some(3));
        assert_eq!(state.passes_used(), 0);
        assert_eq!(state.taboos_used(), 0);
        assert!(!state.taboo_cap_reached());
    }

    #[test]
    fn test_taboo_cap_reached() {
        let mut state = RoundState::with_budgets(TeamId::A, 60, 3, 3).with_taboo_cap(Some(1));
        state.tabooed_words.push_back("Kalem".to_string());
        assert!(state.taboo_cap_reached());

        let uncapped = RoundState::with_budgets(TeamId::A, 60, 3, 3);
        assert!(!uncapped.taboo_cap_reached());
    }
}

//! Match-level state and the summaries built from it.
//!
//! ## MatchState
//!
//! Lives for one match. Holds team scores, the round counter and the
//! ordered history of finished rounds.
//!
//! ## Summaries
//!
//! - `RoundSummary`: immutable snapshot of one finished round
//! - `MatchSummary`: final scores, per-team word lists and the outcome,
//!   handed to the `SessionRecorder` when the match ends

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{MatchConfig, TeamId, TeamMap};
use crate::scoring::RoundState;

/// A team and its running score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    /// Never negative; taboo deductions clamp at zero.
    pub score: u32,
}

impl Team {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }
}

/// Why a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundEnd {
    /// The round clock reached zero.
    TimeUp,
    /// The deck ran out of cards mid-round.
    DeckExhausted,
}

/// Snapshot of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// Zero-based round number within the match.
    pub round_index: u32,
    pub team: TeamId,
    pub correct_words: Vector<String>,
    pub passed_words: Vector<String>,
    pub tabooed_words: Vector<String>,
    /// Net points applied to `team` during the round.
    pub points: i64,
    pub end: RoundEnd,
}

impl RoundSummary {
    /// Freeze a round's counters.
    #[must_use]
    pub fn from_round(round_index: u32, round: &RoundState, end: RoundEnd) -> Self {
        Self {
            round_index,
            team: round.active_team,
            correct_words: round.correct_words.clone(),
            passed_words: round.passed_words.clone(),
            tabooed_words: round.tabooed_words.clone(),
            points: round.points,
            end,
        }
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct_words.len()
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.passed_words.len()
    }

    #[must_use]
    pub fn tabooed(&self) -> usize {
        self.tabooed_words.len()
    }
}

/// All words a team handled across the match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamStats {
    pub correct_words: Vector<String>,
    pub passed_words: Vector<String>,
    pub tabooed_words: Vector<String>,
}

impl TeamStats {
    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct_words.len()
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.passed_words.len()
    }

    #[must_use]
    pub fn tabooed(&self) -> usize {
        self.tabooed_words.len()
    }

    fn absorb(&mut self, round: &RoundSummary) {
        self.correct_words.append(round.correct_words.clone());
        self.passed_words.append(round.passed_words.clone());
        self.tabooed_words.append(round.tabooed_words.clone());
    }
}

/// Final result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Strictly higher score.
    Winner(TeamId),
    /// Equal scores. No tie-break is applied.
    Draw,
}

impl MatchOutcome {
    /// Decide the outcome from final scores.
    #[must_use]
    pub fn from_scores(scores: &TeamMap<u32>) -> Self {
        let (a, b) = (scores[TeamId::A], scores[TeamId::B]);
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => MatchOutcome::Winner(TeamId::A),
            std::cmp::Ordering::Less => MatchOutcome::Winner(TeamId::B),
            std::cmp::Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// Check if a team won.
    #[must_use]
    pub fn is_winner(&self, team: TeamId) -> bool {
        matches!(self, MatchOutcome::Winner(t) if *t == team)
    }
}

/// Everything a host needs to report a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub team_names: TeamMap<String>,
    pub scores: TeamMap<u32>,
    pub stats: TeamMap<TeamStats>,
    pub rounds_played: u32,
    pub outcome: MatchOutcome,
}

impl MatchSummary {
    #[must_use]
    pub fn total_correct(&self) -> usize {
        self.stats.iter().map(|(_, s)| s.correct()).sum()
    }

    #[must_use]
    pub fn total_passed(&self) -> usize {
        self.stats.iter().map(|(_, s)| s.passed()).sum()
    }

    #[must_use]
    pub fn total_tabooed(&self) -> usize {
        self.stats.iter().map(|(_, s)| s.tabooed()).sum()
    }

    /// Highest final score of the two teams.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.scores[TeamId::A].max(self.scores[TeamId::B])
    }

    /// Name of the winning team, `None` on a draw.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match self.outcome {
            MatchOutcome::Winner(team) => Some(&self.team_names[team]),
            MatchOutcome::Draw => None,
        }
    }
}

/// State of the match in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Rounds finished so far. Only ever increases.
    pub round_index: u32,
    pub max_rounds: u32,
    /// Team describing in the current or next round.
    pub active_team: TeamId,
    pub teams: TeamMap<Team>,
    pub history: Vector<RoundSummary>,
}

impl MatchState {
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            round_index: 0,
            max_rounds: config.max_rounds(),
            active_team: TeamId::A,
            teams: config.team_names.map(|_, name| Team::new(name.clone())),
            history: Vector::new(),
        }
    }

    /// Current score of a team.
    #[must_use]
    pub fn score(&self, team: TeamId) -> u32 {
        self.teams[team].score
    }

    /// Whether every configured round has been played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.round_index >= self.max_rounds
    }

    /// Fold a finished round into the history and advance the counter.
    pub fn record_round(&mut self, summary: RoundSummary) {
        debug_assert!(!self.is_complete(), "round recorded after the last round");
        self.history.push_back(summary);
        self.round_index += 1;
    }

    /// Build the end-of-match summary.
    #[must_use]
    pub fn summary(&self) -> MatchSummary {
        let mut stats: TeamMap<TeamStats> = TeamMap::default();
        for round in &self.history {
            stats[round.team].absorb(round);
        }

        let scores = self.teams.map(|_, team| team.score);
        MatchSummary {
            team_names: self.teams.map(|_, team| team.name.clone()),
            outcome: MatchOutcome::from_scores(&scores),
            scores,
            stats,
            rounds_played: self.round_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchConfigBuilder;

    fn summary_for(team: TeamId, index: u32, correct: &[&str], tabooed: &[&str]) -> RoundSummary {
        let mut round = RoundState::with_budgets(team, 60, 3, 3);
        for w in correct {
            round.correct_words.push_back(w.to_string());
        }
        for w in tabooed {
            round.tabooed_words.push_back(w.to_string());
        }
        RoundSummary::from_round(index, &round, RoundEnd::TimeUp)
    }

    #[test]
    fn test_outcome_from_scores() {
        assert_eq!(
            MatchOutcome::from_scores(&TeamMap::from_pair(30, 20)),
            MatchOutcome::Winner(TeamId::A)
        );
        assert_eq!(
            MatchOutcome::from_scores(&TeamMap::from_pair(0, 5)),
            MatchOutcome::Winner(TeamId::B)
        );
        assert_eq!(MatchOutcome::from_scores(&TeamMap::from_pair(40, 40)), MatchOutcome::Draw);
        assert!(!MatchOutcome::Draw.is_winner(TeamId::A));
        assert!(MatchOutcome::Winner(TeamId::B).is_winner(TeamId::B));
    }

    #[test]
    fn test_match_state_from_config() {
        let config = MatchConfigBuilder::new().teams("Owls", "Foxes").sets(3).build().unwrap();
        let state = MatchState::new(&config);

        assert_eq!(state.max_rounds, 6);
        assert_eq!(state.teams[TeamId::A].name, "Owls");
        assert_eq!(state.teams[TeamId::B].name, "Foxes");
        assert_eq!(state.score(TeamId::A), 0);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_summary_folds_history_per_team() {
        let config = MatchConfigBuilder::new().teams("Owls", "Foxes").build().unwrap();
        let mut state = MatchState::new(&config);

        state.record_round(summary_for(TeamId::A, 0, &["Kedi", "Köpek"], &["Kuş"]));
        state.record_round(summary_for(TeamId::B, 1, &["Elma"], &[]));
        state.teams[TeamId::A].score = 10;
        state.teams[TeamId::B].score = 10;

        assert!(state.is_complete());
        let summary = state.summary();

        assert_eq!(summary.rounds_played, 2);
        assert_eq!(summary.stats[TeamId::A].correct(), 2);
        assert_eq!(summary.stats[TeamId::A].tabooed(), 1);
        assert_eq!(summary.stats[TeamId::B].correct(), 1);
        assert_eq!(summary.total_correct(), 3);
        assert_eq!(summary.total_tabooed(), 1);
        assert_eq!(summary.outcome, MatchOutcome::Draw);
        assert_eq!(summary.winner_name(), None);
        assert_eq!(summary.best_score(), 10);
    }
}

//! Finished-match sink and the capped score history.
//!
//! The engine only ever writes to the history: when a match ends the
//! coordinator calls `SessionRecorder::append` exactly once.
//! `ScoreHistory` is the reference store: newest first, capped at
//! `HISTORY_CAP` entries, encoded with `bincode` for a key-value store.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::EngineError;
use crate::turn::MatchSummary;

/// Most matches kept in a `ScoreHistory`.
pub const HISTORY_CAP: usize = 50;

/// Receiver for finished-match summaries.
pub trait SessionRecorder {
    fn append(&mut self, summary: MatchSummary);
}

/// Keep every summary in arrival order.
impl SessionRecorder for Vec<MatchSummary> {
    fn append(&mut self, summary: MatchSummary) {
        self.push(summary);
    }
}

/// Aggregate statistics over a history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub total_games: usize,
    pub total_correct: usize,
    pub total_pass: usize,
    pub total_taboo: usize,
    /// Highest team score in any recorded match.
    pub best_score: u32,
    /// Mean of each match's best score, rounded to nearest.
    pub average_score: u32,
}

/// Capped, most-recent-first list of finished matches.
///
/// ## Example
///
/// ```
/// use taboo_engine::history::ScoreHistory;
///
/// let history = ScoreHistory::new();
/// assert!(history.is_empty());
/// assert_eq!(history.stats().total_games, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreHistory {
    entries: VecDeque<MatchSummary>,
    cap: usize,
}

impl Default for ScoreHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::with_cap(HISTORY_CAP)
    }

    /// History holding at most `cap` entries (at least one).
    #[must_use]
    pub fn with_cap(cap: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cap: cap.max(1),
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &MatchSummary> {
        self.entries.iter()
    }

    /// The newest entry.
    #[must_use]
    pub fn latest(&self) -> Option<&MatchSummary> {
        self.entries.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Aggregate totals across all entries.
    #[must_use]
    pub fn stats(&self) -> HistoryStats {
        if self.entries.is_empty() {
            return HistoryStats::default();
        }

        let total_games = self.entries.len();
        let best_scores: Vec<u32> = self.entries.iter().map(MatchSummary::best_score).collect();
        let sum: u64 = best_scores.iter().map(|&s| u64::from(s)).sum();
        let average = (sum + total_games as u64 / 2) / total_games as u64;

        HistoryStats {
            total_games,
            total_correct: self.entries.iter().map(MatchSummary::total_correct).sum(),
            total_pass: self.entries.iter().map(MatchSummary::total_passed).sum(),
            total_taboo: self.entries.iter().map(MatchSummary::total_tabooed).sum(),
            best_score: best_scores.iter().copied().max().unwrap_or(0),
            average_score: u32::try_from(average).unwrap_or(u32::MAX),
        }
    }

    /// Encode for storage under a single key.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        bincode::serialize(self).map_err(|e| EngineError::History(e.to_string()))
    }

    /// Decode a stored history.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let mut history: Self =
            bincode::deserialize(bytes).map_err(|e| EngineError::History(e.to_string()))?;
        history.cap = history.cap.max(1);
        history.entries.truncate(history.cap);
        Ok(history)
    }
}

impl SessionRecorder for ScoreHistory {
    fn append(&mut self, summary: MatchSummary) {
        self.entries.push_front(summary);
        self.entries.truncate(self.cap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{TeamId, TeamMap};
    use crate::turn::{MatchOutcome, TeamStats};

    fn summary(a: u32, b: u32, correct: usize) -> MatchSummary {
        let mut stats: TeamMap<TeamStats> = TeamMap::default();
        for i in 0..correct {
            stats[TeamId::A].correct_words.push_back(format!("w{i}"));
        }
        let scores = TeamMap::from_pair(a, b);
        MatchSummary {
            team_names: TeamMap::from_pair("Owls".to_string(), "Foxes".to_string()),
            outcome: MatchOutcome::from_scores(&scores),
            scores,
            stats,
            rounds_played: 2,
        }
    }

    #[test]
    fn test_newest_first() {
        let mut history = ScoreHistory::new();
        history.append(summary(10, 0, 1));
        history.append(summary(20, 0, 2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().unwrap().scores[TeamId::A], 20);
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut history = ScoreHistory::new();
        for i in 0..(HISTORY_CAP as u32 + 5) {
            history.append(summary(i, 0, 0));
        }

        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(history.latest().unwrap().scores[TeamId::A], HISTORY_CAP as u32 + 4);
        let oldest = history.entries().last().unwrap();
        assert_eq!(oldest.scores[TeamId::A], 5);
    }

    #[test]
    fn test_stats() {
        let mut history = ScoreHistory::new();
        history.append(summary(30, 10, 3));
        history.append(summary(5, 45, 1));
        history.append(summary(20, 20, 0));

        let stats = history.stats();
        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.total_correct, 4);
        assert_eq!(stats.best_score, 45);
        // (30 + 45 + 20) / 3 = 31.67
        assert_eq!(stats.average_score, 32);
    }

    #[test]
    fn test_clear() {
        let mut history = ScoreHistory::new();
        history.append(summary(1, 2, 0));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.stats(), HistoryStats::default());
    }

    #[test]
    fn test_bytes_round_trip() {
        let mut history = ScoreHistory::with_cap(3);
        history.append(summary(10, 20, 2));

        let bytes = history.to_bytes().unwrap();
        let restored = ScoreHistory::from_bytes(&bytes).unwrap();
        assert_eq!(history, restored);
    }

    #[test]
    fn test_corrupt_bytes_rejected() {
        let err = ScoreHistory::from_bytes(&[0xFF, 0x01]).unwrap_err();
        assert!(matches!(err, EngineError::History(_)));
    }
}

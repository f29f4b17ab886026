//! Scoring rules for the three player actions.
//!
//! Each function takes a `RoundState` snapshot and returns the next one;
//! nothing is mutated in place. The caller owns the team score and passes
//! it in, so a taboo can be clamped at zero.
//!
//! ## Rules
//!
//! - **Correct**: `correct_points`, plus `combo_bonus` on every 3rd
//!   consecutive correct guess when combos are enabled. Breaks the taboo
//!   streak.
//! - **Pass**: spends one pass. Breaks both streaks.
//! - **Taboo**: deducts `taboo_points`. With escalation enabled, every
//!   3rd consecutive taboo deducts `penalty_points` instead and the streak
//!   starts over. Spends one taboo and breaks the correct streak.
//!
//! Pass and taboo are rejected, with no state change, once their budget
//! is spent.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::state::RoundState;
use crate::core::ScoringConfig;

/// Streak length that triggers a combo or an escalated penalty.
pub const STREAK_TRIGGER: u32 = 3;

/// Why an action was refused. The round state is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum Rejected {
    #[error("no passes left this round")]
    PassBudgetExhausted,

    #[error("no taboos left this round")]
    TabooBudgetExhausted,

    #[error("taboo cap for this round reached")]
    TabooCapReached,
}

/// How the points of an action were computed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoreKind {
    /// Ordinary value.
    Base,
    /// Correct guess with the combo bonus added.
    Combo,
    /// Taboo replaced by the escalated penalty.
    Escalated,
    /// No points involved (pass).
    None,
}

/// Outcome of a scored action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scored {
    /// Round state after the action.
    pub round: RoundState,

    /// Active team's score after the action.
    pub score: u32,

    /// Signed change actually applied to the score (after clamping).
    pub points: i64,

    pub kind: ScoreKind,
}

/// Apply a correct guess of `word`.
///
/// Never fails and never lowers the score.
pub fn apply_correct(round: &RoundState, score: u32, word: &str, config: &ScoringConfig) -> Scored {
    let mut next = round.clone();
    next.correct_streak += 1;
    next.taboo_streak = 0;
    next.correct_words.push_back(word.to_string());

    let combo = config.combo_enabled && next.correct_streak % STREAK_TRIGGER == 0;
    let awarded = if combo {
        config.correct_points + config.combo_bonus
    } else {
        config.correct_points
    };

    let new_score = score.saturating_add(awarded);
    let points = i64::from(new_score - score);
    next.points += points;
    next.debug_check();

    debug!(team = %next.active_team, word, points, combo, streak = next.correct_streak, "correct");

    Scored {
        round: next,
        score: new_score,
        points,
        kind: if combo { ScoreKind::Combo } else { ScoreKind::Base },
    }
}

/// Apply a pass on `word`.
pub fn apply_pass(round: &RoundState, word: &str) -> Result<RoundState, Rejected> {
    if round.pass_budget == 0 {
        return Err(Rejected::PassBudgetExhausted);
    }

    let mut next = round.clone();
    next.pass_budget -= 1;
    next.correct_streak = 0;
    next.taboo_streak = 0;
    next.passed_words.push_back(word.to_string());
    next.debug_check();

    debug!(team = %next.active_team, word, passes_left = next.pass_budget, "pass");
    Ok(next)
}

/// Apply a taboo on `word`.
///
/// Never takes the score below zero.
pub fn apply_taboo(
    round: &RoundState,
    score: u32,
    word: &str,
    config: &ScoringConfig,
) -> Result<Scored, Rejected> {
    if round.taboo_budget == 0 {
        return Err(Rejected::TabooBudgetExhausted);
    }
    if round.taboo_cap_reached() {
        return Err(Rejected::TabooCapReached);
    }

    let mut next = round.clone();
    next.taboo_budget -= 1;
    next.correct_streak = 0;
    next.taboo_streak += 1;
    next.tabooed_words.push_back(word.to_string());

    let escalated = config.penalty_enabled && next.taboo_streak == STREAK_TRIGGER;
    let deduction = if escalated {
        next.taboo_streak = 0;
        config.penalty_points
    } else {
        config.taboo_points
    };

    let new_score = score.saturating_sub(deduction);
    let points = -i64::from(score - new_score);
    next.points += points;
    next.debug_check();

    debug!(team = %next.active_team, word, points, escalated, taboos_left = next.taboo_budget, "taboo");

    Ok(Scored {
        round: next,
        score: new_score,
        points,
        kind: if escalated { ScoreKind::Escalated } else { ScoreKind::Base },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TeamId;

    fn round() -> RoundState {
        RoundState::with_budgets(TeamId::A, 60, 3, 10)
    }

    fn config() -> ScoringConfig {
        ScoringConfig::default()
    }

    #[test]
    fn test_correct_awards_base() {
        let scored = apply_correct(&round(), 0, "Kedi", &config());

        assert_eq!(scored.points, 10);
        assert_eq!(scored.score, 10);
        assert_eq!(scored.kind, ScoreKind::Base);
        assert_eq!(scored.round.correct_streak, 1);
        assert_eq!(scored.round.correct_words.len(), 1);
    }

    #[test]
    fn test_combo_on_every_third_correct() {
        let config = config();
        let mut state = round();
        let mut score = 0;
        let mut awarded = Vec::new();

        for i in 0..6 {
            let scored = apply_correct(&state, score, &format!("w{i}"), &config);
            awarded.push(scored.points);
            state = scored.round;
            score = scored.score;
        }

        assert_eq!(awarded, vec![10, 10, 15, 10, 10, 15]);
        assert_eq!(score, 70);
        assert_eq!(state.correct_streak, 6);
        assert_eq!(state.points, 70);
    }

    #[test]
    fn test_combo_disabled() {
        let config = ScoringConfig {
            combo_enabled: false,
            ..ScoringConfig::default()
        };
        let mut state = round();
        let mut last = 0;
        for _ in 0..3 {
            let scored = apply_correct(&state, 0, "w", &config);
            last = scored.points;
            state = scored.round;
        }
        assert_eq!(last, 10);
    }

    #[test]
    fn test_correct_breaks_taboo_streak() {
        let mut state = round();
        state.taboo_streak = 2;

        let scored = apply_correct(&state, 0, "w", &config());
        assert_eq!(scored.round.taboo_streak, 0);
    }

    #[test]
    fn test_pass_spends_budget_and_breaks_streaks() {
        let mut state = round();
        state.correct_streak = 2;
        state.taboo_streak = 1;

        let next = apply_pass(&state, "Masa").unwrap();
        assert_eq!(next.pass_budget, 2);
        assert_eq!(next.correct_streak, 0);
        assert_eq!(next.taboo_streak, 0);
        assert_eq!(next.passes_used(), 1);
        assert_eq!(next.passed_words.iter().collect::<Vec<_>>(), vec!["Masa"]);
    }

    #[test]
    fn test_pass_rejected_when_budget_spent() {
        let state = RoundState::with_budgets(TeamId::A, 60, 0, 3);
        assert_eq!(apply_pass(&state, "w"), Err(Rejected::PassBudgetExhausted));
    }

    #[test]
    fn test_taboo_clamps_at_zero() {
        let scored = apply_taboo(&round(), 4, "w", &config()).unwrap();

        assert_eq!(scored.score, 0);
        assert_eq!(scored.points, -4);
        assert_eq!(scored.round.points, -4);
    }

    #[test]
    fn test_taboo_escalation_replaces_base() {
        let config = config();
        let mut state = round();
        let mut score = 100;
        let mut deducted = Vec::new();

        for _ in 0..4 {
            let scored = apply_taboo(&state, score, "w", &config).unwrap();
            deducted.push(-scored.points);
            state = scored.round;
            score = scored.score;
        }

        assert_eq!(deducted, vec![10, 10, 20, 10]);
        assert_eq!(state.taboo_streak, 1);
        assert_eq!(score, 50);
    }

    #[test]
    fn test_taboo_without_escalation_keeps_climbing() {
        let config = ScoringConfig {
            penalty_enabled: false,
            ..ScoringConfig::default()
        };
        let mut state = round();
        for _ in 0..4 {
            let scored = apply_taboo(&state, 100, "w", &config).unwrap();
            assert_eq!(scored.points, -10);
            assert_eq!(scored.kind, ScoreKind::Base);
            state = scored.round;
        }
        assert_eq!(state.taboo_streak, 4);
    }

    #[test]
    fn test_taboo_breaks_correct_streak() {
        let mut state = round();
        state.correct_streak = 2;

        let scored = apply_taboo(&state, 10, "w", &config()).unwrap();
        assert_eq!(scored.round.correct_streak, 0);

        // Next correct starts a fresh streak: no combo
        let next = apply_correct(&scored.round, scored.score, "w", &config());
        assert_eq!(next.points, 10);
    }

    #[test]
    fn test_taboo_rejections() {
        let empty = RoundState::with_budgets(TeamId::A, 60, 3, 0);
        assert_eq!(
            apply_taboo(&empty, 10, "w", &config()),
            Err(Rejected::TabooBudgetExhausted)
        );

        let capped = RoundState::with_budgets(TeamId::A, 60, 3, 5).with_taboo_cap(Some(1));
        let scored = apply_taboo(&capped, 10, "w", &config()).unwrap();
        assert_eq!(
            apply_taboo(&scored.round, scored.score, "w", &config()),
            Err(Rejected::TabooCapReached)
        );
    }
}

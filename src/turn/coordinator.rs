//! The match state machine.
//!
//! ```text
//! Setup -> Countdown -> Active -> RoundOver -> Countdown ...
//!                                 SetOver   -> Countdown ...
//!                                 MatchOver (terminal)
//! ```
//!
//! `TurnCoordinator` owns the deck, the clocks, the match and round
//! state. The host feeds it ticks and player actions; every call
//! completes synchronously. Within an action, scoring always happens
//! before the next card is drawn, and a card is always drawn before it
//! is reported as shown.

use tracing::{debug, info, warn};

use crate::cards::{Draw, WordCard, WordDeck};
use crate::clock::{Countdown, CountdownStep, RoundClock};
use crate::core::{ConfigError, DeckRng, EngineError, MatchConfig, TeamId};
use crate::history::SessionRecorder;
use crate::scoring::{apply_correct, apply_pass, apply_taboo, Rejected, RoundState, ScoreKind};

use super::events::{EngineEvent, EventSink};
use super::match_state::{MatchState, MatchSummary, RoundEnd, RoundSummary};

/// Where the match is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Configured, waiting for `start_match()`.
    Setup,
    /// Lead-in before a round. Clock and counters are not live.
    Countdown(CountdownStep),
    /// Round in play.
    Active,
    /// A team's round ended mid-set. Waiting for `next_round()`.
    RoundOver,
    /// Both teams played this set. Waiting for `next_round()`.
    SetOver,
    /// Terminal. Only `reset()` leaves this phase.
    MatchOver,
}

impl Phase {
    /// Short name for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Setup => "Setup",
            Phase::Countdown(_) => "Countdown",
            Phase::Active => "Active",
            Phase::RoundOver => "RoundOver",
            Phase::SetOver => "SetOver",
            Phase::MatchOver => "MatchOver",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a player action during an active round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action counted.
    Applied {
        /// Signed change applied to the active team's score.
        points: i64,
        kind: ScoreKind,
        /// The deck ran out while drawing the next card; the round is over.
        deck_exhausted: bool,
    },
    /// Budget spent; nothing changed.
    Rejected(Rejected),
}

impl ActionOutcome {
    /// Points applied, zero when rejected.
    #[must_use]
    pub fn points(&self) -> i64 {
        match self {
            ActionOutcome::Applied { points, .. } => *points,
            ActionOutcome::Rejected(_) => 0,
        }
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, ActionOutcome::Rejected(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Correct,
    Pass,
    Taboo,
}

/// Runs one match from Setup to MatchOver.
///
/// ## Example
///
/// ```
/// use taboo_engine::cards::{CardId, WordCard};
/// use taboo_engine::core::MatchConfigBuilder;
/// use taboo_engine::history::ScoreHistory;
/// use taboo_engine::turn::{Phase, TurnCoordinator};
///
/// let cards: Vec<_> = (0..20)
///     .map(|i| WordCard::new(CardId::new(i), format!("word-{i}")))
///     .collect();
/// let config = MatchConfigBuilder::new().teams("Owls", "Foxes").round_seconds(3).build().unwrap();
///
/// let mut game = TurnCoordinator::new(config, &cards, 42, ScoreHistory::new()).unwrap();
/// game.start_match().unwrap();
///
/// // 3, 2, 1, Go, then live
/// while game.phase() != Phase::Active {
///     game.tick();
/// }
/// game.correct().unwrap();
/// assert_eq!(game.match_state().score(game.active_team()), 10);
/// ```
pub struct TurnCoordinator<R, E = ()> {
    config: MatchConfig,
    deck: WordDeck,
    clock: RoundClock,
    countdown: Countdown,
    phase: Phase,
    state: MatchState,
    round: Option<RoundState>,
    current: Option<WordCard>,
    summary: Option<MatchSummary>,
    recorder: R,
    events: E,
}

impl<R: SessionRecorder> TurnCoordinator<R, ()> {
    /// Validate `config`, build the deck from `source` and enter Setup.
    pub fn new(
        config: MatchConfig,
        source: &[WordCard],
        seed: u64,
        recorder: R,
    ) -> Result<Self, ConfigError> {
        Self::with_events(config, source, seed, recorder, ())
    }
}

impl<R: SessionRecorder, E: EventSink> TurnCoordinator<R, E> {
    /// Like `new`, with an event sink.
    pub fn with_events(
        config: MatchConfig,
        source: &[WordCard],
        seed: u64,
        recorder: R,
        events: E,
    ) -> Result<Self, ConfigError> {
        let (deck, state) = Self::setup(&config, source, seed)?;
        Ok(Self {
            config,
            deck,
            clock: RoundClock::new(),
            countdown: Countdown::new(),
            phase: Phase::Setup,
            state,
            round: None,
            current: None,
            summary: None,
            recorder,
            events,
        })
    }

    fn setup(
        config: &MatchConfig,
        source: &[WordCard],
        seed: u64,
    ) -> Result<(WordDeck, MatchState), ConfigError> {
        config.validate()?;
        let deck = WordDeck::from_source(source, &config.filter, DeckRng::new(seed));
        if deck.is_exhausted() {
            return Err(ConfigError::EmptyDeck);
        }
        info!(
            team_a = %config.team_names[TeamId::A],
            team_b = %config.team_names[TeamId::B],
            cards = deck.remaining(),
            rounds = config.max_rounds(),
            "match configured"
        );
        Ok((deck, MatchState::new(config)))
    }

    /// Throw away all match state and return to Setup.
    ///
    /// On a config error the coordinator is left untouched.
    pub fn reset(&mut self, config: MatchConfig, source: &[WordCard], seed: u64) -> Result<(), ConfigError> {
        let (deck, state) = Self::setup(&config, source, seed)?;
        self.config = config;
        self.deck = deck;
        self.state = state;
        self.clock = RoundClock::new();
        self.countdown = Countdown::new();
        self.phase = Phase::Setup;
        self.round = None;
        self.current = None;
        self.summary = None;
        Ok(())
    }

    // === Transitions ===

    /// Leave Setup and begin the first countdown.
    pub fn start_match(&mut self) -> Result<(), EngineError> {
        self.expect_phase("start the match", |p| p == Phase::Setup)?;
        info!(team = %self.state.active_team, "match started");
        self.begin_countdown();
        Ok(())
    }

    /// Leave RoundOver/SetOver: the other team starts its countdown.
    ///
    /// Fails with `DeckExhausted` while the deck is empty.
    pub fn next_round(&mut self) -> Result<(), EngineError> {
        self.expect_phase("start the next round", |p| {
            matches!(p, Phase::RoundOver | Phase::SetOver)
        })?;
        if self.deck.is_exhausted() {
            return Err(EngineError::DeckExhausted);
        }

        self.state.active_team = self.state.active_team.other();
        self.begin_countdown();
        Ok(())
    }

    /// Advance time by one second.
    ///
    /// Drives the countdown and the round clock. A no-op in every other
    /// phase and while paused. Returns the phase after the tick.
    pub fn tick(&mut self) -> Phase {
        match self.phase {
            Phase::Countdown(_) => match self.countdown.tick() {
                Some(step) => {
                    self.phase = Phase::Countdown(step);
                    self.events.emit(EngineEvent::CountdownStep(step));
                }
                None => self.go_live(),
            },
            Phase::Active => {
                self.clock.tick();
                if let Some(round) = self.round.as_mut() {
                    round.remaining_seconds = self.clock.remaining();
                }
                if self.clock.is_expired() {
                    debug!("round clock expired");
                    self.end_round(RoundEnd::TimeUp);
                }
            }
            _ => {}
        }
        self.phase
    }

    /// Stop the round clock. Returns `false` if it was already paused.
    pub fn pause(&mut self) -> Result<bool, EngineError> {
        self.expect_phase("pause", |p| p == Phase::Active)?;
        let paused = self.clock.pause();
        if paused {
            self.events.emit(EngineEvent::Paused);
        }
        Ok(paused)
    }

    /// Restart a paused round clock. Returns `false` if it was running.
    pub fn resume(&mut self) -> Result<bool, EngineError> {
        self.expect_phase("resume", |p| p == Phase::Active)?;
        let resumed = self.clock.resume();
        if resumed {
            self.events.emit(EngineEvent::Resumed);
        }
        Ok(resumed)
    }

    /// Add cards to an exhausted (or running-low) deck.
    ///
    /// Cards already seen in this match are skipped. Returns the number
    /// added. Fails once the match is over.
    pub fn supply_cards(&mut self, cards: impl IntoIterator<Item = WordCard>) -> Result<usize, EngineError> {
        self.expect_phase("supply cards", |p| p != Phase::MatchOver)?;
        let added = self.deck.supply(cards);
        info!(added, remaining = self.deck.remaining(), "cards supplied");
        Ok(added)
    }

    // === Player actions ===

    /// The team guessed the word on display.
    pub fn correct(&mut self) -> Result<ActionOutcome, EngineError> {
        self.act(Action::Correct)
    }

    /// Skip the word on display, spending a pass.
    pub fn pass(&mut self) -> Result<ActionOutcome, EngineError> {
        self.act(Action::Pass)
    }

    /// The describer said a forbidden word.
    pub fn taboo(&mut self) -> Result<ActionOutcome, EngineError> {
        self.act(Action::Taboo)
    }

    fn act(&mut self, action: Action) -> Result<ActionOutcome, EngineError> {
        self.expect_phase("score an action", |p| p == Phase::Active)?;
        if self.clock.is_paused() {
            return Err(EngineError::Paused);
        }
        let (Some(round), Some(card)) = (self.round.as_ref(), self.current.as_ref()) else {
            return Err(EngineError::DeckExhausted);
        };

        let team = round.active_team;
        let score = self.state.score(team);
        let word = card.text(self.config.language);
        let scoring = &self.config.scoring;

        let result = match action {
            Action::Correct => Ok(apply_correct(round, score, word, scoring)),
            Action::Pass => apply_pass(round, word).map(|next| crate::scoring::Scored {
                round: next,
                score,
                points: 0,
                kind: ScoreKind::None,
            }),
            Action::Taboo => apply_taboo(round, score, word, scoring),
        };

        let scored = match result {
            Ok(scored) => scored,
            Err(rejected) => {
                debug!(?rejected, "action rejected");
                self.events.emit(EngineEvent::ActionRejected(rejected));
                return Ok(ActionOutcome::Rejected(rejected));
            }
        };

        let event = match action {
            Action::Correct => EngineEvent::Correct {
                team,
                points: scored.points,
                combo: scored.kind == ScoreKind::Combo,
            },
            Action::Pass => EngineEvent::Pass {
                team,
                passes_left: scored.round.pass_budget,
            },
            Action::Taboo => EngineEvent::Taboo {
                team,
                points: scored.points,
                escalated: scored.kind == ScoreKind::Escalated,
            },
        };

        self.state.teams[team].score = scored.score;
        self.round = Some(scored.round);
        self.events.emit(event);

        let deck_exhausted = !self.show_next_card();
        Ok(ActionOutcome::Applied {
            points: scored.points,
            kind: scored.kind,
            deck_exhausted,
        })
    }

    // === Internals ===

    fn expect_phase(&self, action: &'static str, allowed: impl Fn(Phase) -> bool) -> Result<(), EngineError> {
        if allowed(self.phase) {
            Ok(())
        } else if self.phase == Phase::MatchOver {
            Err(EngineError::MatchOver)
        } else {
            Err(EngineError::WrongPhase {
                action,
                phase: self.phase.name(),
            })
        }
    }

    fn begin_countdown(&mut self) {
        self.countdown = Countdown::new();
        self.phase = Phase::Countdown(CountdownStep::Three);
        self.events.emit(EngineEvent::CountdownStep(CountdownStep::Three));
    }

    fn go_live(&mut self) {
        let team = self.state.active_team;
        self.round = Some(RoundState::new(team, &self.config));
        self.phase = Phase::Active;
        info!(round = self.state.round_index, %team, "round started");
        self.events.emit(EngineEvent::RoundStarted {
            round_index: self.state.round_index,
            team,
        });

        if self.show_next_card() {
            self.clock.start(self.config.round_seconds);
        }
    }

    /// Draw and display the next card. On exhaustion, ends the round and
    /// returns `false`.
    fn show_next_card(&mut self) -> bool {
        match self.deck.draw() {
            Draw::Card(card) => {
                let id = card.id();
                self.current = Some(card);
                self.events.emit(EngineEvent::CardShown(id));
                true
            }
            Draw::Exhausted => {
                self.current = None;
                warn!(round = self.state.round_index, "word deck exhausted");
                self.events.emit(EngineEvent::DeckExhausted);
                self.end_round(RoundEnd::DeckExhausted);
                false
            }
        }
    }

    fn end_round(&mut self, end: RoundEnd) {
        let Some(round) = self.round.take() else {
            return;
        };
        self.current = None;
        self.clock.stop();

        let summary = RoundSummary::from_round(self.state.round_index, &round, end);
        info!(
            round = summary.round_index,
            team = %summary.team,
            correct = summary.correct(),
            passed = summary.passed(),
            tabooed = summary.tabooed(),
            points = summary.points,
            ?end,
            "round over"
        );
        self.state.record_round(summary.clone());
        self.events.emit(EngineEvent::RoundOver(summary));

        if self.state.is_complete() {
            self.finish_match();
        } else if self.state.round_index % 2 == 0 {
            let set = self.state.round_index / 2;
            info!(set, "set over");
            self.phase = Phase::SetOver;
            self.events.emit(EngineEvent::SetOver { set });
        } else {
            self.phase = Phase::RoundOver;
        }
    }

    fn finish_match(&mut self) {
        self.phase = Phase::MatchOver;
        let summary = self.state.summary();
        info!(
            score_a = summary.scores[TeamId::A],
            score_b = summary.scores[TeamId::B],
            outcome = ?summary.outcome,
            "match over"
        );
        self.events.emit(EngineEvent::MatchOver(summary.outcome));
        self.recorder.append(summary.clone());
        self.summary = Some(summary);
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn match_state(&self) -> &MatchState {
        &self.state
    }

    /// Team describing in the current or next round.
    #[must_use]
    pub fn active_team(&self) -> TeamId {
        self.state.active_team
    }

    /// Live round counters, only while Active.
    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// The card on display, only while Active.
    #[must_use]
    pub fn current_card(&self) -> Option<&WordCard> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn clock(&self) -> &RoundClock {
        &self.clock
    }

    #[must_use]
    pub fn deck(&self) -> &WordDeck {
        &self.deck
    }

    /// Final summary, once the match is over.
    #[must_use]
    pub fn summary(&self) -> Option<&MatchSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn recorder(&self) -> &R {
        &self.recorder
    }

    #[must_use]
    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }
}

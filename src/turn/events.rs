//! Engine events for presentation, sound and haptics.
//!
//! The coordinator emits an `EngineEvent` at every visible step. Hosts
//! use them to vibrate, play sounds or switch screens; the engine does
//! not care whether anyone listens.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::clock::CountdownStep;
use crate::core::TeamId;
use crate::scoring::Rejected;

use super::match_state::{MatchOutcome, RoundSummary};

/// Something the host may want to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// The lead-in moved to a new step.
    CountdownStep(CountdownStep),
    /// A round went live.
    RoundStarted { round_index: u32, team: TeamId },
    /// A card was drawn and is now on display.
    CardShown(CardId),
    Correct { team: TeamId, points: i64, combo: bool },
    Pass { team: TeamId, passes_left: u32 },
    Taboo { team: TeamId, points: i64, escalated: bool },
    /// A pass or taboo was refused because its budget is spent.
    ActionRejected(Rejected),
    Paused,
    Resumed,
    /// The deck ran dry. Play halts until cards are supplied or the
    /// match is reset.
    DeckExhausted,
    RoundOver(RoundSummary),
    /// Both teams have played; `set` is the one-based set just finished.
    SetOver { set: u32 },
    MatchOver(MatchOutcome),
}

/// Receiver for engine events.
pub trait EventSink {
    fn emit(&mut self, event: EngineEvent);
}

/// Discard every event.
impl EventSink for () {
    fn emit(&mut self, _event: EngineEvent) {}
}

/// Collect events in order.
impl EventSink for Vec<EngineEvent> {
    fn emit(&mut self, event: EngineEvent) {
        self.push(event);
    }
}

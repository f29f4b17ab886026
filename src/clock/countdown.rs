//! The 3-2-1-Go lead-in shown before every round.

use serde::{Deserialize, Serialize};

/// One step of the lead-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountdownStep {
    Three,
    Two,
    One,
    Go,
}

impl CountdownStep {
    /// The step after this one, or `None` after `Go`.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            CountdownStep::Three => Some(CountdownStep::Two),
            CountdownStep::Two => Some(CountdownStep::One),
            CountdownStep::One => Some(CountdownStep::Go),
            CountdownStep::Go => None,
        }
    }
}

impl std::fmt::Display for CountdownStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CountdownStep::Three => write!(f, "3"),
            CountdownStep::Two => write!(f, "2"),
            CountdownStep::One => write!(f, "1"),
            CountdownStep::Go => write!(f, "Go"),
        }
    }
}

/// Fixed-length lead-in driven by host ticks.
///
/// Starts on `Three`. Each tick advances one step; the tick after `Go`
/// finishes the countdown.
///
/// ```
/// use taboo_engine::clock::{Countdown, CountdownStep};
///
/// let mut countdown = Countdown::new();
/// assert_eq!(countdown.step(), Some(CountdownStep::Three));
///
/// countdown.tick();
/// countdown.tick();
/// assert_eq!(countdown.tick(), Some(CountdownStep::Go));
/// assert_eq!(countdown.tick(), None);
/// assert!(countdown.is_finished());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    step: Option<CountdownStep>,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    /// Number of ticks from `Three` until the countdown finishes.
    pub const TICKS: u32 = 4;

    #[must_use]
    pub fn new() -> Self {
        Self {
            step: Some(CountdownStep::Three),
        }
    }

    /// The step currently on screen, `None` once finished.
    #[must_use]
    pub fn step(&self) -> Option<CountdownStep> {
        self.step
    }

    /// Advance one step and return the new one.
    pub fn tick(&mut self) -> Option<CountdownStep> {
        self.step = self.step.and_then(CountdownStep::next);
        self.step
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.step.is_none()
    }
}

//! Round countdown timer.
//!
//! The clock is purely reactive: it owns no timer thread. The host calls
//! `tick()` once per wall-clock second and the clock counts down.

use serde::{Deserialize, Serialize};

/// Lifecycle of a `RoundClock`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockState {
    /// Never started.
    #[default]
    Idle,
    /// Counting down on every tick.
    Running,
    /// Ticks are ignored until `resume()`.
    Paused,
    /// Reached zero. Ignores ticks until the next `start()`.
    Expired,
    /// Halted before reaching zero. Ignores ticks until the next `start()`.
    Stopped,
}

/// Countdown timer for one round.
///
/// ## Example
///
/// ```
/// use taboo_engine::clock::{ClockState, RoundClock};
///
/// let mut clock = RoundClock::new();
/// clock.start(2);
///
/// assert_eq!(clock.tick(), ClockState::Running);
/// assert_eq!(clock.tick(), ClockState::Expired);
/// assert_eq!(clock.remaining(), 0);
///
/// // Further ticks do nothing
/// assert_eq!(clock.tick(), ClockState::Expired);
/// assert_eq!(clock.remaining(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundClock {
    duration: u32,
    remaining: u32,
    state: ClockState,
}

impl RoundClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the clock at `duration_seconds`.
    ///
    /// A zero duration expires immediately.
    pub fn start(&mut self, duration_seconds: u32) {
        self.duration = duration_seconds;
        self.remaining = duration_seconds;
        self.state = if duration_seconds == 0 {
            ClockState::Expired
        } else {
            ClockState::Running
        };
    }

    /// Advance one second. No-op unless running.
    pub fn tick(&mut self) -> ClockState {
        if self.state == ClockState::Running {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.state = ClockState::Expired;
            }
        }
        self.state
    }

    /// Stop counting without losing remaining time.
    ///
    /// Returns `true` if the clock was running.
    pub fn pause(&mut self) -> bool {
        if self.state == ClockState::Running {
            self.state = ClockState::Paused;
            true
        } else {
            false
        }
    }

    /// Continue counting after a pause.
    ///
    /// Returns `true` if the clock was paused.
    pub fn resume(&mut self) -> bool {
        if self.state == ClockState::Paused {
            self.state = ClockState::Running;
            true
        } else {
            false
        }
    }

    /// Halt a running or paused clock, keeping the elapsed time.
    ///
    /// Returns `true` if time was live.
    pub fn stop(&mut self) -> bool {
        match self.state {
            ClockState::Running | ClockState::Paused => {
                self.state = ClockState::Stopped;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn state(&self) -> ClockState {
        self.state
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.duration - self.remaining
    }

    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state == ClockState::Paused
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.state == ClockState::Expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_second_round() {
        let mut clock = RoundClock::new();
        clock.start(5);

        for expected in (1..5).rev() {
            assert_eq!(clock.tick(), ClockState::Running);
            assert_eq!(clock.remaining(), expected);
        }
        assert_eq!(clock.tick(), ClockState::Expired);
        assert_eq!(clock.remaining(), 0);
        assert_eq!(clock.elapsed(), 5);
    }

    #[test]
    fn test_idle_clock_ignores_ticks() {
        let mut clock = RoundClock::new();
        assert_eq!(clock.tick(), ClockState::Idle);
        assert_eq!(clock.remaining(), 0);
    }

    #[test]
    fn test_pause_resume() {
        let mut clock = RoundClock::new();
        clock.start(10);
        clock.tick();

        assert!(clock.pause());
        assert!(!clock.pause());
        for _ in 0..5 {
            assert_eq!(clock.tick(), ClockState::Paused);
        }
        assert_eq!(clock.remaining(), 9);

        assert!(clock.resume());
        assert!(!clock.resume());
        clock.tick();
        assert_eq!(clock.remaining(), 8);
        assert_eq!(clock.elapsed(), 2);
    }

    #[test]
    fn test_expired_cannot_pause_or_tick() {
        let mut clock = RoundClock::new();
        clock.start(1);
        clock.tick();

        assert!(clock.is_expired());
        assert!(!clock.pause());
        assert_eq!(clock.tick(), ClockState::Expired);
        assert_eq!(clock.remaining(), 0);
    }

    #[test]
    fn test_restart_after_expiry() {
        let mut clock = RoundClock::new();
        clock.start(1);
        clock.tick();
        clock.start(3);

        assert_eq!(clock.state(), ClockState::Running);
        assert_eq!(clock.remaining(), 3);
        assert_eq!(clock.elapsed(), 0);
    }

    #[test]
    fn test_stop_halts_live_time() {
        let mut clock = RoundClock::new();
        clock.start(10);
        clock.tick();
        clock.pause();

        assert!(clock.stop());
        assert!(!clock.stop());
        assert_eq!(clock.state(), ClockState::Stopped);
        assert!(!clock.resume());
        assert_eq!(clock.tick(), ClockState::Stopped);
        assert_eq!(clock.remaining(), 9);
        assert_eq!(clock.elapsed(), 1);
    }

    #[test]
    fn test_zero_duration_expires_immediately() {
        let mut clock = RoundClock::new();
        clock.start(0);
        assert!(clock.is_expired());
    }
}

//! Time inputs for a round.
//!
//! Neither type owns a timer. The host calls `tick()` once per second,
//! which keeps time advancement deterministic and testable.

pub mod countdown;
pub mod round_clock;

pub use countdown::{Countdown, CountdownStep};
pub use round_clock::{ClockState, RoundClock};

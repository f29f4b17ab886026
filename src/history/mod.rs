//! Score history: where finished matches go.

pub mod recorder;

pub use recorder::{HistoryStats, ScoreHistory, SessionRecorder, HISTORY_CAP};

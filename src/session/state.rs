//! Session lifecycle states.

use serde::{Deserialize, Serialize};

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every pair was matched before the countdown ran out.
    Won,
    /// The countdown reached zero with pairs remaining.
    TimedOut,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won => f.write_str("won"),
            Outcome::TimedOut => f.write_str("timed out"),
        }
    }
}

/// Where a session is in its lifecycle.
///
/// ```text
/// Idle --start--> Playing --2nd card--> Evaluating --settle--> Playing
/// Playing|Evaluating --pause--> Paused --resume--> Playing|Evaluating
/// Evaluating --final pair--> Ended(Won)
/// Playing|Evaluating --countdown hits zero--> Ended(TimedOut)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// No session has been started.
    #[default]
    Idle,
    /// Waiting for the player to pick a card.
    Playing,
    /// Two cards are face-up and the outcome is settling.
    Evaluating,
    /// Countdown frozen.
    Paused,
    /// Terminal until a new session starts.
    Ended(Outcome),
}

impl SessionState {
    /// Does the countdown run in this state?
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, SessionState::Playing | SessionState::Evaluating)
    }

    /// Has the session ended?
    #[must_use]
    pub fn is_ended(self) -> bool {
        matches!(self, SessionState::Ended(_))
    }

    /// The outcome, if the session has ended.
    #[must_use]
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            SessionState::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Idle => f.write_str("idle"),
            SessionState::Playing => f.write_str("playing"),
            SessionState::Evaluating => f.write_str("evaluating"),
            SessionState::Paused => f.write_str("paused"),
            SessionState::Ended(outcome) => write!(f, "ended ({})", outcome),
        }
    }
}

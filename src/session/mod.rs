//! The game session: a single-threaded state machine over a board.
//!
//! ## Key Components
//!
//! - [`GameSession`]: Owns board, selection, score, countdown, and timeline
//! - [`SessionState`] / [`Outcome`]: Lifecycle states
//! - [`SessionEvent`] / [`SessionObserver`]: Boundary to a renderer
//!
//! ## Example Usage
//!
//! ```
//! use memory_match::core::{SessionConfig, ThemeId};
//! use memory_match::session::{GameSession, Outcome, SessionState};
//!
//! let mut session = GameSession::with_seed(7);
//! session.start(SessionConfig::new(2, 2, 3, ThemeId::dark())).unwrap();
//!
//! // Three seconds with no matches
//! session.advance(3_000);
//! assert_eq!(session.state(), SessionState::Ended(Outcome::TimedOut));
//! ```

mod event;
mod game;
mod state;

pub use event::{EventLog, SessionEvent, SessionObserver, TracingObserver};
pub use game::{GameSession, SessionSnapshot, SessionTask, TICK_INTERVAL_MS};
pub use state::{Outcome, SessionState};

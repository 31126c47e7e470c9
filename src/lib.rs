//! # memory-match
//!
//! Deterministic core of a card-pairs memory game.
//!
//! ## Design Principles
//!
//! 1. **Owned Sessions**: A `GameSession` is a plain value. No globals;
//!    any number of sessions can run side by side.
//!
//! 2. **Logical Time**: Settle delays and the countdown are entries on a
//!    per-session timeline. Callers advance time explicitly, so every run
//!    is reproducible from a seed and a sequence of inputs.
//!
//! 3. **Renderer at Arm's Length**: Transitions emit `SessionEvent`s to
//!    observers. Drawing, animation, and themes live outside the state
//!    machine.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, deterministic RNG
//! - `cards`: Cards and the board
//! - `schedule`: Logical-time event queue
//! - `session`: The game state machine and observer boundary
//! - `theme`: Renderer styles keyed by theme ID

pub mod core;
pub mod cards;
pub mod schedule;
pub mod session;
pub mod theme;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameRng, GameRngState, InvalidConfig, Result, SessionConfig, SurfaceSize, ThemeId,
};

pub use crate::cards::{Board, Card, CardId, PairValue};

pub use crate::schedule::{Fired, ScheduleToken, Timeline};

pub use crate::session::{
    EventLog, GameSession, Outcome, SessionEvent, SessionObserver, SessionSnapshot, SessionState,
    SessionTask, TracingObserver,
};

pub use crate::theme::{FontStyle, ThemeRegistry, ThemeStyle};

//! Core types: configuration, errors, and deterministic RNG.
//!
//! Everything here is independent of the session state machine and can be
//! used on its own (e.g. to validate a config file before starting a game).

pub mod config;
pub mod error;
pub mod rng;

pub use config::{SessionConfig, SurfaceSize, ThemeId, DEFAULT_SETTLE_DELAY_MS};
pub use error::{GameError, InvalidConfig, Result};
pub use rng::{GameRng, GameRngState};

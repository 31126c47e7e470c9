//! Error types.
//!
//! Only configuration can fail. Everything a player can do to a live
//! session (stale clicks, double pause, unknown card ids) is a silent no-op.

use thiserror::Error;

/// Why a session config was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidConfig {
    #[error("board needs at least one row and one column (got {rows}x{columns})")]
    ZeroDimension { rows: u16, columns: u16 },

    #[error("a {rows}x{columns} board has an odd number of cards and cannot be fully paired")]
    OddCardCount { rows: u16, columns: u16 },

    #[error("time limit must be at least one second")]
    ZeroTimeLimit,
}

/// Main error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] InvalidConfig),

    #[error("config file error: {message}")]
    ConfigFile { message: String },
}

pub type Result<T> = std::result::Result<T, GameError>;

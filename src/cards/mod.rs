//! Card system: cards and the board that holds them.
//!
//! ## Key Types
//!
//! - `CardId`: Positional identifier (index into the board)
//! - `PairValue`: Value shared by exactly two cards
//! - `Card`: Pair value plus face-up and matched flags
//! - `Board`: Ordered grid of cards, generated and shuffled per session

pub mod board;
pub mod card;

pub use board::Board;
pub use card::{Card, CardId, PairValue};

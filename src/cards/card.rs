//! Cards - identity, pair value, and face state.
//!
//! A card's identity is its position on the board. Two cards form a pair
//! when they share a `PairValue`.

use serde::{Deserialize, Serialize};

/// Positional card identifier (index into the board).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Board index for this card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Value shared by exactly two cards on a board. Values start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairValue(pub u32);

impl PairValue {
    /// Create a new pair value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Position on the board.
    pub id: CardId,

    /// Value shared with exactly one other card.
    pub pair_value: PairValue,

    /// Is the card currently showing its value?
    pub is_face_up: bool,

    /// Has the card been matched with its partner?
    pub is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, pair_value: PairValue) -> Self {
        Self {
            id,
            pair_value,
            is_face_up: false,
            is_matched: false,
        }
    }

    /// Can the player still pick this card?
    #[must_use]
    pub const fn is_selectable(&self) -> bool {
        !self.is_face_up && !self.is_matched
    }

    /// Does this card pair with `other`?
    ///
    /// A card never pairs with itself.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.pair_value == other.pair_value
    }
}

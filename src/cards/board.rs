//! The board: an ordered grid of cards.
//!
//! Boards are generated from a validated `SessionConfig`: pair values
//! `1..=n` are laid out twice each, then shuffled with the session RNG.
//! Cards are stored in an `im::Vector` so snapshots handed to a renderer
//! share structure with the live board.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, PairValue};
use crate::core::error::Result;
use crate::core::{GameRng, SessionConfig};

/// An ordered grid of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: u16,
    columns: u16,
    cards: Vector<Card>,
}

impl Board {
    /// Generate and shuffle a board for `config`.
    ///
    /// Fails with `InvalidConfig` when the config cannot be fully paired.
    pub fn generate(config: &SessionConfig, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;

        let mut values = Self::pair_values(config.pair_count());
        rng.shuffle(&mut values);

        Ok(Self::from_values(config.rows, config.columns, values))
    }

    /// Each of `1..=pair_count` twice, in order.
    #[must_use]
    pub fn pair_values(pair_count: usize) -> Vec<PairValue> {
        (1..=pair_count as u32)
            .flat_map(|v| [PairValue::new(v), PairValue::new(v)])
            .collect()
    }

    /// Lay out face-down cards with the given values, in order.
    ///
    /// The caller is responsible for `values` forming complete pairs.
    #[must_use]
    pub fn from_values(rows: u16, columns: u16, values: Vec<PairValue>) -> Self {
        let cards = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Card::new(CardId::new(i as u32), value))
            .collect();

        Self {
            rows,
            columns,
            cards,
        }
    }

    #[must_use]
    pub fn rows(&self) -> u16 {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs needed to win.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Row and column of a card, or `None` for an unknown ID.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<(u16, u16)> {
        if id.index() >= self.cards.len() || self.columns == 0 {
            return None;
        }
        let columns = usize::from(self.columns);
        Some(((id.index() / columns) as u16, (id.index() % columns) as u16))
    }

    /// Cards still in play.
    pub fn unmatched(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| !c.is_matched)
    }

    /// The other card carrying the same pair value.
    #[must_use]
    pub fn partner_of(&self, id: CardId) -> Option<CardId> {
        let card = self.get(id)?;
        self.cards.iter().find(|c| card.pairs_with(c)).map(|c| c.id)
    }

    pub(crate) fn set_face_up(&mut self, id: CardId, face_up: bool) {
        if let Some(card) = self.get_mut(id) {
            card.is_face_up = face_up;
        }
    }

    pub(crate) fn set_matched(&mut self, id: CardId) {
        if let Some(card) = self.get_mut(id) {
            card.is_face_up = true;
            card.is_matched = true;
        }
    }
}

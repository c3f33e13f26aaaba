//! The full 81-card deck and deterministic dealing.
//!
//! Real boards come from the detector. A deck is for simulations, tests and
//! benches: shuffle with a seed, deal a board, and every run sees the same
//! cards in the same positions.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::attributes::{Attribute, Color, Count, Fill, Shape};
use super::card::Card;
use super::locator::Locator;
use crate::solver::Board;

/// Columns used when laying out dealt cards.
const DEAL_COLUMNS: usize = 3;

/// Every distinct card exactly once.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Number of distinct cards.
    pub const SIZE: usize = 81;

    /// All cards in code order (count, then color, fill, shape).
    #[must_use]
    pub fn ordered() -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for count in Count::ALL {
            for color in Color::ALL {
                for fill in Fill::ALL {
                    for shape in Shape::ALL {
                        cards.push(Card::from_attributes(
                            count,
                            color,
                            fill,
                            shape,
                            Locator::default(),
                        ));
                    }
                }
            }
        }
        Self { cards }
    }

    /// All cards, shuffled by a ChaCha8 stream seeded with `seed`.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::ordered();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        deck.cards.shuffle(&mut rng);
        deck
    }

    /// Cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, top of the deck first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Take up to `n` cards from the top and lay them out on a grid.
    ///
    /// Dealt cards get locators tiling the unit square in rows of three, so a
    /// dealt board looks like a detector result.
    pub fn deal(&mut self, n: usize) -> Board {
        let n = n.min(self.cards.len());
        let rows = n.div_ceil(DEAL_COLUMNS).max(1);
        let width = 1.0 / DEAL_COLUMNS as f32;
        let height = 1.0 / rows as f32;

        self.cards
            .drain(..n)
            .enumerate()
            .map(|(i, card)| {
                let col = (i % DEAL_COLUMNS) as f32;
                let row = (i / DEAL_COLUMNS) as f32;
                card.with_locator(Locator::new(col * width, row * height, width, height))
            })
            .collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::ordered()
    }
}

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck that owns its randomness source.
///
/// The deck is shuffled on construction. Cards are drawn from the top
/// (the end of the backing vector) and never come back until [`Deck::reset`].
#[derive(Debug)]
pub struct Deck<R = ChaCha20Rng> {
    cards: Vec<Card>,
    rng: R,
}

impl Deck<ChaCha20Rng> {
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Deck<R> {
    pub fn with_rng(rng: R) -> Self {
        let mut deck = Self {
            cards: full_deck(),
            rng,
        };
        deck.shuffle();
        deck
    }

    /// Fisher-Yates permutation of whatever is left in the deck.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Restores all 52 cards in unshuffled order.
    pub fn reset(&mut self) {
        self.cards = full_deck();
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn burn(&mut self) -> Result<(), GameError> {
        self.draw().map(|_| ())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

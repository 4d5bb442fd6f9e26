use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Shuffles `cards` in place with a Fisher–Yates pass driven by `rng`.
///
/// Every index `i` swaps with a uniformly chosen `j` in `0..=i`, so every permutation is
/// reachable and equally likely for a uniform source.
pub fn shuffle_with<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
}

/// An ordered sequence of cards consumed front-to-back.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// The 52 cards in their fixed construction order.
    pub fn unshuffled() -> Self {
        Self::from_cards(full_deck())
    }

    /// A freshly built deck shuffled with the given random source.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        shuffle_with(&mut cards, rng);
        Self::from_cards(cards)
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    /// A deck that deals exactly `cards` in order. Used for stacked decks in tests and replays.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, position: 0 }
    }

    pub fn deal_card(&mut self) -> Result<Card, GameError> {
        let card = self
            .cards
            .get(self.position)
            .copied()
            .ok_or(GameError::ExhaustedDeck {
                requested: 1,
                remaining: 0,
            })?;
        self.position += 1;
        Ok(card)
    }

    /// Deals `n` cards, or none at all if fewer than `n` remain.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(GameError::ExhaustedDeck {
                requested: n,
                remaining,
            });
        }
        let out = self.cards[self.position..self.position + n].to_vec();
        self.position += n;
        Ok(out)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    /// Cards not yet dealt, in dealing order.
    pub fn undealt(&self) -> &[Card] {
        &self.cards[self.position.min(self.cards.len())..]
    }
}

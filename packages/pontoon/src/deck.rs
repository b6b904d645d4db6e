use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Card, GameError, Rank, Suit};

/// An ordered pile of cards, consumed from the top. The top of the deck is
/// the last element, so dealing is a `pop`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The full 52-card deck in a fixed enumeration order: suit-major,
    /// rank-minor, matching the declaration order of `Suit` and `Rank`.
    /// No randomness here.
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// A deck with a known order, mostly useful for scripting deals in
    /// tests. The last card in `cards` is dealt first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Uniform in-place permutation (Fisher-Yates).
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::DeckExhausted)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

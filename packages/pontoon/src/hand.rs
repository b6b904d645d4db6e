use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Card;

/// Calculate the blackjack value of a set of cards. Aces start at 11;
/// while the total exceeds 21 and an ace is still counted high, one ace
/// is demoted to 1 (subtract 10). A hand can still exceed 21 once every
/// ace has been demoted; that is a bust and is the caller's problem.
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut total: u8 = 0;
    let mut high_aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            high_aces += 1;
        }
        total += card.value();
    }

    while total > 21 && high_aces > 0 {
        total -= 10;
        high_aces -= 1;
    }

    total
}

/// The cards held by one side of the table. Grows only by appending a
/// dealt card; never shrinks within a round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// A natural: exactly two cards totaling 21.
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}

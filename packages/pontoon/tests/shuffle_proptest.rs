use pontoon::{hand_value, Card, Deck, Rank, Suit};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn arb_card() -> impl Strategy<Value = Card> {
    (0..Suit::ALL.len(), 0..Rank::ALL.len())
        .prop_map(|(s, r)| Card::new(Suit::ALL[s], Rank::ALL[r]))
}

fn sorted_cards(deck: &mut Deck) -> Vec<Card> {
    let mut cards = Vec::with_capacity(deck.len());
    while let Ok(card) = deck.draw() {
        cards.push(card);
    }
    cards.sort();
    cards
}

proptest! {
    /// Shuffling with any seed permutes the deck: same 52 cards, same
    /// counts, nothing gained or lost.
    #[test]
    fn shuffle_preserves_the_multiset(seed: u64) {
        let mut deck = Deck::standard();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(deck.len(), 52);
        prop_assert_eq!(
            sorted_cards(&mut deck),
            sorted_cards(&mut Deck::standard())
        );
    }

    /// The ace correction only ever subtracts whole tens, never more than
    /// one per ace, and stops as soon as the total fits under 22.
    #[test]
    fn hand_value_respects_ace_bounds(cards in prop::collection::vec(arb_card(), 0..12)) {
        let aces = cards.iter().filter(|c| c.is_ace()).count() as u8;
        let low_sum: u8 = cards
            .iter()
            .map(|c| if c.is_ace() { 1 } else { c.value() })
            .sum();

        let value = hand_value(&cards);
        prop_assert!(value >= low_sum);
        prop_assert!(value <= low_sum + 10 * aces);
        prop_assert_eq!((value - low_sum) % 10, 0);
        // A value over 21 means every ace has already been demoted.
        if value > 21 {
            prop_assert_eq!(value, low_sum);
        }
    }
}

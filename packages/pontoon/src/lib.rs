mod card;
mod deck;
mod error;
mod hand;
mod round;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use error::GameError;
pub use hand::{hand_value, Hand};
pub use round::{Engine, RoundObserver, RoundState, RoundStatus};

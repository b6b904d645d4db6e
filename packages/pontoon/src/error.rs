use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A deal was attempted against an empty deck. Non-fatal: the card is
    /// simply not dealt and the round stays valid.
    #[error("the deck is empty, cannot deal more cards")]
    DeckExhausted,
}

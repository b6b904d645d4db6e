use log::warn;
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

use crate::{Deck, Hand};

/// Three-way presentation status derived from the round flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    InProgress,
    PlayerWins,
    HouseWins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Seat {
    Player,
    House,
}

/// Everything one round owns: the deck being consumed, both hands and the
/// resolution flags. `player_won` is meaningful only once `is_over` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    deck: Deck,
    player: Hand,
    house: Hand,
    is_over: bool,
    player_won: bool,
}

impl RoundState {
    fn new(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            house: Hand::new(),
            is_over: false,
            player_won: false,
        }
    }

    pub fn player(&self) -> &Hand {
        &self.player
    }

    pub fn house(&self) -> &Hand {
        &self.house
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn player_won(&self) -> bool {
        self.player_won
    }

    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    pub fn status(&self) -> RoundStatus {
        if !self.is_over {
            RoundStatus::InProgress
        } else if self.player_won {
            RoundStatus::PlayerWins
        } else {
            RoundStatus::HouseWins
        }
    }

    /// Pure outcome pass, run after every dealing event. Order matters:
    /// player bust loses before the house bust is considered, totals are
    /// compared only once the round has been marked resolved by a stand,
    /// and a two-card 21 settles the round last, player first.
    ///
    /// Equal totals after a stand go to the house; this ruleset has no
    /// push.
    fn evaluate_outcome(&mut self) {
        let player_value = self.player.value();
        let house_value = self.house.value();

        if player_value > 21 {
            self.is_over = true;
            self.player_won = false;
        } else if house_value > 21 {
            self.is_over = true;
            self.player_won = true;
        } else if self.is_over {
            self.player_won = player_value > house_value;
        }

        if self.player.is_natural() {
            self.is_over = true;
            self.player_won = true;
        } else if self.house.is_natural() {
            self.is_over = true;
            self.player_won = false;
        }
    }
}

/// Notified once after every evaluation pass, with enough state to redraw
/// both hands, both values and the status message.
pub trait RoundObserver {
    fn round_updated(&mut self, state: &RoundState);
}

/// The game engine. Owns the deck, both hands and the RNG for one round
/// at a time; all mutation goes through `start_round`, `hit` and `stand`,
/// each of which runs event -> mutate -> evaluate -> notify to completion.
pub struct Engine<R: Rng> {
    rng: R,
    state: RoundState,
    observer: Option<Box<dyn RoundObserver>>,
}

impl Engine<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(thread_rng())
    }
}

impl Default for Engine<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Engine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            state: RoundState::new(Deck::standard()),
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: Box<dyn RoundObserver>) {
        self.observer = Some(observer);
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Discard the previous round and deal a fresh one: new shuffled deck,
    /// four cards alternating player, house, player, house. Naturals can
    /// resolve the round before the player ever acts.
    pub fn start_round(&mut self) {
        let mut deck = Deck::standard();
        deck.shuffle(&mut self.rng);
        self.begin_with(deck);
    }

    fn begin_with(&mut self, deck: Deck) {
        self.state = RoundState::new(deck);
        for seat in [Seat::Player, Seat::House, Seat::Player, Seat::House] {
            self.deal(seat);
        }
        self.state.evaluate_outcome();
        self.notify();
    }

    /// Deal one card to the player. No-op once the round is resolved.
    pub fn hit(&mut self) {
        if self.state.is_over {
            return;
        }
        self.deal(Seat::Player);
        self.state.evaluate_outcome();
        self.notify();
    }

    /// End the player's turn: the house draws to 17 or better (fixed
    /// policy, no decisions), then the round is resolved and scored.
    /// No-op once the round is resolved.
    pub fn stand(&mut self) {
        if self.state.is_over {
            return;
        }
        while self.state.house.value() < 17 && !self.state.deck.is_empty() {
            self.deal(Seat::House);
        }
        self.state.is_over = true;
        self.state.evaluate_outcome();
        self.notify();
    }

    /// Move the top card of the deck to a hand. Exhaustion is reported
    /// and the deal dropped; the hand and the round stay valid. A legal
    /// round never consumes all 52 cards, so this path is unreachable in
    /// normal play.
    fn deal(&mut self, seat: Seat) {
        match self.state.deck.draw() {
            Ok(card) => match seat {
                Seat::Player => self.state.player.push(card),
                Seat::House => self.state.house.push(card),
            },
            Err(err) => warn!("no card dealt to {seat:?}: {err}"),
        }
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.round_updated(&self.state);
        }
    }
}

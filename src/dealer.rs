//! Deck ownership, shuffling and dealing.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, standard_deck};
use crate::player::Players;
use crate::table::Table;

/// Number of cards staked on the table when a game starts.
pub const CARDS_ON_INIT: usize = 4;

/// Number of cards dealt to each player per deal.
pub const CARDS_PER_TURN: usize = 6;

/// What a dealer turn did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deal {
    /// The deck was empty: a fresh deck was shuffled, the table staked and
    /// both players dealt.
    NewGame {
        /// The cards staked on the table.
        stake: Vec<Card>,
    },
    /// Both players were dealt from the remaining deck.
    Redeal,
}

/// Holds the remaining deck.
#[derive(Debug, Clone)]
pub struct Dealer {
    /// Remaining cards; dealing consumes from the front.
    deck: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Dealer {
    /// Creates a dealer with an empty deck and a seeded shuffler.
    ///
    /// The first turn starts a new game.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            deck: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a shuffled full deck.
    fn shuffled_deck(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = standard_deck();
        cards.shuffle(rng);
        cards
    }

    /// Returns the remaining cards in dealing order.
    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Returns the number of cards left to deal.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Takes the dealer's turn.
    ///
    /// With an empty deck this starts a new game: hands and table are
    /// cleared, a full deck is shuffled, four cards are staked and each
    /// player is dealt six. Otherwise each player is dealt six more cards.
    pub fn take_turn(&mut self, table: &mut Table, players: &mut Players) -> Deal {
        if self.deck.is_empty() {
            self.new_game(table, players)
        } else {
            self.deal(players);
            log::debug!("redealt, {} cards left in the deck", self.deck.len());
            Deal::Redeal
        }
    }

    fn new_game(&mut self, table: &mut Table, players: &mut Players) -> Deal {
        players.human.hand.clear();
        players.computer.hand.clear();
        table.clear();

        self.deck = Self::shuffled_deck(&mut self.rng);

        let stake = self.draw(CARDS_ON_INIT);
        table.stake(stake.iter().copied());
        self.deal(players);

        log::debug!("new game dealt, {} cards left in the deck", self.deck.len());

        Deal::NewGame { stake }
    }

    fn deal(&mut self, players: &mut Players) {
        let human = self.draw(CARDS_PER_TURN);
        players.human.hand.extend(human);
        let computer = self.draw(CARDS_PER_TURN);
        players.computer.hand.extend(computer);
    }

    /// Draws up to `count` cards from the front of the deck.
    fn draw(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.deck.len());
        self.deck.drain(..count).collect()
    }
}

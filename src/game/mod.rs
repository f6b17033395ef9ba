//! Game engine and state management.

use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use alloc::string::String;
use alloc::vec::Vec;

use crate::sync::Mutex;

use crate::card::Card;
use crate::dealer::Dealer;
use crate::error::PlayError;
use crate::options::GameOptions;
use crate::player::{PlayerId, Players};
use crate::result::{GameResult, ScoreBoard};
use crate::table::{Table, TableSummary};

mod runner;
pub mod scoring;
pub mod state;
mod turns;

pub use state::{GameState, Seat};
pub use turns::{Step, Turn, TurnOutcome};

/// Number of counted turns in a game: four deals and 48 card plays.
pub const TURNS_PER_GAME: u8 = 52;

/// An Indigo game between a human and the computer.
///
/// The game owns the dealer, the table and both players for its whole
/// lifetime. It can be driven step by step with [`Game::advance`] and
/// [`Game::play_human`], or run to completion against input and output
/// collaborators with [`Game::run`].
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// The dealer and the remaining deck.
    pub dealer: Mutex<Dealer>,
    /// The shared table pile.
    pub table: Mutex<Table>,
    /// Both players' hands and won cards.
    pub players: Mutex<Players>,
    /// Turn rotation fixed at start.
    rotation: Mutex<[Seat; 3]>,
    /// Who started the game.
    starting_player: Mutex<PlayerId>,
    /// Index into the rotation, including skipped dealer seats.
    turn_number: AtomicUsize,
    /// Turns actually taken.
    turn_count: AtomicU8,
    /// Result, once the game is finished.
    result: Mutex<Option<GameResult>>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The seed drives every shuffle, so two games with the same seed and
    /// the same human choices play out identically.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::NotStarted);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let players = Players::new(options.human_name.clone(), options.computer_name.clone());

        Self {
            options,
            state: Mutex::new(GameState::NotStarted),
            dealer: Mutex::new(Dealer::new(seed)),
            table: Mutex::new(Table::new()),
            players: Mutex::new(players),
            rotation: Mutex::new(Seat::rotation(PlayerId::Human)),
            starting_player: Mutex::new(PlayerId::Human),
            turn_number: AtomicUsize::new(0),
            turn_count: AtomicU8::new(0),
            result: Mutex::new(None),
        }
    }

    /// Starts the game with the given player going first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has already been started.
    pub fn start(&self, first: PlayerId) -> Result<(), PlayError> {
        let mut state = self.state.lock();
        if *state != GameState::NotStarted {
            return Err(PlayError::AlreadyStarted);
        }

        *self.rotation.lock() = Seat::rotation(first);
        *self.starting_player.lock() = first;
        *state = GameState::InProgress;
        drop(state);

        log::info!("game started, {first} plays first");
        Ok(())
    }

    /// Ends the game at the human player's request.
    ///
    /// No card is played and nothing else changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress.
    pub fn abort(&self) -> Result<(), PlayError> {
        let mut state = self.state.lock();
        if *state != GameState::InProgress {
            return Err(PlayError::InvalidState);
        }
        *state = GameState::Aborted;
        drop(state);

        log::info!("game aborted after {} turns", self.turn_count());
        Ok(())
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns who started the game.
    pub fn starting_player(&self) -> PlayerId {
        *self.starting_player.lock()
    }

    /// Returns the number of turns taken so far.
    ///
    /// Dealer seats skipped because a player still holds cards are not
    /// counted.
    pub fn turn_count(&self) -> u8 {
        self.turn_count.load(Ordering::SeqCst)
    }

    /// Returns the seat that acts next.
    ///
    /// Returns `None` unless the game is in progress.
    pub fn current_seat(&self) -> Option<Seat> {
        if self.state() != GameState::InProgress {
            return None;
        }
        Some(self.peek_seat())
    }

    /// Returns the configured display name of the given player.
    pub fn player_name(&self, player: PlayerId) -> String {
        String::from(self.players.lock().get(player).name())
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.dealer.lock().cards_remaining()
    }

    /// Returns a copy of the given player's hand.
    pub fn hand(&self, player: PlayerId) -> Vec<Card> {
        self.players.lock().get(player).hand.cards().to_vec()
    }

    /// Returns a copy of the given player's won cards.
    pub fn won_cards(&self, player: PlayerId) -> Vec<Card> {
        self.players.lock().get(player).won.cards().to_vec()
    }

    /// Returns a copy of the cards on the table, oldest first.
    pub fn table_cards(&self) -> Vec<Card> {
        self.table.lock().cards().to_vec()
    }

    /// Returns the table's card count and top card.
    pub fn table_summary(&self) -> TableSummary {
        self.table.lock().summary()
    }

    /// Returns the running score, without bonus points.
    pub fn scoreboard(&self) -> ScoreBoard {
        scoring::scoreboard(&self.players.lock())
    }

    /// Returns the final result once the game is finished.
    pub fn result(&self) -> Option<GameResult> {
        *self.result.lock()
    }

    /// Returns the seat that acts next without moving the rotation.
    ///
    /// The dealer's seat is passed over while a player still holds cards.
    fn peek_seat(&self) -> Seat {
        let rotation = *self.rotation.lock();
        let index = self.turn_number.load(Ordering::SeqCst);
        let seat = rotation[index % rotation.len()];

        if seat == Seat::Dealer && self.players.lock().any_cards_in_hand() {
            return rotation[(index + 1) % rotation.len()];
        }

        seat
    }

    /// Moves the rotation past an idle dealer seat and returns the seat that
    /// acts next.
    fn next_seat(&self) -> Seat {
        let rotation = *self.rotation.lock();
        let index = self.turn_number.load(Ordering::SeqCst);

        if rotation[index % rotation.len()] == Seat::Dealer
            && self.players.lock().any_cards_in_hand()
        {
            self.turn_number.fetch_add(1, Ordering::SeqCst);
        }

        self.peek_seat()
    }

    fn ensure_in_progress(&self) -> Result<(), PlayError> {
        if self.state() != GameState::InProgress {
            return Err(PlayError::InvalidState);
        }
        Ok(())
    }
}

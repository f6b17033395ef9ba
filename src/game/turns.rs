use core::sync::atomic::Ordering;

use crate::card::Card;
use crate::dealer::Deal;
use crate::error::PlayError;
use crate::player::PlayerId;
use crate::result::GameResult;
use crate::strategy;
use crate::table::{Capture, TableSummary};

use super::{Game, GameState, Seat, TURNS_PER_GAME, scoring};

/// A card played by one of the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Who played.
    pub player: PlayerId,
    /// The card played.
    pub card: Card,
    /// The capture the card caused, if any.
    pub capture: Option<Capture>,
    /// The table after the play.
    pub table: TableSummary,
}

/// Outcome of a human turn taken against an input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The card was played and the game goes on.
    Continued(Turn),
    /// The exit sentinel was entered; nothing was played.
    Aborted,
}

/// What [`Game::advance`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The dealer dealt.
    Dealt(Deal),
    /// The computer played a card.
    Played(Turn),
    /// The human must choose a card with [`Game::play_human`].
    AwaitingHuman,
    /// The game is over.
    Finished(GameResult),
}

impl Game {
    /// Takes the next automatic turn.
    ///
    /// Dealer and computer turns are played here. When the human player is
    /// next, nothing changes and [`Step::AwaitingHuman`] is returned. Once
    /// the last turn has been taken, every call returns the final result.
    ///
    /// # Errors
    ///
    /// Returns an error if the game has not been started or was aborted.
    pub fn advance(&self) -> Result<Step, PlayError> {
        if let Some(result) = self.result() {
            return Ok(Step::Finished(result));
        }
        self.ensure_in_progress()?;

        match self.next_seat() {
            Seat::Dealer => Ok(Step::Dealt(self.dealer_turn())),
            Seat::Player(PlayerId::Human) => Ok(Step::AwaitingHuman),
            Seat::Player(PlayerId::Computer) => self.computer_turn().map(Step::Played),
        }
    }

    /// Plays the card at the given zero-based index of the human's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in progress, it is not the human
    /// player's turn, or there is no card at `index`.
    pub fn play_human(&self, index: usize) -> Result<Turn, PlayError> {
        self.ensure_in_progress()?;

        if self.next_seat() != Seat::Player(PlayerId::Human) {
            return Err(PlayError::NotYourTurn);
        }

        self.play_card(PlayerId::Human, index)
    }

    fn dealer_turn(&self) -> Deal {
        let mut dealer = self.dealer.lock();
        let mut table = self.table.lock();
        let mut players = self.players.lock();

        let deal = dealer.take_turn(&mut table, &mut players);
        drop(players);
        drop(table);
        drop(dealer);

        self.complete_turn();
        deal
    }

    fn computer_turn(&self) -> Result<Turn, PlayError> {
        let table = self.table.lock();
        let players = self.players.lock();
        let hand = players.computer.hand.cards();

        let index = strategy::choose_card(hand, table.top()).ok_or(PlayError::InvalidState)?;
        log::debug!(
            "computer chooses {} from {} cards, top card {:?}",
            hand[index],
            hand.len(),
            table.top()
        );
        drop(players);
        drop(table);

        self.play_card(PlayerId::Computer, index)
    }

    /// Moves one card from the player's hand to the table and checks for a
    /// capture.
    fn play_card(&self, id: PlayerId, index: usize) -> Result<Turn, PlayError> {
        let mut table = self.table.lock();
        let mut players = self.players.lock();
        let player = players.get_mut(id);

        let card = player
            .hand
            .take(index)
            .ok_or(PlayError::CardNotFound { index })?;
        table.play(card);
        let capture = table.check_capture(player);

        log::debug!("{id} plays {card}");

        let turn = Turn {
            player: id,
            card,
            capture,
            table: table.summary(),
        };
        drop(players);
        drop(table);

        self.complete_turn();
        Ok(turn)
    }

    /// Counts a turn, moves the rotation on and scores the game after the
    /// last turn.
    fn complete_turn(&self) {
        self.turn_number.fetch_add(1, Ordering::SeqCst);
        let taken = self.turn_count.fetch_add(1, Ordering::SeqCst) + 1;

        if taken == TURNS_PER_GAME {
            self.finish();
        }
    }

    fn finish(&self) {
        let starting = self.starting_player();
        let mut table = self.table.lock();
        let mut players = self.players.lock();

        let result = scoring::settle(&mut table, &mut players, starting);
        drop(players);
        drop(table);

        *self.result.lock() = Some(result);
        *self.state.lock() = GameState::Finished;

        log::info!(
            "game over: {} - {} ({} leftover cards to {})",
            result.score.human_points,
            result.score.computer_points,
            result.leftover_cards,
            result.leftover_to
        );
    }
}

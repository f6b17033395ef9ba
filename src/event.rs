//! Display requests sent to the output collaborator.

use alloc::vec::Vec;

use crate::card::Card;
use crate::player::PlayerId;
use crate::result::{GameResult, ScoreBoard};
use crate::table::{Capture, TableSummary};

/// Something the front end may want to show.
///
/// Events are read-only snapshots; the engine never formats text for a
/// particular surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game staked these cards on the table.
    InitialTable(Vec<Card>),
    /// The human player's hand before choosing, in display order.
    Hand(Vec<Card>),
    /// The computer player's hand before choosing.
    ComputerHand(Vec<Card>),
    /// The human is asked for a card number between 1 and `count`.
    ChooseCard {
        /// Number of cards in the hand.
        count: usize,
    },
    /// The human's answer could not be used and will be asked again.
    InvalidSelection,
    /// A card was played onto the table.
    CardPlayed {
        /// Who played it.
        player: PlayerId,
        /// The card played.
        card: Card,
    },
    /// A player took the table pile.
    Capture(Capture),
    /// The running score, without bonus points.
    Score(ScoreBoard),
    /// The table after a deal or a play.
    Table(TableSummary),
    /// The game ended; `None` when it was aborted.
    GameOver(Option<GameResult>),
}

/// Receives display requests from the engine.
pub trait Output {
    /// Handles one event.
    fn event(&mut self, event: &GameEvent);
}

/// Discards every event.
impl Output for () {
    fn event(&mut self, _event: &GameEvent) {}
}

/// Records every event, in order.
impl Output for Vec<GameEvent> {
    fn event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

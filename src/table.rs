//! The shared table pile and trick capture.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::player::{Player, PlayerId};

/// A capture of the whole table pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    /// The player who took the pile.
    pub player: PlayerId,
    /// Number of cards taken.
    pub cards: usize,
}

/// Read-only view of the table: card count and top card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSummary {
    /// Number of cards on the table.
    pub count: usize,
    /// The most recently played card, if any.
    pub top: Option<Card>,
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.top {
            Some(top) => write!(
                f,
                "{} cards on the table, and the top card is {top}",
                self.count
            ),
            None => f.write_str("No cards on the table"),
        }
    }
}

/// The pile of played, not yet captured cards.
#[derive(Debug, Clone, Default)]
pub struct Table {
    cards: Vec<Card>,
    last_capture: Option<PlayerId>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            last_capture: None,
        }
    }

    /// Places the initial stake on the table.
    pub fn stake<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Plays a card onto the pile.
    ///
    /// Any card may be played; there is no obligation to follow suit.
    pub fn play(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Checks whether the acting player takes the pile.
    ///
    /// The pile is taken when the last two cards played share a rank or a
    /// suit. The whole pile moves to the player's won cards, however deep it
    /// is, and the player becomes the last to capture.
    pub fn check_capture(&mut self, player: &mut Player) -> Option<Capture> {
        let [.., previous, top] = self.cards.as_slice() else {
            return None;
        };

        if !previous.matches(*top) {
            return None;
        }

        let cards = self.cards.len();
        player.won.extend(self.cards.drain(..));
        self.last_capture = Some(player.id());

        log::debug!("{} captures {cards} cards", player.id());

        Some(Capture {
            player: player.id(),
            cards,
        })
    }

    /// Returns the cards on the table, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the top card.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the player who most recently captured, if anyone has.
    #[must_use]
    pub const fn last_capture(&self) -> Option<PlayerId> {
        self.last_capture
    }

    /// Returns a summary for display.
    #[must_use]
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            count: self.cards.len(),
            top: self.top(),
        }
    }

    /// Removes and returns every card left on the table.
    pub fn take_all(&mut self) -> Vec<Card> {
        core::mem::take(&mut self.cards)
    }

    /// Clears the table and capture history for a new game.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.last_capture = None;
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.summary(), f)
    }
}

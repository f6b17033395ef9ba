//! Hands and won-card piles.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// A participant's hand.
///
/// Cards keep the order in which they were dealt; the order only matters
/// for display indexing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds dealt cards to the end of the hand.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes and returns the card at the given zero-based index.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new game.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// Cards a participant has captured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WonPile {
    cards: Vec<Card>,
}

impl WonPile {
    /// Creates a new empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds captured cards to the pile.
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Returns the captured cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of captured cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether nothing has been captured yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sums the rank weights of the captured cards.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.cards.iter().map(|card| card.points()).sum()
    }
}

//! Player seats and per-player state.

use alloc::string::String;
use core::fmt;

use crate::hand::{Hand, WonPile};

/// Identifies one of the two players.
///
/// The variant also decides how the player's card is chosen: the human
/// defers to external input, the computer runs the built-in strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    /// The human player.
    Human,
    /// The computer player.
    Computer,
}

impl PlayerId {
    /// Returns the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => f.write_str("human"),
            Self::Computer => f.write_str("computer"),
        }
    }
}

/// A player's state: name, hand and won cards.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    /// Cards in hand.
    pub hand: Hand,
    /// Cards captured so far.
    pub won: WonPile,
}

impl Player {
    /// Creates a player with an empty hand and pile.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Hand::new(),
            won: WonPile::new(),
        }
    }

    /// Returns the player's seat.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Both players of a game.
#[derive(Debug, Clone)]
pub struct Players {
    /// The human player.
    pub human: Player,
    /// The computer player.
    pub computer: Player,
}

impl Players {
    /// Creates both players with the given names.
    #[must_use]
    pub fn new(human_name: impl Into<String>, computer_name: impl Into<String>) -> Self {
        Self {
            human: Player::new(PlayerId::Human, human_name),
            computer: Player::new(PlayerId::Computer, computer_name),
        }
    }

    /// Returns the player in the given seat.
    #[must_use]
    pub const fn get(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::Human => &self.human,
            PlayerId::Computer => &self.computer,
        }
    }

    /// Returns the player in the given seat mutably.
    pub const fn get_mut(&mut self, id: PlayerId) -> &mut Player {
        match id {
            PlayerId::Human => &mut self.human,
            PlayerId::Computer => &mut self.computer,
        }
    }

    /// Returns whether either player still holds cards.
    #[must_use]
    pub fn any_cards_in_hand(&self) -> bool {
        !self.human.hand.is_empty() || !self.computer.hand.is_empty()
    }
}

//! Game state types.

use crate::player::PlayerId;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the starting player to be chosen.
    NotStarted,
    /// Turns are being taken.
    InProgress,
    /// Every card has been played and the game was scored.
    Finished,
    /// The human player asked to exit.
    Aborted,
}

/// A seat in the turn rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The dealer, who only acts when both hands are empty.
    Dealer,
    /// One of the players.
    Player(PlayerId),
}

impl Seat {
    /// Builds the fixed rotation: dealer, starting player, other player.
    #[must_use]
    pub const fn rotation(first: PlayerId) -> [Self; 3] {
        [Self::Dealer, Self::Player(first), Self::Player(first.opponent())]
    }
}

//! Error types for game operations.

use thiserror::Error;

/// Errors from parsing human input.
///
/// These are recovered by asking again and never end a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The text is not a card number.
    #[error("not a card number")]
    NotANumber,
    /// The card number is outside the hand.
    #[error("card {index} is not between 1 and {max}")]
    OutOfRange {
        /// The 1-based number that was given.
        index: usize,
        /// The number of cards in the hand.
        max: usize,
    },
    /// The answer is neither `yes` nor `no`.
    #[error("expected yes or no")]
    NotYesOrNo,
}

/// Errors from driving the game step by step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The game has already been started.
    #[error("game already started")]
    AlreadyStarted,
    /// The game is not in progress.
    #[error("game is not in progress")]
    InvalidState,
    /// It is not the human player's turn.
    #[error("not the human player's turn")]
    NotYourTurn,
    /// The card index is outside the hand.
    #[error("no card at index {index}")]
    CardNotFound {
        /// The zero-based index that was given.
        index: usize,
    },
}

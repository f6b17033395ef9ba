//! Parsing of external input and the input collaborator.

use alloc::string::String;

use crate::card::Card;
use crate::error::SelectionError;

/// Text that ends the game from a human turn.
pub const EXIT_SENTINEL: &str = "exit";

/// A parsed card choice from the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Play the card at this zero-based hand index.
    Card(usize),
    /// Abort the game.
    Exit,
}

/// Parses a human card choice.
///
/// The text is a 1-based index into the hand, or the exit sentinel.
///
/// # Errors
///
/// Returns an error if the text is not a number or is outside `1..=hand_len`.
pub fn parse_selection(text: &str, hand_len: usize) -> Result<Selection, SelectionError> {
    let text = text.trim();
    if text == EXIT_SENTINEL {
        return Ok(Selection::Exit);
    }

    let index: usize = text.parse().map_err(|_| SelectionError::NotANumber)?;
    if !(1..=hand_len).contains(&index) {
        return Err(SelectionError::OutOfRange {
            index,
            max: hand_len,
        });
    }

    Ok(Selection::Card(index - 1))
}

/// Parses the answer to "play first?".
///
/// # Errors
///
/// Returns an error unless the text is `yes` or `no`.
pub fn parse_play_first(text: &str) -> Result<bool, SelectionError> {
    match text.trim() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(SelectionError::NotYesOrNo),
    }
}

/// Supplies raw text answers from outside the engine.
///
/// Answers are validated by the engine; invalid answers are asked again.
pub trait Input {
    /// Answers whether the human plays first (`yes` or `no`).
    fn play_first(&mut self) -> String;

    /// Answers which card the human plays: a 1-based index into `hand`, or
    /// the exit sentinel.
    fn choose_card(&mut self, hand: &[Card]) -> String;
}

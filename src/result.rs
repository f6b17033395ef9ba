//! Score and game result types.

use crate::player::PlayerId;

/// Points awarded to the player holding more won cards.
pub const BONUS_POINTS: u32 = 3;

/// Points and won-card counts for both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    /// The human player's points.
    pub human_points: u32,
    /// The computer player's points.
    pub computer_points: u32,
    /// Number of cards the human player has won.
    pub human_cards: usize,
    /// Number of cards the computer player has won.
    pub computer_cards: usize,
}

impl ScoreBoard {
    /// Returns the points of the given player.
    #[must_use]
    pub const fn points(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::Human => self.human_points,
            PlayerId::Computer => self.computer_points,
        }
    }

    /// Returns the won-card count of the given player.
    #[must_use]
    pub const fn cards(&self, player: PlayerId) -> usize {
        match player {
            PlayerId::Human => self.human_cards,
            PlayerId::Computer => self.computer_cards,
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    /// Final scores, bonus included.
    pub score: ScoreBoard,
    /// Who received the bonus points.
    pub bonus: PlayerId,
    /// Who received the cards left on the table.
    pub leftover_to: PlayerId,
    /// Number of cards left on the table at the end.
    pub leftover_cards: usize,
    /// Who started the game.
    pub starting_player: PlayerId,
}

impl GameResult {
    /// Returns the player with more points, or `None` on a tie.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        if self.score.human_points > self.score.computer_points {
            Some(PlayerId::Human)
        } else if self.score.computer_points > self.score.human_points {
            Some(PlayerId::Computer)
        } else {
            None
        }
    }
}

/// How a game run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// All cards were played and the game was scored.
    Finished(GameResult),
    /// The human player entered the exit sentinel.
    Aborted,
}

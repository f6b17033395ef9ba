//! Game configuration options.

use alloc::string::String;

use crate::player::PlayerId;

/// Configuration options for a game.
///
/// The rules themselves are fixed; options only cover names and who plays
/// first. Use the builder pattern to customize options:
///
/// ```
/// use indigo::{GameOptions, PlayerId};
///
/// let options = GameOptions::default()
///     .with_human_name("Ada")
///     .with_first_player(PlayerId::Computer);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Display name of the human player.
    pub human_name: String,
    /// Display name of the computer player.
    pub computer_name: String,
    /// Who plays first. `None` asks the input collaborator.
    pub first_player: Option<PlayerId>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            human_name: String::from("Player"),
            computer_name: String::from("Computer"),
            first_player: None,
        }
    }
}

impl GameOptions {
    /// Sets the human player's name.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::GameOptions;
    ///
    /// let options = GameOptions::default().with_human_name("Ada");
    /// assert_eq!(options.human_name, "Ada");
    /// ```
    #[must_use]
    pub fn with_human_name(mut self, name: impl Into<String>) -> Self {
        self.human_name = name.into();
        self
    }

    /// Sets the computer player's name.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::GameOptions;
    ///
    /// let options = GameOptions::default().with_computer_name("Bot");
    /// assert_eq!(options.computer_name, "Bot");
    /// ```
    #[must_use]
    pub fn with_computer_name(mut self, name: impl Into<String>) -> Self {
        self.computer_name = name.into();
        self
    }

    /// Fixes who plays first, skipping the "play first?" question.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::{GameOptions, PlayerId};
    ///
    /// let options = GameOptions::default().with_first_player(PlayerId::Human);
    /// assert_eq!(options.first_player, Some(PlayerId::Human));
    /// ```
    #[must_use]
    pub fn with_first_player(mut self, first: PlayerId) -> Self {
        self.first_player = Some(first);
        self
    }
}

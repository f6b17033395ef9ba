//! An Indigo card game engine with optional `no_std` support.
//!
//! Indigo is played by a human and the computer over a shared table pile.
//! A player who plays a card matching the rank or suit of the card beneath
//! it takes the whole pile. The crate provides a [`Game`] type that deals,
//! sequences turns, runs the computer's strategy and scores the game.
//!
//! # Example
//!
//! ```
//! use indigo::{Game, GameOptions, PlayerId, Step};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start(PlayerId::Computer).unwrap();
//!
//! loop {
//!     match game.advance().unwrap() {
//!         Step::AwaitingHuman => {
//!             game.play_human(0).unwrap();
//!         }
//!         Step::Finished(result) => {
//!             println!("{:?}", result.score);
//!             break;
//!         }
//!         _ => {}
//!     }
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod dealer;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod player;
pub mod result;
pub mod strategy;
mod sync;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use dealer::{CARDS_ON_INIT, CARDS_PER_TURN, Deal, Dealer};
pub use error::{PlayError, SelectionError};
pub use event::{GameEvent, Output};
pub use game::{Game, GameState, Seat, Step, TURNS_PER_GAME, Turn, TurnOutcome};
pub use hand::{Hand, WonPile};
pub use input::{EXIT_SENTINEL, Input, Selection};
pub use options::GameOptions;
pub use player::{Player, PlayerId, Players};
pub use result::{BONUS_POINTS, Completion, GameResult, ScoreBoard};
pub use table::{Capture, Table, TableSummary};

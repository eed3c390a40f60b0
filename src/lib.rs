//! A Twenty-One card game engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs a match against an
//! automated dealer: dealing, the player's turn, the dealer's turn,
//! settlement, and a one-dollar wager per round until the player is broke,
//! rich, or walks away. Rendering and input live behind the
//! [`interface::Display`] and [`InputProvider`] traits.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{Game, GameOptions};
//!
//! let options = GameOptions::default();
//! let game = Game::new(options, 42);
//! let _ = game;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod interface;
pub mod options;
pub mod participant;
pub mod result;
pub mod score;

// Re-export main types
pub use card::{AceMode, Card, DECK_SIZE, Rank, Suit};
pub use deck::{CardSource, Deck};
pub use error::{EmptyDeckError, InvalidInputError, OptionsError, RoundError};
pub use game::{Game, Round, RoundState};
pub use hand::Hand;
pub use interface::{Decision, InputProvider, TableView};
pub use options::GameOptions;
pub use participant::{Dealer, Participant, Player};
pub use result::{MatchOutcome, MatchSummary, RoundResult, Side};
pub use score::TARGET_SCORE;

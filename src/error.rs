//! Error types for game operations.

use thiserror::Error;

/// A card was drawn from an empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck ran out mid-round.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// A collaborator could not make sense of the player's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized input")]
pub struct InvalidInputError;

/// Errors in a [`GameOptions`](crate::GameOptions) configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// The player would start broke.
    #[error("starting dollars must be greater than zero")]
    ZeroStartingDollars,
    /// The player would start rich.
    #[error("starting dollars ({starting}) must be below winning dollars ({winning})")]
    StartingNotBelowWinning {
        /// Configured starting dollars.
        starting: usize,
        /// Configured winning dollars.
        winning: usize,
    },
}

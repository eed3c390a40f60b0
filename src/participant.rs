//! The player and the dealer.

extern crate alloc;

use alloc::string::String;

use crate::hand::Hand;
use crate::options::GameOptions;

/// Behaviour shared by everyone sitting at the table.
pub trait Participant {
    /// Returns the name shown for this participant.
    fn name(&self) -> &str;

    /// Returns the participant's hand.
    fn hand(&self) -> &Hand;

    /// Returns the participant's hand for dealing into.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Returns the current score, hidden cards included.
    fn score(&self) -> u16 {
        self.hand().score()
    }

    /// Returns whether the participant has busted.
    fn is_busted(&self) -> bool {
        self.hand().is_busted()
    }

    /// Clears the participant's hand.
    fn reset_hand(&mut self) {
        self.hand_mut().clear();
    }
}

/// The human player and their wallet.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    hand: Hand,
    dollars: usize,
    starting_dollars: usize,
    winning_dollars: usize,
}

impl Player {
    /// Creates a player with the wallet bounds from `options`.
    #[must_use]
    pub fn new(options: &GameOptions) -> Self {
        Self {
            name: String::from(options.player_name),
            hand: Hand::new(),
            dollars: options.starting_dollars,
            starting_dollars: options.starting_dollars,
            winning_dollars: options.winning_dollars,
        }
    }

    /// Returns the wallet balance.
    #[must_use]
    pub const fn dollars(&self) -> usize {
        self.dollars
    }

    /// Returns the balance at which the player is rich.
    #[must_use]
    pub const fn winning_dollars(&self) -> usize {
        self.winning_dollars
    }

    /// Net result since the start of the match (positive = profit).
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "wallet values fit in isize")]
    pub const fn winnings(&self) -> isize {
        self.dollars as isize - self.starting_dollars as isize
    }

    /// Returns whether the wallet is empty.
    #[must_use]
    pub const fn is_broke(&self) -> bool {
        self.dollars == 0
    }

    /// Returns whether the wallet has reached the winning balance.
    #[must_use]
    pub const fn is_rich(&self) -> bool {
        self.dollars >= self.winning_dollars
    }

    /// Adds a dollar, never going above the winning balance.
    pub fn wins_bet(&mut self) {
        self.dollars = self.dollars.saturating_add(1).min(self.winning_dollars);
    }

    /// Takes a dollar, never going below zero.
    pub const fn loses_bet(&mut self) {
        self.dollars = self.dollars.saturating_sub(1);
    }
}

impl Participant for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// The automated dealer.
#[derive(Debug, Clone)]
pub struct Dealer {
    hand: Hand,
    hit_threshold: u16,
}

impl Dealer {
    /// Index of the card dealt face down (the dealer's second card).
    pub const HIDDEN_CARD_INDEX: usize = 1;

    /// Creates a dealer with the given hit threshold.
    #[must_use]
    pub const fn new(hit_threshold: u16) -> Self {
        Self {
            hand: Hand::new(),
            hit_threshold,
        }
    }

    /// Returns the score below which the dealer draws.
    #[must_use]
    pub const fn hit_threshold(&self) -> u16 {
        self.hit_threshold
    }

    /// Returns whether the dealer's score is below the hit threshold.
    #[must_use]
    pub fn is_below_threshold(&self) -> bool {
        self.score() < self.hit_threshold
    }
}

impl Participant for Dealer {
    fn name(&self) -> &str {
        "Dealer"
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

//! Game configuration options.

use crate::error::OptionsError;

/// Default score below which the dealer keeps drawing.
pub const DEFAULT_HIT_THRESHOLD: u16 = 17;

/// Default dollars in the player's wallet at the start of a match.
pub const DEFAULT_STARTING_DOLLARS: usize = 5;

/// Default wallet balance at which the player has won the match.
pub const DEFAULT_WINNING_DOLLARS: usize = 10;

/// Configuration options for a match.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::GameOptions;
///
/// let options = GameOptions::default()
///     .with_hit_threshold(16)
///     .with_starting_dollars(3)
///     .with_winning_dollars(6);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// The dealer draws while their score is below this.
    pub hit_threshold: u16,
    /// Dollars the player starts with.
    pub starting_dollars: usize,
    /// Dollars at which the player is rich and the match ends.
    pub winning_dollars: usize,
    /// Name shown for the player.
    pub player_name: &'static str,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hit_threshold: DEFAULT_HIT_THRESHOLD,
            starting_dollars: DEFAULT_STARTING_DOLLARS,
            winning_dollars: DEFAULT_WINNING_DOLLARS,
            player_name: "You",
        }
    }
}

impl GameOptions {
    /// Sets the dealer's hit threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_hit_threshold(18);
    /// assert_eq!(options.hit_threshold, 18);
    /// ```
    #[must_use]
    pub const fn with_hit_threshold(mut self, threshold: u16) -> Self {
        self.hit_threshold = threshold;
        self
    }

    /// Sets the player's starting dollars.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_dollars(2);
    /// assert_eq!(options.starting_dollars, 2);
    /// ```
    #[must_use]
    pub const fn with_starting_dollars(mut self, dollars: usize) -> Self {
        self.starting_dollars = dollars;
        self
    }

    /// Sets the balance at which the player wins the match.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_dollars(20);
    /// assert_eq!(options.winning_dollars, 20);
    /// ```
    #[must_use]
    pub const fn with_winning_dollars(mut self, dollars: usize) -> Self {
        self.winning_dollars = dollars;
        self
    }

    /// Sets the player's display name.
    #[must_use]
    pub const fn with_player_name(mut self, name: &'static str) -> Self {
        self.player_name = name;
        self
    }

    /// Checks that a match started with these options is not already over.
    ///
    /// # Errors
    ///
    /// Returns an error if the starting dollars are zero or not below the
    /// winning dollars.
    pub const fn validate(&self) -> Result<(), OptionsError> {
        if self.starting_dollars == 0 {
            return Err(OptionsError::ZeroStartingDollars);
        }
        if self.starting_dollars >= self.winning_dollars {
            return Err(OptionsError::StartingNotBelowWinning {
                starting: self.starting_dollars,
                winning: self.winning_dollars,
            });
        }
        Ok(())
    }
}

//! Round and match result types.

/// One side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// Who won, or `None` for a push.
    pub winner: Option<Side>,
    /// Who busted, if anyone. Only one side can bust in a round.
    pub busted: Option<Side>,
    /// The player's final score.
    pub player_score: u16,
    /// The dealer's final score.
    pub dealer_score: u16,
}

impl RoundResult {
    /// Returns whether the round was a push.
    #[must_use]
    pub const fn is_push(&self) -> bool {
        self.winner.is_none()
    }
}

/// How a match ended, or that it has not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The player can keep playing.
    Active,
    /// The player's wallet is empty.
    PlayerBroke,
    /// The player's wallet reached the winning balance.
    PlayerRich,
    /// The player chose to stop with a mid-range wallet.
    Quit,
}

impl MatchOutcome {
    /// Returns whether the match is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Summary of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    /// How the match ended.
    pub outcome: MatchOutcome,
    /// Final wallet balance.
    pub dollars: usize,
    /// Net result (positive = profit, negative = loss).
    pub winnings: isize,
    /// Number of rounds played.
    pub rounds_played: usize,
}

//! The boundary between the engine and whatever draws the table and reads
//! the player's choices.

use core::str::FromStr;

use crate::error::InvalidInputError;
use crate::hand::Hand;
use crate::result::{MatchSummary, RoundResult};

/// A player's choice during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// End the turn.
    Stay,
}

impl FromStr for Decision {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if ["h", "hit"].iter().any(|word| s.eq_ignore_ascii_case(word)) {
            Ok(Self::Hit)
        } else if ["s", "stay", "stand"]
            .iter()
            .any(|word| s.eq_ignore_ascii_case(word))
        {
            Ok(Self::Stay)
        } else {
            Err(InvalidInputError)
        }
    }
}

/// Parses a yes/no answer.
///
/// # Errors
///
/// Returns [`InvalidInputError`] for anything other than `y`, `yes`, `n` or
/// `no` (case-insensitive).
pub fn parse_confirmation(input: &str) -> Result<bool, InvalidInputError> {
    let input = input.trim();
    if ["y", "yes"].iter().any(|word| input.eq_ignore_ascii_case(word)) {
        Ok(true)
    } else if ["n", "no"].iter().any(|word| input.eq_ignore_ascii_case(word)) {
        Ok(false)
    } else {
        Err(InvalidInputError)
    }
}

/// Everything a renderer needs to draw the table.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    /// The dealer's hand. Hidden cards are flagged on the card.
    pub dealer_hand: &'a Hand,
    /// The player's hand.
    pub player_hand: &'a Hand,
    /// The dealer's score, or `None` while a card is face down.
    pub dealer_score: Option<u16>,
    /// The player's score.
    pub player_score: u16,
    /// The player's wallet balance.
    pub dollars: usize,
    /// The balance at which the player wins the match.
    pub winning_dollars: usize,
}

/// Source of the player's decisions.
///
/// Implementations block until they have a valid answer; the engine never
/// retries.
pub trait InputProvider {
    /// Asks whether the player wants another card.
    fn ask_hit_or_stay(&mut self, view: &TableView<'_>) -> Decision;

    /// Asks whether the player wants to play another round.
    fn ask_continue(&mut self) -> bool;
}

/// Renders the game. Nothing it does feeds back into the engine.
pub trait Display {
    /// Draws the table.
    fn render_table(&mut self, view: &TableView<'_>);

    /// Announces the result of a round.
    fn render_round_result(&mut self, result: &RoundResult);

    /// Announces the end of the match.
    fn render_match_end(&mut self, summary: &MatchSummary) {
        let _ = summary;
    }
}

//! Match and round flow.

use crate::deck::{CardSource, Deck};
use crate::error::{OptionsError, RoundError};
use crate::interface::{Display, InputProvider};
use crate::options::GameOptions;
use crate::participant::{Dealer, Participant, Player};
use crate::result::{MatchOutcome, MatchSummary, RoundResult, Side};

mod dealer;
mod round;
pub mod state;

pub use round::{CARDS_IN_INITIAL_HAND, Round};
pub use state::RoundState;

/// A match of Twenty-One: rounds against the dealer until the player is
/// broke, rich, or stops.
///
/// The game owns the card source and both participants. Each round borrows
/// them through a [`Round`]. Use [`GameOptions`] to change the dealer's hit
/// threshold and the wallet bounds.
pub struct Game<S: CardSource = Deck> {
    /// Game options. Read once when the match is created; changing them
    /// afterwards does not touch the existing player or dealer.
    pub options: GameOptions,
    /// Where cards are dealt from.
    source: S,
    /// The player and their wallet.
    player: Player,
    /// The dealer.
    dealer: Dealer,
    /// Rounds settled so far.
    rounds_played: usize,
}

impl Game<Deck> {
    /// Creates a new match with a deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use twentyone::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42).unwrap();
    /// assert_eq!(game.player().dollars(), 5);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the options describe a match that is already
    /// over.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, OptionsError> {
        Self::with_source(options, Deck::new(seed))
    }
}

impl<S: CardSource> Game<S> {
    /// Creates a new match dealing from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options describe a match that is already
    /// over.
    pub fn with_source(options: GameOptions, source: S) -> Result<Self, OptionsError> {
        options.validate()?;

        Ok(Self {
            player: Player::new(&options),
            dealer: Dealer::new(options.hit_threshold),
            options,
            source,
            rounds_played: 0,
        })
    }

    /// Returns the player.
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the card source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the card source for stacking or inspection.
    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Returns the number of rounds settled so far.
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns the player's current standing.
    ///
    /// Never returns [`MatchOutcome::Quit`]; only [`Game::play`] knows
    /// whether the player walked away.
    pub const fn outcome(&self) -> MatchOutcome {
        if self.player.is_broke() {
            MatchOutcome::PlayerBroke
        } else if self.player.is_rich() {
            MatchOutcome::PlayerRich
        } else {
            MatchOutcome::Active
        }
    }

    /// Starts a round on the current table.
    ///
    /// The returned round must be dealt with [`Round::deal`] before anything
    /// else. Its result is not applied to the wallet; use
    /// [`Game::play_round`] for that.
    pub fn round(&mut self) -> Round<'_, S> {
        Round::new(&mut self.source, &mut self.player, &mut self.dealer)
    }

    /// Plays one round and pays out the wager.
    ///
    /// The table is left as the round ended so it can still be inspected,
    /// and the deck is not reset. Call [`Game::set_up_table`] before the
    /// next round; [`Game::play`] does this for you.
    ///
    /// # Errors
    ///
    /// Returns an error if the card source runs out mid-round. The wallet
    /// is untouched in that case.
    pub fn play_round<I, D>(
        &mut self,
        input: &mut I,
        display: &mut D,
    ) -> Result<RoundResult, RoundError>
    where
        I: InputProvider + ?Sized,
        D: Display + ?Sized,
    {
        let result = self.round().play(input, display)?;
        self.apply_settlement(&result);
        self.rounds_played += 1;
        Ok(result)
    }

    /// Pays out a settled round: a win is worth a dollar, a loss costs one,
    /// a push changes nothing.
    fn apply_settlement(&mut self, result: &RoundResult) {
        match result.winner {
            Some(Side::Player) => self.player.wins_bet(),
            Some(Side::Dealer) => self.player.loses_bet(),
            None => {}
        }
        log::debug!("wallet now {}", self.player.dollars());
    }

    /// Resets the deck and clears both hands.
    pub fn set_up_table(&mut self) {
        self.source.reset();
        self.player.reset_hand();
        self.dealer.reset_hand();
    }

    /// Plays rounds until the player is broke, rich, or declines to continue.
    ///
    /// The player is only asked to continue while the wallet is strictly
    /// between empty and the winning balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the card source runs out mid-round.
    pub fn play<I, D>(
        &mut self,
        input: &mut I,
        display: &mut D,
    ) -> Result<MatchSummary, RoundError>
    where
        I: InputProvider + ?Sized,
        D: Display + ?Sized,
    {
        let mut quit = false;

        while !self.outcome().is_terminal() {
            self.play_round(input, display)?;
            self.set_up_table();

            if !self.outcome().is_terminal() && !input.ask_continue() {
                quit = true;
                break;
            }
        }

        let summary = MatchSummary {
            outcome: if quit { MatchOutcome::Quit } else { self.outcome() },
            dollars: self.player.dollars(),
            winnings: self.player.winnings(),
            rounds_played: self.rounds_played,
        };

        log::info!(
            "match over after {} rounds: {:?}, wallet {}",
            summary.rounds_played,
            summary.outcome,
            summary.dollars
        );

        display.render_match_end(&summary);
        Ok(summary)
    }
}

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::RoundError;
use crate::interface::{Decision, Display, InputProvider, TableView};
use crate::participant::{Dealer, Participant, Player};
use crate::result::RoundResult;

use super::RoundState;

/// Cards each participant receives before the player's turn.
pub const CARDS_IN_INITIAL_HAND: usize = 2;

/// One hand of play.
///
/// A round borrows the card source and both participants from the
/// [`Game`](super::Game) for as long as it runs. Steps called out of order
/// return [`RoundError::InvalidState`].
pub struct Round<'a, S: CardSource + ?Sized> {
    pub(super) source: &'a mut S,
    pub(super) player: &'a mut Player,
    pub(super) dealer: &'a mut Dealer,
    pub(super) state: RoundState,
}

impl<'a, S: CardSource + ?Sized> Round<'a, S> {
    /// Starts a round in the [`RoundState::Dealing`] state.
    pub const fn new(
        source: &'a mut S,
        player: &'a mut Player,
        dealer: &'a mut Dealer,
    ) -> Self {
        Self {
            source,
            player,
            dealer,
            state: RoundState::Dealing,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &*self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub fn dealer(&self) -> &Dealer {
        &*self.dealer
    }

    /// Returns what a renderer should show right now.
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        TableView {
            dealer_hand: self.dealer.hand(),
            player_hand: self.player.hand(),
            dealer_score: self.dealer.hand().visible_score(),
            player_score: self.player.score(),
            dollars: self.player.dollars(),
            winning_dollars: self.player.winning_dollars(),
        }
    }

    /// Deals the initial cards, dealer first, and hides the dealer's second
    /// card.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealing state or the card
    /// source runs out.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::Dealing {
            return Err(RoundError::InvalidState);
        }

        self.player.reset_hand();
        self.dealer.reset_hand();

        for _ in 0..CARDS_IN_INITIAL_HAND {
            let card = self.source.draw()?;
            self.dealer.hand_mut().add_card(card);
            let card = self.source.draw()?;
            self.player.hand_mut().add_card(card);
        }

        self.dealer.hand_mut().hide_card(Dealer::HIDDEN_CARD_INDEX);

        log::debug!(
            "dealt: player {} ({}), dealer shows {}",
            self.player.name(),
            self.player.score(),
            self.dealer
                .hand()
                .cards()
                .first()
                .map_or(0, Card::point_value)
        );

        self.state = RoundState::PlayerTurn;
        Ok(())
    }

    /// Player action: draw one card.
    ///
    /// If the player busts, the dealer's hand is turned face up and the round
    /// goes straight to [`RoundState::Settled`].
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the card source
    /// runs out.
    pub fn hit(&mut self) -> Result<Card, RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        let card = self.source.draw()?;
        self.player.hand_mut().add_card(card.clone());

        if self.player.is_busted() {
            log::debug!("player busted with {}", self.player.score());
            self.dealer.hand_mut().reveal_all();
            self.state = RoundState::Settled;
        }

        Ok(card)
    }

    /// Player action: end the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stay(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::PlayerTurn {
            return Err(RoundError::InvalidState);
        }

        self.state = RoundState::DealerTurn;
        Ok(())
    }

    /// Plays the whole round, asking `input` for decisions and drawing the
    /// table on `display` after every change.
    ///
    /// # Errors
    ///
    /// Returns an error if the round was already started or the card source
    /// runs out.
    pub fn play<I, D>(
        mut self,
        input: &mut I,
        display: &mut D,
    ) -> Result<RoundResult, RoundError>
    where
        I: InputProvider + ?Sized,
        D: Display + ?Sized,
    {
        self.deal()?;
        display.render_table(&self.view());

        while self.state == RoundState::PlayerTurn {
            match input.ask_hit_or_stay(&self.view()) {
                Decision::Hit => {
                    self.hit()?;
                    display.render_table(&self.view());
                }
                Decision::Stay => self.stay()?,
            }
        }

        if self.state == RoundState::DealerTurn {
            self.dealer.hand_mut().reveal_all();
            display.render_table(&self.view());

            while self.dealer_step()?.is_some() {
                display.render_table(&self.view());
            }
        }

        let result = self.settle()?;
        display.render_round_result(&result);
        Ok(result)
    }
}

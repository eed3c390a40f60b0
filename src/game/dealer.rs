use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::CardSource;
use crate::error::RoundError;
use crate::participant::Participant;
use crate::result::{RoundResult, Side};

use super::{Round, RoundState};

impl<S: CardSource + ?Sized> Round<'_, S> {
    /// Returns whether the dealer must take another card.
    fn dealer_must_draw(&self) -> bool {
        !self.player.is_busted() && !self.dealer.is_busted() && self.dealer.is_below_threshold()
    }

    /// Reveals the dealer's hand and draws at most one card for the dealer.
    ///
    /// Returns the card drawn, or `None` once the dealer has reached the hit
    /// threshold or busted, at which point the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the card source
    /// runs out while the dealer must draw.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, RoundError> {
        if self.state != RoundState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        self.dealer.hand_mut().reveal_all();

        if !self.dealer_must_draw() {
            self.state = RoundState::Settled;
            return Ok(None);
        }

        let card = self.source.draw()?;
        self.dealer.hand_mut().add_card(card.clone());
        log::debug!("dealer draws {card}, score {}", self.dealer.score());

        Ok(Some(card))
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hidden card and draws while below the hit
    /// threshold.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the card source
    /// runs out while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        let mut drawn_cards = Vec::new();

        while let Some(card) = self.dealer_step()? {
            drawn_cards.push(card);
        }

        Ok(drawn_cards)
    }

    /// Decides the round.
    ///
    /// A busted player always loses, so the dealer's hand only matters when
    /// the player stayed at 21 or under. Equal scores are a push.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not settled yet.
    pub fn settle(&self) -> Result<RoundResult, RoundError> {
        if self.state != RoundState::Settled {
            return Err(RoundError::InvalidState);
        }

        let player_score = self.player.score();
        let dealer_score = self.dealer.score();

        let (winner, busted) = if self.player.is_busted() {
            (Some(Side::Dealer), Some(Side::Player))
        } else if self.dealer.is_busted() {
            (Some(Side::Player), Some(Side::Dealer))
        } else {
            let winner = match player_score.cmp(&dealer_score) {
                Ordering::Greater => Some(Side::Player),
                Ordering::Less => Some(Side::Dealer),
                Ordering::Equal => None,
            };
            (winner, None)
        };

        log::info!(
            "round settled: player {player_score}, dealer {dealer_score}, winner {winner:?}"
        );

        Ok(RoundResult {
            winner,
            busted,
            player_score,
            dealer_score,
        })
    }
}

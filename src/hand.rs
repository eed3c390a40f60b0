//! Hands and their scores.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::score;

/// The cards held by one participant.
///
/// The score is never stored: it is read off the cards and their ace modes,
/// which [`Hand::add_card`] re-resolves after every draw.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in the order they were dealt.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand and re-values its aces.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        score::resolve(&mut self.cards);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand, hidden cards included.
    #[must_use]
    pub fn score(&self) -> u16 {
        score::total(&self.cards)
    }

    /// Returns the score if every card is face up, `None` otherwise.
    #[must_use]
    pub fn visible_score(&self) -> Option<u16> {
        if self.has_hidden() {
            None
        } else {
            Some(self.score())
        }
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_busted(&self) -> bool {
        score::is_bust(self.score())
    }

    /// Returns whether any card is face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(Card::is_hidden)
    }

    /// Turns the card at `index` face down. Out-of-range indices are ignored.
    pub fn hide_card(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.hide();
        }
    }

    /// Turns every card face up.
    pub fn reveal_all(&mut self) {
        for card in &mut self.cards {
            card.reveal();
        }
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

//! The deck and the card source seam used by the game.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// Something the game can deal cards from.
///
/// [`Deck`] is the only implementation the crate ships. Tests and replays can
/// provide their own to control exactly which cards come out.
pub trait CardSource {
    /// Restores the source to a full, freshly ordered set of cards.
    fn reset(&mut self);

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards are left.
    fn draw(&mut self) -> Result<Card, EmptyDeckError>;

    /// Returns the number of cards left.
    fn remaining(&self) -> usize;
}

/// A single 52-card deck.
pub struct Deck {
    /// Cards left in the deck. The next card drawn is the last one.
    cards: Vec<Card>,
    /// Random number generator used for shuffling.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled deck with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::create_cards(&mut rng);
        Self { cards, rng }
    }

    /// Creates a deck whose next draws are `draws`, in order.
    ///
    /// Only the given cards are in the deck until the next [`Deck::reset`],
    /// which restores a full shuffled deck from `seed`.
    #[must_use]
    pub fn stacked(draws: &[Card], seed: u64) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds all 52 cards, face up with high aces, and shuffles them.
    fn create_cards(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Regenerates and reshuffles all 52 cards.
    pub fn reset(&mut self) {
        self.cards = Self::create_cards(&mut self.rng);
        log::debug!("deck reset to {} cards", self.cards.len());
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        let card = self.cards.pop().ok_or(EmptyDeckError)?;
        log::trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns the cards left in the deck, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl CardSource for Deck {
    fn reset(&mut self) {
        Self::reset(self);
    }

    fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        Self::draw(self)
    }

    fn remaining(&self) -> usize {
        self.len()
    }
}

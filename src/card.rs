//! Card types.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::score::{ACE_HIGH_POINTS, ACE_LOW_POINTS, ROYALTY_POINTS};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits, in deck construction order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks, in deck construction order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the short label printed on the card face.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Returns whether the rank is a jack, queen or king.
    #[must_use]
    pub const fn is_royalty(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }

    const fn pips(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => ROYALTY_POINTS,
            Self::Ace => ACE_HIGH_POINTS,
        }
    }
}

/// Whether an ace currently counts high (11) or low (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AceMode {
    /// Counts as 11.
    #[default]
    High,
    /// Counts as 1.
    Low,
}

/// A playing card.
///
/// Suit and rank are fixed at construction. The ace mode and the visibility
/// flag change over the life of a hand, so equality and hashing only look at
/// suit and rank.
#[derive(Debug, Clone)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    ace_mode: AceMode,
    hidden: bool,
}

impl Card {
    /// Creates a new face-up card with a high ace mode.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            ace_mode: AceMode::High,
            hidden: false,
        }
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.rank, Rank::Ace)
    }

    /// Returns whether the card is a jack, queen or king.
    #[must_use]
    pub const fn is_royalty(&self) -> bool {
        self.rank.is_royalty()
    }

    /// Returns the current ace mode. Meaningless for non-aces.
    #[must_use]
    pub const fn ace_mode(&self) -> AceMode {
        self.ace_mode
    }

    /// Returns whether the card is an ace that still counts as 11.
    #[must_use]
    pub const fn is_high_ace(&self) -> bool {
        self.is_ace() && matches!(self.ace_mode, AceMode::High)
    }

    /// Returns the points this card contributes to a hand right now.
    #[must_use]
    pub const fn point_value(&self) -> u8 {
        if self.is_ace() {
            match self.ace_mode {
                AceMode::High => ACE_HIGH_POINTS,
                AceMode::Low => ACE_LOW_POINTS,
            }
        } else {
            self.rank.pips()
        }
    }

    /// Sets the ace mode. Has no effect on the point value of non-aces.
    pub const fn set_ace_mode(&mut self, mode: AceMode) {
        self.ace_mode = mode;
    }

    /// Returns whether the card is face down.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Turns the card face down.
    pub const fn hide(&mut self) {
        self.hidden = true;
    }

    /// Turns the card face up.
    pub const fn reveal(&mut self) {
        self.hidden = false;
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.label(), self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

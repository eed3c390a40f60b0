//! Hand scoring with ace re-valuation.
//!
//! Every ace starts out high. While the total is over [`TARGET_SCORE`] and a
//! high ace remains, one high ace is demoted and [`ACE_DIFFERENTIAL`] is taken
//! off the total. Each demotion is worth exactly the same, so which ace gets
//! demoted does not change the result.

use crate::card::{AceMode, Card};

/// The score a hand must not exceed.
pub const TARGET_SCORE: u16 = 21;

/// Points for a jack, queen or king.
pub const ROYALTY_POINTS: u8 = 10;

/// Points for a high ace.
pub const ACE_HIGH_POINTS: u8 = 11;

/// Points for a low ace.
pub const ACE_LOW_POINTS: u8 = 1;

/// Difference between a high and a low ace.
pub const ACE_DIFFERENTIAL: u16 = 10;

/// Sums the current point values of `cards` without touching ace modes.
#[must_use]
pub fn total(cards: &[Card]) -> u16 {
    cards.iter().map(|card| u16::from(card.point_value())).sum()
}

/// Re-values every ace in `cards` and returns the resulting score.
///
/// All aces are promoted to high first, then demoted one at a time for as
/// long as the total stays over [`TARGET_SCORE`]. Afterwards
/// [`total`]`(cards)` equals the returned value.
pub fn resolve(cards: &mut [Card]) -> u16 {
    for card in cards.iter_mut().filter(|card| card.is_ace()) {
        card.set_ace_mode(AceMode::High);
    }

    let mut score = total(cards);

    while score > TARGET_SCORE {
        let Some(ace) = cards.iter_mut().find(|card| card.is_high_ace()) else {
            break;
        };
        ace.set_ace_mode(AceMode::Low);
        score -= ACE_DIFFERENTIAL;
        log::trace!("demoted {ace} to low, score now {score}");
    }

    score
}

/// Returns whether `score` is over [`TARGET_SCORE`].
#[must_use]
pub const fn is_bust(score: u16) -> bool {
    score > TARGET_SCORE
}

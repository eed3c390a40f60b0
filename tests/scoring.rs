//! Card, deck and scoring tests.

use std::collections::HashSet;

use proptest::prelude::*;
use twentyone::score::{self, TARGET_SCORE};
use twentyone::{AceMode, Card, CardSource, DECK_SIZE, Deck, EmptyDeckError, Hand, Rank, Suit};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn hand_of(ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new();
    for (index, &rank) in ranks.iter().enumerate() {
        hand.add_card(card(Suit::ALL[index % Suit::ALL.len()], rank));
    }
    hand
}

#[test]
fn card_point_values() {
    assert_eq!(card(Suit::Hearts, Rank::Seven).point_value(), 7);
    assert_eq!(card(Suit::Hearts, Rank::Ten).point_value(), 10);
    assert_eq!(card(Suit::Clubs, Rank::Queen).point_value(), 10);

    let mut ace = card(Suit::Spades, Rank::Ace);
    assert!(ace.is_ace());
    assert!(!ace.is_royalty());
    assert_eq!(ace.point_value(), 11);

    ace.set_ace_mode(AceMode::Low);
    assert_eq!(ace.point_value(), 1);
    assert!(!ace.is_high_ace());
}

#[test]
fn card_equality_ignores_ace_mode_and_visibility() {
    let mut ace = card(Suit::Diamonds, Rank::Ace);
    ace.set_ace_mode(AceMode::Low);
    ace.hide();

    assert_eq!(ace, card(Suit::Diamonds, Rank::Ace));
    assert_ne!(ace, card(Suit::Hearts, Rank::Ace));
    assert_eq!(ace.to_string(), "A♦");
    assert_eq!(card(Suit::Hearts, Rank::Ten).to_string(), "10♥");
}

#[test]
fn empty_hand_scores_zero() {
    let hand = Hand::new();
    assert_eq!(hand.score(), 0);
    assert!(!hand.is_busted());
}

#[test]
fn two_aces_and_nine_make_21() {
    let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]);
    assert_eq!(hand.score(), 21);
    assert_eq!(hand.cards().iter().filter(|c| c.is_high_ace()).count(), 1);
}

#[test]
fn three_aces_and_nine_make_12() {
    let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Nine]);
    assert_eq!(hand.score(), 12);
    assert_eq!(hand.cards().iter().filter(|c| c.is_high_ace()).count(), 0);
}

#[test]
fn four_aces_and_king_make_14() {
    let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace, Rank::King]);
    assert_eq!(hand.score(), 14);
}

#[test]
fn later_card_demotes_earlier_ace() {
    let mut hand = hand_of(&[Rank::Ace, Rank::Six]);
    assert_eq!(hand.score(), 17);
    assert!(hand.cards()[0].is_high_ace());

    hand.add_card(card(Suit::Clubs, Rank::Nine));
    assert_eq!(hand.score(), 16);
    assert_eq!(hand.cards()[0].ace_mode(), AceMode::Low);
}

#[test]
fn bust_boundary() {
    let hand = hand_of(&[Rank::King, Rank::Five, Rank::Six]);
    assert_eq!(hand.score(), 21);
    assert!(!hand.is_busted());

    let hand = hand_of(&[Rank::King, Rank::Five, Rank::Seven]);
    assert_eq!(hand.score(), 22);
    assert!(hand.is_busted());

    let hand = hand_of(&[Rank::Ace, Rank::King, Rank::Five, Rank::Six]);
    assert_eq!(hand.score(), 22);
    assert!(hand.is_busted());
}

#[test]
fn resolve_promotes_stale_low_aces() {
    let mut low = card(Suit::Spades, Rank::Ace);
    low.set_ace_mode(AceMode::Low);
    let mut cards = vec![low, card(Suit::Hearts, Rank::Five)];

    assert_eq!(score::total(&cards), 6);
    assert_eq!(score::resolve(&mut cards), 16);
    assert_eq!(score::total(&cards), 16);
}

#[test]
fn hidden_cards_mask_visible_score() {
    let mut hand = hand_of(&[Rank::Ten, Rank::Seven]);
    hand.hide_card(1);
    assert!(hand.has_hidden());
    assert_eq!(hand.visible_score(), None);
    assert_eq!(hand.score(), 17);

    hand.reveal_all();
    assert_eq!(hand.visible_score(), Some(17));
}

#[test]
fn deck_reset_holds_each_card_once() {
    let mut deck = Deck::new(3);
    for _ in 0..10 {
        deck.draw().unwrap();
    }
    deck.reset();

    assert_eq!(deck.len(), DECK_SIZE);
    let distinct: HashSet<(Suit, Rank)> =
        deck.cards().iter().map(|c| (c.suit(), c.rank())).collect();
    assert_eq!(distinct.len(), DECK_SIZE);
    assert!(
        deck.cards()
            .iter()
            .all(|c| !c.is_hidden() && c.ace_mode() == AceMode::High)
    );
}

#[test]
fn deck_draws_until_empty() {
    let mut deck = Deck::new(11);
    for remaining in (0..DECK_SIZE).rev() {
        deck.draw().unwrap();
        assert_eq!(deck.remaining(), remaining);
    }

    assert!(deck.is_empty());
    assert_eq!(deck.draw().unwrap_err(), EmptyDeckError);
}

#[test]
fn stacked_deck_draws_in_order() {
    let mut deck = Deck::stacked(
        &[card(Suit::Hearts, Rank::Two), card(Suit::Clubs, Rank::Ace)],
        1,
    );
    assert_eq!(deck.draw().unwrap(), card(Suit::Hearts, Rank::Two));
    assert_eq!(deck.draw().unwrap(), card(Suit::Clubs, Rank::Ace));
    assert!(deck.draw().is_err());

    deck.reset();
    assert_eq!(deck.len(), DECK_SIZE);
}

#[test]
fn same_seed_same_order() {
    let a = Deck::new(42);
    let b = Deck::new(42);
    assert_eq!(a.cards(), b.cards());
}

fn any_rank() -> impl Strategy<Value = Rank> {
    proptest::sample::select(Rank::ALL.to_vec())
}

proptest! {
    #[test]
    fn score_is_idempotent(ranks in proptest::collection::vec(any_rank(), 0..12)) {
        let hand = hand_of(&ranks);
        prop_assert_eq!(hand.score(), hand.score());

        let mut cards = hand.cards().to_vec();
        prop_assert_eq!(score::resolve(&mut cards), hand.score());
        prop_assert_eq!(score::resolve(&mut cards), hand.score());
    }

    #[test]
    fn score_does_not_depend_on_order(ranks in proptest::collection::vec(any_rank(), 0..12)) {
        let mut reversed = ranks.clone();
        reversed.reverse();
        prop_assert_eq!(hand_of(&ranks).score(), hand_of(&reversed).score());
    }

    #[test]
    fn aces_only_demoted_when_over_target(ranks in proptest::collection::vec(any_rank(), 0..12)) {
        let hand = hand_of(&ranks);
        let high_total: u16 = ranks
            .iter()
            .map(|&rank| u16::from(Card::new(Suit::Spades, rank).point_value()))
            .sum();
        let aces = ranks.iter().filter(|&&rank| rank == Rank::Ace).count() as u16;
        let low_aces = hand
            .cards()
            .iter()
            .filter(|c| c.is_ace() && !c.is_high_ace())
            .count() as u16;

        prop_assert_eq!(hand.score(), high_total - 10 * low_aces);
        if low_aces < aces {
            prop_assert!(hand.score() <= TARGET_SCORE);
        }
        if low_aces > 0 {
            prop_assert!(hand.score() + 10 > TARGET_SCORE);
        }
    }
}

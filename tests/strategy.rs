//! Computer strategy tests.

use indigo::strategy::{candidates, choose_card};
use indigo::{Card, Rank, Suit};

use Suit::{Clubs, Diamonds, Hearts, Spades};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn candidates_share_rank_or_suit_with_top() {
    let hand = [
        card(Rank::King, Diamonds),
        card(Rank::Nine, Spades),
        card(Rank::Three, Clubs),
    ];

    assert_eq!(
        candidates(&hand, Some(card(Rank::Nine, Diamonds))),
        vec![card(Rank::King, Diamonds), card(Rank::Nine, Spades)]
    );
    assert!(candidates(&hand, None).is_empty());
}

#[test]
fn empty_hand_has_no_choice() {
    assert_eq!(choose_card(&[], Some(card(Rank::Two, Clubs))), None);
}

#[test]
fn single_card_is_forced() {
    let hand = [card(Rank::Two, Clubs)];
    assert_eq!(choose_card(&hand, None), Some(0));
    assert_eq!(choose_card(&hand, Some(card(Rank::Nine, Diamonds))), Some(0));
    assert_eq!(choose_card(&hand, Some(card(Rank::Two, Hearts))), Some(0));
}

#[test]
fn single_candidate_is_played() {
    let hand = [
        card(Rank::Two, Clubs),
        card(Rank::Two, Hearts),
        card(Rank::Queen, Diamonds),
    ];
    assert_eq!(choose_card(&hand, Some(card(Rank::Nine, Diamonds))), Some(2));
}

#[test]
fn same_suit_candidates_play_first_of_group() {
    let hand = [card(Rank::Ace, Diamonds), card(Rank::King, Diamonds)];
    assert_eq!(choose_card(&hand, Some(card(Rank::Nine, Diamonds))), Some(0));

    let hand = [
        card(Rank::Nine, Spades),
        card(Rank::King, Diamonds),
        card(Rank::Four, Clubs),
        card(Rank::Three, Diamonds),
    ];
    assert_eq!(choose_card(&hand, Some(card(Rank::Nine, Diamonds))), Some(1));
}

#[test]
fn same_rank_candidates_when_suit_group_is_single() {
    let hand = [
        card(Rank::Two, Clubs),
        card(Rank::Five, Spades),
        card(Rank::Five, Hearts),
    ];
    assert_eq!(choose_card(&hand, Some(card(Rank::Five, Diamonds))), Some(1));

    let hand = [
        card(Rank::Jack, Clubs),
        card(Rank::Five, Spades),
        card(Rank::Five, Hearts),
        card(Rank::Eight, Diamonds),
    ];
    assert_eq!(choose_card(&hand, Some(card(Rank::Five, Diamonds))), Some(1));
}

#[test]
fn mixed_single_candidates_fall_back_to_first() {
    let hand = [
        card(Rank::Two, Clubs),
        card(Rank::Nine, Spades),
        card(Rank::King, Diamonds),
    ];
    assert_eq!(choose_card(&hand, Some(card(Rank::Nine, Diamonds))), Some(1));
}

#[test]
fn no_candidates_discards_from_repeated_suit() {
    let hand = [
        card(Rank::Three, Hearts),
        card(Rank::Two, Clubs),
        card(Rank::Four, Spades),
        card(Rank::Four, Clubs),
    ];
    assert_eq!(choose_card(&hand, Some(card(Rank::King, Diamonds))), Some(1));
}

#[test]
fn no_candidates_discards_from_repeated_rank() {
    let hand = [
        card(Rank::Three, Hearts),
        card(Rank::Seven, Clubs),
        card(Rank::Seven, Diamonds),
        card(Rank::Two, Spades),
    ];
    assert_eq!(choose_card(&hand, None), Some(1));
}

#[test]
fn no_candidates_and_no_groups_plays_first() {
    let hand = [
        card(Rank::Three, Hearts),
        card(Rank::Seven, Clubs),
        card(Rank::Eight, Spades),
    ];
    assert_eq!(choose_card(&hand, Some(card(Rank::King, Diamonds))), Some(0));
}

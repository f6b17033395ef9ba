//! Card selection for the computer player.
//!
//! The policy is greedy and deterministic: it looks only at the hand and the
//! current top card of the table, and given the same inputs it always picks
//! the same card.

use alloc::vec::Vec;

use crate::card::Card;

/// Returns the hand cards that could take the pile: those sharing a rank or
/// a suit with the top card. Empty when the table is empty.
#[must_use]
pub fn candidates(hand: &[Card], top: Option<Card>) -> Vec<Card> {
    top.map_or_else(Vec::new, |top| {
        hand.iter().copied().filter(|card| card.matches(top)).collect()
    })
}

/// Chooses the card the computer plays.
///
/// Returns the zero-based index of the card in `hand`, or `None` if the hand
/// is empty.
///
/// 1. A single card in hand is played.
/// 2. A single candidate is played.
/// 3. Among several candidates, a candidate of the top card's suit with a
///    same-suit sibling is preferred, then one of its rank with a same-rank
///    sibling, then the first candidate.
/// 4. With no candidate, a card from a suit held at least twice is preferred,
///    then one from a rank held at least twice, then the first card.
#[must_use]
pub fn choose_card(hand: &[Card], top: Option<Card>) -> Option<usize> {
    if hand.len() <= 1 {
        return (!hand.is_empty()).then_some(0);
    }

    let candidates = candidates(hand, top);
    let chosen = match (candidates.as_slice(), top) {
        ([only], _) => *only,
        ([_, _, ..], Some(top)) => least_needed_candidate(&candidates, top),
        _ => least_needed(hand),
    };

    hand.iter().position(|&card| card == chosen)
}

/// Picks among several candidates.
fn least_needed_candidate(candidates: &[Card], top: Card) -> Card {
    let same_suit: Vec<Card> = candidates
        .iter()
        .copied()
        .filter(|card| card.suit == top.suit)
        .collect();
    if let [first, _, ..] = same_suit.as_slice() {
        return *first;
    }

    let same_rank: Vec<Card> = candidates
        .iter()
        .copied()
        .filter(|card| card.rank == top.rank)
        .collect();
    if let [first, _, ..] = same_rank.as_slice() {
        return *first;
    }

    candidates[0]
}

/// Picks from the whole hand when nothing can take the pile.
///
/// The first card whose suit is held more than once is also the first card
/// of the first such suit group in hand order; the same holds for ranks.
fn least_needed(hand: &[Card]) -> Card {
    let shares_suit = |card: &&Card| {
        hand.iter().filter(|other| other.suit == card.suit).count() > 1
    };
    let shares_rank = |card: &&Card| {
        hand.iter().filter(|other| other.rank == card.rank).count() > 1
    };

    hand.iter()
        .find(shares_suit)
        .or_else(|| hand.iter().find(shares_rank))
        .copied()
        .unwrap_or(hand[0])
}

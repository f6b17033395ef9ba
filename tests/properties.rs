//! Property tests for capture, conservation and strategy determinism.

use proptest::prelude::*;
use proptest::sample::subsequence;

use indigo::card::standard_deck;
use indigo::strategy::choose_card;
use indigo::{Card, DECK_SIZE, Game, GameOptions, PlayerId, Players, Step, Table};

fn card() -> impl Strategy<Value = Card> {
    proptest::sample::select(standard_deck())
}

fn hand() -> impl Strategy<Value = Vec<Card>> {
    (1..=6usize)
        .prop_flat_map(|len| subsequence(standard_deck(), len))
        .prop_shuffle()
}

fn all_cards(game: &Game) -> Vec<Card> {
    let mut cards = game.dealer.lock().deck().to_vec();
    cards.extend(game.table_cards());
    for player in [PlayerId::Human, PlayerId::Computer] {
        cards.extend(game.hand(player));
        cards.extend(game.won_cards(player));
    }
    cards.sort();
    cards
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Capture happens iff the top two cards share rank or suit, and always
    /// empties the table.
    #[test]
    fn prop_capture_iff_top_two_match(
        pile in subsequence(standard_deck(), 2..=10).prop_shuffle(),
    ) {
        let mut players = Players::new("Player", "Computer");
        let mut table = Table::new();
        table.stake(pile.iter().copied());

        let previous = pile[pile.len() - 2];
        let top = pile[pile.len() - 1];
        let capture = table.check_capture(&mut players.human);

        let matches = previous.rank == top.rank || previous.suit == top.suit;
        prop_assert_eq!(capture.is_some(), matches);
        if matches {
            prop_assert!(table.is_empty());
            prop_assert_eq!(players.human.won.len(), pile.len());
        } else {
            prop_assert_eq!(table.len(), pile.len());
            prop_assert!(players.human.won.is_empty());
        }
    }

    /// The strategy always picks a card from the hand and picks the same one
    /// for the same inputs.
    #[test]
    fn prop_strategy_is_deterministic(hand in hand(), top in proptest::option::of(card())) {
        let first = choose_card(&hand, top);
        prop_assert_eq!(first, choose_card(&hand, top));

        let index = first.expect("non-empty hand always yields a card");
        prop_assert!(index < hand.len());
    }

    /// Every card stays in exactly one place at every turn boundary.
    #[test]
    fn prop_cards_are_conserved(
        seed in any::<u64>(),
        human_first in any::<bool>(),
        choices in proptest::collection::vec(0..6usize, 24),
    ) {
        let game = Game::new(GameOptions::default(), seed);
        let first = if human_first { PlayerId::Human } else { PlayerId::Computer };
        game.start(first).unwrap();

        let mut deck = standard_deck();
        deck.sort();
        let mut choices = choices.into_iter();

        loop {
            match game.advance().unwrap() {
                Step::AwaitingHuman => {
                    let held = game.hand(PlayerId::Human).len();
                    let index = choices.next().unwrap_or(0) % held;
                    game.play_human(index).unwrap();
                }
                Step::Finished(result) => {
                    prop_assert_eq!(
                        result.score.human_cards + result.score.computer_cards,
                        DECK_SIZE
                    );
                    break;
                }
                Step::Dealt(_) | Step::Played(_) => {}
            }
            prop_assert_eq!(all_cards(&game), deck.clone());
        }
    }
}

use poker_hands::cards::{Card, CardId, Rank, Suit};
use poker_hands::evaluator::{evaluate_cards, HandCategory};
use proptest::prelude::*;

fn any_rank() -> impl Strategy<Value = Rank> {
    (1u8..=13u8).prop_map(|v| Rank::from_value(v).unwrap())
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Spade), Just(Suit::Heart), Just(Suit::Club), Just(Suit::Diamond),]
}

/// Up to five cards drawn from any number of decks, with distinct ids.
fn any_hand(max: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec((any_rank(), any_suit()), 0..=max).prop_map(|faces| {
        faces
            .into_iter()
            .enumerate()
            .map(|(i, (r, s))| Card::new(CardId::new(i as u32), r, s))
            .collect()
    })
}

fn eval(cards: &[Card]) -> Option<HandCategory> {
    evaluate_cards(cards).unwrap()
}

proptest! {
    #[test]
    fn order_of_cards_never_matters(cards in any_hand(5), rotate in 0usize..5, seed in any::<u64>()) {
        let expected = eval(&cards);

        let mut rotated = cards.clone();
        if !rotated.is_empty() {
            let by = rotate % rotated.len();
            rotated.rotate_left(by);
        }
        prop_assert_eq!(eval(&rotated), expected);

        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(eval(&reversed), expected);

        let mut shuffled = cards;
        let mut s = seed;
        for i in (1..shuffled.len()).rev() {
            s = s.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            shuffled.swap(i, (s >> 33) as usize % (i + 1));
        }
        prop_assert_eq!(eval(&shuffled), expected);
    }

    #[test]
    fn same_face_five_times_is_flush_five(rank in any_rank(), suit in any_suit()) {
        let cards: Vec<Card> = (0..5).map(|deck| Card::new(CardId::new(deck * 52), rank, suit)).collect();
        prop_assert_eq!(eval(&cards), Some(HandCategory::FlushFiveOfAKind));
    }

    #[test]
    fn only_empty_hands_have_no_category(cards in any_hand(5)) {
        prop_assert_eq!(eval(&cards).is_none(), cards.is_empty());
    }

    #[test]
    fn five_card_categories_need_five_cards(cards in any_hand(4)) {
        let category = eval(&cards);
        let five_only = [
            HandCategory::FlushFiveOfAKind,
            HandCategory::FlushFullHouse,
            HandCategory::FiveOfAKind,
            HandCategory::StraightFlush,
            HandCategory::FullHouse,
            HandCategory::Flush,
            HandCategory::Straight,
        ];
        prop_assert!(category.map_or(true, |c| !five_only.contains(&c)));
    }

    #[test]
    fn adding_a_card_never_lowers_a_group_category(cards in any_hand(5)) {
        prop_assume!(cards.len() >= 2);
        let before = eval(&cards[..cards.len() - 1]);
        let after = eval(&cards);
        // groups only grow, so a pair-based category can only go up
        if let (Some(b), Some(a)) = (before, after) {
            if matches!(b, HandCategory::OnePair | HandCategory::TwoPair | HandCategory::ThreeOfAKind | HandCategory::FourOfAKind) {
                prop_assert!(a >= b, "{:?} -> {:?}", b, a);
            }
        }
    }

    #[test]
    fn too_many_cards_are_rejected(extra in 6usize..9) {
        let cards: Vec<Card> = (0..extra as u32).map(|i| Card::new(CardId::new(i), Rank::Two, Suit::Club)).collect();
        prop_assert!(evaluate_cards(&cards).is_err());
    }
}

use poker_hands::cards::{Card, CardId, Rank, Suit};
use poker_hands::evaluator::{evaluate_cards, HandCategory};

fn c(id: u32, rank: Rank, suit: Suit) -> Card {
    Card::new(CardId::new(id), rank, suit)
}

fn category(cards: &[Card]) -> HandCategory {
    evaluate_cards(cards).unwrap().unwrap()
}

#[test]
fn category_flush_five_of_a_kind() {
    let xs = [
        c(0, Rank::Seven, Suit::Diamond),
        c(52, Rank::Seven, Suit::Diamond),
        c(104, Rank::Seven, Suit::Diamond),
        c(156, Rank::Seven, Suit::Diamond),
        c(208, Rank::Seven, Suit::Diamond),
    ];
    assert_eq!(category(&xs), HandCategory::FlushFiveOfAKind);
}

#[test]
fn category_royal_straight_flush() {
    let xs = [
        c(0, Rank::Ten, Suit::Spade),
        c(1, Rank::Jack, Suit::Spade),
        c(2, Rank::Queen, Suit::Spade),
        c(3, Rank::King, Suit::Spade),
        c(4, Rank::Ace, Suit::Spade),
    ];
    assert_eq!(category(&xs), HandCategory::StraightFlush);
}

#[test]
fn category_ace_low_straight_flush() {
    let xs = [
        c(0, Rank::Ace, Suit::Heart),
        c(1, Rank::Two, Suit::Heart),
        c(2, Rank::Three, Suit::Heart),
        c(3, Rank::Four, Suit::Heart),
        c(4, Rank::Five, Suit::Heart),
    ];
    assert_eq!(category(&xs), HandCategory::StraightFlush);
}

#[test]
fn category_full_house_not_flush() {
    let xs = [
        c(0, Rank::Ace, Suit::Spade),
        c(1, Rank::Ace, Suit::Heart),
        c(2, Rank::Ace, Suit::Club),
        c(3, Rank::Seven, Suit::Diamond),
        c(4, Rank::Seven, Suit::Spade),
    ];
    assert_eq!(category(&xs), HandCategory::FullHouse);
}

#[test]
fn category_flush_full_house() {
    let xs = [
        c(0, Rank::Three, Suit::Club),
        c(52, Rank::Three, Suit::Club),
        c(104, Rank::Three, Suit::Club),
        c(9, Rank::Jack, Suit::Club),
        c(61, Rank::Jack, Suit::Club),
    ];
    assert_eq!(category(&xs), HandCategory::FlushFullHouse);
}

#[test]
fn category_five_of_a_kind_mixed_suits() {
    let xs = [
        c(0, Rank::Queen, Suit::Spade),
        c(1, Rank::Queen, Suit::Heart),
        c(2, Rank::Queen, Suit::Club),
        c(3, Rank::Queen, Suit::Diamond),
        c(52, Rank::Queen, Suit::Spade),
    ];
    assert_eq!(category(&xs), HandCategory::FiveOfAKind);
}

#[test]
fn category_four_of_a_kind() {
    let xs = [
        c(0, Rank::Nine, Suit::Club),
        c(1, Rank::Nine, Suit::Diamond),
        c(2, Rank::Nine, Suit::Heart),
        c(3, Rank::Nine, Suit::Spade),
        c(4, Rank::Ace, Suit::Club),
    ];
    assert_eq!(category(&xs), HandCategory::FourOfAKind);
    assert_eq!(category(&xs[..4]), HandCategory::FourOfAKind);
}

#[test]
fn category_flush() {
    let xs = [
        c(0, Rank::King, Suit::Heart),
        c(1, Rank::Ten, Suit::Heart),
        c(2, Rank::Eight, Suit::Heart),
        c(3, Rank::Six, Suit::Heart),
        c(4, Rank::Three, Suit::Heart),
    ];
    assert_eq!(category(&xs), HandCategory::Flush);
}

#[test]
fn category_straight_mixed_suits() {
    let xs = [
        c(0, Rank::Nine, Suit::Club),
        c(1, Rank::Ten, Suit::Diamond),
        c(2, Rank::Jack, Suit::Heart),
        c(3, Rank::Queen, Suit::Spade),
        c(4, Rank::King, Suit::Club),
    ];
    assert_eq!(category(&xs), HandCategory::Straight);
}

#[test]
fn no_wraparound_straight() {
    let xs = [
        c(0, Rank::Queen, Suit::Club),
        c(1, Rank::King, Suit::Diamond),
        c(2, Rank::Ace, Suit::Heart),
        c(3, Rank::Two, Suit::Spade),
        c(4, Rank::Three, Suit::Club),
    ];
    assert_eq!(category(&xs), HandCategory::HighCard);
}

#[test]
fn growing_hand_climbs_categories() {
    let xs = [
        c(0, Rank::Five, Suit::Club),
        c(1, Rank::Five, Suit::Diamond),
        c(2, Rank::Eight, Suit::Heart),
        c(3, Rank::Eight, Suit::Spade),
        c(4, Rank::Eight, Suit::Club),
    ];
    let expected = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::FullHouse,
    ];
    for (n, want) in expected.into_iter().enumerate() {
        assert_eq!(category(&xs[..=n]), want, "first {} cards", n + 1);
    }
    assert_eq!(evaluate_cards(&[]).unwrap(), None);
}

pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::Card;
use crate::hand::{Hand, HandError};
use core::fmt;
use core::str::FromStr;

/// Hand category from weakest to strongest.
///
/// The three categories above `StraightFlush` only occur when several decks
/// are shuffled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    FiveOfAKind = 9,
    FlushFullHouse = 10,
    FlushFiveOfAKind = 11,
}

impl HandCategory {
    pub const ALL: [HandCategory; 12] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::FiveOfAKind,
        HandCategory::FlushFullHouse,
        HandCategory::FlushFiveOfAKind,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Stable identifier used by score tables.
    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "HighCard",
            HandCategory::OnePair => "OnePair",
            HandCategory::TwoPair => "TwoPair",
            HandCategory::ThreeOfAKind => "ThreeOfAKind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "FullHouse",
            HandCategory::FourOfAKind => "FourOfAKind",
            HandCategory::StraightFlush => "StraightFlush",
            HandCategory::FiveOfAKind => "FiveOfAKind",
            HandCategory::FlushFullHouse => "FlushFullHouse",
            HandCategory::FlushFiveOfAKind => "FlushFiveOfAKind",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryParseError {
    #[error("unknown hand category: '{0}'")]
    Unknown(String),
}

impl FromStr for HandCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        HandCategory::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(t))
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

/// Classify a hand. An empty hand has no category.
///
/// ```
/// use poker_hands::cards::cards_from_str;
/// use poker_hands::evaluator::{evaluate, HandCategory};
/// use poker_hands::hand::Hand;
///
/// let hand = Hand::try_from_cards(cards_from_str("Ah 2h 3h 4h 5h").unwrap()).unwrap();
/// assert_eq!(evaluate(&hand), Some(HandCategory::StraightFlush));
/// assert_eq!(evaluate(&Hand::new()), None);
/// ```
pub fn evaluate(hand: &Hand) -> Option<HandCategory> {
    classify(hand.as_slice())
}

/// Validate a loose slice of cards (at most five, distinct ids) and classify it.
///
/// ```
/// use poker_hands::cards::cards_from_str;
/// use poker_hands::evaluator::{evaluate_cards, HandCategory};
///
/// let cards = cards_from_str("As Ah Ac 7d 7s").unwrap();
/// assert_eq!(evaluate_cards(&cards).unwrap(), Some(HandCategory::FullHouse));
///
/// let six = cards_from_str("As Ah Ac 7d 7s 2c").unwrap();
/// assert!(evaluate_cards(&six).is_err());
/// ```
pub fn evaluate_cards(cards: &[Card]) -> Result<Option<HandCategory>, EvalError> {
    let hand = Hand::try_from_cards(cards.to_vec())?;
    Ok(evaluate(&hand))
}

fn classify(cards: &[Card]) -> Option<HandCategory> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    if cards.is_empty() {
        return None;
    }

    let analysis = HandAnalysis::new(cards);

    // HighCard closes the list and always matches
    DETECTORS.iter().find(|d| d.detect(&analysis)).map(|d| d.category())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::cards_from_str;

    fn eval(s: &str) -> Option<HandCategory> {
        evaluate_cards(&cards_from_str(s).unwrap()).unwrap()
    }

    #[test]
    fn empty_hand_has_no_category() {
        assert_eq!(evaluate(&Hand::new()), None);
    }

    #[test]
    fn partial_hands() {
        assert_eq!(eval("Ks"), Some(HandCategory::HighCard));
        assert_eq!(eval("Ks Kh"), Some(HandCategory::OnePair));
        assert_eq!(eval("Ks Kh Kd"), Some(HandCategory::ThreeOfAKind));
        assert_eq!(eval("Ks Kh 4d 4c"), Some(HandCategory::TwoPair));
        assert_eq!(eval("Ks Kh Kd Kc"), Some(HandCategory::FourOfAKind));
        // four suited cards are not a flush, four in a row not a straight
        assert_eq!(eval("2s 3s 4s 5s"), Some(HandCategory::HighCard));
    }

    #[test]
    fn every_five_card_category() {
        assert_eq!(eval("Qd Qd Qd Qd Qd"), Some(HandCategory::FlushFiveOfAKind));
        assert_eq!(eval("3c 3c 3c 8c 8c"), Some(HandCategory::FlushFullHouse));
        assert_eq!(eval("Qd Qs Qh Qd Qc"), Some(HandCategory::FiveOfAKind));
        assert_eq!(eval("Ts Js Qs Ks As"), Some(HandCategory::StraightFlush));
        assert_eq!(eval("9c 9d 9h 9s Ac"), Some(HandCategory::FourOfAKind));
        assert_eq!(eval("As Ah Ac 7d 7s"), Some(HandCategory::FullHouse));
        assert_eq!(eval("Kh Th 8h 6h 3h"), Some(HandCategory::Flush));
        assert_eq!(eval("Ac 2d 3h 4s 5c"), Some(HandCategory::Straight));
        assert_eq!(eval("Qc Qd Qh Ts 2c"), Some(HandCategory::ThreeOfAKind));
        assert_eq!(eval("Jc Jd 9c 9h 2s"), Some(HandCategory::TwoPair));
        assert_eq!(eval("Ah Ad Ts 9c 2d"), Some(HandCategory::OnePair));
        assert_eq!(eval("Ah Kd 7s 5c 2d"), Some(HandCategory::HighCard));
    }

    #[test]
    fn category_names_round_trip() {
        for c in HandCategory::ALL {
            assert_eq!(c.name().parse::<HandCategory>().unwrap(), c);
        }
        assert_eq!("flushfiveofakind".parse::<HandCategory>().unwrap(), HandCategory::FlushFiveOfAKind);
        assert!("RoyalFlush".parse::<HandCategory>().is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let card = cards_from_str("As").unwrap()[0];
        let err = evaluate_cards(&[card, card]).unwrap_err();
        assert!(matches!(err, EvalError::InvalidHand(HandError::DuplicateCard(_))));
    }
}

use crate::cards::Card;

/// Whether every card in the hand shares one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    single_suit: bool,
}

impl SuitInfo {
    pub fn detect(cards: &[Card]) -> Self {
        let single_suit = match cards.split_first() {
            Some((first, rest)) => rest.iter().all(|c| c.suit() == first.suit()),
            None => false,
        };
        SuitInfo { single_suit }
    }

    pub fn is_single_suit(&self) -> bool {
        self.single_suit
    }
}

use crate::cards::{Card, CardId};

/// Maximum number of cards a hand can hold.
pub const HAND_CAPACITY: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("hand is full")]
    Full,
    #[error("too many cards for a hand: {0}")]
    TooManyCards(usize),
    #[error("card {0} is already in the hand")]
    DuplicateCard(CardId),
}

/// Up to five cards, keyed by card id. Insertion order is kept for display
/// but carries no meaning for evaluation.
///
/// ```
/// use poker_hands::cards::cards_from_str;
/// use poker_hands::hand::Hand;
///
/// let hand = Hand::try_from_cards(cards_from_str("As Ks Qs").unwrap()).unwrap();
/// assert_eq!(hand.len(), 3);
/// assert!(!hand.is_full());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(HAND_CAPACITY) }
    }

    pub fn try_from_cards(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > HAND_CAPACITY {
            return Err(HandError::TooManyCards(cards.len()));
        }
        let mut hand = Hand::new();
        for card in cards {
            hand.insert(card)?;
        }
        Ok(hand)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= HAND_CAPACITY
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id() == id)
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id()).collect()
    }

    pub(crate) fn insert(&mut self, card: Card) -> Result<(), HandError> {
        if self.is_full() {
            return Err(HandError::Full);
        }
        if self.contains(card.id()) {
            return Err(HandError::DuplicateCard(card.id()));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Remove every card, returning them in insertion order.
    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}

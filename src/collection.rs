use crate::cards::{Card, CardId};
use crate::evaluator::{evaluate, HandCategory};
use crate::events::{Event, Listener};
use crate::hand::Hand;
use std::collections::BTreeMap;

/// The two card slots of a level: the dealt supply and the player's hand.
///
/// Every card is in at most one slot. Mutations finish before any event is
/// published, so listeners always observe the new state.
///
/// ```
/// use poker_hands::cards::cards_from_str;
/// use poker_hands::collection::CardCollection;
/// use poker_hands::evaluator::HandCategory;
/// use poker_hands::events::EventLog;
///
/// let mut events = EventLog::default();
/// let mut slots = CardCollection::new();
/// for card in cards_from_str("As Ah 7d").unwrap() {
///     slots.add_to_supply(card, &mut events);
/// }
/// let ids: Vec<_> = slots.supply().map(|c| c.id()).collect();
/// assert!(slots.move_to_hand(ids[0], &mut events));
/// assert!(slots.move_to_hand(ids[1], &mut events));
/// assert_eq!(slots.current_category(), Some(HandCategory::OnePair));
/// assert_eq!(slots.remaining_supply_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CardCollection {
    supply: BTreeMap<CardId, Card>,
    hand: Hand,
}

impl CardCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a dealt card into the supply. Returns `false` (and does nothing) if
    /// the card is already in either slot.
    pub fn add_to_supply(&mut self, card: Card, events: &mut impl Listener) -> bool {
        if self.contains(card.id()) {
            return false;
        }
        self.supply.insert(card.id(), card);
        events.notify(&Event::SupplyCountChanged(self.supply.len()));
        true
    }

    /// Move a supply card into the hand.
    ///
    /// Returns `false` without touching anything if the card is not in the
    /// supply or the hand already holds five cards. On success publishes
    /// `SupplyCountChanged`, `HandCategoryChanged`, then `HandFilled` when the
    /// hand reaches five cards and `SupplyExhausted` when the supply is empty.
    pub fn move_to_hand(&mut self, id: CardId, events: &mut impl Listener) -> bool {
        if self.hand.is_full() {
            log::warn!("hand is full, {id} stays in the supply");
            return false;
        }
        let Some(card) = self.supply.remove(&id) else {
            log::warn!("{id} is not in the supply");
            return false;
        };
        if let Err(err) = self.hand.insert(card) {
            // unreachable while supply and hand stay disjoint; undo to keep the move atomic
            log::warn!("cannot move {card} into the hand: {err}");
            self.supply.insert(id, card);
            return false;
        }

        let category = evaluate(&self.hand);
        log::debug!("moved {card} into the hand ({} cards): {category:?}", self.hand.len());

        events.notify(&Event::SupplyCountChanged(self.supply.len()));
        events.notify(&Event::HandCategoryChanged(category));
        if let (true, Some(category)) = (self.hand.is_full(), category) {
            events.notify(&Event::HandFilled(category));
        }
        if self.supply.is_empty() {
            events.notify(&Event::SupplyExhausted);
        }
        true
    }

    /// Empty the hand and return the cards that left it. Clearing an empty
    /// hand publishes nothing.
    pub fn clear_hand(&mut self, events: &mut impl Listener) -> Vec<Card> {
        if self.hand.is_empty() {
            return Vec::new();
        }
        let removed = self.hand.take_all();
        log::debug!("cleared {} cards from the hand", removed.len());

        events.notify(&Event::HandCleared(removed.iter().map(|c| c.id()).collect()));
        events.notify(&Event::HandCategoryChanged(None));
        removed
    }

    /// Drop every supply card. Publishes `SupplyCountChanged(0)` if anything was removed.
    pub fn clear_supply(&mut self, events: &mut impl Listener) {
        if self.supply.is_empty() {
            return;
        }
        self.supply.clear();
        events.notify(&Event::SupplyCountChanged(0));
    }

    pub fn remaining_supply_count(&self) -> usize {
        self.supply.len()
    }

    /// Supply cards ordered by id.
    pub fn supply(&self) -> impl Iterator<Item = &Card> + '_ {
        self.supply.values()
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn is_hand_full(&self) -> bool {
        self.hand.is_full()
    }

    /// Category of the current hand contents, recomputed on every call.
    pub fn current_category(&self) -> Option<HandCategory> {
        evaluate(&self.hand)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.supply.contains_key(&id) || self.hand.contains(id)
    }

    pub fn in_supply(&self, id: CardId) -> bool {
        self.supply.contains_key(&id)
    }
}

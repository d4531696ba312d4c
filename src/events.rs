//! Typed notifications published by the card slots, the score keeper and the
//! level plan, and the listener trait the presentation side implements.

use crate::cards::CardId;
use crate::evaluator::HandCategory;

/// Everything the core can announce. Payloads carry the state *after* the change.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Event {
    /// The hand changed; `None` once it is empty again.
    HandCategoryChanged(Option<HandCategory>),
    /// The hand just reached five cards.
    HandFilled(HandCategory),
    /// The hand was emptied; these cards left play.
    HandCleared(Vec<CardId>),
    SupplyCountChanged(usize),
    /// The last supply card was taken.
    SupplyExhausted,
    ScoreChanged(u64),
    BestScoreChanged(u64),
    /// A level finished with more to come; the round score starts over.
    RoundReset,
    /// The final level finished.
    RoundEnded,
}

/// Receiver of events, called synchronously in publication order.
pub trait Listener {
    fn notify(&mut self, event: &Event);
}

impl<L: Listener + ?Sized> Listener for &mut L {
    fn notify(&mut self, event: &Event) {
        (**self).notify(event);
    }
}

impl<L: Listener + ?Sized> Listener for Box<L> {
    fn notify(&mut self, event: &Event) {
        (**self).notify(event);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ignore;

impl Listener for Ignore {
    fn notify(&mut self, _event: &Event) {}
}

/// Records every event in order; handy for hosts that poll and for tests.
///
/// ```
/// use poker_hands::events::{Event, EventLog, Listener};
///
/// let mut log = EventLog::default();
/// log.notify(&Event::SupplyExhausted);
/// assert_eq!(log.events(), &[Event::SupplyExhausted]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Hand back what was recorded and start over.
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl Listener for EventLog {
    fn notify(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

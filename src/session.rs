//! Wires the card slots, scoring, the level plan and the clock together and
//! routes events between them.

use crate::cards::CardId;
use crate::collection::CardCollection;
use crate::deck::Deck;
use crate::events::{Event, EventLog, Listener};
use crate::level::Levels;
use crate::scheduler::{Scheduler, Task, TimerHandle};
use crate::score::{ScoreKeeper, ScoreTable};
use crate::store::PersistentStore;
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long a filled hand stays on the table before it is cleared.
    pub clear_delay: Duration,
    pub final_level: u32,
    pub score_table: ScoreTable,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { clear_delay: Duration::from_secs(1), final_level: 2, score_table: ScoreTable::standard() }
    }
}

/// One game from the first deal to game over.
///
/// Every event goes to the listener first and is then routed: `HandFilled`
/// scores the hand and schedules a clear, `SupplyExhausted` asks the level
/// plan what comes next, `RoundReset` and `RoundEnded` go to the score
/// keeper. Follow-up events are queued, so the listener sees one total order.
///
/// ```
/// use poker_hands::events::EventLog;
/// use poker_hands::scheduler::ManualScheduler;
/// use poker_hands::session::{Session, SessionConfig};
/// use poker_hands::store::MemoryStore;
///
/// let mut session = Session::new(
///     SessionConfig::default(),
///     MemoryStore::new(),
///     ManualScheduler::new(),
///     EventLog::default(),
/// );
/// session.deal_level(7);
/// assert_eq!(session.collection().remaining_supply_count(), 52);
/// ```
#[derive(Debug)]
pub struct Session<S, C, L> {
    clear_delay: Duration,
    collection: CardCollection,
    score: ScoreKeeper<S>,
    levels: Levels,
    scheduler: C,
    listener: L,
    pending_clear: Option<TimerHandle>,
}

impl<S, C, L> Session<S, C, L>
where
    S: PersistentStore,
    C: Scheduler,
    L: Listener,
{
    pub fn new(config: SessionConfig, store: S, scheduler: C, listener: L) -> Self {
        Self {
            clear_delay: config.clear_delay,
            collection: CardCollection::new(),
            score: ScoreKeeper::new(config.score_table, store),
            levels: Levels::new(config.final_level),
            scheduler,
            listener,
            pending_clear: None,
        }
    }

    /// Replace the supply with every card of `deck`. A hand left over from
    /// the previous deal is cleared first.
    pub fn deal(&mut self, deck: Deck) {
        let mut queue = EventLog::default();
        self.cancel_pending_clear();
        self.collection.clear_hand(&mut queue);
        self.collection.clear_supply(&mut queue);

        let dealt = deck.len();
        for card in deck {
            self.collection.add_to_supply(card, &mut queue);
        }
        log::info!("dealt {dealt} cards for level {}", self.levels.current());
        self.dispatch(queue);
    }

    /// Shuffle and deal the decks of the current level.
    pub fn deal_level(&mut self, seed: u64) {
        let mut deck = Deck::with_decks(Levels::decks_for_level(self.levels.current()));
        deck.shuffle_seeded(seed);
        self.deal(deck);
    }

    /// Move a supply card into the hand. Returns `false` if the move was refused.
    pub fn select(&mut self, id: CardId) -> bool {
        let mut queue = EventLog::default();
        let moved = self.collection.move_to_hand(id, &mut queue);
        self.dispatch(queue);
        moved
    }

    /// Clear the hand now. A clear that was already scheduled is dropped.
    pub fn clear_hand(&mut self) {
        self.cancel_pending_clear();
        self.run_clear();
    }

    /// Advance the clock by `elapsed` and run whatever came due.
    pub fn tick(&mut self, elapsed: Duration) {
        for (handle, task) in self.scheduler.advance(elapsed) {
            if self.pending_clear == Some(handle) {
                self.pending_clear = None;
            }
            match task {
                Task::ClearHand => self.run_clear(),
            }
        }
    }

    /// Drop scheduled work. Call before discarding the session.
    pub fn teardown(&mut self) {
        self.cancel_pending_clear();
    }

    pub fn collection(&self) -> &CardCollection {
        &self.collection
    }

    pub fn score(&self) -> &ScoreKeeper<S> {
        &self.score
    }

    pub fn levels(&self) -> &Levels {
        &self.levels
    }

    pub fn scheduler(&self) -> &C {
        &self.scheduler
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn is_game_over(&self) -> bool {
        self.levels.is_game_over()
    }

    pub fn has_pending_clear(&self) -> bool {
        self.pending_clear.is_some()
    }

    fn run_clear(&mut self) {
        let mut queue = EventLog::default();
        self.collection.clear_hand(&mut queue);
        self.dispatch(queue);
    }

    fn cancel_pending_clear(&mut self) {
        if let Some(handle) = self.pending_clear.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn schedule_clear(&mut self) {
        self.cancel_pending_clear();
        let handle = self.scheduler.schedule(self.clear_delay, Task::ClearHand);
        log::debug!("hand clear scheduled in {:?}", self.clear_delay);
        self.pending_clear = Some(handle);
    }

    fn dispatch(&mut self, mut published: EventLog) {
        let mut queue: VecDeque<Event> = published.drain().into();
        while let Some(event) = queue.pop_front() {
            self.listener.notify(&event);

            let mut follow_ups = EventLog::default();
            match &event {
                Event::HandFilled(_) => {
                    self.score.handle(&event, &mut follow_ups);
                    self.schedule_clear();
                }
                Event::SupplyExhausted => {
                    let next = self.levels.on_supply_exhausted();
                    follow_ups.notify(&next);
                }
                Event::RoundReset | Event::RoundEnded => self.score.handle(&event, &mut follow_ups),
                _ => {}
            }
            queue.extend(follow_ups.drain());
        }
    }
}

//! poker-hands: card-selection poker scoring core
//!
//! Goals:
//! - Deal one or more shuffled decks into a supply, pick up to five cards into a hand
//! - Classify the hand as it grows, including the multi-deck five-of-a-kind categories
//! - Score filled hands from a table and keep a persisted best score
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: classify a hand
//! ```
//! use poker_hands::cards::cards_from_str;
//! use poker_hands::evaluator::{evaluate_cards, HandCategory};
//!
//! let cards = cards_from_str("Ah 2h 3h 4h 5h").unwrap();
//! assert_eq!(evaluate_cards(&cards).unwrap(), Some(HandCategory::StraightFlush));
//! ```
//!
//! ## Quick start: play a hand
//! ```
//! use poker_hands::cards::cards_from_str;
//! use poker_hands::deck::Deck;
//! use poker_hands::events::{Event, EventLog};
//! use poker_hands::scheduler::ManualScheduler;
//! use poker_hands::session::{Session, SessionConfig};
//! use poker_hands::store::MemoryStore;
//! use std::time::Duration;
//!
//! let mut session = Session::new(
//!     SessionConfig::default(),
//!     MemoryStore::new(),
//!     ManualScheduler::new(),
//!     EventLog::default(),
//! );
//! session.deal_level(1);
//! let picks: Vec<_> = session.collection().supply().take(5).map(|c| c.id()).collect();
//! for id in picks {
//!     assert!(session.select(id));
//! }
//! assert!(session.score().round_score() > 0);
//!
//! session.tick(Duration::from_secs(1));
//! assert!(session.collection().hand().is_empty());
//! assert_eq!(session.listener().count(|e| matches!(e, Event::HandCleared(_))), 1);
//! ```
//!
//! ## Autoplay
//! Run a seeded headless game with:
//! ```sh
//! RUST_LOG=info cargo run --bin poker-hands -- --seed 7
//! ```

pub mod cards;
pub mod collection;
pub mod deck;
pub mod evaluator;
pub mod events;
pub mod hand;
pub mod level;
pub mod scheduler;
pub mod score;
pub mod session;
pub mod store;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

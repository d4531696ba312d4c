use crate::cards::{Card, CardId, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const CARDS_PER_DECK: usize = 52;

/// One or more 52-card decks shuffled together. Every card gets its own id,
/// so identical faces from different decks stay distinguishable.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self::with_decks(1)
    }

    /// `n` full decks, unshuffled, ids `0..52 * n`.
    ///
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// assert_eq!(Deck::with_decks(2).len(), 104);
    /// assert!(Deck::with_decks(0).is_empty());
    /// ```
    pub fn with_decks(n: usize) -> Self {
        let mut cards = Vec::with_capacity(CARDS_PER_DECK * n);
        let mut next_id = 0u32;
        for _ in 0..n {
            for s in Suit::ALL {
                for r in Rank::ALL {
                    cards.push(Card::new(CardId::new(next_id), r, s));
                    next_id += 1;
                }
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw up to `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw()).collect()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

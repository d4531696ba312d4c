//! Hand scoring: the category → points table and the keeper that turns
//! filled hands into a round score and a persisted best score.

use crate::evaluator::HandCategory;
use crate::events::{Event, Listener};
use crate::store::PersistentStore;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

/// Store key of the best score.
pub const BEST_SCORE_KEY: &str = "PokerGameTotalScore";

/// Points for one category: `base_points * multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreEntry {
    pub base_points: u64,
    pub multiplier: u64,
}

impl ScoreEntry {
    pub const fn new(base_points: u64, multiplier: u64) -> Self {
        Self { base_points, multiplier }
    }

    /// Saturates at `u64::MAX`.
    pub const fn points(self) -> u64 {
        self.base_points.saturating_mul(self.multiplier)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreTableError {
    #[error("score table is empty")]
    Empty,
    #[error("missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("line {line}: expected {expected} fields, got {got}")]
    RowWidth { line: usize, expected: usize, got: usize },
    #[error("line {line}: column '{column}' is not a number: '{value}'")]
    NotANumber { line: usize, column: &'static str, value: String },
    #[error("line {line}: duplicate id {id}")]
    DuplicateId { line: usize, id: i64 },
}

const COL_ID: &str = "Id";
const COL_HAND_TYPE: &str = "HandType";
const COL_SCORE: &str = "Score";
const COL_MULTIPLIER: &str = "Multiplier";

/// Lookup of score entries by category. Categories without an entry score nothing.
///
/// Text form: a header row naming the columns, an optional description row,
/// then one row per entry. `Id`, `HandType`, `Score` and `Multiplier` are
/// required; other columns are ignored. Rows naming an unknown hand type are
/// skipped, and only the first row for each category counts.
///
/// ```
/// use poker_hands::evaluator::HandCategory;
/// use poker_hands::score::ScoreTable;
///
/// let table: ScoreTable = "Id,HandType,Score,Multiplier\n\
///                          id,category,base,mult\n\
///                          1,OnePair,10,2\n"
///     .parse()
///     .unwrap();
/// assert_eq!(table.points(HandCategory::OnePair), Some(20));
/// assert_eq!(table.points(HandCategory::Flush), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    entries: HashMap<HandCategory, ScoreEntry>,
}

impl ScoreTable {
    /// Built-in table covering every category.
    pub fn standard() -> Self {
        use HandCategory::*;
        let rows = [
            (HighCard, 5, 1),
            (OnePair, 10, 2),
            (TwoPair, 20, 2),
            (ThreeOfAKind, 30, 3),
            (Straight, 30, 4),
            (Flush, 35, 4),
            (FullHouse, 40, 4),
            (FourOfAKind, 60, 7),
            (StraightFlush, 100, 8),
            (FiveOfAKind, 120, 12),
            (FlushFullHouse, 140, 14),
            (FlushFiveOfAKind, 160, 16),
        ];
        rows.into_iter().map(|(c, base, mult)| (c, ScoreEntry::new(base, mult))).collect()
    }

    pub fn get(&self, category: HandCategory) -> Option<ScoreEntry> {
        self.entries.get(&category).copied()
    }

    pub fn points(&self, category: HandCategory) -> Option<u64> {
        self.get(category).map(ScoreEntry::points)
    }

    pub fn insert(&mut self, category: HandCategory, entry: ScoreEntry) -> Option<ScoreEntry> {
        self.entries.insert(category, entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse the delimited text form using `delimiter` between fields.
    pub fn parse_delimited(text: &str, delimiter: char) -> Result<Self, ScoreTableError> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (_, header) = lines.next().ok_or(ScoreTableError::Empty)?;
        let columns: Vec<&str> = header.split(delimiter).map(str::trim).collect();
        let index_of = |name: &'static str| {
            columns.iter().position(|c| *c == name).ok_or(ScoreTableError::MissingColumn(name))
        };
        let id_col = index_of(COL_ID)?;
        let hand_col = index_of(COL_HAND_TYPE)?;
        let score_col = index_of(COL_SCORE)?;
        let mult_col = index_of(COL_MULTIPLIER)?;

        let mut table = ScoreTable::default();
        let mut seen_ids = HashSet::new();
        let mut first_row = true;

        for (line, row) in lines {
            let fields: Vec<&str> = row.split(delimiter).map(str::trim).collect();
            // a description row may follow the header; its id cell is not a number
            let is_description = fields.get(id_col).map_or(true, |id| id.parse::<i64>().is_err());
            if std::mem::take(&mut first_row) && is_description {
                continue;
            }
            if fields.len() != columns.len() {
                return Err(ScoreTableError::RowWidth { line, expected: columns.len(), got: fields.len() });
            }

            let id = parse_number::<i64>(fields[id_col], line, COL_ID)?;
            if !seen_ids.insert(id) {
                return Err(ScoreTableError::DuplicateId { line, id });
            }
            let base_points = parse_number::<u64>(fields[score_col], line, COL_SCORE)?;
            let multiplier = parse_number::<u64>(fields[mult_col], line, COL_MULTIPLIER)?;

            let category = match HandCategory::from_str(fields[hand_col]) {
                Ok(category) => category,
                Err(err) => {
                    log::warn!("line {line}: {err}, row ignored");
                    continue;
                }
            };
            // first row for a category wins
            if table.get(category).is_some() {
                log::warn!("line {line}: {category} already has a score entry, row ignored");
                continue;
            }
            table.insert(category, ScoreEntry::new(base_points, multiplier));
        }

        Ok(table)
    }
}

fn parse_number<T: FromStr>(value: &str, line: usize, column: &'static str) -> Result<T, ScoreTableError> {
    value.parse().map_err(|_| ScoreTableError::NotANumber { line, column, value: value.to_string() })
}

impl FromStr for ScoreTable {
    type Err = ScoreTableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScoreTable::parse_delimited(s, ',')
    }
}

impl FromIterator<(HandCategory, ScoreEntry)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (HandCategory, ScoreEntry)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Accumulates the round score from filled hands and keeps the best score
/// in a [`PersistentStore`].
#[derive(Debug)]
pub struct ScoreKeeper<S> {
    table: ScoreTable,
    store: S,
    round_score: u64,
    best_score: u64,
}

impl<S: PersistentStore> ScoreKeeper<S> {
    /// Loads the best score from `store`; a missing or negative value reads as 0.
    pub fn new(table: ScoreTable, store: S) -> Self {
        let best_score = u64::try_from(store.get_int(BEST_SCORE_KEY, 0)).unwrap_or(0);
        log::debug!("loaded best score {best_score}");
        Self { table, store, round_score: 0, best_score }
    }

    pub fn round_score(&self) -> u64 {
        self.round_score
    }

    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// React to the events the keeper subscribes to; everything else is ignored.
    pub fn handle(&mut self, event: &Event, events: &mut impl Listener) {
        match event {
            Event::HandFilled(category) => {
                self.on_hand_filled(*category, events);
            }
            Event::RoundEnded => {
                self.on_round_ended(events);
            }
            Event::RoundReset => self.on_round_reset(),
            _ => {}
        }
    }

    /// Award the table's points for `category`. Returns the points added, if any.
    pub fn on_hand_filled(&mut self, category: HandCategory, events: &mut impl Listener) -> Option<u64> {
        let Some(points) = self.table.points(category) else {
            log::debug!("no score entry for {category}");
            return None;
        };
        self.round_score = self.round_score.saturating_add(points);
        log::info!("{category} scores {points}, round score {}", self.round_score);
        events.notify(&Event::ScoreChanged(self.round_score));
        Some(points)
    }

    /// Raise and persist the best score if this round beat it. Returns whether it did.
    pub fn on_round_ended(&mut self, events: &mut impl Listener) -> bool {
        if self.round_score <= self.best_score {
            return false;
        }
        self.best_score = self.round_score;
        log::info!("new best score {}", self.best_score);
        events.notify(&Event::BestScoreChanged(self.best_score));

        let stored = i64::try_from(self.best_score).unwrap_or(i64::MAX);
        self.store.set_int(BEST_SCORE_KEY, stored);
        self.store.flush();
        true
    }

    pub fn on_round_reset(&mut self) {
        log::debug!("round score {} reset", self.round_score);
        self.round_score = 0;
    }
}

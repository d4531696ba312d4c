use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed analysis of a hand of up to five cards.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    pub len: usize,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let ranks: Vec<Rank> = cards.iter().map(|c| c.rank()).collect();

        let mut rank_counts = [0u8; 14];
        for rank in &ranks {
            rank_counts[rank.value() as usize] += 1;
        }

        let rank_groups = RankGroups::from_counts(&rank_counts);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { len: cards.len(), rank_groups, suit_info, straight_info }
    }

    /// Five cards of one suit.
    pub fn is_flush(&self) -> bool {
        self.len == 5 && self.suit_info.is_single_suit()
    }
}

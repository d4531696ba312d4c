use super::hand_analysis::HandAnalysis;
use crate::evaluator::HandCategory;

/// Strategy pattern: each detector recognises one category.
pub trait CategoryDetector {
    fn category(&self) -> HandCategory;
    fn detect(&self, analysis: &HandAnalysis) -> bool;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Flush Five of a Kind: five identical faces, only possible with five decks
pub struct FlushFiveOfAKindDetector;

impl CategoryDetector for FlushFiveOfAKindDetector {
    fn category(&self) -> HandCategory {
        HandCategory::FlushFiveOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush() && analysis.rank_groups.max_count() == 5
    }
}

/// Flush Full House: a full house in a single suit
pub struct FlushFullHouseDetector;

impl CategoryDetector for FlushFullHouseDetector {
    fn category(&self) -> HandCategory {
        HandCategory::FlushFullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush() && analysis.rank_groups.is_full_house()
    }
}

/// Five of a Kind: five cards of the same rank
pub struct FiveOfAKindDetector;

impl CategoryDetector for FiveOfAKindDetector {
    fn category(&self) -> HandCategory {
        HandCategory::FiveOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.max_count() == 5
    }
}

/// Straight Flush: five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> HandCategory {
        HandCategory::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush() && analysis.straight_info.is_straight
    }
}

/// Four of a Kind: four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> HandCategory {
        HandCategory::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.max_count() >= 4
    }
}

/// Full House: three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> HandCategory {
        HandCategory::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.len == 5 && analysis.rank_groups.is_full_house()
    }
}

/// Flush: five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> HandCategory {
        HandCategory::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.is_flush()
    }
}

/// Straight: five consecutive ranks, ace low or ace high
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> HandCategory {
        HandCategory::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.straight_info.is_straight
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> HandCategory {
        HandCategory::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.max_count() >= 3
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> HandCategory {
        HandCategory::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.ranks_with_at_least(2) >= 2
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> HandCategory {
        HandCategory::OnePair
    }

    fn detect(&self, analysis: &HandAnalysis) -> bool {
        analysis.rank_groups.max_count() >= 2
    }
}

/// High Card: nothing else matched
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> HandCategory {
        HandCategory::HighCard
    }

    fn detect(&self, _analysis: &HandAnalysis) -> bool {
        true
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 12] = [
    &FlushFiveOfAKindDetector,
    &FlushFullHouseDetector,
    &FiveOfAKindDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

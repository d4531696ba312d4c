use crate::cards::Rank;

const ACE_HIGH: [u8; 5] = [1, 10, 11, 12, 13];

/// Whether five ranks form a straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
}

impl StraightInfo {
    const NONE: StraightInfo = StraightInfo { is_straight: false };

    /// Detect a straight in exactly five ranks, in any order.
    ///
    /// Ace counts as 1, so A-2-3-4-5 is an ordinary run; 10-J-Q-K-A is
    /// recognised as the one run where the Ace plays high.
    pub fn detect(ranks: &[Rank]) -> Self {
        if ranks.len() != 5 {
            return Self::NONE;
        }
        let mut values: Vec<u8> = ranks.iter().map(|r| r.value()).collect();
        values.sort_unstable();

        if values == ACE_HIGH {
            return StraightInfo { is_straight: true };
        }

        if values.windows(2).all(|w| w[1] == w[0] + 1) {
            return StraightInfo { is_straight: true };
        }

        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_straight() {
        let info = StraightInfo::detect(&[Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine]);
        assert!(info.is_straight);
    }

    #[test]
    fn ace_high() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]);
        assert!(info.is_straight);
    }

    #[test]
    fn ace_low() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        assert!(info.is_straight);
    }

    #[test]
    fn no_wraparound() {
        // J-Q-K-A-2 is not a straight
        let info = StraightInfo::detect(&[Rank::Jack, Rank::Queen, Rank::King, Rank::Ace, Rank::Two]);
        assert!(!info.is_straight);
    }

    #[test]
    fn pair_breaks_the_run() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen, Rank::Jack]);
        assert!(!info.is_straight);
    }

    #[test]
    fn fewer_than_five_is_never_a_straight() {
        let info = StraightInfo::detect(&[Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        assert!(!info.is_straight);
    }

    #[test]
    fn unsorted_input() {
        let info = StraightInfo::detect(&[Rank::Nine, Rank::King, Rank::Ten, Rank::Jack, Rank::Queen]);
        assert!(info.is_straight);
    }
}

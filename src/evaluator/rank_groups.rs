use crate::cards::Rank;

/// Groups ranks by their frequency in a hand, sorted by (count desc, rank desc).
///
/// Example: KKK77 groups as [(King, 3), (Seven, 2)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Create RankGroups from a rank count array indexed by rank value (1-13).
    pub fn from_counts(rank_counts: &[u8; 14]) -> Self {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter_map(|rank| {
                let count = rank_counts[rank.value() as usize];
                (count > 0).then_some((rank, count))
            })
            .collect();

        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { groups }
    }

    /// Size of the largest same-rank group; 0 for an empty hand.
    pub fn max_count(&self) -> u8 {
        self.groups.first().map_or(0, |(_, count)| *count)
    }

    /// Number of distinct ranks appearing at least `n` times.
    pub fn ranks_with_at_least(&self, n: u8) -> usize {
        self.groups.iter().filter(|(_, count)| *count >= n).count()
    }

    /// Exactly two ranks, one appearing three times and the other twice.
    pub fn is_full_house(&self) -> bool {
        matches!(self.groups.as_slice(), [(_, 3), (_, 2)])
    }

    /// Number of distinct ranks.
    #[cfg(test)]
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}

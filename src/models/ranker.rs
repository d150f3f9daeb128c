use crate::models::FrequencyTable;
use crate::types::RankedEntry;
use crate::utils::{
    sort_ranked_entries_by_comparator, sort_ranked_entries_two_pass, truncate_ranked_entries,
};
use log::debug;

/// How the ranker orders entries. Both strategies produce identical output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SortStrategy {
    /// Stable sort by token, then stable sort by frequency.
    #[default]
    TwoPassStable,
    /// One sort with a comparator over frequency and then token.
    SingleComparator,
}

impl SortStrategy {
    pub fn sort(self, entries: Vec<RankedEntry>) -> Vec<RankedEntry> {
        match self {
            SortStrategy::TwoPassStable => sort_ranked_entries_two_pass(entries),
            SortStrategy::SingleComparator => sort_ranked_entries_by_comparator(entries),
        }
    }
}

/// Orders a `FrequencyTable` by frequency (descending), then token
/// (ascending).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ranker {
    pub sort_strategy: SortStrategy,
}

impl Ranker {
    pub fn new(sort_strategy: SortStrategy) -> Self {
        Self { sort_strategy }
    }

    /// Ranks every entry in `table`. Each distinct token appears exactly once.
    ///
    /// ```
    /// use wordrank::{FrequencyTable, Ranker};
    ///
    /// let table: FrequencyTable = ["b", "a", "b", "c"].into_iter().collect();
    /// let ranked = Ranker::default().rank(table);
    ///
    /// assert_eq!(
    ///     ranked,
    ///     vec![("b".to_string(), 2), ("a".to_string(), 1), ("c".to_string(), 1)]
    /// );
    /// ```
    pub fn rank(&self, table: FrequencyTable) -> Vec<RankedEntry> {
        // Map iteration order is arbitrary; the sort fully determines the output
        let entries: Vec<RankedEntry> = table.into_iter().collect();

        debug!(
            "Ranking {} entries with {:?}",
            entries.len(),
            self.sort_strategy
        );

        self.sort_strategy.sort(entries)
    }

    /// Ranks `table` and keeps the `top_n` leading entries. Zero or negative
    /// `top_n` yields nothing.
    pub fn top_n(&self, table: FrequencyTable, top_n: i64) -> Vec<RankedEntry> {
        truncate_ranked_entries(self.rank(table), top_n)
    }
}

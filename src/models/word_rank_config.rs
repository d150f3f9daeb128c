use crate::models::{Normalizer, SortStrategy};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WordRankConfig {
    /// Number of leading entries to keep; zero or negative keeps none.
    pub top_n: i64,
    pub sort_strategy: SortStrategy,
    pub normalizer: Normalizer,
    /// Counting runs on this many scoped threads when greater than 1.
    pub shard_count: usize,
}

use crate::constants::DEFAULT_TOP_N;
use crate::models::{Normalizer, SortStrategy, WordRankConfig};

pub const DEFAULT_WORD_RANK_CONFIG: WordRankConfig = WordRankConfig {
    top_n: DEFAULT_TOP_N,
    sort_strategy: SortStrategy::TwoPassStable,
    normalizer: Normalizer::word_count_parser(),
    shard_count: 1,
};

mod config;
pub use config::DEFAULT_WORD_RANK_CONFIG;
mod constants;
pub use constants::{DEFAULT_TOP_N, MAX_SHARD_COUNT, STOP_WORDS};
pub mod models;
pub use models::{
    DocumentStats, Error, FrequencyTable, Normalizer, Ranker, ReportFormat, Reporter,
    SortStrategy, Tokens, WordRankConfig,
};
pub mod types;
mod utils;
pub use types::{RankedEntry, Token, TokenFrequency, TokenFrequencyMap, TokenRef};
pub use utils::{
    count_token_frequencies_sharded, ranked_entry_limit, read_text_from_path,
    read_text_from_reader, sort_ranked_entries_by_comparator, sort_ranked_entries_two_pass,
    split_text_into_shards, truncate_ranked_entries,
};
use log::info;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Ranks the most frequent words in `text`, keeping the `top_n` leading
/// entries.
///
/// ```
/// use wordrank::rank_words_in_text;
///
/// let ranked = rank_words_in_text("the Cat sat on the MAT. The cat ran.", 3);
///
/// assert_eq!(
///     ranked,
///     vec![
///         ("the".to_string(), 3),
///         ("cat".to_string(), 2),
///         ("mat".to_string(), 1)
///     ]
/// );
/// ```
pub fn rank_words_in_text(text: &str, top_n: i64) -> Vec<RankedEntry> {
    let config = WordRankConfig {
        top_n,
        ..DEFAULT_WORD_RANK_CONFIG
    };

    rank_words_in_text_with_custom_config(&config, text)
}

pub fn rank_words_in_text_with_custom_config(
    config: &WordRankConfig,
    text: &str,
) -> Vec<RankedEntry> {
    info!("Tokenizing and counting...");
    let frequency_table = if config.shard_count > 1 {
        count_token_frequencies_sharded(&config.normalizer, text, config.shard_count)
    } else {
        FrequencyTable::from_tokens(config.normalizer.tokens(text))
    };

    info!("Ranking {} distinct tokens...", frequency_table.len());
    Ranker::new(config.sort_strategy).top_n(frequency_table, config.top_n)
}

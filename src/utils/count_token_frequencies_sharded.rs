use crate::constants::MAX_SHARD_COUNT;
use crate::models::{FrequencyTable, Normalizer};
use crate::utils::split_text_into_shards;
use log::debug;
use std::num::NonZeroUsize;
use std::thread;

/// Normalizes and counts `text` across up to `shard_count` scoped threads,
/// then sums the per-shard tables.
///
/// The thread count never exceeds the available parallelism or
/// `MAX_SHARD_COUNT`, whatever `shard_count` asks for. Shards are cut only in
/// front of characters which can never be part of a token, so the result is
/// identical to counting the whole text at once.
pub fn count_token_frequencies_sharded(
    normalizer: &Normalizer,
    text: &str,
    shard_count: usize,
) -> FrequencyTable {
    let parallelism = thread::available_parallelism().map_or(1, NonZeroUsize::get);
    let shard_count = shard_count.clamp(1, parallelism.clamp(1, MAX_SHARD_COUNT));

    let shards = split_text_into_shards(text, shard_count);
    let normalizer = *normalizer;

    debug!("Counting tokens across {} shards", shards.len());

    if shards.len() <= 1 {
        return FrequencyTable::from_tokens(normalizer.tokens(text));
    }

    thread::scope(|scope| {
        let handles: Vec<_> = shards
            .into_iter()
            .map(|shard| scope.spawn(move || FrequencyTable::from_tokens(normalizer.tokens(shard))))
            .collect();

        handles
            .into_iter()
            .fold(FrequencyTable::new(), |mut merged, handle| {
                match handle.join() {
                    Ok(shard_table) => merged.merge(shard_table),
                    Err(payload) => std::panic::resume_unwind(payload),
                }
                merged
            })
    })
}

use crate::types::RankedEntry;

/// Number of entries kept for a requested `top_n`, before capping at the
/// number of entries available. Zero or negative `top_n` keeps none.
pub fn ranked_entry_limit(top_n: i64) -> usize {
    if top_n <= 0 {
        0
    } else {
        usize::try_from(top_n).unwrap_or(usize::MAX)
    }
}

/// Keeps at most `top_n` leading entries.
///
/// Zero or negative `top_n` yields an empty vector. A `top_n` beyond the
/// number of entries returns them all, without padding.
pub fn truncate_ranked_entries(mut entries: Vec<RankedEntry>, top_n: i64) -> Vec<RankedEntry> {
    entries.truncate(ranked_entry_limit(top_n));

    entries
}

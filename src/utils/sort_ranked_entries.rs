use crate::types::RankedEntry;

/// Sorts ranked entries by frequency (descending), breaking ties by token
/// (ascending), using two stable sorts.
///
/// The first pass orders by the tie-break key alone. The second pass orders
/// by frequency; because `sort_by` is stable, entries with equal frequency
/// keep the alphabetical order established by the first pass.
///
/// ```rust
/// use wordrank::sort_ranked_entries_two_pass;
///
/// let entries = vec![
///     ("sat".to_string(), 1),
///     ("the".to_string(), 3),
///     ("mat".to_string(), 1),
/// ];
///
/// assert_eq!(
///     sort_ranked_entries_two_pass(entries),
///     vec![
///         ("the".to_string(), 3),
///         ("mat".to_string(), 1),
///         ("sat".to_string(), 1),
///     ]
/// );
/// ```
pub fn sort_ranked_entries_two_pass(mut entries: Vec<RankedEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    entries
}

/// Same ordering as [`sort_ranked_entries_two_pass`], expressed as a single
/// comparator over both keys.
pub fn sort_ranked_entries_by_comparator(mut entries: Vec<RankedEntry>) -> Vec<RankedEntry> {
    // Both keys together form a total order, so stability is irrelevant here
    entries.sort_unstable_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by token (ascending)
    });

    entries
}

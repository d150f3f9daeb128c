/// Number of ranked entries reported when no explicit count is requested.
pub const DEFAULT_TOP_N: i64 = 10;

/// Upper bound on the number of threads used for sharded counting.
pub const MAX_SHARD_COUNT: usize = 64;

/// Common English function words, used only when a `Normalizer` opts into
/// stop word filtering.
///
/// Must stay sorted; lookups use binary search.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has", "have", "he",
    "her", "him", "his", "i", "if", "in", "into", "is", "it", "its", "me", "my", "no", "not", "of",
    "on", "or", "our", "she", "so", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "those", "to", "too", "up", "us", "was", "we", "were", "what",
    "when", "which", "who", "will", "with", "would", "you", "your",
];

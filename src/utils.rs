pub mod count_token_frequencies_sharded;
pub use count_token_frequencies_sharded::count_token_frequencies_sharded;

pub mod read_text;
pub use read_text::{read_text_from_path, read_text_from_reader};

pub mod sort_ranked_entries;
pub use sort_ranked_entries::{sort_ranked_entries_by_comparator, sort_ranked_entries_two_pass};

pub mod split_text_into_shards;
pub use split_text_into_shards::split_text_into_shards;

pub mod truncate_ranked_entries;
pub use truncate_ranked_entries::{ranked_entry_limit, truncate_ranked_entries};

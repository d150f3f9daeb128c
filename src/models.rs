pub mod document_stats;
pub use document_stats::DocumentStats;

pub mod error;
pub use error::Error;

pub mod frequency_table;
pub use frequency_table::FrequencyTable;

pub mod normalizer;
pub use normalizer::{Normalizer, Tokens};

pub mod ranker;
pub use ranker::{Ranker, SortStrategy};

pub mod reporter;
pub use reporter::{ReportFormat, Reporter};

pub mod word_rank_config;
pub use word_rank_config::WordRankConfig;

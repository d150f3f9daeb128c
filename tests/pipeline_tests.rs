use std::fs::read_dir;
use std::path::Path;
use test_utils::constants::TEST_FILES_DIRECTORY;
use test_utils::{generate_words, run_test_for_file};
use wordrank::{
    rank_words_in_text, rank_words_in_text_with_custom_config, Normalizer, SortStrategy,
    WordRankConfig, DEFAULT_WORD_RANK_CONFIG,
};

#[cfg(test)]
mod pipeline_tests {
    use super::*;

    #[test]
    fn test_end_to_end_example() {
        let ranked = rank_words_in_text("the Cat sat on the MAT. The cat ran.", 3);

        assert_eq!(
            ranked,
            vec![
                ("the".to_string(), 3),
                ("cat".to_string(), 2),
                ("mat".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        for top_n in [-1, 0, 1, 10] {
            assert!(rank_words_in_text("", top_n).is_empty());
        }
    }

    #[test]
    fn test_all_separator_input() {
        assert!(rank_words_in_text("!!! ,,, ---", 10).is_empty());
    }

    #[test]
    fn test_default_config_reports_ten() {
        let text = generate_words(1, 1_000, 200).join(" ");
        let ranked = rank_words_in_text_with_custom_config(&DEFAULT_WORD_RANK_CONFIG, &text);

        assert_eq!(ranked.len(), 10);
    }

    #[test]
    fn test_strategies_agree_end_to_end() {
        let text = generate_words(9, 5_000, 300).join(", ");

        let two_pass = rank_words_in_text_with_custom_config(
            &WordRankConfig {
                top_n: i64::MAX,
                sort_strategy: SortStrategy::TwoPassStable,
                normalizer: Normalizer::word_count_parser(),
                shard_count: 1,
            },
            &text,
        );
        let comparator = rank_words_in_text_with_custom_config(
            &WordRankConfig {
                top_n: i64::MAX,
                sort_strategy: SortStrategy::SingleComparator,
                normalizer: Normalizer::word_count_parser(),
                shard_count: 1,
            },
            &text,
        );

        assert_eq!(two_pass, comparator);
    }

    #[test]
    fn test_threaded_counting_matches() {
        let text = generate_words(4, 3_000, 120).join(". ");
        let config = WordRankConfig {
            top_n: 25,
            shard_count: 6,
            ..DEFAULT_WORD_RANK_CONFIG
        };

        assert_eq!(
            rank_words_in_text_with_custom_config(&config, &text),
            rank_words_in_text(&text, 25)
        );
    }

    #[test]
    fn test_any_shard_count_is_accepted() {
        let text = "the Cat sat on the MAT. The cat ran.";

        for shard_count in [0, 2, usize::MAX] {
            let config = WordRankConfig {
                top_n: 3,
                shard_count,
                ..DEFAULT_WORD_RANK_CONFIG
            };

            assert_eq!(
                rank_words_in_text_with_custom_config(&config, text),
                vec![
                    ("the".to_string(), 3),
                    ("cat".to_string(), 2),
                    ("mat".to_string(), 1)
                ],
                "shard_count = {}",
                shard_count
            );
        }
    }

    #[test]
    fn test_content_words_config() {
        let config = WordRankConfig {
            top_n: 2,
            normalizer: Normalizer::content_word_parser(),
            ..DEFAULT_WORD_RANK_CONFIG
        };

        let ranked =
            rank_words_in_text_with_custom_config(&config, "the Cat sat on the MAT. The cat ran.");

        assert_eq!(
            ranked,
            vec![("cat".to_string(), 2), ("mat".to_string(), 1)]
        );
    }

    #[test]
    fn test_ranking_from_fixture_files() {
        let files = read_dir(TEST_FILES_DIRECTORY).expect("Failed to read test files directory");

        let mut file_count = 0;
        for file in files {
            let file_path = file.expect("Failed to read file").path();

            if file_path.is_file() {
                run_test_for_file(Path::new(&file_path), rank_words_in_text);
                file_count += 1;
            }
        }

        assert!(file_count > 0, "No fixture files found");
    }
}
